use clap::Parser;
use simplelist::repl;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

/// Interactive doubly-linked list shell.
#[derive(Parser)]
#[command(name = "simplelist", version)]
struct Args {
    /// Read commands from a file instead of stdin
    #[arg(long)]
    script: Option<PathBuf>,

    /// Suppress the menu between commands
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let stdout = io::stdout();
    let mut output = stdout.lock();

    match args.script {
        Some(path) => {
            let mut input = BufReader::new(File::open(path)?);
            repl::run(&mut input, &mut output, !args.quiet)?;
        }
        None => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            repl::run(&mut input, &mut output, !args.quiet)?;
        }
    }

    Ok(())
}
