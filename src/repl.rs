//! Menu-driven command loop over a [`List`].
//!
//! The loop is generic over its reader and writer so sessions can be
//! scripted in tests; the CLI binary wires it to stdin/stdout.

use std::io::{self, BufRead, Write};

use crate::list::List;

const MENU: &str = "Choose: \n\
    1.Create\n\
    2.Find\n\
    3.Display\n\
    4.Insert at the beginning\n\
    5.Insert at the end\n\
    6.Insert at specified position\n\
    7.Delete from beginning\n\
    8.Delete from the end\n\
    9.Delete from specified position\n\
    10.Exit\n";

/// Runs the command loop until the exit choice or EOF.
///
/// One list operation per iteration. Unrecognized choices print an error
/// and the loop continues; only choice 10 (or end of input) terminates it.
pub fn run<R: BufRead, W: Write>(input: &mut R, output: &mut W, show_menu: bool) -> io::Result<()> {
    let mut list = List::new();
    loop {
        if show_menu {
            write!(output, "{MENU}")?;
        }
        let Some(choice) = prompt_int(input, output, "Enter your choice: ")? else {
            break;
        };
        match choice {
            1 => {
                let Some(value) = prompt_int(input, output, "Enter the value: ")? else {
                    break;
                };
                list.create(value);
            }
            2 => {
                let Some(position) = prompt_position(input, output)? else {
                    break;
                };
                match list.find(position) {
                    Some(value) => write!(
                        output,
                        "\n//-----------------------\n// Value: {}\n//-----------------------\n",
                        value
                    )?,
                    None => write!(
                        output,
                        "\n//-----------------------\n// Value not found in position!\n//-----------------------\n"
                    )?,
                }
            }
            3 => {
                if let Some(snapshot) = list.render() {
                    write!(output, "{snapshot}")?;
                }
            }
            4 => {
                let Some(value) = prompt_int(input, output, "Enter the value: ")? else {
                    break;
                };
                list.insert_start(value);
            }
            5 => {
                let Some(value) = prompt_int(input, output, "Enter the value: ")? else {
                    break;
                };
                list.insert_end(value);
            }
            6 => {
                let Some(value) = prompt_int(input, output, "Enter the value: ")? else {
                    break;
                };
                let Some(position) = prompt_position(input, output)? else {
                    break;
                };
                list.insert_pos(value, position);
            }
            7 => {
                list.delete_start();
            }
            8 => {
                list.delete_end();
            }
            9 => {
                let Some(position) = prompt_position(input, output)? else {
                    break;
                };
                list.delete_pos(position);
            }
            10 => break,
            _ => writeln!(output, "Error: unrecognized choice {choice}")?,
        }
    }
    Ok(())
}

/// Prompts until a line parses as an integer. Returns `None` on EOF.
///
/// Malformed input re-prompts rather than aborting the loop or being
/// silently treated as zero.
fn prompt_int<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<i64>> {
    loop {
        write!(output, "{prompt}")?;
        output.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        match line.trim().parse::<i64>() {
            Ok(n) => return Ok(Some(n)),
            Err(_) => writeln!(output, "Error: expected a number, got '{}'", line.trim())?,
        }
    }
}

/// Prompts for a 0-based position; negative input re-prompts.
fn prompt_position<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<usize>> {
    loop {
        match prompt_int(input, output, "Enter the position: ")? {
            None => return Ok(None),
            Some(n) if n >= 0 => return Ok(Some(n as usize)),
            Some(n) => writeln!(output, "Error: position must be non-negative, got {n}")?,
        }
    }
}

#[cfg(test)]
mod repl_tests {
    use super::run;

    /// Drives a full session from a newline-separated script and returns
    /// everything the loop wrote.
    fn run_script(script: &str) -> String {
        let mut input = script.as_bytes();
        let mut output = Vec::new();
        run(&mut input, &mut output, false).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_scripted_build_and_display() {
        // create(5), insert_start(3), insert_end(9), insert_pos(7, 1), display
        let output = run_script("1\n5\n4\n3\n5\n9\n6\n7\n1\n3\n10\n");
        assert!(output.contains("// Values:  3  7  5  9 "));
    }

    #[test]
    fn test_find_hit_and_miss() {
        let output = run_script("1\n5\n2\n0\n2\n4\n10\n");
        assert!(output.contains("// Value: 5"));
        assert!(output.contains("// Value not found in position!"));
    }

    #[test]
    fn test_display_on_empty_list_prints_nothing() {
        let output = run_script("3\n10\n");
        assert!(!output.contains("// Values:"));
    }

    #[test]
    fn test_deletes_through_the_loop() {
        // create(1), insert_end(2), insert_end(3), delete_start, delete_end, display
        let output = run_script("1\n1\n5\n2\n5\n3\n7\n8\n3\n10\n");
        assert!(output.contains("// Values:  2 \n"));
    }

    #[test]
    fn test_unrecognized_choice_reports_error_and_continues() {
        let output = run_script("11\n1\n8\n3\n10\n");
        assert!(output.contains("Error: unrecognized choice 11"));
        assert!(output.contains("// Values:  8 "));
    }

    #[test]
    fn test_malformed_number_reprompts() {
        let output = run_script("abc\n1\nnope\n8\n3\n10\n");
        assert!(output.contains("Error: expected a number, got 'abc'"));
        assert!(output.contains("Error: expected a number, got 'nope'"));
        assert!(output.contains("// Values:  8 "));
    }

    #[test]
    fn test_negative_position_reprompts() {
        let output = run_script("1\n5\n2\n-3\n0\n10\n");
        assert!(output.contains("Error: position must be non-negative, got -3"));
        assert!(output.contains("// Value: 5"));
    }

    #[test]
    fn test_eof_terminates_cleanly() {
        let output = run_script("1\n5\n");
        assert!(output.contains("Enter your choice: "));
    }

    #[test]
    fn test_menu_printed_when_enabled() {
        let mut input = "10\n".as_bytes();
        let mut output = Vec::new();
        run(&mut input, &mut output, true).unwrap();
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("1.Create"));
        assert!(output.contains("10.Exit"));
    }
}
