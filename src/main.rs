//! simplelist: an interactive, in-memory doubly-linked list of integers.
//!
//! The [`list`] module holds the core structure: a slab of index-linked
//! nodes supporting positional insert, delete, lookup, and display. The
//! [`repl`] module wraps it in the menu-driven command loop the CLI binary
//! runs.

pub mod list;
pub mod repl;

pub use list::{List, OpStatus};
