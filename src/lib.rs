//! A small command-line parser for declared switches and value-bearing arguments.
//!
//! Options are named with a leading `-`. Everything after an option's name, up
//! to the next element holding a `-`, is taken as that option's values:
//!
//! ```text
//! ./prog -if ../links/h1 -h0 148.1 -a
//! ```
//!
//! Declare the options, call [Parser::parse], then [Parser::validate], then
//! query the values.

mod arg;
mod error;
mod help;

pub mod parser;
pub mod proc;

pub use arg::{Arg, Entry, Kind, Opt, Switch};
pub use error::{ColorMode, Error, ErrorContext, ErrorKind};
pub use help::Help;
pub use parser::Parser;
pub use proc::Program;
pub use std::process::ExitCode;
