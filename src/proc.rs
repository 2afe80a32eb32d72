use crate::error::{exit_code, paint};
use crate::parser;
use crate::parser::Parser;
use std::process::ExitCode;

pub type Result = std::result::Result<(), Box<dyn std::error::Error>>;

pub trait Program: Sized {
    /// Declares the program's switches and arguments, parses the command-line,
    /// and collects the results to define the struct's fields.
    ///
    /// The recommended order is
    /// 1. declare switches and arguments
    /// 2. `parse`
    /// 3. `validate`
    /// 4. query values
    fn interpret(parser: &mut Parser) -> parser::Result<Self>;

    /// Run the backend logic for this program.
    ///
    /// This function owns the self structure.
    fn execute(self) -> Result;
}

impl Parser {
    /// Interprets and executes program `P`, returning the exit code it finished with.
    ///
    /// Errors are reported to standard error. The process is never terminated here.
    pub fn run<P: Program>(mut self) -> u8 {
        self.get_color().sync();
        let program = match P::interpret(&mut self) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("{}: {}", paint::tag("error"), e);
                return e.code();
            }
        };
        // release the command-line data before running the program
        std::mem::drop(self);
        match program.execute() {
            Ok(()) => 0,
            Err(e) => {
                eprintln!("{}: {}", paint::tag("error"), e);
                exit_code::BAD
            }
        }
    }

    /// Interprets and executes program `P`, handing back its [ExitCode] for `main`.
    pub fn go<P: Program>(self) -> ExitCode {
        ExitCode::from(self.run::<P>())
    }
}
