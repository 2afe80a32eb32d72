use clp::*;
use std::env;

fn main() -> ExitCode {
    Parser::new(env::args()).go::<Demo>()
}

/// Prints the height profile requested on the command-line.
struct Demo {
    input: String,
    output: String,
    height: f32,
    steps: u8,
    verbose: bool,
}

impl Program for Demo {
    fn interpret(parser: &mut Parser) -> parser::Result<Self> {
        parser
            .add_arg("if", "input file", 1, true, "")
            .add_arg("of", "output file", 1, false, "out.dat")
            .add_arg("h0", "starting height", 1, true, "")
            .add_arg("n", "number of steps (default: 1)", 1, false, "1")
            .add_switch("v", "print each step", false, "")
            .parse()
            .validate()?;
        Ok(Demo {
            input: parser.get_arg_value("if")?,
            output: parser.get_arg_value("of")?,
            height: parser.get_arg_value("h0")?,
            steps: parser.get_arg_value("n")?,
            verbose: parser.switch_set("v")?,
        })
    }

    fn execute(self) -> proc::Result {
        for i in 0..self.steps {
            if self.verbose == true {
                println!("step {}: {} -> {}", i, self.input, self.output);
            }
            println!("{}", self.height * (i as f32 + 1.0));
        }
        Ok(())
    }
}
