use crate::arg::{symbol, Arg, Entry, Switch};
use crate::error::{ColorMode, Error, ErrorContext};
use crate::help::Help;
use std::str::FromStr;

pub type Result<T> = std::result::Result<T, Error>;

/// Splits a token group into its name and the values that follow it.
///
/// Empty words are dropped, so a lone delimiter produces an empty name.
fn split_group(group: &str) -> (String, Vec<String>) {
    let mut words = group
        .split(|c: char| c == symbol::DELIMITER || c == symbol::SEPARATOR)
        .filter(|w| w.is_empty() == false)
        .map(|w| w.to_string());
    let name = words.next().unwrap_or_default();
    (name, words.collect())
}

/// Converts the raw text stored behind argument `name` into `T`.
fn convert<T: FromStr>(name: &str, raw: &str) -> Result<T>
where
    <T as FromStr>::Err: 'static + std::error::Error + Send + Sync,
{
    raw.parse::<T>().map_err(|err| {
        Error::new(ErrorContext::Conversion(
            name.to_string(),
            raw.to_string(),
            Box::new(err),
        ))
    })
}

#[derive(Debug, PartialEq)]
pub struct Parser {
    program: String,
    tokens: Vec<String>,
    switches: Vec<Switch>,
    args: Vec<Arg>,
    parsed: bool,
    emit_help: bool,
    color: ColorMode,
}

impl Parser {
    /// Builds the `Parser` by grouping the raw argument vector into token groups.
    ///
    /// The first element is taken as the program's name. Every later element
    /// containing the delimiter opens a new group, and elements without it are
    /// joined onto the group before them.
    pub fn new<T: Iterator<Item = String>>(mut args: T) -> Self {
        let program = args.next().unwrap_or_default();
        let mut tokens = Vec::<String>::new();
        for arg in args {
            // text before the first delimiter still forms its own group
            if arg.contains(symbol::DELIMITER) == true || tokens.is_empty() == true {
                tokens.push(arg);
            } else if let Some(group) = tokens.last_mut() {
                group.push(symbol::SEPARATOR);
                group.push_str(&arg);
            }
        }
        tracing::trace!(program = %program, groups = ?tokens, "grouped command-line tokens");
        Self {
            program: program,
            tokens: tokens,
            switches: Vec::new(),
            args: Vec::new(),
            parsed: false,
            emit_help: true,
            color: ColorMode::default(),
        }
    }

    /// Sets the color policy for rendering errors.
    pub fn color(mut self, mode: ColorMode) -> Self {
        mode.sync();
        self.color = mode;
        self
    }

    /// Controls whether lookup and validation failures print the help listing
    /// to standard output before returning.
    ///
    /// This is enabled by default.
    pub fn emit_help(mut self, enabled: bool) -> Self {
        self.emit_help = enabled;
        self
    }

    pub(crate) fn get_color(&self) -> &ColorMode {
        &self.color
    }

    /// Returns the zeroth raw argument.
    pub fn program_name(&self) -> &str {
        self.program.as_ref()
    }

    /// Declares an argument expecting `arity` values.
    pub fn add_arg(
        &mut self,
        name: &str,
        help: &str,
        arity: usize,
        required: bool,
        default: &str,
    ) -> &mut Self {
        self.declare_arg(
            Arg::new(name, help)
                .arity(arity)
                .required(required)
                .default(default),
        )
    }

    /// Declares a presence-only switch.
    pub fn add_switch(&mut self, name: &str, help: &str, required: bool, default: &str) -> &mut Self {
        self.declare_switch(Switch::new(name, help).required(required).default(default))
    }

    /// Declares a pre-built [Arg].
    pub fn declare_arg(&mut self, arg: Arg) -> &mut Self {
        if self.parsed == true {
            tracing::warn!(name = arg.name(), "argument declared after parsing will never be matched");
        }
        self.args.push(arg);
        self
    }

    /// Declares a pre-built [Switch].
    pub fn declare_switch(&mut self, switch: Switch) -> &mut Self {
        if self.parsed == true {
            tracing::warn!(name = switch.name(), "switch declared after parsing will never be matched");
        }
        self.switches.push(switch);
        self
    }

    /// Matches every token group against the declared switches and arguments.
    ///
    /// A group whose name matches nothing is dropped without an error.
    pub fn parse(&mut self) -> &mut Self {
        for group in &self.tokens {
            let (name, values) = split_group(group);
            tracing::trace!(name = %name, values = ?values, "parsing token group");
            let mut matched = false;
            if let Some(sw) = self.switches.iter_mut().find(|s| **s == *name) {
                sw.set(true);
                matched = true;
            }
            if let Some(arg) = self.args.iter_mut().find(|a| **a == *name) {
                arg.add(values);
                matched = true;
            }
            if matched == false {
                tracing::debug!(group = %group, "dropping token group with no declared option");
            }
        }
        self.parsed = true;
        self
    }

    /// Verifies every required switch and argument was supplied.
    ///
    /// Switches are checked before arguments, each in declaration order, and the
    /// first one missing is reported.
    pub fn validate(&self) -> Result<()> {
        self.is_parsed("validate")?;
        let missing = match self.switches.iter().find(|s| s.is_valid() == false) {
            Some(s) => Some((s.kind(), s.name())),
            None => self
                .args
                .iter()
                .find(|a| a.is_valid() == false)
                .map(|a| (a.kind(), a.name())),
        };
        match missing {
            Some((kind, name)) => {
                tracing::debug!(name = name, "required {} was not supplied", kind);
                Err(self.fail(Error::new(ErrorContext::Validation(
                    kind,
                    name.to_string(),
                ))))
            }
            None => Ok(()),
        }
    }

    /// Serves the first value of argument `name` parsed as `T`.
    pub fn get_arg_value<T: FromStr>(&self, name: &str) -> Result<T>
    where
        <T as FromStr>::Err: 'static + std::error::Error + Send + Sync,
    {
        self.get_arg_value_at(name, 0)
    }

    /// Serves the value at position `index` of argument `name` parsed as `T`.
    ///
    /// Errors if parsing has not run, the argument was never declared, the value
    /// is missing from a required argument, or the conversion fails.
    pub fn get_arg_value_at<T: FromStr>(&self, name: &str, index: usize) -> Result<T>
    where
        <T as FromStr>::Err: 'static + std::error::Error + Send + Sync,
    {
        self.is_parsed("get_arg_value")?;
        let arg = self.find_arg(name)?;
        let raw = arg.value(index).map_err(|e| self.fail(e))?;
        convert(name, raw)
    }

    /// Serves every value supplied to argument `name` parsed as `T`.
    ///
    /// Returns an empty list when the argument was declared but given no values.
    pub fn get_arg_values<T: FromStr>(&self, name: &str) -> Result<Vec<T>>
    where
        <T as FromStr>::Err: 'static + std::error::Error + Send + Sync,
    {
        self.is_parsed("get_arg_values")?;
        self.find_arg(name)?
            .values()
            .iter()
            .map(|raw| convert(name, raw))
            .collect()
    }

    /// Checks if argument `name` was found on the command-line.
    ///
    /// Undeclared names are never set.
    pub fn arg_set(&self, name: &str) -> Result<bool> {
        self.is_parsed("arg_set")?;
        Ok(self
            .args
            .iter()
            .find(|a| *a == name)
            .map(|a| a.is_set())
            .unwrap_or(false))
    }

    /// Checks if switch `name` was found on the command-line.
    ///
    /// Undeclared names are never set.
    pub fn switch_set(&self, name: &str) -> Result<bool> {
        self.is_parsed("switch_set")?;
        Ok(self
            .switches
            .iter()
            .find(|s| *s == name)
            .map(|s| s.is_set())
            .unwrap_or(false))
    }

    /// Builds the listing of declared arguments and switches.
    pub fn help(&self) -> Help {
        Help::with(&self.args, &self.switches)
    }

    /// Writes the listing of declared arguments and switches to standard output.
    pub fn print_help(&self) {
        self.help().print()
    }

    fn is_parsed(&self, operation: &'static str) -> Result<()> {
        match self.parsed {
            true => Ok(()),
            false => Err(Error::new(ErrorContext::Usage(operation))),
        }
    }

    fn find_arg(&self, name: &str) -> Result<&Arg> {
        self.args
            .iter()
            .find(|a| *a == name)
            .ok_or_else(|| self.fail(Error::new(ErrorContext::NotFound(name.to_string()))))
    }

    /// Attaches the help listing to `err`, printing it first if enabled.
    fn fail(&self, err: Error) -> Error {
        let help = self.help();
        if self.emit_help == true {
            help.print();
        }
        err.with_help(help)
    }
}
