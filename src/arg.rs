use crate::error::{Error, ErrorContext};
use std::fmt::Display;

pub(crate) mod symbol {
    // marks the beginning of an option's name on the command-line
    pub const DELIMITER: char = '-';
    // joins words of a token group that arrived as separate elements
    pub const SEPARATOR: char = ' ';
}

/// The variant of a declared option.
#[derive(Debug, PartialEq, Copy, Clone)]
pub enum Kind {
    Switch,
    Arg,
}

impl Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Switch => write!(f, "switch"),
            Self::Arg => write!(f, "argument"),
        }
    }
}

/// State shared by every declared option.
#[derive(Debug, PartialEq, Clone)]
pub struct Opt {
    name: String,
    help: String,
    required: bool,
    default: String,
    supplied: bool,
}

impl Opt {
    fn new<T: AsRef<str>, U: AsRef<str>>(name: T, help: U) -> Self {
        Self {
            name: name.as_ref().to_string(),
            help: help.as_ref().to_string(),
            required: false,
            default: String::new(),
            supplied: false,
        }
    }
}

/// The capabilities common to a [Switch] and an [Arg].
///
/// An entry compares equal to a plain `str` holding its name, which is how the
/// parser looks entries up in declaration order.
pub trait Entry: PartialEq<str> {
    fn opt(&self) -> &Opt;

    fn opt_mut(&mut self) -> &mut Opt;

    fn kind(&self) -> Kind;

    fn name(&self) -> &str {
        &self.opt().name
    }

    fn help(&self) -> &str {
        &self.opt().help
    }

    fn default_value(&self) -> &str {
        &self.opt().default
    }

    fn is_required(&self) -> bool {
        self.opt().required
    }

    /// Marks whether the entry was found on the command-line.
    fn set(&mut self, state: bool) {
        self.opt_mut().supplied = state;
    }

    /// Checks if the entry was found on the command-line.
    fn is_set(&self) -> bool {
        self.opt().supplied
    }

    /// Returns `false` only when the entry is required but was never supplied.
    fn is_valid(&self) -> bool {
        !(self.is_required() == true && self.is_set() == false)
    }
}

/// A presence-only option.
#[derive(Debug, PartialEq, Clone)]
pub struct Switch {
    opt: Opt,
}

impl Switch {
    pub fn new<T: AsRef<str>, U: AsRef<str>>(name: T, help: U) -> Self {
        Self {
            opt: Opt::new(name, help),
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.opt.required = required;
        self
    }

    pub fn default<T: AsRef<str>>(mut self, value: T) -> Self {
        self.opt.default = value.as_ref().to_string();
        self
    }
}

impl Entry for Switch {
    fn opt(&self) -> &Opt {
        &self.opt
    }

    fn opt_mut(&mut self) -> &mut Opt {
        &mut self.opt
    }

    fn kind(&self) -> Kind {
        Kind::Switch
    }
}

impl PartialEq<str> for Switch {
    fn eq(&self, other: &str) -> bool {
        self.opt.name == other
    }
}

impl Display for Switch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}{}", symbol::DELIMITER, self.opt.name)
    }
}

/// A value-bearing option.
#[derive(Debug, PartialEq, Clone)]
pub struct Arg {
    opt: Opt,
    arity: usize,
    values: Vec<String>,
}

impl Arg {
    /// Creates a new optional [Arg] expecting a single value.
    pub fn new<T: AsRef<str>, U: AsRef<str>>(name: T, help: U) -> Self {
        Self {
            opt: Opt::new(name, help),
            arity: 1,
            values: Vec::new(),
        }
    }

    /// Sets the number of values the argument expects.
    ///
    /// This is informational only; the parser stores however many values follow
    /// the argument's name.
    pub fn arity(mut self, n: usize) -> Self {
        self.arity = n;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.opt.required = required;
        self
    }

    pub fn default<T: AsRef<str>>(mut self, value: T) -> Self {
        self.opt.default = value.as_ref().to_string();
        self
    }

    pub fn get_arity(&self) -> usize {
        self.arity
    }

    /// Replaces the stored values with `values` and marks the argument as supplied.
    ///
    /// The argument counts as supplied even when `values` is empty.
    pub fn add(&mut self, values: Vec<String>) {
        self.values = values;
        self.set(true);
    }

    /// Accesses every value supplied to the argument.
    pub fn values(&self) -> &[String] {
        self.values.as_ref()
    }

    /// Looks up the value at position `index`.
    ///
    /// Falls back to the default value when nothing is stored at `index` and the
    /// argument is not required. Errors if the argument is required.
    pub fn value(&self, index: usize) -> Result<&str, Error> {
        match self.values.get(index) {
            Some(v) => Ok(v.as_str()),
            None => match self.opt.required {
                false => Ok(self.opt.default.as_str()),
                true => Err(Error::new(ErrorContext::MissingValue(
                    self.opt.name.clone(),
                    index,
                ))),
            },
        }
    }
}

impl Entry for Arg {
    fn opt(&self) -> &Opt {
        &self.opt
    }

    fn opt_mut(&mut self) -> &mut Opt {
        &mut self.opt
    }

    fn kind(&self) -> Kind {
        Kind::Arg
    }
}

impl PartialEq<str> for Arg {
    fn eq(&self, other: &str) -> bool {
        self.opt.name == other
    }
}

impl Display for Arg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}{}", symbol::DELIMITER, self.opt.name)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::ErrorKind;

    /// Helper test fn to turn a vec of &str into owned values for an [Arg].
    fn words(w: Vec<&str>) -> Vec<String> {
        w.into_iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn switch_new() {
        let verbose = Switch::new("v", "print more information");
        assert_eq!(
            verbose,
            Switch {
                opt: Opt {
                    name: "v".to_string(),
                    help: "print more information".to_string(),
                    required: false,
                    default: String::new(),
                    supplied: false,
                }
            }
        );
        assert_eq!(verbose.name(), "v");
        assert_eq!(verbose.help(), "print more information");
        assert_eq!(verbose.kind(), Kind::Switch);
        assert_eq!(verbose.is_set(), false);

        let force = Switch::new("force", "").required(true).default("no");
        assert_eq!(force.is_required(), true);
        assert_eq!(force.default_value(), "no");
    }

    #[test]
    fn arg_new() {
        let input = Arg::new("if", "input file");
        assert_eq!(input.get_arity(), 1);
        assert_eq!(input.is_required(), false);
        assert_eq!(input.default_value(), "");
        assert_eq!(input.values().is_empty(), true);
        assert_eq!(input.kind(), Kind::Arg);

        let range = Arg::new("range", "lower and upper bound")
            .arity(2)
            .required(true);
        assert_eq!(range.get_arity(), 2);
        assert_eq!(range.is_required(), true);
    }

    #[test]
    fn entry_disp() {
        assert_eq!(Switch::new("a", "a switch").to_string(), "-a");
        assert_eq!(Arg::new("h0", "starting height").to_string(), "-h0");
        assert_eq!(Kind::Switch.to_string(), "switch");
        assert_eq!(Kind::Arg.to_string(), "argument");
    }

    #[test]
    fn eq_by_name() {
        let sw = Switch::new("a", "a switch");
        assert!(sw == *"a");
        assert!(sw != *"b");

        let arg = Arg::new("of", "output file");
        assert!(&arg == "of");
        assert!(&arg != "o");
    }

    #[test]
    fn validity() {
        // optional entries are always valid
        let mut sw = Switch::new("a", "");
        assert_eq!(sw.is_valid(), true);
        sw.set(true);
        assert_eq!(sw.is_valid(), true);

        // required entries are only valid once set
        let mut arg = Arg::new("x", "").required(true);
        assert_eq!(arg.is_valid(), false);
        arg.add(words(vec!["argx"]));
        assert_eq!(arg.is_valid(), true);
    }

    #[test]
    fn add_replaces_values() {
        let mut arg = Arg::new("files", "").arity(3);
        arg.add(words(vec!["a", "b", "c"]));
        assert_eq!(arg.values(), &["a", "b", "c"]);
        assert_eq!(arg.is_set(), true);

        arg.add(words(vec!["d"]));
        assert_eq!(arg.values(), &["d"]);
    }

    #[test]
    fn add_empty_still_supplied() {
        let mut arg = Arg::new("x", "").required(true);
        arg.add(Vec::new());
        assert_eq!(arg.is_set(), true);
        assert_eq!(arg.is_valid(), true);
        // but there is no value to hand out
        assert_eq!(
            arg.value(0).unwrap_err().kind(),
            ErrorKind::MissingValue
        );
    }

    #[test]
    fn value_lookup() {
        let mut arg = Arg::new("range", "").arity(2);
        arg.add(words(vec!["1", "10"]));
        assert_eq!(arg.value(0).unwrap(), "1");
        assert_eq!(arg.value(1).unwrap(), "10");
        // out of bounds on an optional argument yields its default
        assert_eq!(arg.value(2).unwrap(), "");

        let arg = Arg::new("level", "").default("3");
        assert_eq!(arg.value(0).unwrap(), "3");

        let arg = Arg::new("level", "").required(true).default("3");
        assert_eq!(
            arg.value(0).unwrap_err().kind(),
            ErrorKind::MissingValue
        );
    }
}
