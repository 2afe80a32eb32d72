use crate::arg::Kind;
use crate::help::Help;
use std::fmt::Display;

/// Controls whether error messages are rendered with terminal colors.
#[derive(Debug, PartialEq, Clone)]
pub enum ColorMode {
    On,
    Off,
    Normal,
}

impl Default for ColorMode {
    fn default() -> Self {
        Self::Normal
    }
}

impl ColorMode {
    /// Applies the mode to the process-wide color override.
    #[cfg(feature = "color")]
    pub fn sync(&self) {
        match self {
            Self::On => colored::control::set_override(true),
            Self::Off => colored::control::set_override(false),
            Self::Normal => colored::control::unset_override(),
        }
    }

    /// Applies the mode to the process-wide color override.
    ///
    /// Colors are never rendered without the `color` feature.
    #[cfg(not(feature = "color"))]
    pub fn sync(&self) {}
}

pub(crate) mod exit_code {
    pub const BAD: u8 = 101;
}

pub(crate) mod paint {
    #[cfg(feature = "color")]
    use colored::Colorize;

    #[cfg(feature = "color")]
    pub fn name(s: &str) -> String {
        s.blue().to_string()
    }

    #[cfg(feature = "color")]
    pub fn value(s: &str) -> String {
        s.yellow().to_string()
    }

    #[cfg(feature = "color")]
    pub fn tag(s: &str) -> String {
        s.red().bold().to_string()
    }

    #[cfg(not(feature = "color"))]
    pub fn name(s: &str) -> String {
        s.to_string()
    }

    #[cfg(not(feature = "color"))]
    pub fn value(s: &str) -> String {
        s.to_string()
    }

    #[cfg(not(feature = "color"))]
    pub fn tag(s: &str) -> String {
        s.to_string()
    }
}

type Name = String;
type Value = String;
type Index = usize;
type Operation = &'static str;
type SomeError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, PartialEq, Copy, Clone)]
pub enum ErrorKind {
    Usage,
    NotFound,
    MissingValue,
    Conversion,
    Validation,
}

#[derive(Debug, thiserror::Error)]
pub enum ErrorContext {
    #[error("parse must be called before {0}")]
    Usage(Operation),
    #[error("argument \"{}\" was never declared", paint::name(.0))]
    NotFound(Name),
    #[error("argument \"{}\" is required but has no value at position {1}", paint::name(.0))]
    MissingValue(Name, Index),
    #[error("argument \"{}\" failed to process value \"{}\": {2}", paint::name(.0), paint::value(.1))]
    Conversion(Name, Value, SomeError),
    #[error("required {0} \"{}\" was not set", paint::name(.1))]
    Validation(Kind, Name),
}

#[derive(Debug)]
pub struct Error {
    context: ErrorContext,
    help: Option<Help>,
}

impl Error {
    /// Creates a new error.
    pub fn new(context: ErrorContext) -> Self {
        Self {
            context: context,
            help: None,
        }
    }

    /// Attaches the listing of declared options to the error.
    pub(crate) fn with_help(mut self, help: Help) -> Self {
        self.help = Some(help);
        self
    }

    /// Returns the kind of error.
    pub fn kind(&self) -> ErrorKind {
        match &self.context {
            ErrorContext::Usage(_) => ErrorKind::Usage,
            ErrorContext::NotFound(_) => ErrorKind::NotFound,
            ErrorContext::MissingValue(_, _) => ErrorKind::MissingValue,
            ErrorContext::Conversion(_, _, _) => ErrorKind::Conversion,
            ErrorContext::Validation(_, _) => ErrorKind::Validation,
        }
    }

    /// References the surrounding data for the given error.
    pub fn context(&self) -> &ErrorContext {
        &self.context
    }

    /// References the help listing captured when the error occurred, if any.
    pub fn help(&self) -> Option<&Help> {
        self.help.as_ref()
    }

    /// Returns the process exit code a host should use for this error.
    pub fn code(&self) -> u8 {
        exit_code::BAD
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.context {
            ErrorContext::Conversion(_, _, err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.context)
    }
}
