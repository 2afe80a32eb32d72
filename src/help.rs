use crate::arg::{Arg, Entry, Switch};
use std::fmt::Display;

mod layout {
    pub const HEADER_INDENT: &str = "   ";
    pub const ROW_INDENT: &str = "      ";
    pub const NAME_WIDTH: usize = 10;
}

type Row = (String, String);

/// A two-column listing of every declared argument and switch.
#[derive(Debug, PartialEq, Clone)]
pub struct Help {
    args: Vec<Row>,
    switches: Vec<Row>,
}

impl Help {
    /// Create an empty [Help] listing.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            switches: Vec::new(),
        }
    }

    /// Create a [Help] listing from the declared options, keeping declaration order.
    pub fn with(args: &[Arg], switches: &[Switch]) -> Self {
        Self {
            args: args.iter().map(|a| Self::row(a)).collect(),
            switches: switches.iter().map(|s| Self::row(s)).collect(),
        }
    }

    fn row<T: Entry + Display>(entry: &T) -> Row {
        (entry.to_string(), entry.help().to_string())
    }

    /// Writes the listing to standard output.
    pub fn print(&self) {
        print!("{}", self);
    }

    fn fmt_rows(
        f: &mut std::fmt::Formatter<'_>,
        title: &str,
        rows: &[Row],
    ) -> std::fmt::Result {
        writeln!(f, "{}Available {}:", layout::HEADER_INDENT, title)?;
        if rows.is_empty() == true {
            writeln!(f, "{}No {} available", layout::ROW_INDENT, title)?;
        }
        for (name, text) in rows {
            // keep at least one space between the columns for long names
            writeln!(
                f,
                "{}{:<width$} {}",
                layout::ROW_INDENT,
                name,
                text,
                width = layout::NAME_WIDTH - 1
            )?;
        }
        writeln!(f)
    }
}

impl Display for Help {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Self::fmt_rows(f, "Arguments", &self.args)?;
        Self::fmt_rows(f, "Switches", &self.switches)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_listing() {
        let help = Help::new();
        assert_eq!(
            help.to_string(),
            "   Available Arguments:\n      No Arguments available\n\n   Available Switches:\n      No Switches available\n\n"
        );
    }

    #[test]
    fn two_columns() {
        let args = vec![
            Arg::new("if", "input file"),
            Arg::new("of", "output file"),
        ];
        let switches = vec![Switch::new("a", "a switch")];
        let help = Help::with(&args, &switches);
        assert_eq!(
            help.to_string(),
            "   Available Arguments:
      -if       input file
      -of       output file

   Available Switches:
      -a        a switch

"
        );
    }

    #[test]
    fn long_names_stay_apart() {
        let args = vec![Arg::new("threshold", "cutoff value")];
        let help = Help::with(&args, &[]);
        assert!(help.to_string().contains("-threshold cutoff value"));
    }
}
