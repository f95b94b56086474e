use core::fmt;
use std::{error, mem::replace};

/// A failure caused by the argument vector.
///
/// Table defects (duplicate names, nameless descriptors) are not represented
/// here; they panic in [`validate`](crate::validate).
#[derive(Clone, PartialEq, Eq)]
pub enum Error {
    /// An option token whose name is not in the table, with the closest long
    /// names (already prefixed with `--`) as suggestions.
    UnknownOption(String, Vec<String>),
    /// An argument-taking option with no value available.
    MissingArgument(String),
    /// A flag given an inline `=value`.
    UnexpectedArgument(String, String),
}

impl Error {
    /// The option token the error is about, as written on the command line.
    pub fn option(&self) -> &str {
        match self {
            Error::UnknownOption(option, _)
            | Error::MissingArgument(option)
            | Error::UnexpectedArgument(option, _) => option,
        }
    }
}

impl error::Error for Error {}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownOption(option, suggestions) => {
                write!(f, "Unknown option '{option}'.")?;
                let suggestions = suggestions.iter().map(|suggestion| format!("'{suggestion}'"));
                write_join(f, " Similar matches: ", ".", ", ", suggestions)?;
            }
            Error::MissingArgument(option) => {
                write!(f, "Missing argument for option '{option}'.")?
            }
            Error::UnexpectedArgument(option, value) => write!(
                f,
                "Option '{option}' does not take an argument but was given '{value}'."
            )?,
        }
        Ok(())
    }
}

fn write_join(
    formatter: &mut fmt::Formatter,
    prefix: impl fmt::Display,
    suffix: impl fmt::Display,
    separator: impl fmt::Display,
    items: impl IntoIterator<Item = impl fmt::Display>,
) -> Result<(), fmt::Error> {
    let mut has = false;
    for item in items.into_iter() {
        if replace(&mut has, true) {
            write!(formatter, "{separator}")?;
        } else {
            write!(formatter, "{prefix}")?;
        }
        write!(formatter, "{item}")?;
    }
    if has {
        write!(formatter, "{suffix}")?;
    }
    Ok(())
}
