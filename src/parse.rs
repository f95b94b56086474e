use crate::{
    error::Error,
    option::{validate, Descriptor, Slot},
    spell::{tolerance, Spell},
};
use tracing::{debug, trace};

const END: &str = "--";

/// Scans `arguments` against `options` and returns the index of the first
/// positional argument (`arguments.len()` when there is none).
///
/// `arguments[0]` is the program name and is never scanned. Values are
/// borrowed from `arguments`; defaults are written to their slots before
/// scanning so that later occurrences overwrite them.
///
/// A value taken from the next argument may not start with `-` unless it is
/// a lone `-`, so `--level -5` fails with [`Error::MissingArgument`]. Pass
/// such values inline: `--level=-5` or `-l-5`.
///
/// ```
/// use cmdparser::{parse, Descriptor};
/// use std::cell::Cell;
///
/// let verbose = Cell::new(false);
/// let output = Cell::new(None);
/// let options = [
///     Descriptor::flag(&verbose).long("verbose").short('v'),
///     Descriptor::value(&output).long("output").short('o').default("test.c"),
/// ];
/// let arguments = ["prog", "-vo", "out.c", "input.c"];
/// assert_eq!(parse(&arguments, &options), Ok(3));
/// assert!(verbose.get());
/// assert_eq!(output.get(), Some("out.c"));
/// ```
///
/// # Panics
///
/// When the table is malformed; see [`validate`].
pub fn parse<'a, S: AsRef<str>>(
    arguments: &'a [S],
    options: &[Descriptor<'a>],
) -> Result<usize, Error> {
    validate(options);
    defaults(options);
    let result = scan(arguments, options);
    match &result {
        Ok(index) => debug!(index, count = arguments.len(), "Parsed options."),
        Err(error) => debug!(%error, "Failed to parse options."),
    }
    result
}

/// Same as [`parse`], with failures collapsed into `-1`.
pub fn parse_options<'a, S: AsRef<str>>(arguments: &'a [S], options: &[Descriptor<'a>]) -> isize {
    match parse(arguments, options) {
        Ok(index) => isize::try_from(index).unwrap_or(isize::MAX),
        Err(_) => -1,
    }
}

fn defaults(options: &[Descriptor<'_>]) {
    for option in options {
        if let (Slot::Value(cell), Some(value)) = (option.slot(), option.default_value()) {
            cell.set(Some(value));
        }
    }
}

fn scan<'a, S: AsRef<str>>(arguments: &'a [S], options: &[Descriptor<'a>]) -> Result<usize, Error> {
    let mut index = 1;
    while let Some(argument) = arguments.get(index).map(text) {
        if argument == END {
            trace!(index, "End of options.");
            return Ok(index + 1);
        } else if let Some(body) = argument.strip_prefix(END) {
            trace!(index, argument, "Long option.");
            index = long(arguments, options, index, body)?;
        } else if let Some(body) = argument.strip_prefix('-').filter(|body| !body.is_empty()) {
            trace!(index, argument, "Short options.");
            index = short(arguments, options, index, body)?;
        } else {
            trace!(index, argument, "First positional argument.");
            return Ok(index);
        }
        index += 1;
    }
    Ok(arguments.len())
}

/// Handles `--name` and `--name=value`; returns the index of the last
/// argument consumed.
fn long<'a, S: AsRef<str>>(
    arguments: &'a [S],
    options: &[Descriptor<'a>],
    index: usize,
    body: &'a str,
) -> Result<usize, Error> {
    let (name, inline) = match body.split_once('=') {
        Some((name, value)) => (name, Some(value)),
        None => (body, None),
    };
    let Some(option) = options.iter().find(|option| option.long_name() == Some(name)) else {
        let suggestions = Spell::new()
            .suggest(
                name,
                options.iter().filter_map(Descriptor::long_name),
                tolerance(name),
            )
            .into_iter()
            .map(|suggestion| format!("--{suggestion}"))
            .collect();
        return Err(Error::UnknownOption(format!("--{name}"), suggestions));
    };

    match (option.slot(), inline) {
        (Slot::Flag(_), Some(value)) => Err(Error::UnexpectedArgument(
            format!("--{name}"),
            value.to_owned(),
        )),
        (Slot::Flag(cell), None) => {
            cell.set(true);
            Ok(index)
        }
        (Slot::Value(cell), Some(value)) => {
            cell.set(Some(value));
            Ok(index)
        }
        (Slot::Value(cell), None) => match following(arguments, index) {
            Some(value) => {
                cell.set(Some(value));
                Ok(index + 1)
            }
            None => Err(Error::MissingArgument(format!("--{name}"))),
        },
    }
}

/// Handles a `-abc` cluster; returns the index of the last argument consumed.
fn short<'a, S: AsRef<str>>(
    arguments: &'a [S],
    options: &[Descriptor<'a>],
    index: usize,
    body: &'a str,
) -> Result<usize, Error> {
    for (position, letter) in body.char_indices() {
        let Some(option) = options.iter().find(|option| option.short_name() == Some(letter))
        else {
            return Err(Error::UnknownOption(format!("-{letter}"), Vec::new()));
        };

        match option.slot() {
            Slot::Flag(cell) => cell.set(true),
            Slot::Value(cell) => {
                let rest = &body[position + letter.len_utf8()..];
                if !rest.is_empty() {
                    cell.set(Some(rest));
                    return Ok(index);
                }
                return match following(arguments, index) {
                    Some(value) => {
                        cell.set(Some(value));
                        Ok(index + 1)
                    }
                    None => Err(Error::MissingArgument(format!("-{letter}"))),
                };
            }
        }
    }
    Ok(index)
}

/// The argument after `index`, unless it is itself option-like. A lone `-`
/// is accepted.
fn following<S: AsRef<str>>(arguments: &[S], index: usize) -> Option<&str> {
    arguments
        .get(index + 1)
        .map(text)
        .filter(|value| value.len() < 2 || !value.starts_with('-'))
}

#[inline]
fn text<S: AsRef<str>>(argument: &S) -> &str {
    argument.as_ref()
}
