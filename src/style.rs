use std::{
    env,
    fmt::{self, Write},
    io,
};
use termion::style::{Bold, Faint, Italic, Reset, Underline};

/// Column at which help text starts.
pub const COLUMN: usize = 30;
/// Fallback wrap width when the terminal size is unknown.
pub const WIDTH: usize = 80;

/// No escape codes, no wrapping. Output depends only on the table.
pub struct Plain;
/// Bold names, faint defaults and wrapping at the terminal width.
pub struct Terminal;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Item {
    Heading,
    Program,
    Option,
    Argument,
    Help,
    Default,
}

/// Something written around styled text. Contributes no visible width.
pub trait Format {
    fn format(&self, writer: &mut dyn Write) -> fmt::Result;
}

macro_rules! format {
    ($($type: ty),*) => {
        $(impl Format for $type {
            #[inline]
            fn format(&self, writer: &mut dyn Write) -> fmt::Result {
                write!(writer, "{self}")
            }
        })*
    };
}

format!(Reset, Bold, Faint, Italic, Underline);

impl<T: Format + ?Sized> Format for &T {
    #[inline]
    fn format(&self, writer: &mut dyn Write) -> fmt::Result {
        T::format(self, writer)
    }
}

impl<T: Format, const N: usize> Format for [T; N] {
    fn format(&self, writer: &mut dyn Write) -> fmt::Result {
        self.iter().try_for_each(|item| item.format(writer))
    }
}

impl Format for str {
    #[inline]
    fn format(&self, writer: &mut dyn Write) -> fmt::Result {
        writer.write_str(self)
    }
}

pub trait Style {
    /// Column at which help text starts.
    fn column(&self) -> usize {
        COLUMN
    }
    /// Total line width to wrap help text at; `None` disables wrapping.
    fn width(&self) -> Option<usize>;
    fn begin(&self, item: Item) -> &dyn Format;
    fn end(&self, item: Item) -> &dyn Format;
}

macro_rules! dynamic {
    ($($value: expr),*) => {
        &[$(&$value as &dyn Format),*]
    };
}

impl Style for Plain {
    #[inline]
    fn width(&self) -> Option<usize> {
        None
    }

    #[inline]
    fn begin(&self, _: Item) -> &dyn Format {
        &""
    }

    #[inline]
    fn end(&self, _: Item) -> &dyn Format {
        &""
    }
}

impl Style for Terminal {
    #[inline]
    fn width(&self) -> Option<usize> {
        Some(term_size::dimensions().map_or(WIDTH, |(width, _)| width))
    }

    #[inline]
    fn begin(&self, item: Item) -> &dyn Format {
        match item {
            Item::Heading => dynamic!(Bold, Underline),
            Item::Program | Item::Option => dynamic!(Bold),
            Item::Argument => dynamic!(Italic),
            Item::Default => dynamic!(Faint),
            Item::Help => &"",
        }
    }

    #[inline]
    fn end(&self, item: Item) -> &dyn Format {
        match item {
            Item::Help => &"",
            _ => dynamic!(Reset),
        }
    }
}

/// Picks [`Terminal`] when stdout is a terminal and `NO_COLOR` is unset,
/// [`Plain`] otherwise.
pub fn detect() -> &'static dyn Style {
    if env::var_os("NO_COLOR").is_none() && termion::is_tty(&io::stdout()) {
        &Terminal
    } else {
        &Plain
    }
}
