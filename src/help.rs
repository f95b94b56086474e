use crate::{
    option::{Descriptor, Metadata},
    style::{self, Format, Item, Plain, Style},
};
use std::{
    fmt::{self, Write},
    io,
};
use tracing::trace;

const INDENT: &str = "  ";
const LONG_ONLY: &str = "      ";
const ARGUMENT: &str = "ARG";
/// Narrowest right column wrapping will squeeze help text into.
const MINIMUM: usize = 20;

struct Helper<'a> {
    buffer: &'a mut String,
    style: &'a dyn Style,
}

impl<'a> Helper<'a> {
    fn space(&mut self, width: usize) -> fmt::Result {
        for _ in 0..width {
            self.buffer.write_char(' ')?;
        }
        Ok(())
    }

    fn format(&mut self, format: &dyn Format) -> fmt::Result {
        format.format(&mut *self.buffer)
    }

    /// Writes `value` wrapped in the style's markers and returns its visible
    /// width.
    fn styled(&mut self, item: Item, value: impl fmt::Display) -> Result<usize, fmt::Error> {
        let style = self.style;
        let (begin, end) = (style.begin(item), style.end(item));
        self.format(begin)?;
        let start = self.buffer.len();
        write!(self.buffer, "{value}")?;
        let width = self.buffer[start..].chars().count();
        self.format(end)?;
        Ok(width)
    }

    fn plain(&mut self, value: &str) -> Result<usize, fmt::Error> {
        self.buffer.write_str(value)?;
        Ok(value.chars().count())
    }

    fn document(&mut self, meta: &Metadata) -> fmt::Result {
        if !meta.description.is_empty() {
            self.buffer.write_str(meta.description)?;
            if !meta.description.ends_with('\n') {
                writeln!(self.buffer)?;
            }
            writeln!(self.buffer)?;
        }

        self.styled(Item::Heading, "Usage:")?;
        self.buffer.write_char(' ')?;
        self.styled(Item::Program, meta.name)?;
        self.buffer.write_str(" [OPTIONS]")?;
        if !meta.usage.is_empty() {
            write!(self.buffer, " {}", meta.usage)?;
        }
        writeln!(self.buffer)?;

        writeln!(self.buffer)?;
        self.styled(Item::Heading, "Options:")?;
        writeln!(self.buffer)?;
        for option in meta.options {
            self.option(option)?;
        }
        Ok(())
    }

    fn names(&mut self, option: &Descriptor) -> Result<usize, fmt::Error> {
        let mut width = 0;
        match (option.short_name(), option.long_name()) {
            (Some(short), Some(long)) => {
                width += self.plain(INDENT)?;
                width += self.styled(Item::Option, format_args!("-{short}"))?;
                width += self.plain(", ")?;
                width += self.styled(Item::Option, format_args!("--{long}"))?;
                if option.takes_argument() {
                    width += self.plain("=")?;
                    width += self.styled(Item::Argument, ARGUMENT)?;
                }
            }
            (None, Some(long)) => {
                width += self.plain(LONG_ONLY)?;
                width += self.styled(Item::Option, format_args!("--{long}"))?;
                if option.takes_argument() {
                    width += self.plain("=")?;
                    width += self.styled(Item::Argument, ARGUMENT)?;
                }
            }
            (Some(short), None) => {
                width += self.plain(INDENT)?;
                width += self.styled(Item::Option, format_args!("-{short}"))?;
                if option.takes_argument() {
                    width += self.plain(" ")?;
                    width += self.styled(Item::Argument, ARGUMENT)?;
                }
            }
            (None, None) => {}
        }
        Ok(width)
    }

    fn option(&mut self, option: &Descriptor) -> fmt::Result {
        let column = self.style.column();
        let width = self.names(option)?;
        let help = option.help_text();
        let default = option.default_value();
        if help.is_empty() && default.is_none() {
            return writeln!(self.buffer);
        }

        if width < column {
            self.space(column - width)?;
        } else {
            writeln!(self.buffer)?;
            self.space(column)?;
        }

        match self.style.width() {
            Some(width) => self.wrap(help, default, column, width)?,
            None => {
                self.styled(Item::Help, help)?;
                if let Some(default) = default {
                    if !help.is_empty() {
                        self.buffer.write_char(' ')?;
                    }
                    self.styled(Item::Default, format_args!("(default: {default})"))?;
                }
            }
        }
        writeln!(self.buffer)
    }

    /// Lays out the help words in the right column, breaking lines before
    /// `width`. The default suffix is kept on one line.
    fn wrap(
        &mut self,
        help: &str,
        default: Option<&str>,
        column: usize,
        width: usize,
    ) -> fmt::Result {
        let available = width.saturating_sub(column).max(MINIMUM);
        let suffix = default.map(|default| format!("(default: {default})"));
        let words = help
            .split_whitespace()
            .map(|word| (Item::Help, word))
            .chain(suffix.as_deref().map(|suffix| (Item::Default, suffix)));

        let mut cursor = 0;
        for (item, word) in words {
            let count = word.chars().count();
            if cursor > 0 {
                if cursor + 1 + count > available {
                    writeln!(self.buffer)?;
                    self.space(column)?;
                    cursor = 0;
                } else {
                    self.buffer.write_char(' ')?;
                    cursor += 1;
                }
            }
            cursor += self.styled(item, word)?;
        }
        Ok(())
    }
}

/// Renders the help text with `style`.
///
/// Fails only when one of the style's markers fails to write.
pub fn render(meta: &Metadata, style: &dyn Style) -> Result<String, fmt::Error> {
    let mut buffer = String::new();
    Helper {
        buffer: &mut buffer,
        style,
    }
    .document(meta)?;
    trace!(program = meta.name, options = meta.options.len(), "Rendered help.");
    Ok(buffer)
}

/// Renders the help text without escape codes or wrapping.
///
/// ```
/// use cmdparser::{help, Descriptor, Metadata};
/// use std::cell::Cell;
///
/// let verbose = Cell::new(false);
/// let options = [Descriptor::flag(&verbose).long("verbose").short('v').help("Verbose flag")];
/// let text = help(&Metadata::new("prog", "Does things.", "[FILE...]", &options));
/// assert!(text.contains("Usage: prog [OPTIONS] [FILE...]\n"));
/// assert!(text.contains("  -v, --verbose               Verbose flag\n"));
/// ```
pub fn help(meta: &Metadata) -> String {
    // `Plain` writes no markers, and writing into a `String` does not fail.
    render(meta, &Plain).unwrap_or_default()
}

pub fn write_help<W: io::Write>(meta: &Metadata, style: &dyn Style, mut writer: W) -> io::Result<()> {
    let text = render(meta, style).map_err(|error| io::Error::new(io::ErrorKind::Other, error))?;
    writer.write_all(text.as_bytes())?;
    writer.flush()
}

/// Writes the help text to stdout, styled when stdout is a terminal.
pub fn print_help(meta: &Metadata) -> io::Result<()> {
    let stdout = io::stdout();
    write_help(meta, style::detect(), stdout.lock())
}
