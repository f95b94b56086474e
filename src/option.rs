use core::cell::Cell;

/// Longest accepted help text, in characters.
pub const HELP_LIMIT: usize = 255;

/// Where a parsed option writes its result.
///
/// The cells belong to the caller; the parser only ever calls `set` on them.
#[derive(Clone, Copy)]
pub enum Slot<'a> {
    Flag(&'a Cell<bool>),
    Value(&'a Cell<Option<&'a str>>),
}

/// One recognized option.
///
/// ```
/// use cmdparser::Descriptor;
/// use std::cell::Cell;
///
/// let verbose = Cell::new(false);
/// let output = Cell::new(None);
/// let table = [
///     Descriptor::flag(&verbose).long("verbose").short('v').help("Verbose flag"),
///     Descriptor::value(&output).long("output").short('o').default("test.c"),
/// ];
/// assert!(!table[0].takes_argument());
/// assert_eq!(table[1].default_value(), Some("test.c"));
/// ```
#[derive(Clone, Copy)]
pub struct Descriptor<'a> {
    help: &'a str,
    long: Option<&'a str>,
    short: Option<char>,
    default: Option<&'a str>,
    slot: Slot<'a>,
}

impl<'a> Descriptor<'a> {
    /// An option that takes no argument and sets `cell` to `true` when present.
    pub const fn flag(cell: &'a Cell<bool>) -> Self {
        Self::new(Slot::Flag(cell))
    }

    /// An option that takes one argument and stores it in `cell`.
    pub const fn value(cell: &'a Cell<Option<&'a str>>) -> Self {
        Self::new(Slot::Value(cell))
    }

    pub const fn new(slot: Slot<'a>) -> Self {
        Self {
            help: "",
            long: None,
            short: None,
            default: None,
            slot,
        }
    }

    pub const fn long(mut self, name: &'a str) -> Self {
        self.long = Some(name);
        self
    }

    pub const fn short(mut self, name: char) -> Self {
        self.short = Some(name);
        self
    }

    pub const fn help(mut self, text: &'a str) -> Self {
        self.help = text;
        self
    }

    /// Value written before scanning. Ignored for flags.
    pub const fn default(mut self, value: &'a str) -> Self {
        self.default = Some(value);
        self
    }

    #[inline]
    pub const fn long_name(&self) -> Option<&'a str> {
        self.long
    }

    #[inline]
    pub const fn short_name(&self) -> Option<char> {
        self.short
    }

    #[inline]
    pub const fn help_text(&self) -> &'a str {
        self.help
    }

    /// The configured default, if the option takes an argument and has a
    /// non-empty one.
    pub fn default_value(&self) -> Option<&'a str> {
        match (self.slot, self.default) {
            (Slot::Value(_), Some(value)) if !value.is_empty() => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub const fn takes_argument(&self) -> bool {
        matches!(self.slot, Slot::Value(_))
    }

    #[inline]
    pub const fn slot(&self) -> Slot<'a> {
        self.slot
    }

    /// The name used to refer to this option in messages: `--long` when
    /// available, `-s` otherwise.
    pub(crate) fn display_name(&self) -> String {
        match (self.long, self.short) {
            (Some(long), _) => format!("--{long}"),
            (None, Some(short)) => format!("-{short}"),
            (None, None) => String::new(),
        }
    }
}

/// Program-level information documented by the help text.
#[derive(Clone, Copy)]
pub struct Metadata<'m, 'a> {
    pub name: &'m str,
    pub description: &'m str,
    pub usage: &'m str,
    pub options: &'m [Descriptor<'a>],
}

impl<'m, 'a> Metadata<'m, 'a> {
    pub const fn new(
        name: &'m str,
        description: &'m str,
        usage: &'m str,
        options: &'m [Descriptor<'a>],
    ) -> Self {
        Self {
            name,
            description,
            usage,
            options,
        }
    }
}

/// Checks the table invariants.
///
/// # Panics
///
/// When a descriptor has neither name, a name is malformed, a help text is
/// longer than [`HELP_LIMIT`] characters, or a name appears twice. These are
/// mistakes in the program, not in its input.
pub fn validate(options: &[Descriptor]) {
    for (index, option) in options.iter().enumerate() {
        let earlier = &options[..index];
        assert!(
            option.long.is_some() || option.short.is_some(),
            "Option at index {index} has neither a long nor a short name."
        );
        assert!(
            option.help.chars().count() <= HELP_LIMIT,
            "Help text of option '{}' exceeds {HELP_LIMIT} characters.",
            option.display_name()
        );
        if let Some(long) = option.long {
            assert!(
                valid_long(long),
                "Invalid long name '{long}' at index {index}. A valid long name is non-empty and contains no whitespace or '='."
            );
            assert!(
                !earlier.iter().any(|other| other.long == Some(long)),
                "Duplicate long name '{long}'."
            );
        }
        if let Some(short) = option.short {
            assert!(
                short.is_alphanumeric(),
                "Invalid short name '{short}' at index {index}. A valid short name is a single alphanumeric character."
            );
            assert!(
                !earlier.iter().any(|other| other.short == Some(short)),
                "Duplicate short name '{short}'."
            );
        }
    }
}

fn valid_long(name: &str) -> bool {
    !name.is_empty() && !name.chars().any(|letter| letter.is_whitespace() || letter == '=')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_table() {
        let (help, output, input) = (Cell::new(false), Cell::new(None), Cell::new(None));
        validate(&[
            Descriptor::flag(&help).long("help").short('h'),
            Descriptor::value(&output).long("output").short('o').default("test.c"),
            Descriptor::value(&input).short('i'),
        ]);
    }

    #[test]
    fn default_is_ignored_for_flags() {
        let flag = Cell::new(false);
        let option = Descriptor::flag(&flag).short('f').default("yes");
        assert_eq!(option.default_value(), None);
        let value = Cell::new(None);
        let option = Descriptor::value(&value).short('v').default("");
        assert_eq!(option.default_value(), None);
    }

    #[test]
    #[should_panic(expected = "neither a long nor a short name")]
    fn rejects_nameless_option() {
        let flag = Cell::new(false);
        validate(&[Descriptor::flag(&flag).help("nothing")]);
    }

    #[test]
    #[should_panic(expected = "Duplicate long name 'output'")]
    fn rejects_duplicate_long_name() {
        let (a, b) = (Cell::new(None), Cell::new(None));
        validate(&[
            Descriptor::value(&a).long("output"),
            Descriptor::value(&b).long("output").short('o'),
        ]);
    }

    #[test]
    #[should_panic(expected = "Duplicate short name 'v'")]
    fn rejects_duplicate_short_name() {
        let (a, b) = (Cell::new(false), Cell::new(false));
        validate(&[
            Descriptor::flag(&a).short('v'),
            Descriptor::flag(&b).long("version").short('v'),
        ]);
    }

    #[test]
    #[should_panic(expected = "Invalid long name")]
    fn rejects_long_name_with_equals() {
        let flag = Cell::new(false);
        validate(&[Descriptor::flag(&flag).long("a=b")]);
    }

    #[test]
    #[should_panic(expected = "Invalid short name")]
    fn rejects_punctuation_short_name() {
        let flag = Cell::new(false);
        validate(&[Descriptor::flag(&flag).short('?')]);
    }

    #[test]
    #[should_panic(expected = "exceeds 255 characters")]
    fn rejects_long_help_text() {
        let flag = Cell::new(false);
        let help = "x".repeat(HELP_LIMIT + 1);
        validate(&[Descriptor::flag(&flag).short('x').help(&help)]);
    }
}
