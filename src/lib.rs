//! Table-driven command-line option parsing.
//!
//! Options are described by a slice of [`Descriptor`]s, each pointing at a
//! caller-owned [`Cell`](core::cell::Cell). [`parse`] walks the argument
//! vector once, fills those cells and returns where the positional arguments
//! start. [`help`] renders a usage page from the same table.
//!
//! ```
//! use cmdparser::{help, parse, Descriptor, Error, Metadata};
//! use std::cell::Cell;
//!
//! let show = Cell::new(false);
//! let verbose = Cell::new(false);
//! let output = Cell::new(None);
//! let options = [
//!     Descriptor::flag(&show).long("help").short('h').help("Help info"),
//!     Descriptor::flag(&verbose).long("verbose").short('v').help("Verbose flag"),
//!     Descriptor::value(&output).long("output").short('o').default("test.c").help("Output file"),
//! ];
//!
//! let arguments = ["prog", "-v", "--", "-x"];
//! let index = parse(&arguments, &options)?;
//! assert!(verbose.get());
//! assert_eq!(output.get(), Some("test.c"));
//! assert_eq!(&arguments[index..], ["-x"]);
//!
//! let meta = Metadata::new("prog", "Processes files.", "[FILE...]", &options);
//! assert!(help(&meta).contains("(default: test.c)"));
//! # Ok::<(), Error>(())
//! ```

mod error;
mod help;
mod option;
mod parse;
mod spell;
pub mod style;

pub use crate::{
    error::Error,
    help::{help, print_help, render, write_help},
    option::{validate, Descriptor, Metadata, Slot, HELP_LIMIT},
    parse::{parse, parse_options},
};
