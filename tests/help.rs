use cmdparser::{
    help, render,
    style::{Plain, Terminal},
    Descriptor, Metadata,
};
use std::{cell::Cell, fmt};

fn line(left: &str, help: &str) -> String {
    format!("{left:<30}{help}\n")
}

#[test]
fn file_processor_help() {
    let help_flag = Cell::new(false);
    let verbose = Cell::new(false);
    let output = Cell::new(None);
    let input = Cell::new(None);
    let options = [
        Descriptor::flag(&help_flag).long("help").short('h').help("Help info"),
        Descriptor::flag(&verbose).long("verbose").short('v').help("Verbose flag"),
        Descriptor::value(&output)
            .long("output")
            .short('o')
            .default("test.c")
            .help("Output file"),
        Descriptor::value(&input).short('i').help("Option sort"),
    ];
    let meta = Metadata::new(
        "prog",
        "File Processor - processes input files and generates output",
        "[FILE...]",
        &options,
    );

    let expected = [
        "File Processor - processes input files and generates output\n".to_owned(),
        "\n".to_owned(),
        "Usage: prog [OPTIONS] [FILE...]\n".to_owned(),
        "\n".to_owned(),
        "Options:\n".to_owned(),
        line("  -h, --help", "Help info"),
        line("  -v, --verbose", "Verbose flag"),
        line("  -o, --output=ARG", "Output file (default: test.c)"),
        line("  -i ARG", "Option sort"),
    ]
    .concat();
    let text = help(&meta);
    assert_eq!(text, expected);
    assert_eq!(text.matches("(default: test.c)").count(), 1);

    // Rendering leaves the slots alone.
    assert!(!help_flag.get() && !verbose.get());
    assert_eq!(output.get(), None);
}

#[test]
fn long_left_column_breaks_the_line() {
    let value = Cell::new(None);
    let options = [Descriptor::value(&value)
        .long("a-very-long-option-name")
        .help("Something long")];
    let text = help(&Metadata::new("prog", "", "", &options));
    assert!(text.ends_with(&format!(
        "      --a-very-long-option-name=ARG\n{:30}Something long\n",
        ""
    )));
}

#[test]
fn left_column_reaching_the_help_column_breaks_the_line() {
    let value = Cell::new(None);
    let options = [Descriptor::value(&value)
        .long("abcdefghijklmnopqr")
        .help("Fits")];
    let text = help(&Metadata::new("prog", "", "", &options));
    assert!(text.ends_with(&format!(
        "      --abcdefghijklmnopqr=ARG\n{:30}Fits\n",
        ""
    )));
}

#[test]
fn short_left_column_is_padded() {
    let value = Cell::new(None);
    // Two columns short of the help text.
    let options = [Descriptor::value(&value)
        .long("abcdefghijklmnop")
        .help("Fits")];
    let text = help(&Metadata::new("prog", "", "", &options));
    assert!(text.ends_with("      --abcdefghijklmnop=ARG  Fits\n"));
}

#[test]
fn default_without_help_text() {
    let value = Cell::new(None);
    let options = [Descriptor::value(&value).short('l').default("3")];
    let text = help(&Metadata::new("prog", "", "", &options));
    assert!(text.ends_with(&line("  -l ARG", "(default: 3)")));
}

#[test]
fn multi_line_description_is_kept() {
    let flag = Cell::new(false);
    let options = [Descriptor::flag(&flag).short('q').help("Quiet")];
    let text = help(&Metadata::new(
        "prog",
        "First line.\nSecond line.\n",
        "",
        &options,
    ));
    assert!(text.starts_with("First line.\nSecond line.\n\nUsage: prog [OPTIONS]\n\nOptions:\n"));
}

#[test]
fn rendering_is_deterministic() -> Result<(), fmt::Error> {
    let flag = Cell::new(false);
    let value = Cell::new(None);
    let options = [
        Descriptor::flag(&flag).long("force").short('f').help("Overwrite"),
        Descriptor::value(&value).long("level").default("6").help("Compression level"),
    ];
    let meta = Metadata::new("gz", "Compresses.", "FILE", &options);
    assert_eq!(help(&meta), help(&meta));
    assert_eq!(render(&meta, &Plain)?, help(&meta));
    Ok(())
}

#[test]
fn terminal_style_adds_escape_codes() -> Result<(), fmt::Error> {
    let flag = Cell::new(false);
    let options = [Descriptor::flag(&flag).long("force").short('f').help("Overwrite")];
    let meta = Metadata::new("gz", "", "", &options);
    let styled = render(&meta, &Terminal)?;
    assert!(styled.contains('\x1b'));
    assert!(!help(&meta).contains('\x1b'));
    assert!(styled.contains("Overwrite"));
    Ok(())
}
