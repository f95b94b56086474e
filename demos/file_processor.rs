use cmdparser::{parse, print_help, Descriptor, Metadata};
use std::{cell::Cell, env, error, process::ExitCode};

fn main() -> Result<ExitCode, Box<dyn error::Error>> {
    let arguments: Vec<String> = env::args().collect();

    let help = Cell::new(false);
    let verbose = Cell::new(false);
    let output = Cell::new(None);
    let input = Cell::new(None);
    let options = [
        Descriptor::flag(&help).long("help").short('h').help("Help info"),
        Descriptor::flag(&verbose).long("verbose").short('v').help("Verbose flag"),
        Descriptor::value(&output)
            .long("output")
            .short('o')
            .default("test.c")
            .help("Output file"),
        Descriptor::value(&input).short('i').help("Option sort"),
    ];
    let name = arguments.first().map_or("file_processor", String::as_str);
    let meta = Metadata::new(
        name,
        "File Processor - processes input files and generates output",
        "[FILE...]",
        &options,
    );

    let index = match parse(&arguments, &options) {
        Ok(index) => index,
        Err(error) => {
            eprintln!("{name}: {error}");
            return Ok(ExitCode::FAILURE);
        }
    };

    if help.get() {
        print_help(&meta)?;
        return Ok(ExitCode::SUCCESS);
    }

    println!("Verbose mode: {}", if verbose.get() { "ON" } else { "OFF" });
    if let Some(output) = output.get() {
        println!("Output file: {output}");
    }
    println!("Positional arguments:");
    for (position, argument) in arguments[index..].iter().enumerate() {
        println!("  {}: {argument}", position + 1);
    }
    Ok(ExitCode::SUCCESS)
}
