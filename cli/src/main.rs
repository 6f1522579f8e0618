use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};

use clap::Parser;
use serde::Serialize;
use jsonparse::Value;

#[derive(Parser, Debug)]
#[command(name = "jsonparse", version, about = "Strict JSON syntax checker")]
struct Args {
    /// Input file path. Omit or use '-' to read from stdin.
    input: Option<String>,

    /// Suppress the confirmation message on success.
    #[arg(short, long)]
    quiet: bool,

    /// Print the parsed document to stdout.
    #[arg(short, long)]
    pretty: bool,

    /// Indentation size for --pretty (0 means compact).
    #[arg(long, value_name = "number", default_value_t = 2)]
    indent: usize,
}

#[derive(Debug)]
enum InputSource {
    Stdin,
    File(String),
}

impl InputSource {
    fn label(&self) -> &str {
        match self {
            InputSource::Stdin => "stdin",
            InputSource::File(path) => path,
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("ERROR  {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let (input_text, input_source) = read_input(args.input.as_deref())?;

    let value = jsonparse::parse_str(&input_text)?;

    if !args.quiet {
        println!("Successfully parsed {}", input_source.label());
    }

    if args.pretty {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        write_json(&mut handle, &value, args.indent)?;
        writeln!(handle)?;
    }

    Ok(())
}

fn read_input(input: Option<&str>) -> Result<(String, InputSource), Box<dyn Error>> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok((buf, InputSource::Stdin))
        }
        Some(path) => {
            let buf = fs::read_to_string(path)?;
            Ok((buf, InputSource::File(path.to_string())))
        }
    }
}

fn write_json(writer: &mut dyn Write, value: &Value, indent: usize) -> Result<(), Box<dyn Error>> {
    if indent == 0 {
        writer.write_all(jsonparse::to_string(value).as_bytes())?;
        return Ok(());
    }

    let indent_bytes = vec![b' '; indent];
    let formatter = serde_json::ser::PrettyFormatter::with_indent(&indent_bytes);
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    value.serialize(&mut serializer)?;
    Ok(())
}
