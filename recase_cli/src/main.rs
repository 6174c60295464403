use clap::{App, Arg};
use recase::{transform_value, Transform};
use std::fmt::{Display, Formatter};
use std::io::Read;
use std::process;

#[derive(Debug)]
enum CliError {
    UnknownTransform(String),
    InputReadingError(std::io::Error),
    JsonParsingError(serde_json::Error),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::UnknownTransform(name) => {
                write!(
                    f,
                    "Unknown transform '{}'. Expected camel, simple-camel, kebab or dot",
                    name
                )
            }
            CliError::InputReadingError(_) => {
                write!(f, "An error occurred while reading input from stdin")
            }
            CliError::JsonParsingError(_) => {
                write!(f, "An error occurred while parsing the input as JSON")
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::UnknownTransform(_) => None,
            CliError::InputReadingError(e) => Some(e),
            CliError::JsonParsingError(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::InputReadingError(err)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::JsonParsingError(err)
    }
}

fn main() {
    let matches = App::new("recase")
        .version("0.1.0")
        .about("Convert strings between camelCase, kebab-case and dot.case")
        .arg(
            Arg::with_name("to")
                .long("to")
                .short("t")
                .help("The target convention: camel, simple-camel, kebab or dot")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("json")
                .long("json")
                .help("Parse the input as a JSON value; non-string values convert to nothing"),
        )
        .arg(Arg::with_name("input").help("The string to convert. Reads stdin when omitted."))
        .get_matches();

    let target = matches.value_of("to").unwrap();
    let input = matches.value_of("input").map(str::to_owned);
    let as_json = matches.is_present("json");

    match run(target, input, as_json) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}

fn run(target: &str, input: Option<String>, as_json: bool) -> Result<String, CliError> {
    let transform =
        Transform::parse(target).ok_or_else(|| CliError::UnknownTransform(target.to_owned()))?;

    let input = match input {
        Some(arg) => arg,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            // drop the trailing newline a shell pipe usually appends
            buffer.trim_end_matches(&['\r', '\n'][..]).to_owned()
        }
    };

    if as_json {
        let value: serde_json::Value = serde_json::from_str(&input)?;
        Ok(transform_value(&value, transform))
    } else {
        Ok(transform.apply(&input))
    }
}
