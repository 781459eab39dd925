use anyhow::{anyhow, Error};
use clap::{App, Arg};
use std::fs::File;
use std::io::Read;
use textdup::{duplicate_elements, Collation};

type Result<T> = std::result::Result<T, Error>;

const DEMO_TEXT: &str = "abcAAbEEe";

fn read_input(text: Option<&str>, filename: Option<&str>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text.to_string());
    }

    let mut reader: Box<dyn ::std::io::Read + 'static> = match filename {
        Some("-") => Box::new(::std::io::stdin()),
        Some(path) => {
            let f: File = File::open(path)?;
            Box::new(f)
        }
        None => return Ok(DEMO_TEXT.to_string()),
    };

    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;

    let mut text =
        String::from_utf8(buffer).map_err(|e| anyhow!("Input is not valid UTF-8: {}", e))?;

    // Editors and shells terminate input with a newline that is not part
    // of the text under analysis.
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }

    Ok(text)
}

fn main() -> Result<()> {
    let matches = App::new("textdup")
        .version("1.0")
        .about("Find the text elements that occur more than once in a string")
        .arg(
            Arg::with_name("text")
                .value_name("TEXT")
                .required(false)
                .takes_value(true)
                .index(1)
                .conflicts_with("file"),
        )
        .arg(
            Arg::with_name("file")
                .short("f")
                .long("file")
                .value_name("FILE")
                .help("Read the text from a file, or - for stdin")
                .required(false)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("locale")
                .short("l")
                .long("locale")
                .value_name("TAG")
                .help("Locale tag selecting the collation, e.g. tr or en-US")
                .required(false)
                .takes_value(true),
        )
        .get_matches();

    let collation = match matches.value_of("locale") {
        Some(tag) => tag.parse::<Collation>()?,
        None => Collation::from_env(),
    };

    let text = read_input(matches.value_of("text"), matches.value_of("file"))?;
    let duplicates = duplicate_elements(&text, collation);

    println!("{}", duplicates.join(", "));

    Ok(())
}
