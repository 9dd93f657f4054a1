use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use hilite_render::{to_ansi, to_html, to_json, Theme};
use log::debug;

#[derive(Debug, Parser)]
#[command(
    name = "hilite",
    version,
    about = "Annotate source code with lexical categories",
    long_about = "hilite partitions source text into plain-text and categorized token\n\
        fragments using per-language token patterns, then renders the result\n\
        as ANSI-colored text, HTML span markup, or JSON.\n\n\
        EXAMPLES:\n\
        \n  hilite --lang python script.py             Colorize a Python file\n\
        \n  hilite --lang c --format html main.c       Emit HTML spans\n\
        \n  echo 'x = 1' | hilite --format json        Annotate stdin as JSON\n\
        \n  hilite --list                              List known languages"
)]
struct Cli {
    /// Input file (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Language whose token patterns to annotate with
    #[arg(short, long, value_name = "LANG", default_value = "python")]
    lang: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Ansi)]
    format: Format,

    /// List known languages and exit
    #[arg(long)]
    list: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Ansi,
    Html,
    Json,
}

fn read_source_from_input(input: &Option<PathBuf>) -> Result<String, String> {
    if let Some(path) = input {
        fs::read_to_string(path).map_err(|e| format!("failed to read '{}': {e}", path.display()))
    } else {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("failed to read from stdin: {e}"))?;
        Ok(buf)
    }
}

fn run_cli() -> i32 {
    let _ = env_logger::try_init();
    let cli = Cli::parse();

    if cli.list {
        for name in hilite_langs::names() {
            println!("{name}");
        }
        return 0;
    }

    let Some(language) = hilite_langs::lookup(&cli.lang) else {
        eprintln!("error: unknown language '{}' (try --list)", cli.lang);
        return 2;
    };

    let source = match read_source_from_input(&cli.input) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };

    let annotator = match language.annotator() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("error: definitions for '{}' are defective: {e}", language.name);
            return 2;
        }
    };

    let fragments = match annotator.annotate(&source) {
        Ok(fragments) => fragments,
        Err(e) => {
            // Recoverable: emit the input unannotated instead of failing.
            eprintln!("warning: {e}; emitting input unannotated");
            print!("{source}");
            return 0;
        }
    };
    debug!("annotated {} fragments", fragments.len());

    match cli.format {
        Format::Ansi => print!("{}", to_ansi(&fragments, &Theme::default())),
        Format::Html => print!("{}", to_html(&fragments)),
        Format::Json => match to_json(&fragments) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: failed to serialize JSON: {e}");
                return 2;
            }
        },
    }
    0
}

fn main() {
    std::process::exit(run_cli());
}
