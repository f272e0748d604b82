//! jsontree CLI.
//!
//! Thin file-loading collaborator around the library: reads a document from
//! disk, parses it, and optionally looks up a dotted path.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use jsontree::{Limits, Number, Value};

#[derive(Parser)]
#[command(name = "jsontree")]
#[command(about = "Parse JSON documents into a value tree and query them", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a document and report whether it is valid
    Check {
        /// Path to the JSON document
        file: PathBuf,

        /// Apply the strict resource limits profile
        #[arg(long)]
        strict: bool,
    },

    /// Look up a dotted path (e.g. `servers.0.host`) in a document
    Get {
        /// Path to the JSON document
        file: PathBuf,

        /// Dotted path; numeric segments index into arrays
        path: String,

        /// Apply the strict resource limits profile
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { file, strict } => check(&file, limits_for(strict)),
        Commands::Get { file, path, strict } => get(&file, &path, limits_for(strict)),
    }
}

fn limits_for(strict: bool) -> Limits {
    if strict {
        Limits::strict()
    } else {
        Limits::standard()
    }
}

fn load(file: &Path) -> Result<Vec<u8>, ExitCode> {
    fs::read(file).map_err(|err| {
        eprintln!("error: cannot read {}: {}", file.display(), err);
        ExitCode::FAILURE
    })
}

fn check(file: &Path, limits: Limits) -> ExitCode {
    let input = match load(file) {
        Ok(bytes) => bytes,
        Err(code) => return code,
    };

    let mut parser = match jsontree::Parser::new(&input, limits) {
        Ok(parser) => parser,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    match parser.parse() {
        Ok(root) => {
            println!(
                "ok: root is {}, {} distinct strings",
                root.type_name(),
                parser.interned_strings()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn get(file: &Path, path: &str, limits: Limits) -> ExitCode {
    let input = match load(file) {
        Ok(bytes) => bytes,
        Err(code) => return code,
    };

    let root = match jsontree::parse_with_limits(&input, limits) {
        Ok(root) => root,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    match root.lookup(path) {
        Ok(value) => {
            println!("{}", render(value));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// One-line summary of a value. Scalars print their contents; composites
/// print their kind and size (serialization is out of scope).
fn render(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(Number::Int(n)) => n.to_string(),
        Value::Number(Number::Float(f)) => f.to_string(),
        Value::String(s) => s.to_string(),
        Value::Array(items) => format!("array with {} elements", items.len()),
        Value::Object(pairs) => format!("object with {} fields", pairs.len()),
    }
}
