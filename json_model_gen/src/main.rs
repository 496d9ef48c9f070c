//! Binary to generate model declarations from a sample JSON document.
//!
//! Usage: `jsonmodelgen sample.json --inspect-arrays -o Sample.swift`
//!
//! Reads the sample from a file (or stdin when no file or `-` is given) and
//! writes the generated models to `--out` (or stdout).

use std::io::{Write, read_to_string, stdin, stdout};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use heck::ToUpperCamelCase;
use json_model_gen::{DEFAULT_INDENT_WIDTH, GenerateSettings, JsonModelGenError, generate_to_writer};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Infer model declarations from a sample JSON document
#[derive(Parser, Debug)]
#[command(name = "jsonmodelgen", version, about)]
struct Cli {
    /// Sample JSON file; stdin when omitted or `-`
    input: Option<PathBuf>,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Root model name; derived from the input file name when omitted
    #[arg(long)]
    root_name: Option<String>,

    /// Type array fields from their first element instead of passing them through
    #[arg(long, default_value_t = false)]
    inspect_arrays: bool,

    /// Spaces per indentation level
    #[arg(long, default_value_t = DEFAULT_INDENT_WIDTH)]
    indent_width: usize,
}

impl Cli {
    /// Input file path, or `None` for stdin.
    fn input_file(&self) -> Option<&Path> {
        self.input.as_deref().filter(|p| *p != Path::new("-"))
    }

    fn root_name(&self) -> String {
        self.root_name
            .clone()
            .unwrap_or_else(|| default_root_name(self.input_file()))
    }

    fn settings(&self) -> GenerateSettings {
        GenerateSettings {
            inspect_arrays: self.inspect_arrays,
            indent_width: self.indent_width,
        }
    }
}

/// `UpperCamelCase` of the input file stem, or `Root` when that is unusable.
fn default_root_name(input: Option<&Path>) -> String {
    input
        .and_then(Path::file_stem)
        .map(|stem| stem.to_string_lossy().to_upper_camel_case())
        .filter(|name| name.chars().next().is_some_and(char::is_alphabetic))
        .unwrap_or_else(|| "Root".to_string())
}

fn run(cli: &Cli) -> Result<(), JsonModelGenError> {
    let json_text: String = match cli.input_file() {
        Some(path) => std::fs::read_to_string(path)?,
        None => read_to_string(stdin())?,
    };
    let root_name: String = cli.root_name();
    let settings: GenerateSettings = cli.settings();
    info!(root_name = %root_name, inspect_arrays = settings.inspect_arrays, "generating models");

    let mut buffer: Vec<u8> = Vec::new();
    generate_to_writer(&json_text, &root_name, &mut buffer, &settings)?;

    match cli.out.as_deref() {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, &buffer)?;
        }
        None => {
            let mut out: std::io::StdoutLock<'static> = stdout().lock();
            out.write_all(&buffer)?;
            out.flush()?;
        }
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli: Cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_root_name_from_file_stem() {
        let actual: String = default_root_name(Some(Path::new("data/person_record.json")));
        assert_eq!("PersonRecord", actual);
    }

    #[test]
    fn default_root_name_from_hyphenated_stem() {
        let actual: String = default_root_name(Some(Path::new("order-items.json")));
        assert_eq!("OrderItems", actual);
    }

    #[test]
    fn default_root_name_falls_back_for_stdin() {
        assert_eq!("Root", default_root_name(None));
    }

    #[test]
    fn default_root_name_falls_back_for_numeric_stem() {
        assert_eq!("Root", default_root_name(Some(Path::new("2024.json"))));
    }

    #[test]
    fn dash_input_means_stdin() {
        let cli: Cli = Cli::parse_from(["jsonmodelgen", "-"]);
        assert!(cli.input_file().is_none());
        assert_eq!("Root", cli.root_name());
    }

    #[test]
    fn flags_map_onto_settings() {
        let cli: Cli = Cli::parse_from([
            "jsonmodelgen",
            "order.json",
            "--inspect-arrays",
            "--indent-width",
            "2",
            "--root-name",
            "Purchase",
        ]);
        let settings: GenerateSettings = cli.settings();
        assert!(settings.inspect_arrays);
        assert_eq!(2, settings.indent_width);
        assert_eq!("Purchase", cli.root_name());
        assert_eq!(Some(Path::new("order.json")), cli.input_file());
    }

    #[test]
    fn defaults_match_library_defaults() {
        let cli: Cli = Cli::parse_from(["jsonmodelgen"]);
        let settings: GenerateSettings = cli.settings();
        assert!(!settings.inspect_arrays);
        assert_eq!(DEFAULT_INDENT_WIDTH, settings.indent_width);
        assert!(cli.out.is_none());
    }
}
