use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{Context, bail};
use clap::{CommandFactory, Parser, ValueEnum};
use symdex::IndexBuilder;
use symdex::emit::{Config, Format, render};
use symdex::vocab::Vocabulary;

use super::resolve_path;

/// Generate the static symbol index for the embedded runtime.
#[derive(Debug, Parser)]
#[command(name = "sym-index", disable_help_subcommand = true)]
struct SymIndexCli {
    /// Vocabulary file: one name per line, or a YAML list for .yaml/.yml files.
    /// Defaults to the runtime's built-in symbols.
    #[arg(long, value_name = "path")]
    vocab: Option<PathBuf>,
    /// Start from an empty vocabulary instead of the built-in symbols.
    #[arg(long, conflicts_with = "vocab")]
    no_builtin: bool,
    /// Symbol appended after the vocabulary (repeatable).
    #[arg(long = "append", value_name = "name")]
    appended: Vec<String>,
    /// Output syntax.
    #[arg(long, value_enum, value_name = "format", default_value_t = OutputFormat::C, ignore_case = true)]
    format: OutputFormat,
    /// Name of the emitted array.
    #[arg(long, value_name = "ident")]
    name: Option<String>,
    /// Write the table to this file instead of stdout.
    #[arg(long, value_name = "path")]
    output: Option<PathBuf>,
    /// Fail if the file given by --output is missing or out of date instead of writing it.
    #[arg(long, requires = "output")]
    check: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    #[value(name = "c")]
    C,
    #[value(name = "rust")]
    Rust,
}

impl From<OutputFormat> for Format {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::C => Format::C,
            OutputFormat::Rust => Format::Rust,
        }
    }
}

pub fn run(args: Vec<String>) -> ExitCode {
    if args.len() == 1 && matches!(args[0].as_str(), "--help" | "-h") {
        let mut command = SymIndexCli::command();
        print!("{}", command.render_long_help());
        println!();
        return ExitCode::SUCCESS;
    }

    let cli = match parse_sym_index_args(args) {
        Ok(cli) => cli,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::from(1);
        }
    };

    match generate(&cli) {
        Ok(SymIndexOutcome::Printed(rendered)) => {
            print!("{rendered}");
            ExitCode::SUCCESS
        }
        Ok(SymIndexOutcome::Written(path)) => {
            println!("[OK] Wrote symbol index: {}", path.display());
            ExitCode::SUCCESS
        }
        Ok(SymIndexOutcome::UpToDate(path)) => {
            println!("[OK] Symbol index is up to date: {}", path.display());
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::from(1)
        }
    }
}

#[derive(Debug)]
enum SymIndexOutcome {
    Printed(String),
    Written(PathBuf),
    UpToDate(PathBuf),
}

fn parse_sym_index_args(args: Vec<String>) -> Result<SymIndexCli, String> {
    SymIndexCli::try_parse_from(std::iter::once("sym-index".to_string()).chain(args))
        .map_err(|error| error.to_string())
}

fn load_vocabulary(cli: &SymIndexCli) -> anyhow::Result<Vocabulary> {
    let mut vocabulary = match &cli.vocab {
        Some(path) => {
            let path = resolve_path(path);
            Vocabulary::load(&path)
                .with_context(|| format!("loading vocabulary from '{}'", path.display()))?
        }
        None if cli.no_builtin => Vocabulary::new(),
        None => Vocabulary::builtin(),
    };
    vocabulary.extend(cli.appended.iter().cloned());
    vocabulary.check_names()?;
    Ok(vocabulary)
}

fn generate(cli: &SymIndexCli) -> anyhow::Result<SymIndexOutcome> {
    let vocabulary = load_vocabulary(cli)?;
    let table = IndexBuilder::from_iter(&vocabulary)
        .build()
        .context("building symbol index")?;

    let mut config = Config::new().with_format(cli.format.into());
    if let Some(name) = &cli.name {
        config = config.with_name(name.clone());
    }
    let rendered = render(&table, &config)?;

    let Some(output) = &cli.output else {
        return Ok(SymIndexOutcome::Printed(rendered));
    };
    let path = resolve_path(output);
    if cli.check {
        check_output(&path, &rendered)?;
        return Ok(SymIndexOutcome::UpToDate(path));
    }
    write_output(&path, &rendered)?;
    tracing::info!(path = %path.display(), symbols = table.len(), "wrote symbol index");
    Ok(SymIndexOutcome::Written(path))
}

fn check_output(path: &Path, rendered: &str) -> anyhow::Result<()> {
    if !path.is_file() {
        bail!("'{}' does not exist; run `cargo xtask sym-index` to create it", path.display());
    }
    let existing = fs::read_to_string(path)
        .with_context(|| format!("reading '{}'", path.display()))?;
    if existing != rendered {
        bail!(
            "'{}' is out of date; rerun `cargo xtask sym-index` to regenerate it",
            path.display()
        );
    }
    Ok(())
}

fn write_output(path: &Path, rendered: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating directory '{}'", parent.display()))?;
    }
    fs::write(path, rendered).with_context(|| format!("writing '{}'", path.display()))
}
