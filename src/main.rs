use clap::{CommandFactory, Parser, ValueEnum};
use log::{LevelFilter, debug, info};
use std::ffi::OsString;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use treescribe::{
    ConnectorStyle, Result, TraversalOptions, TreeError, dump_contents, render_tree,
};

const LONG_HELP: &str = r#"
Always ignored directories:
  .git, node_modules, venv, env

Dumped extensions (--output-contents):
  .js .py .c .h .go .html .css .scss .txt .json .md

Examples:
  # Tree of the current directory
  treescribe
  # Tree of another directory, dotfiles included
  treescribe -p ~/project -i
  # Skip build output as well
  treescribe --ignore target,dist
  # Dump every source file instead of the tree
  treescribe --output-contents
  # Save the dump to a file
  treescribe --output-contents -o context.txt
  # Draw continuation bars
  treescribe --style bars
"#;

/// Directory tree and file contents for LLM context building.
///
/// Licensed under the EUPL v1.2.
#[derive(Parser, Debug)]
#[command(
    name = "treescribe",
    version,
    about = "Directory tree and file contents for LLM context building.",
    after_long_help = LONG_HELP
)]
struct Cli {
    /// Path to the directory
    #[arg(short, long, value_name = "DIR", default_value = ".", env = "TREESCRIBE_PATH")]
    path: OsString,

    /// Include hidden files and folders
    #[arg(short, long)]
    include_hidden: bool,

    /// Comma-separated list of additional folders to ignore
    #[arg(long, value_name = "CSV", default_value = "")]
    ignore: String,

    /// Output file contents instead of the tree
    #[arg(long)]
    output_contents: bool,

    /// Connector glyphs for the tree
    #[arg(long, value_enum, default_value = "plain")]
    style: Style,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Increase verbosity (can be used multiple times)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all diagnostics except errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Style {
    /// `└── ` on every line
    Plain,
    /// `├── ` for folders, `│   ` continuation bars
    Bars,
}

impl From<Style> for ConnectorStyle {
    fn from(style: Style) -> Self {
        match style {
            Style::Plain => Self::Plain,
            Style::Bars => Self::Bars,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    if cli.path.is_empty() {
        // Nothing to walk; show usage instead.
        if let Err(e) = Cli::command().print_help() {
            report_error(&TreeError::Io(e));
        }
        return;
    }

    let options = TraversalOptions::new(&cli.path)
        .with_include_hidden(cli.include_hidden)
        .with_extra_ignores(&cli.ignore)
        .with_style(cli.style.into());

    let result = if cli.output_contents {
        write_contents(&options, cli.output.as_ref())
    } else {
        write_tree(&options, cli.output.as_ref())
    };

    if let Err(e) = result {
        report_error(&e);
    }
}

/// Prints `Error: <message>` on stdout; the exit status stays 0.
///
/// A reader that hung up (`treescribe | head`) is not a failure, and stdout
/// is unusable afterwards, so nothing is printed in that case.
fn report_error(err: &TreeError) {
    if let TreeError::Io(io_err) = err
        && io_err.kind() == io::ErrorKind::BrokenPipe
    {
        debug!("Output closed early: {io_err}");
        return;
    }

    let _ = writeln!(io::stdout().lock(), "Error: {err}");
}

fn init_logging(quiet: bool, verbose: u8) {
    let level = match (quiet, verbose) {
        (true, _) => LevelFilter::Error,
        (false, 0) => LevelFilter::Warn,
        (false, 1) => LevelFilter::Info,
        (false, 2) => LevelFilter::Debug,
        (false, _) => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .format_target(false)
        .parse_env(env_logger::Env::new().filter("TREESCRIBE_LOG"))
        .init();
}

fn write_tree(options: &TraversalOptions, output: Option<&PathBuf>) -> Result<()> {
    if let Some(output_path) = output {
        info!("Writing tree to {}", output_path.display());
        let mut file = BufWriter::new(File::create(output_path)?);
        render_tree(options, &mut file)?;
        file.flush()?;
    } else {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        render_tree(options, &mut handle)?;
    }

    Ok(())
}

fn write_contents(options: &TraversalOptions, output: Option<&PathBuf>) -> Result<()> {
    let contents = dump_contents(options)?;

    if let Some(output_path) = output {
        info!("Writing contents to {}", output_path.display());
        std::fs::write(output_path, contents)?;
    } else {
        let mut stdout = io::stdout();
        stdout.write_all(&contents)?;
        stdout.flush()?;
    }

    Ok(())
}
