//! blockdoc - Command-line entry point
//!
//! Builds a standalone HTML page from a JSON, YAML or TOML description file.

use blockdoc::config::{load_config, save_config_silent};
use blockdoc::document::{load_document, LoadedDocument};
use blockdoc::error::Result;
use blockdoc::render::{extract, navigation::duplicate_anchors};
use blockdoc::{export, ContentMode, ExportFormat, ExportOutcome, Logo};
use clap::{Args, Parser, Subcommand};
use log::{error, info, warn};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Application name constant.
const APP_NAME: &str = "blockdoc";

/// blockdoc - Block documents to standalone HTML.
#[derive(Parser)]
#[command(name = "blockdoc", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the document to an HTML file.
    Export {
        #[command(flatten)]
        page: PageArgs,
        /// Output file (defaults to the configured name and directory).
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Open the exported file with the system viewer.
        #[arg(long)]
        open: bool,
    },
    /// Copy the document's HTML source to the clipboard.
    Copy {
        #[command(flatten)]
        page: PageArgs,
    },
    /// Print the side-navigation entries of a document.
    Outline {
        /// Description file (.json, .yaml, .yml or .toml).
        source: PathBuf,
    },
    /// Print block counts of a document.
    Stats {
        /// Description file (.json, .yaml, .yml or .toml).
        source: PathBuf,
    },
}

#[derive(Args)]
struct PageArgs {
    /// Description file (.json, .yaml, .yml or .toml).
    source: PathBuf,
    /// HTML-escape user text instead of interpolating it as markup.
    #[arg(long)]
    escape: bool,
    /// Logo image (PNG or JPEG, at most 5 MB); replaces the file's logo.
    #[arg(long)]
    logo: Option<PathBuf>,
    /// Footer text shown below the content.
    #[arg(long)]
    footer: Option<String>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    info!("Starting {}", APP_NAME);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Export { page, output, open } => {
            run_export(&page, ExportFormat::HtmlFile, output.as_deref(), open)
        }
        Commands::Copy { page } => run_export(&page, ExportFormat::Clipboard, None, false),
        Commands::Outline { source } => run_outline(&source),
        Commands::Stats { source } => {
            println!("{}", load_document(&source)?.document.stats());
            Ok(())
        }
    }
}

/// Load the source, apply command-line overrides, and hand off to the sink.
fn run_export(
    args: &PageArgs,
    format: ExportFormat,
    output: Option<&Path>,
    open: bool,
) -> Result<()> {
    let mut settings = load_config();
    let loaded = load_with_logo(args)?;

    let mut options = settings.export_options(format);
    if args.escape {
        options.page.content_mode = ContentMode::Escaped;
    }
    if let Some(footer) = &args.footer {
        options.page.footer = Some(footer.clone());
    }
    options.open_after_export |= open;

    match export(&loaded.document, loaded.logo.as_ref(), &options, output)? {
        ExportOutcome::File(path) => {
            println!("{}", path.display());
            settings.record_export(&path);
        }
        ExportOutcome::Clipboard => println!("HTML copiado para a área de transferência"),
    }

    save_config_silent(&settings);
    Ok(())
}

fn load_with_logo(args: &PageArgs) -> Result<LoadedDocument> {
    let mut loaded = load_document(&args.source)?;
    if let Some(path) = &args.logo {
        loaded.logo = Some(Logo::from_file(path)?);
    }
    info!(
        "Loaded {} blocks from {}",
        loaded.document.len(),
        args.source.display()
    );
    Ok(loaded)
}

fn run_outline(source: &Path) -> Result<()> {
    let loaded = load_document(source)?;
    let entries = extract(&loaded.document);

    if entries.is_empty() {
        println!("{}", blockdoc::PageOptions::default().nav_empty_label);
        return Ok(());
    }
    for entry in &entries {
        println!("#{}\t{}", entry.anchor, entry.label);
    }
    for anchor in duplicate_anchors(&entries) {
        warn!("Anchor '{}' is used by more than one heading", anchor);
    }
    Ok(())
}
