//! # genppd CLI
//!
//! Command-line interface for generating PPD files.
//!
//! ## Usage
//!
//! ```bash
//! # Write standard documents for every printer into ./ppd
//! genppd generate -p ppd
//!
//! # Simplified and standard documents for two printers, French only
//! genppd generate -a -l fr escp2-c88 "HP LaserJet 4"
//!
//! # Print one document to stdout
//! genppd cat gutenprint.5.2://escp2-c88/expert
//!
//! # List driver URIs, models and languages
//! genppd list
//! genppd models -v
//! genppd --locale-dir po languages
//! ```

use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;

use genppd::{
    GenppdError, ModelCatalog,
    batch::{self, BatchRequest, GenerationContext},
    config::GeneratorConfig,
    i18n::LocaleStore,
    ppd::Variant,
};

/// genppd - Generate PPD files for use with CUPS
#[derive(Parser, Debug)]
#[command(name = "genppd")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Printer model catalog (JSON); defaults to the built-in catalog
    #[arg(long, global = true, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Generator settings (JSON)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory of message catalogs (<lang>.json)
    #[arg(long, global = true, value_name = "DIR")]
    locale_dir: Option<PathBuf>,

    /// Installed languages, comma separated; defaults to the catalogs found
    #[arg(long, global = true, value_delimiter = ',')]
    languages: Option<Vec<String>>,

    /// Verbose mode
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write PPD files
    Generate {
        /// Printer models, either the driver or quoted full name (default: all)
        models: Vec<String>,

        /// Output directory
        #[arg(short = 'p', long, default_value = ".")]
        prefix: PathBuf,

        /// Output documents translated for this language
        #[arg(short, long)]
        language: Option<String>,

        /// Directory prefix embedded in the documents
        #[arg(short = 'd', long, value_name = "DIR")]
        model_dir: Option<String>,

        /// Generate simplified documents only
        #[arg(short, long, conflicts_with = "all")]
        simplified: bool,

        /// Generate simplified and standard documents
        #[arg(short, long)]
        all: bool,

        /// Also generate documents without color options
        #[arg(short = 'C', long)]
        no_color: bool,

        /// Localize numbers
        #[arg(short = 'N', long)]
        localize_numbers: bool,

        /// PostScript level 2
        #[arg(short = '2', conflicts_with = "level3")]
        level2: bool,

        /// PostScript level 3
        #[arg(short = '3')]
        level3: bool,

        /// Write the base version instead of the full version
        #[arg(short = 'b', long)]
        base_version: bool,

        /// Don't compress documents
        #[arg(short = 'Z', long)]
        no_compress: bool,
    },

    /// Print the document named by a driver URI to stdout
    Cat {
        /// e.g. gutenprint.5.2://escp2-c88/expert
        uri: String,
    },

    /// List driver URIs
    List,

    /// List available printer models
    Models,

    /// List available translations
    Languages,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), GenppdError> {
    let cli = Cli::parse();

    let level = match (cli.verbose, cli.quiet) {
        (true, _) => "info",
        (_, true) => "error",
        _ => "warn",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let catalog = match &cli.catalog {
        Some(path) => ModelCatalog::from_path(path)?,
        None => ModelCatalog::builtin()?,
    };
    let mut config = match &cli.config {
        Some(path) => GeneratorConfig::from_path(path)?,
        None => GeneratorConfig::default(),
    };
    let locales = match &cli.locale_dir {
        Some(dir) => LocaleStore::from_dir(dir, cli.languages.clone())?,
        None => cli
            .languages
            .iter()
            .flatten()
            .fold(LocaleStore::empty(), |store, tag| store.with_language(tag)),
    };

    match cli.command {
        Commands::Generate {
            models,
            prefix,
            language,
            model_dir,
            simplified,
            all,
            no_color,
            localize_numbers,
            level2,
            level3,
            base_version,
            no_compress,
        } => {
            if let Some(dir) = model_dir {
                config.model_dir = dir;
            }
            if level2 {
                config.ps_level = 2;
            } else if level3 {
                config.ps_level = 3;
            }
            config.localize_numbers ^= localize_numbers;
            config.use_base_version |= base_version;
            config.compress &= !no_compress;
            config.validate()?;

            let mut variants = Vec::new();
            if simplified || all {
                variants.push(Variant::Simplified);
            }
            if !simplified {
                variants.push(Variant::Standard);
            }
            if no_color {
                variants.push(Variant::NoColorOpts);
            }

            let request = BatchRequest {
                output_dir: prefix,
                models,
                variants,
                language,
            };
            let ctx = GenerationContext::new(cli.verbose);
            let report = batch::generate_batch(&catalog, &request, &config, &locales, &ctx)?;
            if !ctx.is_verbose() {
                eprintln!(" done.");
            }
            report.into_result()?;
        }

        Commands::Cat { uri } => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            batch::cat_document(&uri, &catalog, &config, &locales, &mut out)?;
            out.flush()?;
        }

        Commands::List => {
            for line in batch::list_uris(&catalog, &config) {
                println!("{}", line);
            }
        }

        Commands::Models => {
            for (_, printer) in catalog.generated() {
                if cli.verbose {
                    println!("{:<20}{}", printer.info.driver, printer.info.long_name);
                } else {
                    println!("{}", printer.info.driver);
                }
            }
        }

        Commands::Languages => {
            for lang in locales.installed() {
                println!("{}", lang);
            }
        }
    }

    Ok(())
}
