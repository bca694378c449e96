//! cvscan - rank applicants by keyword matches in their CVs
//!
//! Usage:
//!     cvscan --corpus ./cvs search python,sql --algorithm BM --top 5
//!     cvscan --corpus ./cvs --profiles applicants.json search "project manager" --format text
//!     cvscan --corpus ./cvs summary 17

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

use cvscan::{
    load_profiles, render_search, render_sections, run_search, run_summary, DirectoryCorpus,
    OutputFormat, SearchOptions,
};
use cvscan_core::{Algorithm, DocumentId, MemoryProfiles, DEFAULT_FUZZY_THRESHOLD};

#[derive(Parser, Debug)]
#[command(name = "cvscan")]
#[command(about = "Keyword search over a corpus of CV texts")]
#[command(version)]
struct Cli {
    /// Directory of extracted CV texts, one `<id>.txt` per application
    #[arg(long, global = true, default_value = "cvs", env = "CVSCAN_CORPUS")]
    corpus: PathBuf,

    /// JSON file with applicant profiles
    #[arg(long, global = true, env = "CVSCAN_PROFILES")]
    profiles: Option<PathBuf>,

    /// Default log filter when RUST_LOG is unset (debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn", env = "CVSCAN_LOG")]
    log_level: String,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json, env = "CVSCAN_FORMAT")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank applicants by exact and fuzzy keyword matches
    Search(SearchArgs),
    /// Show the summary, skills, experience and education of one CV
    Summary {
        /// Document id (the `<id>` of `<id>.txt`)
        id: DocumentId,
    },
}

#[derive(Args, Debug)]
struct SearchArgs {
    /// Keywords, comma separated
    #[arg(required = true, value_delimiter = ',', env = "CVSCAN_KEYWORDS")]
    keywords: Vec<String>,

    /// Exact algorithm: KMP, BM or AHO_CORASICK
    #[arg(short, long, default_value = "KMP", env = "CVSCAN_ALGORITHM")]
    algorithm: Algorithm,

    /// Number of applicants to return
    #[arg(short, long, default_value_t = 10, env = "CVSCAN_TOP")]
    top: usize,

    /// Minimum fuzzy similarity percentage
    #[arg(long, default_value_t = DEFAULT_FUZZY_THRESHOLD, env = "CVSCAN_FUZZY_THRESHOLD")]
    threshold: f64,
}

fn run(cli: Cli) -> cvscan::Result<String> {
    let corpus = DirectoryCorpus::open(&cli.corpus)?;

    match cli.command {
        Command::Search(args) => {
            let profiles = match &cli.profiles {
                Some(path) => load_profiles(path)?,
                None => MemoryProfiles::new(),
            };
            let options = SearchOptions {
                fuzzy_threshold: args.threshold,
                ..SearchOptions::new(args.keywords, args.algorithm, args.top)
            };
            let response = run_search(&corpus, &profiles, options)?;
            render_search(&response, cli.format)
        }
        Command::Summary { id } => {
            let sections = run_summary(&corpus, id)?;
            render_sections(&sections, cli.format)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    cvscan::tracing::init_with_filter(&cli.log_level);

    match run(cli) {
        Ok(output) => {
            print!("{output}");
            if !output.ends_with('\n') {
                println!();
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
