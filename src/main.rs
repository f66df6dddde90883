use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use art_event_extract::error::{Error, Result};
use art_event_extract::export::{SHEET_HEADER, to_sheet_row, to_tsv_line};
use art_event_extract::scanner::{load_post, scan_posts};
use art_event_extract::{EventParser, Profile};
use chrono::{Local, NaiveDate, NaiveDateTime};
use clap::{Args, Parser, Subcommand};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "art-event-extract",
    about = "Detect art event announcements in posts and extract their details"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse one post and print its event record as JSON
    Parse {
        /// File holding the post text (stdin if omitted)
        file: Option<PathBuf>,
        /// Origin reference of the post, usually its URL
        #[arg(long, default_value = "")]
        origin: String,
        /// Attached image URL (repeatable)
        #[arg(long = "image")]
        images: Vec<String>,
        /// Skip the event check, as for a post collected by hand
        #[arg(long)]
        manual: bool,
        #[command(flatten)]
        opts: ParseOpts,
    },
    /// Classify every saved post (*.txt, *.json) under a directory
    Scan {
        dir: PathBuf,
        /// Output format: json (one record per line) or tsv (sheet rows)
        #[arg(long, default_value = "json")]
        format: OutputFormat,
        #[command(flatten)]
        opts: ParseOpts,
    },
    /// Print which keyword tier decides a post
    Classify {
        /// File holding the post text (stdin if omitted)
        file: Option<PathBuf>,
        #[arg(long, default_value = "full")]
        profile: Profile,
    },
}

#[derive(Args)]
struct ParseOpts {
    /// Reference time, e.g. 2024-03-01T09:00:00 or 2024-03-01 (default: now)
    #[arg(long, value_parser = parse_timestamp)]
    now: Option<NaiveDateTime>,
    /// Rule set: full or lean
    #[arg(long, default_value = "full")]
    profile: Profile,
}

impl ParseOpts {
    fn now(&self) -> NaiveDateTime {
        self.now.unwrap_or_else(|| Local::now().naive_local())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Json,
    Tsv,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "json" => Ok(Self::Json),
            "tsv" => Ok(Self::Tsv),
            other => Err(Error::UnknownFormat(other.to_string())),
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Parse {
            file,
            origin,
            images,
            manual,
            opts,
        } => run_parse(file.as_deref(), &origin, &images, manual, &opts),
        Command::Scan { dir, format, opts } => run_scan(&dir, format, &opts),
        Command::Classify { file, profile } => run_classify(file.as_deref(), profile),
    };

    if let Err(e) = result {
        error!("{e}");
        std::process::exit(1);
    }
}

// ═══════════════════════════════════════════════════════════════════════
//  INPUT HELPERS
// ═══════════════════════════════════════════════════════════════════════

/// Accepts `YYYY-MM-DDTHH:MM:SS`, `YYYY-MM-DD HH:MM:SS` or `YYYY-MM-DD` (midnight).
fn parse_timestamp(s: &str) -> Result<NaiveDateTime> {
    let s = s.trim();
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(t) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(t);
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| Error::InvalidTimestamp(s.to_string()))
}

fn read_text(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path).map_err(|source| Error::ReadPost {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
//  PARSE MODE: one post → pretty JSON on stdout
// ═══════════════════════════════════════════════════════════════════════

fn run_parse(
    file: Option<&Path>,
    origin: &str,
    images: &[String],
    manual: bool,
    opts: &ParseOpts,
) -> Result<()> {
    let text = read_text(file)?;
    let parser = EventParser::new(opts.profile);
    let now = opts.now();

    let record = if manual {
        Some(parser.collect(&text, origin, images, now))
    } else {
        parser.build(&text, origin, images, now)
    };

    match record {
        Some(r) => println!("{}", serde_json::to_string_pretty(&r)?),
        None => info!(tier = parser.classify(&text).tier(), "not an event"),
    }
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════
//  SCAN MODE: directory of saved posts → JSON Lines or sheet rows
// ═══════════════════════════════════════════════════════════════════════

fn run_scan(dir: &Path, format: OutputFormat, opts: &ParseOpts) -> Result<()> {
    let files = scan_posts(dir);
    info!(dir = %dir.display(), files = files.len(), profile = %opts.profile, "scanning posts");

    let parser = EventParser::new(opts.profile);
    let now = opts.now();

    if format == OutputFormat::Tsv {
        println!("{}", to_tsv_line(&SHEET_HEADER));
    }

    let mut accepted = 0usize;
    let mut failed = 0usize;
    for file in &files {
        let post = match load_post(file) {
            Ok(p) => p,
            Err(e) => {
                warn!("{e}");
                failed += 1;
                continue;
            }
        };

        let Some(record) = parser.build(&post.text, &post.origin_ref, &post.images, now) else {
            continue;
        };
        accepted += 1;

        match format {
            OutputFormat::Json => println!("{}", serde_json::to_string(&record)?),
            OutputFormat::Tsv => println!("{}", to_tsv_line(&to_sheet_row(&record, now))),
        }
    }

    info!(
        scanned = files.len(),
        accepted, failed, "scan complete"
    );
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════
//  CLASSIFY MODE: print the deciding tier
// ═══════════════════════════════════════════════════════════════════════

fn run_classify(file: Option<&Path>, profile: Profile) -> Result<()> {
    let text = read_text(file)?;
    let verdict = EventParser::new(profile).classify(&text);
    println!("{}\t{}", verdict.tier(), verdict.is_event());
    Ok(())
}
