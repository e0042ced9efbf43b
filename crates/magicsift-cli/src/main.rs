//! magicsift - Find file-format magic bytes and known digests in arbitrary data
//!
//! This tool scans files for embedded file headers and footers, and for
//! digests listed in a hash list, in both normal and byte-reversed order.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, ValueEnum};
use magicsift_core::{
    Execution, MatchResult, Searcher, SearcherConfig, SignatureDatabase, Table,
    DEFAULT_HASH_LIST,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, trace, warn, Level};
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

/// Find file-format magic bytes and known digests in arbitrary data
#[derive(Parser, Debug)]
#[command(name = "magicsift")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(flatten)]
    input: InputMode,

    /// Hash list of digest signatures (`<hex digest>  <file name>` per line)
    #[arg(long, env = "MAGICSIFT_HASHES", default_value = DEFAULT_HASH_LIST)]
    hashes: PathBuf,

    /// Only use the builtin signatures; do not load the hash list
    #[arg(long)]
    builtin_only: bool,

    /// Scan partitions one after another instead of concurrently
    #[arg(long)]
    sequential: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Only report files with at least one match
    #[arg(long)]
    matches_only: bool,

    /// Print the loaded signature database and exit
    #[arg(long)]
    list_signatures: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Exactly one input is required unless `--list-signatures` is given
#[derive(Args, Debug)]
#[group(required = false, multiple = false)]
struct InputMode {
    /// Path to a single file to scan
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Path to a directory of files to scan recursively
    #[arg(short, long)]
    directory: Option<PathBuf>,
}

/// Output format for matches
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable description, e.g. "PNG Header (reversed)"
    Text,
    /// Label and orientation separated by a tab (for scripting)
    Label,
}

/// Findings for one scanned file
#[derive(Debug)]
struct FileReport {
    path: PathBuf,
    fingerprint: String,
    matches: Vec<MatchResult>,
}

#[derive(Default)]
struct ScanStats {
    files_scanned: usize,
    files_matched: usize,
    total_matches: usize,
    read_errors: usize,
}

impl ScanStats {
    fn record(&mut self, report: &FileReport) {
        self.files_scanned += 1;
        if !report.matches.is_empty() {
            self.files_matched += 1;
            self.total_matches += report.matches.len();
        }
    }

    fn print_summary(&self) {
        info!(
            "Summary: {} scanned, {} with matches, {} matches, {} unreadable",
            self.files_scanned, self.files_matched, self.total_matches, self.read_errors
        );
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    ensure_input(&cli)?;

    // The database must be complete before anything is scanned
    let db = build_database(&cli)?;

    if cli.list_signatures {
        print!("{}", render_database(&db));
        return Ok(());
    }

    let execution = if cli.sequential {
        Execution::Sequential
    } else {
        Execution::Parallel
    };
    let searcher = Searcher::with_config(&db, SearcherConfig::new().execution(execution));

    if let Some(ref file) = cli.input.file {
        process_single_file(&cli, &searcher, file)
    } else if let Some(ref directory) = cli.input.directory {
        process_directory(&cli, &searcher, directory)
    } else {
        bail!("Either --file or --directory must be specified")
    }
}

/// Require exactly one input path unless only listing signatures
fn ensure_input(cli: &Cli) -> Result<()> {
    if !cli.list_signatures && cli.input.file.is_none() && cli.input.directory.is_none() {
        bail!("Either --file or --directory must be specified");
    }
    Ok(())
}

/// Build the signature database, failing hard on any hash list problem
fn build_database(cli: &Cli) -> Result<SignatureDatabase> {
    if cli.builtin_only {
        info!("Using builtin signatures only");
        return Ok(SignatureDatabase::builtin());
    }

    let db = match SignatureDatabase::load(&cli.hashes) {
        Ok(db) => db,
        Err(e) => {
            if e.is_config_error() {
                error!("Refusing to scan with an incomplete signature database");
            }
            return Err(e)
                .with_context(|| format!("Failed to load hash list: {}", cli.hashes.display()));
        }
    };

    info!(
        "Loaded {} digest signatures from {}",
        db.digest_signatures().len(),
        cli.hashes.display()
    );
    Ok(db)
}

/// Scan a single file
fn process_single_file(cli: &Cli, searcher: &Searcher<'_>, file: &Path) -> Result<()> {
    if !file.exists() {
        bail!("Input file does not exist: {}", file.display());
    }
    if !file.is_file() {
        bail!("Input path is not a file: {}", file.display());
    }

    let report = scan_file(searcher, file)?;
    if let Some(text) = render_report(&report, cli.format, cli.matches_only) {
        print!("{}", text);
    }

    Ok(())
}

/// Scan every file below a directory
fn process_directory(cli: &Cli, searcher: &Searcher<'_>, directory: &Path) -> Result<()> {
    if !directory.exists() {
        bail!("Directory does not exist: {}", directory.display());
    }
    if !directory.is_dir() {
        bail!("Path is not a directory: {}", directory.display());
    }

    info!("Scanning directory: {}", directory.display());

    let mut stats = ScanStats::default();

    for entry in WalkDir::new(directory)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !entry.file_type().is_file() {
            continue;
        }

        match scan_file(searcher, path) {
            Ok(report) => {
                stats.record(&report);
                if let Some(text) = render_report(&report, cli.format, cli.matches_only) {
                    print!("{}", text);
                }
            }
            Err(e) => {
                // Log error but continue with other files
                warn!("Error scanning {}: {:#}", path.display(), e);
                stats.read_errors += 1;
            }
        }
    }

    stats.print_summary();
    Ok(())
}

/// Dot-files and dot-directories are skipped in directory mode
fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with('.'))
        .unwrap_or(false)
}

/// Read a file, fingerprint it and search it
fn scan_file(searcher: &Searcher<'_>, path: &Path) -> Result<FileReport> {
    trace!("Reading {}", path.display());
    let data =
        fs::read(path).with_context(|| format!("Failed to read input file: {}", path.display()))?;

    let fingerprint = fingerprint(&data);
    let matches = searcher.search(Some(data.as_slice()));

    debug!(
        "{}: {} bytes, {} matches",
        path.display(),
        data.len(),
        matches.len()
    );

    Ok(FileReport {
        path: path.to_path_buf(),
        fingerprint,
        matches,
    })
}

/// Short blake3 fingerprint of file content (first 16 hex chars)
fn fingerprint(data: &[u8]) -> String {
    let hash = blake3::hash(data);
    hash.to_hex()[..16].to_string()
}

/// Render a single match in the requested format
fn render_match(result: &MatchResult, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => result.description(),
        OutputFormat::Label => {
            let orientation = if result.reversed { "reversed" } else { "forward" };
            format!("{}\t{}", result.label, orientation)
        }
    }
}

/// Render the report for one file, or nothing if it should be suppressed
fn render_report(report: &FileReport, format: OutputFormat, matches_only: bool) -> Option<String> {
    if matches_only && report.matches.is_empty() {
        return None;
    }

    let mut out = format!(
        "{} [blake3:{}]\n",
        report.path.display(),
        report.fingerprint
    );
    if report.matches.is_empty() {
        out.push_str("  (no signatures)\n");
    }
    for result in &report.matches {
        out.push_str(&format!("  {}\n", render_match(result, format)));
    }
    Some(out)
}

/// Render the database: static table first, then digests, patterns as hex
fn render_database(db: &SignatureDatabase) -> String {
    let mut out = String::new();
    for (table, sig) in db.iter() {
        let table = match table {
            Table::Static => "static",
            Table::Digest => "digest",
        };
        out.push_str(&format!(
            "{}\t{}\t{}\n",
            table,
            sig.label(),
            hex::encode(sig.pattern())
        ));
    }
    out
}
