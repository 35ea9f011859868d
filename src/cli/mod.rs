//! Command-line interface for mum-finder.
//!
//! This module implements the CLI using clap. The tool takes a set of
//! multi-FastA files (by convention one reference followed by one or more
//! queries), builds a per-sequence index for every record, and hands the
//! ordered collection to the match-reporting stage.
//!
//! ## Usage
//!
//! ```text
//! # Reference-unique matches of at least 50 bases, both strands
//! mum-finder -mumreference -b -l 50 reference.fa query1.fa query2.fa
//!
//! # All maximal matches, gzipped input is fine
//! mum-finder -maxmatch reference.fa.gz query.fa
//! ```
//!
//! The historical single-dash spellings (`-mum`, `-mumreference`,
//! `-maxmatch`, `-help`) are accepted alongside the conventional double-dash
//! forms; see [`normalize_legacy_args`].

use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::bail;
use clap::Parser;
use tracing::{debug, info};

use crate::core::collection::IndexCollection;
use crate::core::config::{RunConfiguration, DEFAULT_MIN_MATCH_LENGTH};
use crate::core::index::{SequenceIndex, SuffixArrayBuilder};
use crate::loader::{pool, FileOutcome, LoadTask};
use crate::parsing::fasta;

#[derive(Parser, Debug)]
#[command(name = "mum-finder")]
#[command(version)]
#[command(about = "Compute maximal and unique matches between reference and query sequence sets")]
#[command(
    long_about = "mum-finder computes maximal matches between a reference sequence file and one or more query files.\n\nAll files are multi-FastA and may contain any set of upper and lowercase characters; DNA and protein sequences are both allowed and matching is case insensitive. The historical single-dash option spellings (-mum, -mumreference, -maxmatch, -help) are accepted."
)]
pub struct Cli {
    /// Compute MUMs, i.e. matches that are unique in both the reference and query
    #[arg(long)]
    pub mum: bool,

    /// Compute MUM-candidates, i.e. matches that are unique in the reference
    /// but not necessarily in the query
    #[arg(long = "mumreference")]
    pub mum_reference: bool,

    /// Compute all maximal matches regardless of their uniqueness
    #[arg(long = "maxmatch")]
    pub max_match: bool,

    /// Only match the characters a, c, g, or t (case insensitive)
    #[arg(short = 'n')]
    pub nucleotides_only: bool,

    /// Minimum match length
    #[arg(
        short = 'l',
        value_name = "INT",
        default_value_t = DEFAULT_MIN_MATCH_LENGTH,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub min_match_length: u32,

    /// Compute both forward and reverse complement matches
    #[arg(short = 'b')]
    pub both_strands: bool,

    /// Only compute reverse complement matches
    #[arg(short = 'r')]
    pub reverse_complement_only: bool,

    /// Show the matching substring in the output
    #[arg(short = 's')]
    pub show_substring: bool,

    /// Report the query position of a reverse complement match relative to
    /// the forward strand of the query sequence
    #[arg(short = 'c')]
    pub forward_relative_offsets: bool,

    /// Force 4 column output format that prepends every match line with the
    /// reference sequence identifier
    #[arg(short = 'F')]
    pub four_column_output: bool,

    /// Show the length of the query sequence on the header line
    #[arg(short = 'L')]
    pub show_query_length: bool,

    /// Reject combinations of -mum, -mumreference and -maxmatch instead of
    /// resolving them by precedence
    #[arg(long)]
    pub strict_modes: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Input sequence files: the reference followed by one or more queries
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

/// Rewrite the historical single-dash option spellings to their double-dash
/// forms so clap can parse them.
///
/// Only the exact tokens `-mum`, `-mumreference`, `-maxmatch` and `-help`
/// are rewritten; everything after a `--` separator is left untouched.
pub fn normalize_legacy_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut past_separator = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if past_separator {
                return arg;
            }
            match arg.to_str() {
                Some("--") => {
                    past_separator = true;
                    arg
                }
                Some("-mum") => OsString::from("--mum"),
                Some("-mumreference") => OsString::from("--mumreference"),
                Some("-maxmatch") => OsString::from("--maxmatch"),
                Some("-help") => OsString::from("--help"),
                _ => arg,
            }
        })
        .collect()
}

impl Cli {
    /// Freeze the parsed flags into the run configuration.
    ///
    /// # Errors
    ///
    /// With `--strict-modes`, returns an error when more than one of the
    /// three match-mode flags is set.
    pub fn run_configuration(&self) -> anyhow::Result<RunConfiguration> {
        let config = RunConfiguration {
            mum: self.mum,
            mum_reference: self.mum_reference,
            max_match: self.max_match,
            nucleotides_only: self.nucleotides_only,
            min_match_length: self.min_match_length,
            both_strands: self.both_strands,
            reverse_complement_only: self.reverse_complement_only,
            show_substring: self.show_substring,
            forward_relative_offsets: self.forward_relative_offsets,
            four_column_output: self.four_column_output,
            show_query_length: self.show_query_length,
        };

        if self.strict_modes && config.mode_flag_count() > 1 {
            bail!("-mum, -mumreference and -maxmatch are mutually exclusive under --strict-modes");
        }

        Ok(config)
    }
}

/// Execute one invocation: validate inputs, load and index every file on the
/// worker pool, aggregate in submission order, and emit the result.
///
/// # Errors
///
/// Returns an error if any input file fails validation or loading; per-file
/// details go to stderr first.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.run_configuration()?;
    debug!(
        "mode {}, minimum match length {}",
        config.match_mode(),
        config.min_match_length
    );

    preflight_files(&cli.files)?;

    let tasks: Vec<LoadTask> = cli
        .files
        .iter()
        .enumerate()
        .map(|(ordinal, path)| LoadTask::new(ordinal, path.clone()))
        .collect();

    let workers = pool::default_worker_count(tasks.len());
    info!("loading {} file(s) on {} worker(s)", tasks.len(), workers);

    let builder = Arc::new(SuffixArrayBuilder);
    let outcomes = pool::load_all(tasks, &builder, workers);
    let collection = collect_indexes(outcomes)?;

    info!("built {} sequence index(es)", collection.len());

    let stdout = std::io::stdout();
    emit_sequences(&collection, &mut stdout.lock())?;

    // `collection` drops here, releasing every index on this exit path.
    Ok(())
}

/// Check every input up front: each file must open and yield a first record.
///
/// A file that passes can still disappear before its worker runs; the load
/// phase reports that separately.
fn preflight_files(files: &[PathBuf]) -> anyhow::Result<()> {
    let mut failures = 0usize;
    for path in files {
        if let Err(err) = fasta::preflight(path) {
            eprintln!("error: {}: {err}", path.display());
            failures += 1;
        }
    }

    if failures > 0 {
        bail!("{failures} of {} input file(s) failed validation", files.len());
    }
    Ok(())
}

/// Merge per-worker results into the shared collection, strictly in
/// submission order.
///
/// Failing the run here still releases the indexes that succeeding workers
/// built: they are owned by `collection` and dropped with it.
fn collect_indexes(outcomes: Vec<FileOutcome<SequenceIndex>>) -> anyhow::Result<IndexCollection> {
    let total = outcomes.len();
    let mut collection = IndexCollection::new();
    let mut failures = 0usize;

    for outcome in outcomes {
        match outcome.result {
            Ok(indexes) => collection.append_file(indexes),
            Err(err) => {
                eprintln!("error: {err}");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!("{failures} of {total} input file(s) failed to load");
    }
    Ok(collection)
}

/// Emit each indexed sequence in collection order.
///
/// This is the stand-in consumer for the match-enumeration stage: it echoes
/// the raw sequence bytes, one record per paragraph.
fn emit_sequences<W: Write>(collection: &IndexCollection, out: &mut W) -> std::io::Result<()> {
    for index in collection {
        out.write_all(index.sequence())?;
        out.write_all(b"\n\n")?;
    }
    out.flush()
}
