use chrono::Local;
use clap::Parser;
use metadata_extractor::features::csv_export::write_csv;
use metadata_extractor::utils::list_files;
use metadata_extractor::{MetadataExtractor, MetadataExtractorError, UploadLog};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{Level, error, info, subscriber::set_global_default, warn};
use tracing_subscriber::EnvFilter;

/// Extract metadata from images, audio files and PDFs, logging every upload.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Opts {
    /// Files or directories to extract metadata from
    paths: Vec<PathBuf>,

    /// Upload log database
    #[arg(long, default_value = "data.db")]
    db: PathBuf,

    /// Write one CSV export per extracted file into this directory
    #[arg(long)]
    csv_dir: Option<PathBuf>,

    /// Include hidden files when walking directories
    #[arg(long)]
    hidden: bool,

    /// Print every logged upload and the file type distribution
    #[arg(long)]
    analytics: bool,

    /// Path to the exiftool executable
    #[arg(long)]
    exiftool: Option<PathBuf>,

    /// More output per occurrence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Less output per occurrence
    #[arg(short, long, action = clap::ArgAction::Count)]
    quiet: u8,
}

fn init_tracing(verbose: u8, quiet: u8) {
    let level = match i16::from(verbose) - i16::from(quiet) {
        i16::MIN..=-1 => Level::ERROR,
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .finish();

    // Ignore error if already set
    let _ = set_global_default(subscriber);
}

fn main() -> ExitCode {
    let opts = Opts::parse();
    init_tracing(opts.verbose, opts.quiet);

    match run(&opts) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Returns `Ok(false)` if any individual file failed.
fn run(opts: &Opts) -> Result<bool, MetadataExtractorError> {
    let upload_log = Arc::new(UploadLog::open(&opts.db)?);
    let mut all_ok = true;

    if !opts.paths.is_empty() {
        let mut extractor = MetadataExtractor::builder()
            .upload_log(Arc::clone(&upload_log))
            .maybe_exiftool_path(opts.exiftool.clone())
            .build()?;

        for root in &opts.paths {
            let files = match list_files(root, opts.hidden) {
                Ok(files) => files,
                Err(e) => {
                    warn!(path = %root.display(), "skipping: {e}");
                    all_ok = false;
                    continue;
                }
            };

            for file in files {
                match extractor.extract(&file) {
                    Ok(result) => {
                        if result.coordinates.is_none() {
                            info!(path = %file.display(), "no geotag");
                        }
                        if let Some(dir) = &opts.csv_dir {
                            // One folder per file name; write_csv never overwrites within it.
                            let dir = dir.join(&result.file_stats.file_name);
                            std::fs::create_dir_all(&dir)?;
                            let path = write_csv(&dir, &result.tags, &Local::now())?;
                            info!(csv = %path.display(), "exported");
                        }
                        println!("{}", serde_json::to_string_pretty(&result)?);
                    }
                    Err(e) => {
                        error!(path = %file.display(), "extraction failed: {e}");
                        all_ok = false;
                    }
                }
            }
        }
    }

    if opts.analytics {
        for record in upload_log.list_all()? {
            println!(
                "{}\t{}\t{}\t{}",
                record.file_name, record.file_type, record.file_size, record.upload_date
            );
        }
        println!();
        for count in upload_log.file_type_counts()? {
            let file_type = if count.file_type.is_empty() {
                "(unknown)"
            } else {
                &count.file_type
            };
            println!("{file_type}\t{}", count.count);
        }
    }

    Ok(all_ok)
}
