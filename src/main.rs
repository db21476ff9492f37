mod cli;

use anyhow::{bail, Context, Result};
use audiopress::converter::{ConvertOptions, Converter, Summary};
use clap::Parser;
use cli::Cli;
use std::process::ExitCode;

const FFMPEG_INSTALL_HINT: &str = "ffmpeg not found. Please install ffmpeg:\n  \
     Ubuntu/Debian: sudo apt-get install ffmpeg\n  \
     macOS: brew install ffmpeg\n  \
     Windows: download from https://ffmpeg.org/download.html";

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Respect RUST_LOG if set, otherwise derive the filter from --verbose.
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "audiopress=debug,audiopress_av=debug".to_string()
        } else {
            "audiopress=info,audiopress_av=warn".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    // Resolving the transcoder happens before any file is touched; there is
    // no point starting a batch that cannot convert anything.
    let converter = Converter::new(
        ConvertOptions {
            output_root: cli.output.clone(),
            overwrite: cli.overwrite,
            keep_structure: !cli.no_structure,
        },
        cli.ffmpeg_path.as_deref(),
        cli.ffprobe_path.as_deref(),
    )
    .context(FFMPEG_INSTALL_HINT)?;

    if cli.input.is_file() {
        let outcome = converter.convert_file(&cli.input, cli.output.as_deref());
        println!("{outcome}");

        Ok(if outcome.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        })
    } else if cli.input.is_dir() {
        let mut printed = 0usize;
        let outcomes = converter.convert_directory(
            &cli.input,
            !cli.no_recursive,
            |index, total, path, outcome| {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                println!("[{index}/{total}] {name}: {outcome}");
                printed += 1;
            },
        );

        // Validation failures (missing directory, no candidates) come back
        // as outcomes without a progress callback.
        for outcome in outcomes.iter().skip(printed) {
            println!("{outcome}");
        }

        let summary = Summary::from_outcomes(&outcomes);
        println!();
        println!("{}", "=".repeat(60));
        println!("Conversion summary:");
        println!("  Total files: {}", summary.total);
        println!("  Successful: {}", summary.converted);
        println!("  Failed/skipped: {}", summary.skipped + summary.failed);
        println!("{}", "=".repeat(60));

        Ok(if summary.all_succeeded() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        })
    } else {
        bail!("input path does not exist: {}", cli.input.display());
    }
}
