use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "audiopress")]
#[command(author, version, about = "Convert audio files to 320 kbps MP3 format")]
pub struct Cli {
    /// Input audio file or directory
    pub input: PathBuf,

    /// Output file (single file input) or output directory (directory input)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Overwrite existing output files
    #[arg(long)]
    pub overwrite: bool,

    /// Do not process subdirectories (directory mode only)
    #[arg(long)]
    pub no_recursive: bool,

    /// Do not preserve directory structure (directory mode only)
    #[arg(long)]
    pub no_structure: bool,

    /// Path to the ffmpeg binary (found on PATH by default)
    #[arg(long, value_name = "PATH")]
    pub ffmpeg_path: Option<PathBuf>,

    /// Path to the ffprobe binary (found on PATH by default)
    #[arg(long, value_name = "PATH")]
    pub ffprobe_path: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
