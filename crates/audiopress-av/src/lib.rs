//! # audiopress-av
//!
//! External transcoder and probe plumbing for audiopress.
//!
//! This crate provides functionality for:
//! - Locating the external tools (ffmpeg/ffprobe) the converter drives
//! - Running external commands synchronously with captured output
//! - Probing a media file's overall bitrate via ffprobe
//! - Transcoding audio files to the fixed 320 kbps MP3 profile via ffmpeg
//!
//! No audio processing happens in-process; everything is delegated to the
//! pre-existing command-line tools, and this crate only interprets their
//! exit status and textual output.
//!
//! ## Example
//!
//! ```no_run
//! use audiopress_av::{tools, transcode};
//! use std::path::Path;
//!
//! let ffmpeg = tools::require_tool("ffmpeg")?;
//! transcode::transcode_to_mp3(&ffmpeg, Path::new("song.flac"), Path::new("song.mp3"), false)?;
//! # Ok::<(), audiopress_av::Error>(())
//! ```

mod command;
mod error;
pub mod probe;
pub mod tools;
pub mod transcode;

// Re-exports
pub use command::{ToolCommand, ToolOutput};
pub use error::{Error, Result};
