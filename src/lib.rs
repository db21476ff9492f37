//! Batch audio to 320 kbps MP3 conversion front-end for ffmpeg.
//!
//! The library resolves an input file or directory tree into candidate
//! audio files, decides which can be skipped (existing outputs, MP3s
//! already at the target bitrate), maps output paths with optional
//! structure preservation and delegates all transcoding to the external
//! tools wrapped by `audiopress-av`. Per-file results aggregate into a
//! [`converter::Summary`] that drives the process exit code.

pub mod converter;
pub mod formats;

pub use converter::{ConvertOptions, Converter, Outcome, SkipReason, Summary};
