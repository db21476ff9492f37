//! Overall bitrate probing via ffprobe.
//!
//! The probe is only a skip heuristic: callers that just want a number ask
//! [`bitrate_kbps`], which folds every failure mode into `None` rather than
//! surfacing probe-layer errors.

use crate::command::ToolCommand;
use crate::{Error, Result};
use std::path::Path;

/// Query a file's overall bitrate in bits per second.
///
/// Runs ffprobe against the container's `bit_rate` field and parses the
/// plain numeric output.
///
/// # Errors
///
/// Returns an error when the file is missing, the probe process cannot be
/// spawned, exits non-zero, or prints something other than an integer.
pub fn query_bitrate(ffprobe: &Path, file: &Path) -> Result<u64> {
    if !file.exists() {
        return Err(Error::file_not_found(file));
    }

    let mut cmd = ToolCommand::new(ffprobe);
    cmd.args([
        "-v",
        "error",
        "-show_entries",
        "format=bit_rate",
        "-of",
        "default=noprint_wrappers=1:nokey=1",
    ])
    .arg(file.to_string_lossy());

    let output = cmd.run()?;

    parse_bitrate(&output.stdout).ok_or_else(|| {
        Error::parse_error(
            "ffprobe",
            format!("expected an integer bit rate, got {:?}", output.stdout.trim()),
        )
    })
}

fn parse_bitrate(s: &str) -> Option<u64> {
    s.trim().parse().ok()
}

/// Best-effort probe of a file's overall bitrate in kbps.
///
/// Any failure — missing file, spawn error, non-zero exit, unparsable
/// output — means the bitrate is unknown and yields `None`.
pub fn bitrate_kbps(ffprobe: &Path, file: &Path) -> Option<u64> {
    match query_bitrate(ffprobe, file) {
        Ok(bits_per_sec) => Some(bits_per_sec / 1000),
        Err(e) => {
            tracing::debug!(file = %file.display(), "bitrate probe failed: {e}");
            None
        }
    }
}
