//! Fixed-profile MP3 transcoding via ffmpeg.

use crate::command::ToolCommand;
use crate::Result;
use std::path::Path;

/// Target audio bitrate in kbps.
pub const TARGET_BITRATE_KBPS: u64 = 320;
/// Target sample rate in Hz.
pub const TARGET_SAMPLE_RATE_HZ: u32 = 44_100;
/// Target channel count (stereo).
pub const TARGET_CHANNELS: u32 = 2;

/// Build the ffmpeg argument list for the fixed 320 kbps MP3 profile.
///
/// Video streams are stripped, only the audio stream is mapped, global
/// metadata is copied and tags are written as ID3v2.3. `-y` is passed only
/// when the caller wants existing outputs overwritten.
pub fn build_mp3_args(input: &Path, output: &Path, force_overwrite: bool) -> Vec<String> {
    let mut args = vec![
        "-i".to_string(),
        input.to_string_lossy().to_string(),
        "-vn".to_string(),
        "-ar".to_string(),
        TARGET_SAMPLE_RATE_HZ.to_string(),
        "-ac".to_string(),
        TARGET_CHANNELS.to_string(),
        "-b:a".to_string(),
        format!("{}k", TARGET_BITRATE_KBPS),
        "-map".to_string(),
        "a".to_string(),
        "-map_metadata".to_string(),
        "0".to_string(),
        "-id3v2_version".to_string(),
        "3".to_string(),
    ];

    if force_overwrite {
        args.push("-y".to_string());
    }

    args.push(output.to_string_lossy().to_string());
    args
}

/// Transcode `input` to a 320 kbps MP3 at `output`.
///
/// # Errors
///
/// Returns [`crate::Error::ToolFailed`] when the transcoder exits non-zero
/// (the message carries its captured stderr), [`crate::Error::ToolNotFound`]
/// or [`crate::Error::Io`] when it cannot be spawned at all.
pub fn transcode_to_mp3(
    ffmpeg: &Path,
    input: &Path,
    output: &Path,
    force_overwrite: bool,
) -> Result<()> {
    let mut cmd = ToolCommand::new(ffmpeg);
    cmd.args(build_mp3_args(input, output, force_overwrite));
    cmd.run()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_mp3_args() {
        let args = build_mp3_args(Path::new("/music/song.flac"), Path::new("/out/song.mp3"), false);

        assert_eq!(args[0], "-i");
        assert_eq!(args[1], "/music/song.flac");
        assert!(args.contains(&"-vn".to_string()));
        assert!(args.contains(&"-ar".to_string()));
        assert!(args.contains(&"44100".to_string()));
        assert!(args.contains(&"-ac".to_string()));
        assert!(args.contains(&"2".to_string()));
        assert!(args.contains(&"-b:a".to_string()));
        assert!(args.contains(&"320k".to_string()));
        assert!(args.contains(&"-map_metadata".to_string()));
        assert!(args.contains(&"-id3v2_version".to_string()));
        assert_eq!(args.last().unwrap(), "/out/song.mp3");
    }

    #[test]
    fn test_overwrite_flag_only_when_forced() {
        let args = build_mp3_args(Path::new("a.wav"), Path::new("a.mp3"), false);
        assert!(!args.contains(&"-y".to_string()));

        let args = build_mp3_args(Path::new("a.wav"), Path::new("a.mp3"), true);
        assert!(args.contains(&"-y".to_string()));
        // Output path stays last even with the overwrite flag.
        assert_eq!(args.last().unwrap(), "a.mp3");
    }

    #[test]
    fn test_audio_stream_mapping() {
        let args = build_mp3_args(Path::new("a.wav"), Path::new("a.mp3"), false);
        let map_pos = args.iter().position(|a| a == "-map").unwrap();
        assert_eq!(args[map_pos + 1], "a");
    }

    #[test]
    fn spawn_failure_is_reported() {
        let result = transcode_to_mp3(
            Path::new("/nonexistent/ffmpeg"),
            Path::new("a.wav"),
            Path::new("a.mp3"),
            false,
        );
        assert!(result.is_err());
    }
}
