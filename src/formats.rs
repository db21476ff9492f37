//! Supported input format detection by file extension.
//!
//! Candidate files are recognized purely by extension; nothing here opens
//! the file.

use std::path::Path;

/// Recognized input audio extensions, matched case-insensitively.
const AUDIO_EXTENSIONS: &[&str] = &[
    "mp3", "wav", "flac", "m4a", "aac", "ogg", "opus", "wma", "aiff", "ape", "ac3", "mp2",
];

/// Check if a path has a recognized audio file extension.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use audiopress::formats::is_audio_file;
///
/// assert!(is_audio_file(Path::new("song.flac")));
/// assert!(is_audio_file(Path::new("/path/to/song.WAV")));
/// assert!(!is_audio_file(Path::new("cover.jpg")));
/// ```
pub fn is_audio_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| AUDIO_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Check if a path has an `.mp3` extension (any case form).
pub fn is_mp3(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("mp3"))
        .unwrap_or(false)
}

/// Get the list of recognized audio extensions.
///
/// # Examples
///
/// ```
/// use audiopress::formats::audio_extensions;
///
/// let extensions = audio_extensions();
/// assert!(extensions.contains(&"flac"));
/// assert!(extensions.contains(&"opus"));
/// ```
#[must_use]
pub fn audio_extensions() -> &'static [&'static str] {
    AUDIO_EXTENSIONS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_audio_file() {
        assert!(is_audio_file(Path::new("song.mp3")));
        assert!(is_audio_file(Path::new("song.wav")));
        assert!(is_audio_file(Path::new("song.flac")));
        assert!(is_audio_file(Path::new("song.m4a")));
        assert!(is_audio_file(Path::new("song.aac")));
        assert!(is_audio_file(Path::new("song.ogg")));
        assert!(is_audio_file(Path::new("song.opus")));
        assert!(is_audio_file(Path::new("song.wma")));
        assert!(is_audio_file(Path::new("song.aiff")));
        assert!(is_audio_file(Path::new("song.ape")));
        assert!(is_audio_file(Path::new("song.ac3")));
        assert!(is_audio_file(Path::new("song.mp2")));

        // Case insensitive
        assert!(is_audio_file(Path::new("song.MP3")));
        assert!(is_audio_file(Path::new("song.Flac")));

        // With paths
        assert!(is_audio_file(Path::new("/path/to/song.wav")));
        assert!(is_audio_file(Path::new("relative/path/song.ogg")));

        // Not audio files
        assert!(!is_audio_file(Path::new("cover.jpg")));
        assert!(!is_audio_file(Path::new("notes.txt")));
        assert!(!is_audio_file(Path::new("video.mkv")));
        assert!(!is_audio_file(Path::new("no_extension")));
    }

    #[test]
    fn test_is_mp3() {
        assert!(is_mp3(Path::new("song.mp3")));
        assert!(is_mp3(Path::new("song.MP3")));
        assert!(is_mp3(Path::new("/path/to/song.Mp3")));
        assert!(!is_mp3(Path::new("song.wav")));
        assert!(!is_mp3(Path::new("song")));
    }

    #[test]
    fn test_audio_extensions() {
        let exts = audio_extensions();
        assert_eq!(exts.len(), 12);
        assert!(exts.contains(&"mp3"));
        assert!(exts.contains(&"mp2"));
    }

    #[test]
    fn test_edge_cases() {
        // Empty path
        assert!(!is_audio_file(Path::new("")));

        // Hidden files
        assert!(is_audio_file(Path::new(".hidden.flac")));

        // Multiple dots
        assert!(is_audio_file(Path::new("album.disc1.wav")));
        assert!(is_mp3(Path::new("song.remaster.mp3")));
    }
}
