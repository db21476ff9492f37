//! Candidate file discovery.

use crate::formats::is_audio_file;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Find all candidate audio files under `dir`.
///
/// Extensions are matched case-insensitively, results are deduplicated and
/// returned in lexicographic order so runs over an unchanged tree are
/// reproducible. With `recursive` false only the top level is considered.
pub fn find_audio_files(dir: &Path, recursive: bool) -> Vec<PathBuf> {
    let mut walker = WalkDir::new(dir).follow_links(true);
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut candidates = BTreeSet::new();
    for entry in walker.into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();

        if path.is_dir() {
            continue;
        }

        if is_audio_file(path) {
            candidates.insert(path.to_path_buf());
        }
    }

    candidates.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(path: &Path) {
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn discovery_is_sorted_and_excludes_unsupported() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("b.wav"));
        touch(&dir.path().join("a.flac"));
        touch(&dir.path().join("notes.txt"));

        let found = find_audio_files(dir.path(), true);
        assert_eq!(
            found,
            vec![dir.path().join("a.flac"), dir.path().join("b.wav")]
        );
    }

    #[test]
    fn uppercase_extensions_are_matched_without_duplicates() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("loud.MP3"));
        touch(&dir.path().join("quiet.Flac"));

        let found = find_audio_files(dir.path(), true);
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn recursive_flag_controls_depth() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("top.wav"));
        fs::create_dir(dir.path().join("sub")).unwrap();
        touch(&dir.path().join("sub").join("nested.ogg"));

        let recursive = find_audio_files(dir.path(), true);
        assert_eq!(recursive.len(), 2);

        let top_only = find_audio_files(dir.path(), false);
        assert_eq!(top_only, vec![dir.path().join("top.wav")]);
    }

    #[test]
    fn stable_across_runs() {
        let dir = tempdir().unwrap();
        for name in ["z.mp2", "m.aac", "a.opus"] {
            touch(&dir.path().join(name));
        }

        let first = find_audio_files(dir.path(), true);
        let second = find_audio_files(dir.path(), true);
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn empty_directory_yields_nothing() {
        let dir = tempdir().unwrap();
        assert!(find_audio_files(dir.path(), true).is_empty());
    }
}
