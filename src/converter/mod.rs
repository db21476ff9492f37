//! Conversion orchestration.
//!
//! Resolves inputs into candidate files, makes skip decisions, maps output
//! paths and delegates all transcoding to the external tool layer. Skip
//! decisions always happen before any external process is invoked for a
//! file, and processing is strictly sequential.

mod discover;
mod outcome;

pub use discover::find_audio_files;
pub use outcome::{Outcome, SkipReason, Summary};

use crate::formats;
use audiopress_av::{probe, tools, transcode};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Orchestrator configuration, immutable per invocation.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Directory for converted files; `None` places outputs next to inputs.
    pub output_root: Option<PathBuf>,
    /// Overwrite existing output files.
    pub overwrite: bool,
    /// Mirror the input tree under the output root when converting
    /// directories recursively.
    pub keep_structure: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            output_root: None,
            overwrite: false,
            keep_structure: true,
        }
    }
}

/// The conversion orchestrator.
pub struct Converter {
    ffmpeg: PathBuf,
    ffprobe: Option<PathBuf>,
    options: ConvertOptions,
}

impl Converter {
    /// Resolve the external tools and create a converter.
    ///
    /// Explicit tool paths are preferred over `$PATH` discovery. Fails fast,
    /// before any file is touched, when the transcoder cannot be located; a
    /// missing probe tool only disables the bitrate skip heuristic.
    pub fn new(
        options: ConvertOptions,
        ffmpeg_path: Option<&Path>,
        ffprobe_path: Option<&Path>,
    ) -> audiopress_av::Result<Self> {
        let ffmpeg = tools::get_tool_path("ffmpeg", ffmpeg_path)?;
        let ffprobe = tools::get_tool_path("ffprobe", ffprobe_path).ok();
        Ok(Self::with_tools(ffmpeg, ffprobe, options))
    }

    /// Create a converter from already-resolved tool paths.
    pub fn with_tools(ffmpeg: PathBuf, ffprobe: Option<PathBuf>, options: ConvertOptions) -> Self {
        if ffprobe.is_none() {
            warn!("ffprobe not available, existing MP3 bitrates will not be checked");
        }
        Self {
            ffmpeg,
            ffprobe,
            options,
        }
    }

    /// Convert a single audio file to a 320 kbps MP3.
    ///
    /// Without an explicit output the path is derived from the options:
    /// `{output_root}/{stem}.mp3` when an output root is set, otherwise a
    /// sibling `{stem}.mp3` next to the input.
    pub fn convert_file(&self, input: &Path, explicit_output: Option<&Path>) -> Outcome {
        if !input.exists() {
            return Outcome::Failed {
                reason: format!("input file not found: {}", input.display()),
            };
        }

        if !formats::is_audio_file(input) {
            let ext = input.extension().and_then(|e| e.to_str()).unwrap_or("");
            return Outcome::Failed {
                reason: format!("unsupported format: .{ext}"),
            };
        }

        let output = match explicit_output {
            Some(path) => path.to_path_buf(),
            None => self.default_output_path(input),
        };

        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(e) = fs::create_dir_all(parent) {
                    return Outcome::Failed {
                        reason: format!(
                            "cannot create output directory {}: {e}",
                            parent.display()
                        ),
                    };
                }
            }
        }

        if output.exists() && !self.options.overwrite {
            // Only an MP3 input gets the bitrate re-check; other formats
            // skip on an existing output unconditionally.
            if formats::is_mp3(input) {
                let kbps = self
                    .ffprobe
                    .as_deref()
                    .and_then(|ffprobe| probe::bitrate_kbps(ffprobe, input));
                if kbps.is_some_and(|k| k >= transcode::TARGET_BITRATE_KBPS) {
                    return Outcome::Skipped {
                        reason: SkipReason::AlreadyAtTargetBitrate,
                        detail: display_name(input),
                    };
                }
            }
            return Outcome::Skipped {
                reason: SkipReason::OutputExists,
                detail: display_name(&output),
            };
        }

        debug!(input = %input.display(), output = %output.display(), "transcoding");
        match transcode::transcode_to_mp3(&self.ffmpeg, input, &output, self.options.overwrite) {
            Ok(()) => Outcome::Converted {
                input: display_name(input),
                output: display_name(&output),
            },
            Err(e) => Outcome::Failed {
                reason: format!("conversion failed: {}: {e}", display_name(input)),
            },
        }
    }

    /// Convert every candidate audio file in a directory.
    ///
    /// Candidates are discovered by extension, deduplicated and processed in
    /// lexicographic order, one at a time; a single file's failure never
    /// aborts the remainder. `progress` fires after each candidate with its
    /// 1-based index, the total count, the candidate path and its outcome.
    pub fn convert_directory<F>(&self, dir: &Path, recursive: bool, mut progress: F) -> Vec<Outcome>
    where
        F: FnMut(usize, usize, &Path, &Outcome),
    {
        if !dir.exists() {
            return vec![Outcome::Failed {
                reason: format!("directory not found: {}", dir.display()),
            }];
        }

        if !dir.is_dir() {
            return vec![Outcome::Failed {
                reason: format!("not a directory: {}", dir.display()),
            }];
        }

        let candidates = find_audio_files(dir, recursive);
        if candidates.is_empty() {
            return vec![Outcome::Failed {
                reason: format!("no audio files found in: {}", dir.display()),
            }];
        }

        info!("found {} audio file(s) in {}", candidates.len(), dir.display());

        let total = candidates.len();
        let mut outcomes = Vec::with_capacity(total);
        for (index, candidate) in candidates.iter().enumerate() {
            let output = self.batch_output_path(candidate, dir, recursive);
            let outcome = self.convert_file(candidate, Some(&output));
            progress(index + 1, total, candidate, &outcome);
            outcomes.push(outcome);
        }

        outcomes
    }

    /// Output path for a single-file conversion without an explicit target.
    fn default_output_path(&self, input: &Path) -> PathBuf {
        match &self.options.output_root {
            Some(root) => root.join(mp3_file_name(input)),
            None => input.with_extension("mp3"),
        }
    }

    /// Output path for a candidate discovered under `dir`.
    fn batch_output_path(&self, candidate: &Path, dir: &Path, recursive: bool) -> PathBuf {
        match &self.options.output_root {
            Some(root) => {
                if self.options.keep_structure && recursive {
                    // Mirror the candidate's location relative to the input
                    // directory under the output root.
                    let relative = candidate.strip_prefix(dir).unwrap_or(candidate);
                    root.join(relative).with_extension("mp3")
                } else {
                    root.join(mp3_file_name(candidate))
                }
            }
            None => candidate.with_extension("mp3"),
        }
    }
}

fn mp3_file_name(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    PathBuf::from(format!("{stem}.mp3"))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
