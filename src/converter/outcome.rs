//! Per-file conversion outcomes and the run summary.

use std::fmt;

/// Why a candidate was skipped without invoking the transcoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The input is already an MP3 at or above the target bitrate.
    AlreadyAtTargetBitrate,
    /// The output file exists and overwriting is disabled.
    OutputExists,
}

/// The result of processing one candidate file.
///
/// Created once per candidate and never mutated. Only [`Outcome::Converted`]
/// counts as success; skips count against the process exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The transcoder ran and exited successfully.
    Converted { input: String, output: String },
    /// Processing was skipped before the transcoder was invoked.
    Skipped { reason: SkipReason, detail: String },
    /// Validation or the transcoder itself failed.
    Failed { reason: String },
}

impl Outcome {
    /// Whether this outcome represents a successful conversion.
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Converted { .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Converted { input, output } => write!(f, "Converted: {input} -> {output}"),
            Outcome::Skipped {
                reason: SkipReason::AlreadyAtTargetBitrate,
                detail,
            } => write!(f, "Skipped (already 320kbps): {detail}"),
            Outcome::Skipped {
                reason: SkipReason::OutputExists,
                detail,
            } => write!(f, "Skipped (file exists): {detail}"),
            Outcome::Failed { reason } => write!(f, "{reason}"),
        }
    }
}

/// Aggregated counts for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub converted: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl Summary {
    /// Tally a sequence of outcomes.
    pub fn from_outcomes(outcomes: &[Outcome]) -> Self {
        let mut summary = Summary::default();
        for outcome in outcomes {
            summary.total += 1;
            match outcome {
                Outcome::Converted { .. } => summary.converted += 1,
                Outcome::Skipped { .. } => summary.skipped += 1,
                Outcome::Failed { .. } => summary.failed += 1,
            }
        }
        summary
    }

    /// Whether every processed file converted successfully.
    ///
    /// Skips count against this, matching the process exit contract.
    pub fn all_succeeded(&self) -> bool {
        self.skipped == 0 && self.failed == 0
    }
}
