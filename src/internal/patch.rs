//! A single-span source patch: an anchor regex bounding the span to replace
//! and the literal text that replaces it.

use regex::{NoExpand, Regex};

/// One hardcoded find-and-replace over a source file.
///
/// The anchor is a non-greedy multi-line pattern spanning from a function
/// signature through a known trailing statement. Only the leftmost match is
/// ever replaced, and the replacement is inserted literally (no capture
/// expansion).
pub struct SourcePatch {
    pub name: &'static str,
    pub summary: &'static str,
    /// File the patch targets when no path is given on the command line.
    pub default_target: &'static str,
    anchor: Regex,
    replacement: &'static str,
    /// Substring unique to the replacement, used to recognize a file this
    /// patch has already been applied to.
    applied_marker: &'static str,
}

/// Result of attempting a patch against loaded source text.
pub enum PatchOutcome {
    /// The anchor matched; carries the patched content.
    Applied(String),
    /// The anchor is gone but the applied marker is present.
    AlreadyApplied,
    /// Neither anchor nor marker found. Not a recognizable target.
    AnchorNotFound,
}

impl SourcePatch {
    pub fn new(
        name: &'static str,
        summary: &'static str,
        default_target: &'static str,
        anchor_pattern: &str,
        replacement: &'static str,
        applied_marker: &'static str,
    ) -> Self {
        // Patterns are compile-time constants, a failure here is a bug.
        let anchor = Regex::new(anchor_pattern).unwrap();
        Self {
            name,
            summary,
            default_target,
            anchor,
            replacement,
            applied_marker,
        }
    }

    /// Attempts the substitution against `source`.
    ///
    /// Replaces at most one span (the leftmost anchor match); every other
    /// byte of the input is preserved as-is.
    pub fn apply(&self, source: &str) -> PatchOutcome {
        if let Some(m) = self.anchor.find(source) {
            tracing::debug!(start = m.start(), end = m.end(), "anchor matched");
            let patched = self.anchor.replacen(source, 1, NoExpand(self.replacement));
            return PatchOutcome::Applied(patched.into_owned());
        }
        if source.contains(self.applied_marker) {
            return PatchOutcome::AlreadyApplied;
        }
        PatchOutcome::AnchorNotFound
    }

    /// The literal text the anchor span is replaced with.
    pub fn replacement(&self) -> &'static str {
        self.replacement
    }
}
