use crate::artifacts::identity::file_identity::FileIdentity;
use crate::artifacts::normalize::DATETIME_PATTERN;
use anyhow::Context;
use regex::Regex;

/// Strips build-time noise from lines so that two artifacts built at
/// different times, in different directories, compare equal.
///
/// Both regexes are compiled once per identity, not per line.
pub struct Normalizer {
    datetime: Regex,
    path_prefix: Regex,
    name: String,
    version: String,
}

impl Normalizer {
    pub fn for_identity(identity: &FileIdentity) -> anyhow::Result<Self> {
        let datetime = Regex::new(DATETIME_PATTERN)
            .with_context(|| format!("invalid datetime regex: {DATETIME_PATTERN}"))?;

        // A run of non-whitespace ending in path separators, anchored on the
        // artifact name: "/home/ci/build/report/" collapses away.
        let path_pattern = format!(r"\S+[\\/]+{}[\\/]*", regex::escape(identity.name()));
        let path_prefix = Regex::new(&path_pattern)
            .with_context(|| format!("invalid path regex: {path_pattern}"))?;

        Ok(Self {
            datetime,
            path_prefix,
            name: identity.name().to_string(),
            version: identity.version().to_string(),
        })
    }

    /// Maps every line through the stripping steps, preserving length and
    /// order of the sequence.
    pub fn normalize_lines(&self, lines: &[String]) -> Vec<String> {
        lines.iter().map(|line| self.normalize_line(line)).collect()
    }

    /// Removal order matters: timestamps first, then name-anchored path
    /// runs, then the bare name and version tokens.
    ///
    /// The token removals are plain substring erasures applied anywhere in
    /// the line, not only in path-like contexts: a short artifact name will
    /// also strip unrelated text that happens to contain it. That matches
    /// the established behavior of the tool and is pinned by a test.
    fn normalize_line(&self, line: &str) -> String {
        let line = self.datetime.replace_all(line, "");
        let line = self.path_prefix.replace_all(&line, "");
        let line = line.replace(&self.name, "");
        if self.version.is_empty() {
            // Erasing an empty version must be a no-op, never a per-char split.
            line
        } else {
            line.replace(&self.version, "")
        }
    }
}
