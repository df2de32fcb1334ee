use crate::artifacts::core::error::CompareError;
use crate::artifacts::identity::NAME_PATTERN;
use anyhow::Context;
use derive_new::new;

/// The `(name, version)` pair extracted from an artifact's base name.
///
/// `version` is empty when the base name carries no version segment;
/// removing an empty version during normalization is a no-op.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct FileIdentity {
    name: String,
    version: String,
}

impl FileIdentity {
    /// Parses the identity pair out of the path's base name (the last
    /// `/`- or `\`-delimited component).
    ///
    /// A base name that does not fit `NAME_PATTERN` is fatal: the
    /// normalizer cannot run without an identity to strip, and comparing
    /// unnormalized content would defeat the tool's purpose.
    pub fn try_parse(path: &str) -> anyhow::Result<Self> {
        let base_name = path.rsplit(['/', '\\']).next().unwrap_or(path);

        let re = regex::Regex::new(NAME_PATTERN)
            .with_context(|| format!("invalid identity regex: {NAME_PATTERN}"))?;

        let captures = re
            .captures(base_name)
            .ok_or_else(|| CompareError::UnparseableIdentity {
                filename: base_name.to_string(),
            })?;

        let name = captures[1].to_string();
        let version = captures
            .get(2)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();

        Ok(Self { name, version })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}
