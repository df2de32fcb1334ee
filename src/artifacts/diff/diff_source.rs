use crate::areas::workspace::Workspace;
use crate::artifacts::identity::file_identity::FileIdentity;
use crate::artifacts::normalize::normalizer::Normalizer;
use derive_new::new;

pub type LineSet = Vec<String>;

/// One side of a comparison: the raw lines as read from disk plus their
/// normalized counterpart used for alignment.
///
/// Raw lines are what gets rendered; normalized lines are what the LCS
/// engine aligns. Both sequences have the same length and order.
#[derive(Debug, Clone, new)]
pub struct DiffSource {
    pub(crate) lines: LineSet,
    pub(crate) normalized: LineSet,
}

impl DiffSource {
    pub fn from_path(path: &str, workspace: &Workspace) -> anyhow::Result<Self> {
        let lines = workspace.read_lines(path)?;
        let identity = FileIdentity::try_parse(path)?;
        let normalized = Normalizer::for_identity(&identity)?.normalize_lines(&lines);

        Ok(Self { lines, normalized })
    }
}
