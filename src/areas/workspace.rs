use crate::artifacts::core::error::CompareError;

/// File intake: whole-file reads translated into the comparison error
/// taxonomy before any engine logic runs.
#[derive(Debug, Default)]
pub struct Workspace;

impl Workspace {
    pub fn new() -> Self {
        Workspace
    }

    /// Reads a text file into physical lines, each keeping its trailing
    /// terminator if present.
    pub fn read_lines(&self, path: &str) -> Result<Vec<String>, CompareError> {
        let content = std::fs::read_to_string(path).map_err(|source| match source.kind() {
            std::io::ErrorKind::NotFound => CompareError::InputNotFound {
                path: path.to_string(),
            },
            _ => CompareError::InputUnreadable {
                path: path.to_string(),
                source,
            },
        })?;

        Ok(content.split_inclusive('\n').map(str::to_string).collect())
    }
}
