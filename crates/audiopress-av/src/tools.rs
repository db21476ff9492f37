//! External tool detection.

use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Require that a tool is available on `$PATH`, returning its path.
///
/// # Errors
///
/// Returns an error if the tool is not found.
pub fn require_tool(name: &str) -> Result<PathBuf> {
    which::which(name).map_err(|_| Error::tool_not_found(name))
}

/// Get the path to a tool, preferring an explicitly configured path over
/// `$PATH` lookup.
pub fn get_tool_path(name: &str, explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        if path.exists() {
            return Ok(path.to_path_buf());
        }
    }

    require_tool(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_tool_not_found() {
        let result = require_tool("nonexistent_tool_12345");
        assert!(matches!(result, Err(Error::ToolNotFound { .. })));
    }

    #[test]
    fn test_get_tool_path_prefers_explicit() {
        // Any existing path is accepted verbatim.
        let explicit = std::env::current_exe().unwrap();
        let resolved = get_tool_path("nonexistent_tool_12345", Some(&explicit)).unwrap();
        assert_eq!(resolved, explicit);
    }

    #[test]
    fn test_get_tool_path_falls_back_to_lookup() {
        let missing = Path::new("/nonexistent/path/to/tool");
        let result = get_tool_path("nonexistent_tool_12345", Some(missing));
        assert!(matches!(result, Err(Error::ToolNotFound { .. })));
    }
}
