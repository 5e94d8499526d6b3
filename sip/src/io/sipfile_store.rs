//! Reading the Sipfile from a package.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Read the Sipfile at `path`; a package without one has `None`.
pub fn read_sipfile(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    Ok(Some(contents))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_sipfile_is_none() {
        let temp = tempfile::tempdir().expect("tempdir");
        let contents = read_sipfile(&temp.path().join("Sipfile")).expect("read");
        assert_eq!(contents, None);
    }

    #[test]
    fn reads_existing_sipfile() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("Sipfile");
        fs::write(&path, "static = [\"1\"]\n").expect("write");
        assert_eq!(
            read_sipfile(&path).expect("read").as_deref(),
            Some("static = [\"1\"]\n")
        );
    }
}
