use crate::page::PackageDoc;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid package description in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read raw comment text
pub fn read_comment(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Read and parse a JSON package description
pub fn read_package(path: &Path) -> Result<PackageDoc, IoError> {
    let content = read_comment(path)?;
    let pkg: PackageDoc = serde_json::from_str(&content).map_err(|source| IoError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!(
        "loaded package {} ({} funcs, {} types, {} examples)",
        pkg.name,
        pkg.funcs.len(),
        pkg.types.len(),
        pkg.examples.len()
    );
    Ok(pkg)
}

/// Write rendered output, creating parent directories as needed
pub fn write_output(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(path, content).map_err(IoError::Io)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_read_comment_success() {
        let dir = TempDir::new().unwrap();
        let path = create_test_file(&dir, "doc.txt", "Package x does things.\n");

        let content = read_comment(&path).unwrap();
        assert_eq!(content, "Package x does things.\n");
    }

    #[test]
    fn test_read_comment_not_found() {
        let dir = TempDir::new().unwrap();
        let result = read_comment(&dir.path().join("missing.txt"));
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_read_package_success() {
        let dir = TempDir::new().unwrap();
        let path = create_test_file(
            &dir,
            "pkg.json",
            r#"{"name": "fs", "import_path": "example.org/fs", "doc": "Package fs.\n"}"#,
        );

        let pkg = read_package(&path).unwrap();
        assert_eq!(pkg.name, "fs");
        assert_eq!(pkg.import_path, "example.org/fs");
    }

    #[test]
    fn test_read_package_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = create_test_file(&dir, "pkg.json", "{ not json");

        let err = read_package(&path).unwrap_err();
        assert!(matches!(err, IoError::Json { .. }));
        assert!(err.to_string().contains("pkg.json"));
    }

    #[test]
    fn test_write_output_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("docs").join("api").join("README.md");

        write_output(&path, "# fs\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "# fs\n");
    }

    #[test]
    fn test_write_output_overwrites_existing() {
        let dir = TempDir::new().unwrap();
        let path = create_test_file(&dir, "out.md", "old");

        write_output(&path, "new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }
}
