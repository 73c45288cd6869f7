use std::path::Path;

use anyhow::{Context, Result};
use tokio::io::AsyncReadExt;

/// Reads the whole input: the given file, or stdin when no file is given.
pub async fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read input file: {}", path.display())),
        None => {
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reply.md");
        tokio::fs::write(&path, "## Hi\n").await.unwrap();
        assert_eq!(read_input(Some(&path)).await.unwrap(), "## Hi\n");
    }

    #[tokio::test]
    async fn missing_file_names_path() {
        let err = read_input(Some(Path::new("/definitely/not/here.md"))).await.unwrap_err();
        assert!(err.to_string().contains("here.md"));
    }
}
