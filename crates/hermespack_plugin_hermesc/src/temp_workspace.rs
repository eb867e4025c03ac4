use std::{
  io,
  path::{Path, PathBuf},
};

use hermespack_utils::random::random_u32;

/// Scratch directory of one build, `<workspace root>/<build id>`.
#[derive(Debug)]
pub struct TempWorkspace {
  root: PathBuf,
  dir: PathBuf,
}

impl TempWorkspace {
  pub fn new(root: &Path, build_id: &str) -> Self {
    Self { root: root.to_path_buf(), dir: root.join(build_id) }
  }

  pub fn dir(&self) -> &Path {
    &self.dir
  }

  pub async fn ensure(&self) -> io::Result<()> {
    match tokio::fs::create_dir_all(&self.dir).await {
      // A sibling build may have removed the shared root between our two `mkdir`s.
      Err(err) if err.kind() == io::ErrorKind::NotFound => {
        tokio::fs::create_dir_all(&self.dir).await
      }
      result => result,
    }
  }

  /// A fresh `<random u32>.<extension>` path inside the workspace. The file is not created.
  pub fn random_file(&self, extension: &str) -> io::Result<PathBuf> {
    Ok(self.dir.join(format!("{}.{extension}", random_u32()?)))
  }

  /// Removes this build's directory.
  pub async fn remove(&self) -> io::Result<()> {
    match tokio::fs::remove_dir_all(&self.dir).await {
      Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
      result => result,
    }
  }

  /// Removes the shared root unless sibling builds still have directories in it.
  pub async fn remove_root_if_unused(&self) -> io::Result<()> {
    match tokio::fs::remove_dir(&self.root).await {
      Err(err)
        if matches!(err.kind(), io::ErrorKind::NotFound | io::ErrorKind::DirectoryNotEmpty) =>
      {
        Ok(())
      }
      result => result,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_remove_is_idempotent() {
    let temp = tempfile::tempdir().unwrap();
    let workspace = TempWorkspace::new(&temp.path().join("hermesc"), "1-0");

    workspace.remove().await.unwrap();
    workspace.remove_root_if_unused().await.unwrap();

    workspace.ensure().await.unwrap();
    let file = workspace.random_file("js").unwrap();
    assert!(file.starts_with(workspace.dir()));
    assert_eq!(file.extension().and_then(|ext| ext.to_str()), Some("js"));
    tokio::fs::write(&file, "1").await.unwrap();

    workspace.remove().await.unwrap();
    workspace.remove().await.unwrap();
    workspace.remove_root_if_unused().await.unwrap();
    assert!(!temp.path().join("hermesc").exists());
  }

  #[tokio::test]
  async fn test_remove_keeps_sibling_builds() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path().join("hermesc");
    let first = TempWorkspace::new(&root, "1-0");
    let second = TempWorkspace::new(&root, "1-1");
    first.ensure().await.unwrap();
    second.ensure().await.unwrap();

    first.remove().await.unwrap();
    first.remove_root_if_unused().await.unwrap();
    assert!(!first.dir().exists());
    assert!(second.dir().exists());

    second.remove().await.unwrap();
    second.remove_root_if_unused().await.unwrap();
    assert!(!root.exists());
  }

  #[tokio::test]
  async fn test_root_removal_reports_unexpected_errors() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path().join("hermesc");
    std::fs::write(&root, "not a directory").unwrap();
    let workspace = TempWorkspace::new(&root, "1-0");

    assert!(workspace.remove_root_if_unused().await.is_err());
    assert!(root.exists());
  }

  #[tokio::test]
  async fn test_ensure_recreates_a_removed_root() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path().join("hermesc");
    let workspace = TempWorkspace::new(&root, "1-0");

    workspace.ensure().await.unwrap();
    workspace.remove().await.unwrap();
    workspace.remove_root_if_unused().await.unwrap();
    assert!(!root.exists());

    workspace.ensure().await.unwrap();
    assert!(workspace.dir().is_dir());
  }
}
