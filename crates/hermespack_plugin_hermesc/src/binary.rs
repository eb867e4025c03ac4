use std::path::{Path, PathBuf};

/// Name of the per-platform directory in a hermesc distribution. The prebuilt binaries
/// follow Node's `process.platform` naming.
pub fn platform_segment() -> &'static str {
  match std::env::consts::OS {
    "windows" => "win32",
    "macos" => "darwin",
    os => os,
  }
}

pub fn binary_path(root: &Path, platform: &str) -> PathBuf {
  let extension = if platform == "win32" { ".exe" } else { "" };
  root.join(platform).join(format!("hermesc{extension}"))
}

#[test]
fn test_binary_path() {
  let root = Path::new("/opt/hermesc");
  assert_eq!(binary_path(root, "linux"), Path::new("/opt/hermesc/linux/hermesc"));
  assert_eq!(binary_path(root, "darwin"), Path::new("/opt/hermesc/darwin/hermesc"));
  assert_eq!(binary_path(root, "win32"), Path::new("/opt/hermesc/win32/hermesc.exe"));
}

#[test]
fn test_platform_segment() {
  let segment = platform_segment();
  assert!(!segment.is_empty());
  assert_ne!(segment, "windows");
  assert_ne!(segment, "macos");
}
