use std::{
  path::{Path, PathBuf},
  time::Duration,
};

use serde::Deserialize;
use sugar_path::SugarPath;

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HermescOptions {
  /// Root of the hermesc distribution, holding one directory per platform.
  pub hermesc: Option<PathBuf>,
  /// Where the `hermesc` scratch directory is created. Defaults to the system temp dir.
  pub temp_dir: Option<PathBuf>,
  /// Fail the build instead of warning when hermesc cannot produce bytecode.
  pub strict: Option<bool>,
  pub timeout_ms: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct NormalizedHermescOptions {
  pub root: PathBuf,
  /// `<temp dir>/hermesc`, shared by all builds. Each build works in its own subdirectory.
  pub workspace_root: PathBuf,
  pub strict: bool,
  pub timeout: Option<Duration>,
}

pub(crate) fn normalize_options(raw_options: HermescOptions) -> NormalizedHermescOptions {
  let root = raw_options.hermesc.unwrap_or_else(|| {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..").join("hermesc")
  });

  NormalizedHermescOptions {
    root: root.absolutize(),
    workspace_root: raw_options.temp_dir.unwrap_or_else(std::env::temp_dir).join("hermesc"),
    strict: raw_options.strict.unwrap_or(false),
    timeout: raw_options.timeout_ms.map(Duration::from_millis),
  }
}

#[test]
fn test_normalize_defaults() {
  let options = normalize_options(HermescOptions::default());
  assert!(options.root.is_absolute());
  assert!(options.root.ends_with("hermesc"));
  assert!(!options.root.components().any(|component| component.as_os_str() == ".."));
  assert_eq!(options.workspace_root, std::env::temp_dir().join("hermesc"));
  assert!(!options.strict);
  assert_eq!(options.timeout, None);
}

#[test]
fn test_deserialize_options() {
  let raw: HermescOptions = serde_json::from_str(
    r#"{ "hermesc": "/opt/hermesc", "tempDir": "/scratch", "strict": true, "timeoutMs": 1500 }"#,
  )
  .unwrap();
  let options = normalize_options(raw);
  assert!(options.root.ends_with("opt/hermesc"));
  assert_eq!(options.workspace_root, Path::new("/scratch/hermesc"));
  assert!(options.strict);
  assert_eq!(options.timeout, Some(Duration::from_millis(1500)));

  assert!(serde_json::from_str::<HermescOptions>(r#"{ "binary": "/opt" }"#).is_err());
}
