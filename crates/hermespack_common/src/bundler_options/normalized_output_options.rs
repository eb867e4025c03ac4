use std::path::Path;

use crate::OutputOptions;

#[derive(Debug, Clone)]
pub struct NormalizedOutputOptions {
  pub dir: String,
  pub file: Option<String>,
}

pub fn normalize_output_options(raw_options: OutputOptions) -> NormalizedOutputOptions {
  // `file` wins over `dir`, the output directory is then the parent of the file.
  let dir = raw_options.file.as_ref().map_or(
    raw_options.dir.unwrap_or_else(|| "dist".to_string()),
    |file| {
      Path::new(file.as_str())
        .parent()
        .map(|parent| parent.to_string_lossy().to_string())
        .unwrap_or_default()
    },
  );

  NormalizedOutputOptions {
    dir,
    file: raw_options.file,
  }
}

#[test]
fn test_normalize_output_options() {
  let options = normalize_output_options(OutputOptions::default());
  assert_eq!(options.dir, "dist");
  assert_eq!(options.file, None);

  let options = normalize_output_options(OutputOptions {
    dir: Some("build".to_string()),
    file: Some("/out/app.js".to_string()),
    ..Default::default()
  });
  assert_eq!(options.dir, "/out");
  assert_eq!(options.file.as_deref(), Some("/out/app.js"));
}
