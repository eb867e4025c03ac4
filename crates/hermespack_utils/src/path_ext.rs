use std::path::Path;

pub trait PathExt {
  fn output_file_name(&self) -> Option<&str>;

  fn artifact_base_name(&self) -> Option<&str>;
}

impl PathExt for Path {
  /// The last component of an output path, which is also the key of the chunk in the bundle.
  fn output_file_name(&self) -> Option<&str> {
    self.file_name().and_then(|name| name.to_str())
  }

  /// Everything before the first `.` of the file name, so `app.min.js` yields `app`.
  fn artifact_base_name(&self) -> Option<&str> {
    self.output_file_name().and_then(|name| name.split('.').next())
  }
}

#[test]
fn test_output_file_name() {
  assert_eq!(Path::new("/out/app.js").output_file_name(), Some("app.js"));
  assert_eq!(Path::new("app.js").output_file_name(), Some("app.js"));
  assert_eq!(Path::new("/").output_file_name(), None);
}

#[test]
fn test_artifact_base_name() {
  assert_eq!(Path::new("/out/app.js").artifact_base_name(), Some("app"));
  assert_eq!(Path::new("/out/app.min.js").artifact_base_name(), Some("app"));
  assert_eq!(Path::new("dist/index").artifact_base_name(), Some("index"));
}
