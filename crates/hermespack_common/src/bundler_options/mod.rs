pub mod normalized_output_options;

use serde::Deserialize;

#[derive(Default, Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OutputOptions {
  pub dir: Option<String>,
  pub file: Option<String>,
}
