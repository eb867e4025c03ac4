use hermespack_common::{NormalizedOutputOptions, OutputBundle};

pub struct HookGenerateBundleArgs<'a> {
  pub options: &'a NormalizedOutputOptions,
  pub bundle: &'a OutputBundle,
  pub is_write: bool,
}
