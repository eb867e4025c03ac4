/// Passed to `build_end` when an earlier hook of the same build failed.
pub struct HookBuildEndArgs<'a> {
  pub errors: &'a [anyhow::Error],
}
