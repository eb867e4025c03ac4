pub mod hook_build_end_args;
pub mod hook_generate_bundle_args;
pub mod log;
