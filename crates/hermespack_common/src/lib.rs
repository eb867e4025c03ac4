mod bundler_options;
mod types;

pub use crate::{
  bundler_options::{
    normalized_output_options::{normalize_output_options, NormalizedOutputOptions},
    OutputOptions,
  },
  types::{
    emitted_asset::EmittedAsset,
    output::Output,
    output_asset::OutputAsset,
    output_bundle::OutputBundle,
    output_chunk::OutputChunk,
  },
};
