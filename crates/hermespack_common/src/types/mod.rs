pub mod emitted_asset;
pub mod output;
pub mod output_asset;
pub mod output_bundle;
pub mod output_chunk;
