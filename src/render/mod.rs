//! Rendering module for serializing converted documents.

mod json;
mod output;

pub use json::{to_json, JsonFormat};
pub use output::{output_path_for, save_json, DEFAULT_OUTPUT_DIR};
