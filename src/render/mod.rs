//! Rendering module for writing documents to output formats.

mod docx;
mod json;
mod options;
mod result;
mod text;

pub use docx::{to_docx, to_docx_with_stats, write_docx, DocxWriter};
pub use json::{to_json, JsonFormat};
pub use options::{FontSizes, RenderOptions, DEFAULT_TABLE_STYLE};
pub use result::{ConversionStats, RenderResult};
pub use text::to_text;
