//! Markdown parsing module.
//!
//! The supported subset is line oriented: `#`/`##`/`###` headings,
//! whole-line `**bold**`, plain paragraphs and pipe-delimited tables.
//! Everything else (blank lines, `---` rules, deeper headings) is skipped.

mod markdown;
mod options;
mod table;

pub use markdown::{next_block, parse_lines, MarkdownParser, ParseReport, Step};
pub use options::{ParseOptions, RowPolicy};
pub use table::{parse_table, split_cells};
