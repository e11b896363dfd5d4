//! Reading content back out of existing Word documents.
//!
//! [`read_tables`] returns the text of every top-level table cell in a
//! `.docx` package; [`extract_requirements`] turns those cells into a
//! requirement id -> description index, the way a traceability matrix is
//! usually laid out (id in the first column, description in the second).

mod docx;
mod requirements;

pub use docx::{read_tables, read_tables_from_bytes, tables_from_document_xml, TableCells};
pub use requirements::{
    extract_requirements, requirement_id, RequirementIndex, DEFAULT_PREFIX, NOT_FOUND,
};
