//! Document model types for converted Markdown content.
//!
//! This module defines the intermediate representation that bridges
//! Markdown parsing and document rendering. A [`Document`] is an ordered
//! sequence of [`Block`]s; order is significant and preserved by every
//! renderer.

mod block;
mod document;
mod table;

pub use block::{Block, HeadingLevel};
pub use document::{Document, Metadata};
pub use table::Table;
