//! Plain-text persistence for lifegrid live sets.
//!
//! Saves and loads the live cell set as a coordinate list, and parses
//! brush masks from text. No serde dependency: the formats are small
//! enough to read and write by hand.
//!
//! # Architecture
//!
//! - [`CellWriter`] streams cells to any `Write` sink
//! - [`CellReader`] iterates cells from any `BufRead` source
//! - [`load`] reads a whole file and recenters it ([`Loaded`])
//! - [`parse_mask`] builds a [`BrushMask`](lifegrid_core::BrushMask)
//!   from rows of `0`/`1`
//!
//! # Format
//!
//! ```text
//! {x},{y}\n
//! {x},{y}\n
//! ...
//! ```
//!
//! One live cell per line, no header. Surrounding whitespace and `\r\n`
//! terminators are accepted on read; blank lines are not.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod error;
pub mod mask;
pub mod reader;
pub mod writer;

pub use error::FormatError;
pub use mask::parse_mask;
pub use reader::{load, load_from_path, recenter, CellReader, Loaded, MAX_SPAN};
pub use writer::{save, save_to_path, CellWriter};
