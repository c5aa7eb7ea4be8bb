// src/output/mod.rs
//! File output, the only place where document I/O occurs.

mod paths;
mod writer;

pub use paths::{book_file_path, sanitize_filename};
pub use writer::write_document;
