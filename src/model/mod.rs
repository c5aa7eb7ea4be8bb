// src/model/mod.rs
//! Domain model for one export unit.
//!
//! These are the strongly-typed entities the rendering core operates on.
//! They are constructed fresh from each fetch by the boundary adapter in
//! `api::parser` and discarded once the document is written; no state
//! survives between books or between runs.

mod book;
mod review;

pub use book::{Book, Category, Chapter, Highlight};
pub use review::{BookReview, ClassifiedReview, LinkedNote, RawReview, StandaloneThought};
