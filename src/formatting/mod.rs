// src/formatting/mod.rs
//! Document rendering: the organized structure becomes outline text.
//!
//! Both renderers are pure: they take the already-organized data for one
//! or more books and return the finished document `String`, with no I/O
//! and no shared state. The per-book Logseq outline and the single-file
//! digest are intentionally different document shapes, not one derived
//! from the other.

mod digest;
mod outline;

pub use digest::{render_digest, DigestEntry};
pub use outline::render_outline;
