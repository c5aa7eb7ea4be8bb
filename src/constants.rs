// src/constants.rs
//! Domain constants that define the operational boundaries of the system.
//!
//! Each constant is named for the domain concept it constrains, not its
//! technical role. Reading these constants should tell you the story
//! of how the exporter operates: where it fetches from, how it paces
//! itself, and which placeholder text it falls back to.

use std::time::Duration;

// ---------------------------------------------------------------------------
// WeRead API boundaries
// ---------------------------------------------------------------------------

/// Base URL of the WeRead internal API.
pub const WEREAD_API_BASE_URL: &str = "https://i.weread.qq.com";

/// Delay inserted between consecutive book fetches during batch export.
///
/// A courtesy toward the WeRead service, not a correctness requirement:
/// per-book processing is independent and the delay may be removed if the
/// fetch strategy changes.
pub const INTER_BOOK_DELAY: Duration = Duration::from_secs(1);

/// Review `type` discriminator the service uses for whole-book reviews.
pub const REVIEW_TYPE_BOOK: i64 = 4;

// ---------------------------------------------------------------------------
// Outline vocabulary
// ---------------------------------------------------------------------------

/// Placeholder title for a chapter uid missing from the chapter list.
pub const UNKNOWN_CHAPTER_TITLE: &str = "未知章节";

/// Category shown when a book carries no category at all.
pub const UNCATEGORIZED: &str = "未分类";

/// Publisher and source-platform name used when the service is the origin.
pub const PLATFORM_NAME: &str = "微信读书";

/// Placeholder body for books without an introduction.
pub const NO_INTRO_PLACEHOLDER: &str = "暂无简介";

/// Display width (in Logseq's `{:width N}` directive) for cover images.
pub const COVER_DISPLAY_WIDTH: u32 = 80;

// ---------------------------------------------------------------------------
// Output defaults
// ---------------------------------------------------------------------------

/// Default directory for per-book exports.
pub const DEFAULT_OUTPUT_DIR: &str = "exported_notes";

/// Default filename for the single-file digest.
pub const DEFAULT_DIGEST_FILENAME: &str = "all_notes.md";

// ---------------------------------------------------------------------------
// String capacity hints (performance, not correctness)
// ---------------------------------------------------------------------------

/// Estimated characters per rendered highlight block, used to pre-allocate
/// output strings. Over-estimating wastes a little memory; under-estimating
/// causes reallocation.
pub const CHARS_PER_HIGHLIGHT_ESTIMATE: usize = 160;

/// Default initial capacity for rendered documents.
pub const DOCUMENT_INITIAL_CAPACITY: usize = 2048;
