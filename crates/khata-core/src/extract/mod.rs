//! The extraction pipeline, leaves first.
//!
//! `lines` normalizes raw OCR text, `occurrences` tags every pattern match
//! with its line index, `proximity` associates occurrences with anchors,
//! `names` resolves sender/receiver sections, and the two assemblers
//! (`ledger`, `receipt`) turn all of that into records. `classify` and
//! `summary` sit at the edges. Data flows strictly left to right; no stage
//! mutates another stage's output.

pub mod classify;
pub mod ledger;
pub mod lines;
pub mod names;
pub mod occurrences;
pub mod patterns;
pub mod proximity;
pub mod receipt;
pub mod summary;
pub mod vocab;

pub use classify::{classify, detect_service, detect_status, DocumentKind};
pub use ledger::parse_statement;
pub use lines::normalize_lines;
pub use names::{resolve, NameSections};
pub use occurrences::{parse_amount, scan, AccountForm, Occurrence, OccurrenceKind};
pub use receipt::parse_receipt;
pub use summary::summarize;
