//! Core library for heuristic extraction of structured records from noisy
//! OCR text of financial documents.
//!
//! This crate provides:
//! - single-pass pattern extraction (amounts, dates, times, identifiers,
//!   bank tokens, account numbers, phone numbers, names)
//! - positional association of fields around anchor amounts
//! - two assembly profiles: bank-statement ledgers and mobile-payment
//!   receipts
//! - coarse document classification and statement summaries
//!
//! Parsing is a pure function of the input text: no template, no manual
//! field mapping, no state across calls, and no failure mode for malformed
//! text (missing fields keep their typed defaults).

pub mod error;
pub mod extract;
pub mod models;

pub use error::{KhataError, Result};
pub use extract::classify::{classify, DocumentKind};
pub use extract::ledger::parse_statement;
pub use extract::receipt::parse_receipt;
pub use models::config::{ExtractionConfig, Lexicon};
pub use models::record::{
    AccountInfo, PaymentRecord, StatementReport, Summary, TransactionRecord,
};
