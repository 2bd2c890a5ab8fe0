//! Data models: extracted records and engine configuration.

pub mod config;
pub mod record;

pub use config::{ExtractionConfig, Lexicon};
pub use record::{
    AccountInfo, PaymentRecord, StatementReport, Summary, TransactionRecord,
};
