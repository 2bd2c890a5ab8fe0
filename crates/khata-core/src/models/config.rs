//! Configuration for the extraction pipeline.
//!
//! Every constant the heuristics depend on lives here with a named default,
//! so tuning for a new document family never touches extraction logic.

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{KhataError, Result};

/// Tunable constants for the extraction pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Lines searched on each side of an anchor amount.
    pub window_radius: usize,

    /// Lower bound (inclusive) of the plausible single-transaction band.
    pub txn_amount_min: f64,

    /// Upper bound (exclusive) of the band; amounts at or above this are
    /// treated as running balances, not movements.
    pub txn_amount_max: f64,

    /// Digit length of a bare phone number.
    pub phone_digits: usize,

    /// Minimum digit length of a bare long account number.
    pub long_account_digits: usize,

    /// Minimum digits for a bare number to qualify as a transaction id.
    pub min_id_digits: usize,

    /// Currency assigned when the document names none.
    pub default_currency: String,

    /// Words and phrases that disqualify a line as a name candidate.
    pub name_exclusions: Lexicon,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            window_radius: 15,
            txn_amount_min: 1_000.0,
            txn_amount_max: 1_000_000.0,
            phone_digits: 11,
            long_account_digits: 15,
            min_id_digits: 10,
            default_currency: "PKR".to_string(),
            name_exclusions: Lexicon::default_name_exclusions(),
        }
    }
}

impl ExtractionConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| KhataError::Config(format!("{}: {e}", path.display())))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// An exclusion lexicon: exact uppercase words plus containment phrases.
///
/// A line is excluded when its uppercased trim equals one of `words`, or
/// contains one of `phrases` as a substring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lexicon {
    /// Lines equal to one of these are excluded.
    pub words: BTreeSet<String>,

    /// Lines containing one of these substrings are excluded.
    pub phrases: Vec<String>,
}

impl Lexicon {
    /// Whether the lexicon disqualifies this line.
    pub fn matches(&self, line: &str) -> bool {
        let upper = line.trim().to_uppercase();
        if self.words.contains(upper.as_str()) {
            return true;
        }
        self.phrases.iter().any(|p| upper.contains(p.as_str()))
    }

    /// Add an exact word.
    pub fn with_word(mut self, word: &str) -> Self {
        self.words.insert(word.to_uppercase());
        self
    }

    /// Add a containment phrase.
    pub fn with_phrase(mut self, phrase: &str) -> Self {
        self.phrases.push(phrase.to_uppercase());
        self
    }

    /// The default lexicon for name-candidate filtering: structural words,
    /// month names, currency tokens, and receipt UI chrome.
    pub fn default_name_exclusions() -> Self {
        let words = [
            // structural
            "FROM", "TO", "SENT", "SENT BY", "SENT TO", "AMOUNT", "FEE",
            "TOTAL", "DATE", "TIME", "REF", "TID", "ATM", "POS", "IBFT",
            // month names and abbreviations
            "JANUARY", "FEBRUARY", "MARCH", "APRIL", "MAY", "JUNE", "JULY",
            "AUGUST", "SEPTEMBER", "OCTOBER", "NOVEMBER", "DECEMBER",
            "JAN", "FEB", "MAR", "APR", "JUN", "JUL", "AUG", "SEP", "OCT",
            "NOV", "DEC",
            // currency
            "PKR", "RS", "RUPEES", "PAK RUPEE",
            // UI chrome
            "SHARE", "SAVE", "DOWNLOAD", "SCREENSHOT", "DONE", "HOME", "OK",
        ];
        let phrases = [
            "ACCOUNT", "BANK", "TRANSFER", "TRANSACTION", "PAYMENT",
            "RECEIPT", "BALANCE", "STATEMENT", "BRANCH", "SUCCESSFUL",
            "JAZZCASH", "EASYPAISA", "NAYAPAY", "SADAPAY", "RAAST",
            "BROUGHT FORWARD",
        ];

        Self {
            words: words.iter().map(|w| w.to_string()).collect(),
            phrases: phrases.iter().map(|p| p.to_string()).collect(),
        }
    }
}
