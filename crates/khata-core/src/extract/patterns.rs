//! Compiled-once regex patterns for the extraction pipeline.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Date patterns
    pub static ref DATE_DMY_ABBR: Regex = Regex::new(
        r"\b(\d{1,2})-([A-Za-z]{3})-(\d{4})\b"
    ).unwrap();

    pub static ref DATE_LONG: Regex = Regex::new(
        r"(?i)\b(\d{1,2})\s+(January|February|March|April|May|June|July|August|September|October|November|December),?\s+(\d{4})\b"
    ).unwrap();

    pub static ref DATE_SLASH: Regex = Regex::new(
        r"\b(\d{1,2})/(\d{1,2})/(\d{4})\b"
    ).unwrap();

    // Time patterns
    pub static ref TIME_AMPM: Regex = Regex::new(
        r"\b(\d{1,2}):(\d{2})(?::(\d{2}))?\s*([AaPp][Mm])\b"
    ).unwrap();

    pub static ref TIME_BARE: Regex = Regex::new(
        r"\b(\d{1,2}):(\d{2})(?::(\d{2}))?\b"
    ).unwrap();

    /// Time trailing a date, for receipts that print a compound stamp.
    pub static ref DATETIME_COMPOUND: Regex = Regex::new(
        r"\b\d{1,2}[-/][A-Za-z0-9]{2,9}[-/]\d{4}\s+(\d{1,2}:\d{2}(?::\d{2})?)"
    ).unwrap();

    // Amount patterns: digit groups with optional thousand separators and
    // exactly two decimals
    pub static ref AMOUNT: Regex = Regex::new(
        r"\b(\d{1,3}(?:,\d{3})+|\d+)\.(\d{2})\b"
    ).unwrap();

    // Currency-labeled amounts on receipts may lack decimals entirely
    pub static ref AMOUNT_PKR: Regex = Regex::new(
        r"(?i)\bPKR\s*(\d[\d,]*(?:\.\d{1,2})?)"
    ).unwrap();

    pub static ref AMOUNT_RS: Regex = Regex::new(
        r"(?i)\bRs\.?\s*(\d[\d,]*(?:\.\d{1,2})?)"
    ).unwrap();

    pub static ref FEE_INLINE: Regex = Regex::new(
        r"(?i)\bfee\b[^\d\n]*(\d[\d,]*(?:\.\d{1,2})?)"
    ).unwrap();

    pub static ref TOTAL_INLINE: Regex = Regex::new(
        r"(?i)\btotal\s+amount\b[^\d\n]*(\d[\d,]*(?:\.\d{1,2})?)"
    ).unwrap();

    /// A bare number standing alone on a line (label-on-previous-line form).
    pub static ref BARE_NUMBER_LINE: Regex = Regex::new(
        r"^\s*(\d[\d,]*(?:\.\d{1,2})?)\s*$"
    ).unwrap();

    // Account numbers
    pub static ref IBAN_PK: Regex = Regex::new(
        r"\bPK\d{2}[A-Z]{4}\d{4,}\b"
    ).unwrap();

    /// Masked account: an asterisk run ending in the 4 visible digits,
    /// optionally PK-prefixed.
    pub static ref MASKED_ACCOUNT: Regex = Regex::new(
        r"(?:PK)?\*{3,}\d{4}\b"
    ).unwrap();

    /// Any bare digit run; length decides phone / account / id downstream.
    pub static ref DIGIT_RUN: Regex = Regex::new(
        r"\b\d+\b"
    ).unwrap();

    // Reference tokens
    pub static ref REF_LABELED: Regex = Regex::new(
        r"(?i)\bRef[:#]\s*(\d+)"
    ).unwrap();

    pub static ref REF_FT: Regex = Regex::new(
        r"\bFT\d+[A-Za-z0-9]*\b"
    ).unwrap();

    pub static ref TID_LABELED: Regex = Regex::new(
        r"(?i)\bTID[:#]?\s*(\d+)"
    ).unwrap();

    pub static ref ID_HASH: Regex = Regex::new(
        r"(?i)\bID\s*#\s*(\d+)"
    ).unwrap();

    pub static ref REF_HASH: Regex = Regex::new(
        r"(?i)\bRef\s*#\s*(\d+)"
    ).unwrap();

    // Name-section markers
    pub static ref MARKER_FROM: Regex = Regex::new(
        r"(?i)\b(?:sent\s+by|from)\b"
    ).unwrap();

    pub static ref MARKER_TO: Regex = Regex::new(
        r"(?i)\b(?:sent\s+to|to)\b"
    ).unwrap();

    /// A line consisting entirely of upper-case letters and spaces.
    pub static ref NAME_LINE: Regex = Regex::new(
        r"^[A-Z][A-Z ]+$"
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_pattern_with_separators() {
        let m = AMOUNT.find("balance 1,234,567.89 end").unwrap();
        assert_eq!(m.as_str(), "1,234,567.89");
    }

    #[test]
    fn test_amount_pattern_requires_two_decimals() {
        assert!(AMOUNT.find("rate 1.2345").is_none());
        assert!(AMOUNT.find("qty 17").is_none());
        assert!(AMOUNT.is_match("17.50"));
    }

    #[test]
    fn test_masked_account() {
        assert!(MASKED_ACCOUNT.is_match("**********6197"));
        assert!(MASKED_ACCOUNT.is_match("PK*****2344"));
        assert!(!MASKED_ACCOUNT.is_match("**97"));
    }

    #[test]
    fn test_iban_pattern() {
        assert!(IBAN_PK.is_match("PK36SCBL0000001123456702"));
        assert!(!IBAN_PK.is_match("GB29NWBK60161331926819"));
    }

    #[test]
    fn test_marker_to_does_not_match_total() {
        assert!(!MARKER_TO.is_match("Total Amount"));
        assert!(MARKER_TO.is_match("Sent to"));
        assert!(MARKER_TO.is_match("To\tZAINAB HASSAN"));
    }

    #[test]
    fn test_compound_datetime_time() {
        let caps = DATETIME_COMPOUND.captures("30-Sep-2025 11:58:42").unwrap();
        assert_eq!(&caps[1], "11:58:42");
    }
}
