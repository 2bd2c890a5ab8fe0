//! Single-pass pattern extraction over normalized lines.
//!
//! One `Occurrence` per match, tagged with its kind and source line index.
//! Nothing is discarded for being "too many": the same 11-digit number is
//! emitted both as an account and as a phone, and ambiguity resolution is
//! deferred to the associator and the assemblers.

use chrono::NaiveDate;
use tracing::debug;

use crate::models::config::ExtractionConfig;

use super::patterns::{
    AMOUNT, DATE_DMY_ABBR, DATE_LONG, DATE_SLASH, DIGIT_RUN, IBAN_PK,
    MASKED_ACCOUNT, NAME_LINE, REF_FT, REF_LABELED, TIME_AMPM, TIME_BARE,
};
use super::vocab::{self, BANKS, TXN_TYPES};

/// What a single pattern match means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OccurrenceKind {
    Amount,
    Date,
    Time,
    TxnTypeToken,
    BankToken,
    AccountNumber,
    PhoneNumber,
    Reference,
    NameCandidate,
}

/// Sub-kind of an account-number occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountForm {
    /// IBAN-like token (PK + check digits + bank code + digits).
    Iban,
    /// Asterisk-masked token ending in visible digits.
    Masked,
    /// Bare 11-digit sequence (also a phone candidate).
    Bare11,
    /// Bare long (>= 15 digit) sequence.
    Bare15,
}

/// A single tagged pattern match.
#[derive(Debug, Clone)]
pub struct Occurrence {
    pub kind: OccurrenceKind,
    /// Parsed numeric value for amounts; zero for every other kind.
    pub value: f64,
    /// Sub-kind when `kind` is `AccountNumber`.
    pub account_form: Option<AccountForm>,
    /// The matched text, verbatim.
    pub raw_text: String,
    /// Index of the originating line.
    pub line_index: usize,
}

impl Occurrence {
    fn new(kind: OccurrenceKind, raw_text: &str, line_index: usize) -> Self {
        Self {
            kind,
            value: 0.0,
            account_form: None,
            raw_text: raw_text.to_string(),
            line_index,
        }
    }
}

/// Parse an amount string by stripping thousand separators.
pub fn parse_amount(s: &str) -> Option<f64> {
    let cleaned: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

/// Validate a `DD-Mon-YYYY` token against the calendar.
pub fn parse_ledger_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%d-%b-%Y").ok()
}

/// Run every pattern class over the lines, in one pass.
pub fn scan(lines: &[String], config: &ExtractionConfig) -> Vec<Occurrence> {
    let mut out = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        scan_amounts(line, idx, &mut out);
        scan_dates(line, idx, &mut out);
        scan_times(line, idx, &mut out);
        scan_tokens(line, idx, &mut out);
        scan_accounts(line, idx, config, &mut out);
        scan_references(line, idx, &mut out);
        scan_names(line, idx, config, &mut out);
    }

    debug!(
        "scanned {} lines into {} occurrences",
        lines.len(),
        out.len()
    );
    out
}

fn scan_amounts(line: &str, idx: usize, out: &mut Vec<Occurrence>) {
    for m in AMOUNT.find_iter(line) {
        if let Some(value) = parse_amount(m.as_str()) {
            let mut occ = Occurrence::new(OccurrenceKind::Amount, m.as_str(), idx);
            occ.value = value;
            out.push(occ);
        }
    }
}

fn scan_dates(line: &str, idx: usize, out: &mut Vec<Occurrence>) {
    for m in DATE_DMY_ABBR.find_iter(line) {
        // Calendar-invalid tokens (OCR noise like 45-Abc-2025) are noise,
        // not dates.
        if parse_ledger_date(m.as_str()).is_some() {
            out.push(Occurrence::new(OccurrenceKind::Date, m.as_str(), idx));
        }
    }
    for m in DATE_LONG.find_iter(line) {
        out.push(Occurrence::new(OccurrenceKind::Date, m.as_str(), idx));
    }
    for m in DATE_SLASH.find_iter(line) {
        out.push(Occurrence::new(OccurrenceKind::Date, m.as_str(), idx));
    }
}

fn scan_times(line: &str, idx: usize, out: &mut Vec<Occurrence>) {
    // The bare form is a subset of the AM/PM form; emit from one class only
    // so a single stamp does not show up twice.
    if TIME_AMPM.is_match(line) {
        for m in TIME_AMPM.find_iter(line) {
            out.push(Occurrence::new(OccurrenceKind::Time, m.as_str(), idx));
        }
    } else {
        for m in TIME_BARE.find_iter(line) {
            out.push(Occurrence::new(OccurrenceKind::Time, m.as_str(), idx));
        }
    }
}

fn scan_tokens(line: &str, idx: usize, out: &mut Vec<Occurrence>) {
    for token in vocab::tokens_in_line(line, TXN_TYPES) {
        out.push(Occurrence::new(OccurrenceKind::TxnTypeToken, token, idx));
    }
    for token in vocab::tokens_in_line(line, BANKS) {
        out.push(Occurrence::new(OccurrenceKind::BankToken, token, idx));
    }
}

fn scan_accounts(
    line: &str,
    idx: usize,
    config: &ExtractionConfig,
    out: &mut Vec<Occurrence>,
) {
    for m in IBAN_PK.find_iter(line) {
        let mut occ = Occurrence::new(OccurrenceKind::AccountNumber, m.as_str(), idx);
        occ.account_form = Some(AccountForm::Iban);
        out.push(occ);
    }
    for m in MASKED_ACCOUNT.find_iter(line) {
        let mut occ = Occurrence::new(OccurrenceKind::AccountNumber, m.as_str(), idx);
        occ.account_form = Some(AccountForm::Masked);
        out.push(occ);
    }
    for m in DIGIT_RUN.find_iter(line) {
        let len = m.as_str().len();
        if len == config.phone_digits {
            let mut occ =
                Occurrence::new(OccurrenceKind::AccountNumber, m.as_str(), idx);
            occ.account_form = Some(AccountForm::Bare11);
            out.push(occ);
            out.push(Occurrence::new(OccurrenceKind::PhoneNumber, m.as_str(), idx));
        } else if len >= config.long_account_digits {
            let mut occ =
                Occurrence::new(OccurrenceKind::AccountNumber, m.as_str(), idx);
            occ.account_form = Some(AccountForm::Bare15);
            out.push(occ);
        }
    }
}

fn scan_references(line: &str, idx: usize, out: &mut Vec<Occurrence>) {
    for m in REF_LABELED.find_iter(line) {
        out.push(Occurrence::new(OccurrenceKind::Reference, m.as_str(), idx));
    }
    for m in REF_FT.find_iter(line) {
        out.push(Occurrence::new(OccurrenceKind::Reference, m.as_str(), idx));
    }
}

fn scan_names(line: &str, idx: usize, config: &ExtractionConfig, out: &mut Vec<Occurrence>) {
    if line.len() > 3
        && NAME_LINE.is_match(line)
        && !config.name_exclusions.matches(line)
    {
        out.push(Occurrence::new(OccurrenceKind::NameCandidate, line, idx));
    }
}
