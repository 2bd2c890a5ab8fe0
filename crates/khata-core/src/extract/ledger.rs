//! Ledger-profile assembly: one transaction record per plausible amount.
//!
//! Every amount inside the configured transaction band anchors a record of
//! its own; the proximity associator then pulls the surrounding fields into
//! it. Amounts at or above the band are running balances, amounts below it
//! are non-transactional noise (fees printed in summaries, serial numbers
//! with decimals, and so on).

use tracing::{debug, info};

use crate::models::config::ExtractionConfig;
use crate::models::record::{AccountInfo, StatementReport, TransactionRecord};

use super::lines::normalize_lines;
use super::occurrences::{
    parse_ledger_date, scan, AccountForm, Occurrence, OccurrenceKind,
};
use super::{proximity, summary, vocab};

/// Parse one bank-statement document into a full report.
pub fn parse_statement(text: &str, config: &ExtractionConfig) -> StatementReport {
    let lines = normalize_lines(text);
    let occurrences = scan(&lines, config);

    let amounts: Vec<Occurrence> = filter_kind(&occurrences, OccurrenceKind::Amount);
    let dates: Vec<Occurrence> = filter_kind(&occurrences, OccurrenceKind::Date);
    let types: Vec<Occurrence> = filter_kind(&occurrences, OccurrenceKind::TxnTypeToken);
    let banks: Vec<Occurrence> = filter_kind(&occurrences, OccurrenceKind::BankToken);
    let accounts: Vec<Occurrence> =
        filter_kind(&occurrences, OccurrenceKind::AccountNumber);
    let references: Vec<Occurrence> =
        filter_kind(&occurrences, OccurrenceKind::Reference);

    let mut transactions = Vec::new();
    for anchor in &amounts {
        if anchor.value < config.txn_amount_min || anchor.value >= config.txn_amount_max
        {
            continue;
        }
        transactions.push(assemble_record(
            anchor,
            &lines,
            &dates,
            &types,
            &banks,
            &accounts,
            &references,
            &amounts,
            config,
        ));
    }

    let account = account_info(&dates, &banks, &accounts);
    let summary = summary::summarize(&transactions);

    info!(
        "assembled {} transactions from {} lines",
        transactions.len(),
        lines.len()
    );

    StatementReport {
        account,
        transactions,
        summary,
        raw_text: text.to_string(),
    }
}

fn filter_kind(occurrences: &[Occurrence], kind: OccurrenceKind) -> Vec<Occurrence> {
    occurrences
        .iter()
        .filter(|o| o.kind == kind)
        .cloned()
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn assemble_record(
    anchor: &Occurrence,
    lines: &[String],
    dates: &[Occurrence],
    types: &[Occurrence],
    banks: &[Occurrence],
    accounts: &[Occurrence],
    references: &[Occurrence],
    amounts: &[Occurrence],
    config: &ExtractionConfig,
) -> TransactionRecord {
    let radius = config.window_radius;
    let mut record = TransactionRecord::default();

    if let Some(date) = proximity::within_window(anchor, dates, radius).first() {
        record.date = date.raw_text.clone();
        record.value_date = date.raw_text.clone();
    }

    if let Some(token) = proximity::nearest_preferred(anchor, types, radius, |o| {
        vocab::is_preferred_txn_type(&o.raw_text)
    }) {
        record.txn_type = token.raw_text.clone();
    }

    if let Some(bank) = proximity::nearest_preferred(anchor, banks, radius, |o| {
        vocab::is_preferred_bank(&o.raw_text)
    }) {
        record.counterparty_bank = bank.raw_text.clone();
    }

    let in_window_accounts = proximity::within_window(anchor, accounts, radius);
    if let Some(account) = in_window_accounts.first() {
        record.source_account = account.raw_text.clone();
    }
    if let Some(account) = in_window_accounts.get(1) {
        record.destination_account = account.raw_text.clone();
    }

    if let Some(reference) = proximity::within_window(anchor, references, radius).first()
    {
        record.reference = reference.raw_text.clone();
        record.narration = reference.raw_text.clone();
    }

    if let Some(balance) =
        proximity::closest_by_value(anchor, amounts, radius, config.txn_amount_max)
    {
        record.balance = balance.value;
    }

    if vocab::is_debit_txn_type(&record.txn_type) {
        record.withdrawal = anchor.value;
    } else {
        record.deposit = anchor.value;
    }

    let lo = anchor.line_index.saturating_sub(radius);
    let hi = (anchor.line_index + radius).min(lines.len().saturating_sub(1));
    record.window_text = lines[lo..=hi].join("\n");

    debug!(
        "anchor {} at line {} -> type {:?} balance {}",
        anchor.raw_text, anchor.line_index, record.txn_type, record.balance
    );
    record
}

/// Account details, populated from whichever occurrences exist.
fn account_info(
    dates: &[Occurrence],
    banks: &[Occurrence],
    accounts: &[Occurrence],
) -> AccountInfo {
    let mut info = AccountInfo::default();

    // An IBAN or a long bare number identifies the statement's own account;
    // 11-digit runs are too ambiguous with phone numbers to use here.
    if let Some(account) = accounts.iter().find(|o| {
        matches!(
            o.account_form,
            Some(AccountForm::Iban) | Some(AccountForm::Bare15)
        )
    }) {
        info.account_number = account.raw_text.clone();
    }

    if let Some(bank) = banks
        .iter()
        .find(|o| vocab::is_preferred_bank(&o.raw_text))
    {
        info.bank_name = bank.raw_text.clone();
    }

    // Statement period: the earliest and latest calendar dates seen.
    let mut start: Option<(chrono::NaiveDate, &str)> = None;
    let mut end: Option<(chrono::NaiveDate, &str)> = None;
    for occurrence in dates {
        let Some(parsed) = parse_ledger_date(&occurrence.raw_text) else {
            continue;
        };
        if start.is_none_or(|(d, _)| parsed < d) {
            start = Some((parsed, occurrence.raw_text.as_str()));
        }
        if end.is_none_or(|(d, _)| parsed > d) {
            end = Some((parsed, occurrence.raw_text.as_str()));
        }
    }
    if let Some((_, raw)) = start {
        info.period_start = raw.to_string();
    }
    if let Some((_, raw)) = end {
        info.period_end = raw.to_string();
    }

    info
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const STATEMENT: &str = "\
HBL Account Statement
PK36SCBL0000001123456702
01-Jan-2025
IBFT Transfer
Ref:776655
5,000.00
1,205,000.00
ATM Withdrawal
02-Jan-2025
2,500.00
1,202,500.00
Brought Forward
";

    #[test]
    fn test_record_per_band_amount() {
        let report = parse_statement(STATEMENT, &ExtractionConfig::default());
        // 5,000.00 and 2,500.00 are in band; the two balances are not.
        assert_eq!(report.transactions.len(), 2);
        assert_eq!(report.summary.transaction_count, 2);
    }

    #[test]
    fn test_fields_pulled_from_window() {
        let report = parse_statement(STATEMENT, &ExtractionConfig::default());
        let first = &report.transactions[0];
        assert_eq!(first.date, "01-Jan-2025");
        assert_eq!(first.value_date, "01-Jan-2025");
        assert_eq!(first.txn_type, "IBFT");
        assert_eq!(first.reference, "Ref:776655");
        assert_eq!(first.source_account, "PK36SCBL0000001123456702");
        assert_eq!(first.deposit, 5_000.0);
        assert_eq!(first.withdrawal, 0.0);
    }

    #[test]
    fn test_balance_is_closest_by_value() {
        // Both entries fit in one window, so the smaller balance is
        // numerically closer to either in-band anchor and wins for both.
        let report = parse_statement(STATEMENT, &ExtractionConfig::default());
        assert_eq!(report.transactions[0].balance, 1_202_500.0);
        assert_eq!(report.transactions[1].balance, 1_202_500.0);
    }

    #[test]
    fn test_balance_resolution_respects_window() {
        let mut text = String::from("01-Jan-2025\n5,000.00\n1,205,000.00\n");
        for _ in 0..31 {
            text.push_str("narrative filler line\n");
        }
        text.push_str("02-Jan-2025\n2,500.00\n1,202,500.00\n");

        let report = parse_statement(&text, &ExtractionConfig::default());
        assert_eq!(report.transactions.len(), 2);
        assert_eq!(report.transactions[0].balance, 1_205_000.0);
        assert_eq!(report.transactions[1].balance, 1_202_500.0);
    }

    #[test]
    fn test_debit_direction_from_type_token() {
        let report = parse_statement(STATEMENT, &ExtractionConfig::default());
        let second = &report.transactions[1];
        assert_eq!(second.txn_type, "WITHDRAWAL");
        assert_eq!(second.withdrawal, 2_500.0);
        assert_eq!(second.deposit, 0.0);
    }

    #[test]
    fn test_account_info() {
        let report = parse_statement(STATEMENT, &ExtractionConfig::default());
        assert_eq!(report.account.account_number, "PK36SCBL0000001123456702");
        assert_eq!(report.account.bank_name, "HBL");
        assert_eq!(report.account.period_start, "01-Jan-2025");
        assert_eq!(report.account.period_end, "02-Jan-2025");
    }

    #[test]
    fn test_summary_totals() {
        let report = parse_statement(STATEMENT, &ExtractionConfig::default());
        assert_eq!(report.summary.total_deposits, 5_000.0);
        assert_eq!(report.summary.total_withdrawals, 2_500.0);
    }

    #[test]
    fn test_summary_balance_bracket() {
        let mut text = String::from("01-Jan-2025\nIBFT\n5,000.00\n1,205,000.00\n");
        for _ in 0..31 {
            text.push_str("narrative filler line\n");
        }
        text.push_str("02-Jan-2025\nATM\n2,500.00\n1,202,500.00\n");

        let report = parse_statement(&text, &ExtractionConfig::default());
        assert_eq!(report.summary.opening_balance, 1_202_500.0);
        assert_eq!(report.summary.closing_balance, 1_205_000.0);
    }

    #[test]
    fn test_duplicate_amounts_yield_two_records() {
        let text = "01-Jan-2025\n5,000.00\n5,000.00";
        let report = parse_statement(text, &ExtractionConfig::default());
        assert_eq!(report.transactions.len(), 2);
    }

    #[test]
    fn test_numeric_fields_finite_and_non_negative() {
        let report = parse_statement(STATEMENT, &ExtractionConfig::default());
        for record in &report.transactions {
            for v in [
                record.withdrawal,
                record.deposit,
                record.balance,
            ] {
                assert!(v.is_finite());
                assert!(v >= 0.0);
            }
        }
    }

    #[test]
    fn test_parse_is_deterministic() {
        let config = ExtractionConfig::default();
        let first = parse_statement(STATEMENT, &config);
        let second = parse_statement(STATEMENT, &config);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_input() {
        let report = parse_statement("", &ExtractionConfig::default());
        assert!(report.transactions.is_empty());
        assert_eq!(report.account, AccountInfo::default());
    }

    #[test]
    fn test_window_text_provenance() {
        let report = parse_statement(STATEMENT, &ExtractionConfig::default());
        assert!(report.transactions[0].window_text.contains("IBFT Transfer"));
        assert!(report.transactions[0].window_text.contains("5,000.00"));
    }
}
