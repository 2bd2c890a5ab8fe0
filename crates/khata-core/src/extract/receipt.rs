//! Receipt-profile assembly: one payment record per document.
//!
//! No anchoring and no windows here. Every field is extracted independently
//! from the whole document through an ordered chain of alternatives, first
//! match wins, so the precedence policy is plain data and each alternative
//! is testable on its own. Dates are the one exception: the *last* match of
//! a class wins, because receipts repeat the date and the footer copy is
//! canonical.

use tracing::debug;

use crate::models::config::ExtractionConfig;
use crate::models::record::PaymentRecord;

use super::classify::{detect_service, detect_status};
use super::lines::normalize_lines;
use super::names;
use super::occurrences::{parse_amount, parse_ledger_date};
use super::patterns::{
    AMOUNT_PKR, AMOUNT_RS, BARE_NUMBER_LINE, DATETIME_COMPOUND, DATE_DMY_ABBR,
    DATE_LONG, DATE_SLASH, DIGIT_RUN, FEE_INLINE, ID_HASH, REF_HASH, TID_LABELED,
    TIME_AMPM, TIME_BARE, TOTAL_INLINE,
};

/// One alternative in a first-match-wins chain.
type Rule<T> = fn(&str, &[String], &ExtractionConfig) -> Option<T>;

const ID_CHAIN: &[Rule<String>] = &[id_tid, id_hash, id_ref_hash, id_bare_number];
const DATE_CHAIN: &[Rule<String>] = &[date_long, date_dmy_abbr, date_slash];
const TIME_CHAIN: &[Rule<String>] = &[time_ampm, time_bare, time_after_date];
const AMOUNT_CHAIN: &[Rule<f64>] = &[amount_pkr, amount_rs, amount_labeled_line];
const FEE_CHAIN: &[Rule<f64>] = &[fee_inline, fee_next_line];
const TOTAL_CHAIN: &[Rule<f64>] = &[total_inline, total_next_line];

fn first_match<T>(
    chain: &[Rule<T>],
    text: &str,
    lines: &[String],
    config: &ExtractionConfig,
) -> Option<T> {
    chain.iter().find_map(|rule| rule(text, lines, config))
}

/// Parse one mobile-payment receipt into a payment record.
pub fn parse_receipt(text: &str, config: &ExtractionConfig) -> PaymentRecord {
    let lines = normalize_lines(text);
    let mut record = PaymentRecord {
        currency: config.default_currency.clone(),
        ..Default::default()
    };

    record.transaction_id =
        first_match(ID_CHAIN, text, &lines, config).unwrap_or_default();
    record.date = first_match(DATE_CHAIN, text, &lines, config).unwrap_or_default();
    record.time = first_match(TIME_CHAIN, text, &lines, config).unwrap_or_default();
    record.amount = first_match(AMOUNT_CHAIN, text, &lines, config).unwrap_or(0.0);
    record.fee = first_match(FEE_CHAIN, text, &lines, config).unwrap_or(0.0);
    record.total_amount = first_match(TOTAL_CHAIN, text, &lines, config)
        .unwrap_or(record.amount + record.fee);

    let sections = names::resolve(&lines, config);
    record.from_name = sections.from_name;
    record.to_name = sections.to_name;
    record.from_phone = sections.from_phone;
    record.to_phone = sections.to_phone;
    record.from_account = sections.from_account;
    record.to_account = sections.to_account;

    record.service = detect_service(text);
    record.status = detect_status(text);

    debug!(
        "receipt id={:?} amount={} total={}",
        record.transaction_id, record.amount, record.total_amount
    );
    record
}

// Transaction id: TID: -> ID# -> Ref# -> any long bare number.

fn id_tid(text: &str, _: &[String], _: &ExtractionConfig) -> Option<String> {
    TID_LABELED.captures(text).map(|c| c[1].to_string())
}

fn id_hash(text: &str, _: &[String], _: &ExtractionConfig) -> Option<String> {
    ID_HASH.captures(text).map(|c| c[1].to_string())
}

fn id_ref_hash(text: &str, _: &[String], _: &ExtractionConfig) -> Option<String> {
    REF_HASH.captures(text).map(|c| c[1].to_string())
}

fn id_bare_number(text: &str, _: &[String], config: &ExtractionConfig) -> Option<String> {
    DIGIT_RUN
        .find_iter(text)
        .find(|m| m.as_str().len() >= config.min_id_digits)
        .map(|m| m.as_str().to_string())
}

// Dates: last match of a class wins; classes in specificity order.

fn date_long(text: &str, _: &[String], _: &ExtractionConfig) -> Option<String> {
    DATE_LONG
        .find_iter(text)
        .last()
        .map(|m| m.as_str().to_string())
}

fn date_dmy_abbr(text: &str, _: &[String], _: &ExtractionConfig) -> Option<String> {
    DATE_DMY_ABBR
        .find_iter(text)
        .filter(|m| parse_ledger_date(m.as_str()).is_some())
        .last()
        .map(|m| m.as_str().to_string())
}

fn date_slash(text: &str, _: &[String], _: &ExtractionConfig) -> Option<String> {
    DATE_SLASH
        .find_iter(text)
        .last()
        .map(|m| m.as_str().to_string())
}

// Times: 12-hour form preferred, then bare, then the tail of a compound
// date-time stamp.

fn time_ampm(text: &str, _: &[String], _: &ExtractionConfig) -> Option<String> {
    TIME_AMPM.find(text).map(|m| m.as_str().to_string())
}

fn time_bare(text: &str, _: &[String], _: &ExtractionConfig) -> Option<String> {
    TIME_BARE.find(text).map(|m| m.as_str().to_string())
}

fn time_after_date(text: &str, _: &[String], _: &ExtractionConfig) -> Option<String> {
    DATETIME_COMPOUND.captures(text).map(|c| c[1].to_string())
}

// Amounts: currency-labeled forms, then the bare label-on-previous-line form.

fn amount_pkr(text: &str, _: &[String], _: &ExtractionConfig) -> Option<f64> {
    AMOUNT_PKR.captures(text).and_then(|c| parse_amount(&c[1]))
}

fn amount_rs(text: &str, _: &[String], _: &ExtractionConfig) -> Option<f64> {
    AMOUNT_RS.captures(text).and_then(|c| parse_amount(&c[1]))
}

fn amount_labeled_line(_: &str, lines: &[String], _: &ExtractionConfig) -> Option<f64> {
    let idx = lines.iter().position(|l| l.eq_ignore_ascii_case("amount"))?;
    let caps = BARE_NUMBER_LINE.captures(lines.get(idx + 1)?)?;
    parse_amount(&caps[1])
}

fn fee_inline(text: &str, _: &[String], _: &ExtractionConfig) -> Option<f64> {
    FEE_INLINE.captures(text).and_then(|c| parse_amount(&c[1]))
}

fn fee_next_line(_: &str, lines: &[String], _: &ExtractionConfig) -> Option<f64> {
    number_after_label(lines, "FEE")
}

fn total_inline(text: &str, _: &[String], _: &ExtractionConfig) -> Option<f64> {
    TOTAL_INLINE.captures(text).and_then(|c| parse_amount(&c[1]))
}

fn total_next_line(_: &str, lines: &[String], _: &ExtractionConfig) -> Option<f64> {
    number_after_label(lines, "TOTAL AMOUNT")
}

/// The bare number on the line immediately after the first line containing
/// `label`.
fn number_after_label(lines: &[String], label: &str) -> Option<f64> {
    let idx = lines
        .iter()
        .position(|l| l.to_uppercase().contains(label))?;
    let caps = BARE_NUMBER_LINE.captures(lines.get(idx + 1)?)?;
    parse_amount(&caps[1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const RECEIPT: &str = "\
Transaction successful
Ref#530026036841
30-Sep-2025 11:58:42 PM
PKR 1
From\tMUHAMMAD HARIS HASSAN
**********6197
To\tZAINAB HASSAN
*******2344
";

    #[test]
    fn test_reference_receipt() {
        let record = parse_receipt(RECEIPT, &ExtractionConfig::default());
        assert_eq!(record.transaction_id, "530026036841");
        assert_eq!(record.date, "30-Sep-2025");
        assert_eq!(record.time, "11:58:42 PM");
        assert_eq!(record.from_name, "MUHAMMAD HARIS HASSAN");
        assert_eq!(record.to_name, "ZAINAB HASSAN");
        assert_eq!(record.amount, 1.0);
        assert_eq!(record.total_amount, 1.0);
        assert_eq!(record.status, "Successful");
        assert_eq!(record.currency, "PKR");
    }

    #[test]
    fn test_id_chain_precedence() {
        let config = ExtractionConfig::default();
        let record = parse_receipt("TID:111222333444\nRef#555666777888", &config);
        assert_eq!(record.transaction_id, "111222333444");

        let record = parse_receipt("ID# 999888777666", &config);
        assert_eq!(record.transaction_id, "999888777666");

        let record = parse_receipt("confirmation 12345678901 done", &config);
        assert_eq!(record.transaction_id, "12345678901");
    }

    #[test]
    fn test_last_date_wins() {
        let record = parse_receipt(
            "01-Jan-2025 header\nbody\nfooter 05-Feb-2025",
            &ExtractionConfig::default(),
        );
        assert_eq!(record.date, "05-Feb-2025");
    }

    #[test]
    fn test_long_date_beats_abbreviated() {
        let record = parse_receipt(
            "30 September 2025\nalso shown as 30-Sep-2025",
            &ExtractionConfig::default(),
        );
        assert_eq!(record.date, "30 September 2025");
    }

    #[test]
    fn test_amount_label_on_previous_line() {
        let record = parse_receipt("Amount\n250.00", &ExtractionConfig::default());
        assert_eq!(record.amount, 250.0);
    }

    #[test]
    fn test_rs_amount() {
        let record = parse_receipt("Rs. 500 sent", &ExtractionConfig::default());
        assert_eq!(record.amount, 500.0);
    }

    #[test]
    fn test_fee_next_line_and_total_fallback() {
        let record = parse_receipt(
            "PKR 250.00\nFee\n10.00",
            &ExtractionConfig::default(),
        );
        assert_eq!(record.amount, 250.0);
        assert_eq!(record.fee, 10.0);
        assert_eq!(record.total_amount, 260.0);
    }

    #[test]
    fn test_explicit_total_wins_over_sum() {
        let record = parse_receipt(
            "PKR 250.00\nFee: 10.00\nTotal Amount 275.00",
            &ExtractionConfig::default(),
        );
        assert_eq!(record.fee, 10.0);
        assert_eq!(record.total_amount, 275.0);
    }

    #[test]
    fn test_service_detection() {
        let record = parse_receipt(
            "JazzCash\nTransaction successful\nPKR 100.00",
            &ExtractionConfig::default(),
        );
        assert_eq!(record.service, "JazzCash");
        assert_eq!(record.status, "Successful");
    }

    #[test]
    fn test_bare_time_fallback() {
        let record =
            parse_receipt("paid at 14:05 today", &ExtractionConfig::default());
        assert_eq!(record.time, "14:05");
    }

    #[test]
    fn test_missing_fields_stay_default() {
        let record = parse_receipt("nothing useful here", &ExtractionConfig::default());
        assert_eq!(record.transaction_id, "");
        assert_eq!(record.date, "");
        assert_eq!(record.amount, 0.0);
        assert_eq!(record.total_amount, 0.0);
        assert_eq!(record.currency, "PKR");
    }

    #[test]
    fn test_parse_is_deterministic() {
        let config = ExtractionConfig::default();
        assert_eq!(parse_receipt(RECEIPT, &config), parse_receipt(RECEIPT, &config));
    }
}
