//! Output data models for the extraction engine.
//!
//! Numeric fields default to zero and textual fields to the empty string.
//! A pattern that never matched leaves the default in place, so downstream
//! consumers stay total functions and never see a null.

use serde::{Deserialize, Serialize};

/// A single ledger transaction, assembled around one anchor amount.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Transaction date as it appeared in the document.
    pub date: String,

    /// Value date (same as `date` unless the document distinguishes them).
    pub value_date: String,

    /// Transaction type label (IBFT, ATM, POS, ...).
    pub txn_type: String,

    /// Reference token (`Ref:...` / `FT...`).
    pub reference: String,

    /// Branch name or code.
    pub branch: String,

    /// Narration line.
    pub narration: String,

    /// Withdrawal amount; zero when the movement is a deposit.
    pub withdrawal: f64,

    /// Deposit amount; zero when the movement is a withdrawal.
    pub deposit: f64,

    /// Running balance associated with the movement.
    pub balance: f64,

    /// Counterparty bank, when one was named near the movement.
    pub counterparty_bank: String,

    /// Source account number.
    pub source_account: String,

    /// Destination account number.
    pub destination_account: String,

    /// The source lines of the anchor window, joined. Provenance only.
    pub window_text: String,
}

impl TransactionRecord {
    /// The movement amount regardless of direction.
    pub fn amount(&self) -> f64 {
        if self.withdrawal > 0.0 {
            self.withdrawal
        } else {
            self.deposit
        }
    }
}

/// A single mobile-payment receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    /// Transaction identifier (TID / ID# / Ref# / bare number).
    pub transaction_id: String,

    /// Date in the surface form the receipt used.
    pub date: String,

    /// Time in the surface form the receipt used.
    pub time: String,

    /// Payment amount.
    pub amount: f64,

    /// Service fee.
    pub fee: f64,

    /// Total charged; defaults to `amount + fee` when the receipt shows no
    /// explicit total.
    pub total_amount: f64,

    /// Sender name.
    pub from_name: String,

    /// Receiver name.
    pub to_name: String,

    /// Sender phone number.
    pub from_phone: String,

    /// Receiver phone number.
    pub to_phone: String,

    /// Sender account (masked or full).
    pub from_account: String,

    /// Receiver account (masked or full).
    pub to_account: String,

    /// Payment service or bank label.
    pub service: String,

    /// Transaction status label.
    pub status: String,

    /// Currency code (default: PKR).
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "PKR".to_string()
}

impl Default for PaymentRecord {
    fn default() -> Self {
        Self {
            transaction_id: String::new(),
            date: String::new(),
            time: String::new(),
            amount: 0.0,
            fee: 0.0,
            total_amount: 0.0,
            from_name: String::new(),
            to_name: String::new(),
            from_phone: String::new(),
            to_phone: String::new(),
            from_account: String::new(),
            to_account: String::new(),
            service: String::new(),
            status: String::new(),
            currency: default_currency(),
        }
    }
}

/// Account-level details of a statement, populated opportunistically from
/// whichever occurrences exist.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountInfo {
    /// Account number (IBAN or long bare number).
    pub account_number: String,

    /// Issuing bank name.
    pub bank_name: String,

    /// Earliest date seen on the statement.
    pub period_start: String,

    /// Latest date seen on the statement.
    pub period_end: String,
}

/// Aggregate view over the transactions of one statement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of assembled transaction records.
    pub transaction_count: usize,

    /// Sum of all deposit amounts.
    pub total_deposits: f64,

    /// Sum of all withdrawal amounts.
    pub total_withdrawals: f64,

    /// Minimum non-zero running balance observed.
    pub opening_balance: f64,

    /// Maximum non-zero running balance observed.
    pub closing_balance: f64,
}

/// Complete output of the ledger profile for one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatementReport {
    /// Account-level details.
    pub account: AccountInfo,

    /// One record per anchor amount, in document order.
    pub transactions: Vec<TransactionRecord>,

    /// Totals and balance bracket.
    pub summary: Summary,

    /// The input text, verbatim.
    pub raw_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_record_defaults() {
        let record = PaymentRecord::default();
        assert_eq!(record.currency, "PKR");
        assert_eq!(record.amount, 0.0);
        assert_eq!(record.transaction_id, "");
    }

    #[test]
    fn test_transaction_record_amount() {
        let mut record = TransactionRecord::default();
        assert_eq!(record.amount(), 0.0);

        record.deposit = 5000.0;
        assert_eq!(record.amount(), 5000.0);

        record.deposit = 0.0;
        record.withdrawal = 1200.0;
        assert_eq!(record.amount(), 1200.0);
    }

    #[test]
    fn test_report_serializes() {
        let report = StatementReport::default();
        let json = serde_json::to_string(&report).unwrap();
        let back: StatementReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
