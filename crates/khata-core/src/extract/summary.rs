//! Statement-level aggregation over assembled transaction records.

use crate::models::record::{Summary, TransactionRecord};

/// Reduce records into totals and a balance bracket.
///
/// Records are not guaranteed chronological, but the running balances
/// bracket the statement period: the minimum non-zero balance approximates
/// the opening balance and the maximum the closing balance.
pub fn summarize(records: &[TransactionRecord]) -> Summary {
    let total_deposits = records.iter().map(|r| r.deposit).sum();
    let total_withdrawals = records.iter().map(|r| r.withdrawal).sum();

    let mut opening_balance = 0.0;
    let mut closing_balance = 0.0;
    for record in records {
        if record.balance <= 0.0 {
            continue;
        }
        if opening_balance == 0.0 || record.balance < opening_balance {
            opening_balance = record.balance;
        }
        if record.balance > closing_balance {
            closing_balance = record.balance;
        }
    }

    Summary {
        transaction_count: records.len(),
        total_deposits,
        total_withdrawals,
        opening_balance,
        closing_balance,
    }
}
