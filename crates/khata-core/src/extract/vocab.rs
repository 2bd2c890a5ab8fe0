//! Fixed token vocabularies: transaction rails, banks, payment services.
//!
//! Matching is case-insensitive substring containment. Multi-word entries
//! and more specific entries come first so they win over their fragments.

/// Transaction type tokens.
pub const TXN_TYPES: &[&str] = &[
    "BROUGHT FORWARD",
    "WITHDRAWAL",
    "CLEARING",
    "REVERSAL",
    "CHARGES",
    "CHEQUE",
    "ONLINE",
    "DEPOSIT",
    "CREDIT",
    "DEBIT",
    "RAAST",
    "IBFT",
    "BILL",
    "ATM",
    "POS",
    "FEE",
    "BALANCE",
];

/// The specific rails preferred by the associator over bookkeeping words
/// like BALANCE or BROUGHT FORWARD.
pub const TXN_TYPES_PREFERRED: &[&str] = &[
    "WITHDRAWAL", "CLEARING", "REVERSAL", "CHEQUE", "ONLINE", "RAAST",
    "IBFT", "BILL", "ATM", "POS",
];

/// Type tokens that mark the anchor amount as a withdrawal.
pub const TXN_TYPES_DEBIT: &[&str] = &[
    "WITHDRAWAL", "CHARGES", "CHEQUE", "DEBIT", "BILL", "ATM", "POS", "FEE",
];

/// Bank-name fragments. The bare word BANK stays last: it is in-vocabulary
/// but never preferred.
pub const BANKS: &[&str] = &[
    "BANK ISLAMI",
    "JS BANK",
    "ALFALAH",
    "MEEZAN",
    "ASKARI",
    "FAYSAL",
    "ALLIED",
    "SONERI",
    "HABIB",
    "SAMBA",
    "HBL",
    "UBL",
    "MCB",
    "NBP",
    "BANK",
];

/// Mobile payment services, paired with their display form.
pub const SERVICES: &[(&str, &str)] = &[
    ("JAZZCASH", "JazzCash"),
    ("EASYPAISA", "Easypaisa"),
    ("NAYAPAY", "NayaPay"),
    ("SADAPAY", "SadaPay"),
    ("UPAISA", "UPaisa"),
    ("RAAST", "Raast"),
];

/// Phrases that signal a successful payment.
pub const SUCCESS_PHRASES: &[&str] = &[
    "TRANSACTION SUCCESSFUL",
    "PAYMENT SUCCESSFUL",
    "TRANSFERRED SUCCESSFULLY",
    "SUCCESSFUL",
    "SUCCESS",
    "COMPLETED",
];

/// All vocabulary tokens contained in `line`, in vocabulary order.
pub fn tokens_in_line<'a>(line: &str, vocab: &[&'a str]) -> Vec<&'a str> {
    let upper = line.to_uppercase();
    vocab.iter().copied().filter(|t| upper.contains(t)).collect()
}

/// Whether a type token belongs to the preferred (specific-rail) subset.
pub fn is_preferred_txn_type(token: &str) -> bool {
    TXN_TYPES_PREFERRED.contains(&token)
}

/// Whether a type token marks a withdrawal.
pub fn is_debit_txn_type(token: &str) -> bool {
    TXN_TYPES_DEBIT.contains(&token)
}

/// Whether a bank token names a specific bank rather than the generic word.
pub fn is_preferred_bank(token: &str) -> bool {
    token != "BANK" && BANKS.contains(&token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_in_line() {
        let tokens = tokens_in_line("IBFT transfer via hbl", TXN_TYPES);
        assert_eq!(tokens, vec!["IBFT"]);

        let banks = tokens_in_line("HBL to Meezan Bank", BANKS);
        assert_eq!(banks, vec!["MEEZAN", "HBL", "BANK"]);
    }

    #[test]
    fn test_preferred_subsets() {
        assert!(is_preferred_txn_type("IBFT"));
        assert!(!is_preferred_txn_type("BALANCE"));
        assert!(is_preferred_bank("MEEZAN"));
        assert!(!is_preferred_bank("BANK"));
    }

    #[test]
    fn test_debit_subset() {
        assert!(is_debit_txn_type("ATM"));
        assert!(is_debit_txn_type("CHEQUE"));
        assert!(!is_debit_txn_type("IBFT"));
        assert!(!is_debit_txn_type("CREDIT"));
    }
}
