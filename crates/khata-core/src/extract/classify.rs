//! Coarse document classification from token evidence.

use serde::{Deserialize, Serialize};

use super::vocab::{BANKS, SERVICES, SUCCESS_PHRASES};

/// Coarse document-family label. Callers use it to pick which assembler
/// profile to run; the routing itself lives outside this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Bank statement or bank transfer advice.
    BankTransfer,
    /// Mobile-payment receipt (wallet apps).
    MobilePayment,
    /// Anything else.
    Other,
}

/// Classify a document by ordered keyword checks. Payment-service tokens
/// win over bank tokens: wallet receipts often name the partner bank too.
pub fn classify(text: &str) -> DocumentKind {
    let upper = text.to_uppercase();

    if SERVICES.iter().any(|(token, _)| upper.contains(token)) {
        return DocumentKind::MobilePayment;
    }
    if upper.contains("STATEMENT")
        || BANKS.iter().any(|token| upper.contains(token))
    {
        return DocumentKind::BankTransfer;
    }
    DocumentKind::Other
}

/// The display name of the first payment service or bank the text mentions.
pub fn detect_service(text: &str) -> String {
    let upper = text.to_uppercase();

    for (token, display) in SERVICES {
        if upper.contains(token) {
            return (*display).to_string();
        }
    }
    for token in BANKS {
        if *token != "BANK" && upper.contains(token) {
            return (*token).to_string();
        }
    }
    String::new()
}

/// Status label from known success phrases. An unmatched status defaults to
/// success; failed or reversed receipts are rarely shared for capture, so
/// the default is usually right but remains a known precision loss.
pub fn detect_status(text: &str) -> String {
    let upper = text.to_uppercase();

    for phrase in SUCCESS_PHRASES {
        if upper.contains(phrase) {
            return "Successful".to_string();
        }
    }
    "Successful".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_mobile_payment() {
        assert_eq!(
            classify("JazzCash Transaction successful Ref#12345"),
            DocumentKind::MobilePayment
        );
    }

    #[test]
    fn test_classify_bank_statement() {
        assert_eq!(
            classify("HBL Account Statement 01-Jan-2025 to 31-Jan-2025"),
            DocumentKind::BankTransfer
        );
    }

    #[test]
    fn test_classify_service_wins_over_bank() {
        assert_eq!(
            classify("Easypaisa transfer to HBL account"),
            DocumentKind::MobilePayment
        );
    }

    #[test]
    fn test_classify_other() {
        assert_eq!(classify("grocery list: eggs, milk"), DocumentKind::Other);
    }

    #[test]
    fn test_detect_service() {
        assert_eq!(detect_service("sent via easypaisa"), "Easypaisa");
        assert_eq!(detect_service("Meezan transfer"), "MEEZAN");
        assert_eq!(detect_service("no service here"), "");
    }

    #[test]
    fn test_detect_status_defaults_to_success() {
        assert_eq!(detect_status("Transaction successful"), "Successful");
        assert_eq!(detect_status("gibberish"), "Successful");
    }
}
