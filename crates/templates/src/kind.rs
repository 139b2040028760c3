use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The fixed set of documents this renderer can produce.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentKind {
    ApprovalProof,
    LoanContract,
    PaymentReceipt,
    LoanPaymentReceipt,
    LoanStatement,
    MemberStatement,
    MembershipAgreement,
    TransferProof,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown document kind: {0}")]
pub struct UnknownKind(pub String);

impl DocumentKind {
    pub const ALL: [DocumentKind; 8] = [
        DocumentKind::ApprovalProof,
        DocumentKind::LoanContract,
        DocumentKind::PaymentReceipt,
        DocumentKind::LoanPaymentReceipt,
        DocumentKind::LoanStatement,
        DocumentKind::MemberStatement,
        DocumentKind::MembershipAgreement,
        DocumentKind::TransferProof,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DocumentKind::ApprovalProof => "approval-proof",
            DocumentKind::LoanContract => "loan-contract",
            DocumentKind::PaymentReceipt => "payment-receipt",
            DocumentKind::LoanPaymentReceipt => "loan-payment-receipt",
            DocumentKind::LoanStatement => "loan-statement",
            DocumentKind::MemberStatement => "member-statement",
            DocumentKind::MembershipAgreement => "membership-agreement",
            DocumentKind::TransferProof => "transfer-proof",
        }
    }

    /// True for the kinds that carry a transaction table and an emission
    /// timestamp in the footer.
    pub fn is_statement(self) -> bool {
        matches!(
            self,
            DocumentKind::LoanStatement | DocumentKind::MemberStatement
        )
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_strings() {
        for kind in DocumentKind::ALL {
            assert_eq!(kind.as_str().parse::<DocumentKind>(), Ok(kind));
        }
    }

    #[test]
    fn unknown_kind_is_an_error() {
        let err = "invoice".parse::<DocumentKind>().unwrap_err();
        assert_eq!(err, UnknownKind("invoice".to_string()));
    }
}
