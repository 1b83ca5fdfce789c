// ============================================================================
// Contract Error Taxonomy
// ============================================================================
//
// Every operation on the mocknet returns errors as values, never panics.
// The numeric codes are part of the external contract surface and must
// stay stable: existing callers match on them bit-exact.
//
//   100  Unauthorized        caller not in the authorized-party set
//   101  NotFound            referenced entity id/stage absent
//   102  InsufficientFunds   ledger underflow guard
//   103  IncorrectSolution   hash/value mismatch (generic validation code)
//   104  InvalidPhase        operation outside its lifecycle window
//   105  Closed              terminal state reached (hunt ended, market
//                            resolved) - permanent for that entity
//
// ============================================================================

use serde::{Deserialize, Serialize};

/// Errors shared by every contract module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractError {
    /// Caller is not permitted to perform a privileged operation.
    Unauthorized,
    /// Referenced market, submission or stage does not exist.
    NotFound,
    /// Withdrawal would drive a balance negative.
    InsufficientFunds,
    /// Submitted value does not match the stored commitment, or a
    /// caller-supplied argument failed validation.
    IncorrectSolution,
    /// Operation attempted outside its legal lifecycle window.
    InvalidPhase,
    /// The entity reached a terminal state; retrying can never succeed.
    Closed,
}

impl ContractError {
    /// Stable numeric code exposed through the call envelope.
    pub fn code(&self) -> u32 {
        match self {
            ContractError::Unauthorized => 100,
            ContractError::NotFound => 101,
            ContractError::InsufficientFunds => 102,
            ContractError::IncorrectSolution => 103,
            ContractError::InvalidPhase => 104,
            ContractError::Closed => 105,
        }
    }
}

impl std::fmt::Display for ContractError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContractError::Unauthorized => write!(f, "Unauthorized (err 100)"),
            ContractError::NotFound => write!(f, "Not found (err 101)"),
            ContractError::InsufficientFunds => write!(f, "Insufficient funds (err 102)"),
            ContractError::IncorrectSolution => write!(f, "Incorrect solution (err 103)"),
            ContractError::InvalidPhase => write!(f, "Invalid phase (err 104)"),
            ContractError::Closed => write!(f, "Closed (err 105)"),
        }
    }
}

impl std::error::Error for ContractError {}
