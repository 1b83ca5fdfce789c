/// Participant Ledger
///
/// Owns every participant balance on the mocknet. Leaf module: the
/// prediction market and escrow reach it only through the contract
/// client, never directly. Balances are unsigned, so the "never
/// negative" invariant holds by construction - withdrawals that would
/// underflow are rejected outright, never clamped.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::info;

use crate::errors::ContractError;

/// Balance snapshot for a single participant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceInfo {
    pub participant: String,
    pub balance: u64,
}

/// The mocknet ledger: participant -> balance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    balances: HashMap<String, u64>,
}

impl Ledger {
    pub fn new() -> Self {
        Self { balances: HashMap::new() }
    }

    /// Current balance; unknown participants hold zero.
    pub fn balance(&self, participant: &str) -> u64 {
        self.balances.get(participant).copied().unwrap_or(0)
    }

    /// Credit `amount` to a participant, creating the account if needed.
    /// Returns the new balance.
    pub fn deposit(&mut self, participant: &str, amount: u64) -> u64 {
        let balance = self.balances.entry(participant.to_string()).or_insert(0);
        *balance += amount;
        info!(participant, amount, balance = *balance, "ledger deposit");
        *balance
    }

    /// Debit `amount` from a participant. Fails (never clamps) if the
    /// balance would go negative.
    pub fn withdraw(&mut self, participant: &str, amount: u64) -> Result<u64, ContractError> {
        let balance = self
            .balances
            .get_mut(participant)
            .filter(|b| **b >= amount)
            .ok_or(ContractError::InsufficientFunds)?;
        *balance -= amount;
        info!(participant, amount, balance = *balance, "ledger withdraw");
        Ok(*balance)
    }

    /// Full snapshot for one participant.
    pub fn balance_info(&self, participant: &str) -> BalanceInfo {
        BalanceInfo {
            participant: participant.to_string(),
            balance: self.balance(participant),
        }
    }

    /// Number of participants with a recorded balance.
    pub fn accounts(&self) -> usize {
        self.balances.len()
    }
}
