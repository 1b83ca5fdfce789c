// ============================================================================
// Binary Prediction Market - Pooled Wagering & Resolution
// ============================================================================
//
// Each market holds a YES pool and a NO pool. Bets grow the chosen pool
// and record the bettor's stake; pools never shrink. Resolution latches
// exactly once (the mock's silent re-resolution was a defect and is
// rejected here). Claims pay the winning stake back plus a pro-rata
// share of the losing pool, and consume the stake so a second claim
// pays nothing.
//
// Money lives in the participant ledger, not here: this module only
// accounts pools and stakes, and reports payouts for the contract
// client to credit.
//
// ============================================================================

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::info;

use crate::errors::ContractError;

/// Which side of a binary market a bet backs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BetSide {
    Yes,
    No,
}

impl BetSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            BetSide::Yes => "yes",
            BetSide::No => "no",
        }
    }
}

/// A participant's open stakes in one market.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Stake {
    pub yes: u64,
    pub no: u64,
}

/// A single binary market.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Market {
    pub id: u64,
    pub description: String,
    /// Advisory metadata only - no operation enforces it.
    pub resolution_time: u64,
    pub total_yes_amount: u64,
    pub total_no_amount: u64,
    pub resolved: bool,
    pub outcome: Option<bool>,
    stakes: HashMap<String, Stake>,
}

impl Market {
    fn new(id: u64, description: &str, resolution_time: u64) -> Self {
        Self {
            id,
            description: description.to_string(),
            resolution_time,
            total_yes_amount: 0,
            total_no_amount: 0,
            resolved: false,
            outcome: None,
            stakes: HashMap::new(),
        }
    }

    pub fn stake_of(&self, participant: &str) -> Stake {
        self.stakes.get(participant).copied().unwrap_or_default()
    }
}

/// Manager for every market on the mocknet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictionMarket {
    markets: HashMap<u64, Market>,
    next_id: u64,
}

impl PredictionMarket {
    pub fn new() -> Self {
        Self { markets: HashMap::new(), next_id: 0 }
    }

    pub fn get(&self, market_id: u64) -> Option<&Market> {
        self.markets.get(&market_id)
    }

    pub fn len(&self) -> usize {
        self.markets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markets.is_empty()
    }

    /// Open a new market and return its id. Ids are sequential and
    /// never reused.
    pub fn create_market(&mut self, description: &str, resolution_time: u64) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.markets.insert(id, Market::new(id, description, resolution_time));
        info!(market_id = id, description, "market created");
        id
    }

    /// Wager `amount` on one side of an open market.
    pub fn place_bet(
        &mut self,
        participant: &str,
        market_id: u64,
        side: BetSide,
        amount: u64,
    ) -> Result<(), ContractError> {
        let market = self.markets.get_mut(&market_id).ok_or(ContractError::NotFound)?;
        if market.resolved {
            return Err(ContractError::Closed);
        }
        if amount == 0 {
            return Err(ContractError::IncorrectSolution);
        }

        let stake = market.stakes.entry(participant.to_string()).or_default();
        match side {
            BetSide::Yes => {
                stake.yes += amount;
                market.total_yes_amount += amount;
            }
            BetSide::No => {
                stake.no += amount;
                market.total_no_amount += amount;
            }
        }
        info!(participant, market_id, side = side.as_str(), amount, "bet placed");
        Ok(())
    }

    /// Latch the market outcome. A resolved market cannot be resolved
    /// again.
    pub fn resolve_market(&mut self, market_id: u64, outcome: bool) -> Result<(), ContractError> {
        let market = self.markets.get_mut(&market_id).ok_or(ContractError::NotFound)?;
        if market.resolved {
            return Err(ContractError::Closed);
        }
        market.resolved = true;
        market.outcome = Some(outcome);
        info!(market_id, outcome, "market resolved");
        Ok(())
    }

    /// Settle the caller's position in a resolved market and return the
    /// payout: the winning stake plus its pro-rata share of the losing
    /// pool. The stake is consumed, so repeat claims (and losing-side
    /// claims) pay 0. Claiming against an unresolved or unknown market
    /// fails Closed.
    pub fn claim_winnings(
        &mut self,
        participant: &str,
        market_id: u64,
    ) -> Result<u64, ContractError> {
        let market = self.markets.get_mut(&market_id).ok_or(ContractError::Closed)?;
        let outcome = match (market.resolved, market.outcome) {
            (true, Some(outcome)) => outcome,
            _ => return Err(ContractError::Closed),
        };

        let (winning_pool, losing_pool) = if outcome {
            (market.total_yes_amount, market.total_no_amount)
        } else {
            (market.total_no_amount, market.total_yes_amount)
        };

        let stake = market.stakes.entry(participant.to_string()).or_default();
        let won = if outcome {
            std::mem::take(&mut stake.yes)
        } else {
            std::mem::take(&mut stake.no)
        };

        if won == 0 || winning_pool == 0 {
            return Ok(0);
        }
        // Stake back plus the stake's share of the losing pool.
        let payout = won + won * losing_pool / winning_pool;
        info!(participant, market_id, payout, "winnings claimed");
        Ok(payout)
    }
}
