// ============================================================================
// Contract Client - Single Entry Point for Every Mocknet Operation
// ============================================================================
//
// Callers invoke operations with an explicit caller identity; the client
// dispatches to the owning module and converts the typed result into the
// stable call envelope: {success: true, value?} on success,
// {success: false, error: <code>} on failure. Modules never call each
// other - the client is the only coordinator (it credits market payouts
// to the ledger and checks reveal authorization against the registry).
//
// Exclusive access to the client is exclusive access to every module,
// so each operation is an atomic, serialized state transition. Callers
// that need sharing put the client behind their own lock.
//
// ============================================================================

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::auth::AuthorizationRegistry;
use crate::errors::ContractError;
use crate::escrow::WhistleblowerEscrow;
use crate::hunt::ScavengerHunt;
use crate::ledger::Ledger;
use crate::market::{BetSide, PredictionMarket};

/// Result envelope returned by every contract-client operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    /// Stable numeric error code, present iff `success` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<u32>,
}

impl CallResult {
    pub fn ok() -> Self {
        Self { success: true, value: None, error: None }
    }

    pub fn ok_with(value: impl Serialize) -> Self {
        Self {
            success: true,
            value: serde_json::to_value(value).ok(),
            error: None,
        }
    }

    pub fn fail(err: ContractError) -> Self {
        Self { success: false, value: None, error: Some(err.code()) }
    }

    /// The value as a string, when the operation yields one.
    pub fn value_str(&self) -> Option<&str> {
        self.value.as_ref().and_then(|v| v.as_str())
    }

    /// The value as an unsigned integer, when the operation yields one.
    pub fn value_u64(&self) -> Option<u64> {
        self.value.as_ref().and_then(|v| v.as_u64())
    }
}

impl From<ContractError> for CallResult {
    fn from(err: ContractError) -> Self {
        CallResult::fail(err)
    }
}

fn unit(result: Result<(), ContractError>) -> CallResult {
    match result {
        Ok(()) => CallResult::ok(),
        Err(err) => CallResult::fail(err),
    }
}

fn valued<T: Serialize>(result: Result<T, ContractError>) -> CallResult {
    match result {
        Ok(value) => CallResult::ok_with(value),
        Err(err) => CallResult::fail(err),
    }
}

/// The mocknet facade: owns one instance of every contract module.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContractClient {
    pub hunt: ScavengerHunt,
    pub markets: PredictionMarket,
    pub escrow: WhistleblowerEscrow,
    pub ledger: Ledger,
    pub authorization: AuthorizationRegistry,
}

impl ContractClient {
    pub fn new() -> Self {
        Self {
            hunt: ScavengerHunt::new(),
            markets: PredictionMarket::new(),
            escrow: WhistleblowerEscrow::new(),
            ledger: Ledger::new(),
            authorization: AuthorizationRegistry::new(),
        }
    }

    // ------------------------------------------------------------------
    // Scavenger hunt
    // ------------------------------------------------------------------

    pub fn start_hunt(&mut self, _caller: &str) -> CallResult {
        unit(self.hunt.start())
    }

    pub fn add_stage(
        &mut self,
        _caller: &str,
        number: u64,
        clue: &str,
        solution: &str,
        next_stage: u64,
    ) -> CallResult {
        unit(self.hunt.add_stage(number, clue, solution, next_stage))
    }

    pub fn set_prize(&mut self, _caller: &str, amount: u64) -> CallResult {
        unit(self.hunt.set_prize(amount))
    }

    pub fn get_current_clue(&self, caller: &str) -> CallResult {
        valued(self.hunt.current_clue(caller))
    }

    pub fn submit_solution(&mut self, caller: &str, stage: u64, solution: &str) -> CallResult {
        valued(self.hunt.submit_solution(caller, stage, solution))
    }

    // ------------------------------------------------------------------
    // Prediction market
    // ------------------------------------------------------------------

    /// Returns the new market's id.
    pub fn create_market(
        &mut self,
        _caller: &str,
        description: &str,
        resolution_time: u64,
    ) -> CallResult {
        CallResult::ok_with(self.markets.create_market(description, resolution_time))
    }

    pub fn place_bet(
        &mut self,
        caller: &str,
        market_id: u64,
        side: BetSide,
        amount: u64,
    ) -> CallResult {
        unit(self.markets.place_bet(caller, market_id, side, amount))
    }

    pub fn resolve_market(&mut self, _caller: &str, market_id: u64, outcome: bool) -> CallResult {
        unit(self.markets.resolve_market(market_id, outcome))
    }

    /// Settles the caller's position and credits the payout to their
    /// ledger balance. Returns the payout amount.
    pub fn claim_winnings(&mut self, caller: &str, market_id: u64) -> CallResult {
        match self.markets.claim_winnings(caller, market_id) {
            Ok(payout) => {
                if payout > 0 {
                    self.ledger.deposit(caller, payout);
                }
                CallResult::ok_with(payout)
            }
            Err(err) => CallResult::fail(err),
        }
    }

    /// Returns the caller's new balance.
    pub fn deposit(&mut self, caller: &str, amount: u64) -> CallResult {
        CallResult::ok_with(self.ledger.deposit(caller, amount))
    }

    /// Returns the caller's new balance.
    pub fn withdraw(&mut self, caller: &str, amount: u64) -> CallResult {
        valued(self.ledger.withdraw(caller, amount))
    }

    pub fn get_balance(&self, caller: &str) -> CallResult {
        CallResult::ok_with(self.ledger.balance(caller))
    }

    // ------------------------------------------------------------------
    // Whistleblower escrow
    // ------------------------------------------------------------------

    pub fn add_authorized_party(&mut self, _caller: &str, party: &str) -> CallResult {
        self.authorization.add_party(party);
        CallResult::ok()
    }

    pub fn remove_authorized_party(&mut self, _caller: &str, party: &str) -> CallResult {
        self.authorization.remove_party(party);
        CallResult::ok()
    }

    pub fn is_party_authorized(&self, party: &str) -> CallResult {
        CallResult::ok_with(self.authorization.is_authorized(party))
    }

    /// Returns the new submission's id.
    pub fn submit_whistleblower_info(
        &mut self,
        _caller: &str,
        encrypted_content: &str,
        conditions: Vec<String>,
    ) -> CallResult {
        CallResult::ok_with(self.escrow.submit(encrypted_content, conditions))
    }

    /// Returns `{id, revealed, encrypted_content, conditions}`. The
    /// content stays ciphertext; decryption is the caller's job once
    /// revealed.
    pub fn get_submission(&self, _caller: &str, id: u64) -> CallResult {
        valued(self.escrow.get(id))
    }

    /// Reveal gate: the caller must be in the authorization registry.
    pub fn reveal_submission(&mut self, caller: &str, id: u64) -> CallResult {
        if let Err(err) = self.escrow.get(id) {
            return CallResult::fail(err);
        }
        if !self.authorization.is_authorized(caller) {
            return CallResult::fail(ContractError::Unauthorized);
        }
        unit(self.escrow.reveal(id))
    }
}
