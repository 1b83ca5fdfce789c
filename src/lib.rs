/// Mocknet Contracts
/// In-memory stand-ins for a family of ledger-backed, permissioned
/// on-chain contracts: a scavenger hunt with hash-committed solutions,
/// a binary prediction market with pooled wagering, and a whistleblower
/// escrow with authorization-gated commit/reveal.

pub mod auth;
pub mod client;
pub mod errors;
pub mod escrow;
pub mod hunt;
pub mod ledger;
pub mod market;

pub use auth::AuthorizationRegistry;
pub use client::{CallResult, ContractClient};
pub use errors::ContractError;
pub use escrow::{decrypt_data, encrypt_data, Submission, WhistleblowerEscrow};
pub use hunt::{
    commit_solution, HuntPhase, ScavengerHunt, Stage, COMPLETION_MESSAGE, FINAL_STAGE,
    STARTING_STAGE,
};
pub use ledger::{BalanceInfo, Ledger};
pub use market::{BetSide, Market, PredictionMarket, Stake};
