// ============================================================================
// Scavenger Hunt - Stage-Chained Puzzle State Machine
// ============================================================================
//
// Stages form a chain: each stage carries a clue and the number of the
// stage a correct solution advances to. A next-stage of 0 is the
// completion sentinel - the first participant to reach it ends the hunt
// for everyone.
//
// Solutions are never stored or compared in plaintext. The owner
// registers a SHA-256 commitment of each solution; submissions are
// hashed and compared digest-to-digest.
//
// Lifecycle: NotStarted -> Active -> Ended. Stage and prize setup is
// legal only in NotStarted; clue reads and submissions only in Active.
//
// ============================================================================

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use tracing::info;

use crate::errors::ContractError;

/// Sentinel next-stage value meaning "hunt complete".
pub const FINAL_STAGE: u64 = 0;

/// Stage every participant starts on when they have no recorded progress.
pub const STARTING_STAGE: u64 = 1;

/// Returned to the participant whose submission ends the hunt.
pub const COMPLETION_MESSAGE: &str =
    "Congratulations! You've completed the hunt and won the prize!";

/// Compute the hex-encoded SHA-256 commitment of a solution.
pub fn commit_solution(solution: &str) -> String {
    hex::encode(Sha256::digest(solution.as_bytes()))
}

/// Hunt lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HuntPhase {
    NotStarted,
    Active,
    Ended,
}

/// One node in the puzzle chain. Immutable once the hunt starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stage {
    pub number: u64,
    pub clue: String,
    /// Hex SHA-256 commitment of the expected solution.
    pub solution_hash: String,
    /// Stage a correct solution advances to; FINAL_STAGE ends the hunt.
    pub next_stage: u64,
}

/// The scavenger hunt state machine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScavengerHunt {
    phase: HuntPhase,
    prize: u64,
    stages: HashMap<u64, Stage>,
    /// participant -> current stage number (absent = STARTING_STAGE)
    progress: HashMap<String, u64>,
}

impl Default for ScavengerHunt {
    fn default() -> Self {
        Self::new()
    }
}

impl ScavengerHunt {
    pub fn new() -> Self {
        Self {
            phase: HuntPhase::NotStarted,
            prize: 0,
            stages: HashMap::new(),
            progress: HashMap::new(),
        }
    }

    pub fn phase(&self) -> HuntPhase {
        self.phase
    }

    pub fn prize(&self) -> u64 {
        self.prize
    }

    /// Stage the participant is currently on.
    pub fn stage_of(&self, participant: &str) -> u64 {
        self.progress.get(participant).copied().unwrap_or(STARTING_STAGE)
    }

    /// Open the hunt. Legal exactly once.
    pub fn start(&mut self) -> Result<(), ContractError> {
        if self.phase != HuntPhase::NotStarted {
            return Err(ContractError::InvalidPhase);
        }
        self.phase = HuntPhase::Active;
        info!(stages = self.stages.len(), prize = self.prize, "hunt started");
        Ok(())
    }

    /// Register (or overwrite) a stage. Stores the commitment of
    /// `solution`, not the plaintext. Setup only - fails once started.
    pub fn add_stage(
        &mut self,
        number: u64,
        clue: &str,
        solution: &str,
        next_stage: u64,
    ) -> Result<(), ContractError> {
        if self.phase != HuntPhase::NotStarted {
            return Err(ContractError::InvalidPhase);
        }
        self.stages.insert(
            number,
            Stage {
                number,
                clue: clue.to_string(),
                solution_hash: commit_solution(solution),
                next_stage,
            },
        );
        Ok(())
    }

    /// Record the prize amount. Same phase window as `add_stage`;
    /// payout mechanics live outside this contract.
    pub fn set_prize(&mut self, amount: u64) -> Result<(), ContractError> {
        if self.phase != HuntPhase::NotStarted {
            return Err(ContractError::InvalidPhase);
        }
        self.prize = amount;
        Ok(())
    }

    /// Clue of the participant's current stage.
    pub fn current_clue(&self, participant: &str) -> Result<String, ContractError> {
        match self.phase {
            HuntPhase::NotStarted => return Err(ContractError::InvalidPhase),
            HuntPhase::Ended => return Err(ContractError::Closed),
            HuntPhase::Active => {}
        }
        let stage = self
            .stages
            .get(&self.stage_of(participant))
            .ok_or(ContractError::NotFound)?;
        Ok(stage.clue.clone())
    }

    /// Attempt the participant's current stage.
    ///
    /// A participant may only attempt the stage they are on - submitting
    /// for any other stage fails with IncorrectSolution regardless of
    /// whether the solution itself is right (anti-skip, anti-replay).
    /// On a match the participant advances to `next_stage`; reaching
    /// FINAL_STAGE ends the hunt for everyone.
    pub fn submit_solution(
        &mut self,
        participant: &str,
        stage: u64,
        solution: &str,
    ) -> Result<String, ContractError> {
        match self.phase {
            HuntPhase::NotStarted => return Err(ContractError::InvalidPhase),
            HuntPhase::Ended => return Err(ContractError::Closed),
            HuntPhase::Active => {}
        }
        if stage != self.stage_of(participant) {
            return Err(ContractError::IncorrectSolution);
        }
        let current = self.stages.get(&stage).ok_or(ContractError::NotFound)?;
        if commit_solution(solution) != current.solution_hash {
            return Err(ContractError::IncorrectSolution);
        }

        let next_stage = current.next_stage;
        self.progress.insert(participant.to_string(), next_stage);

        if next_stage == FINAL_STAGE {
            self.phase = HuntPhase::Ended;
            info!(participant, prize = self.prize, "hunt completed");
            return Ok(COMPLETION_MESSAGE.to_string());
        }

        info!(participant, stage, next_stage, "stage solved");
        // Advancing into an unregistered stage is tolerated: the
        // participant simply has no clue yet.
        Ok(self
            .stages
            .get(&next_stage)
            .map(|s| s.clue.clone())
            .unwrap_or_default())
    }
}
