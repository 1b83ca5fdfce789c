/// Authorization Registry
///
/// Tracks the set of parties permitted to perform privileged escrow
/// operations (currently: revealing a submission). Pure membership
/// semantics - add and remove are idempotent, there is no ordering
/// and no multiplicity.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::info;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthorizationRegistry {
    parties: HashSet<String>,
}

impl AuthorizationRegistry {
    pub fn new() -> Self {
        Self { parties: HashSet::new() }
    }

    /// Grant a party privileged access. Re-adding is a no-op.
    pub fn add_party(&mut self, party: &str) {
        if self.parties.insert(party.to_string()) {
            info!(party, "authorized party added");
        }
    }

    /// Revoke a party's access. Removing an absent party is a no-op.
    pub fn remove_party(&mut self, party: &str) {
        if self.parties.remove(party) {
            info!(party, "authorized party removed");
        }
    }

    pub fn is_authorized(&self, party: &str) -> bool {
        self.parties.contains(party)
    }

    pub fn len(&self) -> usize {
        self.parties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parties.is_empty()
    }
}
