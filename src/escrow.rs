// ============================================================================
// Whistleblower Escrow - Commit/Reveal Submission Store
// ============================================================================
//
// Submissions arrive already encrypted by the caller and stay opaque to
// the contract: reads hand back ciphertext and it is the caller's job
// to decrypt once revealed. Revealing is the privileged half of the
// commit/reveal pattern and is gated on the authorization registry;
// the first reveal latches, repeats are no-op successes.
//
// The bundled cipher is a repeating-key XOR over hex-encoded bytes. Its
// only contractual property is the round trip
// decrypt(encrypt(p, k), k) == p - it provides no confidentiality and
// stands in for a real cipher supplied by the environment.
//
// ============================================================================

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::info;

use crate::errors::ContractError;

/// One escrowed disclosure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub id: u64,
    /// Hex ciphertext, exactly as the caller submitted it.
    pub encrypted_content: String,
    /// Ordered release-condition predicates, free text.
    pub conditions: Vec<String>,
    pub revealed: bool,
}

/// XOR `data` with a repeating `key` and hex-encode the result.
pub fn encrypt_data(data: &str, key: &str) -> String {
    hex::encode(xor_bytes(data.as_bytes(), key.as_bytes()))
}

/// Inverse of `encrypt_data`. Fails on malformed hex or a payload that
/// does not decode to UTF-8 under this key.
pub fn decrypt_data(data: &str, key: &str) -> Result<String, ContractError> {
    let bytes = hex::decode(data).map_err(|_| ContractError::IncorrectSolution)?;
    String::from_utf8(xor_bytes(&bytes, key.as_bytes()))
        .map_err(|_| ContractError::IncorrectSolution)
}

fn xor_bytes(data: &[u8], key: &[u8]) -> Vec<u8> {
    if key.is_empty() {
        return data.to_vec();
    }
    data.iter()
        .zip(key.iter().cycle())
        .map(|(byte, k)| byte ^ k)
        .collect()
}

/// Store of all escrowed submissions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WhistleblowerEscrow {
    submissions: HashMap<u64, Submission>,
    next_id: u64,
}

impl WhistleblowerEscrow {
    pub fn new() -> Self {
        Self { submissions: HashMap::new(), next_id: 0 }
    }

    pub fn len(&self) -> usize {
        self.submissions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.submissions.is_empty()
    }

    /// Escrow an already-encrypted payload under the next sequential id.
    /// Open to any caller.
    pub fn submit(&mut self, encrypted_content: &str, conditions: Vec<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.submissions.insert(
            id,
            Submission {
                id,
                encrypted_content: encrypted_content.to_string(),
                conditions,
                revealed: false,
            },
        );
        info!(submission_id = id, "whistleblower submission escrowed");
        id
    }

    /// Look up a submission. The content returned is still ciphertext,
    /// so reads are not authorization-gated.
    pub fn get(&self, id: u64) -> Result<&Submission, ContractError> {
        self.submissions.get(&id).ok_or(ContractError::NotFound)
    }

    /// Mark a submission revealed. Latches on the first call; calling
    /// again is a no-op success. Authorization is checked by the
    /// contract client before dispatching here.
    pub fn reveal(&mut self, id: u64) -> Result<(), ContractError> {
        let submission = self.submissions.get_mut(&id).ok_or(ContractError::NotFound)?;
        if !submission.revealed {
            submission.revealed = true;
            info!(submission_id = id, "submission revealed");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encrypt_round_trip() {
        let payloads = ["", "a", "the documents are in exhibit 12", "émoji ☂ payload"];
        let keys = ["k", "longer-key-material", "0"];
        for payload in payloads {
            for key in keys {
                let ciphertext = encrypt_data(payload, key);
                assert_eq!(decrypt_data(&ciphertext, key).unwrap(), payload);
            }
        }
    }

    #[test]
    fn test_ciphertext_is_hex_and_differs_from_plaintext() {
        let ciphertext = encrypt_data("secret", "key");
        assert!(ciphertext.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(ciphertext, hex::encode("secret"));
    }

    #[test]
    fn test_decrypt_rejects_malformed_hex() {
        assert_eq!(
            decrypt_data("not hex at all", "key"),
            Err(ContractError::IncorrectSolution)
        );
    }

    #[test]
    fn test_submission_lifecycle() {
        let mut escrow = WhistleblowerEscrow::new();
        let ciphertext = encrypt_data("payload", "key");
        let id = escrow.submit(&ciphertext, vec!["after indictment".to_string()]);
        assert_eq!(id, 0);

        let submission = escrow.get(id).unwrap();
        assert!(!submission.revealed);
        assert_eq!(submission.encrypted_content, ciphertext);
        assert_eq!(submission.conditions, vec!["after indictment".to_string()]);

        escrow.reveal(id).unwrap();
        assert!(escrow.get(id).unwrap().revealed);
        // Second reveal is a no-op success.
        escrow.reveal(id).unwrap();
        assert!(escrow.get(id).unwrap().revealed);
    }

    #[test]
    fn test_ids_are_sequential_and_missing_is_not_found() {
        let mut escrow = WhistleblowerEscrow::new();
        assert_eq!(escrow.submit("aa", vec![]), 0);
        assert_eq!(escrow.submit("bb", vec![]), 1);
        assert_eq!(escrow.get(5).unwrap_err(), ContractError::NotFound);
        assert_eq!(escrow.reveal(5), Err(ContractError::NotFound));
    }
}
