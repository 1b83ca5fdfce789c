// Whistleblower escrow scenarios: commit/reveal with authorization
// gating and the caller-side cipher round trip.

use mocknet_contracts::{decrypt_data, encrypt_data, ContractClient, Submission};

const LEAKER: &str = "ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG";
const JOURNALIST: &str = "ST3AM1A56AK2C1XAFJ4115ZSV26EB49BVQ10MGCS0";

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[test]
fn commit_reveal_decrypt_flow() {
    init_tracing();
    let mut client = ContractClient::new();

    let key = "press-room-key";
    let ciphertext = encrypt_data("the memo is dated March 4th", key);
    let conditions = vec![
        "release after indictment".to_string(),
        "redact names of minors".to_string(),
    ];

    let submitted = client.submit_whistleblower_info(LEAKER, &ciphertext, conditions.clone());
    assert!(submitted.success);
    let id = submitted.value_u64().unwrap();

    // Anyone may read; the content is still ciphertext.
    let fetched = client.get_submission(JOURNALIST, id);
    assert!(fetched.success);
    let submission: Submission = serde_json::from_value(fetched.value.unwrap()).unwrap();
    assert!(!submission.revealed);
    assert_eq!(submission.encrypted_content, ciphertext);
    assert_eq!(submission.conditions, conditions);

    client.add_authorized_party(LEAKER, JOURNALIST);
    assert!(client.reveal_submission(JOURNALIST, id).success);

    let revealed = client.get_submission(JOURNALIST, id);
    let submission: Submission = serde_json::from_value(revealed.value.unwrap()).unwrap();
    assert!(submission.revealed);

    // Decryption stays caller-side.
    assert_eq!(
        decrypt_data(&submission.encrypted_content, key).unwrap(),
        "the memo is dated March 4th"
    );
}

#[test]
fn reveal_requires_authorization() {
    let mut client = ContractClient::new();
    let id = client
        .submit_whistleblower_info(LEAKER, &encrypt_data("payload", "k"), vec![])
        .value_u64()
        .unwrap();

    let denied = client.reveal_submission(JOURNALIST, id);
    assert!(!denied.success);
    assert_eq!(denied.error, Some(100));

    client.add_authorized_party(LEAKER, JOURNALIST);
    assert!(client.reveal_submission(JOURNALIST, id).success);

    // Revocation closes the gate again for later submissions.
    client.remove_authorized_party(LEAKER, JOURNALIST);
    let id2 = client
        .submit_whistleblower_info(LEAKER, "00", vec![])
        .value_u64()
        .unwrap();
    assert_eq!(client.reveal_submission(JOURNALIST, id2).error, Some(100));
}

#[test]
fn reveal_is_idempotent() {
    let mut client = ContractClient::new();
    client.add_authorized_party(LEAKER, JOURNALIST);
    let id = client
        .submit_whistleblower_info(LEAKER, "aa", vec![])
        .value_u64()
        .unwrap();

    assert!(client.reveal_submission(JOURNALIST, id).success);
    assert!(client.reveal_submission(JOURNALIST, id).success);

    let fetched = client.get_submission(JOURNALIST, id);
    let submission: Submission = serde_json::from_value(fetched.value.unwrap()).unwrap();
    assert!(submission.revealed);
}

#[test]
fn authorization_queries_and_idempotence() {
    let mut client = ContractClient::new();
    assert_eq!(
        client.is_party_authorized(JOURNALIST).value,
        Some(serde_json::json!(false))
    );

    client.add_authorized_party(LEAKER, JOURNALIST);
    client.add_authorized_party(LEAKER, JOURNALIST);
    assert_eq!(
        client.is_party_authorized(JOURNALIST).value,
        Some(serde_json::json!(true))
    );
}

#[test]
fn missing_submissions_are_not_found() {
    let mut client = ContractClient::new();
    assert_eq!(client.get_submission(JOURNALIST, 7).error, Some(101));
    // NotFound wins over the authorization check.
    assert_eq!(client.reveal_submission(JOURNALIST, 7).error, Some(101));
}

#[test]
fn submission_ids_are_sequential() {
    let mut client = ContractClient::new();
    let first = client
        .submit_whistleblower_info(LEAKER, "aa", vec![])
        .value_u64()
        .unwrap();
    let second = client
        .submit_whistleblower_info(LEAKER, "bb", vec![])
        .value_u64()
        .unwrap();
    assert_eq!(first, 0);
    assert_eq!(second, 1);
}

#[test]
fn cipher_round_trip_over_varied_payloads_and_keys() {
    for payload in ["", "x", "a much longer payload with spaces", "π ≈ 3.14159"] {
        for key in ["k", "two", "a-longer-key-than-the-payload-itself"] {
            let ciphertext = encrypt_data(payload, key);
            assert_eq!(decrypt_data(&ciphertext, key).unwrap(), payload);
        }
    }
}
