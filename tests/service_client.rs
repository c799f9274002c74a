//! Drives the payload model through the API traits the way a real Factor
//! Service Client would, using an in-memory stand-in for the service.

use std::collections::HashMap;

use verify_api::{
    validate::{validate_challenge_update, validate_factor_payload},
    Challenge, ChallengeStatus, ChallengesApi, CreateFactorPayload, Factor, FactorPayload,
    FactorStatus, FactorType, FactorsApi, PushFactorPayload, UpdateChallengeInput,
    UpdatePushChallengeInput, VerifyError,
};

/// Accepts any payload variant and fabricates the resource the service would
/// return, without touching the network.
struct InMemoryClient;

#[async_trait::async_trait]
impl FactorsApi for InMemoryClient {
    async fn create_factor(&self, payload: &FactorPayload) -> Result<Factor, VerifyError> {
        validate_factor_payload(payload)?;
        // Exhaustive over the payload union; adding a variant is a compile
        // error here until the client handles it.
        let sid = match payload {
            FactorPayload::Push(_) => "YF_push_0001".to_string(),
            FactorPayload::Generic(_) => "YF_generic_0001".to_string(),
        };
        Ok(Factor {
            sid,
            friendly_name: payload.friendly_name().to_string(),
            service_sid: payload.service_sid().to_string(),
            identity: payload.identity().to_string(),
            r#type: payload.factor_type(),
            status: FactorStatus::Unverified,
            date_created: Some("2020-06-02T18:00:00Z".to_string()),
            date_updated: None,
        })
    }
}

#[async_trait::async_trait]
impl ChallengesApi for InMemoryClient {
    async fn update_challenge(
        &self,
        input: &UpdateChallengeInput,
    ) -> Result<Challenge, VerifyError> {
        validate_challenge_update(input)?;
        Ok(Challenge {
            sid: input.challenge_sid().to_string(),
            factor_sid: input.factor_sid().to_string(),
            status: input.status(),
            date_created: Some("2020-06-02T18:00:00Z".to_string()),
            date_updated: Some("2020-06-02T18:00:05Z".to_string()),
        })
    }
}

#[tokio::test]
async fn creates_a_factor_from_a_push_payload() {
    let client = InMemoryClient;
    let payload: FactorPayload =
        PushFactorPayload::new("My iPhone", "ISxxxx", "user-123", "apns-tok", "at-tok").into();

    let factor = client.create_factor(&payload).await.unwrap();
    assert_eq!(factor.r#type, FactorType::Push);
    assert_eq!(factor.friendly_name, "My iPhone");
    assert_eq!(factor.service_sid, "ISxxxx");
    assert_eq!(factor.identity, "user-123");
    assert_eq!(factor.status, FactorStatus::Unverified);
}

#[tokio::test]
async fn creates_a_factor_from_a_generic_payload() {
    let client = InMemoryClient;
    let mut config = HashMap::new();
    config.insert("push_token".to_string(), "apns-tok".to_string());
    config.insert("access_token".to_string(), "at-tok".to_string());
    let payload: FactorPayload = CreateFactorPayload::new(
        "My iPhone",
        FactorType::Push,
        "ISxxxx",
        "user-123",
        config,
    )
    .into();

    let factor = client.create_factor(&payload).await.unwrap();
    assert_eq!(factor.sid, "YF_generic_0001");
    assert_eq!(factor.r#type, FactorType::Push);
    assert_eq!(factor.identity, "user-123");
}

#[tokio::test]
async fn rejects_an_invalid_payload_before_any_request() {
    let client = InMemoryClient;
    let payload: FactorPayload =
        PushFactorPayload::new("My iPhone", "", "user-123", "apns-tok", "at-tok").into();

    let err = client.create_factor(&payload).await.unwrap_err();
    assert!(matches!(
        err,
        VerifyError::Validation { field: "service_sid", .. }
    ));
}

#[tokio::test]
async fn approves_a_push_challenge() {
    let client = InMemoryClient;
    let input: UpdateChallengeInput =
        UpdatePushChallengeInput::new("YFxxxx", "YCxxxx", ChallengeStatus::Approved).into();

    let challenge = client.update_challenge(&input).await.unwrap();
    assert_eq!(challenge.sid, "YCxxxx");
    assert_eq!(challenge.factor_sid, "YFxxxx");
    assert_eq!(challenge.status, ChallengeStatus::Approved);
}
