use crate::{
    error::VerifyError,
    types::challenge::{Challenge, UpdateChallengeInput},
};

/// Challenge surface of the verification service.
#[async_trait::async_trait]
pub trait ChallengesApi {
    /// Update the status of a single in-flight challenge.
    async fn update_challenge(
        &self,
        input: &UpdateChallengeInput,
    ) -> Result<Challenge, VerifyError>;
}
