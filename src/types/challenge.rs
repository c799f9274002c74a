use serde::{Deserialize, Serialize};

/// Lifecycle status of a Challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChallengeStatus {
    Pending,
    Approved,
    Denied,
    Expired,
}

impl ChallengeStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ChallengeStatus::Pending => "pending",
            ChallengeStatus::Approved => "approved",
            ChallengeStatus::Denied => "denied",
            ChallengeStatus::Expired => "expired",
        }
    }
}

impl std::fmt::Display for ChallengeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The information required to update a Challenge's status.
///
/// Closed union over the known update shapes. An update always targets exactly
/// one (factor, challenge) pair and carries exactly one target status; there
/// are no batch or partial updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UpdateChallengeInput {
    Push(UpdatePushChallengeInput),
}

impl UpdateChallengeInput {
    /// SID of the factor that owns the challenge.
    pub fn factor_sid(&self) -> &str {
        match self {
            UpdateChallengeInput::Push(input) => &input.factor_sid,
        }
    }

    /// SID of the challenge instance being updated.
    pub fn challenge_sid(&self) -> &str {
        match self {
            UpdateChallengeInput::Push(input) => &input.challenge_sid,
        }
    }

    /// Target status for the challenge.
    pub fn status(&self) -> ChallengeStatus {
        match self {
            UpdateChallengeInput::Push(input) => input.status,
        }
    }
}

impl From<UpdatePushChallengeInput> for UpdateChallengeInput {
    fn from(input: UpdatePushChallengeInput) -> Self {
        UpdateChallengeInput::Push(input)
    }
}

/// Update input for a challenge issued against a push factor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePushChallengeInput {
    pub factor_sid: String,
    pub challenge_sid: String,
    pub status: ChallengeStatus,
}

impl UpdatePushChallengeInput {
    pub fn new(
        factor_sid: impl Into<String>,
        challenge_sid: impl Into<String>,
        status: ChallengeStatus,
    ) -> Self {
        Self {
            factor_sid: factor_sid.into(),
            challenge_sid: challenge_sid.into(),
            status,
        }
    }
}

/// A Challenge resource as returned from the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    pub sid: String,
    pub factor_sid: String,
    pub status: ChallengeStatus,
    pub date_created: Option<String>, // ISO8601
    pub date_updated: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_input_reads_back_unchanged() {
        let input = UpdatePushChallengeInput::new("YFxxxx", "YCxxxx", ChallengeStatus::Approved);
        assert_eq!(input.factor_sid, "YFxxxx");
        assert_eq!(input.challenge_sid, "YCxxxx");
        assert_eq!(input.status, ChallengeStatus::Approved);

        let input: UpdateChallengeInput = input.into();
        assert_eq!(input.factor_sid(), "YFxxxx");
        assert_eq!(input.challenge_sid(), "YCxxxx");
        assert_eq!(input.status(), ChallengeStatus::Approved);
    }

    #[test]
    fn identical_inputs_are_value_equal() {
        let a = UpdatePushChallengeInput::new("YF1", "YC1", ChallengeStatus::Denied);
        let b = UpdatePushChallengeInput::new("YF1", "YC1", ChallengeStatus::Denied);
        assert_eq!(a, b);
        let c = UpdatePushChallengeInput::new("YF1", "YC1", ChallengeStatus::Approved);
        assert_ne!(a, c);
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ChallengeStatus::Approved).unwrap(),
            "\"approved\""
        );
        let status: ChallengeStatus = serde_json::from_str("\"expired\"").unwrap();
        assert_eq!(status, ChallengeStatus::Expired);
        assert_eq!(ChallengeStatus::Pending.to_string(), "pending");
    }
}
