//! Opt-in semantic validation for payloads.
//!
//! Constructors in [`crate::types`] are pure data assembly and never call into
//! this module; callers that want client-side checks before handing a payload
//! to the service run them here. The server remains the authority either way.

use crate::error::VerifyError;
use crate::types::{FactorPayload, UpdateChallengeInput};

/// Upper bound on `friendly_name`, imposed by the service.
pub const MAX_FRIENDLY_NAME_LEN: usize = 64;

fn require_non_empty(field: &'static str, value: &str) -> Result<(), VerifyError> {
    if value.is_empty() {
        return Err(VerifyError::Validation {
            field,
            reason: "must not be empty".to_string(),
        });
    }
    Ok(())
}

/// Checks a factor-creation payload against the documented constraints:
/// `friendly_name` at most [`MAX_FRIENDLY_NAME_LEN`] characters, required
/// string fields non-empty.
pub fn validate_factor_payload(payload: &FactorPayload) -> Result<(), VerifyError> {
    if payload.friendly_name().chars().count() > MAX_FRIENDLY_NAME_LEN {
        return Err(VerifyError::Validation {
            field: "friendly_name",
            reason: format!("must be at most {MAX_FRIENDLY_NAME_LEN} characters"),
        });
    }
    require_non_empty("friendly_name", payload.friendly_name())?;
    require_non_empty("service_sid", payload.service_sid())?;
    require_non_empty("identity", payload.identity())?;
    if let FactorPayload::Push(push) = payload {
        require_non_empty("push_token", &push.push_token)?;
        require_non_empty("access_token", &push.access_token)?;
    }
    Ok(())
}

/// Checks a challenge-update input: both SIDs must be present.
pub fn validate_challenge_update(input: &UpdateChallengeInput) -> Result<(), VerifyError> {
    require_non_empty("factor_sid", input.factor_sid())?;
    require_non_empty("challenge_sid", input.challenge_sid())?;
    Ok(())
}
