pub mod factor;
pub mod challenge;

// Re-export the main types commonly used
pub use factor::{
    config_keys, CreateFactorPayload, Factor, FactorPayload, FactorStatus, FactorType,
    PushFactorPayload,
};
pub use challenge::{
    Challenge, ChallengeStatus, UpdateChallengeInput, UpdatePushChallengeInput,
};
