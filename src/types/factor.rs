use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Keys that are meaningful inside [`CreateFactorPayload::config`], per factor
/// type. The generic payload uses these to carry fields that a dedicated
/// variant models structurally.
pub mod config_keys {
    /// Push: registration token issued by the platform push service.
    pub const PUSH_TOKEN: &str = "push_token";
    /// Push: previously issued access token.
    pub const ACCESS_TOKEN: &str = "access_token";
}

/// Type of a Factor.
///
/// `Other` covers server-defined types this crate does not model yet, so the
/// set can grow without a breaking change.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorType {
    Push,
    #[serde(untagged)]
    Other(String),
}

impl FactorType {
    pub fn as_str(&self) -> &str {
        match self {
            FactorType::Push => "push",
            FactorType::Other(s) => s,
        }
    }
}

impl std::fmt::Display for FactorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The information required to create a Factor.
///
/// Closed union over the known payload shapes, so consuming transport code can
/// match exhaustively. Shared fields are reachable through the accessor
/// methods regardless of variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FactorPayload {
    Push(PushFactorPayload),
    Generic(CreateFactorPayload),
}

impl FactorPayload {
    /// A human readable description of this resource, up to 64 characters.
    /// For a push factor, this can be the device's name.
    pub fn friendly_name(&self) -> &str {
        match self {
            FactorPayload::Push(p) => &p.friendly_name,
            FactorPayload::Generic(p) => &p.friendly_name,
        }
    }

    /// The unique SID identifier of the Service.
    pub fn service_sid(&self) -> &str {
        match self {
            FactorPayload::Push(p) => &p.service_sid,
            FactorPayload::Generic(p) => &p.service_sid,
        }
    }

    /// Identifies the user. Should be an opaque UUID-like value, not PII;
    /// the systems processing it assume it is not directly identifying.
    /// For the generic variant this is the `entity` field.
    pub fn identity(&self) -> &str {
        match self {
            FactorPayload::Push(p) => &p.identity,
            FactorPayload::Generic(p) => &p.entity,
        }
    }

    /// Type of the factor. Fixed per variant for `Push`, caller-supplied for
    /// `Generic`.
    pub fn factor_type(&self) -> FactorType {
        match self {
            FactorPayload::Push(p) => p.factor_type(),
            FactorPayload::Generic(p) => p.r#type.clone(),
        }
    }
}

impl From<PushFactorPayload> for FactorPayload {
    fn from(payload: PushFactorPayload) -> Self {
        FactorPayload::Push(payload)
    }
}

impl From<CreateFactorPayload> for FactorPayload {
    fn from(payload: CreateFactorPayload) -> Self {
        FactorPayload::Generic(payload)
    }
}

/// The information required to create a Factor whose type is push.
///
/// The factor type is fixed at the type level; callers cannot override it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushFactorPayload {
    pub friendly_name: String,
    pub service_sid: String,
    pub identity: String,
    /// Registration token generated by the platform push service (APNS/FCM)
    /// when registering for remote notifications.
    pub push_token: String,
    /// Previously generated access token.
    pub access_token: String,
}

impl PushFactorPayload {
    /// Assembles the payload from its parts. Pure; no validation beyond
    /// requiring every field. Semantic checks (name length, non-empty SIDs)
    /// belong to [`crate::validate`] or the server.
    pub fn new(
        friendly_name: impl Into<String>,
        service_sid: impl Into<String>,
        identity: impl Into<String>,
        push_token: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            friendly_name: friendly_name.into(),
            service_sid: service_sid.into(),
            identity: identity.into(),
            push_token: push_token.into(),
            access_token: access_token.into(),
        }
    }

    /// Always [`FactorType::Push`].
    pub fn factor_type(&self) -> FactorType {
        FactorType::Push
    }

    /// Re-expresses this payload as the generic shape, moving the
    /// push-specific fields into `config` under [`config_keys::PUSH_TOKEN`]
    /// and [`config_keys::ACCESS_TOKEN`].
    pub fn to_create_payload(&self) -> CreateFactorPayload {
        let mut config = HashMap::new();
        config.insert(config_keys::PUSH_TOKEN.to_string(), self.push_token.clone());
        config.insert(config_keys::ACCESS_TOKEN.to_string(), self.access_token.clone());
        CreateFactorPayload {
            friendly_name: self.friendly_name.clone(),
            r#type: FactorType::Push,
            service_sid: self.service_sid.clone(),
            entity: self.identity.clone(),
            config,
        }
    }
}

/// Generic creation payload. Unlike [`PushFactorPayload`] the discriminator is
/// caller-supplied, so this shape can describe factor types the crate does not
/// model yet.
///
/// `entity` plays the role `identity` plays on the push variant; the upstream
/// API uses both names and they are kept distinct here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateFactorPayload {
    pub friendly_name: String,
    pub r#type: FactorType,
    pub service_sid: String,
    pub entity: String,
    /// Open string-to-string map for variant-specific configuration not
    /// otherwise modeled. Duplicate inserts are last-write-wins.
    pub config: HashMap<String, String>,
}

impl CreateFactorPayload {
    pub fn new(
        friendly_name: impl Into<String>,
        r#type: FactorType,
        service_sid: impl Into<String>,
        entity: impl Into<String>,
        config: HashMap<String, String>,
    ) -> Self {
        Self {
            friendly_name: friendly_name.into(),
            r#type,
            service_sid: service_sid.into(),
            entity: entity.into(),
            config,
        }
    }
}

/// Lifecycle status of a Factor resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorStatus {
    Unverified,
    Verified,
}

/// A Factor resource as returned from the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Factor {
    pub sid: String,
    pub friendly_name: String,
    pub service_sid: String,
    pub identity: String,
    pub r#type: FactorType,
    pub status: FactorStatus,
    pub date_created: Option<String>, // ISO8601
    pub date_updated: Option<String>,
}
