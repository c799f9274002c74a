use crate::{
    error::VerifyError,
    types::factor::{Factor, FactorPayload},
};

/// Factor lifecycle surface of the verification service.
///
/// Implemented by a Factor Service Client collaborator that owns transport,
/// endpoint layout and body encoding; this crate only fixes the shapes that
/// cross the boundary.
#[async_trait::async_trait]
pub trait FactorsApi {
    /// Create a new Factor from any payload variant.
    ///
    /// Implementations match on the payload exhaustively to pick the right
    /// wire representation per factor type.
    async fn create_factor(&self, payload: &FactorPayload) -> Result<Factor, VerifyError>;
}
