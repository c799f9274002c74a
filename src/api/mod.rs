pub mod factors;
pub mod challenges;

pub use factors::FactorsApi;
pub use challenges::ChallengesApi;
