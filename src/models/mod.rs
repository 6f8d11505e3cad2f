// Model exports
pub mod domain;
pub mod reports;

pub use domain::{BloodGroup, BloodRequest, DemandLevel, Donor, MatchedDonor, ParseBloodGroupError};
pub use reports::{CompatibilityReport, DonorStats};
