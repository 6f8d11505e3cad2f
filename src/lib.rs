//! Hemomatch - blood group compatibility and donor matching engine
//!
//! This library implements the transfusion-compatibility rules for the eight
//! ABO/Rh blood groups and a donor matching pipeline on top of them: strict
//! validation, the recipient -> eligible-donor matrix, derived classification
//! queries (universal donor/receiver, rarity, demand tier), preference
//! scoring and ranked matching over a candidate donor pool.
//!
//! All operations are pure functions over caller-supplied data; the only
//! shared state is the compile-time compatibility matrix. Invalid blood
//! groups are data, not faults: every operation has a defined output for
//! them (an empty list, a zero score, or a record tagged `valid: false`).

pub mod core;
pub mod models;

// Re-export commonly used types and operations
pub use crate::core::{
    compatibility_score, compatible_donor_groups, donor_stats, filter_compatible_donors,
    groups_donor_can_serve, is_compatible, is_valid_group, match_donors_to_request,
};
pub use crate::models::{
    BloodGroup, BloodRequest, CompatibilityReport, DemandLevel, Donor, DonorStats, MatchedDonor,
    ParseBloodGroupError,
};
