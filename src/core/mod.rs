// Core algorithm exports
pub mod compatibility;
pub mod filters;
pub mod matcher;
pub mod scoring;

pub use compatibility::{
    all_blood_groups, can_donate_to, compatible_donor_groups, compatible_donors, donor_can_give,
    donor_stats, groups_donor_can_serve, is_compatible, is_valid_group,
};
pub use filters::filter_compatible_donors;
pub use matcher::match_donors_to_request;
pub use scoring::{compatibility_score, score_pair};
