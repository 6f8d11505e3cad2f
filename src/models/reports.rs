use serde::{Deserialize, Serialize};

use crate::models::domain::{BloodGroup, DemandLevel};

/// Recipient-side compatibility report.
///
/// Invalid input is data, not a fault: the report comes back with
/// `valid: false`, an empty donor list and no count. Optional fields are
/// omitted from JSON when absent, matching the shape callers serialize
/// straight into a response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatibilityReport {
    pub recipient: String,
    pub valid: bool,
    pub compatible_donors: Vec<BloodGroup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_universal_receiver: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_rare_recipient: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Donor-side statistics: who this group can serve and how badly it is needed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonorStats {
    pub blood_group: String,
    pub valid: bool,
    #[serde(default)]
    pub can_donate_to: Vec<BloodGroup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_donate_to_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_universal_donor: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_rare: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demand_level: Option<DemandLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
