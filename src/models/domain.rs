use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The eight canonical ABO/Rh blood groups.
///
/// The variant order here is the canonical order used everywhere a list of
/// groups is produced (`BloodGroup::ALL`, donor-side queries), so output is
/// deterministic and never depends on map iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BloodGroup {
    #[serde(rename = "A+")]
    APositive,
    #[serde(rename = "A-")]
    ANegative,
    #[serde(rename = "B+")]
    BPositive,
    #[serde(rename = "B-")]
    BNegative,
    #[serde(rename = "AB+")]
    AbPositive,
    #[serde(rename = "AB-")]
    AbNegative,
    #[serde(rename = "O+")]
    OPositive,
    #[serde(rename = "O-")]
    ONegative,
}

impl BloodGroup {
    /// All valid blood groups, in canonical order.
    pub const ALL: [BloodGroup; 8] = [
        BloodGroup::APositive,
        BloodGroup::ANegative,
        BloodGroup::BPositive,
        BloodGroup::BNegative,
        BloodGroup::AbPositive,
        BloodGroup::AbNegative,
        BloodGroup::OPositive,
        BloodGroup::ONegative,
    ];

    /// The canonical label for this group (e.g. `"AB-"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            BloodGroup::APositive => "A+",
            BloodGroup::ANegative => "A-",
            BloodGroup::BPositive => "B+",
            BloodGroup::BNegative => "B-",
            BloodGroup::AbPositive => "AB+",
            BloodGroup::AbNegative => "AB-",
            BloodGroup::OPositive => "O+",
            BloodGroup::ONegative => "O-",
        }
    }
}

impl fmt::Display for BloodGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a label is not one of the eight canonical blood groups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid blood group: {0:?}")]
pub struct ParseBloodGroupError(pub String);

impl FromStr for BloodGroup {
    type Err = ParseBloodGroupError;

    /// Strict parse: the label must match a canonical group byte-for-byte.
    /// No trimming or case-folding ("a+", " A+" and "" are all invalid).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A+" => Ok(BloodGroup::APositive),
            "A-" => Ok(BloodGroup::ANegative),
            "B+" => Ok(BloodGroup::BPositive),
            "B-" => Ok(BloodGroup::BNegative),
            "AB+" => Ok(BloodGroup::AbPositive),
            "AB-" => Ok(BloodGroup::AbNegative),
            "O+" => Ok(BloodGroup::OPositive),
            "O-" => Ok(BloodGroup::ONegative),
            _ => Err(ParseBloodGroupError(s.to_string())),
        }
    }
}

/// How urgently a donor's blood group is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DemandLevel {
    Critical,
    High,
    Normal,
}

/// Candidate donor record supplied by the caller.
///
/// Only `bloodGroup` and `available` are interpreted; every other field
/// is collected into `extra` and passed through unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Donor {
    #[serde(rename = "bloodGroup")]
    pub blood_group: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Donor {
    /// Availability as a bool. An absent flag means not available.
    pub fn is_available(&self) -> bool {
        self.available.unwrap_or(false)
    }

    /// The donor's blood group, if the label is valid.
    pub fn group(&self) -> Option<BloodGroup> {
        self.blood_group.parse().ok()
    }
}

/// Blood request record supplied by the caller.
///
/// The engine only reads `bloodGroup`; everything else is opaque.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BloodRequest {
    #[serde(rename = "bloodGroup")]
    pub blood_group: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A compatible, available donor ranked for a request: the original donor
/// record plus exactly two added fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchedDonor {
    #[serde(flatten)]
    pub donor: Donor,
    pub compatibility_score: u8,
    pub exact_match: bool,
}
