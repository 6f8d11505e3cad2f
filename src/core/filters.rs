use crate::core::compatibility::compatible_donors;
use crate::models::{BloodGroup, Donor};

/// Keep the donors whose blood group may serve `recipient`.
///
/// This answers "who is biologically eligible" only: availability is not
/// consulted here, and input order is preserved. An invalid recipient label
/// yields an empty list.
pub fn filter_compatible_donors(recipient: &str, donors: &[Donor]) -> Vec<Donor> {
    let Ok(recipient) = recipient.parse::<BloodGroup>() else {
        return Vec::new();
    };

    let eligible = compatible_donors(recipient);

    donors
        .iter()
        .filter(|donor| donor.group().is_some_and(|group| eligible.contains(&group)))
        .cloned()
        .collect()
}
