use crate::core::compatibility::donor_can_give;
use crate::core::scoring::score_pair;
use crate::models::{BloodGroup, BloodRequest, Donor, MatchedDonor};

/// Match and rank donors for a blood request.
///
/// # Pipeline stages
/// 1. Availability filter (an absent flag means not available)
/// 2. Compatibility filter against the request's blood group
/// 3. Scoring and ranking, highest score first
///
/// The sort is stable, so donors sharing a score keep their input order;
/// callers can rely on reproducible output for a given donor list. An
/// invalid request blood group yields an empty result.
pub fn match_donors_to_request(request: &BloodRequest, donors: &[Donor]) -> Vec<MatchedDonor> {
    let Ok(recipient) = request.blood_group.parse::<BloodGroup>() else {
        tracing::debug!(
            "skipping match for invalid request blood group: {:?}",
            request.blood_group
        );
        return Vec::new();
    };

    let mut matched: Vec<MatchedDonor> = donors
        .iter()
        .filter(|donor| donor.is_available())
        .filter_map(|donor| {
            let group = donor.group()?;
            if !donor_can_give(group, recipient) {
                return None;
            }

            Some(MatchedDonor {
                donor: donor.clone(),
                compatibility_score: score_pair(group, recipient),
                exact_match: group == recipient,
            })
        })
        .collect();

    // Vec::sort_by is stable; ties preserve input order
    matched.sort_by(|a, b| b.compatibility_score.cmp(&a.compatibility_score));

    tracing::debug!(
        "matched {} of {} candidate donors for {}",
        matched.len(),
        donors.len(),
        recipient
    );

    matched
}
