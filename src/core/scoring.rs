use crate::core::compatibility::donor_can_give;
use crate::models::BloodGroup;

/// Compatibility score for a donor/recipient pair (0-100).
/// Higher score means better match.
///
/// Rules, in priority order:
/// 1. incompatible pair -> 0 (incompatible donors never score)
/// 2. exact group match -> 100
/// 3. donor O- -> 70 (universal donor, ranked below other compatible groups)
/// 4. donor O+ -> 80
/// 5. any other compatible pair -> 85
///
/// The exact-match rule is checked before the donor-identity rules, so an
/// O- -> O- pair scores 100, not 70.
pub fn score_pair(donor: BloodGroup, recipient: BloodGroup) -> u8 {
    if !donor_can_give(donor, recipient) {
        return 0;
    }

    if donor == recipient {
        return 100;
    }

    match donor {
        BloodGroup::ONegative => 70,
        BloodGroup::OPositive => 80,
        _ => 85,
    }
}

/// Label-level scoring. Fails closed: any invalid label scores 0.
pub fn compatibility_score(donor: &str, recipient: &str) -> u8 {
    match (donor.parse::<BloodGroup>(), recipient.parse::<BloodGroup>()) {
        (Ok(d), Ok(r)) => score_pair(d, r),
        _ => 0,
    }
}
