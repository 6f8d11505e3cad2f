use crate::models::{BloodGroup, CompatibilityReport, DemandLevel, DonorStats};

const INVALID_GROUP_MESSAGE: &str = "Invalid blood group";

/// Blood groups that are rare in the general population. This is a fixed
/// medical classification, independent of any runtime donor pool.
const RARE_GROUPS: [BloodGroup; 4] = [
    BloodGroup::AbNegative,
    BloodGroup::BNegative,
    BloodGroup::ANegative,
    BloodGroup::ONegative,
];

/// Eligible donor groups for each recipient, in the order the transfusion
/// table defines them.
///
/// Every entry contains the recipient itself and `O-`; `AB+` accepts the full
/// universe and `O-` accepts only itself. The table is a compile-time constant
/// so immutability and totality over the 8 groups are static properties.
pub const fn compatible_donors(recipient: BloodGroup) -> &'static [BloodGroup] {
    use BloodGroup::{
        ANegative, APositive, AbNegative, AbPositive, BNegative, BPositive, ONegative, OPositive,
    };

    match recipient {
        APositive => &[APositive, ANegative, OPositive, ONegative],
        ANegative => &[ANegative, ONegative],
        BPositive => &[BPositive, BNegative, OPositive, ONegative],
        BNegative => &[BNegative, ONegative],
        AbPositive => &[
            APositive, ANegative, BPositive, BNegative, AbPositive, AbNegative, OPositive,
            ONegative,
        ],
        AbNegative => &[ANegative, BNegative, AbNegative, ONegative],
        OPositive => &[OPositive, ONegative],
        ONegative => &[ONegative],
    }
}

/// All valid blood groups, in canonical order.
pub fn all_blood_groups() -> &'static [BloodGroup; 8] {
    &BloodGroup::ALL
}

/// Strict membership test against the 8 canonical labels. Case-sensitive,
/// no trimming.
pub fn is_valid_group(label: &str) -> bool {
    label.parse::<BloodGroup>().is_ok()
}

/// Whether `donor` may give blood to `recipient`.
///
/// Not symmetric (`O-` can give to `AB+`, not the reverse) but reflexive:
/// every group's matrix entry contains itself.
pub fn donor_can_give(donor: BloodGroup, recipient: BloodGroup) -> bool {
    compatible_donors(recipient).contains(&donor)
}

/// Label-level compatibility predicate. Fails closed: any invalid label
/// yields `false`, never an error.
pub fn is_compatible(donor: &str, recipient: &str) -> bool {
    match (donor.parse::<BloodGroup>(), recipient.parse::<BloodGroup>()) {
        (Ok(d), Ok(r)) => donor_can_give(d, r),
        _ => false,
    }
}

/// Everything a recipient-side caller wants to know about a blood group:
/// which groups can donate to it, and how it is classified.
pub fn compatible_donor_groups(recipient: &str) -> CompatibilityReport {
    let Ok(group) = recipient.parse::<BloodGroup>() else {
        return CompatibilityReport {
            recipient: recipient.to_string(),
            valid: false,
            compatible_donors: Vec::new(),
            count: None,
            is_universal_receiver: None,
            is_rare_recipient: None,
            message: Some(INVALID_GROUP_MESSAGE.to_string()),
        };
    };

    let donors = compatible_donors(group);

    CompatibilityReport {
        recipient: recipient.to_string(),
        valid: true,
        compatible_donors: donors.to_vec(),
        count: Some(donors.len()),
        is_universal_receiver: Some(group == BloodGroup::AbPositive),
        is_rare_recipient: Some(RARE_GROUPS.contains(&group)),
        message: None,
    }
}

/// All recipient groups `donor` may serve, in canonical order.
///
/// This is the inverse of the matrix: `r` is in the result iff `donor` is in
/// `compatible_donors(r)`.
pub fn can_donate_to(donor: BloodGroup) -> Vec<BloodGroup> {
    BloodGroup::ALL
        .into_iter()
        .filter(|recipient| donor_can_give(donor, *recipient))
        .collect()
}

/// Label-level donor-side query. Invalid labels yield an empty list.
pub fn groups_donor_can_serve(donor: &str) -> Vec<BloodGroup> {
    match donor.parse::<BloodGroup>() {
        Ok(group) => can_donate_to(group),
        Err(_) => Vec::new(),
    }
}

/// Donor-side statistics: served recipients, rarity, and demand tier.
///
/// Demand is resolved by priority: Critical for the universal donor (`O-`),
/// else High for rare groups, else Normal.
pub fn donor_stats(donor: &str) -> DonorStats {
    let Ok(group) = donor.parse::<BloodGroup>() else {
        return DonorStats {
            blood_group: donor.to_string(),
            valid: false,
            can_donate_to: Vec::new(),
            can_donate_to_count: None,
            is_universal_donor: None,
            is_rare: None,
            demand_level: None,
            message: Some(INVALID_GROUP_MESSAGE.to_string()),
        };
    };

    let served = can_donate_to(group);
    let is_universal = group == BloodGroup::ONegative;
    let is_rare = RARE_GROUPS.contains(&group);

    let demand_level = if is_universal {
        DemandLevel::Critical
    } else if is_rare {
        DemandLevel::High
    } else {
        DemandLevel::Normal
    };

    DonorStats {
        blood_group: donor.to_string(),
        valid: true,
        can_donate_to_count: Some(served.len()),
        can_donate_to: served,
        is_universal_donor: Some(is_universal),
        is_rare: Some(is_rare),
        demand_level: Some(demand_level),
        message: None,
    }
}
