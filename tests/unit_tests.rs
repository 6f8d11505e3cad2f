// Unit tests for Hemomatch

use hemomatch::core::{
    all_blood_groups, can_donate_to, compatible_donor_groups, compatible_donors, donor_stats,
    is_compatible, is_valid_group, score_pair,
};
use hemomatch::models::{BloodGroup, DemandLevel};

#[test]
fn test_canonical_group_order_is_stable() {
    let labels: Vec<&str> = all_blood_groups().iter().map(|g| g.as_str()).collect();
    assert_eq!(labels, vec!["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"]);
}

#[test]
fn test_validation_rejects_anything_but_exact_labels() {
    for label in all_blood_groups().iter().map(|g| g.as_str()) {
        assert!(is_valid_group(label));
    }

    assert!(!is_valid_group("a+"));
    assert!(!is_valid_group("A +"));
    assert!(!is_valid_group("A+\n"));
    assert!(!is_valid_group(""));
    assert!(!is_valid_group("AB"));
}

#[test]
fn test_compatibility_is_reflexive() {
    for group in BloodGroup::ALL {
        assert!(
            is_compatible(group.as_str(), group.as_str()),
            "{group} not compatible with itself"
        );
    }
}

#[test]
fn test_matrix_and_inverse_agree() {
    // r in can_donate_to(d)  <=>  d in compatible_donors(r)  <=>  is_compatible(d, r)
    for donor in BloodGroup::ALL {
        for recipient in BloodGroup::ALL {
            let forward = compatible_donors(recipient).contains(&donor);
            let inverse = can_donate_to(donor).contains(&recipient);
            let predicate = is_compatible(donor.as_str(), recipient.as_str());

            assert_eq!(forward, inverse, "{donor} -> {recipient}");
            assert_eq!(forward, predicate, "{donor} -> {recipient}");
        }
    }
}

#[test]
fn test_score_positive_exactly_for_compatible_pairs() {
    for donor in BloodGroup::ALL {
        for recipient in BloodGroup::ALL {
            let score = score_pair(donor, recipient);
            assert!(matches!(score, 0 | 70 | 80 | 85 | 100));
            assert_eq!(
                score > 0,
                is_compatible(donor.as_str(), recipient.as_str()),
                "{donor} -> {recipient}"
            );
        }
    }
}

#[test]
fn test_recipient_report_literals() {
    let report = compatible_donor_groups("A+");
    let labels: Vec<&str> = report.compatible_donors.iter().map(|g| g.as_str()).collect();
    assert_eq!(labels, vec!["A+", "A-", "O+", "O-"]);
    assert_eq!(report.count, Some(4));
    assert_eq!(report.is_universal_receiver, Some(false));
    assert_eq!(report.is_rare_recipient, Some(false));

    let universal = compatible_donor_groups("AB+");
    assert_eq!(universal.compatible_donors.len(), 8);
    assert_eq!(universal.is_universal_receiver, Some(true));
}

#[test]
fn test_rare_recipient_classification_is_fixed() {
    for group in BloodGroup::ALL {
        let report = compatible_donor_groups(group.as_str());
        let expect_rare = matches!(
            group,
            BloodGroup::AbNegative
                | BloodGroup::BNegative
                | BloodGroup::ANegative
                | BloodGroup::ONegative
        );
        assert_eq!(report.is_rare_recipient, Some(expect_rare), "{group}");
    }
}

#[test]
fn test_donor_stats_tiers() {
    let critical = donor_stats("O-");
    assert_eq!(critical.can_donate_to.len(), 8);
    assert_eq!(critical.is_universal_donor, Some(true));
    assert_eq!(critical.demand_level, Some(DemandLevel::Critical));

    let high = donor_stats("AB-");
    assert_eq!(high.is_universal_donor, Some(false));
    assert_eq!(high.is_rare, Some(true));
    assert_eq!(high.demand_level, Some(DemandLevel::High));

    let normal = donor_stats("O+");
    assert_eq!(normal.is_rare, Some(false));
    assert_eq!(normal.demand_level, Some(DemandLevel::Normal));
}
