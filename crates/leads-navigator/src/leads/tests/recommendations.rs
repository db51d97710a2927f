use super::common::*;
use crate::leads::{recommend, recommendations_for, Domain, LeadsFramework, LeadsScoreSet};

#[test]
fn advanced_and_unset_levels_get_no_recommendation() {
    let framework = LeadsFramework::standard();

    for domain in Domain::ALL {
        for level in [0, 4, 5] {
            assert!(
                recommend(&framework, domain, level).is_none(),
                "{domain} at level {level}"
            );
        }
    }
}

#[test]
fn remedial_levels_get_a_recommendation_for_every_domain() {
    let framework = LeadsFramework::standard();

    for domain in Domain::ALL {
        for level in [1, 2, 3] {
            let recommendation =
                recommend(&framework, domain, level).expect("remedial level recommended");
            assert!(!recommendation.recommendation.is_empty());
            assert_eq!(recommendation.current_level, level);
            assert_eq!(recommendation.domain, framework.domain(domain).name);
        }
    }
}

#[test]
fn foundational_and_expand_tiers_differ() {
    let framework = LeadsFramework::standard();

    let foundational = recommend(&framework, Domain::LeadSelf, 2).expect("level 2");
    let same_tier = recommend(&framework, Domain::LeadSelf, 1).expect("level 1");
    let expand = recommend(&framework, Domain::LeadSelf, 3).expect("level 3");

    assert_eq!(foundational.recommendation, same_tier.recommendation);
    assert_ne!(foundational.recommendation, expand.recommendation);
    assert!(foundational.recommendation.contains("360-degree feedback"));
    assert!(expand.recommendation.contains("peer coaching"));
}

#[test]
fn score_set_recommendations_follow_catalog_order() {
    let framework = LeadsFramework::standard();

    let list = recommendations_for(&framework, &mixed_score_set());

    let domains: Vec<_> = list.iter().map(|item| item.domain).collect();
    assert_eq!(domains, vec!["Engage Others", "Systems Transformation"]);
    assert_eq!(list[0].current_level, 3);
    assert_eq!(list[1].current_level, 2);
}

#[test]
fn unassessed_candidates_get_no_recommendations() {
    let framework = LeadsFramework::standard();

    assert!(recommendations_for(&framework, &LeadsScoreSet::default()).is_empty());
}
