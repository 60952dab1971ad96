use super::common::engine;
use crate::domain::CategoryKind;
use crate::engine::{AggregationPolicy, CompatibilityEngine, CompatibilityError, EnginePolicy};
use crate::registry::CountryRegistry;

#[test]
fn usa_canada_worked_example() {
    let result = engine().compare("USA", "Canada").expect("both registered");

    let expectations = [
        (CategoryKind::LegalStatus, 100),
        (CategoryKind::Residency, 100),
        (CategoryKind::MilitaryService, 80),
        (CategoryKind::TaxObligations, 80),
        (CategoryKind::VotingRights, 100),
    ];
    for (kind, expected) in expectations {
        let assessment = result.category(kind).expect("category present");
        assert_eq!(assessment.score, expected, "unexpected score for {kind:?}");
    }

    assert_eq!(result.overall_score, 92);
}

#[test]
fn japan_usa_reflects_the_legal_penalty() {
    let result = engine().compare("Japan", "USA").expect("both registered");

    let legal = result.category(CategoryKind::LegalStatus).expect("present");
    assert_eq!(legal.score, 25);
    assert!(result.overall_score < 90);
    assert!(result
        .categories
        .iter()
        .any(|assessment| assessment.score > legal.score));
}

#[test]
fn self_comparison_hits_every_identity_ceiling() {
    let engine = engine();
    let names: Vec<String> = engine
        .registry()
        .names()
        .iter()
        .map(|name| name.to_string())
        .collect();

    for name in names {
        let result = engine.compare(&name, &name).expect("registered");
        for assessment in &result.categories {
            assert_eq!(
                assessment.score, 100,
                "{name}: {:?} below ceiling",
                assessment.category
            );
        }
        assert_eq!(result.overall_score, 100, "{name}: overall below ceiling");
    }
}

#[test]
fn all_pairs_stay_in_range_under_both_policies() {
    for policy in [AggregationPolicy::EqualWeight, AggregationPolicy::CategoryWeighted] {
        let engine = CompatibilityEngine::with_policy(
            CountryRegistry::builtin().expect("builtin data is valid"),
            EnginePolicy {
                aggregation: policy,
            },
        );
        let names: Vec<String> = engine
            .registry()
            .names()
            .iter()
            .map(|name| name.to_string())
            .collect();

        for origin in &names {
            for destination in &names {
                let result = engine.compare(origin, destination).expect("registered");
                assert!(result.overall_score <= 100);
                assert_eq!(result.categories.len(), 5);
                for assessment in &result.categories {
                    assert!(assessment.score <= 100);
                }
            }
        }
    }
}

#[test]
fn category_order_is_stable() {
    let result = engine().compare("Canada", "Japan").expect("both registered");

    let kinds: Vec<CategoryKind> = result
        .categories
        .iter()
        .map(|assessment| assessment.category)
        .collect();
    assert_eq!(kinds, CategoryKind::ordered().to_vec());
}

#[test]
fn weighted_policy_applies_fixed_weights() {
    let engine = CompatibilityEngine::with_policy(
        CountryRegistry::builtin().expect("builtin data is valid"),
        EnginePolicy {
            aggregation: AggregationPolicy::CategoryWeighted,
        },
    );

    // USA/Canada: 100*35 + 100*20 + 80*15 + 80*20 + 100*10 = 9300
    let result = engine.compare("USA", "Canada").expect("both registered");
    assert_eq!(result.overall_score, 93);
}

#[test]
fn weighted_policy_rounds_half_up() {
    let data = r#"{
        "Alpha": {
            "countryId": "AA",
            "dualCitizenship": "Yes",
            "residencyYears": 5,
            "militaryService": "Choice",
            "taxTreaty": "Several countries",
            "votingStatus": "Universal"
        },
        "Beta": {
            "countryId": "BB",
            "dualCitizenship": "No",
            "residencyYears": 5,
            "militaryService": "Yes",
            "taxTreaty": "Yes",
            "votingStatus": "Universal"
        }
    }"#;
    let engine = CompatibilityEngine::with_policy(
        CountryRegistry::from_json(data).expect("fixture data is valid"),
        EnginePolicy {
            aggregation: AggregationPolicy::CategoryWeighted,
        },
    );

    // 25*35 + 100*20 + 45*15 + 80*20 + 100*10 = 6150, i.e. 61.5 rounds to 62
    let result = engine.compare("Alpha", "Beta").expect("registered");
    assert_eq!(result.overall_score, 62);
}

#[test]
fn unknown_country_is_an_error_not_a_score() {
    let engine = engine();

    match engine.compare("Atlantis", "USA") {
        Err(CompatibilityError::UnknownCountry(name)) => assert_eq!(name, "Atlantis"),
        other => panic!("expected unknown country, got {other:?}"),
    }

    match engine.compare("USA", "Atlantis") {
        Err(CompatibilityError::UnknownCountry(name)) => assert_eq!(name, "Atlantis"),
        other => panic!("expected unknown country, got {other:?}"),
    }
}
