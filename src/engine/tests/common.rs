use crate::domain::{
    CitizenshipPolicy, CountryRecord, MilitaryService, TaxTreaty, VotingStatus,
};
use crate::engine::CompatibilityEngine;
use crate::registry::CountryRegistry;

pub(super) fn engine() -> CompatibilityEngine {
    CompatibilityEngine::new(CountryRegistry::builtin().expect("builtin data is valid"))
}

/// Minimal record with neutral defaults; tests override what they exercise.
pub(super) fn record(country_id: &str) -> CountryRecord {
    CountryRecord {
        country_id: country_id.to_string(),
        dual_citizenship: CitizenshipPolicy::Yes,
        residency_years: 5,
        military_service: MilitaryService::No,
        tax_treaty: TaxTreaty::Yes,
        voting_status: VotingStatus::Universal,
        citizenship_by_birth: None,
        citizenship_by_descent: None,
        citizenship_by_marriage: None,
        residency_criteria_blurb: None,
        taxation_type: None,
    }
}

pub(super) const ALL_MILITARY: [MilitaryService; 5] = [
    MilitaryService::Yes,
    MilitaryService::No,
    MilitaryService::DeJure,
    MilitaryService::Choice,
    MilitaryService::Infrequent,
];

pub(super) const ALL_VOTING: [VotingStatus; 4] = [
    VotingStatus::Universal,
    VotingStatus::UniversalCompulsory,
    VotingStatus::Selective,
    VotingStatus::Restricted,
];

pub(super) const ALL_CITIZENSHIP: [CitizenshipPolicy; 3] = [
    CitizenshipPolicy::Yes,
    CitizenshipPolicy::No,
    CitizenshipPolicy::Conditional,
];

pub(super) const ALL_TREATY: [TaxTreaty; 3] =
    [TaxTreaty::Yes, TaxTreaty::No, TaxTreaty::SeveralCountries];
