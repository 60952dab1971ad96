//! Pure category score tables.
//!
//! Every function here is order-independent: swapping the two records never
//! changes the score. Order-sensitive prose lives in [`super::narrative`].

use crate::domain::{CitizenshipPolicy, MilitaryService, TaxTreaty, VotingStatus};

pub(crate) fn legal_status_score(a: CitizenshipPolicy, b: CitizenshipPolicy) -> u8 {
    use CitizenshipPolicy::{Conditional, No, Yes};

    match (a, b) {
        (Yes, Yes) => 100,
        (Yes, Conditional) | (Conditional, Yes) => 70,
        (Conditional, Conditional) => 50,
        (Yes, No) | (No, Yes) => 25,
        (Conditional, No) | (No, Conditional) => 15,
        (No, No) => 0,
    }
}

/// Step function of the absolute difference in required residency years.
/// A difference of up to two years still scores as a full match.
pub(crate) fn residency_score(a_years: u8, b_years: u8) -> u8 {
    match a_years.abs_diff(b_years) {
        0..=2 => 100,
        3..=5 => 70,
        6..=10 => 50,
        _ => 30,
    }
}

pub(crate) fn military_service_score(a: MilitaryService, b: MilitaryService) -> u8 {
    use MilitaryService::{Choice, DeJure, Infrequent, No, Yes};

    match (a, b) {
        (No, No) => 100,
        (No, DeJure) | (DeJure, No) => 80,
        (DeJure, DeJure) => 100,
        (No, Infrequent) | (Infrequent, No) => 85,
        (Infrequent, DeJure) | (DeJure, Infrequent) => 80,
        (No, Choice) | (Choice, No) => 90,
        (Choice, DeJure) | (DeJure, Choice) => 75,
        (No, Yes) | (Yes, No) => 40,
        (DeJure, Yes) | (Yes, DeJure) => 30,
        (Infrequent, Yes) | (Yes, Infrequent) => 35,
        (Choice, Yes) | (Yes, Choice) => 45,
        (Yes, Yes) => 20,
        // pairs the rule table never distinguished
        (Choice, Choice) | (Choice, Infrequent) | (Infrequent, Choice) | (Infrequent, Infrequent) => {
            50
        }
    }
}

pub(crate) fn tax_obligations_score(a: TaxTreaty, b: TaxTreaty) -> u8 {
    use TaxTreaty::{No, SeveralCountries, Yes};

    match (a, b) {
        (Yes, Yes) => 100,
        (Yes, No) | (No, Yes) => 60,
        (No, No) => 40,
        (SeveralCountries, _) | (_, SeveralCountries) => 80,
    }
}

pub(crate) fn voting_rights_score(a: VotingStatus, b: VotingStatus) -> u8 {
    use VotingStatus::{Universal, UniversalCompulsory};

    if a == b {
        100
    } else if matches!(
        (a, b),
        (Universal, UniversalCompulsory) | (UniversalCompulsory, Universal)
    ) {
        // voluntary vs compulsory is close but not a full match
        70
    } else {
        50
    }
}
