//! Narrative generation for each compared category.
//!
//! Unlike the score tables, these functions are order-sensitive: the second
//! country is the destination the reader is considering moving to, and the
//! prose is phrased accordingly.

use crate::domain::{CitizenshipPolicy, CountryRecord, MilitaryService, TaxTreaty, VotingStatus};

/// Human-readable output for one category: a summary sentence plus optional
/// follow-on bullets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CategoryNarrative {
    pub description: String,
    pub implications: Vec<String>,
}

pub(crate) fn legal_status(
    origin_name: &str,
    origin: &CountryRecord,
    destination_name: &str,
    destination: &CountryRecord,
) -> CategoryNarrative {
    use CitizenshipPolicy::{Conditional, No, Yes};

    let description = match (origin.dual_citizenship, destination.dual_citizenship) {
        (Yes, Yes) => format!("Both {origin_name} and {destination_name} permit dual citizenship."),
        (No, No) => format!(
            "Neither {origin_name} nor {destination_name} permits dual citizenship. \
             You would have to renounce one citizenship to acquire the other."
        ),
        (No, _) => format!(
            "{origin_name} does not permit dual citizenship. You would need to renounce \
             your {destination_name} citizenship to remain a citizen of {origin_name}."
        ),
        (_, No) => format!(
            "{destination_name} does not permit dual citizenship. You would need to renounce \
             your {origin_name} citizenship to become a citizen of {destination_name}."
        ),
        (Conditional, Conditional) => format!(
            "Both {origin_name} and {destination_name} allow dual citizenship only under \
             certain conditions."
        ),
        (Conditional, Yes) => format!(
            "{origin_name} allows dual citizenship only under certain conditions, \
             while {destination_name} fully permits it."
        ),
        (Yes, Conditional) => format!(
            "{destination_name} allows dual citizenship only under certain conditions, \
             while {origin_name} fully permits it."
        ),
    };

    let mut implications = Vec::new();

    if let (Some(origin_descent), Some(destination_descent)) = (
        origin.citizenship_by_descent.as_deref(),
        destination.citizenship_by_descent.as_deref(),
    ) {
        if origin_descent != destination_descent {
            implications.push(format!(
                "Citizenship by descent differs: {origin_name} - {origin_descent}, \
                 {destination_name} - {destination_descent}."
            ));
        }
    }

    if let (Some(origin_marriage), Some(destination_marriage)) = (
        origin.citizenship_by_marriage.as_deref(),
        destination.citizenship_by_marriage.as_deref(),
    ) {
        if origin_marriage != destination_marriage {
            implications.push(format!(
                "Citizenship by marriage differs: {origin_name} grants eligibility after \
                 {origin_marriage}, while {destination_name} grants it after {destination_marriage}."
            ));
        }
    }

    CategoryNarrative {
        description,
        implications,
    }
}

pub(crate) fn residency(
    origin_name: &str,
    origin: &CountryRecord,
    destination_name: &str,
    destination: &CountryRecord,
) -> CategoryNarrative {
    let mut description = if origin.residency_years == destination.residency_years {
        format!(
            "Both countries require {} years of residence before naturalization.",
            origin.residency_years
        )
    } else {
        format!(
            "{origin_name} requires {} years of residence before naturalization, \
             while {destination_name} requires {} years.",
            origin.residency_years, destination.residency_years
        )
    };

    if let Some(blurb) = origin.residency_criteria_blurb.as_deref() {
        description.push_str(&format!(" {origin_name}: {blurb}"));
    }
    if let Some(blurb) = destination.residency_criteria_blurb.as_deref() {
        description.push_str(&format!(" {destination_name}: {blurb}"));
    }

    // The description already carries the full picture for this category.
    CategoryNarrative {
        description,
        implications: Vec::new(),
    }
}

const fn service_phrase(status: MilitaryService) -> &'static str {
    match status {
        MilitaryService::Yes => "has mandatory military service for citizens",
        MilitaryService::No => "does not require military service",
        MilitaryService::DeJure => "has military service requirements on paper but rarely enforces them",
        MilitaryService::Choice => "offers a choice between military and alternative service",
        MilitaryService::Infrequent => "has infrequent or limited conscription",
    }
}

pub(crate) fn military_service(
    origin_name: &str,
    origin: &CountryRecord,
    destination_name: &str,
    destination: &CountryRecord,
) -> CategoryNarrative {
    let description = if origin.military_service == destination.military_service {
        format!(
            "{origin_name} and {destination_name} share the same policy: each {}.",
            service_phrase(origin.military_service)
        )
    } else {
        format!(
            "{origin_name} {}, while {destination_name} {}. Holding both citizenships \
             could create conflicting service obligations.",
            service_phrase(origin.military_service),
            service_phrase(destination.military_service)
        )
    };

    let mut implications = Vec::new();
    match (origin.military_service, destination.military_service) {
        (MilitaryService::Yes, MilitaryService::Yes) => {
            implications.push(
                "Both countries require military service. You may face competing \
                 obligations, which could create significant legal complications."
                    .to_string(),
            );
        }
        (MilitaryService::Yes, _) => {
            implications.push(format!(
                "{origin_name} requires military service; your obligations there may be \
                 affected by taking up a second citizenship."
            ));
        }
        (_, MilitaryService::Yes) => {
            implications.push(format!(
                "{destination_name} requires military service; becoming a citizen would \
                 expose you to new service obligations."
            ));
        }
        _ => {}
    }

    CategoryNarrative {
        description,
        implications,
    }
}

pub(crate) fn tax_obligations(
    origin_name: &str,
    origin: &CountryRecord,
    destination_name: &str,
    destination: &CountryRecord,
) -> CategoryNarrative {
    use crate::domain::TaxationType;

    let us_involved = origin.taxes_by_citizenship() || destination.taxes_by_citizenship();

    let description = if us_involved {
        let (other_name, other) = if origin.taxes_by_citizenship() {
            (destination_name, destination)
        } else {
            (origin_name, origin)
        };

        let treaty_clause = match other.tax_treaty {
            TaxTreaty::Yes | TaxTreaty::SeveralCountries => {
                format!("{other_name}'s tax treaty coverage helps limit double taxation")
            }
            TaxTreaty::No => format!(
                "{other_name} lacks a comprehensive treaty, so double taxation is a real risk"
            ),
        };

        format!(
            "The USA taxes citizens on worldwide income regardless of residence, \
             while {other_name} generally taxes based on residence and/or source of \
             income; {treaty_clause}."
        )
    } else {
        match (origin.taxation_type, destination.taxation_type) {
            (Some(origin_type), Some(destination_type)) if origin_type == destination_type => {
                format!("Both {origin_name} and {destination_name} apply {}.", origin_type.label())
            }
            (Some(origin_type), Some(destination_type)) => format!(
                "{origin_name} applies {}, while {destination_name} applies {}.",
                origin_type.label(),
                destination_type.label()
            ),
            (Some(origin_type), None) => {
                format!("{origin_name} applies {}.", origin_type.label())
            }
            (None, Some(destination_type)) => {
                format!("{destination_name} applies {}.", destination_type.label())
            }
            (None, None) => format!(
                "Tax treatment between {origin_name} and {destination_name} depends on \
                 each country's treaty network."
            ),
        }
    };

    let mut implications = Vec::new();

    for (name, record) in [(origin_name, origin), (destination_name, destination)] {
        if record.taxation_type == Some(TaxationType::NoPersonalIncomeTax) {
            implications.push(format!(
                "{name} levies no personal income tax, which can reduce your overall tax burden."
            ));
        }
    }

    if us_involved {
        let (other_name, other) = if origin.taxes_by_citizenship() {
            (destination_name, destination)
        } else {
            (origin_name, origin)
        };

        match other.tax_treaty {
            TaxTreaty::Yes | TaxTreaty::SeveralCountries => implications.push(format!(
                "The USA and {other_name} have tax treaty coverage that may help prevent \
                 double taxation and provide certain tax benefits."
            )),
            TaxTreaty::No => implications.push(format!(
                "The USA and {other_name} do not share a comprehensive tax treaty, which \
                 may increase the risk of double taxation."
            )),
        }

        implications.push(
            "US citizens must file annual tax returns regardless of where they live, and \
             may need to report foreign bank accounts through FBAR and FATCA."
                .to_string(),
        );
    }

    CategoryNarrative {
        description,
        implications,
    }
}

const fn voting_phrase(status: VotingStatus) -> &'static str {
    match status {
        VotingStatus::UniversalCompulsory => "mandatory",
        VotingStatus::Universal => "optional",
        VotingStatus::Selective | VotingStatus::Restricted => "restricted",
    }
}

pub(crate) fn voting_rights(
    origin_name: &str,
    origin: &CountryRecord,
    destination_name: &str,
    destination: &CountryRecord,
) -> CategoryNarrative {
    let description = if origin.voting_status == destination.voting_status {
        format!(
            "Voting in both {origin_name} and {destination_name} is {} for citizens.",
            voting_phrase(origin.voting_status)
        )
    } else {
        format!(
            "Voting in {origin_name} is {} for citizens, while voting in \
             {destination_name} is {}.",
            voting_phrase(origin.voting_status),
            voting_phrase(destination.voting_status)
        )
    };

    let mut implications = Vec::new();

    if destination.voting_status.is_compulsory() && !origin.voting_status.is_compulsory() {
        implications.push(format!(
            "Moving to {destination_name} would make you legally required to vote in its \
             elections."
        ));
    }

    if origin.voting_status.is_limited() && !destination.voting_status.is_limited() {
        implications.push(format!(
            "{origin_name} grants more limited voting rights than {destination_name}."
        ));
    } else if destination.voting_status.is_limited() && !origin.voting_status.is_limited() {
        implications.push(format!(
            "{destination_name} grants more limited voting rights than {origin_name}."
        ));
    }

    CategoryNarrative {
        description,
        implications,
    }
}
