//! Compatibility engine: the single entry point the presentation layer calls.
//!
//! Scoring is split in two per category: an order-independent score table in
//! [`scoring`] and order-dependent prose in [`narrative`]. The engine walks the
//! five categories in presentation order and aggregates the scores under the
//! configured policy.

mod narrative;
mod scoring;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

use crate::domain::{CategoryKind, CountryRecord};
use crate::registry::CountryRegistry;

/// Errors surfaced to the caller instead of panicking into the UI layer.
#[derive(Debug, thiserror::Error)]
pub enum CompatibilityError {
    #[error("unknown country: {0}")]
    UnknownCountry(String),
}

/// How the five category scores collapse into the overall score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregationPolicy {
    /// Round-half-up mean of the five categories. The canonical policy.
    #[default]
    EqualWeight,
    /// Fixed 35/20/15/20/10 weighting for legal status, residency, military
    /// service, tax obligations, and voting rights respectively.
    CategoryWeighted,
}

/// Engine configuration. A constructed engine applies exactly one policy;
/// modes are never mixed within a result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnginePolicy {
    pub aggregation: AggregationPolicy,
}

/// One category's contribution to a comparison, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryAssessment {
    pub category: CategoryKind,
    pub category_label: &'static str,
    pub score: u8,
    pub description: String,
    pub implications: Vec<String>,
}

/// Full output of one comparison. Transient: recomputed on every selection
/// change and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompatibilityResult {
    pub origin: String,
    pub destination: String,
    pub overall_score: u8,
    pub categories: Vec<CategoryAssessment>,
}

impl CompatibilityResult {
    pub fn category(&self, kind: CategoryKind) -> Option<&CategoryAssessment> {
        self.categories
            .iter()
            .find(|assessment| assessment.category == kind)
    }
}

/// Stateless comparator over a read-only registry.
#[derive(Debug, Clone)]
pub struct CompatibilityEngine {
    registry: CountryRegistry,
    policy: EnginePolicy,
}

impl CompatibilityEngine {
    pub fn new(registry: CountryRegistry) -> Self {
        Self::with_policy(registry, EnginePolicy::default())
    }

    pub fn with_policy(registry: CountryRegistry, policy: EnginePolicy) -> Self {
        Self { registry, policy }
    }

    pub fn registry(&self) -> &CountryRegistry {
        &self.registry
    }

    pub fn policy(&self) -> EnginePolicy {
        self.policy
    }

    /// Compare two registered countries by display name. Names are matched
    /// exactly and case-sensitively; an unknown name is an error, never a
    /// zeroed score.
    pub fn compare(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<CompatibilityResult, CompatibilityError> {
        let origin_record = self
            .registry
            .lookup(origin)
            .ok_or_else(|| CompatibilityError::UnknownCountry(origin.to_string()))?;
        let destination_record = self
            .registry
            .lookup(destination)
            .ok_or_else(|| CompatibilityError::UnknownCountry(destination.to_string()))?;

        // Picking the same country twice is valid input. The raw tables score
        // some matching pairs below the ceiling (No/No dual citizenship,
        // Yes/Yes conscription), so identity pins every category to it.
        let identity = origin == destination;

        let categories: Vec<CategoryAssessment> = CategoryKind::ordered()
            .into_iter()
            .map(|kind| {
                let mut assessment =
                    assess_category(kind, origin, origin_record, destination, destination_record);
                if identity {
                    assessment.score = 100;
                }
                assessment
            })
            .collect();

        let overall_score = aggregate(self.policy.aggregation, &categories);

        tracing::debug!(origin, destination, overall_score, "compatibility computed");

        Ok(CompatibilityResult {
            origin: origin.to_string(),
            destination: destination.to_string(),
            overall_score,
            categories,
        })
    }
}

fn assess_category(
    kind: CategoryKind,
    origin_name: &str,
    origin: &CountryRecord,
    destination_name: &str,
    destination: &CountryRecord,
) -> CategoryAssessment {
    let (score, narrative) = match kind {
        CategoryKind::LegalStatus => (
            scoring::legal_status_score(origin.dual_citizenship, destination.dual_citizenship),
            narrative::legal_status(origin_name, origin, destination_name, destination),
        ),
        CategoryKind::Residency => (
            scoring::residency_score(origin.residency_years, destination.residency_years),
            narrative::residency(origin_name, origin, destination_name, destination),
        ),
        CategoryKind::MilitaryService => (
            scoring::military_service_score(origin.military_service, destination.military_service),
            narrative::military_service(origin_name, origin, destination_name, destination),
        ),
        CategoryKind::TaxObligations => (
            scoring::tax_obligations_score(origin.tax_treaty, destination.tax_treaty),
            narrative::tax_obligations(origin_name, origin, destination_name, destination),
        ),
        CategoryKind::VotingRights => (
            scoring::voting_rights_score(origin.voting_status, destination.voting_status),
            narrative::voting_rights(origin_name, origin, destination_name, destination),
        ),
    };

    CategoryAssessment {
        category: kind,
        category_label: kind.label(),
        score,
        description: narrative.description,
        implications: narrative.implications,
    }
}

const CATEGORY_WEIGHTS: [(CategoryKind, u32); 5] = [
    (CategoryKind::LegalStatus, 35),
    (CategoryKind::Residency, 20),
    (CategoryKind::MilitaryService, 15),
    (CategoryKind::TaxObligations, 20),
    (CategoryKind::VotingRights, 10),
];

fn aggregate(policy: AggregationPolicy, categories: &[CategoryAssessment]) -> u8 {
    let overall = match policy {
        AggregationPolicy::EqualWeight => {
            let sum: u32 = categories
                .iter()
                .map(|assessment| assessment.score as u32)
                .sum();
            sum as f64 / categories.len() as f64
        }
        AggregationPolicy::CategoryWeighted => {
            let weighted: u32 = CATEGORY_WEIGHTS
                .iter()
                .filter_map(|(kind, weight)| {
                    categories
                        .iter()
                        .find(|assessment| assessment.category == *kind)
                        .map(|assessment| assessment.score as u32 * weight)
                })
                .sum();
            weighted as f64 / 100.0
        }
    };

    overall.round().clamp(0.0, 100.0) as u8
}
