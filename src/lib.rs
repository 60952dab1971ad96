//! Rules engine scoring how compatible two countries' citizenship regimes are.
//!
//! The crate compares two registered [`domain::CountryRecord`]s across five
//! weighted categories (legal status, residency, military service, tax
//! obligations, voting rights) and produces a deterministic 0-100 score per
//! category plus explanatory text, aggregated into one overall score. All of
//! it is pure and synchronous: the registry is loaded once and read-only, and
//! every comparison is fully determined by its two inputs.
//!
//! ```
//! use citizen_compat::{CompatibilityEngine, CountryRegistry};
//!
//! let registry = CountryRegistry::builtin().expect("builtin data is valid");
//! let engine = CompatibilityEngine::new(registry);
//! let result = engine.compare("USA", "Canada").expect("both registered");
//! assert_eq!(result.overall_score, 92);
//! ```

pub mod domain;
pub mod engine;
pub mod registry;

pub use domain::{
    CategoryKind, CitizenshipPolicy, CountryRecord, MilitaryService, TaxTreaty, TaxationType,
    VotingStatus,
};
pub use engine::{
    AggregationPolicy, CategoryAssessment, CompatibilityEngine, CompatibilityError,
    CompatibilityResult, EnginePolicy,
};
pub use registry::{CountryRegistry, RegistryError};
