use std::collections::BTreeMap;

use crate::domain::CountryRecord;

/// Validation errors raised while loading registry data.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("registry data is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid record for {name}: {reason}")]
    InvalidRecord { name: String, reason: String },
    #[error("registry data contains no countries")]
    Empty,
}

const BUILTIN_DATA: &str = include_str!("data/countries.json");

/// Read-only table of country records keyed by display name.
///
/// Records are validated once at load so the scorers never see malformed data.
/// The backing `BTreeMap` keeps [`CountryRegistry::names`] in ascending order
/// without re-sorting per call.
#[derive(Debug, Clone)]
pub struct CountryRegistry {
    records: BTreeMap<String, CountryRecord>,
}

impl CountryRegistry {
    /// Load the registry embedded in the crate. Intended to be called once per
    /// process and shared read-only afterwards.
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::from_json(BUILTIN_DATA)
    }

    /// Parse and validate a registry document. The whole load is rejected on
    /// the first invalid record rather than dropping it silently.
    pub fn from_json(data: &str) -> Result<Self, RegistryError> {
        let records: BTreeMap<String, CountryRecord> = serde_json::from_str(data)?;

        if records.is_empty() {
            return Err(RegistryError::Empty);
        }

        for (name, record) in &records {
            validate_record(name, record)?;
        }

        tracing::debug!(countries = records.len(), "country registry loaded");

        Ok(Self { records })
    }

    /// Exact-match, case-sensitive lookup.
    pub fn lookup(&self, name: &str) -> Option<&CountryRecord> {
        self.records.get(name)
    }

    /// All country names in ascending order, for selection lists.
    pub fn names(&self) -> Vec<&str> {
        self.records.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn validate_record(name: &str, record: &CountryRecord) -> Result<(), RegistryError> {
    if name.trim().is_empty() {
        return Err(RegistryError::InvalidRecord {
            name: name.to_string(),
            reason: "country name is blank".to_string(),
        });
    }

    let id = &record.country_id;
    if id.len() != 2 || !id.bytes().all(|byte| byte.is_ascii_uppercase()) {
        return Err(RegistryError::InvalidRecord {
            name: name.to_string(),
            reason: format!("country id {id:?} is not a 2-letter uppercase code"),
        });
    }

    Ok(())
}
