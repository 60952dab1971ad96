use serde::{Deserialize, Serialize};

/// Whether a country permits holding a second citizenship (or grants one at birth).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CitizenshipPolicy {
    Yes,
    No,
    Conditional,
}

/// Conscription posture of a country toward its citizens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MilitaryService {
    Yes,
    No,
    #[serde(rename = "De jure")]
    DeJure,
    Choice,
    Infrequent,
}

/// Breadth of a country's double-taxation treaty network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxTreaty {
    Yes,
    No,
    #[serde(rename = "Several countries")]
    SeveralCountries,
}

/// Suffrage regime applying to citizens, including those abroad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VotingStatus {
    Universal,
    #[serde(rename = "Universal and Compulsory")]
    UniversalCompulsory,
    Selective,
    Restricted,
}

impl VotingStatus {
    pub const fn is_compulsory(self) -> bool {
        matches!(self, VotingStatus::UniversalCompulsory)
    }

    pub const fn is_limited(self) -> bool {
        matches!(self, VotingStatus::Selective | VotingStatus::Restricted)
    }
}

/// Basis on which a country levies personal income tax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxationType {
    #[serde(rename = "Residence-based")]
    ResidenceBased,
    Territorial,
    #[serde(rename = "No personal income tax")]
    NoPersonalIncomeTax,
    #[serde(rename = "Citizenship-based")]
    CitizenshipBased,
}

impl TaxationType {
    pub const fn label(self) -> &'static str {
        match self {
            TaxationType::ResidenceBased => "residence-based taxation",
            TaxationType::Territorial => "territorial taxation",
            TaxationType::NoPersonalIncomeTax => "no personal income tax",
            TaxationType::CitizenshipBased => "citizenship-based taxation",
        }
    }
}

/// Immutable attribute snapshot for one country, as loaded from the registry data.
///
/// The required fields drive scoring; the optional fields only enrich the generated
/// narrative and may be absent on older records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryRecord {
    pub country_id: String,
    pub dual_citizenship: CitizenshipPolicy,
    pub residency_years: u8,
    pub military_service: MilitaryService,
    pub tax_treaty: TaxTreaty,
    pub voting_status: VotingStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citizenship_by_birth: Option<CitizenshipPolicy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citizenship_by_descent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citizenship_by_marriage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub residency_criteria_blurb: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taxation_type: Option<TaxationType>,
}

impl CountryRecord {
    /// Citizenship-based regimes (the US in practice) tax worldwide income
    /// regardless of residence and get their own narrative branch.
    pub fn taxes_by_citizenship(&self) -> bool {
        self.country_id == "US"
    }
}

/// The five compared categories, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CategoryKind {
    LegalStatus,
    Residency,
    MilitaryService,
    TaxObligations,
    VotingRights,
}

impl CategoryKind {
    pub const fn ordered() -> [CategoryKind; 5] {
        [
            CategoryKind::LegalStatus,
            CategoryKind::Residency,
            CategoryKind::MilitaryService,
            CategoryKind::TaxObligations,
            CategoryKind::VotingRights,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            CategoryKind::LegalStatus => "Legal Status",
            CategoryKind::Residency => "Residency Requirements",
            CategoryKind::MilitaryService => "Military Service",
            CategoryKind::TaxObligations => "Tax Obligations",
            CategoryKind::VotingRights => "Voting Rights",
        }
    }
}
