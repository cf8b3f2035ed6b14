//! Categorical field values
//!
//! Serialized labels match the published dataset exactly (e.g. "On Hold",
//! "TS/SCI"), so downstream loaders can rely on them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Contract pricing arrangement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContractType {
    #[serde(rename = "Firm-Fixed-Price")]
    FirmFixedPrice,
    #[serde(rename = "Cost-Plus-Fixed-Fee")]
    CostPlusFixedFee,
    #[serde(rename = "Time-and-Materials")]
    TimeAndMaterials,
    #[serde(rename = "Indefinite-Delivery")]
    IndefiniteDelivery,
    #[serde(rename = "Cost-Plus-Incentive-Fee")]
    CostPlusIncentiveFee,
    #[serde(rename = "Cost-Plus-Award-Fee")]
    CostPlusAwardFee,
}

impl ContractType {
    pub const ALL: [ContractType; 6] = [
        ContractType::FirmFixedPrice,
        ContractType::CostPlusFixedFee,
        ContractType::TimeAndMaterials,
        ContractType::IndefiniteDelivery,
        ContractType::CostPlusIncentiveFee,
        ContractType::CostPlusAwardFee,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContractType::FirmFixedPrice => "Firm-Fixed-Price",
            ContractType::CostPlusFixedFee => "Cost-Plus-Fixed-Fee",
            ContractType::TimeAndMaterials => "Time-and-Materials",
            ContractType::IndefiniteDelivery => "Indefinite-Delivery",
            ContractType::CostPlusIncentiveFee => "Cost-Plus-Incentive-Fee",
            ContractType::CostPlusAwardFee => "Cost-Plus-Award-Fee",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContractStatus {
    Active,
    Completed,
    Terminated,
    #[serde(rename = "On Hold")]
    OnHold,
    #[serde(rename = "In Negotiation")]
    InNegotiation,
}

impl ContractStatus {
    /// Status with its relative frequency; most contracts are active
    pub const WEIGHTED: [(ContractStatus, u32); 5] = [
        (ContractStatus::Active, 60),
        (ContractStatus::Completed, 25),
        (ContractStatus::Terminated, 5),
        (ContractStatus::OnHold, 5),
        (ContractStatus::InNegotiation, 5),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContractStatus::Active => "Active",
            ContractStatus::Completed => "Completed",
            ContractStatus::Terminated => "Terminated",
            ContractStatus::OnHold => "On Hold",
            ContractStatus::InNegotiation => "In Negotiation",
        }
    }
}

/// Awarding agency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    Navy,
    Army,
    #[serde(rename = "Air Force")]
    AirForce,
    Marines,
    #[serde(rename = "Coast Guard")]
    CoastGuard,
    #[serde(rename = "DLA")]
    Dla,
    #[serde(rename = "DARPA")]
    Darpa,
    #[serde(rename = "NSA")]
    Nsa,
    #[serde(rename = "DIA")]
    Dia,
}

impl Department {
    pub const ALL: [Department; 9] = [
        Department::Navy,
        Department::Army,
        Department::AirForce,
        Department::Marines,
        Department::CoastGuard,
        Department::Dla,
        Department::Darpa,
        Department::Nsa,
        Department::Dia,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Navy => "Navy",
            Department::Army => "Army",
            Department::AirForce => "Air Force",
            Department::Marines => "Marines",
            Department::CoastGuard => "Coast Guard",
            Department::Dla => "DLA",
            Department::Darpa => "DARPA",
            Department::Nsa => "NSA",
            Department::Dia => "DIA",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VendorSize {
    Small,
    Medium,
    Large,
    #[serde(rename = "Very Large")]
    VeryLarge,
}

impl VendorSize {
    pub const ALL: [VendorSize; 4] = [
        VendorSize::Small,
        VendorSize::Medium,
        VendorSize::Large,
        VendorSize::VeryLarge,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VendorSize::Small => "Small",
            VendorSize::Medium => "Medium",
            VendorSize::Large => "Large",
            VendorSize::VeryLarge => "Very Large",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectType {
    Research,
    Development,
    Testing,
    Production,
    Maintenance,
    #[serde(rename = "IT Services")]
    ItServices,
    Consulting,
    Training,
    Construction,
    Logistics,
}

impl ProjectType {
    pub const ALL: [ProjectType; 10] = [
        ProjectType::Research,
        ProjectType::Development,
        ProjectType::Testing,
        ProjectType::Production,
        ProjectType::Maintenance,
        ProjectType::ItServices,
        ProjectType::Consulting,
        ProjectType::Training,
        ProjectType::Construction,
        ProjectType::Logistics,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Research => "Research",
            ProjectType::Development => "Development",
            ProjectType::Testing => "Testing",
            ProjectType::Production => "Production",
            ProjectType::Maintenance => "Maintenance",
            ProjectType::ItServices => "IT Services",
            ProjectType::Consulting => "Consulting",
            ProjectType::Training => "Training",
            ProjectType::Construction => "Construction",
            ProjectType::Logistics => "Logistics",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub const ALL: [Priority; 4] = [Priority::Low, Priority::Medium, Priority::High, Priority::Critical];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Critical => "Critical",
        }
    }
}

/// Cost element a transaction is charged to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    Labor,
    Material,
    Travel,
    Subcontract,
    #[serde(rename = "ODC")]
    Odc,
    Fee,
}

impl TransactionType {
    pub const ALL: [TransactionType; 6] = [
        TransactionType::Labor,
        TransactionType::Material,
        TransactionType::Travel,
        TransactionType::Subcontract,
        TransactionType::Odc,
        TransactionType::Fee,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Labor => "Labor",
            TransactionType::Material => "Material",
            TransactionType::Travel => "Travel",
            TransactionType::Subcontract => "Subcontract",
            TransactionType::Odc => "ODC",
            TransactionType::Fee => "Fee",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModificationType {
    Administrative,
    Funding,
    Schedule,
    #[serde(rename = "Scope Change")]
    ScopeChange,
    Extension,
    Termination,
}

impl ModificationType {
    pub const ALL: [ModificationType; 6] = [
        ModificationType::Administrative,
        ModificationType::Funding,
        ModificationType::Schedule,
        ModificationType::ScopeChange,
        ModificationType::Extension,
        ModificationType::Termination,
    ];

    /// Funding, scope and extension mods carry a value change
    pub fn changes_value(&self) -> bool {
        matches!(
            self,
            ModificationType::Funding | ModificationType::ScopeChange | ModificationType::Extension
        )
    }

    /// Schedule and extension mods carry a days change
    pub fn changes_schedule(&self) -> bool {
        matches!(self, ModificationType::Schedule | ModificationType::Extension)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ModificationType::Administrative => "Administrative",
            ModificationType::Funding => "Funding",
            ModificationType::Schedule => "Schedule",
            ModificationType::ScopeChange => "Scope Change",
            ModificationType::Extension => "Extension",
            ModificationType::Termination => "Termination",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModificationStatus {
    Approved,
    Pending,
    Rejected,
    #[serde(rename = "In Review")]
    InReview,
}

impl ModificationStatus {
    pub const ALL: [ModificationStatus; 4] = [
        ModificationStatus::Approved,
        ModificationStatus::Pending,
        ModificationStatus::Rejected,
        ModificationStatus::InReview,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModificationStatus::Approved => "Approved",
            ModificationStatus::Pending => "Pending",
            ModificationStatus::Rejected => "Rejected",
            ModificationStatus::InReview => "In Review",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeliverableType {
    Report,
    Software,
    Hardware,
    Documentation,
    Prototype,
    Training,
    Data,
}

impl DeliverableType {
    pub const ALL: [DeliverableType; 7] = [
        DeliverableType::Report,
        DeliverableType::Software,
        DeliverableType::Hardware,
        DeliverableType::Documentation,
        DeliverableType::Prototype,
        DeliverableType::Training,
        DeliverableType::Data,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeliverableType::Report => "Report",
            DeliverableType::Software => "Software",
            DeliverableType::Hardware => "Hardware",
            DeliverableType::Documentation => "Documentation",
            DeliverableType::Prototype => "Prototype",
            DeliverableType::Training => "Training",
            DeliverableType::Data => "Data",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeliverableStatus {
    Pending,
    Delivered,
    Accepted,
    Rejected,
    Delayed,
}

impl DeliverableStatus {
    pub const ALL: [DeliverableStatus; 5] = [
        DeliverableStatus::Pending,
        DeliverableStatus::Delivered,
        DeliverableStatus::Accepted,
        DeliverableStatus::Rejected,
        DeliverableStatus::Delayed,
    ];

    /// Whether the item has been handed over and so has a delivery date
    pub fn is_delivered(&self) -> bool {
        matches!(
            self,
            DeliverableStatus::Delivered | DeliverableStatus::Accepted | DeliverableStatus::Rejected
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeliverableStatus::Pending => "Pending",
            DeliverableStatus::Delivered => "Delivered",
            DeliverableStatus::Accepted => "Accepted",
            DeliverableStatus::Rejected => "Rejected",
            DeliverableStatus::Delayed => "Delayed",
        }
    }
}

/// Acceptance outcome of a delivered item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Acceptance {
    Yes,
    No,
    Conditional,
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl Acceptance {
    pub const WEIGHTED: [(Acceptance, u32); 3] = [
        (Acceptance::Yes, 80),
        (Acceptance::No, 15),
        (Acceptance::Conditional, 5),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Acceptance::Yes => "Yes",
            Acceptance::No => "No",
            Acceptance::Conditional => "Conditional",
            Acceptance::NotApplicable => "N/A",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersonnelRole {
    #[serde(rename = "Project Manager")]
    ProjectManager,
    #[serde(rename = "Financial Analyst")]
    FinancialAnalyst,
    #[serde(rename = "Contract Specialist")]
    ContractSpecialist,
    #[serde(rename = "Program Manager")]
    ProgramManager,
    #[serde(rename = "Technical Lead")]
    TechnicalLead,
    Engineer,
    #[serde(rename = "Quality Assurance")]
    QualityAssurance,
    #[serde(rename = "Subject Matter Expert")]
    SubjectMatterExpert,
}

impl PersonnelRole {
    pub const ALL: [PersonnelRole; 8] = [
        PersonnelRole::ProjectManager,
        PersonnelRole::FinancialAnalyst,
        PersonnelRole::ContractSpecialist,
        PersonnelRole::ProgramManager,
        PersonnelRole::TechnicalLead,
        PersonnelRole::Engineer,
        PersonnelRole::QualityAssurance,
        PersonnelRole::SubjectMatterExpert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PersonnelRole::ProjectManager => "Project Manager",
            PersonnelRole::FinancialAnalyst => "Financial Analyst",
            PersonnelRole::ContractSpecialist => "Contract Specialist",
            PersonnelRole::ProgramManager => "Program Manager",
            PersonnelRole::TechnicalLead => "Technical Lead",
            PersonnelRole::Engineer => "Engineer",
            PersonnelRole::QualityAssurance => "Quality Assurance",
            PersonnelRole::SubjectMatterExpert => "Subject Matter Expert",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SecurityClearance {
    Secret,
    #[serde(rename = "Top Secret")]
    TopSecret,
    #[serde(rename = "TS/SCI")]
    TsSci,
    Confidential,
    #[serde(rename = "Public Trust")]
    PublicTrust,
}

impl SecurityClearance {
    pub const ALL: [SecurityClearance; 5] = [
        SecurityClearance::Secret,
        SecurityClearance::TopSecret,
        SecurityClearance::TsSci,
        SecurityClearance::Confidential,
        SecurityClearance::PublicTrust,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SecurityClearance::Secret => "Secret",
            SecurityClearance::TopSecret => "Top Secret",
            SecurityClearance::TsSci => "TS/SCI",
            SecurityClearance::Confidential => "Confidential",
            SecurityClearance::PublicTrust => "Public Trust",
        }
    }
}

macro_rules! display_as_label {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_label!(
    ContractType,
    ContractStatus,
    Department,
    VendorSize,
    ProjectType,
    Priority,
    TransactionType,
    ModificationType,
    ModificationStatus,
    DeliverableType,
    DeliverableStatus,
    Acceptance,
    PersonnelRole,
    SecurityClearance,
);
