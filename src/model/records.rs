//! Dataset record types
//!
//! Field order in each struct is the column (or key) order of the output
//! file.

use super::enums::*;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};

/// A record written as one CSV row
///
/// `HEADERS` is the header row, in field order. It is written when the file
/// is opened, so a file with no rows still carries it.
pub trait CsvRecord {
    const HEADERS: &'static [&'static str];
}

/// Write a money amount with exactly two decimals
fn cents<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&format_args!("{:.2}", value))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    pub contract_id: String,
    pub contract_number: String,
    pub vendor_id: String,
    pub project_id: String,
    pub contract_type: ContractType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(serialize_with = "cents")]
    pub original_value: f64,
    #[serde(serialize_with = "cents")]
    pub current_value: f64,
    pub status: ContractStatus,
    pub department: Department,
    pub description: String,
    pub contracting_officer: String,
}

/// Historical delivery metrics of a vendor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PastPerformance {
    pub on_time_delivery_rate: f64,
    pub quality_rating: f64,
    /// Negative is under budget
    pub cost_variance: f64,
    pub contracts_completed: u32,
    pub avg_contract_value: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointOfContact {
    pub name: String,
    pub title: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    pub vendor_id: String,
    pub name: String,
    pub duns_number: String,
    pub cage_code: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub size: VendorSize,
    pub categories: Vec<String>,
    pub socioeconomic: Vec<String>,
    pub annual_revenue: f64,
    pub year_established: u16,
    pub past_performance: PastPerformance,
    pub active_contracts: u32,
    pub point_of_contact: PointOfContact,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub project_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(serialize_with = "cents")]
    pub total_budget: f64,
    pub department: Department,
    pub program_manager: String,
    pub priority: Priority,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub transaction_id: String,
    pub contract_id: String,
    pub transaction_date: NaiveDate,
    #[serde(serialize_with = "cents")]
    pub amount: f64,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub description: String,
    pub fiscal_year: i32,
    pub fiscal_quarter: u8,
    pub invoice_number: String,
    pub approved_by: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Modification {
    pub modification_id: String,
    pub contract_id: String,
    pub mod_number: String,
    pub mod_date: NaiveDate,
    #[serde(rename = "type")]
    pub modification_type: ModificationType,
    pub description: String,
    #[serde(serialize_with = "cents")]
    pub value_change: f64,
    pub days_change: i32,
    pub approved_by: String,
    pub status: ModificationStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deliverable {
    pub deliverable_id: String,
    pub contract_id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub deliverable_type: DeliverableType,
    pub due_date: NaiveDate,
    /// Set only for delivered, accepted or rejected items
    pub delivery_date: Option<NaiveDate>,
    pub status: DeliverableStatus,
    pub description: String,
    pub accepted: Acceptance,
    pub reviewer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Personnel {
    pub personnel_id: String,
    pub name: String,
    pub role: PersonnelRole,
    pub department: Department,
    pub email: String,
    pub phone: String,
    pub security_clearance: SecurityClearance,
    pub hire_date: NaiveDate,
    pub supervisor: Option<String>,
}

impl CsvRecord for Contract {
    const HEADERS: &'static [&'static str] = &[
        "contract_id",
        "contract_number",
        "vendor_id",
        "project_id",
        "contract_type",
        "start_date",
        "end_date",
        "original_value",
        "current_value",
        "status",
        "department",
        "description",
        "contracting_officer",
    ];
}

impl CsvRecord for Project {
    const HEADERS: &'static [&'static str] = &[
        "project_id",
        "name",
        "type",
        "description",
        "start_date",
        "end_date",
        "total_budget",
        "department",
        "program_manager",
        "priority",
    ];
}

impl CsvRecord for Transaction {
    const HEADERS: &'static [&'static str] = &[
        "transaction_id",
        "contract_id",
        "transaction_date",
        "amount",
        "type",
        "description",
        "fiscal_year",
        "fiscal_quarter",
        "invoice_number",
        "approved_by",
    ];
}

impl CsvRecord for Modification {
    const HEADERS: &'static [&'static str] = &[
        "modification_id",
        "contract_id",
        "mod_number",
        "mod_date",
        "type",
        "description",
        "value_change",
        "days_change",
        "approved_by",
        "status",
    ];
}

impl CsvRecord for Deliverable {
    const HEADERS: &'static [&'static str] = &[
        "deliverable_id",
        "contract_id",
        "title",
        "type",
        "due_date",
        "delivery_date",
        "status",
        "description",
        "accepted",
        "reviewer",
    ];
}

impl CsvRecord for Personnel {
    const HEADERS: &'static [&'static str] = &[
        "personnel_id",
        "name",
        "role",
        "department",
        "email",
        "phone",
        "security_clearance",
        "hire_date",
        "supervisor",
    ];
}
