//! Dataset entities
//!
//! Seven record types linked by string foreign keys:
//! - Contract → Vendor, Project, Personnel (contracting officer)
//! - Project → Personnel (program manager)
//! - Transaction, Modification, Deliverable → Contract, Personnel
//! - Personnel → Personnel (optional supervisor)

pub mod enums;
pub mod records;

pub use enums::{
    Acceptance, ContractStatus, ContractType, DeliverableStatus, DeliverableType, Department,
    ModificationStatus, ModificationType, PersonnelRole, Priority, ProjectType, SecurityClearance,
    TransactionType, VendorSize,
};
pub use records::{
    Contract, CsvRecord, Deliverable, Modification, PastPerformance, Personnel, PointOfContact, Project,
    Transaction, Vendor,
};

/// Procurement categories a vendor can cover
pub const VENDOR_CATEGORIES: [&str; 13] = [
    "IT Services",
    "Hardware",
    "Software",
    "Engineering",
    "R&D",
    "Professional Services",
    "Manufacturing",
    "Logistics",
    "Consulting",
    "Training",
    "Facilities",
    "Security",
    "Telecommunications",
];

/// Small-business and socioeconomic program designations
pub const SOCIOECONOMIC_FLAGS: [&str; 6] = ["8(a)", "SDVOSB", "WOSB", "HUBZone", "SB", "LB"];
