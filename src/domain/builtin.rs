//! Checklists shipped with docgate for the fleet and HR back office

use crate::errors::Result;
use crate::schemas::{ChecklistDefinition, ChecklistItem};

use super::registry::ChecklistRegistry;

/// Default checklist definitions, in gate evaluation order
pub fn builtin_checklists() -> Vec<ChecklistDefinition> {
    vec![
        ChecklistDefinition::new("pre_hiring", "employee", "Pre-hiring documents")
            .with_item(ChecklistItem::file("resume", "Resume", true))
            .with_item(ChecklistItem::file("work_authorization", "Work authorization", false))
            .with_gate("new", "under_review"),
        ChecklistDefinition::new("onboarding", "employee", "Onboarding package")
            .with_item(ChecklistItem::file("signed_offer", "Signed offer letter", true))
            .with_item(ChecklistItem::data(
                "banking_details",
                "Direct deposit details",
                true,
                &["institution", "transit", "account"],
            ))
            .with_item(ChecklistItem::data(
                "emergency_contact",
                "Emergency contact",
                true,
                &["name", "relationship", "phone"],
            ))
            .with_item(ChecklistItem::modal(
                "policy_acknowledgement",
                "Policy acknowledgement",
                true,
                "policy_acknowledgement",
            ))
            .with_item(ChecklistItem::file("drivers_abstract", "Driver's abstract", false))
            .with_gate("under_review", "hired"),
        ChecklistDefinition::new("qualification", "driver", "Driver qualification file")
            .with_item(ChecklistItem::file("drivers_license", "Driver's license", true))
            .with_item(ChecklistItem::file("medical_certificate", "Medical certificate", true))
            .with_item(ChecklistItem::file("drivers_abstract", "Driver's abstract", true))
            .with_item(ChecklistItem::file("road_test", "Road test certificate", true))
            .with_item(ChecklistItem::file(
                "criminal_record_check",
                "Criminal record check",
                false,
            ))
            .with_gate("applicant", "active")
            .with_gate("suspended", "active"),
        ChecklistDefinition::new("in_service", "truck", "In-service requirements")
            .with_item(ChecklistItem::file("registration", "Registration", true))
            .with_item(ChecklistItem::file("insurance", "Insurance certificate", true))
            .with_item(ChecklistItem::file("safety_inspection", "Annual safety inspection", true))
            .with_item(ChecklistItem::data(
                "unit_details",
                "Unit details",
                true,
                &["vin", "plate", "gvw"],
            ))
            .with_gate("out_of_service", "in_service"),
        ChecklistDefinition::new("claim_package", "wcb_claim", "WCB claim package")
            .with_item(ChecklistItem::file("worker_report", "Worker's report", true))
            .with_item(ChecklistItem::file("employer_report", "Employer's report", true))
            .with_item(ChecklistItem::file("physician_report", "Physician's report", true))
            .with_item(ChecklistItem::modal(
                "return_to_work_plan",
                "Return-to-work plan",
                false,
                "return_to_work",
            ))
            .with_gate("open", "submitted"),
        ChecklistDefinition::new("investigation", "incident", "Incident investigation")
            .with_item(ChecklistItem::modal(
                "driver_statement",
                "Driver statement",
                true,
                "incident_statement",
            ))
            .with_item(ChecklistItem::file("scene_photos", "Scene photos", true))
            .with_item(ChecklistItem::file("police_report", "Police report", false))
            .with_gate("reported", "closed"),
    ]
}

impl ChecklistRegistry {
    /// Registry holding the built-in fleet and HR checklists
    pub fn builtin() -> Result<Self> {
        ChecklistRegistry::from_definitions(builtin_checklists())
    }
}
