//! Shared sample data for query pipeline tests.

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use docportal_core::{DateNormalizer, DocumentCategory, DocumentRecord, Machine, MachineStatus};
use docportal_search::QueryEngine;

/// Fixed reference instant: 2024-06-15 12:00 UTC.
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

pub fn engine() -> QueryEngine<Utc> {
    QueryEngine::new(DateNormalizer::new(Utc))
}

pub fn document(
    id: &str,
    filename: &str,
    serial: &str,
    date_modified: &str,
    category: DocumentCategory,
    machine_id: Option<&str>,
) -> DocumentRecord {
    DocumentRecord {
        id: id.to_string(),
        filename: filename.to_string(),
        file_type: "pdf".to_string(),
        file_size: Some("1.2 MB".to_string()),
        upload_date: None,
        date_modified: date_modified.to_string(),
        serial_number: serial.to_string(),
        machine_id: machine_id.map(str::to_string),
        category,
        file_url: format!("/files/{id}"),
    }
}

/// A small catalog spanning several categories and two machines.
pub fn sample_catalog() -> Vec<DocumentRecord> {
    use DocumentCategory::*;
    vec![
        document("d1", "Press operator manual.pdf", "AMF-100", "06-01-2024", Manuals, Some("m-1")),
        document("d2", "ABCmanual.pdf", "AMF-200", "01-15-2024", Manuals, Some("m-2")),
        document("d3", "Press BOM.xlsx", "AMF-100", "05-20-2024", Boms, Some("m-1")),
        document("d4", "Safety manual.pdf", "AMF-300", "not recorded", Manuals, None),
        document("d5", "Frame drawing.dwg", "AMF-100", "2024-03-01T09:00:00Z", MechanicalDrawings, Some("m-1")),
        document("d6", "Hydraulic manual.pdf", "AMF-200", "11-30-2023", Manuals, Some("m-2")),
        document("d7", "CE certificate.pdf", "AMF-100", "02-02-2022", Certificates, Some("m-1")),
    ]
}

pub fn sample_machines() -> Vec<Machine> {
    vec![
        Machine {
            id: "m-1".to_string(),
            name: "Hydraulic Press".to_string(),
            serial_number: "AMF-100".to_string(),
            image_url: None,
            status: MachineStatus::Operational,
            installation_date: "03-12-2021".to_string(),
            location: "Hall A".to_string(),
            is_new: false,
            document_count: 5,
        },
        Machine {
            id: "m-2".to_string(),
            name: "Tube Bender".to_string(),
            serial_number: "AMF-200".to_string(),
            image_url: None,
            status: MachineStatus::Maintenance,
            installation_date: "2023-09-01".to_string(),
            location: "Hall B".to_string(),
            is_new: true,
            document_count: 2,
        },
    ]
}
