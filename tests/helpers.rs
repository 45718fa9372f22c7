//! Shared fixtures for the integration suites.
#![allow(dead_code)]

use std::io::Cursor;
use std::sync::{Arc, Mutex};

use docbatch::{
    AdmissionCardRecord, BatchProgress, CertificateRecord, ProgressCallback, TranscriptEntry,
    TranscriptRecord,
};
use zip::ZipArchive;

/// Builds a certificate record with a stable id/name derived from `i`.
pub fn make_certificate(i: usize) -> CertificateRecord {
    CertificateRecord {
        student_name: format!("Student Number {i}"),
        student_id: format!("STU-{i:03}"),
        exam_name: "National Mathematics Examination".to_owned(),
        exam_code: "MATH-2026".to_owned(),
        grade: "A".to_owned(),
        score: 90.0,
        date_issued: "1/15/2026".to_owned(),
        certificate_number: format!("CERT-{i}-2026"),
        institution: "Unity College".to_owned(),
        exam_date: "12/10/2025".to_owned(),
    }
}

/// Builds an admission card record with a stable id/name derived from `i`.
pub fn make_admission_card(i: usize) -> AdmissionCardRecord {
    AdmissionCardRecord {
        student_name: format!("Student Number {i}"),
        student_id: format!("STU-{i:03}"),
        exam_name: "National Physics Examination".to_owned(),
        exam_code: "PHYS-2026".to_owned(),
        exam_date: "12/12/2025".to_owned(),
        exam_time: "08:00 AM".to_owned(),
        exam_center: "Central Hall".to_owned(),
        center_address: "12 Examination Road".to_owned(),
        subjects: vec!["Mechanics".to_owned(), "Optics".to_owned()],
        instructions: vec!["Arrive 30 minutes early".to_owned()],
        photo: None,
    }
}

/// Builds a transcript record with a stable id/name derived from `i`.
pub fn make_transcript(i: usize) -> TranscriptRecord {
    TranscriptRecord {
        student_name: format!("Student Number {i}"),
        student_id: format!("STU-{i:03}"),
        institution: "Unity College".to_owned(),
        program: "General Studies".to_owned(),
        level: "Undergraduate".to_owned(),
        results: vec![TranscriptEntry {
            exam_name: "National Mathematics Examination".to_owned(),
            exam_code: "MATH-2026".to_owned(),
            date: "12/10/2025".to_owned(),
            score: 90.0,
            grade: "A".to_owned(),
            credits: 3,
        }],
        gpa: 4.0,
        total_credits: 3,
        date_issued: "1/15/2026".to_owned(),
    }
}

/// Lists the entry names of a finalized archive.
pub fn archive_entry_names(bytes: &[u8]) -> Vec<String> {
    let archive = ZipArchive::new(Cursor::new(bytes.to_vec())).expect("readable archive");
    archive.file_names().map(str::to_owned).collect()
}

/// Progress callback that records every snapshot it receives.
pub fn progress_recorder() -> (Arc<Mutex<Vec<BatchProgress>>>, ProgressCallback) {
    let snapshots = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&snapshots);
    let callback: ProgressCallback = Box::new(move |progress| {
        sink.lock().expect("progress sink lock").push(progress);
    });
    (snapshots, callback)
}
