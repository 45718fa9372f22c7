//! Document record types.
//!
//! Flat value objects supplied by the caller, one variant per document type.
//! All fields are display-ready strings assembled by the route-handler layer
//! (names joined, dates localized) before the batch is submitted; this crate
//! does not interpret them beyond the identity fields exposed through
//! [`BatchDocument`].
//!
//! Records arrive as JSON from the web layer, hence the camelCase renames.

use serde::{Deserialize, Serialize};

use crate::naming::{BatchDocument, DocumentKind};

/// Data for one exam pass certificate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateRecord {
    /// Full display name of the student
    pub student_name: String,
    /// Student registry identifier
    pub student_id: String,
    /// Exam title as printed on the certificate
    pub exam_name: String,
    /// Exam code, also the entry-name secondary key
    pub exam_code: String,
    /// Letter grade awarded
    pub grade: String,
    /// Numeric score awarded
    pub score: f64,
    /// Localized issue date
    pub date_issued: String,
    /// Certificate serial number
    pub certificate_number: String,
    /// Institution the student belongs to
    pub institution: String,
    /// Localized date the exam was sat
    pub exam_date: String,
}

impl BatchDocument for CertificateRecord {
    const KIND: DocumentKind = DocumentKind::Certificate;

    fn item_id(&self) -> &str {
        &self.student_id
    }

    fn display_name(&self) -> &str {
        &self.student_name
    }

    fn entry_key(&self) -> &str {
        &self.exam_code
    }
}

/// Data for one exam admission card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionCardRecord {
    /// Full display name of the student
    pub student_name: String,
    /// Student registry identifier
    pub student_id: String,
    /// Exam title
    pub exam_name: String,
    /// Exam code, also the entry-name secondary key
    pub exam_code: String,
    /// Localized exam date
    pub exam_date: String,
    /// Exam start time
    pub exam_time: String,
    /// Name of the assigned examination center
    pub exam_center: String,
    /// Street address of the examination center
    pub center_address: String,
    /// Subjects the student sits, in timetable order
    pub subjects: Vec<String>,
    /// Instructions printed on the card, in display order
    pub instructions: Vec<String>,
    /// Optional reference to the student's photo
    pub photo: Option<String>,
}

impl BatchDocument for AdmissionCardRecord {
    const KIND: DocumentKind = DocumentKind::AdmissionCard;

    fn item_id(&self) -> &str {
        &self.student_id
    }

    fn display_name(&self) -> &str {
        &self.student_name
    }

    fn entry_key(&self) -> &str {
        &self.exam_code
    }
}

/// One exam result line on a transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptEntry {
    /// Exam title
    pub exam_name: String,
    /// Exam code
    pub exam_code: String,
    /// Localized date the exam was sat
    pub date: String,
    /// Numeric score awarded
    pub score: f64,
    /// Letter grade awarded
    pub grade: String,
    /// Credits the exam carries
    pub credits: u32,
}

/// Data for one academic transcript.
///
/// The grade-point average and credit totals are computed by the caller from
/// the result entries; this crate treats them as opaque display values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptRecord {
    /// Full display name of the student
    pub student_name: String,
    /// Student registry identifier, also the entry-name secondary key
    pub student_id: String,
    /// Institution the student belongs to
    pub institution: String,
    /// Program of study
    pub program: String,
    /// Academic level (e.g. Undergraduate)
    pub level: String,
    /// Per-exam result lines, in chronological order
    pub results: Vec<TranscriptEntry>,
    /// Computed grade-point average
    pub gpa: f64,
    /// Total credits earned
    pub total_credits: u32,
    /// Localized issue date
    pub date_issued: String,
}

impl BatchDocument for TranscriptRecord {
    const KIND: DocumentKind = DocumentKind::Transcript;

    fn item_id(&self) -> &str {
        &self.student_id
    }

    fn display_name(&self) -> &str {
        &self.student_name
    }

    // A student has one transcript, so the student id disambiguates
    // identically-named students.
    fn entry_key(&self) -> &str {
        &self.student_id
    }
}
