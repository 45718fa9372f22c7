//! Archive entry naming.
//!
//! Entry names must be collision-resistant: two students with the same
//! display name would otherwise overwrite each other's entry when the
//! archive is extracted. Every name is therefore derived from the sanitized
//! display name plus a per-variant secondary key (exam code for certificates
//! and admission cards, student id for transcripts).

use std::sync::LazyLock;

use regex::Regex;
use strum_macros::{AsRefStr, Display as DisplayMacro, EnumIter as EnumIterMacro};

use crate::config::{ARCHIVE_ENTRY_EXTENSION, ENTRY_NAME_SANITIZER};

static NAME_SANITIZER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ENTRY_NAME_SANITIZER).expect("sanitizer pattern is valid"));

/// The three document variants the processor handles.
///
/// The variant determines the archive entry prefix; everything else about
/// chunking, error aggregation, and archive assembly is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, DisplayMacro, EnumIterMacro)]
pub enum DocumentKind {
    /// Exam pass certificate
    #[strum(serialize = "certificate")]
    Certificate,
    /// Exam sitting admission card
    #[strum(serialize = "admission_card")]
    AdmissionCard,
    /// Academic transcript
    #[strum(serialize = "transcript")]
    Transcript,
}

/// A record that can be rendered and packed into a batch archive.
///
/// Implemented by the three record variants. The processor only needs the
/// identity fields; all other record content is opaque and flows straight
/// through to the injected renderer.
pub trait BatchDocument: Clone {
    /// Which document variant this record renders to.
    const KIND: DocumentKind;

    /// Identifier used in per-item error reports (the student id).
    ///
    /// Duplicate student ids in one batch produce duplicate identifiers in
    /// the error list; the processor does not de-duplicate.
    fn item_id(&self) -> &str;

    /// Display name embedded (sanitized) in the archive entry name.
    fn display_name(&self) -> &str;

    /// Secondary key appended to the entry name to avoid collisions
    /// between records with identical display names.
    fn entry_key(&self) -> &str;
}

/// Reduces a display name to a filesystem-safe lowercase token.
///
/// Every character outside `[a-zA-Z0-9]` becomes an underscore, then the
/// result is lowercased. Accented characters are not transliterated; each
/// one collapses to a single underscore.
pub fn sanitize_display_name(name: &str) -> String {
    NAME_SANITIZER.replace_all(name, "_").to_lowercase()
}

/// Computes the archive entry name for a record.
///
/// Format: `<kind>_<sanitized name>_<entry key>.pdf`. Deterministic for a
/// given record, independent of render completion order.
pub fn entry_name<R: BatchDocument>(record: &R) -> String {
    format!(
        "{}_{}_{}.{}",
        R::KIND.as_ref(),
        sanitize_display_name(record.display_name()),
        record.entry_key(),
        ARCHIVE_ENTRY_EXTENSION
    )
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::records::{CertificateRecord, TranscriptRecord};

    fn certificate(name: &str, exam_code: &str) -> CertificateRecord {
        CertificateRecord {
            student_name: name.to_owned(),
            student_id: "STU-001".to_owned(),
            exam_name: "National Mathematics Examination".to_owned(),
            exam_code: exam_code.to_owned(),
            grade: "A".to_owned(),
            score: 91.5,
            date_issued: "1/15/2026".to_owned(),
            certificate_number: "CERT-42-2026".to_owned(),
            institution: "Unity College".to_owned(),
            exam_date: "12/10/2025".to_owned(),
        }
    }

    #[test]
    fn sanitizes_spaces_and_punctuation() {
        assert_eq!(sanitize_display_name("Amina N'Dour"), "amina_n_dour");
        assert_eq!(sanitize_display_name("Jean-Paul K."), "jean_paul_k_");
    }

    #[test]
    fn sanitizes_non_ascii_characters() {
        assert_eq!(sanitize_display_name("Zoë"), "zo_");
    }

    #[test]
    fn entry_name_includes_kind_prefix_and_secondary_key() {
        let record = certificate("Amina N'Dour", "MATH-2026");
        assert_eq!(entry_name(&record), "certificate_amina_n_dour_MATH-2026.pdf");
    }

    #[test]
    fn identical_names_with_distinct_keys_yield_distinct_entries() {
        let first = certificate("Amina Diallo", "MATH-2026");
        let second = certificate("Amina Diallo", "PHYS-2026");
        assert_ne!(entry_name(&first), entry_name(&second));
    }

    #[test]
    fn transcript_entries_are_keyed_by_student_id() {
        let record = TranscriptRecord {
            student_name: "Amina Diallo".to_owned(),
            student_id: "STU-007".to_owned(),
            institution: "Unity College".to_owned(),
            program: "General Studies".to_owned(),
            level: "Undergraduate".to_owned(),
            results: Vec::new(),
            gpa: 3.4,
            total_credits: 12,
            date_issued: "1/15/2026".to_owned(),
        };
        assert_eq!(entry_name(&record), "transcript_amina_diallo_STU-007.pdf");
    }

    #[test]
    fn kind_prefixes_are_filesystem_safe() {
        for kind in DocumentKind::iter() {
            let prefix = kind.as_ref();
            assert!(prefix
                .chars()
                .all(|c| c.is_ascii_lowercase() || c == '_'));
        }
    }
}
