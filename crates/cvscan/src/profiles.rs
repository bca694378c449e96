//! Applicant profile file loading
//!
//! Profiles come from a JSON array. Each record is an `ApplicantProfile`,
//! optionally with a `document_id` naming the application it belongs to;
//! without one the profile is registered under its `applicant_id`.
//!
//! ```json
//! [
//!   {"applicant_id": 1, "first_name": "Ada", "last_name": "Lovelace"},
//!   {"applicant_id": 2, "document_id": 14, "first_name": "Alan", "last_name": "Turing"}
//! ]
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use cvscan_core::{ApplicantProfile, DocumentId, MemoryProfiles};

use crate::error::Result;

#[derive(Debug, Deserialize)]
struct ProfileRecord {
    #[serde(default)]
    document_id: Option<DocumentId>,
    #[serde(flatten)]
    profile: ApplicantProfile,
}

/// Parse a JSON profile array.
pub fn parse_profiles(json: &str) -> Result<MemoryProfiles> {
    let records: Vec<ProfileRecord> = serde_json::from_str(json)?;
    Ok(records
        .into_iter()
        .map(|record| {
            let id = record.document_id.unwrap_or(record.profile.applicant_id);
            (id, record.profile)
        })
        .collect())
}

/// Read and parse a JSON profile file.
pub fn load_profiles(path: &Path) -> Result<MemoryProfiles> {
    let profiles = parse_profiles(&fs::read_to_string(path)?)?;
    debug!(path = %path.display(), profiles = profiles.len(), "profiles loaded");
    Ok(profiles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use cvscan_core::ProfileLookup;

    #[test]
    fn test_document_id_mapping() {
        let profiles = parse_profiles(
            r#"[
                {"applicant_id": 1, "first_name": "Ada", "last_name": "Lovelace"},
                {"applicant_id": 2, "document_id": 14, "first_name": "Alan", "last_name": "Turing",
                 "phone_number": "555-0100"}
            ]"#,
        )
        .unwrap();

        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles.display_name(1).as_deref(), Some("Ada Lovelace"));
        assert_eq!(profiles.display_name(14).as_deref(), Some("Alan Turing"));
        assert_eq!(profiles.display_name(2), None);
        assert_eq!(
            profiles.get(14).and_then(|p| p.phone_number.as_deref()),
            Some("555-0100")
        );
    }

    #[test]
    fn test_malformed_json() {
        let err = parse_profiles(r#"{"applicant_id": 1}"#).unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }
}
