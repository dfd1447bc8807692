//! License records and the collection that wraps them.

use super::document::Document;

/// One `<license>` record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct License {
    pub is_osi_approved: bool,
    pub name: String,
    pub license_id: String,
    pub list_version_added: String,
    pub is_deprecated: bool,
    #[cfg_attr(feature = "cli", serde(skip_serializing_if = "Option::is_none"))]
    pub deprecated_version: Option<String>,
    /// URLs from `<crossRefs>`.
    #[cfg_attr(feature = "cli", serde(skip_serializing_if = "Vec::is_empty"))]
    pub cross_refs: Vec<String>,
    /// Identifiers from `<obsoletedBys>`.
    #[cfg_attr(feature = "cli", serde(skip_serializing_if = "Vec::is_empty"))]
    pub obsoleted_by: Vec<String>,
    #[cfg_attr(feature = "cli", serde(skip_serializing_if = "Option::is_none"))]
    pub notes: Option<Document>,
    pub text: Document,
    /// Record-level `<standardLicenseHeader>`, outside `<text>`.
    #[cfg_attr(feature = "cli", serde(skip_serializing_if = "Option::is_none"))]
    pub standard_license_header: Option<Document>,
}

/// All license records of one `<SPDXLicenseCollection>` file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct LicenseCollection {
    pub licenses: Vec<License>,
}

impl LicenseCollection {
    /// Find a record by its SPDX identifier.
    pub fn get(&self, license_id: &str) -> Option<&License> {
        self.licenses.iter().find(|l| l.license_id == license_id)
    }

    pub fn len(&self) -> usize {
        self.licenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.licenses.is_empty()
    }
}
