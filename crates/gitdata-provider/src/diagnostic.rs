//! User-facing diagnostics returned by data source reads

use serde::Serialize;

pub const MISSING_ARGUMENT: &str = "Missing required argument";
pub const UNSUPPORTED_ARGUMENT: &str = "Unsupported argument";
pub const INCORRECT_TYPE: &str = "Incorrect attribute value type";
pub const UNKNOWN_DATA_SOURCE: &str = "Unknown data source";

/// Every read failure is fatal to the read, so only errors exist today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
}

/// A classified failure with a stable summary and a free-form detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub summary: String,
    pub detail: String,

    /// The argument the diagnostic is about, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
}

impl Diagnostic {
    pub fn error(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            summary: summary.into(),
            detail: detail.into(),
            attribute: None,
        }
    }

    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = Some(attribute.into());
        self
    }

    pub fn missing_argument(attribute: &str) -> Self {
        Self::error(
            MISSING_ARGUMENT,
            format!("The argument \"{attribute}\" is required, but no definition was found."),
        )
        .with_attribute(attribute)
    }

    pub fn unsupported_argument(attribute: &str) -> Self {
        Self::error(
            UNSUPPORTED_ARGUMENT,
            format!("An argument named \"{attribute}\" is not expected here."),
        )
        .with_attribute(attribute)
    }

    pub fn incorrect_type(attribute: &str, expected: &str) -> Self {
        Self::error(
            INCORRECT_TYPE,
            format!("Inappropriate value for attribute \"{attribute}\": {expected} required."),
        )
        .with_attribute(attribute)
    }

    pub fn unknown_data_source(name: &str) -> Self {
        Self::error(
            UNKNOWN_DATA_SOURCE,
            format!("The provider does not support data source \"{name}\"."),
        )
    }
}

impl From<&gitdata_core::Error> for Diagnostic {
    fn from(err: &gitdata_core::Error) -> Self {
        Self::error(err.summary(), err.to_string())
    }
}

impl From<gitdata_core::Error> for Diagnostic {
    fn from(err: gitdata_core::Error) -> Self {
        Self::from(&err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_errors_keep_their_summary() {
        let err = gitdata_core::Error::BranchNotFound {
            name: "feature".into(),
        };
        let diagnostic = Diagnostic::from(&err);
        assert_eq!(diagnostic.severity, Severity::Error);
        assert_eq!(diagnostic.summary, "Cannot read branch");
        assert!(diagnostic.detail.contains("feature"));
        assert_eq!(diagnostic.attribute, None);
    }

    #[test]
    fn attribute_is_omitted_when_absent() {
        let value = serde_json::to_value(Diagnostic::unknown_data_source("git_tags")).unwrap();
        assert_eq!(value["severity"], "error");
        assert_eq!(value["summary"], UNKNOWN_DATA_SOURCE);
        assert!(value.get("attribute").is_none());
    }

    #[test]
    fn argument_diagnostics_name_the_attribute() {
        let value = serde_json::to_value(Diagnostic::missing_argument("directory")).unwrap();
        assert_eq!(value["summary"], MISSING_ARGUMENT);
        assert_eq!(value["attribute"], "directory");
    }
}
