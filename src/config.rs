//! Widget Configuration
//!
//! Immutable per-widget settings, captured once when the tag box mounts.

/// Configuration for one tag box instance
///
/// `readonly` disables every edit and confirmation affordance for the
/// lifetime of the widget. The class names are handed through to the
/// rendered control surface unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct TagBoxConfig {
    /// Document the tag set belongs to
    pub document_id: String,
    /// Tag category, e.g. "country"
    pub kind: String,
    /// Base URL of the metadata service
    pub base_url: String,
    /// Locks edits and hides the confirm button
    pub readonly: bool,
    /// Wrapper class while edits are allowed
    pub editable_class: String,
    /// Wrapper class while edits are locked
    pub uneditable_class: String,
    /// Class of the confirm/reopen button
    pub confirm_button_class: String,
}

impl TagBoxConfig {
    /// Address every request for this widget goes to, trailing slash included.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/metadata/{}/{}/",
            self.base_url, self.document_id, self.kind
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc1_config() -> TagBoxConfig {
        TagBoxConfig {
            document_id: "DOC1".to_string(),
            kind: "country".to_string(),
            base_url: "http://metadata.test/api".to_string(),
            readonly: false,
            editable_class: String::new(),
            uneditable_class: String::new(),
            confirm_button_class: String::new(),
        }
    }

    #[test]
    fn test_endpoint_includes_document_and_kind() {
        assert_eq!(
            doc1_config().endpoint(),
            "http://metadata.test/api/metadata/DOC1/country/"
        );
    }
}
