//! Error types for ACL template construction.

use thiserror::Error;

/// Errors that can occur while constructing ACL templates.
#[derive(Debug, Error)]
pub enum AclTemplateError {
    /// A builder was asked to produce a record before every required field
    /// was supplied. The message intentionally does not name the missing
    /// fields; callers inspect the builder they hold.
    #[error("generic ACL template is missing required fields")]
    IncompleteTemplate,
}

/// Result type alias for ACL template construction.
pub type AclTemplateResult<T> = Result<T, AclTemplateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_template_message_names_no_fields() {
        let message = AclTemplateError::IncompleteTemplate.to_string();
        assert_eq!(message, "generic ACL template is missing required fields");
        assert!(!message.contains("contract"));
        assert!(!message.contains("chain"));
    }
}
