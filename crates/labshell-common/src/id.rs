use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a sandbox, taken from the first label of the host name the
/// shell is served from (`<uuid>.labs.example.com`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SandboxId(uuid::Uuid);

impl SandboxId {
    /// Extract the sandbox id from a host name. Returns `None` when the first
    /// label is not a hyphenated UUID.
    pub fn from_hostname(hostname: &str) -> Option<Self> {
        let label = hostname.split('.').next()?;
        if label.len() != 36 || !label.contains('-') {
            return None;
        }
        uuid::Uuid::parse_str(label).ok().map(Self)
    }
}

impl fmt::Display for SandboxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_leading_uuid_label() {
        let id = SandboxId::from_hostname("0f8fad5b-d9cb-469f-a165-70867728950e.labs.example.com")
            .unwrap();
        assert_eq!(id.to_string(), "0f8fad5b-d9cb-469f-a165-70867728950e");
    }

    #[test]
    fn rejects_plain_hosts() {
        assert!(SandboxId::from_hostname("localhost").is_none());
        assert!(SandboxId::from_hostname("labs.example.com").is_none());
        assert!(SandboxId::from_hostname("").is_none());
    }

    #[test]
    fn rejects_simple_form_uuid() {
        // 32 hex digits without hyphens is a valid UUID but not a sandbox label
        assert!(SandboxId::from_hostname("0f8fad5bd9cb469fa16570867728950e.example.com").is_none());
    }

    #[test]
    fn rejects_malformed_uuid_of_right_length() {
        assert!(SandboxId::from_hostname("zzzzzzzz-d9cb-469f-a165-70867728950e.example.com").is_none());
    }

    #[test]
    fn sandbox_id_serialization() {
        let id = SandboxId::from_hostname("0f8fad5b-d9cb-469f-a165-70867728950e").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: SandboxId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
