use serde::{Deserialize, Serialize};

/// A registered short link
///
/// `id` is the opaque primary key used in redirect URLs; `name` is the
/// human-chosen display name, unique across all records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    pub id: String,
    pub name: String,
    pub target_url: String,
    /// Empty or absent means the record is unprotected
    pub password: Option<String>,
    #[serde(default)]
    pub visits: u64,
}

impl Link {
    /// Whether update/delete require a credential
    pub fn is_protected(&self) -> bool {
        self.password.as_deref().is_some_and(|p| !p.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link_with_password(password: Option<&str>) -> Link {
        Link {
            id: "aZ3kQmN7pL".to_string(),
            name: "docs".to_string(),
            target_url: "https://example.com/docs".to_string(),
            password: password.map(str::to_string),
            visits: 0,
        }
    }

    #[test]
    fn test_protection_state() {
        assert!(!link_with_password(None).is_protected());
        assert!(!link_with_password(Some("")).is_protected());
        assert!(link_with_password(Some("secret")).is_protected());
    }
}
