use std::fmt;

/// Number of repositories requested per page.
pub const PER_PAGE: u8 = 50;

/// Page number to request next. GitHub numbers pages from 1.
pub type PageCursor = u32;

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct Owner {
    pub login: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct WatchedRepository {
    pub owner: Owner,
    pub name: String,
}

impl WatchedRepository {
    pub fn owner(&self) -> &str {
        &self.owner.login
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for WatchedRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner.login, self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchedPage {
    pub repositories: Vec<WatchedRepository>,
    pub next: Option<PageCursor>,
}

#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    Token(String),
    Basic { username: String, password: String },
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credential::Token(_) => f.debug_tuple("Token").field(&"<redacted>").finish(),
            Credential::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watched_repository_deserializes_from_rest_payload() {
        let payload = serde_json::json!({
            "id": 1296269,
            "name": "Hello-World",
            "full_name": "octocat/Hello-World",
            "owner": { "login": "octocat", "id": 1 },
            "private": false
        });

        let repo: WatchedRepository = serde_json::from_value(payload).unwrap();
        assert_eq!(repo.owner(), "octocat");
        assert_eq!(repo.name(), "Hello-World");
        assert_eq!(repo.to_string(), "octocat/Hello-World");
    }

    #[test]
    fn credential_debug_hides_secrets() {
        let token = format!("{:?}", Credential::Token("ghp_secret".to_string()));
        assert!(!token.contains("ghp_secret"));

        let basic = format!(
            "{:?}",
            Credential::Basic {
                username: "octocat".to_string(),
                password: "hunter2".to_string(),
            }
        );
        assert!(basic.contains("octocat"));
        assert!(!basic.contains("hunter2"));
    }
}
