use super::subscriptions;
use super::types::{Credential, PageCursor, WatchedPage};
use crate::error::{ApiError, Error, Result};

/// The calls the unsubscribe loop needs from the hosting service.
#[async_trait::async_trait]
pub trait WatchApi: Send + Sync {
    async fn list_watched(&self, page: PageCursor) -> std::result::Result<WatchedPage, ApiError>;

    async fn delete_subscription(&self, owner: &str, repo: &str)
    -> std::result::Result<(), ApiError>;
}

pub struct Client {
    octocrab: octocrab::Octocrab,
}

impl Client {
    pub fn new(hub_url: &url::Url, credential: Credential) -> Result<Self> {
        let octocrab = build_github_client(hub_url, credential)?;
        Ok(Self { octocrab })
    }
}

#[async_trait::async_trait]
impl WatchApi for Client {
    async fn list_watched(&self, page: PageCursor) -> std::result::Result<WatchedPage, ApiError> {
        subscriptions::list_watched(&self.octocrab, page).await
    }

    async fn delete_subscription(
        &self,
        owner: &str,
        repo: &str,
    ) -> std::result::Result<(), ApiError> {
        Ok(subscriptions::delete_subscription(&self.octocrab, owner, repo).await?)
    }
}

fn build_github_client(
    hub_url: &url::Url,
    credential: Credential,
) -> Result<octocrab::Octocrab> {
    let builder = octocrab::Octocrab::builder()
        .base_uri(hub_url.as_str())
        .map_err(|err| Error::Configuration(format!("invalid hub url {hub_url}: {err}")))?;

    let builder = match credential {
        Credential::Token(token) => builder.personal_token(token),
        Credential::Basic { username, password } => builder.basic_auth(username, password),
    };

    builder
        .build()
        .map_err(|err| Error::Configuration(format!("failed to build GitHub client: {err}")))
}

/// Host whose credentials apply to an API base URL.
pub(crate) fn host_from_hub_url(hub_url: &url::Url) -> Option<String> {
    let host = hub_url.host_str()?;
    if host.eq_ignore_ascii_case("api.github.com") {
        Some("github.com".to_string())
    } else {
        Some(host.to_string())
    }
}
