mod auth;
mod client;
mod subscriptions;
mod types;

pub(crate) use auth::resolve_credential;
pub(crate) use client::host_from_hub_url;
pub use client::{Client, WatchApi};
pub use types::{Credential, PageCursor, WatchedRepository};
#[cfg(test)]
pub use types::{Owner, WatchedPage};

pub(crate) mod prelude {
    pub use super::{Client, Credential};
    pub(crate) use super::{host_from_hub_url, resolve_credential};
}
