use crate::error::{Error, Result};
use crate::github::{PageCursor, WatchApi, WatchedRepository};

const FIRST_PAGE: PageCursor = 1;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanReport {
    pub pages: usize,
    pub visited: usize,
    pub unsubscribed: usize,
}

/// Walks every page of watched repositories and drops the subscription of each
/// one, or only logs what it would do when `simulate` is set.
pub struct Unsubscriber<'a, C> {
    client: &'a C,
    simulate: bool,
}

impl<'a, C: WatchApi> Unsubscriber<'a, C> {
    pub fn new(client: &'a C, simulate: bool) -> Self {
        Self { client, simulate }
    }

    /// Stops at the first failed call; nothing after it is listed or mutated.
    pub async fn run(&self) -> Result<ScanReport> {
        let mut report = ScanReport::default();
        let mut page = FIRST_PAGE;

        loop {
            let watched = self
                .client
                .list_watched(page)
                .await
                .map_err(|source| Error::ListWatched { page, source })?;
            report.pages += 1;
            tracing::debug!(page, count = watched.repositories.len(), "fetched watched page");

            for repo in &watched.repositories {
                self.unsubscribe(repo).await?;
                report.visited += 1;
                if !self.simulate {
                    report.unsubscribed += 1;
                }
            }

            match watched.next {
                Some(next) if next > page => page = next,
                Some(next) => {
                    tracing::warn!(page, next, "next page does not advance; stopping");
                    break;
                }
                None => break,
            }
        }

        Ok(report)
    }

    async fn unsubscribe(&self, repo: &WatchedRepository) -> Result<()> {
        tracing::info!(
            simulation = self.simulate,
            owner = repo.owner(),
            repo = repo.name(),
            "unsubscribing"
        );
        if self.simulate {
            return Ok(());
        }

        self.client
            .delete_subscription(repo.owner(), repo.name())
            .await
            .map_err(|source| Error::Unsubscribe {
                owner: repo.owner().to_string(),
                repo: repo.name().to_string(),
                source,
            })?;
        tracing::debug!(repository = %repo, "subscription deleted");
        Ok(())
    }
}
