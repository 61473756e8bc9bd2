use super::types::{PER_PAGE, PageCursor, WatchedPage, WatchedRepository};
use crate::error::ApiError;

const WATCHED_ROUTE: &str = "/user/subscriptions";

#[derive(Debug, serde::Serialize)]
struct ListParams {
    per_page: u8,
    page: PageCursor,
}

pub(super) async fn list_watched(
    client: &octocrab::Octocrab,
    page: PageCursor,
) -> Result<WatchedPage, ApiError> {
    let params = ListParams {
        per_page: PER_PAGE,
        page,
    };
    let resp: octocrab::Page<WatchedRepository> =
        client.get(WATCHED_ROUTE, Some(&params)).await?;

    let next = match resp.next.as_ref() {
        Some(link) => Some(next_page(&link.to_string())?),
        None => None,
    };

    Ok(WatchedPage {
        repositories: resp.items,
        next,
    })
}

pub(super) async fn delete_subscription(
    client: &octocrab::Octocrab,
    owner: &str,
    repo: &str,
) -> octocrab::Result<()> {
    let response = client
        ._delete(subscription_route(owner, repo), None::<&()>)
        .await?;
    octocrab::map_github_error(response).await?;
    Ok(())
}

fn subscription_route(owner: &str, repo: &str) -> String {
    format!("/repos/{owner}/{repo}/subscription")
}

/// A `rel="next"` link without a page number is an error, not the last page.
fn next_page(link: &str) -> Result<PageCursor, ApiError> {
    link.split_once('?')
        .and_then(|(_, query)| page_from_query(query))
        .ok_or_else(|| format!("next page link has no page number: {link}").into())
}

/// Reads the `page` parameter out of a `rel="next"` link query string.
fn page_from_query(query: &str) -> Option<PageCursor> {
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "page")
        .and_then(|(_, value)| value.parse().ok())
}
