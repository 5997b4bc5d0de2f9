use std::sync::LazyLock;

use futures::stream::FuturesUnordered;
use futures::Stream;
use regex::Regex;
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::Deserialize;

use crate::error::FetchError;
use crate::store::{Batch, Outcome};

/// The fields of the issues endpoint payload this tool cares about.
/// Everything else in the response is ignored.
#[derive(Clone, Debug, Deserialize)]
pub struct IssueMeta {
    pub title: String,
    pub number: u64,
}

/// Rewrite an issue/PR web URL into the corresponding API endpoint URL.
///
/// The host is replaced by `api_base`, the path is prefixed with `/repos`,
/// and a `/pull/` segment is normalized to `/issues/` (the API serves both
/// through the unified issues endpoint). Anything that does not look like an
/// http(s) URL is returned unchanged, so the subsequent request fails with a
/// classified error instead of being dropped silently.
pub fn api_url(link: &str, api_base: &str) -> String {
    static RE_WEB_URL: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^https?://[^/]+(/[^?#]*)").unwrap());
    let Some(path) = RE_WEB_URL.captures(link).and_then(|c| c.get(1)) else {
        return link.to_string();
    };
    let path = path.as_str().replacen("/pull/", "/issues/", 1);
    format!("{}/repos{}", api_base.trim_end_matches('/'), path)
}

/// Issue one GET per line of `batch`, all concurrent, with no imposed
/// ordering or concurrency limit.
///
/// Outcomes are yielded as they complete, each tagged with the batch
/// generation and the index of the line it answers. Dropping the stream
/// cancels whatever is still in flight.
pub fn dispatch<'a>(
    http: &'a reqwest::Client,
    batch: &'a Batch,
) -> impl Stream<Item = Outcome> + Unpin + 'a {
    batch
        .lines
        .iter()
        .enumerate()
        .map(|(index, line)| {
            let url = api_url(line, &batch.api_base);
            async move {
                let result = fetch_issue(http, &batch.token, &url).await;
                Outcome {
                    generation: batch.generation,
                    index,
                    result,
                }
            }
        })
        .collect::<FuturesUnordered<_>>()
}

/// Fetch the metadata of a single issue/PR from its API URL.
///
/// A non-empty token is attached as a bearer authorization header; an empty
/// one sends the request anonymously. All failure modes (unparseable URL,
/// error status, transport, payload mismatch) come back classified.
async fn fetch_issue(
    http: &reqwest::Client,
    token: &str,
    url: &str,
) -> Result<IssueMeta, FetchError> {
    log::debug!("GET {url}");
    let mut request = http
        .get(url)
        .header(ACCEPT, "application/vnd.github+json")
        .header(
            USER_AGENT,
            concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")),
        );
    if !token.is_empty() {
        request = request.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    request
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(FetchError::classify)?
        .json()
        .await
        .map_err(FetchError::classify)
}
