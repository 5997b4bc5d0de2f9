use crate::api::IssueMeta;

/// A resolved link: the original URL merged with the metadata fetched for it.
///
/// Immutable once created; the aggregator owns one per successfully resolved
/// input index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkRecord {
    pub url: String,
    pub title: String,
    pub number: u64,
    pub owner: String,
    pub repo: String,
}

impl LinkRecord {
    pub fn new(meta: IssueMeta, url: &str) -> Self {
        let (owner, repo) = owner_and_repo(url);
        Self {
            url: url.to_string(),
            title: meta.title,
            number: meta.number,
            owner,
            repo,
        }
    }
}

impl std::fmt::Display for LinkRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}#{}", self.owner, self.repo, self.number)
    }
}

/// Extract owner and repo from an issue/PR web URL.
///
/// The 4th and 5th `/`-separated segments of the URL (after scheme, empty
/// authority marker and host), defaulting to empty strings for URLs too
/// short to carry them.
pub fn owner_and_repo(url: &str) -> (String, String) {
    let mut segments = url.split('/');
    let owner = segments.nth(3).unwrap_or("").to_string();
    let repo = segments.next().unwrap_or("").to_string();
    (owner, repo)
}
