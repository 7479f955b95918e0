use crate::error::{RankerError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::fmt;
use std::time::Duration;

const API_BASE: &str = "https://api.github.com/repos";
const RAW_MEDIA_TYPE: &str = "application/vnd.github.v3.raw";
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

static GITHUB_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"github\.com/([^/]+)/([^/]+)").expect("github url regex is valid"));

const FORMAT_HINT: &str = "expected owner/repo or https://github.com/owner/repo";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub repo: String,
}

impl RepoRef {
    pub fn parse(target: &str) -> Result<Self> {
        let invalid = || RankerError::InvalidTarget(format!("{target}: {FORMAT_HINT}"));
        let (owner, repo) = if target.contains("github.com") {
            let caps = GITHUB_URL.captures(target).ok_or_else(invalid)?;
            (caps[1].to_string(), caps[2].to_string())
        } else {
            let parts: Vec<&str> = target.split('/').collect();
            match parts.as_slice() {
                [owner, repo] if !owner.is_empty() && !repo.is_empty() => {
                    (owner.to_string(), repo.to_string())
                }
                _ => return Err(invalid()),
            }
        };

        let repo = repo.strip_suffix(".git").unwrap_or(&repo).to_string();
        Ok(Self { owner, repo })
    }

    pub fn readme_url(&self) -> String {
        format!("{API_BASE}/{}/{}/readme", self.owner, self.repo)
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

fn fetch_error(err: reqwest::Error) -> RankerError {
    RankerError::Fetch(err.to_string())
}

/// One request, no retries.
pub fn fetch_readme(repo: &RepoRef) -> Result<String> {
    let client = Client::builder()
        .timeout(FETCH_TIMEOUT)
        .user_agent(concat!("readme-ranker/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let response = client
        .get(repo.readme_url())
        .header(reqwest::header::ACCEPT, RAW_MEDIA_TYPE)
        .send()
        .map_err(fetch_error)?;

    match response.status() {
        StatusCode::NOT_FOUND => Err(RankerError::RemoteNotFound(repo.to_string())),
        StatusCode::FORBIDDEN => Err(RankerError::RateLimited),
        status if !status.is_success() => {
            let detail = format!("GitHub returned {status} for {repo}");
            Err(RankerError::Fetch(detail))
        }
        _ => response.text().map_err(fetch_error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_owner_repo_shorthand() {
        let repo = RepoRef::parse("tokio-rs/tokio").expect("shorthand should parse");
        assert_eq!(repo.owner, "tokio-rs");
        assert_eq!(repo.repo, "tokio");
        assert_eq!(
            repo.readme_url(),
            "https://api.github.com/repos/tokio-rs/tokio/readme"
        );
    }

    #[test]
    fn parses_full_url_and_strips_git_suffix() {
        let repo = RepoRef::parse("https://github.com/serde-rs/serde.git")
            .expect("url should parse");
        assert_eq!(repo.to_string(), "serde-rs/serde");

        let deep = RepoRef::parse("https://github.com/serde-rs/json/tree/master/src")
            .expect("deep url should parse");
        assert_eq!(deep.to_string(), "serde-rs/json");
    }

    #[test]
    fn rejects_malformed_targets() {
        for bad in ["a/b/c", "owner/", "https://github.com/only-owner"] {
            let err = RepoRef::parse(bad).expect_err("target should be rejected");
            assert!(matches!(err, RankerError::InvalidTarget(_)), "{bad}");
        }
    }
}
