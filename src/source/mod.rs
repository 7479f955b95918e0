pub mod github;
pub mod local;

use crate::error::Result;
use github::RepoRef;
use std::path::PathBuf;
use tracing::info;

/// Where the README comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Local(PathBuf),
    Remote(RepoRef),
}

/// Document text plus a label for reports: `local` or the remote target as given.
#[derive(Debug, Clone)]
pub struct LoadedReadme {
    pub content: String,
    pub source: String,
}

/// `.`, anything starting with `.` or `/`, and bare names are local paths;
/// everything else is treated as a GitHub repository.
pub fn is_local_target(target: &str) -> bool {
    target == "." || target.starts_with('.') || target.starts_with('/') || !target.contains('/')
}

pub fn resolve(target: &str) -> Result<Target> {
    if is_local_target(target) {
        Ok(Target::Local(PathBuf::from(target)))
    } else {
        Ok(Target::Remote(RepoRef::parse(target)?))
    }
}

pub fn load(target: &str) -> Result<LoadedReadme> {
    match resolve(target)? {
        Target::Local(path) => {
            let readme = local::locate_readme(&path)?;
            info!(path = %readme.display(), "reading local README");
            Ok(LoadedReadme {
                content: local::read_readme(&readme)?,
                source: "local".to_string(),
            })
        }
        Target::Remote(repo) => {
            info!(repo = %repo, "fetching README from GitHub");
            Ok(LoadedReadme {
                content: github::fetch_readme(&repo)?,
                source: target.to_string(),
            })
        }
    }
}
