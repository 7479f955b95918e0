use crate::error::{RankerError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const PREFERRED_NAME: &str = "README.md";
const ACCEPTED_NAMES: [&str; 3] = ["readme.md", "readme.markdown", "readme"];

/// A file path is used as-is; a directory is searched for a README,
/// preferring `README.md` and then any case variant.
pub fn locate_readme(target: &Path) -> Result<PathBuf> {
    if target.is_file() {
        return Ok(target.to_path_buf());
    }
    if !target.is_dir() {
        return Err(RankerError::ReadmeNotFound(target.display().to_string()));
    }

    let preferred = target.join(PREFERRED_NAME);
    if preferred.is_file() {
        return Ok(preferred);
    }

    let mut candidates: Vec<PathBuf> = WalkDir::new(target)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            let name = entry.file_name().to_string_lossy().to_lowercase();
            ACCEPTED_NAMES.contains(&name.as_str())
        })
        .map(|entry| entry.path().to_path_buf())
        .collect();
    candidates.sort();

    candidates
        .into_iter()
        .next()
        .ok_or_else(|| {
            RankerError::ReadmeNotFound(target.join(PREFERRED_NAME).display().to_string())
        })
}

/// Invalid UTF-8 sequences become U+FFFD, so non-UTF-8 READMEs still score.
pub fn read_readme(path: &Path) -> Result<String> {
    Ok(String::from_utf8_lossy(&std::fs::read(path)?).into_owned())
}
