use git2::{ErrorCode, Repository};
use std::path::Path;

/// True when `path` itself is the root of a git repository.
///
/// Parent directories are not searched: a project directory nested inside
/// another checkout still needs its own `git init`.
pub fn is_repository(path: &Path) -> bool {
    if !path.is_dir() {
        return false;
    }

    match Repository::open(path) {
        Ok(_) => true,
        Err(e) if e.code() == ErrorCode::NotFound => false,
        Err(e) => {
            log::debug!("Failed to open repository at {path:?}: {e}");
            false
        }
    }
}
