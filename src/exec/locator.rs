// src/exec/locator.rs

//! Resolution of the backend executable path.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::{BridgeError, Result};
use crate::fs::FileSystem;

/// Name of the compiled backend binary.
pub const BACKEND_FILE_NAME: &str = "ode_solver";

/// Finds the backend executable.
///
/// The candidate list is owned by the caller and checked in order, so tests
/// (and config files) decide where to look.
#[derive(Debug, Clone)]
pub struct ExecutableLocator {
    candidates: Vec<PathBuf>,
}

impl ExecutableLocator {
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }

    /// Locator over [`default_search_paths`].
    pub fn with_default_paths() -> Self {
        Self::new(default_search_paths())
    }

    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// Resolve the executable path.
    ///
    /// - `explicit` is used verbatim when given; only its existence is checked
    ///   and the candidate list is not consulted.
    /// - otherwise the first existing candidate wins.
    pub fn resolve(&self, fs: &dyn FileSystem, explicit: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = explicit {
            if fs.exists(path) {
                debug!(path = %path.display(), "using explicit backend executable");
                return Ok(path.to_path_buf());
            }
            return Err(BridgeError::NotFound {
                candidates: vec![path.to_path_buf()],
            });
        }

        for candidate in &self.candidates {
            let found = fs.exists(candidate);
            debug!(path = %candidate.display(), found, "probing backend candidate");
            if found {
                return Ok(candidate.clone());
            }
        }

        Err(BridgeError::NotFound {
            candidates: self.candidates.clone(),
        })
    }
}

impl Default for ExecutableLocator {
    fn default() -> Self {
        Self::with_default_paths()
    }
}

/// Standard places a freshly built backend ends up.
///
/// - `build/ode_solver` (out-of-tree CMake build in the working directory)
/// - `./ode_solver`
/// - `<dir of running binary>/../build/ode_solver`
pub fn default_search_paths() -> Vec<PathBuf> {
    let mut paths = vec![
        Path::new("build").join(BACKEND_FILE_NAME),
        Path::new(".").join(BACKEND_FILE_NAME),
    ];

    if let Some(root) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().and_then(Path::parent).map(Path::to_path_buf))
    {
        paths.push(root.join("build").join(BACKEND_FILE_NAME));
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::mock::MockFileSystem;

    #[test]
    fn explicit_path_wins_without_probing() {
        let fs = MockFileSystem::new();
        fs.add_file("/opt/solver/ode_solver", b"bin".to_vec());
        fs.add_file("build/ode_solver", b"bin".to_vec());

        let locator = ExecutableLocator::new(vec![PathBuf::from("build/ode_solver")]);
        let path = locator
            .resolve(&fs, Some(Path::new("/opt/solver/ode_solver")))
            .unwrap();
        assert_eq!(path, PathBuf::from("/opt/solver/ode_solver"));
    }

    #[test]
    fn missing_explicit_path_is_not_found_even_if_candidates_exist() {
        let fs = MockFileSystem::new();
        fs.add_file("build/ode_solver", b"bin".to_vec());

        let locator = ExecutableLocator::new(vec![PathBuf::from("build/ode_solver")]);
        let err = locator
            .resolve(&fs, Some(Path::new("nope/ode_solver")))
            .unwrap_err();
        match err {
            BridgeError::NotFound { candidates } => {
                assert_eq!(candidates, vec![PathBuf::from("nope/ode_solver")]);
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn first_existing_candidate_in_order() {
        let fs = MockFileSystem::new();
        fs.add_file("second/ode_solver", b"bin".to_vec());
        fs.add_file("third/ode_solver", b"bin".to_vec());

        let locator = ExecutableLocator::new(vec![
            PathBuf::from("first/ode_solver"),
            PathBuf::from("second/ode_solver"),
            PathBuf::from("third/ode_solver"),
        ]);
        assert_eq!(
            locator.resolve(&fs, None).unwrap(),
            PathBuf::from("second/ode_solver")
        );
    }

    #[test]
    fn no_candidates_is_not_found() {
        let fs = MockFileSystem::new();
        let locator = ExecutableLocator::new(vec![PathBuf::from("build/ode_solver")]);
        assert!(matches!(
            locator.resolve(&fs, None),
            Err(BridgeError::NotFound { .. })
        ));

        let empty = ExecutableLocator::new(Vec::new());
        assert!(matches!(
            empty.resolve(&fs, None),
            Err(BridgeError::NotFound { .. })
        ));
    }

    #[test]
    fn default_paths_start_with_build_dir() {
        let paths = default_search_paths();
        assert_eq!(paths[0], Path::new("build").join(BACKEND_FILE_NAME));
        assert_eq!(paths[1], Path::new(".").join(BACKEND_FILE_NAME));
    }
}
