//! Fragment discovery.
//!
//! A fragment is one named section template. Sources hand fragments to the
//! assembler already ordered by name; the directory source reads them from
//! disk, and a plain `Vec<Fragment>` serves as an in-memory source.

use crate::error::{PropgenError, Result};
use globset::{Glob, GlobMatcher};
use std::path::PathBuf;

/// A named template unit.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Fragment {
    /// Ordering key (the file name for directory sources).
    pub name: String,
    /// Raw template text.
    pub text: String,
}

impl Fragment {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// An ordered collection of named text units.
pub trait FragmentSource {
    /// Return every fragment, sorted lexicographically by name.
    fn fragments(&self) -> Result<Vec<Fragment>>;
}

impl FragmentSource for Vec<Fragment> {
    fn fragments(&self) -> Result<Vec<Fragment>> {
        let mut fragments = self.clone();
        fragments.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(fragments)
    }
}

/// Fragments stored as files in one directory.
///
/// Only regular files whose name matches the glob are read; subdirectories
/// are not descended into.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
    matcher: GlobMatcher,
}

impl DirectorySource {
    /// Create a source for `dir`, keeping file names that match `pattern`.
    pub fn new(dir: impl Into<PathBuf>, pattern: &str) -> Result<Self> {
        let matcher = Glob::new(pattern)
            .map_err(|e| {
                PropgenError::Config(format!("invalid fragment pattern '{}': {}", pattern, e))
            })?
            .compile_matcher();

        Ok(Self {
            dir: dir.into(),
            matcher,
        })
    }

    /// Matching file names, sorted.
    pub fn file_names(&self) -> Result<Vec<String>> {
        let entries = std::fs::read_dir(&self.dir).map_err(|e| PropgenError::io(&self.dir, e))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| PropgenError::io(&self.dir, e))?;
            let file_type = entry
                .file_type()
                .map_err(|e| PropgenError::io(entry.path(), e))?;
            if !file_type.is_file() {
                continue;
            }

            let file_name = entry.file_name();
            if !self.matcher.is_match(&file_name) {
                continue;
            }
            let name = file_name.into_string().map_err(|_| {
                PropgenError::io(
                    entry.path(),
                    std::io::Error::new(
                        std::io::ErrorKind::InvalidData,
                        "section file name is not valid UTF-8",
                    ),
                )
            })?;
            names.push(name);
        }

        names.sort();
        Ok(names)
    }
}

impl FragmentSource for DirectorySource {
    fn fragments(&self) -> Result<Vec<Fragment>> {
        let names = self.file_names()?;
        log::info!("fragments found in {}: {:?}", self.dir.display(), names);

        names
            .into_iter()
            .map(|name| -> Result<Fragment> {
                let path = self.dir.join(&name);
                let text = std::fs::read_to_string(&path).map_err(|e| PropgenError::io(&path, e))?;
                Ok(Fragment::new(name, text))
            })
            .collect()
    }
}
