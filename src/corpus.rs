//! Named document corpus.
//!
//! A corpus maps stable document ids (typically department names) to
//! .docx files under a base directory, verifies their
//! presence up front, and preloads them all in one pass, in parallel when
//! enabled, since the documents are independent.

use crate::error::{Error, Result};
use crate::model::StructuredDocument;
use crate::parser::{DocxParser, ParseOptions};
use rayon::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// A registry of named documents under one base directory.
#[derive(Debug, Clone)]
pub struct Corpus {
    base_dir: PathBuf,
    entries: Vec<(String, String)>,
    options: ParseOptions,
}

impl Corpus {
    /// Create an empty corpus rooted at `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            entries: Vec::new(),
            options: ParseOptions::default(),
        }
    }

    /// Set the parse options used for every document.
    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    /// Register a document id and its file name (relative to the base
    /// directory). Registration order is preserved.
    pub fn register(mut self, id: impl Into<String>, file_name: impl Into<String>) -> Self {
        self.entries.push((id.into(), file_name.into()));
        self
    }

    /// Registered document ids, in registration order.
    pub fn ids(&self) -> Vec<&str> {
        self.entries.iter().map(|(id, _)| id.as_str()).collect()
    }

    /// Number of registered documents.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no documents are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve the path of a registered document.
    pub fn path_of(&self, id: &str) -> Option<PathBuf> {
        self.entries
            .iter()
            .find(|(entry_id, _)| entry_id == id)
            .map(|(_, file)| self.base_dir.join(file))
    }

    /// Ids of registered documents whose files are missing on disk.
    ///
    /// Meant to run before any load, so a misconfigured deployment fails
    /// with a clear message instead of a mid-session load error.
    pub fn missing(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, file)| !self.base_dir.join(file).is_file())
            .map(|(id, _)| id.as_str())
            .collect()
    }

    /// Verify that every registered file exists.
    pub fn verify(&self) -> Result<()> {
        let missing = self.missing();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::Other(format!(
                "missing protocol documents: {}",
                missing.join(", ")
            )))
        }
    }

    /// Structure one registered document.
    pub fn load(&self, id: &str) -> Result<StructuredDocument> {
        let path = self
            .path_of(id)
            .ok_or_else(|| Error::Other(format!("unknown document id: {id}")))?;
        load_one(&path, &self.options)
    }

    /// Structure every registered document, failing fast on the first
    /// error. Documents are processed in parallel when the parse options
    /// allow it; the result map is keyed by document id.
    pub fn load_all(&self) -> Result<HashMap<String, StructuredDocument>> {
        self.verify()?;
        log::debug!(
            "loading corpus: {} documents from {}",
            self.entries.len(),
            self.base_dir.display()
        );

        if self.options.parallel {
            self.entries
                .par_iter()
                .map(|(id, file)| {
                    let doc = load_one(&self.base_dir.join(file), &self.options)?;
                    Ok((id.clone(), doc))
                })
                .collect()
        } else {
            self.entries
                .iter()
                .map(|(id, file)| {
                    let doc = load_one(&self.base_dir.join(file), &self.options)?;
                    Ok((id.clone(), doc))
                })
                .collect()
        }
    }
}

fn load_one(path: &Path, options: &ParseOptions) -> Result<StructuredDocument> {
    DocxParser::open_with_options(path, options.clone())?.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_order_and_lookup() {
        let corpus = Corpus::new("/tmp/lab_docs")
            .register("Chemical Pathology", "chemical_pathology.docx")
            .register("Immunology", "immunology.docx");

        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.ids(), vec!["Chemical Pathology", "Immunology"]);
        assert_eq!(
            corpus.path_of("Immunology"),
            Some(PathBuf::from("/tmp/lab_docs/immunology.docx"))
        );
        assert_eq!(corpus.path_of("Histology"), None);
    }

    #[test]
    fn test_missing_files_reported() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("present.docx"), b"stub").unwrap();

        let corpus = Corpus::new(dir.path())
            .register("Present", "present.docx")
            .register("Absent", "absent.docx");

        assert_eq!(corpus.missing(), vec!["Absent"]);
        assert!(corpus.verify().is_err());
    }

    #[test]
    fn test_unknown_id_load() {
        let corpus = Corpus::new("/tmp");
        assert!(corpus.load("nope").is_err());
    }
}
