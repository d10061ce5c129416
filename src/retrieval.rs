//! Local keyword retrieval over the knowledge-base directory
//!
//! Routes a question to a text file by case-insensitive substring match against
//! an ordered keyword index. First matching keyword wins; no match means no
//! file I/O at all.

use crate::errors::{AdvisorError, Result};
use std::fs;
use std::path::PathBuf;

/// The built-in finance index: (keyword, file name), in match-priority order
const DEFAULT_INDEX: [(&str, &str); 5] = [
    ("upi", "upi_info.txt"),
    ("fraud", "fraud_tips.txt"),
    ("budget", "budgeting.txt"),
    ("card", "cards.txt"),
    ("interest", "interest.txt"),
];

/// Keyword-indexed knowledge base rooted at a directory of UTF-8 text files
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    root: PathBuf,
    index: Vec<(String, String)>,
}

impl KnowledgeBase {
    /// Create a knowledge base with an explicit ordered index
    pub fn new(root: impl Into<PathBuf>, index: Vec<(String, String)>) -> Self {
        Self {
            root: root.into(),
            index,
        }
    }

    /// Create a knowledge base with the built-in five-keyword finance index
    pub fn with_default_index(root: impl Into<PathBuf>) -> Self {
        let index = DEFAULT_INDEX
            .iter()
            .map(|(k, f)| (k.to_string(), f.to_string()))
            .collect();
        Self::new(root, index)
    }

    /// Look up the first matching document for a question.
    ///
    /// Returns `Ok(None)` when no keyword appears in the lower-cased question.
    /// A matched keyword whose file cannot be read as UTF-8 text is a distinct
    /// `AdvisorError::Retrieval`, not a silent no-match.
    pub fn retrieve(&self, question: &str) -> Result<Option<String>> {
        let question_lower = question.to_lowercase();

        for (keyword, file_name) in &self.index {
            if question_lower.contains(keyword.as_str()) {
                let path = self.root.join(file_name);
                return fs::read_to_string(&path)
                    .map(Some)
                    .map_err(|source| AdvisorError::Retrieval {
                        file: file_name.clone(),
                        source,
                    });
            }
        }

        Ok(None)
    }

    /// Root directory of the knowledge base
    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    /// Keywords in match-priority order
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.index.iter().map(|(k, _)| k.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn kb_with_files(files: &[(&str, &str)]) -> (TempDir, KnowledgeBase) {
        let dir = TempDir::new().unwrap();
        for (name, contents) in files {
            fs::write(dir.path().join(name), contents).unwrap();
        }
        let kb = KnowledgeBase::with_default_index(dir.path());
        (dir, kb)
    }

    #[test]
    fn test_no_keyword_returns_none_without_io() {
        // No files exist: a read attempt would error, so None proves no I/O happened
        let dir = TempDir::new().unwrap();
        let kb = KnowledgeBase::with_default_index(dir.path());

        let result = kb.retrieve("how do I open a savings account?").unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_single_keyword_returns_exact_contents() {
        let (_dir, kb) = kb_with_files(&[("fraud_tips.txt", "Never share your OTP.\n")]);

        let result = kb.retrieve("How do I avoid FRAUD online?").unwrap();
        assert_eq!(result.as_deref(), Some("Never share your OTP.\n"));
    }

    #[test]
    fn test_two_keywords_first_index_entry_wins() {
        let (_dir, kb) = kb_with_files(&[
            ("upi_info.txt", "upi doc"),
            ("interest.txt", "interest doc"),
        ]);

        // "interest" appears first in the question, but "upi" comes first in the index
        let result = kb.retrieve("what interest applies to UPI transfers?").unwrap();
        assert_eq!(result.as_deref(), Some("upi doc"));
    }

    #[test]
    fn test_matched_but_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let kb = KnowledgeBase::with_default_index(dir.path());

        let result = kb.retrieve("tell me about credit cards");
        match result {
            Err(AdvisorError::Retrieval { file, .. }) => assert_eq!(file, "cards.txt"),
            other => panic!("expected Retrieval error, got {:?}", other),
        }
    }

    #[test]
    fn test_retrieve_is_idempotent() {
        let (_dir, kb) = kb_with_files(&[("budgeting.txt", "50/30/20 rule")]);

        let first = kb.retrieve("help me budget").unwrap();
        let second = kb.retrieve("help me budget").unwrap();
        assert_eq!(first, second);
        assert_eq!(first.as_deref(), Some("50/30/20 rule"));
    }

    #[test]
    fn test_custom_index_order() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.txt"), "beta").unwrap();
        fs::write(dir.path().join("a.txt"), "alpha").unwrap();

        let kb = KnowledgeBase::new(
            dir.path(),
            vec![
                ("beta".to_string(), "b.txt".to_string()),
                ("alpha".to_string(), "a.txt".to_string()),
            ],
        );

        let result = kb.retrieve("alpha and beta both appear").unwrap();
        assert_eq!(result.as_deref(), Some("beta"));
    }
}
