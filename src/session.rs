//! Explicit per-conversation state.
//!
//! The host application constructs one [`Session`] per conversation and
//! passes it by reference into library calls; nothing here is process-wide.
//! Structured documents are cached per document id, and because they are
//! immutable after construction the cached values are shared via `Arc`.

use crate::error::Result;
use crate::model::StructuredDocument;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Who produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The end user
    User,
    /// The assistant
    Assistant,
}

/// One message in the conversation history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Message author
    pub role: Role,
    /// Message text
    pub text: String,
}

impl Message {
    /// Create a user message.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    /// Create an assistant message.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
        }
    }
}

/// Conversation state: the selected document, a structured-document cache,
/// and the message history.
#[derive(Debug, Clone, Default)]
pub struct Session {
    selected: Option<String>,
    cache: HashMap<String, Arc<StructuredDocument>>,
    history: Vec<Message>,
}

impl Session {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently selected document id, if any.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Select a document. Switching to a different document clears the
    /// message history; re-selecting the current one is a no-op. The
    /// structured cache survives either way.
    pub fn select(&mut self, document_id: impl Into<String>) {
        let document_id = document_id.into();
        if self.selected.as_deref() != Some(document_id.as_str()) {
            log::debug!("session switched to document '{}'", document_id);
            self.history.clear();
            self.selected = Some(document_id);
        }
    }

    /// Get the structured form of a document, structuring it with `load`
    /// on first access and caching the result.
    pub fn get_or_structure<F>(
        &mut self,
        document_id: &str,
        load: F,
    ) -> Result<Arc<StructuredDocument>>
    where
        F: FnOnce() -> Result<StructuredDocument>,
    {
        if let Some(doc) = self.cache.get(document_id) {
            return Ok(Arc::clone(doc));
        }
        let doc = Arc::new(load()?);
        self.cache
            .insert(document_id.to_string(), Arc::clone(&doc));
        Ok(doc)
    }

    /// The cached structured document for an id, if already loaded.
    pub fn cached(&self, document_id: &str) -> Option<Arc<StructuredDocument>> {
        self.cache.get(document_id).map(Arc::clone)
    }

    /// Append a message to the history.
    pub fn push_message(&mut self, message: Message) {
        self.history.push(message);
    }

    /// The conversation history, oldest first.
    pub fn history(&self) -> &[Message] {
        &self.history
    }

    /// The most recent `n` messages, oldest first.
    pub fn recent_history(&self, n: usize) -> &[Message] {
        let start = self.history.len().saturating_sub(n);
        &self.history[start..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Section;

    fn doc(title: &str) -> StructuredDocument {
        StructuredDocument {
            sections: vec![Section::with_content(title, ["body"])],
            tables: Vec::new(),
        }
    }

    #[test]
    fn test_cache_loads_once() {
        let mut session = Session::new();
        let mut loads = 0;

        for _ in 0..3 {
            session
                .get_or_structure("haematology", || {
                    loads += 1;
                    Ok(doc("Haematology"))
                })
                .unwrap();
        }

        assert_eq!(loads, 1);
        assert!(session.cached("haematology").is_some());
        assert!(session.cached("unknown").is_none());
    }

    #[test]
    fn test_load_error_not_cached() {
        let mut session = Session::new();
        let result = session.get_or_structure("bad", || {
            Err(crate::error::Error::UnknownFormat)
        });
        assert!(result.is_err());
        assert!(session.cached("bad").is_none());
    }

    #[test]
    fn test_switching_document_clears_history() {
        let mut session = Session::new();
        session.select("immunology");
        session.push_message(Message::user("hello"));
        session.push_message(Message::assistant("hi"));
        assert_eq!(session.history().len(), 2);

        // Re-selecting is a no-op.
        session.select("immunology");
        assert_eq!(session.history().len(), 2);

        session.select("microbiology");
        assert!(session.history().is_empty());
        assert_eq!(session.selected(), Some("microbiology"));
    }

    #[test]
    fn test_recent_history_window() {
        let mut session = Session::new();
        for i in 0..15 {
            session.push_message(Message::user(format!("m{i}")));
        }
        let recent = session.recent_history(10);
        assert_eq!(recent.len(), 10);
        assert_eq!(recent[0].text, "m5");
    }
}
