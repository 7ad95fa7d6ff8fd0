use serde::{Deserialize, Serialize};

use crate::types::DocumentId;

/// A tokenized document, the input unit of the index build pipeline
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    /// Tokens in source-text order, already cleaned
    pub tokens: Vec<String>,
}

impl Document {
    pub fn new(id: DocumentId, tokens: Vec<String>) -> Self {
        Self { id, tokens }
    }
}

/// A raw document as ingested from JSONL, before tokenization
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RawDocument {
    pub id: DocumentId,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_document_json() {
        let raw: RawDocument = serde_json::from_str(r#"{"id": 3, "text": "a winning six"}"#)
            .unwrap();
        assert_eq!(raw.id, 3);
        assert_eq!(raw.text, "a winning six");
    }

    #[test]
    fn test_document_new() {
        let doc = Document::new(0, vec!["six".to_string(), "four".to_string()]);
        assert_eq!(doc.id, 0);
        assert_eq!(doc.tokens.len(), 2);
    }
}
