//! In-process fakes for the external collaborators.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{ExtractionError, GenerationError};
use crate::io::DocumentExtractor;
use crate::llm::TextGenerator;

/// Replies with canned responses in call order, recording every prompt
#[derive(Default)]
pub struct ScriptedGenerator {
    responses: Vec<String>,
    fail_at: Option<usize>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub fn new<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            responses: responses.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Fail the call with this zero-based index
    pub fn failing_at(call: usize) -> Self {
        Self::default().with_failure_at(call)
    }

    pub fn with_failure_at(mut self, call: usize) -> Self {
        self.fail_at = Some(call);
        self
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let call = {
            let mut prompts = self.prompts.lock().unwrap();
            prompts.push(prompt.to_string());
            prompts.len() - 1
        };

        if self.fail_at == Some(call) {
            return Err(GenerationError::Backend(format!(
                "injected failure on call {call}"
            )));
        }

        Ok(self.responses.get(call).cloned().unwrap_or_default())
    }
}

/// Serves document text from memory, keyed by path
#[derive(Default)]
pub struct MemoryExtractor {
    documents: HashMap<PathBuf, String>,
}

impl MemoryExtractor {
    pub fn with_document(mut self, path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        self.documents.insert(path.into(), text.into());
        self
    }
}

impl DocumentExtractor for MemoryExtractor {
    fn extract_text(&self, path: &Path) -> Result<String, ExtractionError> {
        self.documents
            .get(path)
            .cloned()
            .ok_or_else(|| ExtractionError::Read {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such document"),
            })
    }
}
