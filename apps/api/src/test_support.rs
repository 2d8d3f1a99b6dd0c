//! Scripted stand-ins for the external clients, shared by unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::llm_client::{CompletionProvider, LlmError};
use crate::search_client::{SearchError, SearchHit, SearchOptions, SearchProvider};

pub fn hit(url: &str, title: &str, text: Option<&str>) -> SearchHit {
    SearchHit {
        url: url.to_string(),
        title: Some(title.to_string()),
        text: text.map(str::to_string),
    }
}

/// Returns the same hits (or failure) for every call and records the options it saw.
pub struct FakeSearch {
    outcome: Result<Vec<SearchHit>, String>,
    pub calls: Mutex<Vec<(&'static str, SearchOptions)>>,
}

impl FakeSearch {
    pub fn returning(hits: Vec<SearchHit>) -> Self {
        Self {
            outcome: Ok(hits),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn recorded(&self) -> Vec<(&'static str, SearchOptions)> {
        self.calls.lock().unwrap().clone()
    }

    fn respond(
        &self,
        mode: &'static str,
        options: &SearchOptions,
    ) -> Result<Vec<SearchHit>, SearchError> {
        self.calls.lock().unwrap().push((mode, options.clone()));
        self.outcome.clone().map_err(|message| SearchError::Api {
            status: 503,
            message,
        })
    }
}

#[async_trait]
impl SearchProvider for FakeSearch {
    async fn search(&self, options: &SearchOptions) -> Result<Vec<SearchHit>, SearchError> {
        self.respond("search", options)
    }

    async fn search_and_contents(
        &self,
        options: &SearchOptions,
    ) -> Result<Vec<SearchHit>, SearchError> {
        self.respond("search_and_contents", options)
    }
}

/// Pops scripted replies in order and records every prompt.
pub struct FakeLlm {
    replies: Mutex<VecDeque<Result<String, String>>>,
    pub prompts: Mutex<Vec<String>>,
}

impl FakeLlm {
    pub fn new(replies: Vec<Result<&str, &str>>) -> Self {
        Self {
            replies: Mutex::new(
                replies
                    .into_iter()
                    .map(|r| r.map(str::to_string).map_err(str::to_string))
                    .collect(),
            ),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Replies for the summary, name, and social-links prompts, in that order.
    pub fn answering(summary: &str, name: &str, links: &str) -> Self {
        Self::new(vec![Ok(summary), Ok(name), Ok(links)])
    }

    pub fn recorded(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for FakeLlm {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match self.replies.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(message)) => Err(LlmError::Api {
                status: 500,
                message,
            }),
            None => Err(LlmError::EmptyChoices),
        }
    }
}
