#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ozilly::controller::Controller;
use ozilly::llm::{ClientError, LogoRenderer, TextGenerator};
use ozilly_core::history::HistoryStore;
use tempfile::TempDir;

pub fn reply(name: &str, logo: &str) -> String {
    format!("Startup Name: {}\nLogo Idea: {}", name, logo)
}

/// Generator that plays back queued replies and records every call.
///
/// Once the queue is empty it answers with numbered names.
#[derive(Default)]
pub struct ScriptedGenerator {
    replies: Mutex<VecDeque<Result<String, ClientError>>>,
    calls: Mutex<Vec<(String, Vec<String>)>>,
}

impl ScriptedGenerator {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push(&self, reply: Result<String, ClientError>) {
        self.replies.lock().unwrap().push_back(reply);
    }

    pub fn push_reply(&self, name: &str, logo: &str) {
        self.push(Ok(reply(name, logo)));
    }

    pub fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, idea: &str, blacklist: &[String]) -> Result<String, ClientError> {
        let n = {
            let mut calls = self.calls.lock().unwrap();
            calls.push((idea.to_string(), blacklist.to_vec()));
            calls.len()
        };
        let next = self.replies.lock().unwrap().pop_front();
        next.unwrap_or_else(|| Ok(reply(&format!("Name{}", n), &format!("Logo{}", n))))
    }
}

/// Renderer that always returns the same result.
pub struct FixedRenderer {
    url: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl FixedRenderer {
    pub fn succeeding(url: &str) -> Arc<Self> {
        Arc::new(Self {
            url: Some(url.to_string()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            url: None,
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LogoRenderer for FixedRenderer {
    async fn render(&self, logo_idea: &str) -> Option<String> {
        self.prompts.lock().unwrap().push(logo_idea.to_string());
        self.url.clone()
    }
}

pub struct Fixture {
    pub dir: TempDir,
    pub generator: Arc<ScriptedGenerator>,
    pub renderer: Arc<FixedRenderer>,
    pub controller: Controller,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_renderer(FixedRenderer::succeeding("https://images.test/logo.png"))
    }

    pub fn with_renderer(renderer: Arc<FixedRenderer>) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store = HistoryStore::new(dir.path().join("prompts_and_results.json"));
        let generator = ScriptedGenerator::new();
        let controller = Controller::new(store, generator.clone(), renderer.clone());
        Self {
            dir,
            generator,
            renderer,
            controller,
        }
    }

    pub fn history(&self) -> &HistoryStore {
        self.controller.history_store()
    }
}
