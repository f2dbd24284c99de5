use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::{config::RelayConfig, error::UpstreamError, gemini::TextGenerator, state::AppState};

type Outcome = Box<dyn Fn() -> Result<String, UpstreamError> + Send + Sync>;

struct Recorder {
    outcome: Outcome,
    prompts: Mutex<Vec<String>>,
}

#[async_trait]
impl TextGenerator for Recorder {
    async fn generate(&self, prompt: &str) -> Result<String, UpstreamError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        (self.outcome)()
    }
}

/// Generator double that records every prompt it receives.
pub(crate) struct StubGenerator {
    recorder: Arc<Recorder>,
    max_input_chars: Option<usize>,
}

impl StubGenerator {
    pub fn replying(text: &str) -> Self {
        let text = text.to_string();
        Self::with_outcome(Box::new(move || Ok(text.clone())))
    }

    pub fn failing<F>(make_err: F) -> Self
    where
        F: Fn() -> UpstreamError + Send + Sync + 'static,
    {
        Self::with_outcome(Box::new(move || Err(make_err())))
    }

    fn with_outcome(outcome: Outcome) -> Self {
        Self {
            recorder: Arc::new(Recorder {
                outcome,
                prompts: Mutex::new(Vec::new()),
            }),
            max_input_chars: None,
        }
    }

    pub fn with_max_input_chars(mut self, max: usize) -> Self {
        self.max_input_chars = Some(max);
        self
    }

    pub fn state(&self) -> AppState {
        let mut config = RelayConfig::from_lookup(|key: &str| match key {
            "GEMINI_API_KEY" => Some("test-key".to_string()),
            _ => None,
        })
        .expect("test config");
        if let Some(max) = self.max_input_chars {
            config.max_input_chars = max;
        }
        AppState::new(config, self.recorder.clone())
    }

    pub fn calls(&self) -> usize {
        self.recorder.prompts.lock().unwrap().len()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.recorder.prompts.lock().unwrap().clone()
    }
}
