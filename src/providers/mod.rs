//! Generative text providers.
//!
//! The translation proxy only needs "prompt in, text out", so providers sit behind
//! [`TextGenerator`]. The HTTP layer holds a `dyn TextGenerator`, which lets tests
//! swap in a fake without touching the network.

use crate::errors::Result;
use async_trait::async_trait;
use std::fmt::Debug;

/// A service that turns a prompt into generated text
#[async_trait]
pub trait TextGenerator: Send + Sync + Debug {
    /// Sends `prompt` in a single request and returns the first candidate's text.
    ///
    /// Implementations must not retry.
    async fn generate(&self, prompt: &str) -> Result<String>;
}

pub mod gemini;

pub use gemini::GeminiClient;
