//! ContentProvider trait for the external generative-text backend.
//!
//! This trait enables dependency injection for testability,
//! allowing handler tests to count provider calls with a stub.

use crate::domain::{GenerationResult, ToolDirective};
use crate::error::ProviderError;
use std::future::Future;
use std::pin::Pin;

/// Generates text (and citations) for a prompt.
///
/// This trait is dyn-compatible by using boxed futures instead of `impl Future`.
/// The credential is passed per call so the caller stays in charge of it.
pub trait ContentProvider: Send + Sync {
    fn generate<'a>(
        &'a self,
        api_key: &'a str,
        prompt: &'a str,
        tools: &'a [ToolDirective],
    ) -> Pin<Box<dyn Future<Output = Result<GenerationResult, ProviderError>> + Send + 'a>>;
}
