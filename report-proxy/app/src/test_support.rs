//! Shared test support utilities
//!
//! Provides `StubProvider`, a `ContentProvider` that records every call and
//! replies with a canned result, for use in unit and integration tests.

use crate::domain::{GenerationResult, ToolDirective};
use crate::error::ProviderError;
use crate::port::ContentProvider;
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// A single recorded provider invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub api_key: String,
    pub prompt: String,
    pub tools: Vec<ToolDirective>,
}

/// Stub provider that counts calls for testing.
pub struct StubProvider {
    reply: Mutex<GenerationResult>,
    calls: Mutex<Vec<RecordedCall>>,
    call_count: AtomicUsize,
    should_fail: AtomicBool,
}

impl StubProvider {
    pub fn new() -> Self {
        Self::replying(GenerationResult::default())
    }

    pub fn replying(reply: GenerationResult) -> Self {
        Self {
            reply: Mutex::new(reply),
            calls: Mutex::new(Vec::new()),
            call_count: AtomicUsize::new(0),
            should_fail: AtomicBool::new(false),
        }
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::SeqCst);
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for StubProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentProvider for StubProvider {
    fn generate<'a>(
        &'a self,
        api_key: &'a str,
        prompt: &'a str,
        tools: &'a [ToolDirective],
    ) -> Pin<Box<dyn Future<Output = Result<GenerationResult, ProviderError>> + Send + 'a>> {
        Box::pin(async move {
            self.call_count.fetch_add(1, Ordering::SeqCst);
            self.calls.lock().unwrap().push(RecordedCall {
                api_key: api_key.to_string(),
                prompt: prompt.to_string(),
                tools: tools.to_vec(),
            });
            if self.should_fail.load(Ordering::SeqCst) {
                return Err(ProviderError::Status {
                    status: 429,
                    message: "Stub quota exceeded".to_string(),
                });
            }
            Ok(self.reply.lock().unwrap().clone())
        })
    }
}
