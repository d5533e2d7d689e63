//! Process-wide summarizer engine
//!
//! The host calls [`init`] once before serving requests, takes a shared
//! handle per request and calls [`teardown`] on shutdown. Handles stay valid
//! after teardown; they just stop being handed out.

use crate::{build_summarizer, LlmError, LlmResult, SummarizerConfig};
use blueprint_core::Summarizer;
use lazy_static::lazy_static;
use std::sync::{Arc, RwLock};
use tracing::{debug, info};

lazy_static! {
    static ref ENGINE: RwLock<Option<Arc<dyn Summarizer>>> = RwLock::new(None);
}

fn poisoned() -> LlmError {
    LlmError::Config("summarizer engine lock poisoned".to_string())
}

/// Build the configured summarizer and make it the engine.
pub fn init(config: &SummarizerConfig) -> LlmResult<()> {
    install(build_summarizer(config)?)
}

/// Make an already-built summarizer the engine.
pub fn install(summarizer: Arc<dyn Summarizer>) -> LlmResult<()> {
    let mut slot = ENGINE.write().map_err(|_| poisoned())?;
    if slot.is_some() {
        return Err(LlmError::AlreadyInitialized);
    }
    info!("Summarizer engine online ({})", summarizer.name());
    *slot = Some(summarizer);
    Ok(())
}

/// Shared read-only handle to the engine.
pub fn handle() -> LlmResult<Arc<dyn Summarizer>> {
    ENGINE
        .read()
        .map_err(|_| poisoned())?
        .clone()
        .ok_or(LlmError::NotInitialized)
}

pub fn is_initialized() -> bool {
    ENGINE.read().map(|slot| slot.is_some()).unwrap_or(false)
}

/// Release the engine. Returns whether one was installed.
pub fn teardown() -> bool {
    match ENGINE.write() {
        Ok(mut slot) => {
            let released = slot.take().is_some();
            if released {
                debug!("Summarizer engine released");
            }
            released
        }
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blueprint_core::StaticSummarizer;

    // Single test: the engine is global state shared by the whole test binary.
    #[test]
    fn test_engine_lifecycle() {
        teardown();
        assert!(matches!(handle(), Err(LlmError::NotInitialized)));

        install(Arc::new(StaticSummarizer::new("hello"))).unwrap();
        assert!(is_initialized());
        assert!(matches!(
            install(Arc::new(StaticSummarizer::new("again"))),
            Err(LlmError::AlreadyInitialized)
        ));

        let engine = handle().unwrap();
        let summary = tokio_test::block_on(engine.summarize("x = 1")).unwrap();
        assert_eq!(summary, "hello");

        assert!(teardown());
        assert!(!teardown());
        assert!(!is_initialized());

        init(&SummarizerConfig::default()).unwrap();
        assert_eq!(handle().unwrap().name(), "template");
        assert!(teardown());
    }
}
