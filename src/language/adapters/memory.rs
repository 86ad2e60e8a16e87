//! In-memory detection adapter for tests and local runs.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::language::{
    domain::DetectedLanguage,
    ports::{DetectionError, DetectionResult, LanguageDetector},
};

/// Detector that answers from a script of text-to-code entries.
///
/// Text without a scripted entry is reported with the default code. Every
/// call is recorded so tests can assert on what was asked.
#[derive(Debug, Clone)]
pub struct ScriptedLanguageDetector {
    state: Arc<RwLock<ScriptedDetectorState>>,
}

#[derive(Debug)]
struct ScriptedDetectorState {
    default_code: String,
    script: HashMap<String, String>,
    failing: bool,
    calls: Vec<String>,
}

impl ScriptedLanguageDetector {
    /// Creates a detector that reports `default_code` for unscripted text.
    #[must_use]
    pub fn new(default_code: impl Into<String>) -> Self {
        Self {
            state: Arc::new(RwLock::new(ScriptedDetectorState {
                default_code: default_code.into(),
                script: HashMap::new(),
                failing: false,
                calls: Vec::new(),
            })),
        }
    }

    /// Scripts the code reported for `text`.
    ///
    /// # Errors
    ///
    /// Returns [`DetectionError::Unavailable`] when lock acquisition fails.
    pub fn script(&self, text: impl Into<String>, code: impl Into<String>) -> DetectionResult<()> {
        let mut state = self.write()?;
        state.script.insert(text.into(), code.into());
        Ok(())
    }

    /// Makes every subsequent call fail, or succeed again.
    ///
    /// # Errors
    ///
    /// Returns [`DetectionError::Unavailable`] when lock acquisition fails.
    pub fn set_failing(&self, failing: bool) -> DetectionResult<()> {
        self.write()?.failing = failing;
        Ok(())
    }

    /// Returns the texts passed to [`LanguageDetector::detect`], in order.
    ///
    /// # Errors
    ///
    /// Returns [`DetectionError::Unavailable`] when lock acquisition fails.
    pub fn calls(&self) -> DetectionResult<Vec<String>> {
        let state = self
            .state
            .read()
            .map_err(|err| DetectionError::Unavailable(err.to_string()))?;
        Ok(state.calls.clone())
    }

    fn write(&self) -> DetectionResult<std::sync::RwLockWriteGuard<'_, ScriptedDetectorState>> {
        self.state
            .write()
            .map_err(|err| DetectionError::Unavailable(err.to_string()))
    }
}

impl Default for ScriptedLanguageDetector {
    fn default() -> Self {
        Self::new("en")
    }
}

#[async_trait]
impl LanguageDetector for ScriptedLanguageDetector {
    async fn detect(&self, text: &str) -> DetectionResult<DetectedLanguage> {
        let mut state = self.write()?;
        state.calls.push(text.to_owned());
        if state.failing {
            return Err(DetectionError::Unavailable(
                "scripted detector is failing".to_owned(),
            ));
        }
        let code = state
            .script
            .get(text)
            .unwrap_or(&state.default_code)
            .clone();
        Ok(DetectedLanguage::new(code))
    }
}
