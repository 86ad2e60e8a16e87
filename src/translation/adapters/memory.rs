//! In-memory translation adapter for tests and local runs.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockWriteGuard};

use crate::language::domain::LanguageTag;
use crate::translation::ports::{TranslationProviderError, Translator, TranslatorResult};

/// Translator that answers from a script of `(text, target)` entries.
///
/// Unscripted text is echoed back prefixed with the target code, for
/// example `[id] Good morning`. Every call is recorded.
#[derive(Debug, Clone, Default)]
pub struct ScriptedTranslator {
    state: Arc<RwLock<ScriptedTranslatorState>>,
}

#[derive(Debug, Default)]
struct ScriptedTranslatorState {
    script: HashMap<(String, LanguageTag), String>,
    failing: bool,
    calls: Vec<(String, LanguageTag)>,
}

impl ScriptedTranslator {
    /// Creates a translator with an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts the output for `text` translated into `target`.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationProviderError::Unavailable`] when lock
    /// acquisition fails.
    pub fn script(
        &self,
        text: impl Into<String>,
        target: LanguageTag,
        output: impl Into<String>,
    ) -> TranslatorResult<()> {
        self.write()?
            .script
            .insert((text.into(), target), output.into());
        Ok(())
    }

    /// Makes every subsequent call fail, or succeed again.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationProviderError::Unavailable`] when lock
    /// acquisition fails.
    pub fn set_failing(&self, failing: bool) -> TranslatorResult<()> {
        self.write()?.failing = failing;
        Ok(())
    }

    /// Returns every `(text, target)` pair requested, in order.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationProviderError::Unavailable`] when lock
    /// acquisition fails.
    pub fn calls(&self) -> TranslatorResult<Vec<(String, LanguageTag)>> {
        let state = self
            .state
            .read()
            .map_err(|err| TranslationProviderError::Unavailable(err.to_string()))?;
        Ok(state.calls.clone())
    }

    fn write(&self) -> TranslatorResult<RwLockWriteGuard<'_, ScriptedTranslatorState>> {
        self.state
            .write()
            .map_err(|err| TranslationProviderError::Unavailable(err.to_string()))
    }
}

#[async_trait]
impl Translator for ScriptedTranslator {
    async fn translate(&self, text: &str, target: LanguageTag) -> TranslatorResult<String> {
        let mut state = self.write()?;
        state.calls.push((text.to_owned(), target));
        if state.failing {
            return Err(TranslationProviderError::Unavailable(
                "scripted translator is failing".to_owned(),
            ));
        }
        let output = state
            .script
            .get(&(text.to_owned(), target))
            .cloned()
            .unwrap_or_else(|| format!("[{target}] {text}"));
        Ok(output)
    }
}
