//! The text-recognition seam.
//!
//! Recognition is delegated entirely to an external engine; Chartwell owns
//! only the boundary: image bytes and a language code in, extracted text
//! out, with incremental progress reported along the way. Engines are
//! injected where documents are submitted, so tests and local development
//! run against [`ScriptedOcr`] instead of a real engine.

use crate::{IntakeError, IntakeResult};

/// Receives recognition progress as a percentage, 0–100.
///
/// Called from within `recognize`; implementations should be cheap since
/// engines may report at a fine grain.
pub type ProgressSink<'a> = &'a (dyn Fn(u8) + Send + Sync);

/// An optical-character-recognition engine.
#[async_trait::async_trait]
pub trait OcrEngine: Send + Sync {
    /// Extracts text from an image.
    ///
    /// `language` is an engine-specific language code (for example `eng`).
    /// Progress is reported through `progress` from 0 to 100; engines are
    /// not required to report every step, but a conforming engine reports
    /// 100 before returning successfully.
    async fn recognize(
        &self,
        image: &[u8],
        language: &str,
        progress: ProgressSink<'_>,
    ) -> IntakeResult<String>;
}

/// A deterministic engine for tests and local development.
///
/// Returns a fixed text (or a fixed failure) and reports progress in three
/// steps, which is enough to drive the document workflow's progress path.
#[derive(Clone, Debug, Default)]
pub struct ScriptedOcr {
    text: String,
    fail: bool,
}

impl ScriptedOcr {
    /// An engine that always recognises `text`.
    pub fn recognising(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fail: false,
        }
    }

    /// An engine that always fails.
    pub fn failing() -> Self {
        Self {
            text: String::new(),
            fail: true,
        }
    }
}

#[async_trait::async_trait]
impl OcrEngine for ScriptedOcr {
    async fn recognize(
        &self,
        _image: &[u8],
        _language: &str,
        progress: ProgressSink<'_>,
    ) -> IntakeResult<String> {
        progress(0);
        if self.fail {
            return Err(IntakeError::Recognition("scripted failure".into()));
        }
        progress(50);
        progress(100);
        Ok(self.text.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[tokio::test]
    async fn test_scripted_engine_reports_full_progress() {
        let engine = ScriptedOcr::recognising("TAKE 1 TABLET DAILY");
        let seen = Mutex::new(Vec::new());

        let text = engine
            .recognize(b"image bytes", "eng", &|p| {
                seen.lock().expect("progress lock poisoned").push(p)
            })
            .await
            .expect("recognition should succeed");

        assert_eq!(text, "TAKE 1 TABLET DAILY");
        assert_eq!(*seen.lock().expect("progress lock poisoned"), vec![0, 50, 100]);
    }

    #[tokio::test]
    async fn test_failing_engine_returns_recognition_error() {
        let engine = ScriptedOcr::failing();
        let err = engine
            .recognize(b"image bytes", "eng", &|_| {})
            .await
            .expect_err("recognition should fail");
        assert!(matches!(err, IntakeError::Recognition(_)));
    }
}
