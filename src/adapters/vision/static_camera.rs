//! Static Frame Source - FrameSource fed from one fixed frame.
//!
//! Stands in for a real camera device: every capture returns the same
//! JPEG bytes. Acquisition can be scripted to fail for permission-denied
//! testing, and release is tracked so teardown can be asserted.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use crate::ports::{AnalysisError, FrameSource, FrameStream, JpegFrame};

// Smallest well-formed JPEG: SOI marker followed by EOI.
const PLACEHOLDER_JPEG: [u8; 4] = [0xFF, 0xD8, 0xFF, 0xD9];

/// Frame source that replays one fixed frame.
#[derive(Debug, Clone)]
pub struct StaticFrameSource {
    frame: Vec<u8>,
    fail_acquire: Option<String>,
    released: Arc<AtomicBool>,
}

impl StaticFrameSource {
    /// Creates a source serving a placeholder JPEG.
    pub fn new() -> Self {
        Self::with_frame(PLACEHOLDER_JPEG.to_vec())
    }

    /// Creates a source serving the given JPEG bytes.
    pub fn with_frame(frame: Vec<u8>) -> Self {
        Self {
            frame,
            fail_acquire: None,
            released: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Makes every acquisition fail with the given reason.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            frame: Vec::new(),
            fail_acquire: Some(reason.into()),
            released: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether the last acquired stream has been released.
    pub fn is_released(&self) -> bool {
        self.released.load(Ordering::SeqCst)
    }
}

impl Default for StaticFrameSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FrameSource for StaticFrameSource {
    async fn acquire(&self) -> Result<Box<dyn FrameStream>, AnalysisError> {
        if let Some(reason) = &self.fail_acquire {
            return Err(AnalysisError::CameraUnavailable(reason.clone()));
        }
        self.released.store(false, Ordering::SeqCst);
        Ok(Box::new(StaticFrameStream {
            frame: self.frame.clone(),
            released: Arc::clone(&self.released),
        }))
    }
}

struct StaticFrameStream {
    frame: Vec<u8>,
    released: Arc<AtomicBool>,
}

#[async_trait]
impl FrameStream for StaticFrameStream {
    async fn capture(&mut self) -> Result<JpegFrame, AnalysisError> {
        if self.released.load(Ordering::SeqCst) {
            return Err(AnalysisError::CameraUnavailable(
                "stream already released".to_string(),
            ));
        }
        Ok(JpegFrame::new(self.frame.clone()))
    }

    fn release(&mut self) {
        self.released.store(true, Ordering::SeqCst);
    }
}

impl Drop for StaticFrameStream {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn capture_returns_the_configured_frame() {
        let source = StaticFrameSource::with_frame(vec![1, 2, 3]);
        let mut stream = source.acquire().await.unwrap();

        let frame = stream.capture().await.unwrap();

        assert_eq!(frame.bytes(), &[1, 2, 3]);
    }

    #[tokio::test]
    async fn failing_source_reports_camera_unavailable() {
        let source = StaticFrameSource::failing("permission denied");
        let result = source.acquire().await;

        assert!(matches!(
            result,
            Err(AnalysisError::CameraUnavailable(reason)) if reason == "permission denied"
        ));
    }

    #[tokio::test]
    async fn release_is_idempotent_and_capture_fails_afterwards() {
        let source = StaticFrameSource::new();
        let mut stream = source.acquire().await.unwrap();

        stream.release();
        stream.release();

        assert!(source.is_released());
        assert!(stream.capture().await.is_err());
    }

    #[tokio::test]
    async fn dropping_the_stream_releases_the_device() {
        let source = StaticFrameSource::new();
        let stream = source.acquire().await.unwrap();

        drop(stream);

        assert!(source.is_released());
    }
}
