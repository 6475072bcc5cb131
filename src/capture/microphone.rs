use anyhow::Result;
use tokio::sync::mpsc;

use crate::error::CaptureError;

/// Microphone device seam.
///
/// Implementations wrap whatever native capture facility is available and
/// deliver encoded audio chunks over a channel; the recorder treats the
/// chunk bytes as opaque and forwards them to the transcription provider
/// unchanged. Tests substitute a scripted backend.
#[async_trait::async_trait]
pub trait MicrophoneBackend: Send + Sync {
    /// Request device access and start capturing.
    ///
    /// Fails with `CaptureError::PermissionDenied` if access is refused.
    /// Returns a channel receiver that will receive audio chunks.
    async fn open(&mut self) -> Result<mpsc::Receiver<Vec<u8>>, CaptureError>;

    /// Stop capturing and release the device.
    async fn close(&mut self) -> Result<()>;

    /// Backend name for logging
    fn name(&self) -> &str;
}
