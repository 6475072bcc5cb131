use crate::error::CaptureError;
use crate::providers::Transcript;

/// Hard cap on recording length, in seconds. Reaching it forces a stop.
pub const MAX_RECORDING_SECS: u32 = 10;

/// Phase of one capture cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapturePhase {
    /// Nothing in flight; may hold a finished transcript or an error
    Idle,
    /// Microphone open, chunks accumulating, timer ticking
    Recording,
    /// Audio submitted to the speech-to-text provider
    Transcribing,
}

/// Outcome of one timer tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Still under the cap
    Running,
    /// The cap was just reached; the caller must stop the capture
    CapReached,
    /// Not recording; the tick was ignored
    Ignored,
}

/// State machine for a single microphone-recording cycle.
///
/// Holds the accumulated audio chunks and elapsed time, and enforces the
/// legal transitions: Idle -> Recording -> Transcribing -> Idle. Reset is
/// only reachable from Idle. The struct is synchronous and side-effect
/// free so the transitions are testable without a real microphone.
#[derive(Debug)]
pub struct CaptureSession {
    phase: CapturePhase,
    chunks: Vec<Vec<u8>>,
    elapsed_secs: u32,
    transcript: Option<Transcript>,
    error: Option<String>,
}

impl CaptureSession {
    pub fn new() -> Self {
        Self {
            phase: CapturePhase::Idle,
            chunks: Vec::new(),
            elapsed_secs: 0,
            transcript: None,
            error: None,
        }
    }

    /// Enter Recording. Clears any prior transcript, error, chunks, and
    /// elapsed time. Returns false (no transition) unless currently Idle.
    pub fn begin(&mut self) -> bool {
        if self.phase != CapturePhase::Idle {
            return false;
        }

        self.chunks.clear();
        self.elapsed_secs = 0;
        self.transcript = None;
        self.error = None;
        self.phase = CapturePhase::Recording;
        true
    }

    /// Append a captured audio chunk. Ignored unless Recording; empty
    /// chunks are dropped.
    pub fn append_chunk(&mut self, data: Vec<u8>) {
        if self.phase == CapturePhase::Recording && !data.is_empty() {
            self.chunks.push(data);
        }
    }

    /// Advance the 1-second timer. Elapsed time never exceeds the cap;
    /// reaching the cap yields `CapReached` exactly once.
    pub fn tick(&mut self) -> Tick {
        if self.phase != CapturePhase::Recording {
            return Tick::Ignored;
        }

        if self.elapsed_secs >= MAX_RECORDING_SECS {
            return Tick::Running;
        }

        self.elapsed_secs += 1;
        if self.elapsed_secs >= MAX_RECORDING_SECS {
            Tick::CapReached
        } else {
            Tick::Running
        }
    }

    /// Stop recording and take the concatenated audio payload for
    /// transcription submission.
    ///
    /// With zero accumulated chunks this fails with `NoAudioRecorded`,
    /// records the error, and returns to Idle without any payload (and so
    /// without any network call). Otherwise the session enters Transcribing.
    pub fn take_payload(&mut self) -> Result<Vec<u8>, CaptureError> {
        if self.phase != CapturePhase::Recording {
            return Err(CaptureError::NoAudioRecorded);
        }

        if self.chunks.is_empty() {
            let err = CaptureError::NoAudioRecorded;
            self.error = Some(err.to_string());
            self.phase = CapturePhase::Idle;
            return Err(err);
        }

        let payload: Vec<u8> = self.chunks.drain(..).flatten().collect();
        self.phase = CapturePhase::Transcribing;
        Ok(payload)
    }

    /// Record a successful transcription and return to Idle.
    pub fn complete(&mut self, transcript: Transcript) {
        self.transcript = Some(transcript);
        self.error = None;
        self.phase = CapturePhase::Idle;
    }

    /// Record a failed attempt and return to Idle. The message is the
    /// user-visible, retry-eligible error string.
    pub fn fail(&mut self, message: String) {
        self.error = Some(message);
        self.phase = CapturePhase::Idle;
    }

    /// Clear all session state back to initial values. Disallowed (a no-op)
    /// while a capture or transcription is in flight; returns whether the
    /// reset was applied.
    pub fn reset(&mut self) -> bool {
        if self.phase != CapturePhase::Idle {
            return false;
        }

        self.chunks.clear();
        self.elapsed_secs = 0;
        self.transcript = None;
        self.error = None;
        true
    }

    pub fn phase(&self) -> CapturePhase {
        self.phase
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    pub fn transcript(&self) -> Option<&Transcript> {
        self.transcript.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl Default for CaptureSession {
    fn default() -> Self {
        Self::new()
    }
}
