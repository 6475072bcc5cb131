// Tests for the capture session state machine
//
// These tests verify the Idle -> Recording -> Transcribing -> Idle
// transitions, the 10-second cap, and the reset rules, without any
// microphone or network involvement.

use medbridge::capture::{CapturePhase, CaptureSession, Tick, MAX_RECORDING_SECS};
use medbridge::error::CaptureError;
use medbridge::providers::Transcript;

#[test]
fn begin_enters_recording_and_clears_prior_state() {
    let mut session = CaptureSession::new();

    assert!(session.begin());
    assert_eq!(session.phase(), CapturePhase::Recording);
    assert_eq!(session.elapsed_secs(), 0);
    assert_eq!(session.chunk_count(), 0);

    session.append_chunk(vec![1, 2, 3]);
    let _ = session.take_payload().unwrap();
    session.complete(Transcript {
        text: "hello".to_string(),
        language: "en".to_string(),
    });
    assert!(session.transcript().is_some());

    // A new cycle discards the previous result
    assert!(session.begin());
    assert!(session.transcript().is_none());
    assert!(session.error().is_none());
}

#[test]
fn begin_is_rejected_unless_idle() {
    let mut session = CaptureSession::new();

    assert!(session.begin());
    assert!(!session.begin(), "begin while recording should be rejected");

    session.append_chunk(vec![0; 8]);
    let _ = session.take_payload().unwrap();
    assert_eq!(session.phase(), CapturePhase::Transcribing);
    assert!(!session.begin(), "begin while transcribing should be rejected");
}

#[test]
fn elapsed_never_exceeds_cap_and_cap_signals_once() {
    let mut session = CaptureSession::new();
    session.begin();

    let mut cap_signals = 0;
    for _ in 0..30 {
        if session.tick() == Tick::CapReached {
            cap_signals += 1;
        }
        assert!(
            session.elapsed_secs() <= MAX_RECORDING_SECS,
            "elapsed must never exceed the cap, got {}",
            session.elapsed_secs()
        );
    }

    assert_eq!(cap_signals, 1, "cap should be signalled exactly once");
    assert_eq!(session.elapsed_secs(), MAX_RECORDING_SECS);
}

#[test]
fn tick_is_ignored_while_idle() {
    let mut session = CaptureSession::new();
    assert_eq!(session.tick(), Tick::Ignored);
    assert_eq!(session.elapsed_secs(), 0);
}

#[test]
fn stop_with_zero_chunks_fails_without_payload() {
    let mut session = CaptureSession::new();
    session.begin();

    let result = session.take_payload();
    assert!(matches!(result, Err(CaptureError::NoAudioRecorded)));

    // Back to idle with the user-visible error recorded
    assert_eq!(session.phase(), CapturePhase::Idle);
    assert_eq!(session.error(), Some("No audio recorded."));
}

#[test]
fn take_payload_concatenates_chunks_in_order() {
    let mut session = CaptureSession::new();
    session.begin();

    session.append_chunk(vec![1, 2]);
    session.append_chunk(vec![]); // empty chunks are dropped
    session.append_chunk(vec![3]);
    session.append_chunk(vec![4, 5]);
    assert_eq!(session.chunk_count(), 3);

    let payload = session.take_payload().unwrap();
    assert_eq!(payload, vec![1, 2, 3, 4, 5]);
    assert_eq!(session.phase(), CapturePhase::Transcribing);
}

#[test]
fn chunks_are_ignored_outside_recording() {
    let mut session = CaptureSession::new();
    session.append_chunk(vec![1, 2, 3]);
    assert_eq!(session.chunk_count(), 0);
}

#[test]
fn failure_returns_to_idle_with_message() {
    let mut session = CaptureSession::new();
    session.begin();
    session.append_chunk(vec![0; 4]);
    let _ = session.take_payload().unwrap();

    session.fail("Failed to transcribe audio. Please try again.".to_string());
    assert_eq!(session.phase(), CapturePhase::Idle);
    assert_eq!(
        session.error(),
        Some("Failed to transcribe audio. Please try again.")
    );
}

#[test]
fn reset_clears_state_only_from_idle() {
    let mut session = CaptureSession::new();

    session.begin();
    assert!(!session.reset(), "reset must be ignored while recording");
    assert_eq!(session.phase(), CapturePhase::Recording);

    session.append_chunk(vec![9; 16]);
    let _ = session.take_payload().unwrap();
    assert!(!session.reset(), "reset must be ignored while transcribing");

    session.complete(Transcript {
        text: "How are you feeling".to_string(),
        language: "en".to_string(),
    });

    assert!(session.reset());
    assert!(session.transcript().is_none());
    assert!(session.error().is_none());
    assert_eq!(session.elapsed_secs(), 0);
    assert_eq!(session.chunk_count(), 0);
}
