//! One-shot celebration chime.
//!
//! Audio output runs on a dedicated thread behind a command channel, since
//! device initialization can hang on some systems and must never stall the
//! UI. The chime is synthesized (a short rising arpeggio) so no sound asset
//! ships with the binary. Completion is reported through a oneshot channel
//! so the caller can feed `SoundFinished` back into the sequencer.

use std::thread;
use std::time::Duration;

use rodio::source::{SineWave, Source};
use rodio::{OutputStream, OutputStreamHandle, Sink};
use tokio::sync::oneshot;

/// Audio playback failures. These are logged and degrade to silence,
/// never surfaced to the user.
#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("no audio output available: {0}")]
    Stream(#[from] rodio::StreamError),
    #[error("playback failed: {0}")]
    Play(#[from] rodio::PlayError),
}

/// The chime's notes as (frequency Hz, duration ms) pairs.
fn chime_notes() -> &'static [(f32, u64)] {
    &[
        (523.25, 160), // C5
        (659.25, 160), // E5
        (783.99, 160), // G5
        (1046.50, 400), // C6, held
    ]
}

/// Total chime length.
fn chime_duration() -> Duration {
    Duration::from_millis(chime_notes().iter().map(|(_, ms)| ms).sum())
}

enum AudioCommand {
    PlayChime { done: oneshot::Sender<()> },
    Shutdown,
}

/// Handle to the audio thread. Dropping it shuts the thread down.
pub struct CelebrationAudio {
    muted: bool,
    command_tx: Option<std::sync::mpsc::Sender<AudioCommand>>,
    audio_thread: Option<thread::JoinHandle<()>>,
}

impl CelebrationAudio {
    /// Spawns the audio thread. With `muted` set, no thread is spawned and
    /// playback completes immediately.
    pub fn new(muted: bool) -> Self {
        if muted {
            return Self {
                muted,
                command_tx: None,
                audio_thread: None,
            };
        }

        let (command_tx, command_rx) = std::sync::mpsc::channel::<AudioCommand>();

        let audio_thread = thread::Builder::new()
            .name("celebration-audio".to_string())
            .spawn(move || {
                tracing::debug!("Audio thread starting");

                // Device setup can fail (headless hosts, busy devices).
                // Keep serving commands either way so completion signals
                // still fire.
                let output = match OutputStream::try_default() {
                    Ok((stream, handle)) => Some((stream, handle)),
                    Err(e) => {
                        tracing::warn!("Could not initialize audio output: {e}");
                        None
                    }
                };

                while let Ok(command) = command_rx.recv() {
                    match command {
                        AudioCommand::PlayChime { done } => {
                            if let Some((_, handle)) = &output {
                                if let Err(e) = play_chime_blocking(handle) {
                                    tracing::warn!("Chime playback failed: {e}");
                                }
                            }
                            // Receiver may already be gone if the view was
                            // torn down mid-chime.
                            let _ = done.send(());
                        }
                        AudioCommand::Shutdown => break,
                    }
                }

                tracing::debug!("Audio thread exiting");
            })
            .ok();

        if audio_thread.is_none() {
            tracing::warn!("Could not spawn audio thread, continuing muted");
        }

        Self {
            muted,
            command_tx: audio_thread.as_ref().map(|_| command_tx),
            audio_thread,
        }
    }

    /// Starts the one-shot chime. The returned receiver resolves when
    /// playback finishes; when muted or without a device it resolves
    /// immediately, so the sequencer's `effect_playing` flag always resets.
    pub fn play_chime(&self) -> oneshot::Receiver<()> {
        let (done, rx) = oneshot::channel();

        match &self.command_tx {
            Some(tx) if !self.muted => {
                if tx.send(AudioCommand::PlayChime { done }).is_err() {
                    tracing::warn!("Audio thread gone, skipping chime");
                    // `done` was consumed by the failed send; the receiver
                    // resolves through the channel closing.
                }
            }
            _ => {
                let _ = done.send(());
            }
        }

        rx
    }
}

impl Drop for CelebrationAudio {
    fn drop(&mut self) {
        if let Some(tx) = self.command_tx.take() {
            let _ = tx.send(AudioCommand::Shutdown);
        }
        if let Some(handle) = self.audio_thread.take() {
            let _ = handle.join();
        }
    }
}

/// Plays the chime on the calling (audio) thread, returning when done.
fn play_chime_blocking(handle: &OutputStreamHandle) -> Result<(), AudioError> {
    tracing::debug!("Playing celebration chime ({:?})", chime_duration());
    let sink = Sink::try_new(handle)?;
    for &(freq, ms) in chime_notes() {
        let note = SineWave::new(freq)
            .take_duration(Duration::from_millis(ms))
            .amplify(0.25);
        sink.append(note);
    }
    sink.sleep_until_end();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chime_shape() {
        let notes = chime_notes();
        assert!(!notes.is_empty());
        // Rising arpeggio.
        for pair in notes.windows(2) {
            assert!(pair[0].0 < pair[1].0);
        }
        assert_eq!(chime_duration(), Duration::from_millis(880));
    }

    #[tokio::test]
    async fn test_muted_player_still_completes() {
        let audio = CelebrationAudio::new(true);
        let rx = audio.play_chime();
        rx.await.expect("muted chime completes immediately");
    }
}
