use std::process::Command;

use crate::core::CardboxError;

/// Seam for text-to-speech playback. The app only cares that `speak` blocks
/// until the utterance is finished (or failed) so the per-card busy flag can
/// be released on either outcome.
pub trait SpeechBackend: Send + Sync {
    fn speak(&self, text: &str) -> Result<(), CardboxError>;
}

/// Plays speech through the platform TTS command.
pub struct SystemSpeech;

impl SystemSpeech {
    #[cfg(target_os = "macos")]
    fn command(text: &str) -> Command {
        let mut command = Command::new("say");
        command.arg(text);
        command
    }

    #[cfg(not(target_os = "macos"))]
    fn command(text: &str) -> Command {
        let mut command = Command::new("espeak");
        command.arg(text);
        command
    }
}

impl SpeechBackend for SystemSpeech {
    fn speak(&self, text: &str) -> Result<(), CardboxError> {
        let status = Self::command(text)
            .status()
            .map_err(|e| CardboxError::Custom(format!("Failed to start speech command: {e}")))?;

        if !status.success() {
            return Err(CardboxError::Custom(format!("Speech command exited with {status}")));
        }

        Ok(())
    }
}
