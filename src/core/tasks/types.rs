use crate::core::models::Flashcard;

/// Everything a background task can hand back to the UI thread. Failures
/// are stringified at the spawn site so results stay cheap to clone.
#[derive(Debug, Clone)]
pub enum TaskResult {
    CardsLoaded(Result<Vec<Flashcard>, String>),
    CardCreated(Result<Flashcard, String>),
    CardDeleted { id: u64, result: Result<(), String> },
    SpeechFinished { id: u64, result: Result<(), String> },
    ApiStatus(bool),
}
