use std::{
    sync::{
        mpsc,
        Arc,
    },
    thread,
};

use tokio::runtime::Runtime;

use super::TaskResult;
use crate::{
    api::ApiClient,
    core::models::{
        CardDraft,
        SetView,
    },
    speech::SpeechBackend,
};

/// Owns the async runtime and the channel the UI drains once per frame.
/// Every network call runs on its own thread so the interface never blocks.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
}

impl TaskManager {
    pub fn new() -> Self {
        let runtime = Arc::new(Runtime::new().expect("Failed to create TaskManager runtime"));
        let (sender, receiver) = mpsc::channel();

        Self { runtime, receiver, sender }
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<Runtime>) {
        (self.sender.clone(), self.runtime.clone())
    }

    pub fn load_cards(&self, client: ApiClient, set_id: String, view: SetView) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime.block_on(async {
                client.fetch_cards(&set_id, view).await.map_err(|e| e.to_string())
            });

            let _ = sender.send(TaskResult::CardsLoaded(result));
        });
    }

    pub fn create_card(&self, client: ApiClient, set_id: String, draft: CardDraft) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime.block_on(async {
                client.create_card(&set_id, &draft).await.map_err(|e| e.to_string())
            });

            let _ = sender.send(TaskResult::CardCreated(result));
        });
    }

    pub fn delete_card(&self, client: ApiClient, id: u64) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime
                .block_on(async { client.delete_card(id).await.map_err(|e| e.to_string()) });

            let _ = sender.send(TaskResult::CardDeleted { id, result });
        });
    }

    pub fn check_api_status(&self, client: ApiClient) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let online = runtime.block_on(async { client.ping().await.is_ok() });

            let _ = sender.send(TaskResult::ApiStatus(online));
        });
    }

    /// Fire-and-forget playback; the UI keeps a busy flag for this card's id
    /// until the finished result comes back.
    pub fn speak(&self, backend: Arc<dyn SpeechBackend>, id: u64, word: String) {
        let (sender, _) = self.task_context();

        thread::spawn(move || {
            let result = backend.speak(&word).map_err(|e| e.to_string());

            let _ = sender.send(TaskResult::SpeechFinished { id, result });
        });
    }
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::Mutex,
        time::Duration,
    };

    use super::*;
    use crate::core::errors::CardboxError;

    struct RecordingSpeech {
        spoken: Mutex<Vec<String>>,
    }

    impl SpeechBackend for RecordingSpeech {
        fn speak(&self, text: &str) -> Result<(), CardboxError> {
            self.spoken.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn speech_results_carry_the_card_id() {
        let manager = TaskManager::new();
        let backend = Arc::new(RecordingSpeech { spoken: Mutex::new(Vec::new()) });

        // Two cards sharing the same word stay independently tracked.
        manager.speak(backend.clone(), 7, "échouer".to_string());
        manager.speak(backend.clone(), 12, "échouer".to_string());

        let mut ids = Vec::new();
        for _ in 0..2 {
            match manager.receiver.recv_timeout(Duration::from_secs(5)).unwrap() {
                TaskResult::SpeechFinished { id, result } => {
                    assert!(result.is_ok());
                    ids.push(id);
                }
                other => panic!("unexpected task result: {:?}", other),
            }
        }

        ids.sort_unstable();
        assert_eq!(ids, vec![7, 12]);
        assert_eq!(backend.spoken.lock().unwrap().len(), 2);
    }
}
