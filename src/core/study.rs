use crate::core::{
    models::{
        Flashcard,
        QuizDirection,
        StudyMode,
    },
    quiz::{
        self,
        QuizQuestion,
    },
};

/// All study state for the currently viewed set: the fetched collection,
/// the active mode and the state each mode derives from the collection.
/// Pure state transitions only; fetching and rendering live elsewhere.
#[derive(Debug, Default)]
pub struct StudyState {
    pub cards: Vec<Flashcard>,
    pub mode: StudyMode,
    pub random_index: usize,
    pub quiz_direction: QuizDirection,
    pub question: Option<QuizQuestion>,
    pub question_number: usize,
}

impl StudyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the collection after a (re)load and resets derived state.
    pub fn set_cards(&mut self, cards: Vec<Flashcard>) {
        self.cards = cards;
        self.random_index = 0;
        self.question_number = 0;
        if self.mode == StudyMode::Quiz {
            self.regenerate_question();
        } else {
            self.question = None;
        }
    }

    pub fn clear(&mut self) {
        self.set_cards(Vec::new());
    }

    pub fn set_mode(&mut self, mode: StudyMode) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        match mode {
            StudyMode::Random => self.random_index = 0,
            StudyMode::Quiz => {
                self.question_number = 0;
                self.regenerate_question();
            }
            StudyMode::Browse => {}
        }
    }

    pub fn set_quiz_direction(&mut self, direction: QuizDirection) {
        if self.quiz_direction == direction {
            return;
        }
        self.quiz_direction = direction;
        self.regenerate_question();
    }

    pub fn regenerate_question(&mut self) {
        self.question = quiz::generate_question(&self.cards, self.quiz_direction);
    }

    pub fn select_option(&mut self, index: usize) {
        if let Some(question) = &mut self.question {
            question.select(index);
        }
    }

    /// Advances the question counter (wrapping) and rolls a fresh question.
    /// The counter is progress feedback only; it does not pick the card.
    pub fn next_question(&mut self) {
        if !self.cards.is_empty() {
            self.question_number = (self.question_number + 1) % self.cards.len();
        }
        self.regenerate_question();
    }

    /// Random-browse navigation is only meaningful with two or more cards.
    pub fn can_navigate(&self) -> bool {
        self.cards.len() >= 2
    }

    pub fn next_card(&mut self) {
        if self.can_navigate() {
            self.random_index = (self.random_index + 1) % self.cards.len();
        }
    }

    pub fn previous_card(&mut self) {
        if self.can_navigate() {
            self.random_index = (self.random_index + self.cards.len() - 1) % self.cards.len();
        }
    }

    pub fn current_card(&self) -> Option<&Flashcard> {
        self.cards.get(self.random_index)
    }

    /// Appends a freshly created card (already carrying its server id).
    pub fn add_card(&mut self, card: Flashcard) {
        self.cards.push(card);
    }

    /// Removes a deleted card. If the random-browse index fell off the end
    /// of the collection it snaps back to the first position.
    pub fn remove_card(&mut self, id: u64) {
        self.cards.retain(|card| card.id != Some(id));
        if self.random_index >= self.cards.len() {
            self.random_index = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: u64, word: &str, meaning: &str) -> Flashcard {
        Flashcard {
            id: Some(id),
            word: word.to_string(),
            meaning: meaning.to_string(),
            example: None,
            note: None,
        }
    }

    fn loaded_state(count: u64) -> StudyState {
        let mut state = StudyState::new();
        state.set_cards(
            (0..count).map(|i| card(i, &format!("w{i}"), &format!("m{i}"))).collect(),
        );
        state
    }

    #[test]
    fn next_then_previous_returns_to_start() {
        for size in 2..6 {
            let mut state = loaded_state(size);
            for start in 0..size as usize {
                state.random_index = start;
                state.next_card();
                state.previous_card();
                assert_eq!(state.random_index, start);

                state.previous_card();
                state.next_card();
                assert_eq!(state.random_index, start);
            }
        }
    }

    #[test]
    fn navigation_is_a_noop_below_two_cards() {
        let mut state = loaded_state(1);
        assert!(!state.can_navigate());
        state.next_card();
        state.previous_card();
        assert_eq!(state.random_index, 0);
    }

    #[test]
    fn navigation_wraps_around() {
        let mut state = loaded_state(3);
        state.random_index = 2;
        state.next_card();
        assert_eq!(state.random_index, 0);
        state.previous_card();
        assert_eq!(state.random_index, 2);
    }

    #[test]
    fn deleting_at_last_index_resets_to_first() {
        let mut state = loaded_state(3);
        state.random_index = 2;
        state.remove_card(2);
        assert_eq!(state.cards.len(), 2);
        assert_eq!(state.random_index, 0);
    }

    #[test]
    fn deleting_elsewhere_keeps_a_valid_index() {
        let mut state = loaded_state(3);
        state.random_index = 1;
        state.remove_card(0);
        assert_eq!(state.cards.len(), 2);
        assert!(state.random_index < state.cards.len());
    }

    #[test]
    fn delete_failure_leaves_collection_unchanged() {
        // An id the server never assigned: retain matches nothing.
        let mut state = loaded_state(3);
        state.remove_card(99);
        assert_eq!(state.cards.len(), 3);
    }

    #[test]
    fn add_appends_exactly_one_card() {
        let mut state = loaded_state(2);
        state.add_card(card(7, "fish", "cá"));
        assert_eq!(state.cards.len(), 3);
        assert_eq!(state.cards.last().unwrap().id, Some(7));
    }

    #[test]
    fn entering_quiz_generates_a_question() {
        let mut state = loaded_state(4);
        assert!(state.question.is_none());
        state.set_mode(StudyMode::Quiz);
        assert!(state.question.is_some());
        assert_eq!(state.question_number, 0);
    }

    #[test]
    fn quiz_is_unavailable_for_small_sets() {
        let mut state = loaded_state(3);
        state.set_mode(StudyMode::Quiz);
        assert!(state.question.is_none());
    }

    #[test]
    fn direction_change_regenerates() {
        let mut state = loaded_state(4);
        state.set_mode(StudyMode::Quiz);
        state.select_option(0);
        assert!(state.question.as_ref().unwrap().is_locked());

        state.set_quiz_direction(QuizDirection::MeaningToWord);
        let question = state.question.as_ref().unwrap();
        assert_eq!(question.direction, QuizDirection::MeaningToWord);
        assert!(!question.is_locked());
    }

    #[test]
    fn question_number_wraps() {
        let mut state = loaded_state(4);
        state.set_mode(StudyMode::Quiz);
        for _ in 0..4 {
            state.next_question();
        }
        assert_eq!(state.question_number, 0);
        assert!(state.question.is_some());
    }

    #[test]
    fn entering_random_resets_index() {
        let mut state = loaded_state(4);
        state.set_mode(StudyMode::Random);
        state.next_card();
        state.next_card();
        state.set_mode(StudyMode::Browse);
        state.set_mode(StudyMode::Random);
        assert_eq!(state.random_index, 0);
    }
}
