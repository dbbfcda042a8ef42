use rand::{
    seq::SliceRandom,
    Rng,
};

use crate::core::models::{
    Flashcard,
    QuizDirection,
};

pub const OPTION_COUNT: usize = 4;

/// One generated multiple-choice question. Ephemeral: thrown away and
/// rebuilt on mode entry, direction change and "next question".
#[derive(Debug, Clone)]
pub struct QuizQuestion {
    pub card: Flashcard,
    pub direction: QuizDirection,
    pub options: Vec<String>,
    pub selected: Option<usize>,
}

impl QuizQuestion {
    pub fn prompt(&self) -> &str {
        self.direction.prompt_of(&self.card)
    }

    pub fn answer(&self) -> &str {
        self.direction.answer_of(&self.card)
    }

    pub fn is_correct(&self, index: usize) -> bool {
        self.options.get(index).map(|o| o == self.answer()).unwrap_or(false)
    }

    /// First selection wins; further clicks are ignored until the next
    /// question is generated.
    pub fn select(&mut self, index: usize) {
        if self.selected.is_none() && index < self.options.len() {
            self.selected = Some(index);
        }
    }

    pub fn is_locked(&self) -> bool {
        self.selected.is_some()
    }
}

/// Builds a question from the collection, or `None` when the set cannot
/// support four distinct options.
///
/// The collection is shuffled, the first card becomes the correct answer,
/// and the rest is scanned for up to three distractor values. A candidate
/// whose answer-side value collides with the correct answer or an already
/// chosen distractor is skipped, never backfilled, so a set with enough
/// cards but duplicated values can still come up short.
pub fn generate_question(cards: &[Flashcard], direction: QuizDirection) -> Option<QuizQuestion> {
    generate_question_with(cards, direction, &mut rand::rng())
}

pub fn generate_question_with<R: Rng + ?Sized>(
    cards: &[Flashcard],
    direction: QuizDirection,
    rng: &mut R,
) -> Option<QuizQuestion> {
    if cards.len() < OPTION_COUNT {
        return None;
    }

    let mut pool: Vec<&Flashcard> = cards.iter().collect();
    pool.shuffle(rng);

    let correct = pool[0];
    let answer = direction.answer_of(correct).to_string();

    let mut options: Vec<String> = Vec::with_capacity(OPTION_COUNT);
    for candidate in &pool[1..] {
        if options.len() == OPTION_COUNT - 1 {
            break;
        }
        let value = direction.answer_of(candidate);
        if value != answer && !options.iter().any(|chosen| chosen == value) {
            options.push(value.to_string());
        }
    }

    if options.len() < OPTION_COUNT - 1 {
        return None;
    }

    options.push(answer);
    options.shuffle(rng);

    Some(QuizQuestion { card: correct.clone(), direction, options, selected: None })
}

#[cfg(test)]
mod tests {
    use rand::{
        rngs::StdRng,
        SeedableRng,
    };

    use super::*;

    fn card(word: &str, meaning: &str) -> Flashcard {
        Flashcard {
            id: None,
            word: word.to_string(),
            meaning: meaning.to_string(),
            example: None,
            note: None,
        }
    }

    fn sample_cards() -> Vec<Flashcard> {
        vec![card("cat", "mèo"), card("dog", "chó"), card("fish", "cá"), card("bird", "chim")]
    }

    #[test]
    fn produces_four_distinct_options_with_one_correct() {
        let cards = sample_cards();

        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let question =
                generate_question_with(&cards, QuizDirection::WordToMeaning, &mut rng)
                    .expect("four distinct cards must always yield a question");

            assert_eq!(question.options.len(), OPTION_COUNT);

            let correct_count =
                question.options.iter().filter(|o| *o == question.answer()).count();
            assert_eq!(correct_count, 1);

            for (i, a) in question.options.iter().enumerate() {
                for b in &question.options[i + 1..] {
                    assert_ne!(a, b, "options must be distinct (seed {seed})");
                }
            }

            // Every option comes from some card's meaning.
            for option in &question.options {
                assert!(cards.iter().any(|c| &c.meaning == option));
            }
        }
    }

    #[test]
    fn correct_card_scenario_from_four_known_cards() {
        let cards = sample_cards();
        let mut rng = StdRng::seed_from_u64(7);
        let question =
            generate_question_with(&cards, QuizDirection::WordToMeaning, &mut rng).unwrap();

        // With exactly four cards and distinct meanings, the options are
        // always the full meaning set.
        let mut options = question.options.clone();
        options.sort();
        let mut expected =
            vec!["mèo".to_string(), "chó".to_string(), "cá".to_string(), "chim".to_string()];
        expected.sort();
        assert_eq!(options, expected);
        assert!(question.is_correct(
            question.options.iter().position(|o| o == question.answer()).unwrap()
        ));
    }

    #[test]
    fn fewer_than_four_cards_is_unavailable() {
        let cards = vec![card("cat", "mèo"), card("dog", "chó"), card("fish", "cá")];
        for seed in 0..16 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert!(generate_question_with(&cards, QuizDirection::WordToMeaning, &mut rng)
                .is_none());
        }
    }

    #[test]
    fn duplicate_values_are_skipped_not_backfilled() {
        // Four cards, but only three distinct meanings: one distractor slot
        // can never be filled, so the quiz is unavailable.
        let cards = vec![
            card("cat", "mèo"),
            card("kitty", "mèo"),
            card("dog", "chó"),
            card("fish", "cá"),
        ];

        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert!(generate_question_with(&cards, QuizDirection::WordToMeaning, &mut rng)
                .is_none());
        }

        // The reverse direction has four distinct words, so it works.
        let mut rng = StdRng::seed_from_u64(0);
        assert!(generate_question_with(&cards, QuizDirection::MeaningToWord, &mut rng).is_some());
    }

    #[test]
    fn selection_locks_until_regenerated() {
        let cards = sample_cards();
        let mut rng = StdRng::seed_from_u64(3);
        let mut question =
            generate_question_with(&cards, QuizDirection::WordToMeaning, &mut rng).unwrap();

        assert!(!question.is_locked());
        question.select(2);
        assert_eq!(question.selected, Some(2));

        question.select(0);
        assert_eq!(question.selected, Some(2), "first selection must stick");
    }
}
