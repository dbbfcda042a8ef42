use serde::{
    Deserialize,
    Serialize,
};

/// A single flashcard as stored by the server. Cards fetched from the API
/// always carry an id; a card built locally from a draft does not until the
/// create endpoint echoes it back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub word: String,
    pub meaning: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// In-progress input for a new card. Optional fields stay empty strings in
/// the form and are dropped at submit time.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CardDraft {
    pub word: String,
    pub meaning: String,
    pub example: String,
    pub note: String,
}

impl CardDraft {
    /// Word and meaning are required; everything else is optional.
    pub fn validate(&self) -> Result<(), String> {
        if self.word.trim().is_empty() {
            return Err("A word is required".to_string());
        }
        if self.meaning.trim().is_empty() {
            return Err("A meaning is required".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StudyMode {
    #[default]
    Browse,
    Random,
    Quiz,
}

impl StudyMode {
    pub fn label(&self) -> &'static str {
        match self {
            StudyMode::Browse => "All Cards",
            StudyMode::Random => "Random",
            StudyMode::Quiz => "Quiz",
        }
    }
}

/// Which side of the card is the prompt and which is the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuizDirection {
    #[default]
    WordToMeaning,
    MeaningToWord,
}

impl QuizDirection {
    pub fn prompt_of<'a>(&self, card: &'a Flashcard) -> &'a str {
        match self {
            QuizDirection::WordToMeaning => &card.word,
            QuizDirection::MeaningToWord => &card.meaning,
        }
    }

    pub fn answer_of<'a>(&self, card: &'a Flashcard) -> &'a str {
        match self {
            QuizDirection::WordToMeaning => &card.meaning,
            QuizDirection::MeaningToWord => &card.word,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QuizDirection::WordToMeaning => "Word → Meaning",
            QuizDirection::MeaningToWord => "Meaning → Word",
        }
    }
}

/// The two visibility contexts a set can be viewed in. Owner view is
/// editable; explore view is public and read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SetView {
    #[default]
    Owner,
    Explore,
}

impl SetView {
    pub fn is_editable(&self) -> bool {
        matches!(self, SetView::Owner)
    }

    pub fn label(&self) -> &'static str {
        match self {
            SetView::Owner => "My Cards",
            SetView::Explore => "Explore",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_requires_word_and_meaning() {
        let mut draft = CardDraft::default();
        assert!(draft.validate().is_err());

        draft.word = "cat".to_string();
        let err = draft.validate().unwrap_err();
        assert!(!err.is_empty());

        draft.meaning = "mèo".to_string();
        assert!(draft.validate().is_ok());

        // Whitespace-only input is still empty.
        draft.meaning = "   ".to_string();
        assert!(draft.validate().is_err());
    }

    #[test]
    fn direction_picks_opposite_faces() {
        let card = Flashcard {
            id: Some(1),
            word: "dog".to_string(),
            meaning: "chó".to_string(),
            example: None,
            note: None,
        };

        assert_eq!(QuizDirection::WordToMeaning.prompt_of(&card), "dog");
        assert_eq!(QuizDirection::WordToMeaning.answer_of(&card), "chó");
        assert_eq!(QuizDirection::MeaningToWord.prompt_of(&card), "chó");
        assert_eq!(QuizDirection::MeaningToWord.answer_of(&card), "dog");
    }
}
