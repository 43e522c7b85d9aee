//! Classify-and-answer engine
//!
//! Pairs the [`PromptClassifier`] with the team dataset so a single prompt
//! can be turned into its answer in one pure call.

use super::answers::compute_answer;
use super::classifier::PromptClassifier;
use super::parsed::ParsedQuestion;
use crate::core::error::DomainError;
use crate::team::TeamDataset;
use std::sync::Arc;

/// Stateless answering context
///
/// Holds the immutable dataset explicitly instead of reaching for a global.
/// Cheap to share: the dataset sits behind an `Arc`, and `answer` only
/// borrows `self`.
#[derive(Debug)]
pub struct AnswerEngine {
    classifier: PromptClassifier,
    dataset: Arc<TeamDataset>,
}

impl AnswerEngine {
    pub fn new(dataset: Arc<TeamDataset>) -> Self {
        Self {
            classifier: PromptClassifier::new(),
            dataset,
        }
    }

    /// Classify `text` and compute its answer
    pub fn answer(&self, text: &str) -> Result<(ParsedQuestion, String), DomainError> {
        let question = self.classifier.classify(text);
        if !question.is_recognized() {
            return Err(DomainError::UnrecognizedPrompt(text.to_string()));
        }
        let answer = compute_answer(&question, &self.dataset)?;
        Ok((question, answer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::kind::QuestionKind;
    use crate::team::TeamRecord;

    fn engine() -> AnswerEngine {
        AnswerEngine::new(Arc::new(TeamDataset::new(vec![
            TeamRecord::new("Boston Bruins", "Boston", "NHL", "1924", "hockey"),
            TeamRecord::new("Boston Red Sox", "Boston", "MLB", "1901", "baseball"),
        ])))
    }

    #[test]
    fn test_answers_each_shape() {
        let engine = engine();
        let cases = [
            ("Are you ready to begin?", "yes"),
            ("What is the sum of the following numbers: 1, 2, 3?", "6"),
            ("What is the largest of the following numbers: 3, 10, 7?", "10"),
            (
                "Please repeat only the words with an even number of letters: cat, dogs, elephant.",
                "dogs,elephant",
            ),
            (
                "Please alphabetize the following words: banana, Apple, cherry.",
                "Apple,banana,cherry",
            ),
            (
                "Which of the following is an NHL team: Boston Bruins, Boston Red Sox?",
                "Boston Bruins",
            ),
            (
                "Which of the following is a baseball team: Boston Bruins, Boston Red Sox?",
                "Boston Red Sox",
            ),
            (
                "What sports teams in the data set were established in 1901?",
                "Boston Red Sox",
            ),
        ];

        for (prompt, expected) in cases {
            let (_, answer) = engine.answer(prompt).unwrap();
            assert_eq!(answer, expected, "prompt: {}", prompt);
        }
    }

    #[test]
    fn test_unrecognized_prompt_carries_text() {
        let err = engine().answer("What is your favourite colour?").unwrap_err();
        assert_eq!(
            err,
            DomainError::UnrecognizedPrompt("What is your favourite colour?".to_string())
        );
    }

    #[test]
    fn test_empty_max_surfaces_error() {
        let err = engine()
            .answer("What is the largest of the following numbers: ?")
            .unwrap_err();
        assert_eq!(err, DomainError::EmptyInput);
    }

    #[test]
    fn test_nan_token_fails_instead_of_being_skipped() {
        let err = engine()
            .answer("What is the largest of the following numbers: NaN, 1?")
            .unwrap_err();
        assert_eq!(err, DomainError::InvalidNumber("NaN".to_string()));
    }

    #[test]
    fn test_answer_is_idempotent() {
        let engine = engine();
        let prompt = "Please alphabetize the following words: b, A, a.";
        let first = engine.answer(prompt).unwrap();
        let second = engine.answer(prompt).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.0.kind(), QuestionKind::Alphabetize);
    }
}
