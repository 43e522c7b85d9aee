//! Parsed question value object

use super::kind::QuestionKind;
use serde::{Deserialize, Serialize};

/// A classified prompt together with its extracted parameters (Value Object)
///
/// List parameters hold the raw comma-separated tokens; trimming happens in
/// the answer computers. An empty or whitespace-only list yields no tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParsedQuestion {
    Acknowledgment,
    Sum { numbers: Vec<String> },
    Max { numbers: Vec<String> },
    EvenLengthWords { words: Vec<String> },
    Alphabetize { words: Vec<String> },
    NhlMembership { candidates: Vec<String> },
    BaseballMembership { candidates: Vec<String> },
    EstablishedDate { year: String },
    Unrecognized,
}

impl ParsedQuestion {
    pub fn kind(&self) -> QuestionKind {
        match self {
            ParsedQuestion::Acknowledgment => QuestionKind::Acknowledgment,
            ParsedQuestion::Sum { .. } => QuestionKind::Sum,
            ParsedQuestion::Max { .. } => QuestionKind::Max,
            ParsedQuestion::EvenLengthWords { .. } => QuestionKind::EvenLengthWords,
            ParsedQuestion::Alphabetize { .. } => QuestionKind::Alphabetize,
            ParsedQuestion::NhlMembership { .. } => QuestionKind::NhlMembership,
            ParsedQuestion::BaseballMembership { .. } => QuestionKind::BaseballMembership,
            ParsedQuestion::EstablishedDate { .. } => QuestionKind::EstablishedDate,
            ParsedQuestion::Unrecognized => QuestionKind::Unrecognized,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, ParsedQuestion::Unrecognized)
    }
}

/// Split a captured list on commas, keeping tokens untrimmed
pub(crate) fn split_list(list: &str) -> Vec<String> {
    if list.trim().is_empty() {
        return Vec::new();
    }
    list.split(',').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list_keeps_raw_tokens() {
        assert_eq!(split_list("1, 2 ,3"), vec!["1", " 2 ", "3"]);
    }

    #[test]
    fn test_split_list_empty() {
        assert!(split_list("").is_empty());
        assert!(split_list("   ").is_empty());
    }

    #[test]
    fn test_kind_mapping() {
        assert_eq!(ParsedQuestion::Acknowledgment.kind(), QuestionKind::Acknowledgment);
        assert_eq!(
            ParsedQuestion::EstablishedDate {
                year: "1901".to_string()
            }
            .kind(),
            QuestionKind::EstablishedDate
        );
        assert!(!ParsedQuestion::Unrecognized.is_recognized());
    }
}
