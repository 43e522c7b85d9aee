//! Question kinds recognized by the classifier

use serde::{Deserialize, Serialize};

/// The closed set of question shapes, plus the `Unrecognized` sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    Acknowledgment,
    Sum,
    Max,
    EvenLengthWords,
    Alphabetize,
    NhlMembership,
    BaseballMembership,
    EstablishedDate,
    Unrecognized,
}

impl QuestionKind {
    pub fn as_str(&self) -> &str {
        match self {
            QuestionKind::Acknowledgment => "acknowledgment",
            QuestionKind::Sum => "sum",
            QuestionKind::Max => "max",
            QuestionKind::EvenLengthWords => "even_length_words",
            QuestionKind::Alphabetize => "alphabetize",
            QuestionKind::NhlMembership => "nhl_membership",
            QuestionKind::BaseballMembership => "baseball_membership",
            QuestionKind::EstablishedDate => "established_date",
            QuestionKind::Unrecognized => "unrecognized",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            QuestionKind::Acknowledgment => "Acknowledgment",
            QuestionKind::Sum => "Sum",
            QuestionKind::Max => "Largest number",
            QuestionKind::EvenLengthWords => "Even-length words",
            QuestionKind::Alphabetize => "Alphabetize",
            QuestionKind::NhlMembership => "NHL team",
            QuestionKind::BaseballMembership => "Baseball team",
            QuestionKind::EstablishedDate => "Established in",
            QuestionKind::Unrecognized => "Unrecognized",
        }
    }
}

impl std::fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
