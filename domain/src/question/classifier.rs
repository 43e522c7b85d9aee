//! Prompt classifier.
//!
//! Matches prompt text against a priority-ordered table of question shapes.
//! Every shape is a whole-string match: the prompt must equal an
//! acknowledgment literal, or fit a `^prefix(<capture>)suffix$` pattern.
//! The first shape that matches wins; if none does the result is
//! [`ParsedQuestion::Unrecognized`].
//!
//! | Priority | Kind | Shape |
//! |----------|------|-------|
//! | 1 | Acknowledgment | one of [`ACKNOWLEDGMENT_PROMPTS`] |
//! | 2 | Sum | `What is the sum of the following numbers: <list>?` |
//! | 3 | Max | `What is the largest of the following numbers: <list>?` |
//! | 4 | EvenLengthWords | `Please repeat only the words with an even number of letters: <list>.` |
//! | 5 | Alphabetize | `Please alphabetize the following words: <list>.` |
//! | 6 | NhlMembership | `Which of the following is an NHL team: <list>?` |
//! | 7 | BaseballMembership | `Which of the following is a baseball team: <list>?` |
//! | 8 | EstablishedDate | `What sports teams in the data set were established in <year>?` |

use super::kind::QuestionKind;
use super::parsed::{ParsedQuestion, split_list};
use regex::Regex;

/// Prompts that only ask for confirmation
pub const ACKNOWLEDGMENT_PROMPTS: [&str; 3] = [
    "Are you ready to begin?",
    "Great! Are you ready to continue to some word questions?",
    "Are you ready to go?",
];

/// How a shape recognizes its prompt text
enum Matcher {
    /// Whole prompt equals one of the literals; captures nothing
    Exact(&'static [&'static str]),
    /// Anchored pattern whose first group is the parameter text
    Pattern(Regex),
}

impl Matcher {
    /// `Some(parameter_text)` if the whole prompt fits this shape
    fn capture<'t>(&self, text: &'t str) -> Option<&'t str> {
        match self {
            Matcher::Exact(literals) => literals.iter().any(|lit| *lit == text).then_some(""),
            Matcher::Pattern(regex) => regex
                .captures(text)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str()),
        }
    }
}

struct Shape {
    kind: QuestionKind,
    matcher: Matcher,
    extract: fn(&str) -> ParsedQuestion,
}

impl Shape {
    fn exact(kind: QuestionKind, literals: &'static [&'static str]) -> Self {
        Self {
            kind,
            matcher: Matcher::Exact(literals),
            extract: |_| ParsedQuestion::Acknowledgment,
        }
    }

    /// Shape `prefix<capture>suffix`, with `capture` a regex fragment
    fn pattern(
        kind: QuestionKind,
        prefix: &str,
        capture: &str,
        suffix: &str,
        extract: fn(&str) -> ParsedQuestion,
    ) -> Self {
        let source = format!(
            "^{}({}){}$",
            regex::escape(prefix),
            capture,
            regex::escape(suffix)
        );
        // Built only from the constant table below
        let regex = Regex::new(&source).expect("question shape pattern must compile");
        Self {
            kind,
            matcher: Matcher::Pattern(regex),
            extract,
        }
    }
}

/// Stateless classifier over the fixed shape table
///
/// Construct once and reuse; `classify` takes `&self` and never mutates.
pub struct PromptClassifier {
    shapes: Vec<Shape>,
}

impl PromptClassifier {
    pub fn new() -> Self {
        const LIST: &str = ".*";

        let shapes = vec![
            Shape::exact(QuestionKind::Acknowledgment, &ACKNOWLEDGMENT_PROMPTS),
            Shape::pattern(
                QuestionKind::Sum,
                "What is the sum of the following numbers: ",
                LIST,
                "?",
                |list| ParsedQuestion::Sum {
                    numbers: split_list(list),
                },
            ),
            Shape::pattern(
                QuestionKind::Max,
                "What is the largest of the following numbers: ",
                LIST,
                "?",
                |list| ParsedQuestion::Max {
                    numbers: split_list(list),
                },
            ),
            Shape::pattern(
                QuestionKind::EvenLengthWords,
                "Please repeat only the words with an even number of letters: ",
                LIST,
                ".",
                |list| ParsedQuestion::EvenLengthWords {
                    words: split_list(list),
                },
            ),
            Shape::pattern(
                QuestionKind::Alphabetize,
                "Please alphabetize the following words: ",
                LIST,
                ".",
                |list| ParsedQuestion::Alphabetize {
                    words: split_list(list),
                },
            ),
            Shape::pattern(
                QuestionKind::NhlMembership,
                "Which of the following is an NHL team: ",
                LIST,
                "?",
                |list| ParsedQuestion::NhlMembership {
                    candidates: split_list(list),
                },
            ),
            Shape::pattern(
                QuestionKind::BaseballMembership,
                "Which of the following is a baseball team: ",
                LIST,
                "?",
                |list| ParsedQuestion::BaseballMembership {
                    candidates: split_list(list),
                },
            ),
            Shape::pattern(
                QuestionKind::EstablishedDate,
                "What sports teams in the data set were established in ",
                "[0-9]+",
                "?",
                |year| ParsedQuestion::EstablishedDate {
                    year: year.to_string(),
                },
            ),
        ];

        Self { shapes }
    }

    /// Classify a prompt; the first matching shape in priority order wins
    pub fn classify(&self, text: &str) -> ParsedQuestion {
        self.shapes
            .iter()
            .find_map(|shape| shape.matcher.capture(text).map(shape.extract))
            .unwrap_or(ParsedQuestion::Unrecognized)
    }

    /// Kinds in priority order
    pub fn kinds(&self) -> impl Iterator<Item = QuestionKind> + '_ {
        self.shapes.iter().map(|shape| shape.kind)
    }
}

impl Default for PromptClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PromptClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PromptClassifier")
            .field("kinds", &self.kinds().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str) -> ParsedQuestion {
        PromptClassifier::new().classify(text)
    }

    fn strings(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_acknowledgments() {
        for prompt in ACKNOWLEDGMENT_PROMPTS {
            assert_eq!(classify(prompt), ParsedQuestion::Acknowledgment);
        }
    }

    #[test]
    fn test_acknowledgment_requires_exact_text() {
        assert_eq!(classify("Are you ready to begin"), ParsedQuestion::Unrecognized);
        assert_eq!(classify(" Are you ready to go?"), ParsedQuestion::Unrecognized);
        assert_eq!(classify("are you ready to go?"), ParsedQuestion::Unrecognized);
    }

    #[test]
    fn test_sum_and_max() {
        assert_eq!(
            classify("What is the sum of the following numbers: 1, 2, 3?"),
            ParsedQuestion::Sum {
                numbers: strings(&["1", " 2", " 3"])
            }
        );
        assert_eq!(
            classify("What is the largest of the following numbers: 3, 10, 7?"),
            ParsedQuestion::Max {
                numbers: strings(&["3", " 10", " 7"])
            }
        );
    }

    #[test]
    fn test_empty_number_list() {
        assert_eq!(
            classify("What is the largest of the following numbers: ?"),
            ParsedQuestion::Max { numbers: vec![] }
        );
    }

    #[test]
    fn test_word_shapes_end_with_period() {
        assert_eq!(
            classify("Please repeat only the words with an even number of letters: cat, dogs."),
            ParsedQuestion::EvenLengthWords {
                words: strings(&["cat", " dogs"])
            }
        );
        assert_eq!(
            classify("Please alphabetize the following words: banana, Apple."),
            ParsedQuestion::Alphabetize {
                words: strings(&["banana", " Apple"])
            }
        );
        assert_eq!(
            classify("Please alphabetize the following words: banana, Apple?"),
            ParsedQuestion::Unrecognized
        );
    }

    #[test]
    fn test_team_shapes() {
        assert_eq!(
            classify("Which of the following is an NHL team: Boston Bruins, Boston Red Sox?"),
            ParsedQuestion::NhlMembership {
                candidates: strings(&["Boston Bruins", " Boston Red Sox"])
            }
        );
        assert_eq!(
            classify("Which of the following is a baseball team: Chicago Cubs?"),
            ParsedQuestion::BaseballMembership {
                candidates: strings(&["Chicago Cubs"])
            }
        );
        assert_eq!(
            classify("What sports teams in the data set were established in 1901?"),
            ParsedQuestion::EstablishedDate {
                year: "1901".to_string()
            }
        );
    }

    #[test]
    fn test_established_year_must_be_digits() {
        assert_eq!(
            classify("What sports teams in the data set were established in 1901.0?"),
            ParsedQuestion::Unrecognized
        );
    }

    #[test]
    fn test_whole_string_match_only() {
        assert_eq!(
            classify("Hi! What is the sum of the following numbers: 1, 2?"),
            ParsedQuestion::Unrecognized
        );
        assert_eq!(
            classify("What is the sum of the following numbers: 1, 2? Thanks"),
            ParsedQuestion::Unrecognized
        );
        assert_eq!(classify("What is the capital of France?"), ParsedQuestion::Unrecognized);
    }

    #[test]
    fn test_priority_order() {
        let kinds: Vec<_> = PromptClassifier::new().kinds().collect();
        assert_eq!(kinds.first(), Some(&QuestionKind::Acknowledgment));
        assert_eq!(kinds.last(), Some(&QuestionKind::EstablishedDate));
        assert_eq!(kinds.len(), 8);
    }

    #[test]
    fn test_classify_is_repeatable() {
        let classifier = PromptClassifier::new();
        let prompt = "Please alphabetize the following words: b, a.";
        assert_eq!(classifier.classify(prompt), classifier.classify(prompt));
    }
}
