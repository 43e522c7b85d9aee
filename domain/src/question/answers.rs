//! Answer computers, one pure function per question kind.
//!
//! List answers are joined with `,` and no surrounding spaces. Numeric
//! answers go through [`render_number`].

use super::parsed::ParsedQuestion;
use crate::core::error::DomainError;
use crate::core::number::{parse_number, render_number};
use crate::team::{TeamDataset, TeamRecord};

/// Answer to every acknowledgment prompt
pub const ACKNOWLEDGMENT_ANSWER: &str = "yes";

/// Compute the answer for an already classified question.
///
/// `Unrecognized` is an error, never a silent empty answer. The error
/// carries no prompt text here; [`AnswerEngine`](super::engine::AnswerEngine)
/// reports the prompt itself.
pub fn compute_answer(
    question: &ParsedQuestion,
    dataset: &TeamDataset,
) -> Result<String, DomainError> {
    match question {
        ParsedQuestion::Acknowledgment => Ok(ACKNOWLEDGMENT_ANSWER.to_string()),
        ParsedQuestion::Sum { numbers } => sum(numbers.as_slice()),
        ParsedQuestion::Max { numbers } => max(numbers.as_slice()),
        ParsedQuestion::EvenLengthWords { words } => Ok(even_length_words(words.as_slice())),
        ParsedQuestion::Alphabetize { words } => Ok(alphabetize(words.as_slice())),
        ParsedQuestion::NhlMembership { candidates } => {
            Ok(members(candidates.as_slice(), dataset, TeamRecord::is_nhl))
        }
        ParsedQuestion::BaseballMembership { candidates } => {
            Ok(members(candidates.as_slice(), dataset, TeamRecord::is_baseball))
        }
        ParsedQuestion::EstablishedDate { year } => Ok(established_in(year, dataset)),
        ParsedQuestion::Unrecognized => Err(DomainError::UnrecognizedPrompt(String::new())),
    }
}

fn parse_all<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<f64>, DomainError> {
    tokens.iter().map(|t| parse_number(t.as_ref())).collect()
}

fn trimmed<S: AsRef<str>>(tokens: &[S]) -> impl Iterator<Item = &str> {
    tokens.iter().map(|t| t.as_ref().trim())
}

/// Sum of all tokens; an empty list sums to `0`
pub fn sum<S: AsRef<str>>(numbers: &[S]) -> Result<String, DomainError> {
    let total = parse_all(numbers)?.into_iter().fold(0.0, |acc, n| acc + n);
    Ok(render_number(total))
}

/// Largest token; an empty list is [`DomainError::EmptyInput`]
pub fn max<S: AsRef<str>>(numbers: &[S]) -> Result<String, DomainError> {
    parse_all(numbers)?
        .into_iter()
        .reduce(f64::max)
        .map(render_number)
        .ok_or(DomainError::EmptyInput)
}

/// Words with an even character count, in input order
pub fn even_length_words<S: AsRef<str>>(words: &[S]) -> String {
    trimmed(words)
        .filter(|word| word.chars().count() % 2 == 0)
        .collect::<Vec<_>>()
        .join(",")
}

/// Case-insensitive stable sort that keeps the original casing
pub fn alphabetize<S: AsRef<str>>(words: &[S]) -> String {
    let mut keyed: Vec<(String, &str)> = trimmed(words)
        .map(|word| (word.to_lowercase(), word))
        .collect();
    // sort_by is stable: equal lowercase keys keep input order
    keyed.sort_by(|(a, _), (b, _)| a.cmp(b));
    keyed
        .into_iter()
        .map(|(_, word)| word)
        .collect::<Vec<_>>()
        .join(",")
}

/// Candidates with a same-named dataset record satisfying `predicate`
pub fn members<S: AsRef<str>>(
    candidates: &[S],
    dataset: &TeamDataset,
    predicate: fn(&TeamRecord) -> bool,
) -> String {
    trimmed(candidates)
        .filter(|name| dataset.any_named(name, predicate))
        .collect::<Vec<_>>()
        .join(",")
}

/// Teams established in exactly `year` (textual match), in dataset order
pub fn established_in(year: &str, dataset: &TeamDataset) -> String {
    dataset
        .teams_established_in(year)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> TeamDataset {
        TeamDataset::new(vec![
            TeamRecord::new("Boston Bruins", "Boston", "NHL", "1924", "hockey"),
            TeamRecord::new("Boston Red Sox", "Boston", "MLB", "1901", "baseball"),
            TeamRecord::new("Detroit Tigers", "Detroit", "MLB", "1901", "baseball"),
            TeamRecord::new("Chicago Cubs", "Chicago", "MLB", "1876", "baseball"),
        ])
    }

    #[test]
    fn test_sum() {
        assert_eq!(sum(&["1", " 2", " 3"]).unwrap(), "6");
        assert_eq!(sum(&["2.5", " 2.5"]).unwrap(), "5");
        assert_eq!(sum(&["-1", "0.5"]).unwrap(), "-0.5");
    }

    #[test]
    fn test_sum_of_empty_list_is_zero() {
        let empty: [&str; 0] = [];
        assert_eq!(sum(&empty).unwrap(), "0");
    }

    #[test]
    fn test_sum_rejects_non_numeric_token() {
        assert_eq!(
            sum(&["1", " two"]),
            Err(DomainError::InvalidNumber("two".to_string()))
        );
    }

    #[test]
    fn test_max() {
        assert_eq!(max(&["3", " 10", " 7"]).unwrap(), "10");
        assert_eq!(max(&["-3", "-1.5"]).unwrap(), "-1.5");
    }

    #[test]
    fn test_non_finite_tokens_are_invalid() {
        assert_eq!(
            max(&["NaN", " 1"]),
            Err(DomainError::InvalidNumber("NaN".to_string()))
        );
        assert_eq!(
            max(&["1", " inf"]),
            Err(DomainError::InvalidNumber("inf".to_string()))
        );
        assert_eq!(
            sum(&["NaN", " 1"]),
            Err(DomainError::InvalidNumber("NaN".to_string()))
        );
        assert_eq!(
            sum(&["inf", " 1"]),
            Err(DomainError::InvalidNumber("inf".to_string()))
        );
    }

    #[test]
    fn test_max_of_empty_list_fails() {
        let empty: [&str; 0] = [];
        assert_eq!(max(&empty), Err(DomainError::EmptyInput));
    }

    #[test]
    fn test_even_length_words() {
        assert_eq!(
            even_length_words(&["cat", " dogs", " elephant"]),
            "dogs,elephant"
        );
        assert_eq!(even_length_words(&["ab", "ab", "abc"]), "ab,ab");
        assert_eq!(even_length_words(&["odd"]), "");
    }

    #[test]
    fn test_even_length_counts_characters() {
        // 2 characters, 4 bytes
        assert_eq!(even_length_words(&["éé", "é"]), "éé");
    }

    #[test]
    fn test_alphabetize() {
        assert_eq!(
            alphabetize(&["banana", " Apple", " cherry"]),
            "Apple,banana,cherry"
        );
    }

    #[test]
    fn test_alphabetize_is_stable_on_ties() {
        assert_eq!(alphabetize(&["b", "Apple", "apple", "APPLE"]), "Apple,apple,APPLE,b");
        assert_eq!(alphabetize(&["apple", "Apple"]), "apple,Apple");
    }

    #[test]
    fn test_membership() {
        let data = dataset();
        let candidates = ["Boston Bruins", " Boston Red Sox"];
        assert_eq!(
            members(&candidates, &data, TeamRecord::is_nhl),
            "Boston Bruins"
        );
        assert_eq!(
            members(&candidates, &data, TeamRecord::is_baseball),
            "Boston Red Sox"
        );
    }

    #[test]
    fn test_membership_keeps_order_and_duplicates() {
        let data = dataset();
        let candidates = ["Chicago Cubs", "Unknown FC", "Boston Red Sox", "Chicago Cubs"];
        assert_eq!(
            members(&candidates, &data, TeamRecord::is_baseball),
            "Chicago Cubs,Boston Red Sox,Chicago Cubs"
        );
    }

    #[test]
    fn test_established_in() {
        let data = dataset();
        assert_eq!(established_in("1901", &data), "Boston Red Sox,Detroit Tigers");
        assert_eq!(established_in("2024", &data), "");
    }

    #[test]
    fn test_compute_answer_dispatch() {
        let data = dataset();
        assert_eq!(
            compute_answer(&ParsedQuestion::Acknowledgment, &data).unwrap(),
            "yes"
        );
        assert_eq!(
            compute_answer(
                &ParsedQuestion::EstablishedDate {
                    year: "1876".to_string()
                },
                &data
            )
            .unwrap(),
            "Chicago Cubs"
        );
        assert!(matches!(
            compute_answer(&ParsedQuestion::Unrecognized, &data),
            Err(DomainError::UnrecognizedPrompt(_))
        ));
    }
}
