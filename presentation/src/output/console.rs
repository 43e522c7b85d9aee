//! Console output formatter for challenge results

use challenge_application::{ChallengeOutcome, RunChallengeError};
use colored::Colorize;

/// Formats the final result of a challenge run for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a run that reached `Finished`
    pub fn format_outcome(outcome: &ChallengeOutcome) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Challenge Complete"));
        output.push('\n');
        output.push_str(&format!(
            "{} {}\n",
            "User:".cyan().bold(),
            outcome.user_id
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Conversation:".cyan().bold(),
            outcome.conversation_id
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Turns answered:".cyan().bold(),
            outcome.turns
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Status:".cyan().bold(),
            outcome.status.as_str().green()
        ));
        output.push_str(&Self::footer());

        output
    }

    /// Format a run that ended in `Failed`
    pub fn format_failure(error: &RunChallengeError) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Challenge Failed"));
        output.push('\n');
        output.push_str(&format!("{} {}\n", "Cause:".red().bold(), error.cause()));

        match error {
            RunChallengeError::WrongAnswer { prompt, answer } => {
                output.push_str(&format!("{} {}\n", "Prompt:".yellow().bold(), prompt));
                output.push_str(&format!("{} {}\n", "Answer:".yellow().bold(), answer));
            }
            RunChallengeError::UnrecognizedPrompt { prompt }
            | RunChallengeError::Answer { prompt, .. } => {
                output.push_str(&format!("{} {}\n", "Prompt:".yellow().bold(), prompt));
                output.push_str(&format!("{} {}\n", "Error:".yellow().bold(), error));
            }
            _ => {
                output.push_str(&format!("{} {}\n", "Error:".yellow().bold(), error));
            }
        }
        output.push_str(&Self::footer());

        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(60).cyan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use challenge_domain::{ConversationId, ConversationStatus, UserId};

    #[test]
    fn test_format_outcome() {
        let outcome = ChallengeOutcome {
            user_id: UserId::new("u-1"),
            conversation_id: ConversationId::new("c-42"),
            turns: 17,
            status: ConversationStatus::Finished,
        };
        let text = ConsoleFormatter::format_outcome(&outcome);
        assert!(text.contains("Challenge Complete"));
        assert!(text.contains("c-42"));
        assert!(text.contains("17"));
        assert!(text.contains("finished"));
    }

    #[test]
    fn test_format_wrong_answer() {
        let error = RunChallengeError::WrongAnswer {
            prompt: "What is the sum of the following numbers: 1, 2?".to_string(),
            answer: "4".to_string(),
        };
        let text = ConsoleFormatter::format_failure(&error);
        assert!(text.contains("wrong_answer"));
        assert!(text.contains("What is the sum of the following numbers: 1, 2?"));
    }

    #[test]
    fn test_format_turn_bound() {
        let error = RunChallengeError::TurnBoundExceeded { max_turns: 100 };
        let text = ConsoleFormatter::format_failure(&error);
        assert!(text.contains("turn_bound_exceeded"));
        assert!(text.contains("100 turns"));
    }
}
