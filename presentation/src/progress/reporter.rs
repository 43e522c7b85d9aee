//! Progress reporting for challenge runs

use challenge_application::TurnProgressNotifier;
use challenge_domain::{ConversationId, DriverPhase, QuestionKind, UserId};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Reports progress with a single spinner that tracks the current turn
pub struct ProgressReporter {
    spinner: ProgressBar,
}

impl ProgressReporter {
    pub fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(Self::spinner_style());
        spinner.set_prefix("Challenge");
        spinner.enable_steady_tick(Duration::from_millis(100));
        Self { spinner }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn phase_message(phase: DriverPhase) -> &'static str {
        match phase {
            DriverPhase::Registering => "Registering...",
            DriverPhase::Starting => "Starting conversation...",
            DriverPhase::AwaitingPrompt => "Waiting for prompt...",
            DriverPhase::Classifying => "Classifying prompt...",
            DriverPhase::Submitting => "Submitting answer...",
            DriverPhase::Finished => "Finished",
            DriverPhase::Failed => "Failed",
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnProgressNotifier for ProgressReporter {
    fn on_phase(&self, phase: DriverPhase) {
        if !phase.is_terminal() {
            self.spinner.set_message(Self::phase_message(phase));
        }
    }

    fn on_conversation_started(&self, conversation_id: &ConversationId) {
        self.spinner
            .set_prefix(format!("Conversation {}", conversation_id));
    }

    fn on_turn_answered(&self, turn: usize, kind: QuestionKind, correct: bool) {
        let status = if correct { "v".green() } else { "x".red() };
        self.spinner
            .println(format!("  {} turn {:>3}: {}", status, turn, kind));
    }

    fn on_finished(&self, turns: usize) {
        self.spinner
            .finish_with_message(format!("{} ({} turns)", "complete!".green(), turns));
    }

    fn on_failed(&self, reason: &str) {
        self.spinner
            .abandon_with_message(format!("{} {}", "failed:".red(), reason));
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl TurnProgressNotifier for SimpleProgress {
    fn on_registered(&self, user_id: &UserId) {
        println!("{} {} {}", "->".cyan(), "Registered".bold(), user_id);
    }

    fn on_conversation_started(&self, conversation_id: &ConversationId) {
        println!(
            "{} {} {}",
            "->".cyan(),
            "Conversation".bold(),
            conversation_id
        );
    }

    fn on_prompt(&self, turn: usize, prompt: &str) {
        println!("  {} [{}] {}", "?".cyan(), turn, prompt.dimmed());
    }

    fn on_turn_answered(&self, turn: usize, kind: QuestionKind, correct: bool) {
        if correct {
            println!("  {} [{}] {}", "v".green(), turn, kind);
        } else {
            println!("  {} [{}] {} (rejected)", "x".red(), turn, kind);
        }
    }

    fn on_finished(&self, turns: usize) {
        println!("{} finished after {} turns", "->".cyan(), turns);
    }

    fn on_failed(&self, reason: &str) {
        println!("{} {}", "failed:".red().bold(), reason);
    }
}
