//! Run Challenge use case
//!
//! Drives one conversation with the challenge service from registration to
//! a terminal state.
//!
//! ```text
//! Registering ─► Starting ─► AwaitingPrompt ─► Classifying ─► Submitting ─┐
//!                                 ▲    │              │             │     │
//!                                 │    └► Finished    └► Failed ◄───┘     │
//!                                 └───────────── correct ◄────────────────┘
//! ```
//!
//! Any error ends the run immediately in `Failed`; nothing is retried.

use crate::config::ChallengeParams;
use crate::ports::challenge_service::{ChallengeService, ServiceError};
use crate::ports::progress::{NoProgress, TurnProgressNotifier};
use crate::ports::transcript::{NoTranscriptLogger, TranscriptEvent, TranscriptLogger};
use challenge_domain::{
    AnswerEngine, ConversationId, ConversationState, ConversationStatus, DomainError, DriverPhase,
    UserId, is_termination,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that end a challenge run in the `Failed` state
#[derive(Error, Debug)]
pub enum RunChallengeError {
    #[error("Challenge service error: {0}")]
    Transport(#[from] ServiceError),

    #[error("No question shape matches prompt: {prompt:?}")]
    UnrecognizedPrompt { prompt: String },

    #[error("Could not answer {prompt:?}: {source}")]
    Answer {
        prompt: String,
        #[source]
        source: DomainError,
    },

    #[error("Answered {prompt:?} wrong with {answer:?}")]
    WrongAnswer { prompt: String, answer: String },

    #[error("Conversation exceeded {max_turns} turns without finishing")]
    TurnBoundExceeded { max_turns: usize },
}

impl RunChallengeError {
    fn from_domain(prompt: &str, error: DomainError) -> Self {
        match error {
            DomainError::UnrecognizedPrompt(_) => RunChallengeError::UnrecognizedPrompt {
                prompt: prompt.to_string(),
            },
            source => RunChallengeError::Answer {
                prompt: prompt.to_string(),
                source,
            },
        }
    }

    /// Short machine-readable cause, used in transcripts
    pub fn cause(&self) -> &'static str {
        match self {
            RunChallengeError::Transport(_) => "transport",
            RunChallengeError::UnrecognizedPrompt { .. } => "unrecognized_prompt",
            RunChallengeError::Answer { source, .. } => match source {
                DomainError::EmptyInput => "empty_input",
                _ => "answer",
            },
            RunChallengeError::WrongAnswer { .. } => "wrong_answer",
            RunChallengeError::TurnBoundExceeded { .. } => "turn_bound_exceeded",
        }
    }
}

/// Result of a run that reached `Finished`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeOutcome {
    pub user_id: UserId,
    pub conversation_id: ConversationId,
    /// Answered turns before the termination prompt
    pub turns: usize,
    /// Final conversation status, always `Finished` for a returned outcome
    pub status: ConversationStatus,
}

/// Use case for completing the challenge
pub struct RunChallengeUseCase<S: ChallengeService + 'static> {
    service: Arc<S>,
    engine: AnswerEngine,
    params: ChallengeParams,
    transcript: Arc<dyn TranscriptLogger>,
}

impl<S: ChallengeService + 'static> RunChallengeUseCase<S> {
    pub fn new(service: Arc<S>, engine: AnswerEngine) -> Self {
        Self {
            service,
            engine,
            params: ChallengeParams::default(),
            transcript: Arc::new(NoTranscriptLogger),
        }
    }

    pub fn with_params(mut self, params: ChallengeParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_transcript(mut self, transcript: Arc<dyn TranscriptLogger>) -> Self {
        self.transcript = transcript;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self) -> Result<ChallengeOutcome, RunChallengeError> {
        self.execute_with_progress(&NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        progress: &dyn TurnProgressNotifier,
    ) -> Result<ChallengeOutcome, RunChallengeError> {
        let (user_id, conversation_id) = match self.open(progress).await {
            Ok(ids) => ids,
            Err(e) => return Err(self.failed(e, None, progress)),
        };

        let mut state = ConversationState::new(conversation_id);
        if let Err(e) = self.drive(&mut state, progress).await {
            state.fail();
            return Err(self.failed(e, Some(&state), progress));
        }
        state.finish();

        info!("Challenge finished after {} turns", state.turn_count());
        progress.on_phase(DriverPhase::Finished);
        progress.on_finished(state.turn_count());
        self.transcript.log(TranscriptEvent::Finished {
            turns: state.turn_count(),
        });

        Ok(ChallengeOutcome {
            user_id,
            conversation_id: state.conversation_id().clone(),
            turns: state.turn_count(),
            status: state.status(),
        })
    }

    /// Register and open the conversation
    async fn open(
        &self,
        progress: &dyn TurnProgressNotifier,
    ) -> Result<(UserId, ConversationId), RunChallengeError> {
        progress.on_phase(DriverPhase::Registering);
        let user_id = self.service.register(&self.params.participant).await?;
        info!("Registered as user {}", user_id);
        progress.on_registered(&user_id);
        self.transcript.log(TranscriptEvent::Registered {
            user_id: user_id.to_string(),
        });

        progress.on_phase(DriverPhase::Starting);
        let conversation_id = self.service.start_conversation(&user_id).await?;
        info!("Started conversation {}", conversation_id);
        progress.on_conversation_started(&conversation_id);
        self.transcript.log(TranscriptEvent::ConversationStarted {
            conversation_id: conversation_id.to_string(),
        });

        Ok((user_id, conversation_id))
    }

    /// Report a failed run; `state` is `None` if no conversation was opened
    fn failed(
        &self,
        error: RunChallengeError,
        state: Option<&ConversationState>,
        progress: &dyn TurnProgressNotifier,
    ) -> RunChallengeError {
        let turns = state.map(ConversationState::turn_count);
        warn!(
            status = ?state.map(ConversationState::status),
            turns = ?turns,
            "Challenge failed ({}): {}",
            error.cause(),
            error
        );
        progress.on_phase(DriverPhase::Failed);
        progress.on_failed(&error.to_string());
        self.transcript.log(TranscriptEvent::Failed {
            error: error.to_string(),
            turns,
        });
        error
    }

    /// Turn loop: returns `Ok` only when the termination prompt arrives
    async fn drive(
        &self,
        state: &mut ConversationState,
        progress: &dyn TurnProgressNotifier,
    ) -> Result<(), RunChallengeError> {
        let max_turns = self.params.max_turns;

        while state.turn_count() < max_turns {
            let turn = state.turn_count() + 1;

            progress.on_phase(DriverPhase::AwaitingPrompt);
            let prompt = self.service.fetch_prompt(state.conversation_id()).await?;
            debug!(turn, prompt = %prompt, "Received prompt");
            progress.on_prompt(turn, &prompt);
            self.transcript.log(TranscriptEvent::PromptReceived {
                turn,
                text: prompt.clone(),
            });

            if is_termination(&prompt) {
                return Ok(());
            }

            progress.on_phase(DriverPhase::Classifying);
            let (question, answer) = self
                .engine
                .answer(&prompt)
                .map_err(|e| RunChallengeError::from_domain(&prompt, e))?;
            let kind = question.kind();
            debug!(turn, kind = %kind.as_str(), answer = %answer, "Computed answer");

            progress.on_phase(DriverPhase::Submitting);
            let correct = self
                .service
                .submit_answer(state.conversation_id(), &answer)
                .await?;
            progress.on_turn_answered(turn, kind, correct);
            self.transcript.log(TranscriptEvent::AnswerSubmitted {
                turn,
                kind,
                answer: answer.clone(),
                correct,
            });

            if !correct {
                return Err(RunChallengeError::WrongAnswer { prompt, answer });
            }
            state.record_turn();
        }

        Err(RunChallengeError::TurnBoundExceeded { max_turns })
    }
}
