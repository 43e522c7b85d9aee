//! Question domain
//!
//! Turns a prompt's text into a [`ParsedQuestion`] and computes its answer.
//!
//! ```text
//! prompt text ──► PromptClassifier ──► ParsedQuestion ──► compute_answer ──► answer text
//!                  (shape table)                          (+ TeamDataset)
//! ```
//!
//! Everything here is pure: no I/O, no interior mutability.

pub mod answers;
pub mod classifier;
pub mod engine;
pub mod kind;
pub mod parsed;

pub use answers::{ACKNOWLEDGMENT_ANSWER, compute_answer};
pub use classifier::{ACKNOWLEDGMENT_PROMPTS, PromptClassifier};
pub use engine::AnswerEngine;
pub use kind::QuestionKind;
pub use parsed::ParsedQuestion;
