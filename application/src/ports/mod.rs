//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod challenge_service;
pub mod dataset_provider;
pub mod progress;
pub mod transcript;
