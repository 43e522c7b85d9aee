//! Challenge service adapter: HTTP + JSON via `reqwest`.

mod client;
mod wire;

pub use client::{DEFAULT_BASE_URL, HttpChallengeService};
