//! Team reference data used by membership and established-date questions.

pub mod dataset;
pub mod entities;

pub use dataset::TeamDataset;
pub use entities::TeamRecord;
