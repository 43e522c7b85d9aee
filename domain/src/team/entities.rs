//! Team record entity

use serde::{Deserialize, Serialize};

/// Number of comma-separated fields in one dataset line
pub const FIELD_COUNT: usize = 5;

/// One row of the team reference table (Value Object)
///
/// All fields are kept as text. `year_established` is compared textually
/// and never parsed as a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub team_name: String,
    pub city: String,
    pub league: String,
    pub year_established: String,
    pub sport: String,
}

impl TeamRecord {
    pub fn new(
        team_name: impl Into<String>,
        city: impl Into<String>,
        league: impl Into<String>,
        year_established: impl Into<String>,
        sport: impl Into<String>,
    ) -> Self {
        Self {
            team_name: team_name.into(),
            city: city.into(),
            league: league.into(),
            year_established: year_established.into(),
            sport: sport.into(),
        }
    }

    /// Build a record from exactly five already-trimmed fields
    pub(crate) fn from_fields(fields: [&str; FIELD_COUNT]) -> Self {
        let [team_name, city, league, year_established, sport] = fields;
        Self::new(team_name, city, league, year_established, sport)
    }

    pub fn is_nhl(&self) -> bool {
        self.league == "NHL"
    }

    pub fn is_baseball(&self) -> bool {
        self.sport == "baseball"
    }
}
