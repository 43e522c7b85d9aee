//! Immutable team dataset and its plain-text line format.
//!
//! The format is a header line followed by one record per line, each with
//! exactly five comma-separated fields in the order
//! `teamName, city, league, year, sport`. Fields are trimmed individually.

use super::entities::{FIELD_COUNT, TeamRecord};
use crate::core::error::DomainError;

/// Ordered, read-only collection of team records
///
/// Loaded once at startup and shared (typically behind an `Arc`) by every
/// answer computation. Order is preserved from the source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamDataset {
    records: Vec<TeamRecord>,
}

impl TeamDataset {
    pub fn new(records: Vec<TeamRecord>) -> Self {
        Self { records }
    }

    /// Parse dataset text.
    ///
    /// The first line is the header and is discarded. Blank lines are
    /// skipped. Any other line that does not split into exactly five
    /// fields is a [`DomainError::DataFormat`], reported with its 1-based
    /// line number.
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        let mut records = Vec::new();

        for (index, line) in text.lines().enumerate().skip(1) {
            if line.trim().is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split(',').map(str::trim).collect();
            let fields = <[&str; FIELD_COUNT]>::try_from(fields.as_slice()).map_err(|_| {
                DomainError::DataFormat {
                    line: index + 1,
                    fields: fields.len(),
                }
            })?;

            records.push(TeamRecord::from_fields(fields));
        }

        Ok(Self { records })
    }

    pub fn records(&self) -> &[TeamRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records whose team name equals `team_name` exactly (case-sensitive)
    pub fn find_by_name<'a>(&'a self, team_name: &'a str) -> impl Iterator<Item = &'a TeamRecord> {
        self.records
            .iter()
            .filter(move |record| record.team_name == team_name)
    }

    /// True if any record named exactly `team_name` satisfies `predicate`
    pub fn any_named(&self, team_name: &str, predicate: impl Fn(&TeamRecord) -> bool) -> bool {
        self.find_by_name(team_name).any(|record| predicate(record))
    }

    /// Team names whose established year is textually equal to `year`, in file order
    pub fn teams_established_in<'a>(&'a self, year: &'a str) -> impl Iterator<Item = &'a str> {
        self.records
            .iter()
            .filter(move |record| record.year_established == year)
            .map(|record| record.team_name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Team Name, City, League, Year, Sport
Boston Bruins, Boston, NHL, 1924, hockey
Boston Red Sox, Boston, MLB, 1901, baseball
Chicago Cubs, Chicago, MLB, 1876, baseball
";

    #[test]
    fn test_parse_discards_header_and_trims() {
        let dataset = TeamDataset::parse(SAMPLE).unwrap();
        assert_eq!(dataset.len(), 3);

        let first = &dataset.records()[0];
        assert_eq!(first.team_name, "Boston Bruins");
        assert_eq!(first.city, "Boston");
        assert_eq!(first.league, "NHL");
        assert_eq!(first.year_established, "1924");
        assert_eq!(first.sport, "hockey");
    }

    #[test]
    fn test_parse_tolerates_crlf_and_blank_lines() {
        let text = "header\r\nA, B, C, 1999, soccer\r\n\r\n  \nD, E, F, 2000, hockey\r\n";
        let dataset = TeamDataset::parse(text).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records()[1].sport, "hockey");
    }

    #[test]
    fn test_parse_rejects_wrong_field_count() {
        let text = "header\nA, B, C, 1999, soccer\nD, E, F, 2000\n";
        let err = TeamDataset::parse(text).unwrap_err();
        assert_eq!(err, DomainError::DataFormat { line: 3, fields: 4 });

        let text = "header\nA, B, C, 1999, soccer, extra\n";
        let err = TeamDataset::parse(text).unwrap_err();
        assert_eq!(err, DomainError::DataFormat { line: 2, fields: 6 });
    }

    #[test]
    fn test_header_only_is_empty() {
        assert!(TeamDataset::parse("header\n").unwrap().is_empty());
        assert!(TeamDataset::parse("").unwrap().is_empty());
    }

    #[test]
    fn test_teams_established_in_is_textual() {
        let dataset = TeamDataset::parse(SAMPLE).unwrap();
        let teams: Vec<_> = dataset.teams_established_in("1901").collect();
        assert_eq!(teams, vec!["Boston Red Sox"]);
        assert_eq!(dataset.teams_established_in("1901.0").count(), 0);
        assert_eq!(dataset.teams_established_in("01901").count(), 0);
    }

    #[test]
    fn test_find_by_name() {
        let dataset = TeamDataset::parse(SAMPLE).unwrap();
        let found: Vec<_> = dataset.find_by_name("Boston Bruins").collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].league, "NHL");
        assert_eq!(dataset.find_by_name("Nowhere Nobodies").count(), 0);
    }

    #[test]
    fn test_any_named_requires_exact_case() {
        let dataset = TeamDataset::parse(SAMPLE).unwrap();
        assert!(dataset.any_named("Boston Bruins", TeamRecord::is_nhl));
        assert!(!dataset.any_named("boston bruins", TeamRecord::is_nhl));
        assert!(!dataset.any_named("Boston Red Sox", TeamRecord::is_nhl));
    }
}
