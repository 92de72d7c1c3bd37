//! Domain error types.
//!
//! These errors represent rule violations while maintaining a line's chain
//! of sections. All of them are deterministic given the same chain state;
//! none is transient.

use super::{Distance, StationId};

/// Errors from section construction and chain maintenance.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SectionError {
    /// A section would start and end at the same station
    #[error("section cannot start and end at station {0}")]
    SameStations(StationId),

    /// A new sub-section is not strictly shorter than the section it splits
    #[error("section distance {candidate} must be shorter than the existing {existing}")]
    SectionDistanceOverrun {
        existing: Distance,
        candidate: Distance,
    },

    /// Both stations of the new section are already on the line
    #[error("stations {0} and {1} are both already on the line")]
    AlreadyRegistered(StationId, StationId),

    /// Neither station of the new section is on the line
    #[error("neither station {0} nor {1} is on the line")]
    NotConnected(StationId, StationId),

    /// The candidate spans exactly the same endpoints as the section it would split
    #[error("section {0} -> {1} already exists")]
    DuplicateSection(StationId, StationId),

    /// The candidate shares no endpoint with the section it would split
    #[error("section {0} -> {1} does not overlap the section being split")]
    NotOverlapping(StationId, StationId),

    /// Merging two sections that do not meet at a station
    #[error("sections do not meet: {0} is not {1}")]
    NotAdjacent(StationId, StationId),

    /// Merging two sections would overflow the distance type
    #[error("merged distance of {0} and {1} is too large")]
    DistanceOverflow(Distance, Distance),

    /// The station does not appear on the line
    #[error("station {0} is not on the line")]
    StationNotOnLine(StationId),

    /// Removing a station would leave the line with no sections
    #[error("cannot remove a station from a line with only one section")]
    LastSection,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = SectionError::SameStations(StationId(1));
        assert_eq!(err.to_string(), "section cannot start and end at station 1");

        let err = SectionError::SectionDistanceOverrun {
            existing: Distance::new(10).unwrap(),
            candidate: Distance::new(12).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "section distance 12 must be shorter than the existing 10"
        );

        let err = SectionError::AlreadyRegistered(StationId(1), StationId(2));
        assert_eq!(err.to_string(), "stations 1 and 2 are both already on the line");

        let err = SectionError::NotConnected(StationId(5), StationId(6));
        assert_eq!(err.to_string(), "neither station 5 nor 6 is on the line");

        let err = SectionError::DistanceOverflow(
            Distance::new(3_000_000_000).unwrap(),
            Distance::new(2_000_000_000).unwrap(),
        );
        assert_eq!(
            err.to_string(),
            "merged distance of 3000000000 and 2000000000 is too large"
        );

        let err = SectionError::StationNotOnLine(StationId(9));
        assert_eq!(err.to_string(), "station 9 is not on the line");

        let err = SectionError::LastSection;
        assert_eq!(
            err.to_string(),
            "cannot remove a station from a line with only one section"
        );
    }
}
