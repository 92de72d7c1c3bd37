//! A single weighted edge of a line.

use std::fmt;

use super::{Distance, LineId, SectionError, Station};

/// Identifier of a section within its line.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SectionId(pub u64);

impl fmt::Debug for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SectionId({})", self.0)
    }
}

/// A directed edge `up_station -> down_station` of `distance` on one line.
///
/// # Invariants
///
/// - `up_station != down_station`
/// - `distance > 0` (guaranteed by [`Distance`])
/// - The line is fixed at creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    id: SectionId,
    line: LineId,
    up_station: Station,
    down_station: Station,
    distance: Distance,
}

impl Section {
    /// Creates a section, rejecting a loop back to the same station.
    pub fn new(
        id: SectionId,
        line: LineId,
        up_station: Station,
        down_station: Station,
        distance: Distance,
    ) -> Result<Self, SectionError> {
        if up_station == down_station {
            return Err(SectionError::SameStations(up_station.id()));
        }
        Ok(Self {
            id,
            line,
            up_station,
            down_station,
            distance,
        })
    }

    pub fn id(&self) -> SectionId {
        self.id
    }

    pub fn line(&self) -> LineId {
        self.line
    }

    pub fn up_station(&self) -> &Station {
        &self.up_station
    }

    pub fn down_station(&self) -> &Station {
        &self.down_station
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }

    pub fn is_equals_up_station(&self, station: &Station) -> bool {
        &self.up_station == station
    }

    pub fn is_equals_down_station(&self, station: &Station) -> bool {
        &self.down_station == station
    }

    /// Returns true if `candidate` shares this section's up station or its
    /// down station, i.e. inserting it would split this section.
    pub fn is_include_section(&self, candidate: &Section) -> bool {
        self.is_equals_up_station(&candidate.up_station)
            || self.is_equals_down_station(&candidate.down_station)
    }

    /// Shrinks this section to make room for `candidate`.
    ///
    /// If the candidate ends where this section ends, this section now ends
    /// at the candidate's up station. If the candidate starts where this
    /// section starts, this section now starts at the candidate's down
    /// station. Either way the distance drops by the candidate's distance.
    ///
    /// The caller is responsible for registering `candidate` itself.
    ///
    /// # Errors
    ///
    /// Nothing is modified when an error is returned:
    /// - `SectionDistanceOverrun` if the candidate is not strictly shorter
    /// - `DuplicateSection` if the candidate matches both endpoints
    /// - `NotOverlapping` if it matches neither
    pub fn update_station_by_add_section(
        &mut self,
        candidate: &Section,
    ) -> Result<(), SectionError> {
        let remaining = self.distance.checked_sub(candidate.distance).ok_or(
            SectionError::SectionDistanceOverrun {
                existing: self.distance,
                candidate: candidate.distance,
            },
        )?;

        let same_up = self.is_equals_up_station(&candidate.up_station);
        let same_down = self.is_equals_down_station(&candidate.down_station);

        match (same_up, same_down) {
            (true, true) => {
                return Err(SectionError::DuplicateSection(
                    candidate.up_station.id(),
                    candidate.down_station.id(),
                ));
            }
            (false, true) => self.down_station = candidate.up_station.clone(),
            (true, false) => self.up_station = candidate.down_station.clone(),
            (false, false) => {
                return Err(SectionError::NotOverlapping(
                    candidate.up_station.id(),
                    candidate.down_station.id(),
                ));
            }
        }

        self.distance = remaining;
        Ok(())
    }

    /// Joins this section with the one directly below it.
    ///
    /// The result keeps this section's id and line, runs from this section's
    /// up station to `lower`'s down station, and sums both distances.
    ///
    /// # Errors
    ///
    /// - `NotAdjacent` if `lower` does not start where this section ends
    /// - `DistanceOverflow` if the summed distance does not fit
    pub fn merge(&self, lower: &Section) -> Result<Section, SectionError> {
        if self.down_station != lower.up_station {
            return Err(SectionError::NotAdjacent(
                self.down_station.id(),
                lower.up_station.id(),
            ));
        }
        let distance = self
            .distance
            .checked_add(lower.distance)
            .ok_or(SectionError::DistanceOverflow(self.distance, lower.distance))?;
        Section::new(
            self.id,
            self.line,
            self.up_station.clone(),
            lower.down_station.clone(),
            distance,
        )
    }
}
