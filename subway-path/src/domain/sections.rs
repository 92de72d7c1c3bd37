//! The chain of sections that makes up one line.

use std::collections::{HashMap, HashSet};

use tracing::{debug, trace};

use super::{Distance, LineId, Section, SectionError, SectionId, Station, StationId};

/// The ordered chain of sections belonging to one line.
///
/// # Invariants
///
/// After every operation completes, the sections linearize into exactly one
/// simple path: no branching, no cycles, no repeated station. Operations that
/// fail leave the chain exactly as it was.
///
/// # Examples
///
/// ```
/// use subway_path::domain::{Distance, LineId, Sections, Station, StationId};
///
/// let gyodae = Station::new(StationId(1), "교대역");
/// let nambu = Station::new(StationId(2), "남부터미널역");
/// let yangjae = Station::new(StationId(3), "양재역");
///
/// let mut sections = Sections::new(LineId(3));
/// sections.add_section(gyodae.clone(), yangjae.clone(), Distance::new(10).unwrap()).unwrap();
/// sections.add_section(gyodae.clone(), nambu.clone(), Distance::new(3).unwrap()).unwrap();
///
/// assert_eq!(sections.stations(), vec![gyodae, nambu, yangjae]);
/// assert_eq!(sections.total_distance(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct Sections {
    line: LineId,
    sections: Vec<Section>,
    next_id: u64,
}

impl Sections {
    /// Creates an empty chain for `line`.
    pub fn new(line: LineId) -> Self {
        Self {
            line,
            sections: Vec::new(),
            next_id: 1,
        }
    }

    /// Creates a chain holding a single initial section.
    pub fn with_initial(
        line: LineId,
        up_station: Station,
        down_station: Station,
        distance: Distance,
    ) -> Result<Self, SectionError> {
        let mut sections = Self::new(line);
        sections.add_section(up_station, down_station, distance)?;
        Ok(sections)
    }

    pub fn line(&self) -> LineId {
        self.line
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Returns the sections of the line. Order carries no meaning.
    pub fn get_sections(&self) -> &[Section] {
        &self.sections
    }

    /// Returns every station touched by a section, each exactly once.
    pub fn get_all_stations_by_sections(&self) -> Vec<Station> {
        let mut seen = HashSet::new();
        self.sections
            .iter()
            .flat_map(|s| [s.up_station(), s.down_station()])
            .filter(|s| seen.insert(s.id()))
            .cloned()
            .collect()
    }

    pub fn contains_station(&self, station: &Station) -> bool {
        self.sections
            .iter()
            .any(|s| s.is_equals_up_station(station) || s.is_equals_down_station(station))
    }

    /// Sum of all section distances on the line.
    pub fn total_distance(&self) -> u64 {
        self.sections
            .iter()
            .map(|s| u64::from(s.distance().get()))
            .sum()
    }

    /// Returns the stations in line order, from the head of the chain.
    pub fn stations(&self) -> Vec<Station> {
        let Some(head) = self.head() else {
            return Vec::new();
        };

        let by_up: HashMap<StationId, &Section> = self
            .sections
            .iter()
            .map(|s| (s.up_station().id(), s))
            .collect();

        let mut ordered = Vec::with_capacity(self.sections.len() + 1);
        ordered.push(head.clone());
        let mut current = head.id();
        while let Some(section) = by_up.get(&current) {
            ordered.push(section.down_station().clone());
            current = section.down_station().id();
        }
        ordered
    }

    /// The first station of the chain: an up station that is nobody's down station.
    fn head(&self) -> Option<&Station> {
        let downs: HashSet<StationId> = self
            .sections
            .iter()
            .map(|s| s.down_station().id())
            .collect();
        self.sections
            .iter()
            .map(Section::up_station)
            .find(|s| !downs.contains(&s.id()))
    }

    /// Inserts a section into the chain.
    ///
    /// The first section of an empty line is accepted as is. Afterwards
    /// exactly one of the two stations must already be on the line: the new
    /// section either extends the chain at its head or tail, or is carved
    /// out of the existing section it overlaps.
    ///
    /// # Errors
    ///
    /// - `SameStations` if `up_station == down_station`
    /// - `AlreadyRegistered` if both stations are on the line
    /// - `NotConnected` if neither station is on the line
    /// - `SectionDistanceOverrun` if the split section is not longer
    pub fn add_section(
        &mut self,
        up_station: Station,
        down_station: Station,
        distance: Distance,
    ) -> Result<SectionId, SectionError> {
        let id = SectionId(self.next_id);
        let candidate = Section::new(id, self.line, up_station, down_station, distance)?;

        if !self.sections.is_empty() {
            let has_up = self.contains_station(candidate.up_station());
            let has_down = self.contains_station(candidate.down_station());

            match (has_up, has_down) {
                (true, true) => {
                    return Err(SectionError::AlreadyRegistered(
                        candidate.up_station().id(),
                        candidate.down_station().id(),
                    ));
                }
                (false, false) => {
                    return Err(SectionError::NotConnected(
                        candidate.up_station().id(),
                        candidate.down_station().id(),
                    ));
                }
                _ => {}
            }

            // No overlapping section means the candidate extends a terminal.
            if let Some(existing) = self
                .sections
                .iter_mut()
                .find(|s| s.is_include_section(&candidate))
            {
                existing.update_station_by_add_section(&candidate)?;
                trace!(split = ?existing.id(), "split existing section");
            }
        }

        debug!(
            line = ?self.line,
            up = %candidate.up_station().id(),
            down = %candidate.down_station().id(),
            distance = %candidate.distance(),
            "added section"
        );

        self.sections.push(candidate);
        self.next_id += 1;
        Ok(id)
    }

    /// Removes a station from the line.
    ///
    /// A terminal station takes its one section with it. An interior station
    /// has its two sections merged into one spanning both, keeping the upper
    /// section's id.
    ///
    /// # Errors
    ///
    /// - `LastSection` if the line has one section or fewer
    /// - `StationNotOnLine` if the station is not on the line
    /// - `DistanceOverflow` if the merged distance does not fit
    pub fn remove_station(&mut self, station: &Station) -> Result<(), SectionError> {
        if self.sections.len() <= 1 {
            return Err(SectionError::LastSection);
        }

        let upper = self
            .sections
            .iter()
            .position(|s| s.is_equals_down_station(station));
        let lower = self
            .sections
            .iter()
            .position(|s| s.is_equals_up_station(station));

        match (upper, lower) {
            (Some(u), Some(l)) => {
                let merged = self.sections[u].merge(&self.sections[l])?;
                let (first, second) = if u > l { (u, l) } else { (l, u) };
                self.sections.remove(first);
                self.sections.remove(second);
                debug!(
                    line = ?self.line,
                    station = %station.id(),
                    distance = %merged.distance(),
                    "merged sections around removed station"
                );
                self.sections.push(merged);
            }
            (Some(i), None) | (None, Some(i)) => {
                self.sections.remove(i);
                debug!(line = ?self.line, station = %station.id(), "removed terminal station");
            }
            (None, None) => return Err(SectionError::StationNotOnLine(station.id())),
        }

        Ok(())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Op {
        Add { up: u64, down: u64, distance: u32 },
        Remove(u64),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            3 => (0u64..12, 0u64..12, 1u32..30)
                .prop_map(|(up, down, distance)| Op::Add { up, down, distance }),
            1 => (0u64..12).prop_map(Op::Remove),
        ]
    }

    fn station(id: u64) -> Station {
        Station::new(StationId(id), format!("S{id}"))
    }

    /// The chain walked from its head covers every section exactly once.
    fn assert_single_chain(sections: &Sections) -> Result<(), TestCaseError> {
        let ordered = sections.stations();
        prop_assert_eq!(ordered.len(), sections.len() + 1);

        let unique: HashSet<StationId> = ordered.iter().map(Station::id).collect();
        prop_assert_eq!(unique.len(), ordered.len());

        let walked: u64 = ordered
            .windows(2)
            .map(|pair| {
                sections
                    .get_sections()
                    .iter()
                    .find(|s| s.up_station() == &pair[0] && s.down_station() == &pair[1])
                    .map(|s| u64::from(s.distance().get()))
                    .unwrap_or(0)
            })
            .sum();
        prop_assert_eq!(walked, sections.total_distance());
        Ok(())
    }

    proptest! {
        /// Any sequence of inserts and removals keeps one simple chain
        #[test]
        fn chain_invariant_holds(ops in proptest::collection::vec(op(), 1..40)) {
            let mut sections = Sections::with_initial(
                LineId(1),
                station(0),
                station(1),
                Distance::new(50).unwrap(),
            ).unwrap();

            for op in ops {
                let before_total = sections.total_distance();
                let before_len = sections.len();
                let result = match op {
                    Op::Add { up, down, distance } => sections
                        .add_section(station(up), station(down), Distance::new(distance).unwrap())
                        .map(|_| ()),
                    Op::Remove(id) => sections.remove_station(&station(id)),
                };
                if result.is_err() {
                    prop_assert_eq!(sections.total_distance(), before_total);
                    prop_assert_eq!(sections.len(), before_len);
                }
                assert_single_chain(&sections)?;
            }
        }
    }
}
