//! Subway line aggregate.

use std::fmt;

use super::{Distance, SectionError, SectionId, Sections, Station};

/// Unique identifier of a line.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineId(pub u64);

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.0)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named line owning its chain of sections.
#[derive(Debug, Clone)]
pub struct Line {
    id: LineId,
    name: String,
    color: String,
    sections: Sections,
}

impl Line {
    /// Creates a line with its first section.
    pub fn new(
        id: LineId,
        name: impl Into<String>,
        color: impl Into<String>,
        up_station: Station,
        down_station: Station,
        distance: Distance,
    ) -> Result<Self, SectionError> {
        Ok(Self {
            id,
            name: name.into(),
            color: color.into(),
            sections: Sections::with_initial(id, up_station, down_station, distance)?,
        })
    }

    pub fn id(&self) -> LineId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn sections(&self) -> &Sections {
        &self.sections
    }

    /// Stations in line order.
    pub fn stations(&self) -> Vec<Station> {
        self.sections.stations()
    }

    pub fn add_section(
        &mut self,
        up_station: Station,
        down_station: Station,
        distance: Distance,
    ) -> Result<SectionId, SectionError> {
        self.sections.add_section(up_station, down_station, distance)
    }

    pub fn remove_station(&mut self, station: &Station) -> Result<(), SectionError> {
        self.sections.remove_station(station)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StationId;

    fn station(id: u64, name: &str) -> Station {
        Station::new(StationId(id), name)
    }

    #[test]
    fn new_line_has_one_section() {
        let line = Line::new(
            LineId(2),
            "이호선",
            "bg-green-600",
            station(1, "교대역"),
            station(2, "강남역"),
            Distance::new(10).unwrap(),
        )
        .unwrap();

        assert_eq!(line.id(), LineId(2));
        assert_eq!(line.name(), "이호선");
        assert_eq!(line.color(), "bg-green-600");
        assert_eq!(line.sections().len(), 1);
        assert_eq!(line.sections().get_sections()[0].line(), LineId(2));
        assert_eq!(line.stations().len(), 2);
    }

    #[test]
    fn new_line_rejects_loop() {
        let result = Line::new(
            LineId(2),
            "이호선",
            "bg-green-600",
            station(1, "교대역"),
            station(1, "교대역"),
            Distance::new(10).unwrap(),
        );
        assert!(matches!(result, Err(SectionError::SameStations(_))));
    }

    #[test]
    fn add_and_remove_delegate_to_sections() {
        let mut line = Line::new(
            LineId(3),
            "삼호선",
            "bg-orange-600",
            station(1, "교대역"),
            station(3, "양재역"),
            Distance::new(10).unwrap(),
        )
        .unwrap();

        line.add_section(
            station(1, "교대역"),
            station(4, "남부터미널역"),
            Distance::new(3).unwrap(),
        )
        .unwrap();
        let names: Vec<String> = line.stations().iter().map(|s| s.name().to_string()).collect();
        assert_eq!(names, vec!["교대역", "남부터미널역", "양재역"]);

        line.remove_station(&station(4, "남부터미널역")).unwrap();
        assert_eq!(line.sections().len(), 1);
        assert_eq!(line.sections().total_distance(), 10);
    }
}
