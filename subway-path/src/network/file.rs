//! On-disk description of a network.
//!
//! ```json
//! {
//!   "stations": [{ "id": 1, "name": "교대역" }, { "id": 2, "name": "강남역" }],
//!   "lines": [{
//!     "id": 2,
//!     "name": "이호선",
//!     "color": "bg-green-600",
//!     "sections": [{ "up": 1, "down": 2, "distance": 10 }],
//!     "removals": []
//!   }]
//! }
//! ```
//!
//! A line's first section creates it; the rest are inserted in order, then
//! the listed stations are removed in order.

use serde::Deserialize;

use crate::domain::{Distance, LineId, Station, StationId};

#[derive(Debug, Deserialize)]
pub struct NetworkFile {
    pub stations: Vec<Station>,
    #[serde(default)]
    pub lines: Vec<LineFile>,
}

#[derive(Debug, Deserialize)]
pub struct LineFile {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub color: String,
    pub sections: Vec<SectionFile>,
    #[serde(default)]
    pub removals: Vec<StationId>,
}

impl LineFile {
    pub fn line_id(&self) -> LineId {
        LineId(self.id)
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SectionFile {
    pub up: StationId,
    pub down: StationId,
    pub distance: Distance,
}
