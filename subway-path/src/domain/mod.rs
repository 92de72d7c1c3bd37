//! Domain types for the subway network.
//!
//! Stations, lines and the chain of sections that makes up each line.
//! All types enforce their invariants at construction time, so code that
//! receives these types can trust their validity.

mod distance;
mod error;
mod line;
mod section;
mod sections;
mod station;

pub use distance::{Distance, InvalidDistance};
pub use error::SectionError;
pub use line::{Line, LineId};
pub use section::{Section, SectionId};
pub use sections::Sections;
pub use station::{Station, StationId};
