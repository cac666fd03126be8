//! Plain-text readers and writers for slab coordinates, ring lists, bond
//! tables, per-ring bridge output and ring statistics.
//!
//! | Format | Read | Write |
//! |--------|------|-------|
//! | XYZ coordinates | [`read_xyz`] | — |
//! | Ring list | [`read_rings`] | — |
//! | Connectivity (`.con`) | [`read_connectivity`] | [`write_connectivity`] |
//! | Ring bridges | — | [`write_bridges`] |
//! | Ring-size histogram | — | [`write_ring_histogram`] |
//! | Ring-area histogram | — | [`write_area_histogram`] |
//!
//! Every reader consumes its whole input before returning; a malformed record
//! or a count header that disagrees with the records read is an [`Error`].

use std::fmt;

pub mod error;

mod bridges {
    pub mod writer;
}
mod con {
    pub mod reader;
    pub mod writer;
}
mod rings {
    pub mod reader;
}
mod stats {
    pub mod writer;
}
mod xyz {
    pub mod reader;
}

pub use error::Error;

pub use bridges::writer::write as write_bridges;
pub use con::reader::read as read_connectivity;
pub use con::writer::write as write_connectivity;
pub use rings::reader::read as read_rings;
pub use stats::writer::{write_area_histogram, write_ring_histogram};
pub use xyz::reader::read as read_xyz;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Xyz,
    RingList,
    Connectivity,
    Bridges,
}

impl Format {
    /// Conventional file extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Xyz => "xyz",
            Format::RingList => "dat",
            Format::Connectivity => "con",
            Format::Bridges => "bridges",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Xyz => write!(f, "XYZ"),
            Format::RingList => write!(f, "ring list"),
            Format::Connectivity => write!(f, "connectivity"),
            Format::Bridges => write!(f, "bridge list"),
        }
    }
}
