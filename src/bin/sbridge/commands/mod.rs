mod run;

pub use run::{RingFailure, UnresolvedRings, run};
