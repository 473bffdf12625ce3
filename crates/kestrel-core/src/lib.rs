//! Core value types for the Kestrel mission simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the two value types shared by every other Kestrel crate: grid
//! coordinates and time-indexed coordinate signals.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod coord;
mod signal;

pub use coord::Coord;
pub use signal::Signal;
