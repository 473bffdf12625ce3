//! Bounded 2D grid map and cell storage for Kestrel missions.
//!
//! A [`GridMap`] owns one [`Cell`] per coordinate of a fixed
//! `width x height` area, stored densely in row-major order. It answers
//! bounds queries, resolves coordinates to cells, and enumerates the
//! 8-connected neighbourhood in a fixed, behaviourally significant order.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod cell;
mod error;
mod map;

pub use cell::{AttrValue, Cell, CellAttr};
pub use error::GridError;
pub use map::GridMap;
