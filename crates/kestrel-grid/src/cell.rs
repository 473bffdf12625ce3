//! Grid cells and their attribute bag.

use indexmap::IndexMap;
use kestrel_core::Coord;

/// Closed set of attribute keys a cell may carry.
///
/// A closed enum rather than free-form strings: attribute typos become
/// compile errors and the full key set is visible in one place. Extend
/// the enum when a new per-cell annotation is needed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellAttr {
    /// The cell has been visited by an agent.
    Visited,
    /// The cell is impassable terrain.
    Blocked,
    /// Free-purpose numeric marker (heatmap value, debug paint).
    Mark,
}

/// A typed attribute value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AttrValue {
    /// Boolean flag.
    Flag(bool),
    /// Integer value.
    Int(i64),
    /// Real value.
    Real(f64),
}

/// One cell of a [`GridMap`](crate::GridMap).
///
/// A cell is its coordinate plus an optional attribute bag. Cells are
/// owned exclusively by the map that created them; identity is the
/// coordinate within that map. The bag iterates in insertion order,
/// keeping any attribute dump deterministic.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    coord: Coord,
    attributes: IndexMap<CellAttr, AttrValue>,
}

impl Cell {
    /// Create a cell at `coord` with an empty attribute bag.
    pub(crate) fn new(coord: Coord) -> Self {
        Self {
            coord,
            attributes: IndexMap::new(),
        }
    }

    /// The cell's coordinate.
    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// Horizontal component of the coordinate.
    pub fn x(&self) -> i32 {
        self.coord.x
    }

    /// Vertical component of the coordinate.
    pub fn y(&self) -> i32 {
        self.coord.y
    }

    /// Set (or overwrite) an attribute.
    pub fn set_attribute(&mut self, key: CellAttr, value: AttrValue) {
        self.attributes.insert(key, value);
    }

    /// Look up an attribute, `None` if absent.
    pub fn attribute(&self, key: CellAttr) -> Option<AttrValue> {
        self.attributes.get(&key).copied()
    }

    /// `true` if the attribute is present.
    pub fn has_attribute(&self, key: CellAttr) -> bool {
        self.attributes.contains_key(&key)
    }

    /// Euclidean distance between this cell's coordinate and another's.
    pub fn distance_to(&self, other: &Cell) -> f64 {
        self.coord.distance_to(other.coord)
    }
}
