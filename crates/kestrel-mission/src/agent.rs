//! Mobile agents and their map-backed position.

use kestrel_core::Coord;
use kestrel_grid::{GridError, GridMap};

/// A named mobile entity occupying one cell of a [`GridMap`].
///
/// The agent stores the flat index of its current cell rather than a
/// copy of the coordinate, so its position is always read back through
/// the owning map and there is no duplicate state to drift. Commits
/// are crate-private: only the mission executor moves agents, once per
/// tick, after the planning decision is finalized.
#[derive(Clone, Debug)]
pub struct Agent {
    id: String,
    cell: usize,
}

impl Agent {
    /// Place an agent on `map` at `start`.
    ///
    /// Fails with [`GridError::OutOfBounds`] if `start` is outside the
    /// map.
    pub fn new(id: impl Into<String>, map: &GridMap, start: Coord) -> Result<Self, GridError> {
        let cell = map.index_of(start)?;
        Ok(Self {
            id: id.into(),
            cell,
        })
    }

    /// The agent's identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Flat index of the agent's current cell.
    pub fn cell_index(&self) -> usize {
        self.cell
    }

    /// The agent's current coordinate, read back through the map.
    pub fn position(&self, map: &GridMap) -> Coord {
        map.coord_at(self.cell)
    }

    /// Move the agent to `to`. Executor-only.
    pub(crate) fn commit(&mut self, map: &GridMap, to: Coord) -> Result<(), GridError> {
        self.cell = map.index_of(to)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_places_agent_at_start() {
        let map = GridMap::new(20, 20).unwrap();
        let agent = Agent::new("pursuer", &map, Coord::new(1, 10)).unwrap();
        assert_eq!(agent.id(), "pursuer");
        assert_eq!(agent.position(&map), Coord::new(1, 10));
        assert_eq!(agent.cell_index(), 10 * 20 + 1);
    }

    #[test]
    fn new_out_of_bounds_fails() {
        let map = GridMap::new(5, 5).unwrap();
        assert!(matches!(
            Agent::new("x", &map, Coord::new(5, 0)),
            Err(GridError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn commit_moves_the_agent() {
        let map = GridMap::new(5, 5).unwrap();
        let mut agent = Agent::new("e", &map, Coord::new(2, 2)).unwrap();
        agent.commit(&map, Coord::new(3, 3)).unwrap();
        assert_eq!(agent.position(&map), Coord::new(3, 3));
    }

    #[test]
    fn commit_out_of_bounds_leaves_position_unchanged() {
        let map = GridMap::new(5, 5).unwrap();
        let mut agent = Agent::new("e", &map, Coord::new(2, 2)).unwrap();
        assert!(agent.commit(&map, Coord::new(-1, 0)).is_err());
        assert_eq!(agent.position(&map), Coord::new(2, 2));
    }
}
