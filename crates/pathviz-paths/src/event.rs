use pathviz_core::Coord;

/// One unit of animation output, consumed in order by a renderer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TraversalEvent {
    /// A cell was reached by the search for the first time.
    Visited(Coord),
    /// A cell of the reconstructed path, revealed after [`Done`](Self::Done).
    PathCell(Coord),
    /// The search exhausted its frontier without reaching the target. Final.
    NotFound,
    /// The search reached its target; path cells follow.
    Done,
}

impl TraversalEvent {
    /// Whether this event ends the search phase.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, TraversalEvent::NotFound | TraversalEvent::Done)
    }

    /// The cell this event paints, if any.
    #[inline]
    pub const fn coord(self) -> Option<Coord> {
        match self {
            TraversalEvent::Visited(c) | TraversalEvent::PathCell(c) => Some(c),
            TraversalEvent::NotFound | TraversalEvent::Done => None,
        }
    }
}

/// Which pacing a tick is subject to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Exploration; paced by the traversal delay.
    Search,
    /// Final path overlay; paced by the shorter path delay.
    Reveal,
}

/// The events produced by one scheduler step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tick {
    pub phase: Phase,
    pub events: Vec<TraversalEvent>,
}

impl Tick {
    /// Whether this tick carries the terminal event of the search.
    pub fn is_terminal(&self) -> bool {
        self.events.last().is_some_and(|e| e.is_terminal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_events() {
        assert!(TraversalEvent::Done.is_terminal());
        assert!(TraversalEvent::NotFound.is_terminal());
        assert!(!TraversalEvent::Visited(Coord::ZERO).is_terminal());
        assert_eq!(TraversalEvent::PathCell(Coord::new(1, 2)).coord(), Some(Coord::new(1, 2)));
        assert_eq!(TraversalEvent::Done.coord(), None);
    }

    #[test]
    fn tick_is_terminal_when_last_event_is() {
        let tick = Tick {
            phase: Phase::Search,
            events: vec![TraversalEvent::Visited(Coord::ZERO), TraversalEvent::Done],
        };
        assert!(tick.is_terminal());
        let empty = Tick {
            phase: Phase::Search,
            events: Vec::new(),
        };
        assert!(!empty.is_terminal());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use crate::traversal::Algorithm;

    #[test]
    fn events_serialize_by_name() {
        let json = serde_json::to_string(&TraversalEvent::Visited(Coord::new(1, 2))).unwrap();
        let back: TraversalEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TraversalEvent::Visited(Coord::new(1, 2)));
        assert_eq!(serde_json::to_string(&TraversalEvent::Done).unwrap(), "\"Done\"");
    }

    #[test]
    fn algorithm_names() {
        assert_eq!(serde_json::to_string(&Algorithm::Bidirectional).unwrap(), "\"bibfs\"");
        assert_eq!(serde_json::to_string(&Algorithm::AStar).unwrap(), "\"astar\"");
        let alg: Algorithm = serde_json::from_str("\"dfs\"").unwrap();
        assert_eq!(alg, Algorithm::Dfs);
    }
}
