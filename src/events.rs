use crate::pose::{Pose, StationRecord};
use std::fmt;

/// Outcome of an interpreted gesture, drained by the embedding page after
/// each delivered event.
#[derive(Debug, Clone, PartialEq)]
pub enum NavEvent {
    /// A drag in `SetGoal` mode completed; the goal was dispatched.
    GoalSet { pose: Pose },
    /// A drag in `AddStation` mode completed; the record carries a fresh id
    /// and awaits persistence plus a later `sync_stations` round trip.
    StationAdded { record: StationRecord },
    /// A neutral-mode click landed on a tracked station.
    StationClicked { id: String },
}

impl fmt::Display for NavEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavEvent::GoalSet { pose } => {
                write!(f, "GoalSet x={:.3} y={:.3}", pose.position.x, pose.position.y)
            }
            NavEvent::StationAdded { record } => {
                write!(f, "StationAdded id={} name={}", record.id, record.name)
            }
            NavEvent::StationClicked { id } => write!(f, "StationClicked id={id}"),
        }
    }
}

#[derive(Default)]
pub struct EventQueue {
    events: Vec<NavEvent>,
}

impl EventQueue {
    pub fn push(&mut self, event: NavEvent) {
        self.events.push(event);
    }

    pub fn drain(&mut self) -> Vec<NavEvent> {
        self.events.drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
