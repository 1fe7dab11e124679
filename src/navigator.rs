use crate::config::NavConfig;
use crate::events::{EventQueue, NavEvent};
use crate::gesture::ActiveGesture;
use crate::goal::{ActionDispatch, GoalLifecycle};
use crate::pose::{PoseFeedSample, StationRecord};
use crate::robot::RobotTracker;
use crate::scene::{MapTransform, NodeId, NodeKind, SceneGraph, SceneNode};
use crate::stations::StationLayer;

/// The operator's current interaction intent. Buttons in the embedding page
/// pick the mode; pointer gestures are interpreted against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommandMode {
    #[default]
    None,
    SetGoal,
    AddStation,
    DeleteStation,
    CancelGoal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Idle,
    Pressed,
    Dragging,
}

/// Interactive map overlay engine: interprets pointer gestures into goals
/// and stations, mirrors the robot pose, and keeps station markers in sync
/// with the externally owned canonical list. Single-threaded; every entry
/// point runs to completion on the UI dispatch thread.
pub struct Navigator {
    pub(crate) config: NavConfig,
    pub(crate) transform: MapTransform,
    pub(crate) scene: SceneGraph,
    pub(crate) command: CommandMode,
    pub(crate) station_name: String,
    pub(crate) gesture: Option<ActiveGesture>,
    pub(crate) goal: GoalLifecycle,
    pub(crate) stations: StationLayer,
    pub(crate) robot: RobotTracker,
    /// The goal-orientation arrow currently in the scene, if any. Recreated
    /// on demand; `SetGoal` drags re-arm it rather than minting a new node.
    pub(crate) goal_marker: Option<NodeId>,
    pub(crate) z_counter: u32,
    pub(crate) events: EventQueue,
}

impl Navigator {
    pub fn new(config: NavConfig, transform: MapTransform) -> Self {
        let mut scene = SceneGraph::new();
        let robot = RobotTracker::spawn(&mut scene, &config);
        Self {
            config,
            transform,
            scene,
            command: CommandMode::None,
            station_name: "NoName".to_string(),
            gesture: None,
            goal: GoalLifecycle::new(),
            stations: StationLayer::new(),
            robot,
            goal_marker: None,
            z_counter: 0,
            events: EventQueue::default(),
        }
    }

    pub fn command(&self) -> CommandMode {
        self.command
    }

    /// Switch the interaction mode. Entering `CancelGoal` sweeps any
    /// lingering goal arrow out of the scene; the goal lifecycle's own
    /// removal stays idempotent against this. An in-flight gesture is not
    /// touched: it completes against the mode captured at pointer-down.
    pub fn set_command(&mut self, mode: CommandMode) {
        self.command = mode;
        if mode == CommandMode::CancelGoal {
            if let Some(id) = self.goal_marker.take() {
                self.scene.remove_child(id);
            }
        }
    }

    /// Name stamped onto the next station placed in `AddStation` mode.
    pub fn set_station_name(&mut self, name: impl Into<String>) {
        self.station_name = name.into();
    }

    pub fn station_name(&self) -> &str {
        &self.station_name
    }

    /// Reconcile rendered station markers against the canonical list owned
    /// by the external persistence system.
    pub fn sync_stations(&mut self, canonical: &[StationRecord]) {
        self.stations.sync(canonical, &mut self.scene, &self.transform, self.robot.marker(), &self.config);
    }

    pub fn handle_pose_sample(&mut self, sample: &PoseFeedSample) {
        self.robot.apply_sample(sample, &mut self.scene, &self.transform);
    }

    /// One-shot terminal notification for the in-flight goal. Duplicate or
    /// post-cancel delivery is a no-op.
    pub fn notify_goal_result(&mut self) {
        self.goal.notify_result(&mut self.scene);
    }

    pub fn cancel_goal(&mut self, dispatch: &mut dyn ActionDispatch) {
        self.goal.cancel(&mut self.scene, dispatch);
    }

    pub fn goal_pending(&self) -> bool {
        self.goal.is_pending()
    }

    pub fn gesture_phase(&self) -> GesturePhase {
        match &self.gesture {
            None => GesturePhase::Idle,
            Some(g) if g.moved => GesturePhase::Dragging,
            Some(_) => GesturePhase::Pressed,
        }
    }

    pub fn scene(&self) -> &SceneGraph {
        &self.scene
    }

    pub fn tracked_station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn drain_events(&mut self) -> Vec<NavEvent> {
        self.events.drain()
    }

    /// Goal arrow node to drive during a `SetGoal` drag. Re-arms the arrow
    /// already in the scene (a pending goal's marker) when one survives,
    /// otherwise creates a hidden one below the robot marker. The flag says
    /// whether this call created the node.
    pub(crate) fn arm_goal_marker(&mut self) -> (NodeId, bool) {
        if let Some(id) = self.goal_marker {
            if self.scene.contains(id) {
                return (id, false);
            }
        }
        let node = SceneNode::marker(NodeKind::GoalArrow, &self.config.markers.goal);
        let index = self.scene.child_index(self.robot.marker()).unwrap_or(self.scene.len());
        let id = self.scene.add_child_at(node, index);
        self.goal_marker = Some(id);
        (id, true)
    }
}
