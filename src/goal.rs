use crate::pose::Pose;
use crate::scene::{NodeId, SceneGraph};

/// Seam to the external action system. `send_goal` dispatches a navigation
/// goal; the terminal result comes back through
/// [`GoalLifecycle::notify_result`], delivered at most once by the caller.
pub trait ActionDispatch {
    fn send_goal(&mut self, pose: &Pose);
    fn cancel_goal(&mut self);
}

/// Tracks the single in-flight goal and its transient marker. A user cancel
/// and an externally delivered result may race; whichever lands first
/// retires the goal and the other becomes a no-op.
#[derive(Debug, Default)]
pub struct GoalLifecycle {
    pending: bool,
    marker: Option<NodeId>,
}

impl GoalLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn send(&mut self, pose: &Pose, marker: NodeId, dispatch: &mut dyn ActionDispatch) {
        dispatch.send_goal(pose);
        self.pending = true;
        self.marker = Some(marker);
    }

    pub fn notify_result(&mut self, scene: &mut SceneGraph) {
        if !self.pending {
            return;
        }
        self.pending = false;
        self.retire_marker(scene);
    }

    pub fn cancel(&mut self, scene: &mut SceneGraph, dispatch: &mut dyn ActionDispatch) {
        if !self.pending {
            return;
        }
        self.pending = false;
        dispatch.cancel_goal();
        self.retire_marker(scene);
    }

    fn retire_marker(&mut self, scene: &mut SceneGraph) {
        if let Some(id) = self.marker.take() {
            // The marker may already be gone if CancelGoal mode cleaned it up.
            scene.remove_child(id);
        }
    }
}
