use crate::config::NavConfig;
use crate::pose::PoseFeedSample;
use crate::scene::{MapTransform, NodeId, NodeKind, SceneGraph, SceneNode};
use glam::Vec2;

/// Keeps the robot marker in step with the throttled pose feed. The marker
/// stays hidden until the first sample naming the configured model arrives.
#[derive(Debug)]
pub struct RobotTracker {
    marker: NodeId,
    model_name: String,
}

impl RobotTracker {
    pub fn spawn(scene: &mut SceneGraph, config: &NavConfig) -> Self {
        let marker = scene.add_child(SceneNode::marker(NodeKind::RobotMarker, &config.markers.robot));
        Self { marker, model_name: config.robot_model.clone() }
    }

    pub fn marker(&self) -> NodeId {
        self.marker
    }

    pub fn apply_sample(&self, sample: &PoseFeedSample, scene: &mut SceneGraph, transform: &MapTransform) {
        let Some(pose) = sample.pose_of(&self.model_name) else {
            return;
        };
        if let Some(node) = scene.get_mut(self.marker) {
            node.position = Vec2::new(pose.position.x, -pose.position.y);
            node.rotation = transform.quaternion_to_screen_angle(pose.orientation);
            node.visible = true;
        }
    }
}
