use crate::events::NavEvent;
use crate::goal::ActionDispatch;
use crate::heading;
use crate::input::PointerEvent;
use crate::navigator::{CommandMode, Navigator};
use crate::pose::{Pose, StationRecord};
use crate::scene::{NodeId, NodeKind, SceneNode};
use glam::{Vec2, Vec3};

/// Gesture in flight between pointer-down and pointer-up. The command mode
/// is snapshotted at pointer-down so a mid-drag mode switch cannot change
/// what the gesture means.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ActiveGesture {
    pub mode: CommandMode,
    /// World-coordinate anchor: the goal/station location. The pointer's
    /// later travel only determines facing.
    pub anchor: Vec2,
    pub marker: NodeId,
    pub moved: bool,
    /// Whether pointer-down created the marker node. A re-armed pending goal
    /// arrow is not ours to discard on a no-move release.
    pub created: bool,
}

impl Navigator {
    /// Feed one pointer event through the gesture machine. Stray events
    /// (move before down, up without down) fall through as no-ops.
    pub fn handle_pointer(&mut self, event: PointerEvent, dispatch: &mut dyn ActionDispatch) {
        match event {
            PointerEvent::Down { position } => self.pointer_down(position),
            PointerEvent::Move { position } => self.pointer_move(position),
            PointerEvent::Up { position } => self.pointer_up(position, dispatch),
        }
    }

    fn pointer_down(&mut self, screen: Vec2) {
        if self.gesture.is_some() {
            return;
        }
        let anchor = self.transform.global_to_world(screen);
        match self.command {
            CommandMode::SetGoal => {
                let (marker, created) = self.arm_goal_marker();
                self.gesture = Some(ActiveGesture {
                    mode: CommandMode::SetGoal,
                    anchor,
                    marker,
                    moved: false,
                    created,
                });
            }
            CommandMode::AddStation => {
                let node = SceneNode::marker(NodeKind::StationArrow, &self.config.markers.station);
                let index = self.scene.child_index(self.robot.marker()).unwrap_or(self.scene.len());
                let marker = self.scene.add_child_at(node, index);
                self.gesture = Some(ActiveGesture {
                    mode: CommandMode::AddStation,
                    anchor,
                    marker,
                    moved: false,
                    created: true,
                });
            }
            _ => {
                // Single-click station selection; no gesture starts.
                let probe = Vec2::new(anchor.x, -anchor.y);
                for id in self.stations.hits(probe, self.config.hit_tolerance, &self.scene) {
                    self.events.push(NavEvent::StationClicked { id });
                }
            }
        }
    }

    fn pointer_move(&mut self, screen: Vec2) {
        let world = self.transform.global_to_world(screen);
        let robot = self.robot.marker();
        let Some(gesture) = self.gesture.as_mut() else {
            return;
        };
        gesture.moved = true;
        self.z_counter += 1;
        let delta = world - gesture.anchor;
        self.scene.move_child_before(gesture.marker, robot);
        if let Some(node) = self.scene.get_mut(gesture.marker) {
            node.position = Vec2::new(gesture.anchor.x, -gesture.anchor.y);
            node.rotation = heading::drag_heading_degrees(delta);
            node.visible = true;
            node.z_index = self.z_counter;
        }
    }

    fn pointer_up(&mut self, screen: Vec2, dispatch: &mut dyn ActionDispatch) {
        let Some(gesture) = self.gesture.take() else {
            return;
        };
        if !gesture.moved {
            // No drag happened: discard whatever this gesture created.
            if gesture.created {
                self.scene.remove_child(gesture.marker);
                if self.goal_marker == Some(gesture.marker) {
                    self.goal_marker = None;
                }
            }
            return;
        }

        let world = self.transform.global_to_world(screen);
        let delta = world - gesture.anchor;
        let theta = heading::drag_heading_radians(delta);
        let pose = Pose::new(
            Vec3::new(gesture.anchor.x, gesture.anchor.y, 0.0),
            heading::planar_orientation(theta),
        );

        match gesture.mode {
            CommandMode::SetGoal => {
                self.goal.send(&pose, gesture.marker, dispatch);
                self.events.push(NavEvent::GoalSet { pose });
            }
            CommandMode::AddStation => {
                // The persistent replacement marker appears once the external
                // list comes back through sync_stations.
                self.scene.remove_child(gesture.marker);
                let record = StationRecord::from_pose(&self.station_name, &pose);
                self.events.push(NavEvent::StationAdded { record });
            }
            _ => {}
        }
    }
}
