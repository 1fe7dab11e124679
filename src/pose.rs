use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A planar map pose. Orientations produced by this crate always rotate
/// about the vertical axis only (`x = y = 0`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub orientation: Quat,
}

impl Pose {
    pub fn new(position: Vec3, orientation: Quat) -> Self {
        Self { position, orientation }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self { position: Vec3::ZERO, orientation: Quat::IDENTITY }
    }
}

/// A named waypoint as the external persistence service stores it. The flat
/// field layout matches the service request of the station backend, so
/// records pass through the persistence glue unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationRecord {
    pub id: String,
    pub name: String,
    pub position_x: f32,
    pub position_y: f32,
    pub position_z: f32,
    pub orientation_x: f32,
    pub orientation_y: f32,
    pub orientation_z: f32,
    pub orientation_w: f32,
}

impl StationRecord {
    /// Build a record for a freshly placed station. The id is minted here so
    /// the caller can persist and later reconcile against the same identity.
    pub fn from_pose(name: &str, pose: &Pose) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            position_x: pose.position.x,
            position_y: pose.position.y,
            position_z: pose.position.z,
            orientation_x: pose.orientation.x,
            orientation_y: pose.orientation.y,
            orientation_z: pose.orientation.z,
            orientation_w: pose.orientation.w,
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::new(self.position_x, self.position_y, self.position_z)
    }

    pub fn orientation(&self) -> Quat {
        Quat::from_xyzw(self.orientation_x, self.orientation_y, self.orientation_z, self.orientation_w)
    }

    pub fn pose(&self) -> Pose {
        Pose::new(self.position(), self.orientation())
    }
}

/// One batched sample from the externally throttled pose feed. `names[i]`
/// labels `poses[i]`; the robot of interest may or may not be present.
#[derive(Debug, Clone, Default)]
pub struct PoseFeedSample {
    pub names: Vec<String>,
    pub poses: Vec<Pose>,
}

impl PoseFeedSample {
    pub fn pose_of(&self, name: &str) -> Option<&Pose> {
        let index = self.names.iter().position(|n| n == name)?;
        self.poses.get(index)
    }
}
