use crate::config::NavConfig;
use crate::pose::StationRecord;
use crate::scene::{MapTransform, NodeId, NodeKind, SceneGraph, SceneNode};
use glam::Vec2;

/// A station currently rendered on the map: the canonical record plus the
/// marker and label nodes owned on its behalf. The node handles never
/// outlive the entry.
#[derive(Debug)]
pub struct TrackedStation {
    pub record: StationRecord,
    pub marker: NodeId,
    pub label: NodeId,
}

/// Locally rendered station set, reconciled against the externally owned
/// canonical list. A linear scan is fine at the tens-of-stations scale this
/// overlay is built for.
#[derive(Debug, Default)]
pub struct StationLayer {
    tracked: Vec<TrackedStation>,
}

impl StationLayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tracked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracked.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrackedStation> {
        self.tracked.iter()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.tracked.iter().any(|t| t.record.id == id)
    }

    /// Make the rendered set match `canonical`. Removals run before
    /// additions so a recycled id never holds two markers at once.
    pub fn sync(
        &mut self,
        canonical: &[StationRecord],
        scene: &mut SceneGraph,
        transform: &MapTransform,
        robot_marker: NodeId,
        config: &NavConfig,
    ) {
        self.tracked.retain(|t| {
            if canonical.iter().any(|s| s.id == t.record.id) {
                true
            } else {
                scene.remove_child(t.marker);
                scene.remove_child(t.label);
                false
            }
        });

        for record in canonical {
            if self.contains(&record.id) {
                continue;
            }
            let position = Vec2::new(record.position_x, -record.position_y);

            let mut marker = SceneNode::marker(NodeKind::StationArrow, &config.markers.station);
            marker.position = position;
            marker.rotation = transform.quaternion_to_screen_angle(record.orientation());
            marker.visible = true;
            let index = below_anchor(scene, robot_marker);
            let marker_id = scene.add_child_at(marker, index);

            let mut label = SceneNode::label(record.name.clone());
            label.position = Vec2::new(position.x, position.y - config.label_offset);
            let index = below_anchor(scene, robot_marker);
            let label_id = scene.add_child_at(label, index);

            self.tracked.push(TrackedStation { record: record.clone(), marker: marker_id, label: label_id });
        }
    }

    /// Ids of every station whose marker lies within the per-axis tolerance
    /// of `point` (scene coordinates). Near-coincident stations all match.
    pub fn hits(&self, point: Vec2, tolerance: f32, scene: &SceneGraph) -> Vec<String> {
        self.tracked
            .iter()
            .filter(|t| {
                scene.get(t.marker).is_some_and(|node| {
                    (point.x - node.position.x).abs() < tolerance
                        && (point.y - node.position.y).abs() < tolerance
                })
            })
            .map(|t| t.record.id.clone())
            .collect()
    }
}

fn below_anchor(scene: &SceneGraph, anchor: NodeId) -> usize {
    scene.child_index(anchor).unwrap_or(scene.len())
}
