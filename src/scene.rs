use crate::config::MarkerStyle;
use glam::{Quat, Vec2};

/// Stable handle for a node in the scene graph. Ids are never reused, so a
/// handle kept across a removal simply stops resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u64);

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    RobotMarker,
    GoalArrow,
    StationArrow,
    Label { text: String },
}

/// A renderable element in map scene coordinates. The crate only stores and
/// orders these; drawing them is the renderer's job.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub kind: NodeKind,
    /// Scene coordinates: map X, map Y sign-inverted.
    pub position: Vec2,
    /// Screen rotation in degrees.
    pub rotation: f32,
    pub size: f32,
    pub alpha: f32,
    pub pulse: bool,
    pub visible: bool,
    /// Monotonic draw-order hint bumped on every drag update.
    pub z_index: u32,
}

impl SceneNode {
    pub fn marker(kind: NodeKind, style: &MarkerStyle) -> Self {
        Self {
            kind,
            position: Vec2::ZERO,
            rotation: 0.0,
            size: style.size,
            alpha: style.alpha,
            pulse: style.pulse,
            visible: false,
            z_index: 0,
        }
    }

    pub fn label(text: String) -> Self {
        Self {
            kind: NodeKind::Label { text },
            position: Vec2::ZERO,
            rotation: 0.0,
            size: 1.0,
            alpha: 1.0,
            pulse: false,
            visible: true,
            z_index: 0,
        }
    }
}

/// Ordered mutable list of scene nodes. Later indices render above earlier
/// ones, so the robot marker staying last keeps it on top.
#[derive(Debug, Default)]
pub struct SceneGraph {
    next_id: u64,
    children: Vec<(NodeId, SceneNode)>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_child(&mut self, node: SceneNode) -> NodeId {
        let id = self.mint_id();
        self.children.push((id, node));
        id
    }

    pub fn add_child_at(&mut self, node: SceneNode, index: usize) -> NodeId {
        let id = self.mint_id();
        let index = index.min(self.children.len());
        self.children.insert(index, (id, node));
        id
    }

    pub fn remove_child(&mut self, id: NodeId) -> Option<SceneNode> {
        let index = self.child_index(id)?;
        Some(self.children.remove(index).1)
    }

    /// Detach a child and reinsert it at `anchor`'s position, so it renders
    /// immediately below the anchor. No-op if either node is missing.
    pub fn move_child_before(&mut self, id: NodeId, anchor: NodeId) -> bool {
        if id == anchor {
            return false;
        }
        let Some(current) = self.child_index(id) else {
            return false;
        };
        let entry = self.children.remove(current);
        match self.child_index(anchor) {
            Some(index) => self.children.insert(index, entry),
            None => self.children.insert(current.min(self.children.len()), entry),
        }
        true
    }

    pub fn child_index(&self, id: NodeId) -> Option<usize> {
        self.children.iter().position(|(child, _)| *child == id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.child_index(id).is_some()
    }

    pub fn get(&self, id: NodeId) -> Option<&SceneNode> {
        self.children.iter().find(|(child, _)| *child == id).map(|(_, node)| node)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.children.iter_mut().find(|(child, _)| *child == id).map(|(_, node)| node)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &SceneNode)> {
        self.children.iter().map(|(id, node)| (*id, node))
    }

    fn mint_id(&mut self) -> NodeId {
        self.next_id += 1;
        NodeId(self.next_id)
    }
}

/// Explicit map view context: converts screen pixels to map coordinates and
/// map orientations to screen rotations. Passed at construction instead of
/// being looked up from an ambient rendering stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapTransform {
    /// Stage translation of the map origin, in screen pixels.
    pub origin: Vec2,
    /// Screen pixels per map unit on each axis.
    pub scale: Vec2,
}

impl MapTransform {
    pub fn new(origin: Vec2, scale: Vec2) -> Self {
        Self { origin, scale }
    }

    pub fn global_to_world(&self, screen: Vec2) -> Vec2 {
        Vec2::new((screen.x - self.origin.x) / self.scale.x, (self.origin.y - screen.y) / self.scale.y)
    }

    /// Screen rotation in degrees for a map orientation quaternion.
    pub fn quaternion_to_screen_angle(&self, q: Quat) -> f32 {
        let yaw = (2.0 * (q.w * q.z + q.x * q.y)).atan2(1.0 - 2.0 * (q.y * q.y + q.z * q.z));
        -yaw.to_degrees()
    }
}

impl Default for MapTransform {
    fn default() -> Self {
        Self { origin: Vec2::ZERO, scale: Vec2::ONE }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn node() -> SceneNode {
        SceneNode::marker(NodeKind::StationArrow, &MarkerStyle { size: 1.0, alpha: 0.8, pulse: true })
    }

    #[test]
    fn insertion_order_and_indices() {
        let mut scene = SceneGraph::new();
        let a = scene.add_child(node());
        let b = scene.add_child(node());
        let c = scene.add_child_at(node(), 0);
        assert_eq!(scene.child_index(c), Some(0));
        assert_eq!(scene.child_index(a), Some(1));
        assert_eq!(scene.child_index(b), Some(2));
    }

    #[test]
    fn removal_drops_the_handle() {
        let mut scene = SceneGraph::new();
        let a = scene.add_child(node());
        assert!(scene.remove_child(a).is_some());
        assert!(scene.remove_child(a).is_none());
        assert!(!scene.contains(a));
        assert!(scene.is_empty());
    }

    #[test]
    fn move_before_places_child_under_anchor() {
        let mut scene = SceneGraph::new();
        let a = scene.add_child(node());
        let robot = scene.add_child(node());
        let b = scene.add_child(node());
        assert!(scene.move_child_before(b, robot));
        assert_eq!(scene.child_index(a), Some(0));
        assert_eq!(scene.child_index(b), Some(1));
        assert_eq!(scene.child_index(robot), Some(2));
    }

    #[test]
    fn add_child_at_clamps_out_of_range_index() {
        let mut scene = SceneGraph::new();
        let a = scene.add_child_at(node(), 17);
        assert_eq!(scene.child_index(a), Some(0));
    }

    #[test]
    fn screen_to_world_inverts_y() {
        let transform = MapTransform::new(Vec2::new(10.0, 20.0), Vec2::new(2.0, 2.0));
        let world = transform.global_to_world(Vec2::new(14.0, 14.0));
        assert_eq!(world, Vec2::new(2.0, 3.0));
    }

    #[test]
    fn quarter_turn_quaternion_maps_to_minus_ninety_degrees() {
        let transform = MapTransform::default();
        let q = Quat::from_xyzw(0.0, 0.0, (FRAC_PI_2 / 2.0).sin(), (FRAC_PI_2 / 2.0).cos());
        let angle = transform.quaternion_to_screen_angle(q);
        assert!((angle + 90.0).abs() < 1e-4, "got {angle}");
    }
}
