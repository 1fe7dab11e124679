pub mod config;
pub mod events;
pub(crate) mod gesture;
pub mod goal;
pub mod heading;
pub mod input;
pub mod navigator;
pub mod pose;
pub mod robot;
pub mod scene;
pub mod stations;

pub use config::{MarkerConfig, MarkerStyle, NavConfig};
pub use events::NavEvent;
pub use goal::ActionDispatch;
pub use input::{PointerEvent, PointerTracker};
pub use navigator::{CommandMode, GesturePhase, Navigator};
pub use pose::{Pose, PoseFeedSample, StationRecord};
pub use scene::{MapTransform, NodeId, NodeKind, SceneGraph, SceneNode};
