use glam::Vec2;
use nav2d_overlay::{
    ActionDispatch, CommandMode, MapTransform, NavConfig, Navigator, NodeKind, PointerEvent, Pose,
};

#[derive(Default)]
struct RecordingDispatch {
    sent: Vec<Pose>,
    cancels: usize,
}

impl ActionDispatch for RecordingDispatch {
    fn send_goal(&mut self, pose: &Pose) {
        self.sent.push(*pose);
    }

    fn cancel_goal(&mut self) {
        self.cancels += 1;
    }
}

fn navigator() -> Navigator {
    Navigator::new(NavConfig::default(), MapTransform::default())
}

fn goal_arrows(nav: &Navigator) -> usize {
    nav.scene().nodes().filter(|(_, node)| node.kind == NodeKind::GoalArrow).count()
}

fn drag_goal(nav: &mut Navigator, dispatch: &mut RecordingDispatch) {
    nav.set_command(CommandMode::SetGoal);
    nav.handle_pointer(PointerEvent::Down { position: Vec2::new(0.0, 0.0) }, dispatch);
    nav.handle_pointer(PointerEvent::Move { position: Vec2::new(1.0, -1.0) }, dispatch);
    nav.handle_pointer(PointerEvent::Up { position: Vec2::new(1.0, -1.0) }, dispatch);
    nav.drain_events();
}

#[test]
fn result_retires_the_goal_and_its_marker() {
    let mut nav = navigator();
    let mut dispatch = RecordingDispatch::default();
    drag_goal(&mut nav, &mut dispatch);
    assert!(nav.goal_pending());
    assert_eq!(goal_arrows(&nav), 1);

    nav.notify_goal_result();

    assert!(!nav.goal_pending());
    assert_eq!(goal_arrows(&nav), 0);
}

#[test]
fn cancel_after_result_is_a_noop() {
    let mut nav = navigator();
    let mut dispatch = RecordingDispatch::default();
    drag_goal(&mut nav, &mut dispatch);

    nav.notify_goal_result();
    nav.cancel_goal(&mut dispatch);

    assert_eq!(dispatch.cancels, 0, "resolved goal must not be cancelled");
    assert_eq!(goal_arrows(&nav), 0);
}

#[test]
fn result_after_cancel_is_a_noop() {
    let mut nav = navigator();
    let mut dispatch = RecordingDispatch::default();
    drag_goal(&mut nav, &mut dispatch);

    nav.cancel_goal(&mut dispatch);
    assert_eq!(dispatch.cancels, 1);
    assert_eq!(goal_arrows(&nav), 0);

    nav.notify_goal_result();
    assert_eq!(goal_arrows(&nav), 0);
    assert!(!nav.goal_pending());
}

#[test]
fn duplicate_results_are_harmless() {
    let mut nav = navigator();
    let mut dispatch = RecordingDispatch::default();
    drag_goal(&mut nav, &mut dispatch);

    nav.notify_goal_result();
    nav.notify_goal_result();

    assert_eq!(goal_arrows(&nav), 0);
}

#[test]
fn cancel_without_a_goal_sends_nothing() {
    let mut nav = navigator();
    let mut dispatch = RecordingDispatch::default();

    nav.cancel_goal(&mut dispatch);

    assert_eq!(dispatch.cancels, 0);
}

#[test]
fn cancel_goal_mode_sweeps_a_lingering_arrow() {
    let mut nav = navigator();
    let mut dispatch = RecordingDispatch::default();
    drag_goal(&mut nav, &mut dispatch);
    assert_eq!(goal_arrows(&nav), 1);

    nav.set_command(CommandMode::CancelGoal);
    assert_eq!(goal_arrows(&nav), 0);

    // The lifecycle's own removal tolerates the sweep having run first.
    nav.notify_goal_result();
    assert_eq!(goal_arrows(&nav), 0);
    assert!(!nav.goal_pending());
}

#[test]
fn new_drag_rearms_the_pending_goal_arrow() {
    let mut nav = navigator();
    let mut dispatch = RecordingDispatch::default();
    drag_goal(&mut nav, &mut dispatch);
    assert_eq!(goal_arrows(&nav), 1);

    // Issuing a second goal before the first resolves reuses the arrow
    // instead of orphaning it in the scene.
    drag_goal(&mut nav, &mut dispatch);
    assert_eq!(goal_arrows(&nav), 1);
    assert_eq!(dispatch.sent.len(), 2);

    nav.notify_goal_result();
    assert_eq!(goal_arrows(&nav), 0);
}
