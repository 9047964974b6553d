mod common;

use std::rc::Rc;
use std::thread;

use approx::assert_abs_diff_eq;
use common::{block_model, REST_DEPTH, REST_X};
use tether_scene::config::SceneConfig;
use tether_scene::error::SceneError;
use tether_scene::frame::{FrameInput, ManualClock, RecordingSink};
use tether_scene::interaction::{Ndc, PointerInput, Viewport};
use tether_scene::math::Vector3;
use tether_scene::motion::SmoothingRate;
use tether_scene::scene::{AssetInbox, TransformHandle};
use tether_scene::{FrameScheduler, ObjectId};

const FRAME: f64 = 1.0 / 60.0;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn scheduler(config: SceneConfig) -> (FrameScheduler, Rc<ManualClock>) {
    init_logger();
    let clock = Rc::new(ManualClock::new(0.0));
    let scheduler = FrameScheduler::new(config, Box::new(Rc::clone(&clock))).expect("valid config");
    (scheduler, clock)
}

fn loaded_scheduler() -> (FrameScheduler, Rc<ManualClock>) {
    let (mut scheduler, clock) = scheduler(SceneConfig::default());
    scheduler.load_model(&block_model()).expect("block model binds");
    (scheduler, clock)
}

/// Advances the clock one frame and ticks with whatever the pointer gathered
fn frame(
    scheduler: &mut FrameScheduler,
    clock: &ManualClock,
    pointer: &mut PointerInput,
    sink: &mut RecordingSink,
) -> tether_scene::frame::FrameReport {
    clock.advance(FRAME);
    let input = FrameInput {
        pointer: pointer.take(),
        ..FrameInput::default()
    };
    scheduler.tick(&input, sink)
}

#[test]
fn test_invalid_config_is_rejected() {
    let mut config = SceneConfig::default();
    config.simulation.time_step = 0.0;
    let clock = Box::new(ManualClock::new(0.0));
    assert!(matches!(
        FrameScheduler::new(config, clock),
        Err(SceneError::InvalidParameter(_))
    ));
}

#[test]
fn test_press_before_load_does_nothing() {
    let (mut scheduler, clock) = scheduler(SceneConfig::default());
    let mut sink = RecordingSink::default();
    let mut pointer = PointerInput::new();

    pointer.pointer_down(640.0, 360.0);
    let report = frame(&mut scheduler, &clock, &mut pointer, &mut sink);

    assert_eq!(report.active_drag, None);
    assert_eq!(report.objects, 0);
    assert!(scheduler.pick(Ndc::new(0.0, 0.0)).is_empty());
    assert!(sink.transforms.is_empty());
    assert_eq!(sink.renders, 1);
}

#[test]
fn test_models_delivered_from_another_thread_are_bound_on_next_tick() {
    let (mut scheduler, clock) = scheduler(SceneConfig::default());
    let (sender, inbox) = AssetInbox::channel();
    scheduler.attach_inbox(inbox);

    let mut sink = RecordingSink::default();
    let mut pointer = PointerInput::new();
    frame(&mut scheduler, &clock, &mut pointer, &mut sink);
    assert!(!scheduler.objects().is_loaded());

    let loader = thread::spawn(move || sender.deliver(block_model()));
    assert!(loader.join().expect("loader thread"));

    let report = frame(&mut scheduler, &clock, &mut pointer, &mut sink);
    assert_eq!(report.objects, 5);
    assert!(scheduler.objects().is_loaded());
    assert_eq!(scheduler.world().body_count(), 10);
}

#[test]
fn test_sink_receives_every_transform_and_camera_depth() {
    let (mut scheduler, clock) = loaded_scheduler();
    let mut sink = RecordingSink::default();

    clock.advance(FRAME);
    let input = FrameInput {
        scroll_progress: 0.5,
        ..FrameInput::default()
    };
    let report = scheduler.tick(&input, &mut sink);

    assert_eq!(report.camera_z, -5.0);
    assert_eq!(sink.camera_z, -5.0);
    assert_eq!(sink.companion_z, -5.0);
    assert_eq!(sink.renders, 1);
    assert_eq!(sink.transforms.len(), 5);

    for (i, x) in REST_X.iter().enumerate() {
        let (position, _) = sink.transforms[&TransformHandle(100 + i as u64)];
        assert_abs_diff_eq!(position, Vector3::new(*x, 0.0, REST_DEPTH), epsilon = 1e-6);
    }
}

#[test]
fn test_long_frames_are_clamped() {
    let (mut scheduler, clock) = loaded_scheduler();
    let mut sink = RecordingSink::default();
    let input = FrameInput::default();

    // The first tick has nothing to measure against
    let first = scheduler.tick(&input, &mut sink);
    assert_eq!(first.delta, 0.0);

    clock.advance(5.0);
    let hitch = scheduler.tick(&input, &mut sink);
    assert_eq!(hitch.delta, scheduler.config().simulation.max_step);

    clock.advance(0.02);
    let normal = scheduler.tick(&input, &mut sink);
    assert!((normal.delta - 0.02).abs() < 1e-6);
}

#[test]
fn test_drag_follows_pointer_and_settles_after_release() {
    let (mut scheduler, clock) = loaded_scheduler();
    let mut sink = RecordingSink::default();
    let mut pointer = PointerInput::new();
    let viewport = Viewport::default();
    let rest = Vector3::new(REST_X[2], 0.0, REST_DEPTH);

    pointer.pointer_down(viewport.width / 2.0, viewport.height / 2.0);
    let report = frame(&mut scheduler, &clock, &mut pointer, &mut sink);
    assert_eq!(report.active_drag, Some(ObjectId(2)));
    assert_eq!(report.smoothing_rate, SmoothingRate::Fast);

    pointer.pointer_move(800.0, 200.0);
    for _ in 0..90 {
        frame(&mut scheduler, &clock, &mut pointer, &mut sink);
    }

    let goal = scheduler
        .camera()
        .project_to_depth(
            Ndc::new(800.0 / viewport.width * 2.0 - 1.0, 1.0 - 200.0 / viewport.height * 2.0),
            scheduler.config().interaction.drag_plane_depth,
        )
        .expect("drag plane in front of camera");
    let motion = *scheduler.objects().motion(ObjectId(2)).unwrap();
    assert_abs_diff_eq!(motion.current.x, goal.x, epsilon = 1e-3);
    assert_abs_diff_eq!(motion.current.y, goal.y, epsilon = 1e-3);

    // The body is held where the object is drawn
    let body = scheduler.objects().get(ObjectId(2)).unwrap().object.body;
    assert_eq!(scheduler.world().body_position(body).unwrap(), motion.current.position());

    // Untouched objects have not moved
    let (neighbor, _) = sink.transforms[&TransformHandle(101)];
    assert_abs_diff_eq!(neighbor, Vector3::new(REST_X[1], 0.0, REST_DEPTH), epsilon = 1e-6);

    pointer.pointer_up();
    let released = frame(&mut scheduler, &clock, &mut pointer, &mut sink);
    assert_eq!(released.active_drag, None);
    assert_eq!(released.smoothing_rate, SmoothingRate::Fast);

    let mut settled = released;
    for _ in 0..900 {
        settled = frame(&mut scheduler, &clock, &mut pointer, &mut sink);
    }
    assert_eq!(settled.smoothing_rate, SmoothingRate::Slow);

    let (position, _) = sink.transforms[&TransformHandle(102)];
    assert_abs_diff_eq!(position, rest, epsilon = 1e-2);
    assert_abs_diff_eq!(scheduler.world().body_position(body).unwrap(), rest, epsilon = 1e-3);
}

#[test]
fn test_press_on_empty_space_starts_nothing() {
    let (mut scheduler, clock) = loaded_scheduler();
    let mut sink = RecordingSink::default();
    let mut pointer = PointerInput::new();

    // Top-left corner is well clear of every object
    pointer.pointer_down(5.0, 5.0);
    let report = frame(&mut scheduler, &clock, &mut pointer, &mut sink);

    assert_eq!(report.active_drag, None);
    assert_eq!(report.smoothing_rate, SmoothingRate::Slow);
}

#[test]
fn test_rotation_reaches_sink() {
    let (mut scheduler, clock) = loaded_scheduler();
    let mut sink = RecordingSink::default();
    let mut pointer = PointerInput::new();

    for _ in 0..30 {
        frame(&mut scheduler, &clock, &mut pointer, &mut sink);
    }

    let amplitude = scheduler.config().oscillator.amplitude;
    for i in 0..5u64 {
        let (_, rotation) = sink.transforms[&TransformHandle(100 + i)];
        assert!(rotation > 0.0 && rotation <= amplitude);
    }
}

#[test]
fn test_release_then_press_between_frames_keeps_dragging() {
    let (mut scheduler, clock) = loaded_scheduler();
    let mut sink = RecordingSink::default();
    let mut pointer = PointerInput::new();
    let viewport = Viewport::default();
    let (center_x, center_y) = (viewport.width / 2.0, viewport.height / 2.0);

    pointer.pointer_down(center_x, center_y);
    let first = frame(&mut scheduler, &clock, &mut pointer, &mut sink);
    assert_eq!(first.active_drag, Some(ObjectId(2)));

    // Pointer lifted and pressed again before the next frame; it is still held
    pointer.pointer_up();
    pointer.pointer_down(center_x, center_y);
    let second = frame(&mut scheduler, &clock, &mut pointer, &mut sink);
    assert_eq!(second.active_drag, Some(ObjectId(2)));
    assert_eq!(second.smoothing_rate, SmoothingRate::Fast);
    assert_eq!(scheduler.drag().unlock_at(), None);

    // Press, release, press, release: the pointer ends up lifted
    pointer.pointer_up();
    pointer.pointer_down(center_x, center_y);
    pointer.pointer_up();
    let third = frame(&mut scheduler, &clock, &mut pointer, &mut sink);
    assert_eq!(third.active_drag, None);
}

#[test]
fn test_press_and_release_in_one_frame_ends_idle() {
    let (mut scheduler, clock) = loaded_scheduler();
    let mut sink = RecordingSink::default();
    let mut pointer = PointerInput::new();
    let viewport = Viewport::default();

    pointer.pointer_down(viewport.width / 2.0, viewport.height / 2.0);
    pointer.pointer_up();
    let report = frame(&mut scheduler, &clock, &mut pointer, &mut sink);

    assert_eq!(report.active_drag, None);
    // The short drag still arms the cooldown
    assert_eq!(report.smoothing_rate, SmoothingRate::Fast);
    assert!(scheduler.drag().unlock_at().is_some());
}
