use std::cell::RefCell;
use std::rc::Rc;

use approx::assert_relative_eq;
use gantt_rs::core::{TimeGrad, compute_grads};
use gantt_rs::plan::CyclePlan;
use gantt_rs::{GanttError, TimeMapConfig, TimeMapEngine};

#[derive(Default)]
struct Recorder {
    scales: Rc<RefCell<Vec<f64>>>,
    grads: Rc<RefCell<Vec<Vec<TimeGrad>>>>,
}

impl Recorder {
    fn attach(engine: &mut TimeMapEngine) -> Self {
        let recorder = Self::default();
        let scales = recorder.scales.clone();
        engine.scale_changes(move |scale| scales.borrow_mut().push(scale.scale()));
        let grads = recorder.grads.clone();
        engine.grad_changes(move |list| grads.borrow_mut().push(list.to_vec()));
        recorder
    }

    fn counts(&self) -> (usize, usize) {
        (self.scales.borrow().len(), self.grads.borrow().len())
    }
}

#[test]
fn new_engine_uses_placeholder_mapping() {
    let engine = TimeMapEngine::new();

    assert_relative_eq!(engine.current_scale().scale(), 800.0 / 60.0);
    assert_eq!(engine.width(), 800);
    assert_eq!(engine.duration(), 60.0);
    assert!(engine.current_grads().is_empty());
    assert!(!engine.is_width_initialized());
    assert!(engine.plan().is_none());
}

#[test]
fn subscribers_receive_current_values_on_subscribe() {
    let mut engine = TimeMapEngine::new();
    let recorder = Recorder::attach(&mut engine);

    assert_eq!(*recorder.scales.borrow(), vec![800.0 / 60.0]);
    assert_eq!(*recorder.grads.borrow(), vec![Vec::<TimeGrad>::new()]);
}

#[test]
fn short_plan_keeps_minimum_duration_and_scale() {
    let mut engine = TimeMapEngine::new();
    let recorder = Recorder::attach(&mut engine);

    engine
        .apply_plan(CyclePlan::new("short", 30.0))
        .expect("apply plan");

    assert_eq!(engine.duration(), 60.0);
    assert_relative_eq!(engine.current_scale().scale(), 800.0 / 60.0);
    assert_eq!(engine.plan().map(|plan| plan.cycle_time), Some(30.0));
    // Same scale: nothing republished.
    assert_eq!(recorder.counts(), (1, 1));
}

#[test]
fn first_width_change_initializes_and_repeat_is_noop() {
    let mut engine = TimeMapEngine::new();
    let recorder = Recorder::attach(&mut engine);

    engine.set_canvas_width(1000).expect("set width");
    assert!(engine.is_width_initialized());
    assert_eq!(engine.width(), 1000);
    assert_relative_eq!(engine.current_scale().scale(), 1000.0 / 60.0);
    // One grad list at the old scale, then scale and grads from initialization.
    assert_eq!(recorder.counts(), (2, 3));
    assert_eq!(
        engine.current_grads(),
        compute_grads(engine.current_scale(), 1000)
            .expect("finite grads")
            .as_slice()
    );

    engine.set_canvas_width(1000).expect("same width");
    assert_eq!(recorder.counts(), (2, 3));
}

#[test]
fn later_width_changes_keep_scale() {
    let mut engine = TimeMapEngine::new();
    engine.set_canvas_width(1000).expect("first width");
    let scale = engine.current_scale();
    let recorder = Recorder::attach(&mut engine);

    engine.set_canvas_width(500).expect("second width");

    assert_eq!(engine.current_scale(), scale);
    assert_eq!(recorder.counts(), (1, 2));
    assert_eq!(
        engine.current_grads(),
        compute_grads(scale, 500).expect("finite grads").as_slice()
    );
}

#[test]
fn placeholder_width_does_not_trigger_initialization() {
    let mut engine = TimeMapEngine::new();
    let recorder = Recorder::attach(&mut engine);

    engine.set_canvas_width(800).expect("placeholder width");

    assert!(!engine.is_width_initialized());
    assert_eq!(recorder.counts(), (1, 1));
}

#[test]
fn long_plan_rescales_with_ten_unit_grads() {
    let mut engine = TimeMapEngine::new();

    engine
        .apply_plan(CyclePlan::new("long", 120.0))
        .expect("apply plan");

    assert_eq!(engine.duration(), 120.0);
    assert_relative_eq!(engine.current_scale().scale(), 800.0 / 120.0);
    let grads = engine.current_grads();
    assert_eq!(grads.len(), 13);
    assert_eq!(grads[1].time - grads[0].time, 10.0);
}

#[test]
fn plan_applied_before_width_is_used_by_initialization() {
    let mut engine = TimeMapEngine::new();
    engine
        .apply_plan(CyclePlan::new("long", 120.0))
        .expect("apply plan");

    engine.set_canvas_width(1200).expect("first width");

    assert_relative_eq!(engine.current_scale().scale(), 1200.0 / 120.0);
    assert_eq!(engine.duration(), 120.0);
}

#[test]
fn zoom_publishes_exactly_one_scale_and_grad_list() {
    let mut engine = TimeMapEngine::new();
    engine
        .apply_plan(CyclePlan::new("long", 120.0))
        .expect("apply plan");
    let recorder = Recorder::attach(&mut engine);

    engine.zoom(2.0).expect("zoom in");

    assert_relative_eq!(
        engine.current_scale().scale(),
        800.0 / 60.0,
        epsilon = 1e-12
    );
    assert_eq!(recorder.counts(), (2, 2));
    let grads = recorder.grads.borrow();
    let latest = grads.last().expect("latest grads");
    assert_eq!(latest[1].time, 5.0);
    assert_eq!(latest.as_slice(), engine.current_grads());
}

#[test]
fn zoom_by_one_is_a_noop() {
    let mut engine = TimeMapEngine::new();
    let recorder = Recorder::attach(&mut engine);

    engine.zoom(1.0).expect("identity zoom");

    assert_eq!(recorder.counts(), (1, 1));
}

#[test]
fn invalid_zoom_factor_keeps_state() {
    let mut engine = TimeMapEngine::new();
    let recorder = Recorder::attach(&mut engine);
    let before = engine.current_scale();

    for factor in [0.0, -2.0, f64::NAN, f64::INFINITY] {
        let result = engine.zoom(factor);
        assert!(matches!(result, Err(GanttError::InvalidScale { .. })));
    }

    assert_eq!(engine.current_scale(), before);
    assert_eq!(recorder.counts(), (1, 1));
}

#[test]
fn zero_width_is_rejected() {
    let mut engine = TimeMapEngine::new();

    let result = engine.set_canvas_width(0);

    assert!(matches!(result, Err(GanttError::InvalidWidth { width: 0 })));
    assert_eq!(engine.width(), 800);
    assert!(!engine.is_width_initialized());
}

#[test]
fn unbounded_plan_is_rejected_without_side_effects() {
    let mut engine = TimeMapEngine::new();

    let result = engine.apply_plan(CyclePlan::new("broken", f64::INFINITY));

    assert!(matches!(result, Err(GanttError::InvalidDuration { .. })));
    assert!(engine.plan().is_none());
    assert_eq!(engine.duration(), 60.0);
}

#[test]
fn unsubscribed_callbacks_stop_receiving_updates() {
    let mut engine = TimeMapEngine::new();
    let seen = Rc::new(RefCell::new(0usize));
    let sink = seen.clone();
    let id = engine.scale_changes(move |_| *sink.borrow_mut() += 1);

    assert!(engine.unsubscribe_scale(id));
    engine.zoom(2.0).expect("zoom in");

    assert_eq!(*seen.borrow(), 1);
    assert_eq!(engine.subscriber_counts(), (0, 0));
}

#[test]
fn custom_config_drives_placeholders() {
    let config = TimeMapConfig::default()
        .with_initial_width(1200)
        .with_min_duration(30.0);
    let mut engine = TimeMapEngine::with_config(config).expect("valid config");

    assert_relative_eq!(engine.current_scale().scale(), 40.0);

    engine
        .apply_plan(CyclePlan::new("short", 10.0))
        .expect("apply plan");
    assert_eq!(engine.duration(), 30.0);
}

#[test]
fn invalid_config_is_rejected() {
    let zero_width = TimeMapConfig::default().with_initial_width(0);
    assert!(matches!(
        TimeMapEngine::with_config(zero_width),
        Err(GanttError::InvalidWidth { .. })
    ));

    let negative_duration = TimeMapConfig::default().with_min_duration(-5.0);
    assert!(matches!(
        TimeMapEngine::with_config(negative_duration),
        Err(GanttError::InvalidDuration { .. })
    ));
}
