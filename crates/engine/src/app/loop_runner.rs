use std::collections::HashSet;
use std::env;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use pixels::Error as PixelsError;
use thiserror::Error;
use tracing::{info, warn};
use winit::dpi::LogicalSize;
use winit::error::{EventLoopError, OsError};
use winit::event::{ElementState, Event, KeyEvent, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowBuilder};

use crate::dialogue::DialogueConfig;
use crate::{resolve_app_paths, StartupError};

use super::input::ActionStates;
use super::metrics::MetricsAccumulator;
use super::tools::OverlayData;
use super::{InputAction, InputSnapshot, MetricsHandle, Renderer, Scene, SceneWorld};

pub const SLOW_FRAME_ENV_VAR: &str = "TOPDOWN_SLOW_FRAME_MS";
pub const REVEAL_INTERVAL_ENV_VAR: &str = "TOPDOWN_REVEAL_MS";

const DEFAULT_MAX_FRAME_DELTA: Duration = Duration::from_millis(250);
const DEFAULT_METRICS_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone)]
pub struct LoopConfig {
    pub window_title: String,
    /// Canvas size in world pixels. The window starts at this logical size
    /// and the canvas is scaled to whatever the surface becomes.
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Upper bound on the dt handed to `Scene::update` after a stall.
    pub max_frame_delta: Duration,
    pub metrics_log_interval: Duration,
    pub simulated_slow_frame_ms: u64,
    pub max_render_fps: Option<u32>,
    pub dialogue: DialogueConfig,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            window_title: "Top-Down".to_string(),
            canvas_width: 640,
            canvas_height: 480,
            max_frame_delta: DEFAULT_MAX_FRAME_DELTA,
            metrics_log_interval: DEFAULT_METRICS_INTERVAL,
            simulated_slow_frame_ms: 0,
            max_render_fps: None,
            dialogue: DialogueConfig::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Startup(#[from] StartupError),
    #[error("could not create the event loop: {0}")]
    CreateEventLoop(#[source] EventLoopError),
    #[error("could not open the game window: {0}")]
    CreateWindow(#[source] OsError),
    #[error("could not set up the pixel renderer: {0}")]
    CreateRenderer(#[source] PixelsError),
    #[error("event loop terminated with an error: {0}")]
    EventLoopRun(#[source] EventLoopError),
}

pub fn run_app(config: LoopConfig, scene: Box<dyn Scene>) -> Result<(), AppError> {
    run_app_with_metrics(config, scene, MetricsHandle::default())
}

pub fn run_app_with_metrics(
    config: LoopConfig,
    mut scene: Box<dyn Scene>,
    metrics_handle: MetricsHandle,
) -> Result<(), AppError> {
    let app_paths = resolve_app_paths()?;
    info!(
        root = %app_paths.root.display(),
        sprite_dir = %app_paths.sprite_dir.display(),
        "startup"
    );

    let event_loop = EventLoop::new().map_err(AppError::CreateEventLoop)?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(config.window_title.as_str())
            .with_inner_size(LogicalSize::new(
                f64::from(config.canvas_width),
                f64::from(config.canvas_height),
            ))
            .build(&event_loop)
            .map_err(AppError::CreateWindow)?,
    );
    let renderer = Renderer::new(
        Arc::clone(&window),
        config.canvas_width,
        config.canvas_height,
        app_paths.sprite_dir,
    )
    .map_err(AppError::CreateRenderer)?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let settings = LoopSettings::resolve(&config);
    settings.log();

    let mut world = SceneWorld::new(settings.dialogue.clone());
    scene.load(&mut world);
    info!(entity_count = world.entity_count(), "scene_ready");

    let mut frame_loop = FrameLoop {
        metrics: MetricsAccumulator::new(settings.metrics_interval),
        clock: FrameClock::new(Instant::now()),
        fallback_title: config.window_title,
        settings,
        window,
        renderer,
        scene,
        world,
        metrics_handle,
        input: InputCollector::default(),
        overlay_visible: false,
        applied_title: None,
    };

    event_loop
        .run(move |event, window_target| match event {
            Event::WindowEvent { window_id, event } if window_id == frame_loop.window.id() => {
                frame_loop.handle_window_event(event, window_target);
            }
            Event::AboutToWait => frame_loop.window.request_redraw(),
            Event::LoopExiting => {
                frame_loop.scene.unload(&mut frame_loop.world);
                info!("shutdown");
            }
            _ => {}
        })
        .map_err(AppError::EventLoopRun)
}

/// Config after defaults for zero values and env overrides are applied.
#[derive(Debug, Clone)]
struct LoopSettings {
    max_frame_delta: Duration,
    metrics_interval: Duration,
    slow_frame_delay: Duration,
    render_fps_cap: Option<u32>,
    dialogue: DialogueConfig,
}

impl LoopSettings {
    fn resolve(config: &LoopConfig) -> Self {
        Self::resolve_with(config, |name| env::var(name))
    }

    fn resolve_with(
        config: &LoopConfig,
        read_env: impl Fn(&'static str) -> Result<String, env::VarError>,
    ) -> Self {
        let slow_frame_delay = millis_override(
            SLOW_FRAME_ENV_VAR,
            read_env(SLOW_FRAME_ENV_VAR),
            Duration::from_millis(config.simulated_slow_frame_ms),
        );
        let reveal_interval = millis_override(
            REVEAL_INTERVAL_ENV_VAR,
            read_env(REVEAL_INTERVAL_ENV_VAR),
            config.dialogue.reveal_interval,
        );
        Self {
            max_frame_delta: non_zero_or(config.max_frame_delta, DEFAULT_MAX_FRAME_DELTA),
            metrics_interval: non_zero_or(config.metrics_log_interval, DEFAULT_METRICS_INTERVAL),
            slow_frame_delay,
            render_fps_cap: config.max_render_fps.filter(|fps| *fps > 0),
            dialogue: DialogueConfig {
                reveal_interval,
                ..config.dialogue.clone()
            },
        }
    }

    fn frame_target(&self) -> Option<Duration> {
        self.render_fps_cap
            .map(|fps| Duration::from_secs_f64(1.0 / f64::from(fps)))
    }

    fn log(&self) {
        info!(
            max_frame_delta_ms = self.max_frame_delta.as_millis() as u64,
            metrics_interval_ms = self.metrics_interval.as_millis() as u64,
            slow_frame_delay_ms = self.slow_frame_delay.as_millis() as u64,
            reveal_interval_ms = self.dialogue.reveal_interval.as_millis() as u64,
            render_fps_cap = ?self.render_fps_cap,
            "loop_config"
        );
    }
}

fn non_zero_or(value: Duration, fallback: Duration) -> Duration {
    if value.is_zero() {
        fallback
    } else {
        value
    }
}

/// Applies a millisecond env override. Unset keeps `fallback`; anything
/// unreadable or non-numeric warns and keeps `fallback`.
fn millis_override(
    env_var: &'static str,
    raw: Result<String, env::VarError>,
    fallback: Duration,
) -> Duration {
    match raw {
        Ok(value) => match value.trim().parse::<u64>() {
            Ok(millis) => Duration::from_millis(millis),
            Err(_) => {
                warn!(env_var, value = value.as_str(), "env_override_invalid_using_config");
                fallback
            }
        },
        Err(env::VarError::NotPresent) => fallback,
        Err(error) => {
            warn!(env_var, error = %error, "env_override_unreadable_using_config");
            fallback
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct FrameTiming {
    /// Unclamped wall time since the previous frame, for metrics.
    raw_dt: Duration,
    /// Clamped dt handed to the scene.
    dt: Duration,
    /// Monotonic time since the loop started, handed to the dialogue tick.
    since_start: Duration,
}

#[derive(Debug)]
struct FrameClock {
    started_at: Instant,
    last_frame: Instant,
    last_present: Instant,
}

impl FrameClock {
    fn new(now: Instant) -> Self {
        Self {
            started_at: now,
            last_frame: now,
            last_present: now,
        }
    }

    fn begin_frame(&mut self, now: Instant, max_frame_delta: Duration) -> FrameTiming {
        let raw_dt = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;
        FrameTiming {
            raw_dt,
            dt: raw_dt.min(max_frame_delta),
            since_start: now.saturating_duration_since(self.started_at),
        }
    }

    /// Time left before the next present is allowed under the FPS cap.
    fn cap_remaining(&self, now: Instant, frame_target: Option<Duration>) -> Duration {
        let since_present = now.saturating_duration_since(self.last_present);
        frame_target
            .map(|target| target.saturating_sub(since_present))
            .unwrap_or(Duration::ZERO)
    }

    fn mark_presented(&mut self, now: Instant) {
        self.last_present = now;
    }
}

struct FrameLoop {
    settings: LoopSettings,
    window: Arc<Window>,
    renderer: Renderer,
    scene: Box<dyn Scene>,
    world: SceneWorld,
    metrics: MetricsAccumulator,
    metrics_handle: MetricsHandle,
    clock: FrameClock,
    input: InputCollector,
    overlay_visible: bool,
    fallback_title: String,
    applied_title: Option<String>,
}

impl FrameLoop {
    fn handle_window_event(&mut self, event: WindowEvent, target: &EventLoopWindowTarget<()>) {
        match event {
            WindowEvent::CloseRequested => {
                self.input.quit_requested = true;
                info!(reason = "window_close", "shutdown_requested");
                target.exit();
            }
            WindowEvent::Resized(size) => self.resize(size.width, size.height, target),
            WindowEvent::ScaleFactorChanged { .. } => {
                let size = self.window.inner_size();
                self.resize(size.width, size.height, target);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                self.input.handle_key_event(&event);
                if self.input.quit_requested {
                    info!(reason = "escape_key", "shutdown_requested");
                    target.exit();
                }
            }
            WindowEvent::RedrawRequested => {
                if let Err(error) = self.redraw() {
                    warn!(error = %error, "renderer_draw_failed");
                    target.exit();
                }
            }
            _ => {}
        }
    }

    fn resize(&mut self, width: u32, height: u32, target: &EventLoopWindowTarget<()>) {
        if let Err(error) = self.renderer.resize_surface(width, height) {
            warn!(error = %error, width, height, "renderer_resize_failed");
            target.exit();
        }
    }

    /// One frame: scene update, dialogue tick, then draw.
    fn redraw(&mut self) -> Result<(), PixelsError> {
        if self.input.overlay_toggle.take() {
            self.overlay_visible = !self.overlay_visible;
            info!(overlay_visible = self.overlay_visible, "overlay_toggled");
        }
        if !self.settings.slow_frame_delay.is_zero() {
            // Debug perturbation; unrelated to the FPS cap.
            thread::sleep(self.settings.slow_frame_delay);
        }

        let now = Instant::now();
        let timing = self.clock.begin_frame(now, self.settings.max_frame_delta);
        let input = self.input.snapshot_for_frame();
        self.scene
            .update(timing.dt.as_secs_f32(), &input, &mut self.world);
        self.world.state_mut().dialogue.tick(timing.since_start);

        let cap_sleep = self
            .clock
            .cap_remaining(Instant::now(), self.settings.frame_target());
        if !cap_sleep.is_zero() {
            thread::sleep(cap_sleep);
        }

        let overlay = self.overlay_visible.then(|| self.overlay_data());
        self.renderer.render_world(&self.world, overlay.as_ref())?;
        self.clock.mark_presented(Instant::now());

        self.refresh_title();
        self.record_metrics(now, timing.raw_dt);
        Ok(())
    }

    fn overlay_data(&self) -> OverlayData {
        let state = self.world.state();
        OverlayData {
            metrics: self.metrics_handle.snapshot(),
            render_fps_cap: self.settings.render_fps_cap,
            slow_frame_delay_ms: self.settings.slow_frame_delay.as_millis() as u64,
            entity_count: self.world.entity_count(),
            player_position: self.world.player().map(|player| player.bounds.position()),
            dialogue: state.dialogue.snapshot(),
            flags: state.flags.iter().map(|flag| flag.0).collect(),
        }
    }

    fn refresh_title(&mut self) {
        let title = self.scene.debug_title(&self.world);
        if title != self.applied_title {
            self.window
                .set_title(title.as_deref().unwrap_or(&self.fallback_title));
            self.applied_title = title;
        }
    }

    fn record_metrics(&mut self, now: Instant, raw_dt: Duration) {
        let in_dialogue = self.world.state().in_dialogue();
        self.metrics.record_frame(raw_dt, in_dialogue);
        let Some(snapshot) = self.metrics.maybe_snapshot(now) else {
            return;
        };
        self.metrics_handle.publish(snapshot);
        info!(
            fps = snapshot.fps,
            frame_time_ms = snapshot.frame_time_ms,
            worst_frame_ms = snapshot.worst_frame_ms,
            dialogue_share = snapshot.dialogue_share,
            entity_count = self.world.entity_count(),
            "loop_metrics"
        );
    }
}

/// Held key with a pressed edge that is consumed by `take`.
#[derive(Debug, Default, Clone, Copy)]
struct EdgeLatch {
    down: bool,
    edge: bool,
}

impl EdgeLatch {
    fn set(&mut self, down: bool) {
        if down && !self.down {
            self.edge = true;
        }
        self.down = down;
    }

    fn take(&mut self) -> bool {
        std::mem::take(&mut self.edge)
    }
}

/// Actions raised by a physical key. ArrowUp/ArrowDown also navigate
/// question options; movement is ignored while a dialogue is open.
fn actions_for_key(code: KeyCode) -> &'static [InputAction] {
    use InputAction::*;
    match code {
        KeyCode::ArrowUp => &[MoveUp, SelectPrevious],
        KeyCode::ArrowDown => &[MoveDown, SelectNext],
        KeyCode::KeyW => &[MoveUp],
        KeyCode::KeyS => &[MoveDown],
        KeyCode::KeyA | KeyCode::ArrowLeft => &[MoveLeft],
        KeyCode::KeyD | KeyCode::ArrowRight => &[MoveRight],
        KeyCode::KeyZ => &[Interact],
        KeyCode::Enter | KeyCode::NumpadEnter | KeyCode::Space => &[Advance],
        KeyCode::F2 => &[DumpState],
        KeyCode::Escape => &[Quit],
        _ => &[],
    }
}

/// Held keys are tracked per physical key. An action is down while any of
/// its keys is held, and gets a pressed edge whenever one of its keys goes
/// from up to down.
#[derive(Debug, Default)]
struct InputCollector {
    quit_requested: bool,
    overlay_toggle: EdgeLatch,
    held_keys: HashSet<KeyCode>,
    actions: ActionStates,
}

impl InputCollector {
    fn handle_key_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(code) = event.physical_key {
            self.apply_key(code, event.state == ElementState::Pressed);
        }
    }

    fn apply_key(&mut self, code: KeyCode, is_down: bool) {
        if code == KeyCode::F3 {
            self.overlay_toggle.set(is_down);
            return;
        }
        let newly_pressed = if is_down {
            self.held_keys.insert(code)
        } else {
            self.held_keys.remove(&code);
            false
        };
        for action in actions_for_key(code) {
            if newly_pressed {
                self.actions.set_pressed(*action, true);
            }
            let held = self.any_key_held_for(*action);
            self.actions.set_held(*action, held);
        }
        if is_down && code == KeyCode::Escape {
            self.quit_requested = true;
        }
    }

    fn any_key_held_for(&self, action: InputAction) -> bool {
        self.held_keys
            .iter()
            .any(|key| actions_for_key(*key).contains(&action))
    }

    /// Pressed edges are handed out once and then cleared.
    fn snapshot_for_frame(&mut self) -> InputSnapshot {
        let snapshot = InputSnapshot::new(self.quit_requested, self.actions);
        self.actions.clear_pressed();
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tap(input: &mut InputCollector, code: KeyCode) -> InputSnapshot {
        input.apply_key(code, true);
        let snapshot = input.snapshot_for_frame();
        input.apply_key(code, false);
        snapshot
    }

    #[test]
    fn frame_clock_clamps_scene_dt_but_not_raw_dt() {
        let start = Instant::now();
        let mut clock = FrameClock::new(start);
        let timing = clock.begin_frame(start + Duration::from_millis(600), DEFAULT_MAX_FRAME_DELTA);
        assert_eq!(timing.raw_dt, Duration::from_millis(600));
        assert_eq!(timing.dt, DEFAULT_MAX_FRAME_DELTA);
        assert_eq!(timing.since_start, Duration::from_millis(600));

        let next = clock.begin_frame(start + Duration::from_millis(616), DEFAULT_MAX_FRAME_DELTA);
        assert_eq!(next.dt, Duration::from_millis(16));
        assert_eq!(next.since_start, Duration::from_millis(616));
    }

    #[test]
    fn cap_remaining_fills_the_rest_of_the_frame() {
        let start = Instant::now();
        let clock = FrameClock::new(start);
        let target = Some(Duration::from_millis(16));
        assert_eq!(
            clock.cap_remaining(start + Duration::from_millis(10), target),
            Duration::from_millis(6)
        );
        assert_eq!(
            clock.cap_remaining(start + Duration::from_millis(20), target),
            Duration::ZERO
        );
        assert_eq!(clock.cap_remaining(start, None), Duration::ZERO);
    }

    #[test]
    fn interact_press_is_edge_triggered_for_single_frame() {
        let mut input = InputCollector::default();
        input.apply_key(KeyCode::KeyZ, true);

        let first = input.snapshot_for_frame();
        let second = input.snapshot_for_frame();

        assert!(first.pressed(InputAction::Interact));
        assert!(!second.pressed(InputAction::Interact));
        assert!(second.is_down(InputAction::Interact));
    }

    #[test]
    fn key_repeat_does_not_refire_advance() {
        let mut input = InputCollector::default();
        input.apply_key(KeyCode::Enter, true);
        let first = input.snapshot_for_frame();

        // OS key repeat delivers more presses without a release.
        input.apply_key(KeyCode::Enter, true);
        let repeated = input.snapshot_for_frame();

        input.apply_key(KeyCode::Enter, false);
        input.apply_key(KeyCode::Enter, true);
        let pressed_again = input.snapshot_for_frame();

        assert!(first.pressed(InputAction::Advance));
        assert!(!repeated.pressed(InputAction::Advance));
        assert!(pressed_again.pressed(InputAction::Advance));
    }

    #[test]
    fn releasing_one_key_keeps_action_held_by_another() {
        let mut input = InputCollector::default();
        input.apply_key(KeyCode::KeyW, true);
        input.apply_key(KeyCode::ArrowUp, true);
        input.apply_key(KeyCode::ArrowUp, false);

        let snapshot = input.snapshot_for_frame();
        assert!(snapshot.is_down(InputAction::MoveUp));
        assert!(!snapshot.is_down(InputAction::SelectPrevious));

        input.apply_key(KeyCode::KeyW, false);
        assert!(!input.snapshot_for_frame().is_down(InputAction::MoveUp));
    }

    #[test]
    fn second_key_for_held_action_still_raises_edge() {
        let mut input = InputCollector::default();
        input.apply_key(KeyCode::Space, true);
        assert!(input.snapshot_for_frame().pressed(InputAction::Advance));
        assert!(!input.snapshot_for_frame().pressed(InputAction::Advance));

        input.apply_key(KeyCode::Enter, true);
        let snapshot = input.snapshot_for_frame();
        assert!(snapshot.pressed(InputAction::Advance));
        assert!(snapshot.is_down(InputAction::Advance));
    }

    #[test]
    fn press_and_release_between_frames_keeps_edge() {
        let mut input = InputCollector::default();
        input.apply_key(KeyCode::KeyZ, true);
        input.apply_key(KeyCode::KeyZ, false);

        let snapshot = input.snapshot_for_frame();
        assert!(snapshot.pressed(InputAction::Interact));
        assert!(!snapshot.is_down(InputAction::Interact));
    }

    #[test]
    fn enter_space_and_numpad_enter_all_advance() {
        let mut input = InputCollector::default();
        for code in [KeyCode::Enter, KeyCode::Space, KeyCode::NumpadEnter] {
            assert!(tap(&mut input, code).pressed(InputAction::Advance), "{code:?}");
        }
    }

    #[test]
    fn arrows_drive_movement_and_selection_together() {
        let mut input = InputCollector::default();
        let snapshot = tap(&mut input, KeyCode::ArrowDown);
        assert!(snapshot.is_down(InputAction::MoveDown));
        assert!(snapshot.pressed(InputAction::SelectNext));
        assert!(!snapshot.pressed(InputAction::SelectPrevious));
    }

    #[test]
    fn wasd_moves_without_touching_selection() {
        let mut input = InputCollector::default();
        input.apply_key(KeyCode::KeyW, true);
        input.apply_key(KeyCode::ArrowLeft, true);

        let snapshot = input.snapshot_for_frame();
        assert!(snapshot.is_down(InputAction::MoveUp));
        assert!(snapshot.is_down(InputAction::MoveLeft));
        assert!(!snapshot.pressed(InputAction::SelectPrevious));
    }

    #[test]
    fn release_clears_held_state() {
        let mut input = InputCollector::default();
        input.apply_key(KeyCode::KeyD, true);
        input.apply_key(KeyCode::KeyD, false);
        assert!(!input.snapshot_for_frame().is_down(InputAction::MoveRight));
    }

    #[test]
    fn escape_requests_quit() {
        let mut input = InputCollector::default();
        input.apply_key(KeyCode::Escape, true);
        assert!(input.quit_requested);
        assert!(input.snapshot_for_frame().quit_requested());
    }

    #[test]
    fn f3_toggle_fires_once_per_press() {
        let mut input = InputCollector::default();
        input.apply_key(KeyCode::F3, true);
        assert!(input.overlay_toggle.take());

        input.apply_key(KeyCode::F3, true);
        assert!(!input.overlay_toggle.take());

        input.apply_key(KeyCode::F3, false);
        input.apply_key(KeyCode::F3, true);
        assert!(input.overlay_toggle.take());
        assert!(!input.snapshot_for_frame().pressed(InputAction::DumpState));
    }

    #[test]
    fn settings_replace_zero_durations_and_zero_fps_cap() {
        let config = LoopConfig {
            max_frame_delta: Duration::ZERO,
            metrics_log_interval: Duration::ZERO,
            max_render_fps: Some(0),
            ..LoopConfig::default()
        };
        let settings = LoopSettings::resolve_with(&config, |_| Err(env::VarError::NotPresent));
        assert_eq!(settings.max_frame_delta, DEFAULT_MAX_FRAME_DELTA);
        assert_eq!(settings.metrics_interval, DEFAULT_METRICS_INTERVAL);
        assert_eq!(settings.render_fps_cap, None);
        assert_eq!(settings.frame_target(), None);
    }

    #[test]
    fn settings_apply_env_overrides() {
        let settings = LoopSettings::resolve_with(&LoopConfig::default(), |name| match name {
            SLOW_FRAME_ENV_VAR => Ok("12".to_string()),
            REVEAL_INTERVAL_ENV_VAR => Ok(" 45 ".to_string()),
            _ => Err(env::VarError::NotPresent),
        });
        assert_eq!(settings.slow_frame_delay, Duration::from_millis(12));
        assert_eq!(settings.dialogue.reveal_interval, Duration::from_millis(45));
        assert_eq!(settings.dialogue.frame, DialogueConfig::default().frame);
    }

    #[test]
    fn invalid_env_override_falls_back_to_config() {
        let config = LoopConfig {
            simulated_slow_frame_ms: 3,
            ..LoopConfig::default()
        };
        let settings = LoopSettings::resolve_with(&config, |_| Ok("fast".to_string()));
        assert_eq!(settings.slow_frame_delay, Duration::from_millis(3));
        assert_eq!(
            settings.dialogue.reveal_interval,
            crate::dialogue::DEFAULT_REVEAL_INTERVAL
        );
    }

    #[test]
    fn fps_cap_gives_frame_target() {
        let settings = LoopSettings::resolve_with(
            &LoopConfig {
                max_render_fps: Some(50),
                ..LoopConfig::default()
            },
            |_| Err(env::VarError::NotPresent),
        );
        assert_eq!(settings.frame_target(), Some(Duration::from_millis(20)));
    }
}
