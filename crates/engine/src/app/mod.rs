mod input;
mod loop_runner;
mod metrics;
mod rendering;
mod scene;
mod tools;

pub use input::InputAction;
pub use loop_runner::{
    run_app, run_app_with_metrics, AppError, LoopConfig, REVEAL_INTERVAL_ENV_VAR,
    SLOW_FRAME_ENV_VAR,
};
pub use metrics::{LoopMetricsSnapshot, MetricsHandle};
pub use rendering::Renderer;
pub use scene::{
    Entity, EntityId, EntityIdAllocator, InputSnapshot, RenderableDesc, RenderableKind, Scene,
    SceneWorld, Vec2,
};
