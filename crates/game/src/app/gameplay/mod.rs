use engine::dialogue::DialogueSnapshot;
use engine::{
    Condition, DialogueLine, DialogueOption, Effect, EffectContext, FlagKey, InputAction,
    InputSnapshot, Interactable, InteractionRegistry, NarrativeFlags, Rect, RenderableDesc,
    RenderableKind, Scene, SceneWorld, Script, SelectionDirection, Vec2,
};
use serde::Serialize;
use tracing::{debug, info, warn};

const PLAYER_SPEED_PX_PER_SECOND: f32 = 200.0;
const PLAYER_SPRITE_KEY: &str = "player";

include!("content.rs");
include!("scene_impl.rs");

pub(crate) fn build_scene() -> Box<dyn Scene> {
    Box::new(GameplayScene::new())
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
