mod effect;
mod engine;
mod line;

pub use effect::{Effect, EffectContext, EffectFn};
pub use engine::{
    ConfirmOutcome, DialogueBody, DialogueConfig, DialogueEngine, DialogueRenderModel,
    DialogueSnapshot, OptionView, SelectionDirection, DEFAULT_REVEAL_INTERVAL,
};
pub use line::{DialogueError, DialogueLine, DialogueOption, Script};
