use crate::dialogue::{ConfirmOutcome, DialogueConfig, DialogueEngine};

use super::flags::NarrativeFlags;

/// Everything narrative the scene owns: decision flags and the dialogue
/// playing against them. Fields are public so callers can borrow both at
/// once.
#[derive(Debug, Default)]
pub struct GameState {
    pub flags: NarrativeFlags,
    pub dialogue: DialogueEngine,
}

impl GameState {
    pub fn new(dialogue_config: DialogueConfig) -> Self {
        Self {
            flags: NarrativeFlags::default(),
            dialogue: DialogueEngine::new(dialogue_config),
        }
    }

    pub fn confirm(&mut self) -> ConfirmOutcome {
        self.dialogue.confirm(&mut self.flags)
    }

    /// Movement and interaction are suspended while a dialogue is shown.
    pub fn in_dialogue(&self) -> bool {
        self.dialogue.is_visible()
    }
}
