use std::mem;
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::world::{NarrativeFlags, Rect};

use super::effect::{Effect, EffectContext};
use super::line::{validate_lines, DialogueError, DialogueLine, Script};

pub const DEFAULT_REVEAL_INTERVAL: Duration = Duration::from_millis(30);

#[derive(Debug, Clone, PartialEq)]
pub struct DialogueConfig {
    pub reveal_interval: Duration,
    pub frame: Rect,
    pub text_inset: f32,
}

impl Default for DialogueConfig {
    fn default() -> Self {
        Self {
            reveal_interval: DEFAULT_REVEAL_INTERVAL,
            frame: Rect::new(50.0, 300.0, 400.0, 100.0),
            text_inset: 10.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    Ignored,
    Revealed,
    Advanced,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogueBody {
    Text {
        visible: String,
        fully_revealed: bool,
    },
    Question {
        prompt: String,
        options: Vec<OptionView>,
    },
}

/// What the presentation layer needs to draw the dialogue box.
#[derive(Debug, Clone, PartialEq)]
pub struct DialogueRenderModel {
    pub frame: Rect,
    pub text_inset: f32,
    pub body: DialogueBody,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DialogueSnapshot {
    pub visible: bool,
    pub line_index: usize,
    pub line_count: usize,
    pub reveal_index: usize,
    pub selected_option: usize,
}

#[derive(Debug, Default)]
pub struct DialogueEngine {
    config: DialogueConfig,
    script: Script,
    line_index: usize,
    reveal_index: usize,
    selected_option: usize,
    visible: bool,
    last_reveal_at: Duration,
    on_complete: Vec<Effect>,
}

impl DialogueEngine {
    pub fn new(config: DialogueConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn start(&mut self, script: Script) -> Result<(), DialogueError> {
        self.start_with_completion(script, Vec::new())
    }

    /// Replaces whatever is playing. A dialogue dropped this way never runs
    /// its completion effects.
    pub fn start_with_completion(
        &mut self,
        script: Script,
        on_complete: Vec<Effect>,
    ) -> Result<(), DialogueError> {
        script.validate()?;
        if self.visible {
            debug!(
                dropped_line_index = self.line_index,
                dropped_line_count = self.script.len(),
                "dialogue_truncated"
            );
        }

        self.script = script;
        self.line_index = 0;
        self.reveal_index = 0;
        self.selected_option = 0;
        self.visible = true;
        self.on_complete = on_complete;
        debug!(line_count = self.script.len(), "dialogue_opened");
        Ok(())
    }

    /// Reveals at most one character per call once the reveal interval has
    /// passed since the previous reveal. A long stall shows one character,
    /// not a burst; the clock is not accumulated.
    pub fn tick(&mut self, now: Duration) {
        if !self.visible {
            return;
        }
        let Some(len) = self.script.get(self.line_index).and_then(DialogueLine::reveal_len)
        else {
            return;
        };
        if self.reveal_index >= len {
            return;
        }
        if now.saturating_sub(self.last_reveal_at) > self.config.reveal_interval {
            self.reveal_index = (self.reveal_index + 1).min(len);
            self.last_reveal_at = now;
        }
    }

    pub fn confirm(&mut self, flags: &mut NarrativeFlags) -> ConfirmOutcome {
        if !self.visible {
            return ConfirmOutcome::Ignored;
        }
        debug_assert!(self.line_index < self.script.len());

        let chosen_effects = match self.script.get(self.line_index) {
            Some(line @ DialogueLine::Text { .. }) => {
                let len = line.reveal_len().unwrap_or(0);
                if self.reveal_index < len {
                    self.reveal_index = len;
                    return ConfirmOutcome::Revealed;
                }
                Vec::new()
            }
            Some(DialogueLine::Question { options, .. }) => match options.get(self.selected_option)
            {
                Some(option) => {
                    info!(
                        option = option.label.as_str(),
                        option_index = self.selected_option,
                        "dialogue_option_chosen"
                    );
                    option.on_chosen.clone()
                }
                None => Vec::new(),
            },
            None => {
                warn!(
                    line_index = self.line_index,
                    line_count = self.script.len(),
                    "dialogue_line_out_of_range_closing"
                );
                self.reset_to_idle();
                return ConfirmOutcome::Ignored;
            }
        };

        if !chosen_effects.is_empty() {
            let mut ctx = EffectContext::splicing(flags, &mut self.script, self.line_index);
            for effect in &chosen_effects {
                effect.apply(&mut ctx);
            }
        }

        self.advance_or_close(flags)
    }

    pub fn move_selection(&mut self, direction: SelectionDirection) {
        if !self.visible {
            return;
        }
        let count = self
            .current_line()
            .map(DialogueLine::option_count)
            .unwrap_or(0);
        if count == 0 {
            return;
        }
        self.selected_option = match direction {
            SelectionDirection::Up => (self.selected_option + count - 1) % count,
            SelectionDirection::Down => (self.selected_option + 1) % count,
        };
    }

    /// Splices lines into the live script right after the current line.
    /// Option effects reach the same operation through [`EffectContext`].
    pub fn insert_after_current(&mut self, lines: Vec<DialogueLine>) -> Result<(), DialogueError> {
        if !self.visible {
            return Err(DialogueError::NotActive);
        }
        validate_lines(&lines, self.line_index + 1)?;
        self.script.insert_after(self.line_index, lines);
        Ok(())
    }

    pub fn render(&self) -> Option<DialogueRenderModel> {
        if !self.visible {
            return None;
        }
        let line = self.current_line()?;
        let body = match line {
            DialogueLine::Text { content } => DialogueBody::Text {
                visible: content.chars().take(self.reveal_index).collect(),
                fully_revealed: line
                    .reveal_len()
                    .map_or(true, |len| self.reveal_index >= len),
            },
            DialogueLine::Question { prompt, options } => DialogueBody::Question {
                prompt: prompt.clone(),
                options: options
                    .iter()
                    .enumerate()
                    .map(|(index, option)| OptionView {
                        label: option.label.clone(),
                        selected: index == self.selected_option,
                    })
                    .collect(),
            },
        };
        Some(DialogueRenderModel {
            frame: self.config.frame,
            text_inset: self.config.text_inset,
            body,
        })
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn line_index(&self) -> usize {
        self.line_index
    }

    pub fn reveal_index(&self) -> usize {
        self.reveal_index
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    pub fn current_line(&self) -> Option<&DialogueLine> {
        if !self.visible {
            return None;
        }
        self.script.get(self.line_index)
    }

    pub fn snapshot(&self) -> DialogueSnapshot {
        DialogueSnapshot {
            visible: self.visible,
            line_index: self.line_index,
            line_count: self.script.len(),
            reveal_index: self.reveal_index,
            selected_option: self.selected_option,
        }
    }

    fn advance_or_close(&mut self, flags: &mut NarrativeFlags) -> ConfirmOutcome {
        if self.line_index + 1 < self.script.len() {
            self.line_index += 1;
            self.reveal_index = 0;
            self.selected_option = 0;
            return ConfirmOutcome::Advanced;
        }

        let on_complete = mem::take(&mut self.on_complete);
        self.reset_to_idle();
        debug!(completion_effects = on_complete.len(), "dialogue_closed");
        let mut ctx = EffectContext::detached(flags);
        for effect in &on_complete {
            effect.apply(&mut ctx);
        }
        ConfirmOutcome::Closed
    }

    fn reset_to_idle(&mut self) {
        self.visible = false;
        self.script = Script::default();
        self.line_index = 0;
        self.reveal_index = 0;
        self.selected_option = 0;
        self.on_complete.clear();
    }
}
