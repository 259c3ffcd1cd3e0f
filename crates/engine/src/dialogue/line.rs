use thiserror::Error;

use super::effect::Effect;

#[derive(Debug, Clone)]
pub struct DialogueOption {
    pub label: String,
    /// Empty means choosing the option has no side effect.
    pub on_chosen: Vec<Effect>,
}

impl DialogueOption {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            on_chosen: Vec::new(),
        }
    }

    pub fn on_chosen(mut self, effect: Effect) -> Self {
        self.on_chosen.push(effect);
        self
    }
}

#[derive(Debug, Clone)]
pub enum DialogueLine {
    Text {
        content: String,
    },
    Question {
        prompt: String,
        options: Vec<DialogueOption>,
    },
}

impl DialogueLine {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
        }
    }

    pub fn question(prompt: impl Into<String>, options: Vec<DialogueOption>) -> Self {
        Self::Question {
            prompt: prompt.into(),
            options,
        }
    }

    /// Characters a Text line reveals one at a time. Questions are shown
    /// whole and have no reveal length.
    pub fn reveal_len(&self) -> Option<usize> {
        match self {
            Self::Text { content } => Some(content.chars().count()),
            Self::Question { .. } => None,
        }
    }

    pub fn option_count(&self) -> usize {
        match self {
            Self::Text { .. } => 0,
            Self::Question { options, .. } => options.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DialogueError {
    #[error("dialogue script has no lines")]
    EmptyScript,
    #[error("question at line {line_index} has no options")]
    EmptyQuestion { line_index: usize },
    #[error("no dialogue is active")]
    NotActive,
}

/// Ordered lines of a dialogue. Insertions only ever land after an existing
/// index, so every index at or before the insertion point keeps pointing at
/// the same line.
#[derive(Debug, Clone, Default)]
pub struct Script {
    lines: Vec<DialogueLine>,
}

impl Script {
    pub fn new(lines: Vec<DialogueLine>) -> Self {
        Self { lines }
    }

    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(texts.into_iter().map(DialogueLine::text).collect())
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&DialogueLine> {
        self.lines.get(index)
    }

    pub fn lines(&self) -> &[DialogueLine] {
        &self.lines
    }

    /// Splices `lines` directly after `anchor`, keeping their order. An
    /// anchor past the end appends.
    pub fn insert_after(&mut self, anchor: usize, lines: Vec<DialogueLine>) {
        let at = anchor.saturating_add(1).min(self.lines.len());
        self.lines.splice(at..at, lines);
    }

    pub fn validate(&self) -> Result<(), DialogueError> {
        if self.lines.is_empty() {
            return Err(DialogueError::EmptyScript);
        }
        validate_lines(&self.lines, 0)
    }
}

impl From<Vec<DialogueLine>> for Script {
    fn from(lines: Vec<DialogueLine>) -> Self {
        Self::new(lines)
    }
}

pub(crate) fn validate_lines(
    lines: &[DialogueLine],
    base_index: usize,
) -> Result<(), DialogueError> {
    for (offset, line) in lines.iter().enumerate() {
        if let DialogueLine::Question { options, .. } = line {
            if options.is_empty() {
                return Err(DialogueError::EmptyQuestion {
                    line_index: base_index + offset,
                });
            }
        }
    }
    Ok(())
}
