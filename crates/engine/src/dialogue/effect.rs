use std::fmt;

use tracing::{debug, warn};

use crate::world::{FlagKey, NarrativeFlags};

use super::line::{validate_lines, DialogueLine, Script};

pub type EffectFn = fn(&mut EffectContext<'_>);

/// Side effect attached to a dialogue option or to dialogue completion.
#[derive(Clone)]
pub enum Effect {
    SetFlag(FlagKey),
    InsertLines(Vec<DialogueLine>),
    Call(EffectFn),
}

impl Effect {
    pub fn apply(&self, ctx: &mut EffectContext<'_>) {
        match self {
            Effect::SetFlag(flag) => {
                ctx.set_flag(*flag);
            }
            Effect::InsertLines(lines) => ctx.insert_after_current(lines.clone()),
            Effect::Call(effect_fn) => effect_fn(ctx),
        }
    }
}

impl fmt::Debug for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::SetFlag(flag) => f.debug_tuple("SetFlag").field(flag).finish(),
            Effect::InsertLines(lines) => f.debug_tuple("InsertLines").field(&lines.len()).finish(),
            Effect::Call(_) => f.write_str("Call(..)"),
        }
    }
}

struct SpliceTarget<'a> {
    script: &'a mut Script,
    anchor: usize,
}

/// Handle given to effects: narrative flags plus, while an option is being
/// chosen, the live script positioned at the question line.
pub struct EffectContext<'a> {
    flags: &'a mut NarrativeFlags,
    splice: Option<SpliceTarget<'a>>,
}

impl<'a> EffectContext<'a> {
    pub(crate) fn splicing(
        flags: &'a mut NarrativeFlags,
        script: &'a mut Script,
        anchor: usize,
    ) -> Self {
        Self {
            flags,
            splice: Some(SpliceTarget { script, anchor }),
        }
    }

    pub(crate) fn detached(flags: &'a mut NarrativeFlags) -> Self {
        Self {
            flags,
            splice: None,
        }
    }

    pub fn flags(&self) -> &NarrativeFlags {
        &*self.flags
    }

    pub fn is_set(&self, flag: FlagKey) -> bool {
        self.flags.is_set(flag)
    }

    pub fn set_flag(&mut self, flag: FlagKey) -> bool {
        let changed = self.flags.set(flag);
        if changed {
            debug!(flag = flag.0, "narrative_flag_set");
        }
        changed
    }

    /// Splices `lines` right after the current line so the next advance
    /// reaches them. Each call lands directly after the current line, so a
    /// later call plays before an earlier one.
    pub fn insert_after_current(&mut self, lines: Vec<DialogueLine>) {
        debug_assert!(
            self.splice.is_some(),
            "insert_after_current is only valid while an option is being chosen"
        );
        let Some(target) = self.splice.as_mut() else {
            warn!(
                line_count = lines.len(),
                "dialogue_splice_without_active_line_ignored"
            );
            return;
        };

        let validation = validate_lines(&lines, target.anchor + 1);
        debug_assert!(validation.is_ok(), "invalid spliced lines: {validation:?}");
        if let Err(error) = validation {
            warn!(error = %error, "dialogue_splice_rejected");
            return;
        }

        debug!(
            anchor = target.anchor,
            line_count = lines.len(),
            "dialogue_lines_spliced"
        );
        target.script.insert_after(target.anchor, lines);
    }
}
