use std::fmt;

use tracing::{info, warn};

use crate::dialogue::{Effect, Script};

use super::collision::{overlaps, Rect};
use super::flags::{FlagKey, NarrativeFlags};
use super::state::GameState;

/// Builds the script for an interactable at trigger time, so content can
/// branch on the flags as they are when the player interacts.
pub type ScriptProvider = fn(&NarrativeFlags) -> Script;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    Always,
    FlagSet(FlagKey),
    FlagUnset(FlagKey),
    All(Vec<Condition>),
}

impl Condition {
    pub fn holds(&self, flags: &NarrativeFlags) -> bool {
        match self {
            Condition::Always => true,
            Condition::FlagSet(flag) => flags.is_set(*flag),
            Condition::FlagUnset(flag) => !flags.is_set(*flag),
            Condition::All(conditions) => conditions.iter().all(|c| c.holds(flags)),
        }
    }
}

#[derive(Clone)]
pub struct Interactable {
    pub name: &'static str,
    pub bounds: Rect,
    pub condition: Condition,
    pub script: ScriptProvider,
    pub on_complete: Vec<Effect>,
}

impl Interactable {
    pub fn new(name: &'static str, bounds: Rect, script: ScriptProvider) -> Self {
        Self {
            name,
            bounds,
            condition: Condition::Always,
            script,
            on_complete: Vec::new(),
        }
    }

    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = condition;
        self
    }

    pub fn with_completion(mut self, effect: Effect) -> Self {
        self.on_complete.push(effect);
        self
    }

    pub fn is_available(&self, flags: &NarrativeFlags) -> bool {
        self.condition.holds(flags)
    }
}

impl fmt::Debug for Interactable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interactable")
            .field("name", &self.name)
            .field("bounds", &self.bounds)
            .field("condition", &self.condition)
            .field("on_complete", &self.on_complete)
            .finish_non_exhaustive()
    }
}

/// Interactables in priority order. The first available overlap wins, not
/// the nearest one.
#[derive(Debug, Default)]
pub struct InteractionRegistry {
    interactables: Vec<Interactable>,
}

impl InteractionRegistry {
    pub fn register(&mut self, interactable: Interactable) {
        self.interactables.push(interactable);
    }

    pub fn interactables(&self) -> &[Interactable] {
        &self.interactables
    }

    pub fn len(&self) -> usize {
        self.interactables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interactables.is_empty()
    }

    pub fn clear(&mut self) {
        self.interactables.clear();
    }

    /// Starts the dialogue of the first available interactable overlapping
    /// `player` when interact was pressed this frame and nothing is playing.
    pub fn try_interact(
        &self,
        player: &Rect,
        interact_pressed: bool,
        state: &mut GameState,
    ) -> Option<&Interactable> {
        if !interact_pressed || state.dialogue.is_visible() {
            return None;
        }

        let interactable = self.interactables.iter().find(|candidate| {
            overlaps(player, &candidate.bounds) && candidate.is_available(&state.flags)
        })?;

        let script = (interactable.script)(&state.flags);
        match state
            .dialogue
            .start_with_completion(script, interactable.on_complete.clone())
        {
            Ok(()) => {
                info!(interactable = interactable.name, "dialogue_started");
                Some(interactable)
            }
            Err(error) => {
                warn!(
                    interactable = interactable.name,
                    error = %error,
                    "dialogue_start_rejected"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialogue::{DialogueLine, DialogueOption};

    const TAKEN: FlagKey = FlagKey("taken");
    const SEEN: FlagKey = FlagKey("seen");

    fn first_script(_flags: &NarrativeFlags) -> Script {
        Script::from_texts(["first"])
    }

    fn second_script(_flags: &NarrativeFlags) -> Script {
        Script::from_texts(["second"])
    }

    fn branching_script(flags: &NarrativeFlags) -> Script {
        if flags.is_set(SEEN) {
            Script::from_texts(["again"])
        } else {
            Script::from_texts(["new"])
        }
    }

    fn pickup_script(_flags: &NarrativeFlags) -> Script {
        Script::new(vec![DialogueLine::question(
            "Take it?",
            vec![DialogueOption::new("yes").on_chosen(Effect::SetFlag(TAKEN))],
        )])
    }

    fn empty_script(_flags: &NarrativeFlags) -> Script {
        Script::default()
    }

    fn current_text(state: &GameState) -> Option<String> {
        match state.dialogue.current_line()? {
            DialogueLine::Text { content } => Some(content.clone()),
            DialogueLine::Question { prompt, .. } => Some(prompt.clone()),
        }
    }

    fn player_at(x: f32, y: f32) -> Rect {
        Rect::new(x, y, 10.0, 10.0)
    }

    #[test]
    fn first_registered_overlap_wins() {
        let mut registry = InteractionRegistry::default();
        registry.register(Interactable::new(
            "first",
            Rect::new(0.0, 0.0, 50.0, 50.0),
            first_script,
        ));
        registry.register(Interactable::new(
            "second",
            Rect::new(0.0, 0.0, 50.0, 50.0),
            second_script,
        ));
        let mut state = GameState::default();

        let hit = registry
            .try_interact(&player_at(5.0, 5.0), true, &mut state)
            .expect("hit");
        assert_eq!(hit.name, "first");
        assert_eq!(current_text(&state).as_deref(), Some("first"));
    }

    #[test]
    fn unavailable_interactable_is_skipped_for_next_match() {
        let mut registry = InteractionRegistry::default();
        registry.register(
            Interactable::new("first", Rect::new(0.0, 0.0, 50.0, 50.0), first_script)
                .with_condition(Condition::FlagUnset(TAKEN)),
        );
        registry.register(Interactable::new(
            "second",
            Rect::new(0.0, 0.0, 50.0, 50.0),
            second_script,
        ));
        let mut state = GameState::default();
        state.flags.set(TAKEN);

        let hit = registry
            .try_interact(&player_at(5.0, 5.0), true, &mut state)
            .expect("hit");
        assert_eq!(hit.name, "second");
    }

    #[test]
    fn no_trigger_without_press_overlap_or_while_talking() {
        let mut registry = InteractionRegistry::default();
        registry.register(Interactable::new(
            "wall",
            Rect::new(100.0, 100.0, 20.0, 20.0),
            first_script,
        ));
        let mut state = GameState::default();

        assert!(registry
            .try_interact(&player_at(105.0, 105.0), false, &mut state)
            .is_none());
        assert!(registry
            .try_interact(&player_at(90.0, 100.0), true, &mut state)
            .is_none());
        assert!(!state.dialogue.is_visible());

        state
            .dialogue
            .start(Script::from_texts(["busy"]))
            .expect("start");
        assert!(registry
            .try_interact(&player_at(105.0, 105.0), true, &mut state)
            .is_none());
        assert_eq!(current_text(&state).as_deref(), Some("busy"));
    }

    #[test]
    fn provider_is_evaluated_at_trigger_time() {
        let mut registry = InteractionRegistry::default();
        registry.register(Interactable::new(
            "tree",
            Rect::new(0.0, 0.0, 20.0, 20.0),
            branching_script,
        ));
        let mut state = GameState::default();

        registry.try_interact(&player_at(0.0, 0.0), true, &mut state);
        assert_eq!(current_text(&state).as_deref(), Some("new"));

        state.confirm();
        state.confirm();
        assert!(!state.dialogue.is_visible());
        state.flags.set(SEEN);

        registry.try_interact(&player_at(0.0, 0.0), true, &mut state);
        assert_eq!(current_text(&state).as_deref(), Some("again"));
    }

    #[test]
    fn choosing_pickup_retires_it_but_keeps_it_registered() {
        let mut registry = InteractionRegistry::default();
        registry.register(
            Interactable::new("scissors", Rect::new(0.0, 0.0, 20.0, 20.0), pickup_script)
                .with_condition(Condition::FlagUnset(TAKEN)),
        );
        let mut state = GameState::default();

        registry.try_interact(&player_at(0.0, 0.0), true, &mut state);
        state.confirm();
        assert!(state.flags.is_set(TAKEN));
        assert!(registry
            .try_interact(&player_at(0.0, 0.0), true, &mut state)
            .is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn completion_effects_are_handed_to_the_dialogue() {
        let mut registry = InteractionRegistry::default();
        registry.register(
            Interactable::new("tree", Rect::new(0.0, 0.0, 20.0, 20.0), first_script)
                .with_completion(Effect::SetFlag(SEEN)),
        );
        let mut state = GameState::default();
        registry.try_interact(&player_at(0.0, 0.0), true, &mut state);
        state.confirm();
        assert!(!state.flags.is_set(SEEN));
        state.confirm();
        assert!(state.flags.is_set(SEEN));
    }

    #[test]
    fn invalid_script_is_rejected_and_nothing_starts() {
        let mut registry = InteractionRegistry::default();
        registry.register(Interactable::new(
            "void",
            Rect::new(0.0, 0.0, 20.0, 20.0),
            empty_script,
        ));
        let mut state = GameState::default();
        assert!(registry
            .try_interact(&player_at(0.0, 0.0), true, &mut state)
            .is_none());
        assert!(!state.dialogue.is_visible());
    }

    #[test]
    fn all_condition_requires_every_part() {
        let mut flags = NarrativeFlags::default();
        let condition = Condition::All(vec![Condition::FlagSet(SEEN), Condition::FlagUnset(TAKEN)]);
        assert!(!condition.holds(&flags));
        flags.set(SEEN);
        assert!(condition.holds(&flags));
        flags.set(TAKEN);
        assert!(!condition.holds(&flags));
        assert!(Condition::Always.holds(&flags));
    }
}
