mod collision;
mod flags;
mod registry;
mod state;

pub use collision::{overlaps, Rect};
pub use flags::{FlagKey, NarrativeFlags};
pub use registry::{Condition, Interactable, InteractionRegistry, ScriptProvider};
pub use state::GameState;
