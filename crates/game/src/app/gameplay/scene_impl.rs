#[derive(Debug, Serialize)]
struct StateDump<'a> {
    player: Option<Rect>,
    flags: &'a NarrativeFlags,
    dialogue: DialogueSnapshot,
}

fn state_dump_json(world: &SceneWorld) -> Result<String, serde_json::Error> {
    serde_json::to_string(&StateDump {
        player: world.player().map(|player| player.bounds),
        flags: &world.state().flags,
        dialogue: world.state().dialogue.snapshot(),
    })
}

/// Held direction keys each move the player `speed * dt` along their axis.
/// Diagonals are not normalized.
fn movement_delta(input: &InputSnapshot, dt_seconds: f32, speed: f32) -> Vec2 {
    let mut delta = Vec2::ZERO;
    if input.is_down(InputAction::MoveUp) {
        delta.y -= 1.0;
    }
    if input.is_down(InputAction::MoveDown) {
        delta.y += 1.0;
    }
    if input.is_down(InputAction::MoveLeft) {
        delta.x -= 1.0;
    }
    if input.is_down(InputAction::MoveRight) {
        delta.x += 1.0;
    }
    delta.scaled(speed * dt_seconds)
}

pub(crate) struct GameplayScene {
    registry: InteractionRegistry,
    player_speed: f32,
}

impl GameplayScene {
    fn new() -> Self {
        Self {
            registry: InteractionRegistry::default(),
            player_speed: PLAYER_SPEED_PX_PER_SECOND,
        }
    }

    fn update_dialogue(&mut self, input: &InputSnapshot, world: &mut SceneWorld) {
        let state = world.state_mut();
        if input.pressed(InputAction::SelectPrevious) {
            state.dialogue.move_selection(SelectionDirection::Up);
        }
        if input.pressed(InputAction::SelectNext) {
            state.dialogue.move_selection(SelectionDirection::Down);
        }
        if input.pressed(InputAction::Advance) {
            let outcome = state.confirm();
            debug!(?outcome, line_index = state.dialogue.line_index(), "dialogue_confirm");
        }
    }

    fn update_exploration(
        &mut self,
        dt_seconds: f32,
        input: &InputSnapshot,
        world: &mut SceneWorld,
    ) {
        let delta = movement_delta(input, dt_seconds, self.player_speed);
        let Some(player) = world.player_mut() else {
            return;
        };
        player.bounds = player.bounds.translated(delta);
        let player_bounds = player.bounds;

        self.registry.try_interact(
            &player_bounds,
            input.pressed(InputAction::Interact),
            world.state_mut(),
        );
    }
}

impl Scene for GameplayScene {
    fn load(&mut self, world: &mut SceneWorld) {
        world.clear();
        let player_id = world.spawn(
            PLAYER_START,
            RenderableDesc {
                kind: RenderableKind::Sprite(PLAYER_SPRITE_KEY.to_string()),
                debug_name: "player",
            },
        );
        world.set_player(player_id);
        for (name, bounds, color) in PROPS {
            world.spawn(
                bounds,
                RenderableDesc {
                    kind: RenderableKind::Solid(color),
                    debug_name: name,
                },
            );
        }
        self.registry = build_registry();

        info!(
            entity_count = world.entity_count(),
            interactables = self.registry.len(),
            "scene_loaded"
        );
    }

    fn update(&mut self, dt_seconds: f32, input: &InputSnapshot, world: &mut SceneWorld) {
        if input.pressed(InputAction::DumpState) {
            match state_dump_json(world) {
                Ok(json) => info!(state = %json, "state_dump"),
                Err(error) => warn!(error = %error, "state_dump_failed"),
            }
        }

        if world.state().in_dialogue() {
            self.update_dialogue(input, world);
        } else {
            self.update_exploration(dt_seconds, input, world);
        }
    }

    fn unload(&mut self, world: &mut SceneWorld) {
        self.registry.clear();
        world.clear();
        info!("scene_unloaded");
    }

    fn debug_title(&self, world: &SceneWorld) -> Option<String> {
        let position = world.player()?.bounds.position();
        let dialogue = world.state().dialogue.snapshot();
        let status = if dialogue.visible {
            format!("dialogue {}/{}", dialogue.line_index + 1, dialogue.line_count)
        } else {
            "exploring".to_string()
        };
        Some(format!(
            "Top-Down | pos {:.0},{:.0} | {status}",
            position.x, position.y
        ))
    }
}
