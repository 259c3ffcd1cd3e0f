const WALL_PUSHED: FlagKey = FlagKey("wall_pushed");
const SCISSORS_TAKEN: FlagKey = FlagKey("scissors_taken");
const TREE_REMEMBERED: FlagKey = FlagKey("tree_remembered");
const TREE_CARVED: FlagKey = FlagKey("tree_carved");

const PLAYER_START: Rect = Rect::new(100.0, 100.0, 50.0, 50.0);
const WALL_BOUNDS: Rect = Rect::new(300.0, 100.0, 100.0, 100.0);
const OLD_TREE_BOUNDS: Rect = Rect::new(200.0, 300.0, 20.0, 100.0);
const SCISSORS_BOUNDS: Rect = Rect::new(480.0, 220.0, 20.0, 20.0);

const WALL_COLOR: [u8; 4] = [255, 0, 0, 255];
const OLD_TREE_COLOR: [u8; 4] = [139, 69, 19, 255];
const SCISSORS_COLOR: [u8; 4] = [150, 150, 160, 255];

/// Static props in draw order. The player is spawned separately.
const PROPS: [(&str, Rect, [u8; 4]); 3] = [
    ("wall", WALL_BOUNDS, WALL_COLOR),
    ("old_tree", OLD_TREE_BOUNDS, OLD_TREE_COLOR),
    ("scissors", SCISSORS_BOUNDS, SCISSORS_COLOR),
];

fn wall_script(flags: &NarrativeFlags) -> Script {
    if flags.is_set(WALL_PUSHED) {
        return Script::from_texts([
            "This is a wall.",
            "You already pushed it once. It did not notice.",
        ]);
    }

    Script::new(vec![
        DialogueLine::text("This is a wall."),
        DialogueLine::text("You just tried to talk to a wall."),
        DialogueLine::text("You okay, champ?"),
        DialogueLine::question(
            "Push it?",
            vec![
                DialogueOption::new("Yes")
                    .on_chosen(Effect::SetFlag(WALL_PUSHED))
                    .on_chosen(Effect::InsertLines(vec![
                        DialogueLine::text("You lean into the wall with everything you have."),
                        DialogueLine::text("It does not move. You feel better anyway."),
                    ])),
                DialogueOption::new("No")
                    .on_chosen(Effect::InsertLines(vec![DialogueLine::text(
                        "Probably for the best.",
                    )])),
            ],
        ),
    ])
}

fn old_tree_script(flags: &NarrativeFlags) -> Script {
    let mut lines = if flags.is_set(TREE_REMEMBERED) {
        vec![
            DialogueLine::text("The very old tree again."),
            DialogueLine::text("You remember the folktales. 700 years."),
        ]
    } else {
        vec![
            DialogueLine::text("This is one very old tree."),
            DialogueLine::text("Local folktales say it's been here for 700 years."),
            DialogueLine::text("..."),
            DialogueLine::text("I'll remember this. It might help later."),
        ]
    };

    if flags.is_set(SCISSORS_TAKEN) && !flags.is_set(TREE_CARVED) {
        lines.push(DialogueLine::question(
            "Carve your initials with the scissors?",
            vec![
                DialogueOption::new("Carve").on_chosen(Effect::Call(carve_initials)),
                DialogueOption::new("Leave it be"),
            ],
        ));
    }

    Script::new(lines)
}

fn carve_initials(ctx: &mut EffectContext<'_>) {
    ctx.set_flag(TREE_CARVED);
    if ctx.is_set(WALL_PUSHED) {
        ctx.insert_after_current(vec![
            DialogueLine::text("First the wall, now the tree."),
            DialogueLine::text("You are leaving your mark on this place."),
        ]);
    } else {
        ctx.insert_after_current(vec![DialogueLine::text(
            "You carve a small, crooked letter into the bark.",
        )]);
    }
}

fn scissors_script(_flags: &NarrativeFlags) -> Script {
    Script::new(vec![
        DialogueLine::text("A pair of rusty scissors lies in the grass."),
        DialogueLine::question(
            "Take them?",
            vec![
                DialogueOption::new("Take them")
                    .on_chosen(Effect::SetFlag(SCISSORS_TAKEN))
                    .on_chosen(Effect::InsertLines(vec![DialogueLine::text(
                        "You pocket the scissors.",
                    )])),
                DialogueOption::new("Leave them"),
            ],
        ),
    ])
}

/// Priority order: when boxes overlap, the earlier entry wins.
fn build_registry() -> InteractionRegistry {
    let mut registry = InteractionRegistry::default();
    registry.register(Interactable::new("wall", WALL_BOUNDS, wall_script));
    registry.register(
        Interactable::new("old_tree", OLD_TREE_BOUNDS, old_tree_script)
            .with_completion(Effect::SetFlag(TREE_REMEMBERED)),
    );
    registry.register(
        Interactable::new("scissors", SCISSORS_BOUNDS, scissors_script)
            .with_condition(Condition::FlagUnset(SCISSORS_TAKEN)),
    );
    registry
}
