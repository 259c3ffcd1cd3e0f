use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod app;
pub mod dialogue;
mod sprite_keys;
pub mod world;

pub use app::{
    run_app, run_app_with_metrics, AppError, Entity, EntityId, InputAction, InputSnapshot,
    LoopConfig, LoopMetricsSnapshot, MetricsHandle, RenderableDesc, RenderableKind, Renderer,
    Scene, SceneWorld, Vec2, REVEAL_INTERVAL_ENV_VAR, SLOW_FRAME_ENV_VAR,
};
pub use dialogue::{
    ConfirmOutcome, DialogueConfig, DialogueEngine, DialogueError, DialogueLine, DialogueOption,
    Effect, EffectContext, Script, SelectionDirection,
};
pub use sprite_keys::{SpriteKey, SpriteKeyError};
pub use world::{
    overlaps, Condition, FlagKey, GameState, Interactable, InteractionRegistry, NarrativeFlags,
    Rect,
};

pub const ROOT_ENV_VAR: &str = "TOPDOWN_ROOT";

#[derive(Debug, Clone)]
pub struct AppPaths {
    pub root: PathBuf,
    pub asset_dir: PathBuf,
    pub sprite_dir: PathBuf,
}

impl AppPaths {
    fn from_root(root: PathBuf) -> Self {
        let asset_dir = root.join("assets");
        let sprite_dir = asset_dir.join("sprites");
        Self {
            root,
            asset_dir,
            sprite_dir,
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to read environment variable {var}: {source}")]
    EnvVar {
        var: &'static str,
        #[source]
        source: env::VarError,
    },
    #[error("failed to resolve current executable path: {0}")]
    CurrentExe(#[source] std::io::Error),
    #[error("current executable path has no parent directory: {0}")]
    ExeHasNoParent(PathBuf),
    #[error(
        "{env_var} is set but does not point to a valid project root: {path}\n\
A valid root must contain Cargo.toml and either crates/ or assets/."
    )]
    InvalidEnvRoot { path: PathBuf, env_var: &'static str },
    #[error(
        "Could not detect project root by walking upward from executable directory: {start_dir}\n\
Expected a directory containing Cargo.toml and either crates/ or assets/.\n\
Set {env_var} explicitly, for example:\n\
Bash/zsh: export {env_var}=\"/path/to/topdown\""
    )]
    RootNotFound {
        start_dir: PathBuf,
        env_var: &'static str,
    },
}

/// Locates the project root (for `assets/`) from `TOPDOWN_ROOT` or by
/// walking up from the executable. A missing `assets/` directory is not an
/// error; sprites just fail to load and draw nothing.
pub fn resolve_app_paths() -> Result<AppPaths, StartupError> {
    let root = match env::var(ROOT_ENV_VAR) {
        Ok(value) => root_from_env_value(&value)?,
        Err(env::VarError::NotPresent) => {
            let exe = env::current_exe().map_err(StartupError::CurrentExe)?;
            let exe_dir = exe
                .parent()
                .map(Path::to_path_buf)
                .ok_or_else(|| StartupError::ExeHasNoParent(exe.clone()))?;
            find_root_upward(&exe_dir)?
        }
        Err(source) => {
            return Err(StartupError::EnvVar {
                var: ROOT_ENV_VAR,
                source,
            })
        }
    };
    Ok(AppPaths::from_root(root))
}

fn root_from_env_value(value: &str) -> Result<PathBuf, StartupError> {
    let normalized = normalize_path(Path::new(value));
    if is_repo_marker(&normalized) {
        Ok(normalized)
    } else {
        Err(StartupError::InvalidEnvRoot {
            path: normalized,
            env_var: ROOT_ENV_VAR,
        })
    }
}

fn find_root_upward(start_dir: &Path) -> Result<PathBuf, StartupError> {
    start_dir
        .ancestors()
        .find(|candidate| is_repo_marker(candidate))
        .map(normalize_path)
        .ok_or_else(|| StartupError::RootNotFound {
            start_dir: normalize_path(start_dir),
            env_var: ROOT_ENV_VAR,
        })
}

fn is_repo_marker(path: &Path) -> bool {
    let cargo_toml = path.join("Cargo.toml").is_file();
    let has_crates = path.join("crates").is_dir();
    let has_assets = path.join("assets").is_dir();

    cargo_toml && (has_crates || has_assets)
}

fn normalize_path(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn make_root(with_assets: bool) -> TempDir {
        let temp = TempDir::new().expect("temp");
        fs::write(temp.path().join("Cargo.toml"), "[workspace]\n").expect("cargo toml");
        if with_assets {
            fs::create_dir_all(temp.path().join("assets").join("sprites")).expect("assets");
        } else {
            fs::create_dir(temp.path().join("crates")).expect("crates");
        }
        temp
    }

    #[test]
    fn repo_marker_requires_cargo_toml_and_a_layout_dir() {
        let temp = TempDir::new().expect("temp");
        assert!(!is_repo_marker(temp.path()));
        fs::create_dir(temp.path().join("assets")).expect("assets");
        assert!(!is_repo_marker(temp.path()));
        fs::write(temp.path().join("Cargo.toml"), "").expect("cargo toml");
        assert!(is_repo_marker(temp.path()));
    }

    #[test]
    fn upward_search_finds_root_from_nested_dir() {
        let root = make_root(false);
        let nested = root.path().join("target").join("debug");
        fs::create_dir_all(&nested).expect("nested");

        let found = find_root_upward(&nested).expect("root");
        assert_eq!(found, normalize_path(root.path()));
    }

    #[test]
    fn env_root_must_be_a_project_root() {
        let root = make_root(true);
        assert_eq!(
            root_from_env_value(root.path().to_str().expect("utf8")).expect("root"),
            normalize_path(root.path())
        );

        let empty = TempDir::new().expect("temp");
        let error = root_from_env_value(empty.path().to_str().expect("utf8"))
            .expect_err("not a root");
        assert!(matches!(error, StartupError::InvalidEnvRoot { .. }));
        assert!(error.to_string().contains(ROOT_ENV_VAR));
    }

    #[test]
    fn app_paths_point_sprites_under_assets() {
        let paths = AppPaths::from_root(PathBuf::from("/game"));
        assert_eq!(paths.asset_dir, PathBuf::from("/game/assets"));
        assert_eq!(paths.sprite_dir, PathBuf::from("/game/assets/sprites"));
    }
}
