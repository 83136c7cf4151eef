use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod actor;
pub mod anim;
pub mod app;
pub mod assets;
pub mod combat;
pub mod geometry;
mod asset_keys;

pub use actor::{
    Actor, ActorBuildError, ActorBuilder, ActorEffect, ActorKind, ActorProfile, AttackPicker,
    Completion, CompletionHook, HitOutcome, Intent, NoCompletionEffect, ProjectileProfile,
    RandomAttackPicker, RangedAttackHook, SeededAttackPicker, ARROW_SPEED, HERO_STEP, ZOMBIE_STEP,
};
pub use anim::{ActionTag, AnimationSequence, Direction, EmptySequence, Frame, FrameError};
pub use app::{
    run_app, Anchor, AppError, InputAction, InputSnapshot, LoopConfig, LoopMetricsSnapshot,
    Renderer, Scene, SceneCommand, SpriteDraw,
};
pub use asset_keys::AssetKeyError;
pub use assets::{AssetError, DirectoryFrameSource, FrameSource, MemoryFrameSource};
pub use combat::{Projectile, ProjectileSet, TickReport};
pub use geometry::{FieldBounds, Position, Rect};

pub const ROOT_ENV_VAR: &str = "ZOMBIE_LAND_ROOT";

#[derive(Debug, Clone)]
pub struct AppPaths {
    pub root: PathBuf,
    pub assets_dir: PathBuf,
    pub sprites_dir: PathBuf,
}

impl AppPaths {
    pub fn from_root(root: PathBuf) -> Self {
        let assets_dir = root.join("assets");
        let sprites_dir = assets_dir.join("sprites");
        Self {
            root,
            assets_dir,
            sprites_dir,
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
Bash/zsh: export {env_var}=\"/path/to/zombie-land\""
    )]
    RootNotFound {
        start_dir: PathBuf,
        env_var: &'static str,
    },
}

pub fn resolve_app_paths() -> Result<AppPaths, StartupError> {
    resolve_root().map(AppPaths::from_root)
}

fn resolve_root() -> Result<PathBuf, StartupError> {
    match env::var(ROOT_ENV_VAR) {
        Ok(value) => {
            let normalized = normalize_path(Path::new(&value));
            if is_repo_marker(&normalized) {
                Ok(normalized)
            } else {
                Err(StartupError::InvalidEnvRoot {
                    path: normalized,
                    env_var: ROOT_ENV_VAR,
                })
            }
        }
        Err(env::VarError::NotPresent) => {
            let exe = env::current_exe().map_err(StartupError::CurrentExe)?;
            let exe_dir = exe
                .parent()
                .map(Path::to_path_buf)
                .ok_or_else(|| StartupError::ExeHasNoParent(exe.clone()))?;
            find_root_from(&exe_dir).ok_or_else(|| StartupError::RootNotFound {
                start_dir: normalize_path(&exe_dir),
                env_var: ROOT_ENV_VAR,
            })
        }
        Err(source) => Err(StartupError::EnvVar {
            var: ROOT_ENV_VAR,
            source,
        }),
    }
}

fn find_root_from(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|candidate| is_repo_marker(candidate))
        .map(normalize_path)
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
    use tempfile::TempDir;

    use super::*;

    fn project_root() -> TempDir {
        let dir = TempDir::new().expect("temp dir");
        fs::write(dir.path().join("Cargo.toml"), "[workspace]\n").expect("write manifest");
        fs::create_dir(dir.path().join("assets")).expect("assets dir");
        dir
    }

    #[test]
    fn repo_marker_requires_cargo_toml() {
        let dir = TempDir::new().expect("temp dir");
        fs::create_dir(dir.path().join("assets")).expect("assets dir");
        assert!(!is_repo_marker(dir.path()));
    }

    #[test]
    fn repo_marker_accepts_manifest_with_assets() {
        let root = project_root();
        assert!(is_repo_marker(root.path()));
    }

    #[test]
    fn root_is_found_from_a_nested_directory() {
        let root = project_root();
        let nested = root.path().join("target").join("debug");
        fs::create_dir_all(&nested).expect("nested dirs");

        let found = find_root_from(&nested).expect("root");

        assert_eq!(found, normalize_path(root.path()));
    }

    #[test]
    fn app_paths_place_sprites_under_assets() {
        let paths = AppPaths::from_root(PathBuf::from("/game"));
        assert_eq!(paths.assets_dir, PathBuf::from("/game/assets"));
        assert_eq!(paths.sprites_dir, PathBuf::from("/game/assets/sprites"));
    }
}
