use std::path::PathBuf;

use actor_engine::{
    resolve_app_paths, ActorBuildError, AssetError, DirectoryFrameSource, Frame, LoopConfig, Scene,
    StartupError,
};
use image::imageops::{self, FilterType};
use thiserror::Error;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use super::config::{ConfigError, GameConfig};
use super::gameplay::{SceneSettings, ZombieLandScene};

const BACKGROUND_ASSET: &str = "backgrounds";

pub(crate) struct AppWiring {
    pub(crate) config: LoopConfig,
    pub(crate) scene: Box<dyn Scene>,
}

#[derive(Debug, Error)]
pub(crate) enum BootstrapError {
    #[error(transparent)]
    Startup(#[from] StartupError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to build actors: {0}")]
    Actors(#[from] ActorBuildError),
    #[error("failed to load background: {0}")]
    Background(#[source] AssetError),
}

pub(crate) fn build_app() -> Result<AppWiring, BootstrapError> {
    info!("=== Zombie Land Startup ===");

    let config = match GameConfig::from_env()? {
        Some((config, path)) => {
            info!(path = %path.display(), "config_loaded");
            config
        }
        None => GameConfig::default(),
    };
    let sprites_dir = resolve_sprites_dir(&config)?;
    info!(sprites_dir = %sprites_dir.display(), "startup");

    let frames = DirectoryFrameSource::new(sprites_dir);
    let background = load_background(&frames, &config)?;
    let scene = ZombieLandScene::new(
        SceneSettings::from_config(&config),
        Box::new(frames),
        background,
    )?;

    Ok(AppWiring {
        config: config.loop_config(),
        scene: Box::new(scene),
    })
}

fn resolve_sprites_dir(config: &GameConfig) -> Result<PathBuf, StartupError> {
    match &config.asset_root {
        Some(root) => Ok(root.clone()),
        None => Ok(resolve_app_paths()?.sprites_dir),
    }
}

/// A missing backdrop falls back to the clear colour; a broken one is fatal.
fn load_background(
    frames: &DirectoryFrameSource,
    config: &GameConfig,
) -> Result<Option<Frame>, BootstrapError> {
    let Some(name) = config.background.as_deref() else {
        return Ok(None);
    };
    match frames.load_image(BACKGROUND_ASSET, name) {
        Ok(image) => {
            let field = config.field();
            let scaled = if image.dimensions() == (field.width, field.height) {
                image
            } else {
                imageops::resize(&image, field.width, field.height, FilterType::Triangle)
            };
            Ok(Some(Frame::new(scaled)))
        }
        Err(AssetError::Missing { asset, sheet }) => {
            warn!(asset = %asset, sheet = %sheet, "background_missing");
            Ok(None)
        }
        Err(error) => Err(BootstrapError::Background(error)),
    }
}

pub(crate) fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_names(true)
        .compact()
        .init();
}

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use tempfile::TempDir;

    use super::*;

    fn sprites_with_background(width: u32, height: u32) -> TempDir {
        let dir = TempDir::new().expect("temp dir");
        let backgrounds = dir.path().join(BACKGROUND_ASSET);
        std::fs::create_dir_all(&backgrounds).expect("backgrounds dir");
        RgbaImage::from_pixel(width, height, Rgba([10, 20, 30, 255]))
            .save(backgrounds.join("game_background.png"))
            .expect("write png");
        dir
    }

    #[test]
    fn background_is_scaled_to_the_field() {
        let dir = sprites_with_background(64, 48);
        let frames = DirectoryFrameSource::new(dir.path());

        let background = load_background(&frames, &GameConfig::default())
            .expect("load")
            .expect("background present");

        assert_eq!(background.size(), (1024, 768));
    }

    #[test]
    fn missing_background_is_not_fatal() {
        let dir = TempDir::new().expect("temp dir");
        let frames = DirectoryFrameSource::new(dir.path());
        assert!(load_background(&frames, &GameConfig::default())
            .expect("load")
            .is_none());
    }

    #[test]
    fn background_can_be_disabled() {
        let frames = DirectoryFrameSource::new("/nonexistent");
        let config = GameConfig {
            background: None,
            ..GameConfig::default()
        };
        assert!(load_background(&frames, &config).expect("load").is_none());
    }

    #[test]
    fn configured_asset_root_wins_over_discovery() {
        let config = GameConfig {
            asset_root: Some(PathBuf::from("/art")),
            ..GameConfig::default()
        };
        assert_eq!(
            resolve_sprites_dir(&config).expect("dir"),
            PathBuf::from("/art")
        );
    }
}
