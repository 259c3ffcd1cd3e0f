use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::ImageReader;
use pixels::{Error, Pixels, SurfaceTexture, TextureError};
use tracing::{debug, warn};
use winit::window::Window;

use crate::app::tools::{draw_overlay, OverlayData};
use crate::app::{RenderableKind, SceneWorld};
use crate::sprite_keys::SpriteKey;

use super::dialogue_box::draw_dialogue_box;
use super::raster::{blit_scaled, clear, fill_rect, PixelRect, SpriteImage};

const CLEAR_COLOR: [u8; 4] = [236, 236, 228, 255];

/// Decoded sprites keyed by sprite key. `None` records a failed load so the
/// file is not retried every frame.
#[derive(Debug)]
pub(crate) struct SpriteCache {
    sprite_dir: PathBuf,
    entries: HashMap<String, Option<SpriteImage>>,
}

impl SpriteCache {
    pub(crate) fn new(sprite_dir: PathBuf) -> Self {
        Self {
            sprite_dir,
            entries: HashMap::new(),
        }
    }

    /// Loads on first use. A missing or undecodable image yields `None` and
    /// warns once for that key.
    pub(crate) fn get(&mut self, key: &str) -> Option<&SpriteImage> {
        if !self.entries.contains_key(key) {
            let loaded = match self.load(key) {
                Ok(sprite) => {
                    debug!(
                        sprite_key = key,
                        width = sprite.width,
                        height = sprite.height,
                        "sprite_loaded"
                    );
                    Some(sprite)
                }
                Err(reason) => {
                    warn!(
                        sprite_key = key,
                        sprite_dir = %self.sprite_dir.display(),
                        reason = reason.as_str(),
                        "sprite_load_failed_drawing_nothing"
                    );
                    None
                }
            };
            self.entries.insert(key.to_string(), loaded);
        }
        self.entries.get(key).and_then(Option::as_ref)
    }

    #[cfg(test)]
    pub(crate) fn is_loaded(&self, key: &str) -> bool {
        matches!(self.entries.get(key), Some(Some(_)))
    }

    fn load(&self, key: &str) -> Result<SpriteImage, String> {
        let key = SpriteKey::parse(key).map_err(|error| format!("invalid_key:{error}"))?;
        load_sprite_rgba(&key.image_path(&self.sprite_dir))
    }
}

fn load_sprite_rgba(path: &Path) -> Result<SpriteImage, String> {
    let reader = ImageReader::open(path).map_err(|error| format!("file_open_failed:{error}"))?;
    let decoded = reader
        .decode()
        .map_err(|error| format!("decode_failed:{error}"))?;
    let image = decoded.to_rgba8();
    Ok(SpriteImage {
        width: image.width(),
        height: image.height(),
        rgba: image.into_raw(),
    })
}

/// Draws the scene onto a fixed-size canvas that `pixels` scales to the
/// window surface, so world coordinates stay in canvas pixels.
pub struct Renderer {
    pixels: Pixels<'static>,
    canvas_width: u32,
    canvas_height: u32,
    sprites: SpriteCache,
}

impl Renderer {
    pub fn new(
        window: Arc<Window>,
        canvas_width: u32,
        canvas_height: u32,
        sprite_dir: PathBuf,
    ) -> Result<Self, Error> {
        let surface_size = window.inner_size();
        let surface = SurfaceTexture::new(surface_size.width, surface_size.height, window);
        let pixels = Pixels::new(canvas_width, canvas_height, surface)?;
        Ok(Self {
            pixels,
            canvas_width,
            canvas_height,
            sprites: SpriteCache::new(sprite_dir),
        })
    }

    pub fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), TextureError> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        self.pixels.resize_surface(width, height)
    }

    pub(crate) fn render_world(
        &mut self,
        world: &SceneWorld,
        overlay: Option<&OverlayData>,
    ) -> Result<(), Error> {
        let width = self.canvas_width;
        let height = self.canvas_height;
        let frame = self.pixels.frame_mut();
        draw_scene(frame, width, height, world, &mut self.sprites);
        if let Some(overlay) = overlay {
            draw_overlay(frame, width, height, overlay);
        }
        self.pixels.render()
    }
}

/// Entities in spawn order, then the dialogue box on top.
pub(crate) fn draw_scene(
    frame: &mut [u8],
    width: u32,
    height: u32,
    world: &SceneWorld,
    sprites: &mut SpriteCache,
) {
    clear(frame, CLEAR_COLOR);

    for entity in world.entities() {
        let dest = PixelRect::from_world(&entity.bounds);
        match &entity.renderable.kind {
            RenderableKind::Solid(color) => fill_rect(frame, width, height, dest, *color),
            RenderableKind::Sprite(key) => {
                if let Some(sprite) = sprites.get(key) {
                    blit_scaled(frame, width, height, sprite, dest);
                }
            }
        }
    }

    if let Some(model) = world.state().dialogue.render() {
        draw_dialogue_box(frame, width, height, &model);
    }
}
