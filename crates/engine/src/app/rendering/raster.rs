//! Clipped RGBA drawing primitives over a `pixels` frame buffer.

pub(crate) fn write_pixel_clipped(
    frame: &mut [u8],
    width: u32,
    height: u32,
    x: i32,
    y: i32,
    color: [u8; 4],
) {
    if x < 0 || y < 0 || x >= width as i32 || y >= height as i32 {
        return;
    }
    let Some(pixel_offset) = (y as usize)
        .checked_mul(width as usize)
        .and_then(|row| row.checked_add(x as usize))
    else {
        return;
    };
    let Some(byte_offset) = pixel_offset.checked_mul(4) else {
        return;
    };
    let Some(end) = byte_offset.checked_add(4) else {
        return;
    };
    if end > frame.len() {
        return;
    }
    frame[byte_offset..end].copy_from_slice(&color);
}

pub(crate) fn clear(frame: &mut [u8], color: [u8; 4]) {
    for pixel in frame.chunks_exact_mut(4) {
        pixel.copy_from_slice(&color);
    }
}

/// Pixel-space rectangle, top-left origin with y growing down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PixelRect {
    pub(crate) fn from_world(rect: &crate::world::Rect) -> Self {
        Self {
            x: rect.x.round() as i32,
            y: rect.y.round() as i32,
            width: rect.width.round() as i32,
            height: rect.height.round() as i32,
        }
    }
}

pub(crate) fn fill_rect(
    frame: &mut [u8],
    width: u32,
    height: u32,
    rect: PixelRect,
    color: [u8; 4],
) {
    let start_x = rect.x.max(0);
    let start_y = rect.y.max(0);
    let end_x = rect.x.saturating_add(rect.width).min(width as i32);
    let end_y = rect.y.saturating_add(rect.height).min(height as i32);
    if end_x <= start_x || end_y <= start_y {
        return;
    }
    for y in start_y..end_y {
        for x in start_x..end_x {
            write_pixel_clipped(frame, width, height, x, y, color);
        }
    }
}

pub(crate) fn outline_rect(
    frame: &mut [u8],
    width: u32,
    height: u32,
    rect: PixelRect,
    color: [u8; 4],
) {
    if rect.width <= 1 || rect.height <= 1 {
        return;
    }
    let edges = [
        PixelRect { height: 1, ..rect },
        PixelRect {
            y: rect.y + rect.height - 1,
            height: 1,
            ..rect
        },
        PixelRect { width: 1, ..rect },
        PixelRect {
            x: rect.x + rect.width - 1,
            width: 1,
            ..rect
        },
    ];
    for edge in edges {
        fill_rect(frame, width, height, edge, color);
    }
}

/// Decoded RGBA8 image.
#[derive(Debug, Clone)]
pub(crate) struct SpriteImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Nearest-neighbour blit of `sprite` stretched to fill `dest`. Fully
/// transparent source pixels are skipped.
pub(crate) fn blit_scaled(
    frame: &mut [u8],
    width: u32,
    height: u32,
    sprite: &SpriteImage,
    dest: PixelRect,
) {
    if sprite.width == 0 || sprite.height == 0 || dest.width <= 0 || dest.height <= 0 {
        return;
    }
    if sprite.rgba.len() < sprite.width as usize * sprite.height as usize * 4 {
        return;
    }

    let draw_left = dest.x.max(0);
    let draw_top = dest.y.max(0);
    let draw_right = dest.x.saturating_add(dest.width).min(width as i32);
    let draw_bottom = dest.y.saturating_add(dest.height).min(height as i32);
    if draw_left >= draw_right || draw_top >= draw_bottom {
        return;
    }

    let scale_x = sprite.width as f32 / dest.width as f32;
    let scale_y = sprite.height as f32 / dest.height as f32;
    for out_y in draw_top..draw_bottom {
        let src_y = (((out_y - dest.y) as f32 * scale_y) as u32).min(sprite.height - 1);
        for out_x in draw_left..draw_right {
            let src_x = (((out_x - dest.x) as f32 * scale_x) as u32).min(sprite.width - 1);
            let offset = (src_y as usize * sprite.width as usize + src_x as usize) * 4;
            let texel = [
                sprite.rgba[offset],
                sprite.rgba[offset + 1],
                sprite.rgba[offset + 2],
                sprite.rgba[offset + 3],
            ];
            if texel[3] == 0 {
                continue;
            }
            write_pixel_clipped(frame, width, height, out_x, out_y, texel);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(frame: &[u8], width: u32, x: u32, y: u32) -> [u8; 4] {
        let offset = ((y * width + x) * 4) as usize;
        [
            frame[offset],
            frame[offset + 1],
            frame[offset + 2],
            frame[offset + 3],
        ]
    }

    #[test]
    fn write_pixel_ignores_out_of_bounds() {
        let mut frame = vec![0u8; 4 * 4 * 4];
        write_pixel_clipped(&mut frame, 4, 4, -1, 0, [9; 4]);
        write_pixel_clipped(&mut frame, 4, 4, 4, 0, [9; 4]);
        write_pixel_clipped(&mut frame, 4, 4, 0, 4, [9; 4]);
        assert!(frame.iter().all(|byte| *byte == 0));

        write_pixel_clipped(&mut frame, 4, 4, 3, 3, [9; 4]);
        assert_eq!(pixel(&frame, 4, 3, 3), [9; 4]);
    }

    #[test]
    fn fill_rect_clips_to_frame() {
        let mut frame = vec![0u8; 4 * 4 * 4];
        fill_rect(
            &mut frame,
            4,
            4,
            PixelRect {
                x: 2,
                y: 2,
                width: 10,
                height: 10,
            },
            [7; 4],
        );
        assert_eq!(pixel(&frame, 4, 3, 3), [7; 4]);
        assert_eq!(pixel(&frame, 4, 1, 1), [0; 4]);
    }

    #[test]
    fn outline_leaves_interior_untouched() {
        let mut frame = vec![0u8; 5 * 5 * 4];
        outline_rect(
            &mut frame,
            5,
            5,
            PixelRect {
                x: 0,
                y: 0,
                width: 5,
                height: 5,
            },
            [255; 4],
        );
        assert_eq!(pixel(&frame, 5, 0, 0), [255; 4]);
        assert_eq!(pixel(&frame, 5, 4, 4), [255; 4]);
        assert_eq!(pixel(&frame, 5, 2, 2), [0; 4]);
    }

    #[test]
    fn blit_stretches_and_skips_transparent_texels() {
        let sprite = SpriteImage {
            width: 2,
            height: 1,
            rgba: vec![10, 20, 30, 255, 0, 0, 0, 0],
        };
        let mut frame = vec![0u8; 4 * 2 * 4];
        blit_scaled(
            &mut frame,
            4,
            2,
            &sprite,
            PixelRect {
                x: 0,
                y: 0,
                width: 4,
                height: 2,
            },
        );
        assert_eq!(pixel(&frame, 4, 0, 0), [10, 20, 30, 255]);
        assert_eq!(pixel(&frame, 4, 1, 1), [10, 20, 30, 255]);
        assert_eq!(pixel(&frame, 4, 2, 0), [0; 4]);
        assert_eq!(pixel(&frame, 4, 3, 1), [0; 4]);
    }

    #[test]
    fn blit_rejects_truncated_pixel_data() {
        let sprite = SpriteImage {
            width: 4,
            height: 4,
            rgba: vec![255; 8],
        };
        let mut frame = vec![0u8; 4 * 4 * 4];
        blit_scaled(
            &mut frame,
            4,
            4,
            &sprite,
            PixelRect {
                x: 0,
                y: 0,
                width: 4,
                height: 4,
            },
        );
        assert!(frame.iter().all(|byte| *byte == 0));
    }
}
