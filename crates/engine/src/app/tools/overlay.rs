use crate::app::rendering::raster::{fill_rect, outline_rect, PixelRect};
use crate::app::rendering::text::{draw_text_clipped, TextMetrics};
use crate::app::{LoopMetricsSnapshot, Vec2};
use crate::dialogue::DialogueSnapshot;

const OVERLAY_TEXT: TextMetrics = TextMetrics::new(2);
const OVERLAY_MARGIN: i32 = 8;
const OVERLAY_INSET: i32 = 6;
const TEXT_PRIMARY_COLOR: [u8; 4] = [244, 248, 252, 255];
const TEXT_DIM_COLOR: [u8; 4] = [176, 198, 220, 255];
const PANEL_BG_COLOR: [u8; 4] = [10, 12, 16, 255];
const PANEL_BORDER_COLOR: [u8; 4] = [92, 106, 126, 255];
const PERF_SECTION_LABEL: &str = "Perf";
const WORLD_SECTION_LABEL: &str = "World";
const DIALOGUE_SECTION_LABEL: &str = "Dialogue";

#[derive(Debug, Clone)]
pub(crate) struct OverlayData {
    pub metrics: LoopMetricsSnapshot,
    pub render_fps_cap: Option<u32>,
    pub slow_frame_delay_ms: u64,
    pub entity_count: usize,
    pub player_position: Option<Vec2>,
    pub dialogue: DialogueSnapshot,
    pub flags: Vec<&'static str>,
}

/// Debug panel anchored to the top-right corner of the canvas.
pub(crate) fn draw_overlay(frame: &mut [u8], width: u32, height: u32, data: &OverlayData) {
    if width == 0 || height == 0 {
        return;
    }

    let lines = build_overlay_lines(data);
    let longest = lines
        .iter()
        .map(|line| OVERLAY_TEXT.text_width(line))
        .max()
        .unwrap_or(0);
    let panel = PixelRect {
        x: width as i32 - OVERLAY_MARGIN - longest - OVERLAY_INSET * 2,
        y: OVERLAY_MARGIN,
        width: longest + OVERLAY_INSET * 2,
        height: lines.len() as i32 * OVERLAY_TEXT.line_advance() + OVERLAY_INSET * 2,
    };
    fill_rect(frame, width, height, panel, PANEL_BG_COLOR);
    outline_rect(frame, width, height, panel, PANEL_BORDER_COLOR);

    let x = panel.x + OVERLAY_INSET;
    let mut y = panel.y + OVERLAY_INSET;
    for line in &lines {
        draw_text_clipped(frame, width, height, x, y, line, line_color(line), OVERLAY_TEXT);
        y += OVERLAY_TEXT.line_advance();
    }
}

fn build_overlay_lines(data: &OverlayData) -> Vec<String> {
    let mut lines = vec![
        PERF_SECTION_LABEL.to_string(),
        format_fps_line(data.metrics.fps, data.render_fps_cap, data.slow_frame_delay_ms),
        format!(
            "Frame: {:.2} ms (max {:.1})",
            data.metrics.frame_time_ms, data.metrics.worst_frame_ms
        ),
        WORLD_SECTION_LABEL.to_string(),
        format!("Entities: {}", data.entity_count),
        match data.player_position {
            Some(position) => format!("Player: {:.0},{:.0}", position.x, position.y),
            None => "Player: none".to_string(),
        },
        DIALOGUE_SECTION_LABEL.to_string(),
    ];

    let dialogue = &data.dialogue;
    if dialogue.visible {
        lines.push(format!(
            "Line: {}/{}",
            dialogue.line_index + 1,
            dialogue.line_count
        ));
        lines.push(format!(
            "Reveal: {} Sel: {}",
            dialogue.reveal_index, dialogue.selected_option
        ));
    } else {
        lines.push("Idle".to_string());
    }

    if data.flags.is_empty() {
        lines.push("Flags: none".to_string());
    } else {
        lines.push("Flags:".to_string());
        lines.extend(data.flags.iter().map(|flag| format!(" {flag}")));
    }

    lines
}

fn line_color(line: &str) -> [u8; 4] {
    if matches!(
        line,
        PERF_SECTION_LABEL | WORLD_SECTION_LABEL | DIALOGUE_SECTION_LABEL
    ) {
        TEXT_DIM_COLOR
    } else {
        TEXT_PRIMARY_COLOR
    }
}

fn format_fps_line(current_fps: f32, cap: Option<u32>, slow_frame_delay_ms: u64) -> String {
    let cap_text = match cap {
        Some(value) => value.to_string(),
        None => "inf".to_string(),
    };
    format!("[{current_fps:.0} / {cap_text}] dbg+{slow_frame_delay_ms}ms")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> OverlayData {
        OverlayData {
            metrics: LoopMetricsSnapshot {
                fps: 59.6,
                frame_time_ms: 16.7,
                worst_frame_ms: 21.0,
                dialogue_share: 0.0,
            },
            render_fps_cap: None,
            slow_frame_delay_ms: 0,
            entity_count: 4,
            player_position: Some(Vec2::new(100.0, 100.0)),
            dialogue: DialogueSnapshot::default(),
            flags: Vec::new(),
        }
    }

    #[test]
    fn idle_overlay_lists_perf_world_and_dialogue_sections() {
        let lines = build_overlay_lines(&sample());
        assert_eq!(lines[0], "Perf");
        assert_eq!(lines[1], "[60 / inf] dbg+0ms");
        assert!(lines.contains(&"Entities: 4".to_string()));
        assert!(lines.contains(&"Player: 100,100".to_string()));
        assert!(lines.contains(&"Idle".to_string()));
        assert_eq!(lines.last().map(String::as_str), Some("Flags: none"));
    }

    #[test]
    fn active_dialogue_and_flags_are_listed() {
        let mut data = sample();
        data.dialogue = DialogueSnapshot {
            visible: true,
            line_index: 1,
            line_count: 3,
            reveal_index: 7,
            selected_option: 0,
        };
        data.flags = vec!["scissors_taken", "wall_pushed"];
        let lines = build_overlay_lines(&data);
        assert!(lines.contains(&"Line: 2/3".to_string()));
        assert!(lines.contains(&"Reveal: 7 Sel: 0".to_string()));
        assert!(lines.contains(&" scissors_taken".to_string()));
        assert!(lines.contains(&" wall_pushed".to_string()));
    }

    #[test]
    fn fps_line_formats_cap_on_and_debug_delay() {
        assert_eq!(format_fps_line(143.6, Some(144), 5), "[144 / 144] dbg+5ms");
    }

    #[test]
    fn draw_overlay_paints_panel_in_top_right() {
        let width = 640u32;
        let height = 480u32;
        let mut frame = vec![0u8; (width * height * 4) as usize];
        draw_overlay(&mut frame, width, height, &sample());

        let margin = OVERLAY_MARGIN as u32;
        let offset = ((margin * width + (width - margin - 1)) * 4) as usize;
        assert_eq!(&frame[offset..offset + 4], &PANEL_BORDER_COLOR);
        assert!(frame[..4].iter().all(|byte| *byte == 0));
    }

    #[test]
    fn tiny_canvas_is_safe() {
        let mut frame = vec![0u8; 4];
        draw_overlay(&mut frame, 1, 1, &sample());
        let mut empty = Vec::new();
        draw_overlay(&mut empty, 0, 0, &sample());
    }
}
