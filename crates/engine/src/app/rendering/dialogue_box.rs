use crate::dialogue::{DialogueBody, DialogueRenderModel};

use super::raster::{fill_rect, outline_rect, PixelRect};
use super::text::{draw_text_clipped, wrap_text, TextMetrics};

const BOX_FILL_COLOR: [u8; 4] = [0, 0, 0, 255];
const BOX_BORDER_COLOR: [u8; 4] = [255, 255, 255, 255];
const TEXT_COLOR: [u8; 4] = [255, 255, 255, 255];
const OPTION_DIM_COLOR: [u8; 4] = [170, 170, 170, 255];
const DIALOGUE_TEXT: TextMetrics = TextMetrics::new(2);
const SELECTION_MARKER: &str = "> ";
const OPTION_INDENT: &str = "  ";
const CONTINUE_MARKER: &str = "v";

/// One laid-out row of dialogue text, relative to the box's text origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DialogueRow {
    pub text: String,
    pub color: [u8; 4],
}

/// Lays out the body into rows that fit the box width. Rows past the box
/// height are dropped.
pub(crate) fn layout_rows(model: &DialogueRenderModel) -> Vec<DialogueRow> {
    let inner = inner_rect(model);
    let columns = DIALOGUE_TEXT.columns_in(inner.width);
    let max_rows = (inner.height / DIALOGUE_TEXT.line_advance()).max(1) as usize;

    let mut rows = Vec::new();
    match &model.body {
        DialogueBody::Text { visible, .. } => {
            rows.extend(wrap_text(visible, columns).into_iter().map(|text| DialogueRow {
                text,
                color: TEXT_COLOR,
            }));
        }
        DialogueBody::Question { prompt, options } => {
            rows.extend(wrap_text(prompt, columns).into_iter().map(|text| DialogueRow {
                text,
                color: TEXT_COLOR,
            }));
            let option_columns = columns.saturating_sub(SELECTION_MARKER.len()).max(1);
            for option in options {
                let (prefix, color) = if option.selected {
                    (SELECTION_MARKER, TEXT_COLOR)
                } else {
                    (OPTION_INDENT, OPTION_DIM_COLOR)
                };
                for (index, line) in wrap_text(&option.label, option_columns)
                    .into_iter()
                    .enumerate()
                {
                    let lead = if index == 0 { prefix } else { OPTION_INDENT };
                    rows.push(DialogueRow {
                        text: format!("{lead}{line}"),
                        color,
                    });
                }
            }
        }
    }
    rows.truncate(max_rows);
    rows
}

fn inner_rect(model: &DialogueRenderModel) -> PixelRect {
    let frame = PixelRect::from_world(&model.frame);
    let inset = model.text_inset.round() as i32;
    PixelRect {
        x: frame.x + inset,
        y: frame.y + inset,
        width: (frame.width - inset * 2).max(0),
        height: (frame.height - inset * 2).max(0),
    }
}

pub(crate) fn draw_dialogue_box(
    frame: &mut [u8],
    width: u32,
    height: u32,
    model: &DialogueRenderModel,
) {
    let outer = PixelRect::from_world(&model.frame);
    fill_rect(frame, width, height, outer, BOX_FILL_COLOR);
    outline_rect(frame, width, height, outer, BOX_BORDER_COLOR);

    let inner = inner_rect(model);
    let mut y = inner.y;
    for row in layout_rows(model) {
        draw_text_clipped(frame, width, height, inner.x, y, &row.text, row.color, DIALOGUE_TEXT);
        y += DIALOGUE_TEXT.line_advance();
    }

    if matches!(
        model.body,
        DialogueBody::Text {
            fully_revealed: true,
            ..
        }
    ) {
        let marker_x = inner.x + inner.width - DIALOGUE_TEXT.text_width(CONTINUE_MARKER);
        let marker_y = inner.y + inner.height - DIALOGUE_TEXT.line_advance();
        draw_text_clipped(
            frame,
            width,
            height,
            marker_x,
            marker_y,
            CONTINUE_MARKER,
            TEXT_COLOR,
            DIALOGUE_TEXT,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialogue::OptionView;
    use crate::world::Rect;

    fn model(body: DialogueBody) -> DialogueRenderModel {
        DialogueRenderModel {
            frame: Rect::new(50.0, 300.0, 400.0, 100.0),
            text_inset: 10.0,
            body,
        }
    }

    #[test]
    fn text_rows_wrap_to_box_width() {
        let rows = layout_rows(&model(DialogueBody::Text {
            visible: "Local folktales say it's been here for 700 years.".to_string(),
            fully_revealed: true,
        }));
        assert_eq!(rows.len(), 2);
        for row in &rows {
            assert!(row.text.chars().count() <= 47, "row too wide: {}", row.text);
        }
    }

    #[test]
    fn question_marks_only_the_selected_option() {
        let rows = layout_rows(&model(DialogueBody::Question {
            prompt: "Push it?".to_string(),
            options: vec![
                OptionView {
                    label: "Yes".to_string(),
                    selected: false,
                },
                OptionView {
                    label: "No".to_string(),
                    selected: true,
                },
            ],
        }));
        let texts: Vec<&str> = rows.iter().map(|row| row.text.as_str()).collect();
        assert_eq!(texts, vec!["Push it?", "  Yes", "> No"]);
        assert_eq!(rows[1].color, OPTION_DIM_COLOR);
        assert_eq!(rows[2].color, TEXT_COLOR);
    }

    #[test]
    fn rows_beyond_box_height_are_dropped() {
        let options = (0..10)
            .map(|index| OptionView {
                label: format!("option {index}"),
                selected: index == 0,
            })
            .collect();
        let rows = layout_rows(&model(DialogueBody::Question {
            prompt: "Pick".to_string(),
            options,
        }));
        assert_eq!(rows.len(), 5);
    }

    #[test]
    fn drawing_paints_border_and_fill() {
        let width = 500;
        let height = 420;
        let mut frame = vec![7u8; (width * height * 4) as usize];
        draw_dialogue_box(
            &mut frame,
            width,
            height,
            &model(DialogueBody::Text {
                visible: String::new(),
                fully_revealed: false,
            }),
        );
        let at = |x: u32, y: u32| {
            let offset = ((y * width + x) * 4) as usize;
            [frame[offset], frame[offset + 1], frame[offset + 2], frame[offset + 3]]
        };
        assert_eq!(at(50, 300), BOX_BORDER_COLOR);
        assert_eq!(at(60, 340), BOX_FILL_COLOR);
        assert_eq!(at(10, 10), [7; 4]);
    }
}
