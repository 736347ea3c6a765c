//! Bitmap Text Rendering
//!
//! Procedural 5x7 glyphs drawn with SDL2 rectangles. The set only covers what
//! the HUD prints: digits for the score and the letters of the hint lines.
//! Anything else renders as a blank cell.

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

const GLYPH_COLUMNS: u32 = 5;
/// Glyph width plus one column of spacing
const CELL_COLUMNS: u32 = GLYPH_COLUMNS + 1;

/// 5x7 pattern for `c`, one byte per row, bit 4 is the leftmost pixel.
fn glyph(c: char) -> Option<[u8; 7]> {
    let rows = match c.to_ascii_uppercase() {
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10001, 0b10001, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01110, 0b10001, 0b10000, 0b01110, 0b00001, 0b10001, 0b01110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10101, 0b11011, 0b10001],
        ':' => [0b00000, 0b00000, 0b00100, 0b00000, 0b00100, 0b00000, 0b00000],
        _ => return None,
    };
    Some(rows)
}

/// Width in pixels of `text` drawn at `scale`, without trailing spacing.
pub fn text_width(text: &str, scale: u32) -> u32 {
    let chars = text.chars().count() as u32;
    if chars == 0 {
        return 0;
    }
    (chars * CELL_COLUMNS - 1) * scale
}

/// Draws `text` with its top-left corner at `(x, y)`.
pub fn draw_text(
    canvas: &mut Canvas<Window>,
    text: &str,
    x: i32,
    y: i32,
    color: Color,
    scale: u32,
) -> Result<(), String> {
    canvas.set_draw_color(color);

    let pixel = scale as i32;
    let cell = (CELL_COLUMNS * scale) as i32;

    for (i, c) in text.chars().enumerate() {
        let Some(rows) = glyph(c) else {
            continue;
        };
        let char_x = x + i as i32 * cell;

        for (row, &bits) in rows.iter().enumerate() {
            for col in 0..GLYPH_COLUMNS as i32 {
                if (bits >> (4 - col)) & 1 == 1 {
                    canvas.fill_rect(Rect::new(
                        char_x + col * pixel,
                        y + row as i32 * pixel,
                        scale,
                        scale,
                    ))?;
                }
            }
        }
    }

    Ok(())
}

/// Draws `text` horizontally centered on `center_x` with a dark drop shadow.
pub fn draw_text_centered(
    canvas: &mut Canvas<Window>,
    text: &str,
    center_x: i32,
    y: i32,
    color: Color,
    scale: u32,
) -> Result<(), String> {
    let x = center_x - (text_width(text, scale) / 2) as i32;
    let shadow = scale.div_ceil(2).max(1) as i32;

    draw_text(canvas, text, x + shadow, y + shadow, Color::RGBA(0, 0, 0, 160), scale)?;
    draw_text(canvas, text, x, y, color, scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_digit_has_a_glyph() {
        for c in '0'..='9' {
            assert!(glyph(c).is_some(), "missing glyph for {}", c);
        }
    }

    #[test]
    fn test_hint_letters_covered() {
        for text in ["GAME OVER", "BEST:", "PRESS W TO FLAP", "R TO RESTART"] {
            for c in text.chars().filter(|c| *c != ' ') {
                assert!(glyph(c).is_some(), "missing glyph for {}", c);
            }
        }
        assert!(glyph('?').is_none());
    }

    #[test]
    fn test_text_width() {
        assert_eq!(text_width("", 3), 0);
        assert_eq!(text_width("7", 1), 5);
        assert_eq!(text_width("12", 2), 22);
    }
}
