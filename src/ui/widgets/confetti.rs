//! Celebratory confetti overlay for the completion screen.
//!
//! Purely presentational: a deterministic scatter of colored glyphs seeded
//! from the animation frame, so each tick redraws a slightly different
//! pattern without any allocation of background tasks.

use ratatui::prelude::*;

const GLYPHS: &[char] = &['*', '•', '·', '+', 'o'];
const COLORS: &[Color] = &[
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Magenta,
    Color::Blue,
];

/// Confetti overlay widget
pub struct ConfettiWidget {
    /// Animation frame, advanced by the event-loop tick
    frame: u64,
}

impl ConfettiWidget {
    /// Create the overlay for a given animation frame
    pub fn new(frame: u64) -> Self {
        Self { frame }
    }

    /// Small xorshift step for a deterministic pseudo-random stream
    fn next(state: &mut u64) -> u64 {
        let mut x = *state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        *state = x;
        x
    }
}

impl Widget for ConfettiWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let mut state = self.frame.wrapping_mul(0x9E37_79B9_7F4A_7C15) | 1;
        // Roughly one glyph per 12 cells keeps the screen readable
        let count = (u32::from(area.width) * u32::from(area.height) / 12).max(1);

        for _ in 0..count {
            let x = area.x + (Self::next(&mut state) % u64::from(area.width)) as u16;
            let y = area.y + (Self::next(&mut state) % u64::from(area.height)) as u16;
            let glyph = GLYPHS[(Self::next(&mut state) as usize) % GLYPHS.len()];
            let color = COLORS[(Self::next(&mut state) as usize) % COLORS.len()];

            buf[(x, y)]
                .set_char(glyph)
                .set_style(Style::default().fg(color));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_stays_in_bounds() {
        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(area);
        ConfettiWidget::new(42).render(area, &mut buf);
        // Reaching here without a panic means every write was in bounds
    }

    #[test]
    fn test_render_zero_area_is_noop() {
        let area = Rect::new(0, 0, 0, 0);
        let mut buf = Buffer::empty(area);
        ConfettiWidget::new(1).render(area, &mut buf);
    }

    #[test]
    fn test_frames_differ() {
        let area = Rect::new(0, 0, 20, 10);
        let mut a = Buffer::empty(area);
        let mut b = Buffer::empty(area);
        ConfettiWidget::new(1).render(area, &mut a);
        ConfettiWidget::new(2).render(area, &mut b);
        assert_ne!(a, b);
    }
}
