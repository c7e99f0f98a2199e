//! Text measurement used by the layout pass

use iced::advanced::graphics::text::Paragraph;
use iced::advanced::text::{self, Paragraph as _};
use iced::alignment::{Horizontal, Vertical};
use iced::{Font, Pixels, Size};

/// Measures single-line text.
pub trait TextMeasure {
    fn measure(&self, text: &str, font_size: f32) -> Size;
}

/// Shapes the text the same way the placeholder label is drawn.
#[derive(Debug, Clone, Copy)]
pub struct Shaped {
    pub font: Font,
    pub shaping: text::Shaping,
}

impl Default for Shaped {
    fn default() -> Self {
        Self {
            font: Font::DEFAULT,
            shaping: text::Shaping::Advanced,
        }
    }
}

impl TextMeasure for Shaped {
    fn measure(&self, content: &str, font_size: f32) -> Size {
        if content.is_empty() {
            return Size::ZERO;
        }

        let paragraph = Paragraph::with_text(text::Text {
            content,
            bounds: Size::INFINITY,
            size: Pixels(font_size),
            line_height: text::LineHeight::default(),
            font: self.font,
            horizontal_alignment: Horizontal::Left,
            vertical_alignment: Vertical::Top,
            shaping: self.shaping,
            wrapping: text::Wrapping::None,
        });

        let bounds = paragraph.min_bounds();
        Size::new(bounds.width.ceil(), bounds.height.ceil())
    }
}
