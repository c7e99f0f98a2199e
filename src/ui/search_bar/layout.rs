//! Layout pass for the search bar
//!
//! A pure function of the bar's bounds, the measured sizes of its parts and
//! the two state flags. Animation lives in `transition`; this module only
//! knows where everything ends up.

use iced::{Point, Rectangle, Size};

/// Left inset of the icon while editing
pub const ICON_INSET: f32 = 16.0;
/// Gap between icon and label/input while editing
pub const LABEL_GAP: f32 = 8.0;
/// Gap between icon and label in the centered idle layout.
///
/// Used both for the width of the centered unit and for placing the label,
/// so the unit is exactly centered. Editing uses [`LABEL_GAP`] instead.
pub const IDLE_GAP: f32 = 5.0;
pub const CLEAR_SIZE: f32 = 20.0;
pub const CLEAR_INSET: f32 = 16.0;
/// Space kept free for the clear button when capping the label
pub const LABEL_MARGIN: f32 = 50.0;
/// Extra label margin when the cancel control is showing
pub const CANCEL_LABEL_MARGIN: f32 = 18.0;
/// Gap between the shrunken background and the cancel control
pub const CANCEL_GAP: f32 = 2.0;
/// Space right of the input reserved for the clear button
const INPUT_TRAILING: f32 = CLEAR_INSET + CLEAR_SIZE + CLEAR_INSET;

/// Measured sizes of the bar's parts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parts {
    pub icon: Size,
    pub label: Size,
    /// `None` when the bar has no cancel control
    pub cancel_width: Option<f32>,
}

/// The two flags that select a layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct State {
    pub editing: bool,
    pub empty: bool,
}

/// One complete placement of every part, plus visibility
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub background: Rectangle,
    pub icon: Rectangle,
    pub label: Rectangle,
    pub input: Rectangle,
    pub clear: Rectangle,
    pub cancel: Option<Rectangle>,
    pub label_alpha: f32,
    pub cancel_alpha: f32,
    pub clear_visible: bool,
}

/// Compute the frame for `bounds` in the given state.
pub fn compute(bounds: Size, parts: &Parts, state: State) -> Frame {
    let cancel_active = state.editing && parts.cancel_width.is_some();
    let cancel_offset = match parts.cancel_width {
        Some(width) if cancel_active => width + CANCEL_GAP,
        _ => 0.0,
    };

    let background = Rectangle::new(
        Point::ORIGIN,
        Size::new((bounds.width - cancel_offset).max(0.0), bounds.height),
    );

    let icon_y = (bounds.height - parts.icon.height) / 2.0;
    let label_y = (bounds.height - parts.label.height) / 2.0;

    let (icon, label) = if state.editing {
        let icon = Rectangle::new(Point::new(ICON_INSET, icon_y), parts.icon);

        let mut cap = bounds.width - LABEL_MARGIN - parts.icon.width;
        if let Some(width) = parts.cancel_width.filter(|_| cancel_active) {
            cap -= width + CANCEL_LABEL_MARGIN;
        }
        let label = Rectangle::new(
            Point::new(icon.x + icon.width + LABEL_GAP, label_y),
            Size::new(parts.label.width.min(cap).max(0.0), parts.label.height),
        );
        (icon, label)
    } else {
        let room = (bounds.width - 2.0 * ICON_INSET - parts.icon.width - IDLE_GAP).max(0.0);
        let label_width = parts.label.width.min(room);
        let total = parts.icon.width + IDLE_GAP + label_width;

        let icon = Rectangle::new(
            Point::new((bounds.width - total) / 2.0, icon_y),
            parts.icon,
        );
        let label = Rectangle::new(
            Point::new(icon.x + icon.width + IDLE_GAP, label_y),
            Size::new(label_width, parts.label.height),
        );
        (icon, label)
    };

    let icon_right = icon.x + icon.width;
    let input = Rectangle::new(
        Point::new(icon_right + LABEL_GAP, 0.0),
        Size::new(
            (bounds.width - icon_right - INPUT_TRAILING - cancel_offset).max(0.0),
            bounds.height,
        ),
    );

    let clear = Rectangle::new(
        Point::new(
            bounds.width - CLEAR_SIZE - CLEAR_INSET - cancel_offset,
            (bounds.height - CLEAR_SIZE) / 2.0,
        ),
        Size::new(CLEAR_SIZE, CLEAR_SIZE),
    );

    let cancel = parts.cancel_width.map(|width| {
        let x = if cancel_active {
            bounds.width - width
        } else {
            bounds.width
        };
        Rectangle::new(Point::new(x, 0.0), Size::new(width, bounds.height))
    });

    Frame {
        background,
        icon,
        label,
        input,
        clear,
        cancel,
        label_alpha: if state.empty { 1.0 } else { 0.0 },
        cancel_alpha: if cancel_active { 1.0 } else { 0.0 },
        clear_visible: !state.empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.001;

    fn parts(cancel_width: Option<f32>) -> Parts {
        Parts {
            icon: Size::new(20.0, 20.0),
            label: Size::new(96.0, 21.0),
            cancel_width,
        }
    }

    fn states() -> [State; 4] {
        [
            State { editing: false, empty: true },
            State { editing: false, empty: false },
            State { editing: true, empty: true },
            State { editing: true, empty: false },
        ]
    }

    fn contains(outer: Size, rect: Rectangle) -> bool {
        rect.x >= -EPSILON
            && rect.y >= -EPSILON
            && rect.x + rect.width <= outer.width + EPSILON
            && rect.y + rect.height <= outer.height + EPSILON
    }

    #[test]
    fn test_parts_stay_inside_bounds() {
        for width in [200.0, 325.0, 390.0, 1024.0] {
            let bounds = Size::new(width, 46.0);
            for cancel in [None, Some(64.0)] {
                for state in states() {
                    let frame = compute(bounds, &parts(cancel), state);
                    for rect in [frame.background, frame.icon, frame.label, frame.input, frame.clear] {
                        assert!(contains(bounds, rect), "{:?} outside {:?} in {:?}", rect, bounds, state);
                    }
                }
            }
        }
    }

    #[test]
    fn test_idle_layout_is_centered() {
        for width in [200.0, 325.0, 640.0] {
            let frame = compute(Size::new(width, 46.0), &parts(None), State { editing: false, empty: true });
            let left = frame.icon.x;
            let right = width - (frame.label.x + frame.label.width);
            assert!((left - right).abs() < EPSILON, "left {} right {}", left, right);
            assert!((frame.label.x - (frame.icon.x + frame.icon.width + IDLE_GAP)).abs() < EPSILON);
        }
    }

    #[test]
    fn test_vertical_centering() {
        let frame = compute(Size::new(325.0, 46.0), &parts(None), State { editing: false, empty: true });
        assert_eq!(frame.icon.y, 13.0);
        assert_eq!(frame.label.y, 12.5);
        assert_eq!(frame.clear.y, 13.0);
        assert_eq!(frame.input.y, 0.0);
        assert_eq!(frame.input.height, 46.0);
    }

    #[test]
    fn test_editing_layout_pins_left() {
        let frame = compute(Size::new(325.0, 46.0), &parts(None), State { editing: true, empty: true });
        assert_eq!(frame.icon.x, ICON_INSET);
        assert_eq!(frame.label.x, ICON_INSET + 20.0 + LABEL_GAP);
        assert_eq!(frame.input.x, frame.label.x);
        // trailing 52 is the clear button plus its insets
        assert_eq!(frame.input.width, 325.0 - 36.0 - 52.0);
        assert_eq!(frame.clear.x, 325.0 - CLEAR_SIZE - CLEAR_INSET);
    }

    #[test]
    fn test_long_label_is_capped_while_editing() {
        let mut long = parts(None);
        long.label.width = 900.0;
        let frame = compute(Size::new(325.0, 46.0), &long, State { editing: true, empty: true });
        assert_eq!(frame.label.width, 325.0 - LABEL_MARGIN - 20.0);

        long.cancel_width = Some(64.0);
        let frame = compute(Size::new(325.0, 46.0), &long, State { editing: true, empty: true });
        assert_eq!(frame.label.width, 325.0 - LABEL_MARGIN - 20.0 - 64.0 - CANCEL_LABEL_MARGIN);
    }

    #[test]
    fn test_visibility_follows_emptiness() {
        for state in states() {
            let frame = compute(Size::new(325.0, 46.0), &parts(None), state);
            assert_eq!(frame.clear_visible, !state.empty);
            assert_eq!(frame.label_alpha, if state.empty { 1.0 } else { 0.0 });
        }
    }

    #[test]
    fn test_cancel_control_slides_in_while_editing() {
        let bounds = Size::new(325.0, 46.0);

        let idle = compute(bounds, &parts(Some(64.0)), State { editing: false, empty: true });
        let cancel = idle.cancel.unwrap();
        assert_eq!(cancel.x, 325.0);
        assert_eq!(idle.cancel_alpha, 0.0);
        assert_eq!(idle.background.width, 325.0);

        let editing = compute(bounds, &parts(Some(64.0)), State { editing: true, empty: true });
        let cancel = editing.cancel.unwrap();
        assert_eq!(cancel.x, 325.0 - 64.0);
        assert_eq!(editing.cancel_alpha, 1.0);
        assert_eq!(editing.background.width, 325.0 - 64.0 - CANCEL_GAP);
        assert_eq!(editing.clear.x, 325.0 - CLEAR_SIZE - CLEAR_INSET - 64.0 - CANCEL_GAP);
        assert!(editing.clear.x + editing.clear.width <= editing.background.width);
    }

    #[test]
    fn test_no_cancel_without_config() {
        let frame = compute(Size::new(325.0, 46.0), &parts(None), State { editing: true, empty: false });
        assert!(frame.cancel.is_none());
        assert_eq!(frame.cancel_alpha, 0.0);
        assert_eq!(frame.background.width, 325.0);
    }

    #[test]
    fn test_tiny_bounds_do_not_go_negative() {
        let frame = compute(Size::new(40.0, 20.0), &parts(Some(64.0)), State { editing: true, empty: false });
        assert!(frame.background.width >= 0.0);
        assert!(frame.label.width >= 0.0);
        assert!(frame.input.width >= 0.0);
    }
}
