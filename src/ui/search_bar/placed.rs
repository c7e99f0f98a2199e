//! Absolute placement of one part inside the bar
//!
//! The child is laid out at its full rectangle size and moved to the
//! rectangle's origin, even when that pushes it past the bar's edge. Anything
//! outside the bar is clipped and does not receive the cursor.

use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer;
use iced::advanced::widget::{Operation, Tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{event, mouse, Element, Event, Length, Rectangle, Size};

pub struct Placed<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    rect: Rectangle,
}

impl<'a, Message, Theme, Renderer> Placed<'a, Message, Theme, Renderer> {
    pub fn new(content: impl Into<Element<'a, Message, Theme, Renderer>>, rect: Rectangle) -> Self {
        Self {
            content: content.into(),
            rect,
        }
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer> for Placed<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        Size::new(Length::Fill, Length::Fill)
    }

    fn children(&self) -> Vec<Tree> {
        vec![Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut Tree) {
        tree.diff_children(std::slice::from_ref(&self.content));
    }

    fn layout(&self, tree: &mut Tree, renderer: &Renderer, limits: &layout::Limits) -> layout::Node {
        let size = limits.resolve(Length::Fill, Length::Fill, Size::ZERO);
        let child_limits = layout::Limits::new(Size::ZERO, self.rect.size());

        let child = self
            .content
            .as_widget()
            .layout(&mut tree.children[0], renderer, &child_limits)
            .move_to(self.rect.position());

        layout::Node::with_children(size, vec![child])
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let Some(child) = layout.children().next() else {
            return;
        };
        let Some(clip) = layout.bounds().intersection(viewport) else {
            return;
        };

        renderer.with_layer(clip, |renderer| {
            self.content
                .as_widget()
                .draw(&tree.children[0], renderer, theme, style, child, cursor, &clip);
        });
    }

    fn operate(
        &self,
        tree: &mut Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn Operation,
    ) {
        if let Some(child) = layout.children().next() {
            self.content
                .as_widget()
                .operate(&mut tree.children[0], child, renderer, operation);
        }
    }

    fn on_event(
        &mut self,
        tree: &mut Tree,
        event: Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) -> event::Status {
        let Some(child) = layout.children().next() else {
            return event::Status::Ignored;
        };

        self.content.as_widget_mut().on_event(
            &mut tree.children[0],
            event,
            child,
            visible_cursor(cursor, layout.bounds()),
            renderer,
            clipboard,
            shell,
            viewport,
        )
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        let Some(child) = layout.children().next() else {
            return mouse::Interaction::default();
        };

        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            child,
            visible_cursor(cursor, layout.bounds()),
            viewport,
            renderer,
        )
    }
}

/// Hide the cursor from the clipped-off part of the child.
fn visible_cursor(cursor: mouse::Cursor, bounds: Rectangle) -> mouse::Cursor {
    if cursor.is_over(bounds) {
        cursor
    } else {
        mouse::Cursor::Unavailable
    }
}

impl<'a, Message, Theme, Renderer> From<Placed<'a, Message, Theme, Renderer>> for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(placed: Placed<'a, Message, Theme, Renderer>) -> Self {
        Element::new(placed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::widget::Space;
    use iced::{Point, Theme};

    fn child_bounds(rect: Rectangle, bar: Size) -> (Rectangle, Size) {
        let element: Element<'_, (), Theme, ()> = Placed::new(
            Space::new(Length::Fixed(rect.width), Length::Fixed(rect.height)),
            rect,
        )
        .into();
        let mut tree = Tree::new(&element);
        let node = element
            .as_widget()
            .layout(&mut tree, &(), &layout::Limits::new(Size::ZERO, bar));

        (node.children()[0].bounds(), node.size())
    }

    #[test]
    fn test_child_keeps_full_size_past_the_edge() {
        // cancel control halfway out of a 325 wide bar
        let rect = Rectangle::new(Point::new(293.0, 0.0), Size::new(64.0, 46.0));
        let (child, size) = child_bounds(rect, Size::new(325.0, 46.0));

        assert_eq!(size, Size::new(325.0, 46.0));
        assert_eq!(child.x, 293.0);
        assert_eq!(child.width, 64.0);
    }

    #[test]
    fn test_child_fully_outside() {
        let rect = Rectangle::new(Point::new(325.0, 0.0), Size::new(64.0, 46.0));
        let (child, _) = child_bounds(rect, Size::new(325.0, 46.0));

        assert_eq!(child.x, 325.0);
        assert_eq!(child.width, 64.0);
    }

    #[test]
    fn test_cursor_hidden_outside_bar() {
        let bar = Rectangle::new(Point::ORIGIN, Size::new(325.0, 46.0));
        let inside = mouse::Cursor::Available(Point::new(300.0, 20.0));
        let outside = mouse::Cursor::Available(Point::new(340.0, 20.0));

        assert_eq!(visible_cursor(inside, bar), inside);
        assert_eq!(visible_cursor(outside, bar), mouse::Cursor::Unavailable);
    }
}
