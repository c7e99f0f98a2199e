//! Host screen: a single search bar inset from the window edges
//!
//! The host owns the bar, keeps its frame in sync with the window size and
//! turns Escape or clicks outside the bar into a dismiss.

use iced::mouse;
use iced::widget::container;
use iced::{event, keyboard, window, Background, Element, Event, Length, Padding, Point, Rectangle, Size, Subscription, Task, Theme};
use iced::keyboard::Key;

use crate::config::AppConfig;
use crate::ui::search_bar::{self, SearchBar};
use crate::ui::theme::LightTheme;

/// Left/right inset of the bar
pub const BAR_INSET: f32 = 25.0;
/// Distance from the top of the window
pub const BAR_TOP: f32 = 100.0;
pub const BAR_HEIGHT: f32 = 46.0;

/// Initial window size (a phone-sized portrait window)
pub const WINDOW_SIZE: Size = Size::new(390.0, 844.0);

// ============================================================================
// Application State
// ============================================================================

pub struct Host {
    search_bar: SearchBar,
    window: Size,
}

#[derive(Debug, Clone)]
pub enum Message {
    SearchBar(search_bar::Event),
    IcedEvent(Event),
}

impl Host {
    pub fn new(config: AppConfig, window: Size) -> Self {
        let frame = bar_frame(window);
        let mut search_bar = SearchBar::new(frame.size(), config.search_bar);
        search_bar.set_placeholder(Some(config.placeholder));

        Self { search_bar, window }
    }

    pub fn title(&self) -> String {
        String::from("Slide-in Search")
    }

    pub fn search_bar(&self) -> &SearchBar {
        &self.search_bar
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SearchBar(event) => self.search_bar.update(event).map(Message::SearchBar),
            Message::IcedEvent(event) => self.handle_event(event),
        }
    }

    fn handle_event(&mut self, event: Event) -> Task<Message> {
        match event {
            Event::Window(window::Event::Resized(size)) => {
                tracing::debug!("Window resized to {}x{}", size.width, size.height);
                self.window = size;
                self.search_bar.resize(bar_frame(size).size());
                Task::none()
            }
            Event::Keyboard(keyboard::Event::KeyPressed {
                key: Key::Named(keyboard::key::Named::Escape),
                ..
            })
            | Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                self.update(Message::SearchBar(search_bar::Event::Dismiss))
            }
            _ => Task::none(),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let frame = bar_frame(self.window);

        container(self.search_bar.view().map(Message::SearchBar))
            .padding(Padding {
                top: frame.y,
                right: 0.0,
                bottom: 0.0,
                left: frame.x,
            })
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(Background::Color(LightTheme::SURFACE)),
                ..Default::default()
            })
            .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            event::listen_with(route_event),
            self.search_bar.subscription().map(Message::SearchBar),
        ])
    }

    pub fn theme(&self) -> Theme {
        Theme::Light
    }
}

/// Forward uncaptured events, plus Escape even when the focused input
/// already consumed it to drop its own focus.
fn route_event(event: Event, status: event::Status, _window: window::Id) -> Option<Message> {
    let escape = matches!(
        event,
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(keyboard::key::Named::Escape),
            ..
        })
    );

    (escape || status == event::Status::Ignored).then_some(Message::IcedEvent(event))
}

/// Where the bar sits in a window of the given size.
pub fn bar_frame(window: Size) -> Rectangle {
    Rectangle::new(
        Point::new(BAR_INSET, BAR_TOP),
        Size::new((window.width - 2.0 * BAR_INSET).max(0.0), BAR_HEIGHT),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::keyboard::key::{Code, Named, Physical};
    use iced::keyboard::{Location, Modifiers};

    fn host() -> Host {
        Host::new(AppConfig::default(), WINDOW_SIZE)
    }

    fn escape() -> Event {
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::Escape),
            modified_key: Key::Named(Named::Escape),
            physical_key: Physical::Code(Code::Escape),
            location: Location::Standard,
            modifiers: Modifiers::default(),
            text: None,
        })
    }

    fn left_click() -> Event {
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
    }

    #[test]
    fn test_bar_frame() {
        let frame = bar_frame(WINDOW_SIZE);
        assert_eq!(frame.x, 25.0);
        assert_eq!(frame.y, 100.0);
        assert_eq!(frame.width, 340.0);
        assert_eq!(frame.height, 46.0);
    }

    #[test]
    fn test_narrow_window_clamps() {
        assert_eq!(bar_frame(Size::new(30.0, 100.0)).width, 0.0);
    }

    #[test]
    fn test_host_sets_placeholder() {
        assert_eq!(host().search_bar().placeholder(), Some("App Library"));
    }

    #[test]
    fn test_resize_follows_window() {
        let mut host = host();
        let _ = host.update(Message::IcedEvent(Event::Window(window::Event::Resized(
            Size::new(800.0, 600.0),
        ))));
        assert_eq!(host.search_bar().bounds(), Size::new(750.0, BAR_HEIGHT));
        assert!(!host.search_bar().is_editing());
    }

    #[test]
    fn test_click_outside_dismisses() {
        let mut host = host();
        let _ = host.update(Message::SearchBar(search_bar::Event::Pressed));
        assert!(host.search_bar().is_editing());

        let _ = host.update(Message::IcedEvent(left_click()));
        assert!(!host.search_bar().is_focused());
        assert!(!host.search_bar().is_editing());
    }

    #[test]
    fn test_escape_dismisses_even_when_captured() {
        let mut host = host();
        let _ = host.update(Message::SearchBar(search_bar::Event::Pressed));
        assert!(host.search_bar().is_focused());

        // the focused input swallows Escape to drop its own focus
        let message = route_event(escape(), event::Status::Captured, window::Id::unique())
            .expect("escape is always routed");
        let _ = host.update(message);
        assert!(!host.search_bar().is_focused());
        assert!(!host.search_bar().is_editing());
    }

    #[test]
    fn test_captured_clicks_stay_inside_the_bar() {
        let id = window::Id::unique();
        assert!(route_event(left_click(), event::Status::Captured, id).is_none());
        assert!(route_event(left_click(), event::Status::Ignored, id).is_some());
    }
}
