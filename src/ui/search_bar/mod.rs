//! Slide-in search bar widget
//!
//! Idle, the bar shows a centered icon and placeholder. Once focused, the
//! icon and placeholder slide to the left edge and, when configured, a cancel
//! control slides in from the right. Losing focus with nothing typed slides
//! everything back.
//!
//! The bar owns its state and hands out an iced [`Element`]; the host maps
//! [`Event`] into its own message type and routes it back to [`SearchBar::update`].

pub mod layout;
pub mod metrics;
mod placed;
pub mod transition;

use iced::alignment::{Horizontal, Vertical};
use iced::advanced::text::Shaping;
use iced::widget::{button, container, mouse_area, text, text_input, Space, Stack};
use iced::{window, Background, Border, Color, Element, Font, Length, Rectangle, Shadow, Size, Subscription, Task};
use std::time::{Duration, Instant};

use crate::config::{Palette, SearchBarConfig};

pub use layout::Frame;
pub use metrics::{Shaped, TextMeasure};
pub use transition::{Animation, Easing, Transition};

const ICON_GLYPH: &str = "\u{1F50D}";
const CLEAR_GLYPH: &str = "\u{2715}";

/// Messages produced by the bar's view
#[derive(Debug, Clone)]
pub enum Event {
    /// Tap anywhere on the bar
    Pressed,
    Input(String),
    /// Return key, the keyboard's "Done"
    Submit,
    /// Focus taken away by the host (Escape, click outside)
    Dismiss,
    Clear,
    Cancel,
    Frame(Instant),
}

/// Search bar state
pub struct SearchBar {
    config: SearchBarConfig,
    palette: Palette,
    measure: Box<dyn TextMeasure>,
    bounds: Size,
    text: String,
    placeholder: Option<String>,
    is_editing: bool,
    is_focused: bool,
    animation: Option<Animation>,
    input_id: text_input::Id,
}

impl SearchBar {
    pub fn new(bounds: Size, config: SearchBarConfig) -> Self {
        let palette = config.appearance.palette().unwrap_or_else(|e| {
            tracing::warn!("{} (using default palette)", e);
            Palette::default()
        });

        Self {
            config,
            palette,
            measure: Box::new(Shaped::default()),
            bounds,
            text: String::new(),
            placeholder: None,
            is_editing: false,
            is_focused: false,
            animation: None,
            input_id: text_input::Id::unique(),
        }
    }

    /// Replace the text measurer used to size the placeholder.
    pub fn with_measure(mut self, measure: impl TextMeasure + 'static) -> Self {
        self.measure = Box::new(measure);
        self
    }

    // ========================================================================
    // State
    // ========================================================================

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    pub fn bounds(&self) -> Size {
        self.bounds
    }

    pub fn is_editing(&self) -> bool {
        self.is_editing
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn is_focused(&self) -> bool {
        self.is_focused
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn animation(&self) -> Option<&Animation> {
        self.animation.as_ref()
    }

    pub fn config(&self) -> &SearchBarConfig {
        &self.config
    }

    /// Layout the current state settles into.
    pub fn target(&self) -> Frame {
        let font_size = self.config.appearance.font_size;
        let icon_size = self.config.appearance.icon_size;
        let parts = layout::Parts {
            icon: Size::new(icon_size, icon_size),
            label: self
                .measure
                .measure(self.placeholder.as_deref().unwrap_or_default(), font_size),
            cancel_width: self.config.cancel_width(),
        };
        let state = layout::State {
            editing: self.is_editing,
            empty: self.is_empty(),
        };
        layout::compute(self.bounds, &parts, state)
    }

    /// Layout currently on screen, mid-animation or settled.
    pub fn presented(&self) -> Frame {
        match &self.animation {
            Some(animation) => animation.frame(),
            None => self.target(),
        }
    }

    // ========================================================================
    // Operations
    // ========================================================================

    pub fn set_placeholder(&mut self, placeholder: Option<String>) {
        self.placeholder = placeholder;
        self.retarget();
    }

    /// New bounds from the host's layout pass.
    pub fn resize(&mut self, bounds: Size) {
        if self.bounds != bounds {
            self.bounds = bounds;
            self.retarget();
        }
    }

    pub fn focus_gained(&mut self) -> Option<Transition> {
        let from = self.presented();
        self.is_focused = true;
        self.is_editing = true;
        tracing::debug!(empty = self.is_empty(), "search bar focused");
        self.animate_from(from, self.config.focus_duration())
    }

    pub fn focus_lost(&mut self) -> Option<Transition> {
        let from = self.presented();
        self.is_focused = false;
        if self.is_empty() {
            self.is_editing = false;
        }
        tracing::debug!(editing = self.is_editing, "search bar lost focus");
        self.animate_from(from, self.config.focus_duration())
    }

    pub fn text_changed(&mut self, text: String) {
        self.text = text;

        let empty = self.is_empty();
        let label_alpha = if empty { 1.0 } else { 0.0 };
        if let Some(animation) = &mut self.animation {
            animation.transition_mut().set_visibility(label_alpha, !empty);
        }
    }

    pub fn clear_tapped(&mut self) {
        tracing::debug!("search bar cleared");
        self.text_changed(String::new());
    }

    /// Abandon the search. Does nothing when the bar has no cancel control.
    pub fn cancel_tapped(&mut self) -> Option<Transition> {
        if !self.config.show_cancel {
            return None;
        }

        let from = self.presented();
        self.is_focused = false;
        self.text_changed(String::new());
        self.is_editing = false;
        tracing::debug!("search bar cancelled");
        self.animate_from(from, self.config.cancel_duration())
    }

    /// Advance the running animation to `now`.
    pub fn tick(&mut self, now: Instant) {
        if let Some(animation) = &mut self.animation {
            if animation.tick(now) {
                tracing::trace!("search bar animation finished");
                self.animation = None;
            }
        }
    }

    fn animate_from(&mut self, from: Frame, duration: Duration) -> Option<Transition> {
        let to = self.target();
        if from == to {
            self.animation = None;
            return None;
        }

        let transition = Transition::new(from, to, duration, self.config.easing);
        self.animation = Some(Animation::new(transition.clone()));
        Some(transition)
    }

    /// Point a running animation at the current target.
    fn retarget(&mut self) {
        let to = self.target();
        if let Some(animation) = &mut self.animation {
            animation.transition_mut().to = to;
        }
    }

    // ========================================================================
    // Iced glue
    // ========================================================================

    pub fn update(&mut self, event: Event) -> Task<Event> {
        match event {
            Event::Pressed => {
                if !self.is_focused {
                    self.focus_gained();
                }
                text_input::focus(self.input_id.clone())
            }
            Event::Input(value) => {
                self.text_changed(value);
                Task::none()
            }
            Event::Submit | Event::Dismiss => {
                if self.is_focused {
                    self.focus_lost();
                }
                Task::none()
            }
            Event::Clear => {
                self.clear_tapped();
                if self.is_focused {
                    text_input::focus(self.input_id.clone())
                } else {
                    Task::none()
                }
            }
            Event::Cancel => {
                self.cancel_tapped();
                Task::none()
            }
            Event::Frame(now) => {
                self.tick(now);
                Task::none()
            }
        }
    }

    pub fn subscription(&self) -> Subscription<Event> {
        if self.is_animating() {
            window::frames().map(Event::Frame)
        } else {
            Subscription::none()
        }
    }

    pub fn view(&self) -> Element<'_, Event> {
        let frame = self.presented();
        let palette = self.palette;
        let appearance = &self.config.appearance;
        let radius = appearance.corner_radius;

        let mut layers: Vec<Element<'_, Event>> = Vec::with_capacity(6);

        let background = container(Space::new(Length::Fill, Length::Fill)).style(move |_theme| {
            container::Style {
                background: Some(Background::Color(palette.background)),
                border: Border::default().rounded(radius),
                ..Default::default()
            }
        });
        layers.push(place(background, frame.background));

        layers.push(place(
            text(ICON_GLYPH)
                .size(appearance.icon_size * 0.8)
                .color(palette.icon)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
            frame.icon,
        ));

        if frame.label_alpha > 0.0 {
            if let Some(placeholder) = self.placeholder.as_deref() {
                layers.push(place(
                    text(placeholder)
                        .size(appearance.font_size)
                        .font(Font::DEFAULT)
                        .shaping(Shaping::Advanced)
                        .color(with_alpha(palette.placeholder, frame.label_alpha)),
                    frame.label,
                ));
            }
        }

        let input: Element<'_, Event> = if self.is_focused {
            text_input("", &self.text)
                .id(self.input_id.clone())
                .on_input(Event::Input)
                .on_submit(Event::Submit)
                .padding(0)
                .size(appearance.font_size)
                .style(move |_theme, _status| text_input::Style {
                    background: Background::Color(Color::TRANSPARENT),
                    border: Border::default(),
                    icon: palette.icon,
                    placeholder: palette.placeholder,
                    value: palette.text,
                    selection: with_alpha(palette.cancel, 0.3),
                })
                .into()
        } else {
            text(self.text.as_str())
                .size(appearance.font_size)
                .color(palette.text)
                .into()
        };
        layers.push(place(input, frame.input));

        if frame.clear_visible {
            let clear = button(
                text(CLEAR_GLYPH)
                    .size(11)
                    .color(palette.background)
                    .width(Length::Fill)
                    .align_x(Horizontal::Center),
            )
            .on_press(Event::Clear)
            .padding(3)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme, _status| button::Style {
                background: Some(Background::Color(palette.clear)),
                text_color: palette.background,
                border: Border::default().rounded(layout::CLEAR_SIZE / 2.0),
                shadow: Shadow::default(),
            });
            layers.push(place(clear, frame.clear));
        }

        if let Some(rect) = frame.cancel.filter(|_| frame.cancel_alpha > 0.0) {
            let color = with_alpha(palette.cancel, frame.cancel_alpha);
            let cancel = button(
                text(self.config.cancel_label.as_str())
                    .size(appearance.font_size)
                    .width(Length::Fill)
                    .align_x(Horizontal::Center),
            )
            .on_press(Event::Cancel)
            .padding(0)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme, _status| button::Style {
                background: None,
                text_color: color,
                border: Border::default(),
                shadow: Shadow::default(),
            });
            layers.push(place(cancel, rect));
        }

        mouse_area(
            Stack::with_children(layers)
                .width(self.bounds.width)
                .height(self.bounds.height),
        )
        .on_press(Event::Pressed)
        .into()
    }
}

/// Position `content` at `rect` inside the bar.
fn place<'a>(content: impl Into<Element<'a, Event>>, rect: Rectangle) -> Element<'a, Event> {
    placed::Placed::new(
        container(content)
            .width(rect.width.max(0.0))
            .height(rect.height.max(0.0))
            .align_y(Vertical::Center)
            .clip(true),
        rect,
    )
    .into()
}

fn with_alpha(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}
