/// UI components
///
/// Pure view functions over the state types. Each returns an `Element`
/// over its own message type; `App::view` maps them into `Message`.
use iced::widget::{
    button, center, column, container, image, mouse_area, opaque, row, stack, text, Row,
};
use iced::{Alignment, Color, ContentFit, Element, Length};

use crate::state::data::Category;
use crate::state::directory::LoadState;
use crate::state::filter::FILTER_TAGS;
use crate::state::images::{ImageCache, ImageSlot};

pub mod contact;
pub mod gallery;
pub mod header;
pub mod hero;
pub mod modals;
pub mod photographers;

/// Longest bio shown on a card before it is cut
pub const CARD_BIO_LEN: usize = 80;

pub const ERROR_COLOR: Color = Color::from_rgb(0.94, 0.36, 0.36);
pub const SUCCESS_COLOR: Color = Color::from_rgb(0.36, 0.80, 0.48);
pub const MUTED_COLOR: Color = Color::from_rgb(0.62, 0.62, 0.66);

/// Cut `value` to `max` characters, adding "..." when anything was cut
pub fn truncate_text(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        return value.to_string();
    }
    let cut: String = value.chars().take(max).collect();
    format!("{}...", cut.trim_end())
}

/// Button label for a filter tag
pub fn filter_label(tag: &str) -> &'static str {
    match Category::from_tag(tag) {
        Some(category) => category.label(),
        None => "All",
    }
}

/// A remote photo at a fixed size, or a placeholder until it is ready
pub fn photo<'a, M: 'a>(images: &ImageCache, url: &str, width: f32, height: f32) -> Element<'a, M> {
    match images.get(url) {
        Some(ImageSlot::Ready(handle)) => image(handle.clone())
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .content_fit(ContentFit::Cover)
            .into(),
        slot => {
            let label = match slot {
                Some(ImageSlot::Failed) | None => "Image unavailable",
                _ => "Loading...",
            };
            container(text(label).size(13).color(MUTED_COLOR))
                .center_x(Length::Fixed(width))
                .center_y(Length::Fixed(height))
                .style(container::rounded_box)
                .into()
        }
    }
}

/// Row of category buttons; the active one is highlighted
pub fn filter_bar<'a, M: Clone + 'a>(active: &str, on_select: fn(String) -> M) -> Element<'a, M> {
    let buttons = FILTER_TAGS.iter().map(|tag| {
        let selected = *tag == active;
        button(text(filter_label(tag)))
            .padding([6, 14])
            .style(move |theme, status| {
                if selected {
                    button::primary(theme, status)
                } else {
                    button::secondary(theme, status)
                }
            })
            .on_press(on_select(tag.to_string()))
            .into()
    });

    Row::with_children(buttons).spacing(8).into()
}

/// Loading / failed placeholder for a directory. `None` once loaded.
pub fn load_status<'a, M: Clone + 'a>(state: &LoadState, retry: M) -> Option<Element<'a, M>> {
    match state {
        LoadState::Loaded => None,
        LoadState::Loading => Some(
            container(text("Loading...").size(18).color(MUTED_COLOR))
                .center_x(Length::Fill)
                .padding(40)
                .into(),
        ),
        LoadState::Failed(message) => Some(
            container(
                column![
                    text(message.clone()).size(18).color(ERROR_COLOR),
                    button("Try again").on_press(retry).style(button::secondary),
                ]
                .spacing(12)
                .align_x(Alignment::Center),
            )
            .center_x(Length::Fill)
            .padding(40)
            .into(),
        ),
    }
}

/// Inline notice under a form: green for success, red for errors
pub fn notice<'a, M: 'a>(message: &str, success: bool) -> Element<'a, M> {
    let color = if success { SUCCESS_COLOR } else { ERROR_COLOR };
    text(message.to_string()).size(15).color(color).into()
}

/// Labelled form row
pub fn field<'a, M: 'a>(label: &'a str, input: impl Into<Element<'a, M>>) -> Element<'a, M> {
    column![text(label).size(14).color(MUTED_COLOR), input.into()]
        .spacing(4)
        .into()
}

/// Show `content` centered over `base` with a dimmed backdrop.
/// Clicking the backdrop sends `on_dismiss`.
pub fn modal<'a, M: Clone + 'a>(
    base: impl Into<Element<'a, M>>,
    content: impl Into<Element<'a, M>>,
    on_dismiss: M,
) -> Element<'a, M> {
    let dialog = container(content)
        .max_width(640)
        .padding(24)
        .style(container::rounded_box);

    stack![
        base.into(),
        opaque(
            mouse_area(center(opaque(dialog)).style(|_theme| {
                container::Style {
                    background: Some(
                        Color {
                            a: 0.8,
                            ..Color::BLACK
                        }
                        .into(),
                    ),
                    ..container::Style::default()
                }
            }))
            .on_press(on_dismiss)
        )
    ]
    .into()
}

/// Title line of a dialog with a close button on the right
pub fn dialog_header<'a, M: Clone + 'a>(title: String, on_close: M) -> Element<'a, M> {
    row![
        text(title).size(24),
        iced::widget::horizontal_space(),
        button(text("✕")).on_press(on_close).style(button::text),
    ]
    .align_y(Alignment::Center)
    .into()
}
