/// Photographer directory: filter bar, card grid and the profile dialog
use iced::widget::{button, column, container, horizontal_space, row, scrollable, text};
use iced::{Alignment, Element, Length};
use iced_aw::Wrap;

use crate::app::PhotographersMessage;
use crate::state::data::Photographer;
use crate::state::images::ImageCache;
use crate::state::photographers::PhotographersView;

use super::{
    dialog_header, filter_bar, load_status, modal, modals, photo, truncate_text, CARD_BIO_LEN,
    MUTED_COLOR,
};

pub fn view<'a>(
    state: &'a PhotographersView,
    images: &'a ImageCache,
) -> Element<'a, PhotographersMessage> {
    let directory = &state.directory;

    let mut toolbar = row![
        filter_bar(directory.active_filter().tag(), PhotographersMessage::FilterSelected),
        horizontal_space(),
    ]
    .align_y(Alignment::Center);
    if directory.is_admin() {
        toolbar = toolbar.push(button("+ Add Photographer").on_press(PhotographersMessage::OpenAdd));
    }

    let listing: Element<'a, PhotographersMessage> =
        match load_status(directory.load_state(), PhotographersMessage::Retry) {
            Some(status) => status,
            None if directory.visible().is_empty() => container(
                text("No photographers in this category yet.").color(MUTED_COLOR),
            )
            .padding(40)
            .center_x(Length::Fill)
            .into(),
            None => Wrap::with_elements(
                directory
                    .visible()
                    .iter()
                    .map(|photographer| card(photographer, images))
                    .collect(),
            )
            .spacing(16.0)
            .line_spacing(16.0)
            .into(),
        };

    let page = scrollable(
        column![text("Our Photographers").size(32), toolbar, listing]
            .spacing(20)
            .padding(24),
    )
    .height(Length::Fill);

    // Overlays, bottom to top
    let mut layered: Element<'a, PhotographersMessage> = page.into();
    if let Some(photographer) = state.detail.selected() {
        layered = profile(layered, photographer, images);
    }
    if state.contact.is_visible() {
        layered = modals::contact(layered, &state.contact, PhotographersMessage::Contact);
    }
    if state.lightbox.is_open() {
        layered = modals::lightbox(
            layered,
            &state.lightbox,
            images,
            PhotographersMessage::Lightbox,
            None,
        );
    }
    if state.add.is_visible() {
        layered = modals::add_photographer(layered, &state.add);
    }
    layered
}

fn card<'a>(photographer: &'a Photographer, images: &'a ImageCache) -> Element<'a, PhotographersMessage> {
    let id = photographer.id;
    container(
        column![
            photo(images, &photographer.image, 260.0, 180.0),
            text(photographer.name.as_str()).size(20),
            text(photographer.specialization.label()).size(14),
            text(format!("📍 {}", photographer.location)).size(13).color(MUTED_COLOR),
            text(truncate_text(&photographer.bio, CARD_BIO_LEN)).size(13),
            row![
                button("View Profile").on_press(PhotographersMessage::OpenProfile(id)),
                button("Contact")
                    .style(button::secondary)
                    .on_press(PhotographersMessage::OpenContact(id)),
            ]
            .spacing(8),
        ]
        .spacing(8)
        .width(Length::Fixed(260.0)),
    )
    .padding(12)
    .style(container::rounded_box)
    .into()
}

/// Profile dialog rendered straight from the photographer record
fn profile<'a>(
    base: Element<'a, PhotographersMessage>,
    photographer: &'a Photographer,
    images: &'a ImageCache,
) -> Element<'a, PhotographersMessage> {
    let stats = row![
        stat("Experience", format!("{} years", photographer.experience)),
        stat("Projects", photographer.projects.to_string()),
        stat("Rate", format!("${}/hour", photographer.hourly_rate)),
    ]
    .spacing(24);

    let portfolio: Element<'a, PhotographersMessage> = if photographer.portfolio.is_empty() {
        text("No portfolio images yet.").color(MUTED_COLOR).into()
    } else {
        let thumbs: Vec<Element<'a, PhotographersMessage>> = photographer
            .portfolio
            .iter()
            .map(|src| {
                button(photo(images, src, 120.0, 90.0))
                    .padding(0)
                    .style(button::text)
                    .on_press(PhotographersMessage::OpenPortfolioImage(src.clone()))
                    .into()
            })
            .collect();
        Wrap::with_elements(thumbs).spacing(8.0).line_spacing(8.0).into()
    };

    let content = column![
        dialog_header(photographer.name.clone(), PhotographersMessage::CloseProfile),
        row![
            photo(images, &photographer.image, 200.0, 200.0),
            column![
                text(photographer.specialization.label()).size(18),
                text(format!("📍 {}", photographer.location)).color(MUTED_COLOR),
                stats,
                text(photographer.bio.as_str()).size(14),
            ]
            .spacing(10),
        ]
        .spacing(16),
        text("Portfolio").size(18),
        portfolio,
        row![
            horizontal_space(),
            button("Contact Photographer").on_press(PhotographersMessage::ContactFromProfile),
        ],
    ]
    .spacing(14);

    modal(base, scrollable(content), PhotographersMessage::CloseProfile)
}

fn stat<'a>(label: &'a str, value: String) -> Element<'a, PhotographersMessage> {
    column![text(value).size(18), text(label).size(12).color(MUTED_COLOR)]
        .align_x(Alignment::Center)
        .into()
}
