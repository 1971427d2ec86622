/// Gallery: filter bar, image tiles and the lightbox with photographer credit
use iced::widget::{button, column, container, horizontal_space, row, scrollable, text};
use iced::{Alignment, Element, Length};
use iced_aw::Wrap;

use crate::app::GalleryMessage;
use crate::state::data::GalleryImage;
use crate::state::gallery::GalleryView;
use crate::state::images::ImageCache;

use super::{filter_bar, load_status, modals, photo, MUTED_COLOR};

pub fn view<'a>(state: &'a GalleryView, images: &'a ImageCache) -> Element<'a, GalleryMessage> {
    let directory = &state.directory;

    let mut toolbar = row![
        filter_bar(directory.active_filter().tag(), GalleryMessage::FilterSelected),
        horizontal_space(),
    ]
    .align_y(Alignment::Center);
    if directory.is_admin() {
        toolbar = toolbar.push(button("+ Add Image").on_press(GalleryMessage::OpenAdd));
    }

    let listing: Element<'a, GalleryMessage> =
        match load_status(directory.load_state(), GalleryMessage::Retry) {
            Some(status) => status,
            None if directory.visible().is_empty() => {
                container(text("No images in this category yet.").color(MUTED_COLOR))
                    .padding(40)
                    .center_x(Length::Fill)
                    .into()
            }
            None => {
                let tiles: Vec<Element<'a, GalleryMessage>> = directory
                    .visible()
                    .iter()
                    .map(|image| tile(image, images))
                    .collect();
                Wrap::with_elements(tiles).spacing(16.0).line_spacing(16.0).into()
            }
        };

    let page = scrollable(
        column![text("Gallery").size(32), toolbar, listing]
            .spacing(20)
            .padding(24),
    )
    .height(Length::Fill);

    let mut layered: Element<'a, GalleryMessage> = page.into();
    if state.lightbox.is_open() {
        let credit: Element<'a, GalleryMessage> = match state.current_credit() {
            Some(name) => row![
                text(format!("Photo by {}", name)).color(MUTED_COLOR),
                horizontal_space(),
                button("Contact Photographer").on_press(GalleryMessage::ContactFromLightbox),
            ]
            .align_y(Alignment::Center)
            .into(),
            None => horizontal_space().into(),
        };
        layered = modals::lightbox(
            layered,
            &state.lightbox,
            images,
            GalleryMessage::Lightbox,
            Some(credit),
        );
    }
    if state.contact.is_visible() {
        layered = modals::contact(layered, &state.contact, GalleryMessage::Contact);
    }
    if state.add.is_visible() {
        layered = modals::add_gallery_item(layered, &state.add);
    }
    layered
}

fn tile<'a>(image: &'a GalleryImage, images: &'a ImageCache) -> Element<'a, GalleryMessage> {
    container(
        column![
            button(photo(images, &image.src, 280.0, 200.0))
                .padding(0)
                .style(button::text)
                .on_press(GalleryMessage::OpenImage(image.src.clone())),
            text(image.alt.as_str()).size(15),
            row![
                text(format!("by {}", image.photographer)).size(13).color(MUTED_COLOR),
                horizontal_space(),
                button(text("Contact").size(13))
                    .style(button::secondary)
                    .on_press(GalleryMessage::OpenContact(image.photographer.clone())),
            ]
            .align_y(Alignment::Center),
            text(image.category.label()).size(12).color(MUTED_COLOR),
        ]
        .spacing(6)
        .width(Length::Fixed(280.0)),
    )
    .padding(10)
    .style(container::rounded_box)
    .into()
}
