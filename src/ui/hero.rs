/// Landing banner
use iced::widget::{button, column, container, text};
use iced::{Alignment, Element, Length};

use crate::app::{Message, Section};

use super::MUTED_COLOR;

pub fn view<'a>() -> Element<'a, Message> {
    container(
        column![
            text("Discover Amazing Photographers").size(44),
            text("Find the perfect photographer for your next project")
                .size(18)
                .color(MUTED_COLOR),
            button(text("Explore Now").size(18))
                .padding([12, 28])
                .on_press(Message::ShowSection(Section::Photographers)),
        ]
        .spacing(20)
        .align_x(Alignment::Center),
    )
    .center(Length::Fill)
    .into()
}
