/// Top bar: brand, section navigation and the account controls
use iced::widget::{button, container, horizontal_space, row, text, Row};
use iced::{Alignment, Element, Length};

use crate::app::{AuthMessage, Message, Section};
use crate::state::data::User;
use crate::state::modal::AuthTab;

pub fn view<'a>(active: Section, user: Option<&User>) -> Element<'a, Message> {
    let nav = Row::with_children(Section::ALL.iter().map(|section| {
        let current = *section == active;
        button(text(section.label()))
            .style(move |theme, status| {
                if current {
                    button::primary(theme, status)
                } else {
                    button::text(theme, status)
                }
            })
            .on_press(Message::ShowSection(*section))
            .into()
    }))
    .spacing(4);

    let account: Element<'a, Message> = match user {
        Some(user) => row![
            text(format!("Hi, {}", user.name)).size(15),
            button("Logout")
                .on_press(Message::Logout)
                .style(button::secondary),
        ]
        .spacing(12)
        .align_y(Alignment::Center)
        .into(),
        None => row![
            button("Login")
                .on_press(Message::Auth(AuthMessage::Open(AuthTab::Login)))
                .style(button::secondary),
            button("Sign Up").on_press(Message::Auth(AuthMessage::Open(AuthTab::Signup))),
        ]
        .spacing(8)
        .into(),
    };

    container(
        row![text("SnapPro").size(26), nav, horizontal_space(), account]
            .spacing(24)
            .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding([12, 24])
    .style(container::bordered_box)
    .into()
}
