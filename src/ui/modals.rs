/// Overlay dialogs shared by the sections
use iced::widget::{
    button, column, horizontal_space, pick_list, row, scrollable, text, text_input, Column,
};
use iced::{Alignment, Element, Length};

use crate::app::{
    AuthMessage, ContactMessage, GalleryMessage, LightboxMessage, Message, PhotographersMessage,
};
use crate::state::data::Category;
use crate::state::forms::{
    AuthField, ContactField, GalleryDraft, GalleryField, PhotographerDraft, PhotographerField,
};
use crate::state::images::ImageCache;
use crate::state::lightbox::Lightbox;
use crate::state::modal::{AddModal, AuthModal, AuthTab, ContactModal, ModalPhase};

use super::{dialog_header, field, modal, notice, photo, MUTED_COLOR};

/// Contact-a-photographer dialog over `base`. `route` lifts the dialog's
/// messages into the owning section's.
pub fn contact<'a, M: Clone + 'a>(
    base: Element<'a, M>,
    state: &'a ContactModal,
    route: fn(ContactMessage) -> M,
) -> Element<'a, M> {
    let header = dialog_header(
        format!("Contact {}", state.photographer()),
        route(ContactMessage::Close),
    );

    let body: Element<'a, M> = match state.phase() {
        ModalPhase::Success(message) => column![
            text("Message Sent!").size(20),
            notice(message, true),
            text(format!(
                "Your message has been sent to {}. They will contact you soon.",
                state.photographer()
            ))
            .size(14)
            .color(MUTED_COLOR),
        ]
        .spacing(12)
        .into(),
        phase => {
            let sending = phase.is_submitting();
            let form = state.form();
            let input = |placeholder: &str, value: &str, which: ContactField| {
                let input = text_input(placeholder, value).padding(10);
                if sending {
                    input
                } else {
                    input.on_input(move |v| route(ContactMessage::Field(which, v)))
                }
            };

            let mut body = Column::new().spacing(12);
            if let ModalPhase::Error(message) = phase {
                body = body.push(notice(message, false));
            }
            body.push(field("Your Name", input("Name", &form.name, ContactField::Name)))
                .push(field("Your Email", input("Email", &form.email, ContactField::Email)))
                .push(field(
                    "Message",
                    input("Tell them about your project", &form.message, ContactField::Message),
                ))
                .push(
                    button(text(if sending { "Sending..." } else { "Send Message" }))
                        .padding([10, 20])
                        .on_press_maybe((!sending).then(|| route(ContactMessage::Submit))),
                )
                .into()
        }
    };

    modal(base, column![header, body].spacing(16), route(ContactMessage::Close))
}

/// Full-size image viewer over `base`. `footer` carries section-specific
/// actions (credit line, contact button).
pub fn lightbox<'a, M: Clone + 'a>(
    base: Element<'a, M>,
    state: &'a Lightbox,
    images: &'a ImageCache,
    route: fn(LightboxMessage) -> M,
    footer: Option<Element<'a, M>>,
) -> Element<'a, M> {
    let Some(current) = state.current() else {
        return base;
    };

    let controls = row![
        button(text("‹ Previous")).on_press(route(LightboxMessage::Previous)),
        horizontal_space(),
        text(format!("{} / {}", state.index() + 1, state.len())).color(MUTED_COLOR),
        horizontal_space(),
        button(text("Next ›")).on_press(route(LightboxMessage::Next)),
    ]
    .align_y(Alignment::Center);

    let mut content = column![
        dialog_header(String::new(), route(LightboxMessage::Close)),
        photo(images, current, 580.0, 420.0),
        controls,
    ]
    .spacing(12)
    .align_x(Alignment::Center);

    if let Some(footer) = footer {
        content = content.push(footer);
    }

    modal(base, content, route(LightboxMessage::Close))
}

/// Admin form for a new photographer
pub fn add_photographer<'a>(
    base: Element<'a, PhotographersMessage>,
    state: &'a AddModal<PhotographerDraft>,
) -> Element<'a, PhotographersMessage> {
    let draft = state.draft();
    let busy = state.is_submitting();
    let input = |placeholder: &str, value: &str, which: PhotographerField| {
        let input = text_input(placeholder, value).padding(8);
        if busy {
            input
        } else {
            input.on_input(move |v| PhotographersMessage::AddField(which, v))
        }
    };

    let links = draft.portfolio.iter().enumerate().map(|(index, link)| {
        row![
            text(link.as_str()).size(13).width(Length::Fill),
            button(text("Remove").size(13))
                .style(button::danger)
                .on_press_maybe((!busy).then_some(PhotographersMessage::RemovePortfolioLink(index))),
        ]
        .spacing(8)
        .align_y(Alignment::Center)
        .into()
    });

    let link_input = row![
        input("https://...", &draft.pending_link, PhotographerField::PortfolioLink)
            .on_submit(PhotographersMessage::AddPortfolioLink),
        button("Add Link").on_press_maybe((!busy).then_some(PhotographersMessage::AddPortfolioLink)),
    ]
    .spacing(8);

    let form = column![
        dialog_header("Add Photographer".to_string(), PhotographersMessage::CloseAdd),
        field("Name", input("Full name", &draft.name, PhotographerField::Name)),
        field(
            "Specialization",
            pick_list(Category::ALL, Some(draft.specialization), |category| {
                PhotographersMessage::SpecializationSelected(category)
            })
            .width(Length::Fill),
        ),
        field("Bio", input("Short biography", &draft.bio, PhotographerField::Bio)),
        field("Profile Image URL", input("https://...", &draft.image, PhotographerField::Image)),
        field("Location", input("City, Country", &draft.location, PhotographerField::Location)),
        row![
            field("Experience (years)", input("0", &draft.experience, PhotographerField::Experience)),
            field("Projects", input("0", &draft.projects, PhotographerField::Projects)),
            field("Hourly Rate ($)", input("0", &draft.hourly_rate, PhotographerField::HourlyRate)),
        ]
        .spacing(12),
        field("Portfolio", Column::with_children(links).spacing(4).push(link_input)),
        submit_row(busy, "Add Photographer", PhotographersMessage::SubmitAdd),
    ]
    .spacing(12);

    modal(
        base,
        scrollable(form).height(Length::Fixed(560.0)),
        PhotographersMessage::CloseAdd,
    )
}

/// Admin form for a new gallery image
pub fn add_gallery_item<'a>(
    base: Element<'a, GalleryMessage>,
    state: &'a AddModal<GalleryDraft>,
) -> Element<'a, GalleryMessage> {
    let draft = state.draft();
    let busy = state.is_submitting();
    let input = |placeholder: &str, value: &str, which: GalleryField| {
        let input = text_input(placeholder, value).padding(8);
        if busy {
            input
        } else {
            input.on_input(move |v| GalleryMessage::AddField(which, v))
        }
    };

    let form = column![
        dialog_header("Add Gallery Image".to_string(), GalleryMessage::CloseAdd),
        field(
            "Category",
            pick_list(Category::ALL, Some(draft.category), GalleryMessage::CategorySelected)
                .width(Length::Fill),
        ),
        field("Image URL", input("https://...", &draft.src, GalleryField::Src)),
        field("Description", input("What is in the shot", &draft.alt, GalleryField::Alt)),
        field(
            "Photographer",
            input("Photographer name", &draft.photographer, GalleryField::Photographer),
        ),
        submit_row(busy, "Add Image", GalleryMessage::SubmitAdd),
    ]
    .spacing(12);

    modal(base, form, GalleryMessage::CloseAdd)
}

/// Login / signup dialog over the whole window
pub fn auth<'a>(base: Element<'a, Message>, state: &'a AuthModal) -> Element<'a, Message> {
    let form = state.form();
    let busy = state.is_loading();
    let input = |placeholder: &str, value: &str, which: AuthField| {
        let input = text_input(placeholder, value).padding(10);
        let input = if busy {
            input
        } else {
            input
                .on_input(move |v| Message::Auth(AuthMessage::Field(which, v)))
                .on_submit(Message::Auth(AuthMessage::Submit))
        };
        input.secure(matches!(which, AuthField::Password | AuthField::ConfirmPassword))
    };

    let tab_button = |label: &'static str, tab: AuthTab| {
        let active = state.tab() == tab;
        button(text(label))
            .width(Length::Fill)
            .style(move |theme, status| {
                if active {
                    button::primary(theme, status)
                } else {
                    button::secondary(theme, status)
                }
            })
            .on_press(Message::Auth(AuthMessage::SwitchTab(tab)))
    };

    let mut content = column![
        dialog_header("Welcome to SnapPro".to_string(), Message::Auth(AuthMessage::Close)),
        row![tab_button("Login", AuthTab::Login), tab_button("Sign Up", AuthTab::Signup)].spacing(8),
    ]
    .spacing(14);

    if let Some(error) = state.error() {
        content = content.push(notice(error, false));
    }

    content = match state.tab() {
        AuthTab::Login => content
            .push(field("Email", input("you@example.com", &form.email, AuthField::Email)))
            .push(field("Password", input("Password", &form.password, AuthField::Password))),
        AuthTab::Signup => content
            .push(field("Name", input("Full name", &form.name, AuthField::Name)))
            .push(field("Email", input("you@example.com", &form.email, AuthField::Email)))
            .push(field("Password", input("At least 6 characters", &form.password, AuthField::Password)))
            .push(field(
                "Confirm Password",
                input("Repeat password", &form.confirm_password, AuthField::ConfirmPassword),
            )),
    };

    let label = match (state.tab(), busy) {
        (_, true) => "Please wait...",
        (AuthTab::Login, false) => "Login",
        (AuthTab::Signup, false) => "Create Account",
    };
    content = content.push(
        button(text(label))
            .width(Length::Fill)
            .padding(10)
            .on_press_maybe((!busy).then_some(Message::Auth(AuthMessage::Submit))),
    );

    modal(base, content, Message::Auth(AuthMessage::Close))
}

fn submit_row<'a, M: Clone + 'a>(busy: bool, label: &'a str, on_submit: M) -> Element<'a, M> {
    row![
        horizontal_space(),
        button(text(if busy { "Saving..." } else { label }))
            .padding([10, 20])
            .on_press_maybe((!busy).then_some(on_submit)),
    ]
    .into()
}
