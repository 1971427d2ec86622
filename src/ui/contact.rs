/// "Get In Touch" section
use iced::widget::{button, column, container, scrollable, text, text_input};
use iced::{Element, Length};

use crate::app::InquiryMessage;
use crate::state::forms::ContactField;
use crate::state::inquiry::InquirySection;

use super::{field, notice};

pub fn view(section: &InquirySection) -> Element<'_, InquiryMessage> {
    let form = section.form();
    let sending = section.phase().is_submitting();

    let input = |placeholder: &str, value: &str, which: ContactField| {
        let input = text_input(placeholder, value).padding(10);
        if sending {
            input
        } else {
            input
                .on_input(move |v| InquiryMessage::Field(which, v))
                .on_submit(InquiryMessage::Submit)
        }
    };

    let mut content = column![
        text("Get In Touch").size(32),
        text("Questions about a booking or working with SnapPro? Send us a note.").size(15),
    ]
    .spacing(16)
    .max_width(560);

    if let Some((message, success)) = section.notice() {
        content = content.push(notice(message, success));
    }

    let submit = button(text(if sending { "Sending..." } else { "Send Message" }))
        .padding([10, 20])
        .on_press_maybe((!sending).then_some(InquiryMessage::Submit));

    content = content
        .push(field("Name", input("Your name", &form.name, ContactField::Name)))
        .push(field("Email", input("you@example.com", &form.email, ContactField::Email)))
        .push(field(
            "Subject",
            input("Photographer or topic (optional)", &form.subject, ContactField::Subject),
        ))
        .push(field("Message", input("How can we help?", &form.message, ContactField::Message)))
        .push(submit);

    scrollable(container(content).center_x(Length::Fill).padding(32))
        .height(Length::Fill)
        .into()
}
