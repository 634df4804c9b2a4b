use adw::prelude::*;
use adw::Application;
use std::cell::RefCell;
use std::rc::Rc;

use crate::app::AppConfig;
use crate::models::{Message, Sender};
use crate::session::ChatSession;

pub fn show_main_window(app: &Application, config: AppConfig) {
    let window = adw::ApplicationWindow::builder()
        .application(app)
        .title("EchoChat")
        .default_width(960)
        .default_height(640)
        .build();

    let split = adw::Flap::builder()
        .reveal_flap(true)
        .locked(true)
        .modal(false)
        .build();

    let sidebar = Rc::new(crate::ui::sidebar::Sidebar::new(&config.contacts));
    split.set_flap(Some(&sidebar.widget()));

    let chat = Rc::new(crate::ui::chat_view::ChatView::new());
    split.set_content(Some(&chat.widget()));

    let container = gtk4::Box::new(gtk4::Orientation::Vertical, 0);
    let header = adw::HeaderBar::new();
    // The header title tracks the active contact.
    let title = gtk4::Label::new(Some(config.initial_contact()));
    header.set_title_widget(Some(&title));
    container.append(&header);
    container.append(&split);
    window.set_content(Some(&container));
    window.present();

    let session = Rc::new(RefCell::new(ChatSession::new(
        config.initial_contact(),
        config.reply_attribution,
    )));

    // Contact selection retitles the header and drops the old conversation.
    {
        let session = session.clone();
        let chat = chat.clone();
        let title = title.clone();
        sidebar.connect_contact_selected(move |name| {
            session.borrow_mut().select_contact(name);
            title.set_label(name);
            chat.clear();
        });
    }

    // Sending renders the user message at once and schedules the echo reply.
    {
        let session = session.clone();
        let chat_for_send = chat.clone();
        let delay = config.reply_delay();
        chat.connect_send(move || {
            let input = chat_for_send.entry_text();
            let Some(pending) = session.borrow_mut().submit(&input) else {
                return;
            };
            chat_for_send.append_message(&Message {
                text: pending.text.clone(),
                sender: Sender::User,
            });
            chat_for_send.clear_entry();

            let session = session.clone();
            let chat = chat_for_send.clone();
            glib::timeout_add_local_once(delay, move || {
                let delivered = session.borrow_mut().deliver(&pending);
                if let Some(message) = delivered {
                    chat.append_message(&message);
                }
            });
        });
    }

    sidebar.select_contact(config.initial_contact());
}
