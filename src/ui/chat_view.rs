use gtk4::prelude::*;
use gtk4 as gtk;

use crate::models::{Message, Sender};

pub struct ChatView {
    root: gtk::Box,
    scroller: gtk::ScrolledWindow,
    messages: gtk::Box,
    entry: gtk::Entry,
    send_btn: gtk::Button,
}

impl ChatView {
    pub fn new() -> Self {
        let root = gtk::Box::new(gtk::Orientation::Vertical, 6);
        root.set_margin_top(8);
        root.set_margin_bottom(8);
        root.set_margin_start(8);
        root.set_margin_end(8);

        let scroller = gtk::ScrolledWindow::builder()
            .vexpand(true)
            .hexpand(true)
            .build();
        let messages = gtk::Box::new(gtk::Orientation::Vertical, 6);
        scroller.set_child(Some(&messages));
        root.append(&scroller);

        // Input row
        let input_row = gtk::Box::new(gtk::Orientation::Horizontal, 6);
        let entry = gtk::Entry::new();
        entry.set_hexpand(true);
        entry.set_placeholder_text(Some("Type a message…"));
        let send_btn = gtk::Button::with_label("Send");
        send_btn.add_css_class("suggested-action");
        input_row.append(&entry);
        input_row.append(&send_btn);
        root.append(&input_row);

        Self {
            root,
            scroller,
            messages,
            entry,
            send_btn,
        }
    }

    pub fn widget(&self) -> gtk::Widget {
        self.root.clone().upcast()
    }

    pub fn entry_text(&self) -> String {
        self.entry.text().to_string()
    }

    pub fn clear_entry(&self) {
        self.entry.set_text("");
    }

    /// Wire the send button, and Enter in the entry, to `on_send`.
    pub fn connect_send<F: Fn() + 'static>(&self, on_send: F) {
        use std::rc::Rc;
        let on_send: Rc<dyn Fn()> = Rc::new(on_send);
        {
            let on_send = on_send.clone();
            self.send_btn.connect_clicked(move |_| (on_send)());
        }
        {
            let on_send = on_send.clone();
            self.entry.connect_activate(move |_| (on_send)());
        }
    }

    /// Append a message label and keep the newest entry in view.
    pub fn append_message(&self, message: &Message) {
        let label = gtk::Label::new(Some(&message.text));
        let (align, css_class) = match message.sender {
            Sender::User => (gtk::Align::End, "message-user"),
            Sender::Bot => (gtk::Align::Start, "message-bot"),
        };
        label.set_halign(align);
        label.add_css_class(css_class);
        self.messages.append(&label);
        let adj = self.scroller.vadjustment();
        adj.set_value(adj.upper());
    }

    pub fn clear(&self) {
        while let Some(child) = self.messages.first_child() {
            self.messages.remove(&child);
        }
    }
}
