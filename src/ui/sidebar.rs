use gtk4::prelude::*;
use gtk4 as gtk;

pub struct Sidebar {
    root: gtk::Box,
    list: gtk::ListBox,
    contacts: Vec<String>,
}

impl Sidebar {
    pub fn new(contacts: &[String]) -> Self {
        let root = gtk::Box::new(gtk::Orientation::Vertical, 6);
        root.set_margin_top(8);
        root.set_margin_bottom(8);
        root.set_margin_start(8);
        root.set_margin_end(8);

        let title = gtk::Label::new(Some("Contacts"));
        title.add_css_class("heading");
        title.set_halign(gtk::Align::Start);
        root.append(&title);

        let list = gtk::ListBox::new();
        root.append(&list);

        for name in contacts {
            let row = gtk::ListBoxRow::new();
            let label = gtk::Label::new(Some(name));
            label.set_margin_top(8);
            label.set_margin_bottom(8);
            label.set_margin_start(8);
            label.set_margin_end(8);
            label.set_halign(gtk::Align::Start);
            row.set_child(Some(&label));
            list.append(&row);
        }

        Self {
            root,
            list,
            contacts: contacts.to_vec(),
        }
    }

    pub fn widget(&self) -> gtk::Widget {
        self.root.clone().upcast()
    }

    /// Invoke `on_selected` with the contact name whenever a row becomes the
    /// selected one, whether by click or by `select_contact`.
    pub fn connect_contact_selected<F: Fn(&str) + 'static>(&self, on_selected: F) {
        let contacts = self.contacts.clone();
        self.list.connect_row_selected(move |_, row| {
            if let Some(row) = row {
                if let Some(name) = contacts.get(row.index() as usize) {
                    on_selected(name);
                }
            }
        });
    }

    pub fn select_contact(&self, name: &str) {
        if let Some(idx) = self.contacts.iter().position(|c| c == name) {
            if let Some(row) = self.list.row_at_index(idx as i32) {
                self.list.select_row(Some(&row));
            }
        }
    }
}
