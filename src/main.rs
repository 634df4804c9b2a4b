mod app;
mod models;
mod reply;
mod session;
mod ui;

use adw::prelude::*;
use adw::Application;

fn main() {
    env_logger::init();

    let app = Application::builder()
        .application_id("com.example.EchoChatGtk")
        .build();
    app.connect_activate(|app| {
        crate::app::build_ui(app);
    });
    app.run();
}
