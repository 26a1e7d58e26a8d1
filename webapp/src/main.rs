#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::Level;

mod common;
use common::{style, theme::THEME};

mod components;

mod home;

mod not_found;

mod recordings;

mod route;
use route::Route;

mod settings;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

#[component]
pub fn App() -> Element {
    // the theme never changes after startup, so render it exactly once
    let theme_css = use_hook(|| THEME.css());

    rsx! {
        style { "{theme_css}" }
        style { "{style::APP_STYLES}" }
        Router::<Route> { config: RouterConfig::default }
    }
}
