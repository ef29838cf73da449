use dioxus::prelude::*;

use flight_co2_common::meta::{app_metadata, HeadEntry};

use super::faq_view::FaqView;
use super::layout::PageFrame;

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
        #[redirect("/", || Route::Faq {})]
        #[route("/faq")]
        Faq {},
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        Router::<Route> {}
    }
}

/// Shared frame for every page: document head plus the centered outlet.
#[component]
fn AppLayout() -> Element {
    let head = app_metadata()
        .head_entries()
        .into_iter()
        .map(|entry| match entry {
            HeadEntry::Title { title } => rsx! { document::Title { "{title}" } },
            HeadEntry::Meta { name, content } => rsx! { document::Meta { name, content } },
        });

    rsx! {
        {head}
        PageFrame {
            Outlet::<Route> {}
        }
    }
}

/// Route component: renders the FAQ accordion.
#[component]
fn Faq() -> Element {
    rsx! { FaqView {} }
}
