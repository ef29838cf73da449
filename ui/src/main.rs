mod components;

use flight_co2_common::content::validate_all;
use flight_co2_common::faq::faq_entries;

use components::app::App;

fn main() {
    if let Err(err) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("Failed to initialize logger: {err}");
    }

    match validate_all(faq_entries()) {
        Ok(()) => tracing::info!("Loaded {} FAQ entries", faq_entries().len()),
        Err(err) => tracing::error!("FAQ content is invalid: {err}"),
    }

    dioxus::launch(App);
}
