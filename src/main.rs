use log::info;
use yew::prelude::*;

mod config;
mod deck {
    pub mod active_slide;
    pub mod navigation;
    pub mod outline;
    pub mod reveal;
    pub mod slide_id;
    pub mod tracker;
    pub mod viewport;

    #[cfg(test)]
    pub mod testing;
    #[cfg(test)]
    mod scenarios;
}
mod components {
    pub mod footer;
    pub mod header;
    pub mod logo;
    pub mod navigation;
    pub mod reveal;
    pub mod slide_frame;
}
mod pages {
    pub mod deck;
    pub mod slides;
}

use pages::deck::Deck;

#[function_component]
fn App() -> Html {
    html! {
        <Deck />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting strategy deck");
    yew::Renderer::<App>::new().render();
}
