use std::cell::RefCell;
use std::rc::Rc;

use log::{info, warn};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent};
use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::navigation::SlideNavigation;
use crate::config::DeckConfig;
use crate::deck::active_slide::{ActiveSlideStore, ActiveSlideWriter};
use crate::deck::navigation::{ContainerScroller, NavIntent, NavigationDispatcher};
use crate::deck::slide_id::SlideIndex;
use crate::deck::tracker::ActiveSlideTracker;
use crate::deck::viewport::IntersectionViewport;
use crate::pages::slides::{Slide, SlideStyles};

/// Every element inside `container` whose id starts with `prefix`, in document order.
fn sections_in(container: &Element, prefix: &str) -> Vec<Element> {
    let selector = format!("[id^=\"{}\"]", prefix);
    let Ok(nodes) = container.query_selector_all(&selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// The scrollable deck: owns the slide order, the active slide cell and the
/// keyboard/tracker wiring around it.
#[function_component(Deck)]
pub fn deck() -> Html {
    let config = use_memo(|_| DeckConfig::load(), ());
    let container_ref = use_node_ref();
    let slide_count = Slide::ALL.len();

    let cell = use_memo(
        move |_| {
            let (store, writer) = ActiveSlideStore::new(slide_count);
            (store, RefCell::new(Some(writer)))
        },
        (),
    );
    let store = cell.0.clone();
    let active = use_state(|| store.get());

    // Mirror the store into component state so dependents re-render
    {
        let store = store.clone();
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = store.subscribe(Callback::from(move |index: SlideIndex| active.set(index)));
                move || drop(subscription)
            },
            (),
        );
    }

    // Track which section is in view
    {
        let cell = cell.clone();
        let container_ref = container_ref.clone();
        let config = config.clone();
        use_effect_with_deps(
            move |_| {
                let writer: Option<ActiveSlideWriter> = cell.1.borrow_mut().take();
                let tracker = match (container_ref.cast::<Element>(), writer) {
                    (Some(container), Some(writer)) => {
                        let sections = sections_in(&container, &config.slide_id_prefix);
                        info!("deck mounted with {} slides", sections.len());
                        let viewport = IntersectionViewport::or_null(Some(container));
                        let mut tracker =
                            ActiveSlideTracker::new(viewport, writer, config.tracker_options(slide_count));
                        tracker.observe_all(&sections);
                        Some(tracker)
                    }
                    _ => None,
                };
                move || drop(tracker)
            },
            (),
        );
    }

    let dispatcher = Rc::new(NavigationDispatcher::new(
        ContainerScroller::new(container_ref.clone(), config.slide_id_prefix.clone()),
        store.clone(),
    ));

    let on_navigate = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |index: usize| {
            dispatcher.dispatch(NavIntent::GoTo(index as isize));
        })
    };

    // Rebound whenever the active slide changes
    {
        let dispatcher = dispatcher.clone();
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().map(|window| {
                    let callback = Closure::<dyn Fn(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                        if let Some(intent) = NavIntent::from_key(&e.key()) {
                            dispatcher.dispatch(intent);
                        }
                    });
                    let _ = window.add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref());
                    (window, callback)
                });
                move || {
                    if let Some((window, callback)) = listener {
                        if let Err(err) =
                            window.remove_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())
                        {
                            warn!("failed to remove keydown listener: {:?}", err);
                        }
                    }
                }
            },
            *active,
        );
    }

    html! {
        <ContextProvider<Rc<DeckConfig>> context={config.clone()}>
            <div class="deck">
                <Header active={*active} on_navigate={on_navigate.clone()} />

                <div ref={container_ref} class="deck-slides">
                    {
                        for Slide::ALL
                            .iter()
                            .enumerate()
                            .map(|(i, slide)| slide.render(SlideIndex::new(i), &config.slide_id_prefix))
                    }
                </div>

                <SlideNavigation active={*active} total={slide_count} on_navigate={on_navigate} />

                <Footer />

                <SlideStyles />
                <style>
                    {r#"
                        .deck {
                            position: relative;
                            width: 100%;
                            height: 100vh;
                            overflow: hidden;
                            background: #ffffff;
                            color: #1a1a1a;
                            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                            -webkit-font-smoothing: antialiased;
                        }
                        .deck ::selection {
                            background: #8b6f47;
                            color: #fff;
                        }
                        .deck-slides {
                            height: 100%;
                            overflow-y: scroll;
                            scroll-snap-type: y mandatory;
                            scroll-behavior: smooth;
                            scrollbar-width: none;
                        }
                        .deck-slides::-webkit-scrollbar {
                            display: none;
                        }
                        .reveal {
                            opacity: 0;
                            transform: translateY(3rem);
                            transition: opacity 1s ease-out, transform 1s ease-out;
                        }
                        .reveal.revealed {
                            opacity: 1;
                            transform: translateY(0);
                        }
                    "#}
                </style>
            </div>
        </ContextProvider<Rc<DeckConfig>>>
    }
}
