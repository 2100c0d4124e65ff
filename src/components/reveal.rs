use std::rc::Rc;

use web_sys::Element;
use yew::prelude::*;

use crate::config::DeckConfig;
use crate::deck::reveal::{transition_delay_style, RevealController};
use crate::deck::viewport::IntersectionViewport;

/// True once the referenced element has crossed `threshold` of the viewport.
/// Never goes back to false.
#[hook]
pub fn use_on_screen(node: NodeRef, threshold: f64) -> bool {
    let revealed = use_state(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |(node, threshold)| {
                let controller = node.cast::<Element>().map(|element| {
                    let on_reveal = Callback::from(move |_| revealed.set(true));
                    let mut controller =
                        RevealController::new(IntersectionViewport::or_null(None), *threshold, on_reveal);
                    controller.watch(&element);
                    controller
                });
                move || drop(controller)
            },
            (node, threshold),
        );
    }

    *revealed
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    /// Milliseconds before the entrance transition starts.
    #[prop_or_default]
    pub delay: u32,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let threshold = use_context::<Rc<DeckConfig>>()
        .map(|config| config.reveal_threshold)
        .unwrap_or_else(|| DeckConfig::default().reveal_threshold);
    let revealed = use_on_screen(node.clone(), threshold);

    html! {
        <div
            ref={node}
            class={classes!(props.class.clone(), "reveal", revealed.then(|| "revealed"))}
            style={transition_delay_style(props.delay)}
        >
            { for props.children.iter() }
        </div>
    }
}
