use yew::prelude::*;

use crate::deck::slide_id::SlideIndex;

#[derive(Properties, PartialEq)]
pub struct SlideFrameProps {
    pub id: AttrValue,
    pub index: SlideIndex,
    #[prop_or(true)]
    pub numbered: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Full-viewport section every slide is rendered into.
#[function_component(SlideFrame)]
pub fn slide_frame(props: &SlideFrameProps) -> Html {
    html! {
        <section id={props.id.clone()} class={classes!("slide", props.class.clone())}>
            if props.numbered {
                <span class="slide-number">{props.index.label()}</span>
            }
            { for props.children.iter() }
        </section>
    }
}
