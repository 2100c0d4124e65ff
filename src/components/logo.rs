use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LogoProps {
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

#[function_component(Logo)]
pub fn logo(props: &LogoProps) -> Html {
    html! {
        <div class="logo" onclick={props.onclick.clone()}>
            <svg width="140" height="42" viewBox="0 0 400 120" xmlns="http://www.w3.org/2000/svg">
                <line x1="60" y1="35" x2="165" y2="35" stroke="#1a1a1a" stroke-width="2" />
                <text x="200" y="40" text-anchor="middle" font-family="'Georgia', serif" font-size="16" fill="#1a1a1a">{"The"}</text>
                <line x1="235" y1="35" x2="340" y2="35" stroke="#1a1a1a" stroke-width="2" />
                <text x="200" y="75" text-anchor="middle" font-family="'Georgia', serif" font-size="32" fill="#1a1a1a">{"Cold Brew"}</text>
                <line x1="40" y1="92" x2="360" y2="92" stroke="#1a1a1a" stroke-width="2" />
            </svg>
        </div>
    }
}
