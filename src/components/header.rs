use yew::prelude::*;

use crate::components::logo::Logo;
use crate::deck::outline::OUTLINE;
use crate::deck::slide_id::SlideIndex;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub active: SlideIndex,
    pub on_navigate: Callback<usize>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let HeaderProps { active, on_navigate } = props;

    let to_start = {
        let on_navigate = on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(0))
    };

    html! {
        <header class="deck-header">
            <Logo onclick={to_start} />

            <nav class="deck-header-links">
                {
                    for OUTLINE.iter().map(|entry| {
                        let target = entry.target().get();
                        let onclick = {
                            let on_navigate = on_navigate.clone();
                            Callback::from(move |_: MouseEvent| on_navigate.emit(target))
                        };
                        html! {
                            <button
                                key={entry.label}
                                class={classes!("deck-header-link", entry.contains(*active).then(|| "active"))}
                                onclick={onclick}
                            >
                                {entry.label}
                            </button>
                        }
                    })
                }
            </nav>

            <div class="deck-header-client">{"F.F. Foundation Ltd."}</div>

            <style>
                {r#"
                    .deck-header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 1.25rem 3rem;
                        background: rgba(255, 255, 255, 0.9);
                        backdrop-filter: blur(12px);
                        border-bottom: 1px solid #e8e8e8;
                    }
                    .logo {
                        cursor: pointer;
                        transition: opacity 0.3s;
                    }
                    .logo:hover {
                        opacity: 0.7;
                    }
                    .deck-header-links {
                        display: flex;
                        gap: 2.5rem;
                    }
                    .deck-header-link {
                        position: relative;
                        padding: 0 0 0.25rem 0;
                        background: none;
                        border: none;
                        cursor: pointer;
                        font-size: 0.75rem;
                        font-weight: 500;
                        letter-spacing: 0.05em;
                        color: #666;
                        transition: color 0.3s;
                    }
                    .deck-header-link::after {
                        content: '';
                        position: absolute;
                        bottom: 0;
                        left: 0;
                        height: 1px;
                        width: 0;
                        background: #8b6f47;
                        transition: width 0.3s;
                    }
                    .deck-header-link:hover,
                    .deck-header-link.active {
                        color: #8b6f47;
                    }
                    .deck-header-link:hover::after,
                    .deck-header-link.active::after {
                        width: 100%;
                    }
                    .deck-header-client {
                        font-size: 0.75rem;
                        font-weight: 600;
                        color: #999;
                        letter-spacing: 1.2px;
                        text-transform: uppercase;
                    }
                    @media (max-width: 768px) {
                        .deck-header {
                            padding: 1.25rem 1.5rem;
                        }
                        .deck-header-links {
                            display: none;
                        }
                    }
                "#}
            </style>
        </header>
    }
}
