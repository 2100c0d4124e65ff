use yew::prelude::*;

use crate::deck::navigation::bounds;
use crate::deck::slide_id::SlideIndex;

#[derive(Properties, PartialEq)]
pub struct NavigationProps {
    pub active: SlideIndex,
    pub total: usize,
    pub on_navigate: Callback<usize>,
}

/// Previous/next arrows, one dot per slide and a position counter.
#[function_component(SlideNavigation)]
pub fn slide_navigation(props: &NavigationProps) -> Html {
    let NavigationProps { active, total, on_navigate } = props;
    let current = active.get();
    let (at_first, at_last) = bounds(*active, *total);

    let go = |target: usize| {
        let on_navigate = on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(target))
    };
    let previous = go(current.saturating_sub(1));
    let next = go((current + 1).min(total.saturating_sub(1)));

    html! {
        <div class="slide-nav">
            <button class="slide-nav-arrow" aria-label="Previous Slide" disabled={at_first} onclick={previous}>
                {"↑"}
            </button>
            <div class="slide-nav-dots">
                {
                    for (0..*total).map(|i| html! {
                        <button
                            key={i}
                            class={classes!("slide-nav-dot", (i == current).then(|| "active"))}
                            aria-label={format!("Go to slide {}", i + 1)}
                            onclick={go(i)}
                        />
                    })
                }
            </div>
            <button class="slide-nav-arrow" aria-label="Next Slide" disabled={at_last} onclick={next}>
                {"↓"}
            </button>
            <div class="slide-nav-counter">
                {format!("{} / {:02}", active.label(), total)}
            </div>

            <style>
                {r#"
                    .slide-nav {
                        position: fixed;
                        bottom: 5rem;
                        right: 3rem;
                        z-index: 50;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 0.5rem;
                    }
                    .slide-nav-arrow {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 50%;
                        background: rgba(255, 255, 255, 0.9);
                        border: 1px solid #e8e8e8;
                        color: #666;
                        cursor: pointer;
                        transition: all 0.3s;
                    }
                    .slide-nav-arrow:hover:not(:disabled) {
                        color: #8b6f47;
                        border-color: #8b6f47;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    }
                    .slide-nav-arrow:disabled {
                        opacity: 0.5;
                        cursor: default;
                    }
                    .slide-nav-dots {
                        display: flex;
                        flex-direction: column;
                        gap: 0.4rem;
                        padding: 0.25rem 0;
                    }
                    .slide-nav-dot {
                        width: 6px;
                        height: 6px;
                        padding: 0;
                        border-radius: 50%;
                        border: none;
                        background: #d4d4d4;
                        cursor: pointer;
                        transition: transform 0.3s, background 0.3s;
                    }
                    .slide-nav-dot.active {
                        background: #8b6f47;
                        transform: scale(1.5);
                    }
                    .slide-nav-counter {
                        font-size: 0.625rem;
                        font-weight: 600;
                        letter-spacing: 0.1em;
                        color: #999;
                    }
                    @media (max-width: 768px) {
                        .slide-nav {
                            display: none;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
