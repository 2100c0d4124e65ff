use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="deck-footer">
            <div>
                {"Consultancy Firm: "}
                <a href="https://naveedconsults.com" target="_blank" rel="noreferrer">{"naveedconsults.com"}</a>
            </div>
            <div>
                {"Brand & Communication Strategy: "}
                <span class="credit">{"The Cold Brew"}</span>
            </div>
            <style>
                {r#"
                    .deck-footer {
                        position: fixed;
                        bottom: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        display: flex;
                        justify-content: space-between;
                        padding: 1rem 3rem;
                        background: rgba(255, 255, 255, 0.9);
                        backdrop-filter: blur(12px);
                        border-top: 1px solid #e8e8e8;
                        font-size: 0.6875rem;
                        color: #999;
                        letter-spacing: 0.05em;
                    }
                    .deck-footer a {
                        color: #8b6f47;
                        font-weight: 500;
                        text-decoration: none;
                    }
                    .deck-footer a:hover {
                        text-decoration: underline;
                    }
                    .deck-footer .credit {
                        color: #1a1a1a;
                        font-weight: 500;
                    }
                    @media (max-width: 768px) {
                        .deck-footer {
                            flex-direction: column;
                            gap: 0.5rem;
                            padding: 1rem 1.5rem;
                        }
                    }
                "#}
            </style>
        </footer>
    }
}
