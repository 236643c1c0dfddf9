use log::{error, info};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::button::GrayButton;
use crate::components::disclosure::SectionList;
use crate::components::reveal_container::RevealContainer;
use crate::config::PageConfig;
use crate::reveal::use_reveal;

fn navigate_to(url: &str) {
    match web_sys::window() {
        Some(window) => {
            if let Err(e) = window.location().set_href(url) {
                error!("Failed to navigate to {}: {:?}", url, e);
            }
        }
        None => error!("No window to navigate to {}", url),
    }
}

#[derive(Properties, PartialEq)]
pub struct SupportPageProps {
    pub config: PageConfig,
}

#[function_component(SupportPage)]
pub fn support_page(props: &SupportPageProps) -> Html {
    let config = props.config;
    let reveal = use_reveal(config.reveal);

    let on_donate = {
        let url = config.donate_url;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            info!("Donate button clicked, leaving for {}", url);
            navigate_to(url);
        })
    };

    let page_style = format!("background: {};", config.theme.background());
    let heading_style = format!("background-image: {};", config.theme.heading());

    html! {
        <div class="support-page" style={page_style}>
            <main class="support-main">
                <div class="support-hero">
                    <h1 style={heading_style.clone()}>{"Support the people in Ukraine!"}</h1>
                    <h2 style={heading_style}>
                        <i>{"A collection of useful resources aimed at those who are interested in supporting the people in Ukraine."}</i>
                    </h2>
                </div>

                <div class="support-card-row">
                    <RevealContainer state={reveal} transition={config.transition}>
                        <div class="support-card">
                            <SectionList sections={config.sections} />
                        </div>
                    </RevealContainer>
                </div>

                <div class="support-actions">
                    <GrayButton overrides={config.donate_button} onclick={on_donate}>{"Support Ukraine"}</GrayButton>
                </div>

                <a href={config.author.href} class="support-author">
                    <p><i>{config.author.greeting}</i></p>
                    <p><i>{config.author.intro}</i></p>
                    <p><i>{"(Click to read more)"}</i></p>
                </a>
            </main>

            <style>
                {r#"
                .support-page {
                    min-height: 100vh;
                    overflow-x: hidden;
                    padding: 3rem 0.5rem;
                    box-sizing: border-box;
                }

                .support-hero {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    margin: 2rem 0;
                    text-align: center;
                }

                .support-hero h1,
                .support-hero h2 {
                    -webkit-background-clip: text;
                    background-clip: text;
                    -webkit-text-fill-color: transparent;
                    filter: drop-shadow(0 4px 3px rgba(0, 0, 0, 0.07));
                }

                .support-hero h1 {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                }

                .support-hero h2 {
                    font-size: 1.25rem;
                    font-weight: normal;
                }

                .support-card-row {
                    display: flex;
                    justify-content: center;
                    padding: 2rem 1rem 0;
                    margin-bottom: 3rem;
                }

                .reveal {
                    width: 100%;
                    max-width: 32rem;
                }

                .support-card {
                    display: flex;
                    flex-direction: column;
                    gap: 0.25rem;
                    padding: 0.5rem;
                    background: rgba(255, 255, 255, 0.75);
                    border-radius: 1rem;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    backdrop-filter: blur(24px);
                }

                .disclosure-button {
                    display: flex;
                    justify-content: space-between;
                    width: 100%;
                    padding: 0.5rem 1rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                    text-align: left;
                    color: #1e3a8a;
                    background: white;
                    border: none;
                    border-radius: 0.5rem;
                    cursor: pointer;
                }

                .disclosure-button:hover {
                    background: #f3f4f6;
                }

                .chevron {
                    color: #3b82f6;
                    transition: transform 0.2s;
                }

                .chevron-open {
                    transform: rotate(180deg);
                }

                .disclosure-panel {
                    padding: 1rem 1rem 0.5rem;
                    font-size: 0.875rem;
                    color: #111827;
                }

                .section-text {
                    margin: 0 0 0.5rem;
                }

                .section-link {
                    color: inherit;
                    text-decoration: none;
                }

                .section-link:hover {
                    text-decoration: underline;
                    color: #3b82f6;
                }

                .support-actions {
                    display: flex;
                    justify-content: center;
                    flex-wrap: wrap;
                    gap: 1rem;
                }

                .gray-button {
                    display: inline-flex;
                    justify-content: center;
                    padding: 0.5rem 1rem;
                    color: white;
                    background: rgba(0, 0, 0, 0.2);
                    border: none;
                    border-radius: 0.375rem;
                    cursor: pointer;
                }

                .gray-button:hover {
                    background: rgba(0, 0, 0, 0.3);
                }

                .gray-button:focus-visible {
                    outline: 2px solid rgba(255, 255, 255, 0.75);
                }

                .support-author {
                    display: block;
                    margin-top: 2.5rem;
                    text-align: center;
                    color: white;
                    text-decoration: none;
                }

                .support-author:hover {
                    text-decoration: underline;
                    color: #dbeafe;
                }

                .support-author p {
                    margin: 0 0 0.25rem;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::components::reveal_container::RevealContainerProps;
    use crate::config::Transition;
    use crate::reveal::tests::ManualScheduler;
    use crate::reveal::{RevealPolicy, RevealState, VisibilityTimer};

    async fn render_page(config: PageConfig) -> String {
        yew::ServerRenderer::<SupportPage>::with_props(move || SupportPageProps { config })
            .render()
            .await
    }

    async fn render_card(state: RevealState) -> String {
        yew::ServerRenderer::<RevealContainer>::with_props(move || RevealContainerProps {
            state,
            transition: Transition::default(),
            children: Children::default(),
        })
        .render()
        .await
    }

    #[tokio::test]
    async fn sections_render_open_in_order() {
        let rendered = render_page(PageConfig::on_mount()).await;

        let positions: Vec<usize> = ["Donate!", "Support Ukrainian Developers", "👷 Work In Progress"]
            .iter()
            .map(|title| rendered.find(title).expect("section title missing"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        assert_eq!(rendered.matches(r#"aria-expanded="true""#).count(), 3);
        assert!(rendered.contains("🤍 COME BACK ALIVE"));
        assert!(rendered.contains("Leaflet 🍃 by Vladimir Agafonkin"));
        assert!(rendered.contains("mailto:juniormateusknd@gmail.com"));
    }

    #[tokio::test]
    async fn page_starts_hidden_then_reveals_after_delay() {
        let config = PageConfig::delayed();
        let rendered = render_page(config).await;
        assert!(rendered.contains("reveal-hidden"));

        let delay = match config.reveal {
            RevealPolicy::After(ms) => u64::from(ms),
            RevealPolicy::OnMount => panic!("delayed preset reveals on mount"),
        };
        assert!(delay > 0);
        let scheduler = ManualScheduler::default();
        let timer = VisibilityTimer::start(&scheduler, config.reveal, |_| {});

        scheduler.advance(delay - 1);
        assert_eq!(timer.current_state(), RevealState::Hidden);
        assert!(render_card(timer.current_state()).await.contains("reveal-hidden"));

        scheduler.advance(1);
        assert_eq!(timer.current_state(), RevealState::Visible);
        assert!(render_card(timer.current_state()).await.contains("reveal-visible"));
    }

    #[tokio::test]
    async fn theme_colours_the_page() {
        let rendered = render_page(PageConfig::delayed()).await;
        assert!(rendered.contains("#ca8a04"));
        assert!(rendered.contains(">Support Ukraine</button>"));
    }
}
