use yew::prelude::*;

use crate::content::HeroContent;
use crate::utils::scroll::scroll_callback;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub content: HeroContent,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let content = &props.content;
    let last = content.headline.len().saturating_sub(1);
    html! {
        <section id="home" class="hero">
            <div class="hero-content">
                <h1 class="hero-title">
                    { for content.headline.iter().enumerate().map(|(i, line)| html! {
                        <>
                            {line.clone()}
                            { if i < last { html! { <br/> } } else { html! {} } }
                        </>
                    }) }
                </h1>
                <p class="hero-subtitle">{content.subtitle.clone()}</p>
                <div class="hero-cta-group">
                    <a class="primary-button" href={content.primary_href.clone()}>{content.primary_label.clone()}</a>
                    <button class="secondary-button" onclick={scroll_callback("features")}>
                        {content.secondary_label.clone()}
                    </button>
                </div>
            </div>
        </section>
    }
}
