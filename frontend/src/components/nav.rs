use yew::prelude::*;

use crate::content::NavContent;
use crate::utils::scroll::scroll_callback;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub content: NavContent,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let content = &props.content;
    html! {
        <nav class="top-nav">
            <button class="nav-logo" onclick={scroll_callback("home")}>
                <img src={content.logo_src.clone()} alt={content.logo_alt.clone()} />
            </button>
            <div class="nav-links">
                <button class="nav-link" onclick={scroll_callback("features")}>{content.features_label.clone()}</button>
                <button class="nav-link" onclick={scroll_callback("pricing")}>{content.pricing_label.clone()}</button>
                <a class="nav-cta" href={content.cta_href.clone()}>{content.cta_label.clone()}</a>
            </div>
        </nav>
    }
}
