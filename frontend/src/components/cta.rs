use yew::prelude::*;

use crate::animation::reveal::reveal_classes;
use crate::content::{CtaContent, FooterContent};

#[derive(Properties, PartialEq)]
pub struct CtaProps {
    pub content: CtaContent,
    pub revealed: bool,
}

#[function_component(CallToAction)]
pub fn call_to_action(props: &CtaProps) -> Html {
    let content = &props.content;
    html! {
        <section class={classes!("cta-section", reveal_classes(props.revealed))} data-reveal="cta">
            <h2>{content.title.clone()}</h2>
            <p class="subtitle">{content.subtitle.clone()}</p>
            <a class="primary-button" href={content.href.clone()}>{content.label.clone()}</a>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub content: FooterContent,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-links">
                { for props.content.links.iter().map(|link| html! {
                    <a href={link.href.clone()}>{link.label.clone()}</a>
                }) }
            </div>
            <p class="copyright">{props.content.copyright.clone()}</p>
        </footer>
    }
}
