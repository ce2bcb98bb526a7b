use yew::prelude::*;

use crate::animation::reveal::reveal_classes;
use crate::content::SectionHeading;

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub heading: SectionHeading,
    pub reveal_key: String,
    pub revealed: bool,
}

#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <div class={classes!("section-header", reveal_classes(props.revealed))} data-reveal={props.reveal_key.clone()}>
            <h2 class="gradient-title">{props.heading.title.clone()}</h2>
            <p class="section-subtitle">{props.heading.subtitle.clone()}</p>
        </div>
    }
}
