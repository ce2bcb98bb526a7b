use yew::prelude::*;

use crate::animation::reveal::{item_key, reveal_classes, RevealRegistry};
use crate::components::heading::SectionHeader;
use crate::content::{Feature, FeaturesContent};

#[derive(Properties, PartialEq)]
pub struct FeaturesProps {
    pub content: FeaturesContent,
    pub reveal: UseReducerHandle<RevealRegistry>,
}

#[derive(Properties, PartialEq)]
struct FeatureCardProps {
    feature: Feature,
    reveal_key: String,
    revealed: bool,
}

#[function_component(FeatureCard)]
fn feature_card(props: &FeatureCardProps) -> Html {
    html! {
        <div class={classes!("feature-card", reveal_classes(props.revealed))} data-reveal={props.reveal_key.clone()}>
            <span class="feature-icon">{props.feature.icon.clone()}</span>
            <h3>{props.feature.title.clone()}</h3>
            <p>{props.feature.description.clone()}</p>
        </div>
    }
}

#[function_component(Features)]
pub fn features(props: &FeaturesProps) -> Html {
    let features_css = r#"
        .feature-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
            gap: 40px;
            max-width: 1200px;
            margin: 0 auto;
        }
        .feature-card {
            background: rgba(255, 255, 255, 0.03);
            border: 1px solid rgba(255, 255, 255, 0.1);
            border-radius: 20px;
            padding: 40px;
        }
        .feature-card:hover {
            border-color: rgba(102, 126, 234, 0.5);
        }
        .feature-icon {
            font-size: 48px;
            display: block;
            margin-bottom: 20px;
        }
        .feature-card h3 {
            font-size: 24px;
            margin-bottom: 15px;
        }
        .feature-card p {
            opacity: 0.7;
            line-height: 1.6;
        }
    "#;
    let reveal = &props.reveal;
    html! {
        <section id="features" class="page-section">
            <style>{features_css}</style>
            <SectionHeader
                heading={props.content.heading.clone()}
                reveal_key="features-heading"
                revealed={reveal.is_revealed("features-heading")}
            />
            <div class="feature-grid">
                { for props.content.items.iter().enumerate().map(|(i, feature)| {
                    let key = item_key("feature", i);
                    let revealed = reveal.is_revealed(&key);
                    html! {
                        <FeatureCard
                            key={key.clone()}
                            feature={feature.clone()}
                            revealed={revealed}
                            reveal_key={key.clone()}
                        />
                    }
                }) }
            </div>
        </section>
    }
}
