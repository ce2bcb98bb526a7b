use yew::prelude::*;

use crate::animation::reveal::{item_key, reveal_classes, RevealRegistry};
use crate::components::heading::SectionHeader;
use crate::content::{PricingContent, PricingTier};

#[derive(Properties, PartialEq)]
pub struct PricingProps {
    pub content: PricingContent,
    pub reveal: UseReducerHandle<RevealRegistry>,
}

#[derive(Properties, PartialEq)]
pub struct PricingCardProps {
    pub tier: PricingTier,
    pub reveal_key: String,
    pub revealed: bool,
}

#[function_component(PricingCard)]
pub fn pricing_card(props: &PricingCardProps) -> Html {
    let tier = &props.tier;
    html! {
        <div
            class={classes!(
                "pricing-card",
                if tier.highlighted { "highlighted" } else { "" },
                reveal_classes(props.revealed)
            )}
            data-reveal={props.reveal_key.clone()}
        >
            <div class="tier-name">{tier.name.clone()}</div>
            <div class="tier-price">{tier.price.clone()}</div>
            <div class="tier-period">{tier.period.clone()}</div>
            <ul class="tier-features">
                { for tier.features.iter().map(|feature| html! {
                    <li>{format!("✓ {}", feature)}</li>
                }) }
            </ul>
            <button class={classes!("tier-button", if tier.highlighted { "primary-button" } else { "secondary-button" })}>
                {tier.button_label.clone()}
            </button>
        </div>
    }
}

#[function_component(Pricing)]
pub fn pricing(props: &PricingProps) -> Html {
    let card_css = r#"
        .pricing-section {
            background: radial-gradient(circle, rgba(102, 126, 234, 0.05) 0%, transparent 70%);
        }
        .pricing-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
            gap: 40px;
            max-width: 900px;
            margin: 0 auto;
        }
        .pricing-card {
            background: rgba(255, 255, 255, 0.03);
            border: 1px solid rgba(255, 255, 255, 0.1);
            border-radius: 20px;
            padding: 50px 40px;
            text-align: center;
        }
        .pricing-card.highlighted {
            border: 2px solid #667eea;
            background: rgba(102, 126, 234, 0.08);
        }
        .tier-name {
            font-size: 24px;
            font-weight: 600;
            margin-bottom: 20px;
        }
        .tier-price {
            font-size: 56px;
            font-weight: 800;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
        }
        .tier-period {
            opacity: 0.6;
            margin-bottom: 30px;
        }
        .tier-features {
            list-style: none;
            padding: 0;
            margin-bottom: 40px;
            text-align: left;
        }
        .tier-features li {
            padding: 12px 0;
            border-bottom: 1px solid rgba(255, 255, 255, 0.05);
        }
        .tier-button {
            width: 100%;
        }
    "#;
    let reveal = &props.reveal;
    html! {
        <section id="pricing" class="page-section pricing-section">
            <style>{card_css}</style>
            <SectionHeader
                heading={props.content.heading.clone()}
                reveal_key="pricing-heading"
                revealed={reveal.is_revealed("pricing-heading")}
            />
            <div class="pricing-grid">
                { for props.content.tiers.iter().enumerate().map(|(i, tier)| {
                    let key = item_key("pricing", i);
                    let revealed = reveal.is_revealed(&key);
                    html! {
                        <PricingCard
                            key={key.clone()}
                            tier={tier.clone()}
                            revealed={revealed}
                            reveal_key={key.clone()}
                        />
                    }
                }) }
            </div>
        </section>
    }
}
