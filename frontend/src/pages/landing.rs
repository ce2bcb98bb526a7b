use wasm_bindgen::JsValue;
use yew::prelude::*;

use crate::animation::reveal::{RevealAction, RevealRegistry};
use crate::components::cta::{CallToAction, Footer};
use crate::components::faq::Faq;
use crate::components::features::Features;
use crate::components::hero::Hero;
use crate::components::nav::Nav;
use crate::components::pricing::Pricing;
use crate::components::stats::Stats;
use crate::config;
use crate::content::LandingContent;
use crate::utils::viewport::ViewportObserver;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub content: LandingContent,
}

/// Watches every reveal candidate on the page and records the first time
/// each one scrolls into view.
fn watch_reveals(reveal: UseReducerHandle<RevealRegistry>) -> Result<Option<ViewportObserver>, JsValue> {
    let document = match web_sys::window().and_then(|window| window.document()) {
        Some(document) => document,
        None => return Ok(None),
    };
    let nodes = document.query_selector_all(&format!(".{}", config::REVEAL_CLASS))?;
    let observer = ViewportObserver::new(&config::reveal_watch(), move |element| {
        if let Some(key) = element.get_attribute(config::REVEAL_KEY_ATTR) {
            reveal.dispatch(RevealAction::Reveal(key));
        }
    })?;
    let watched = observer.observe_all(&nodes);
    log::debug!("Watching {} reveal candidates", watched);
    Ok(Some(observer))
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let reveal = use_reducer(RevealRegistry::default);
    {
        let reveal = reveal.clone();
        use_effect_with_deps(
            move |_| {
                let observer = watch_reveals(reveal).unwrap_or_else(|e| {
                    log::warn!("Could not watch reveal sections: {:?}", e);
                    None
                });
                move || {
                    drop(observer);
                }
            },
            (),
        );
    }

    let page_css = r#"
        .landing-page {
            background: #0a0a0a;
            color: #fff;
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", system-ui, sans-serif;
            overflow-x: hidden;
        }
        .top-nav {
            position: fixed;
            top: 0;
            width: 100%;
            padding: 20px 5%;
            background: rgba(10, 10, 10, 0.8);
            backdrop-filter: blur(10px);
            z-index: 1000;
            display: flex;
            justify-content: space-between;
            align-items: center;
            border-bottom: 1px solid rgba(255, 255, 255, 0.1);
            box-sizing: border-box;
        }
        .nav-logo {
            background: none;
            border: none;
            cursor: pointer;
        }
        .nav-logo img {
            height: 40px;
        }
        .nav-links {
            display: flex;
            gap: 30px;
            align-items: center;
        }
        .nav-link {
            color: #fff;
            cursor: pointer;
            font-size: 14px;
            background: none;
            border: none;
        }
        .nav-cta, .primary-button {
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            color: #fff;
            border: none;
            border-radius: 30px;
            text-decoration: none;
            font-weight: 600;
            cursor: pointer;
        }
        .nav-cta {
            padding: 10px 24px;
            font-size: 14px;
        }
        .primary-button, .secondary-button {
            display: inline-block;
            padding: 16px 40px;
            font-size: 18px;
        }
        .secondary-button {
            background: rgba(255, 255, 255, 0.1);
            color: #fff;
            border: 2px solid rgba(255, 255, 255, 0.2);
            border-radius: 30px;
            font-weight: 600;
            cursor: pointer;
        }
        .hero {
            min-height: 100vh;
            display: flex;
            align-items: center;
            justify-content: center;
            text-align: center;
            padding: 120px 5% 80px;
            background: radial-gradient(ellipse at top, rgba(102, 126, 234, 0.15) 0%, transparent 60%);
        }
        .hero-content {
            max-width: 800px;
        }
        .hero-title {
            font-size: 64px;
            font-weight: 800;
            line-height: 1.1;
            margin-bottom: 30px;
            background: linear-gradient(135deg, #fff 0%, #667eea 100%);
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
        }
        .hero-subtitle {
            font-size: 20px;
            opacity: 0.8;
            margin-bottom: 40px;
            line-height: 1.6;
        }
        .hero-cta-group {
            display: flex;
            gap: 20px;
            justify-content: center;
            flex-wrap: wrap;
        }
        .page-section {
            padding: 100px 5%;
        }
        .stats-section {
            padding: 80px 5%;
        }
        .section-header {
            text-align: center;
            margin-bottom: 80px;
        }
        .gradient-title {
            font-size: 48px;
            font-weight: 700;
            margin-bottom: 20px;
            background: linear-gradient(135deg, #fff 0%, #667eea 100%);
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
        }
        .section-subtitle {
            font-size: 18px;
            opacity: 0.7;
        }
        .cta-section {
            padding: 100px 5%;
            text-align: center;
        }
        .cta-section h2 {
            font-size: 48px;
            font-weight: 700;
            margin-bottom: 20px;
        }
        .cta-section .subtitle {
            font-size: 20px;
            opacity: 0.7;
            margin-bottom: 40px;
        }
        .site-footer {
            padding: 60px 5%;
            text-align: center;
            border-top: 1px solid rgba(255, 255, 255, 0.1);
        }
        .footer-links {
            display: flex;
            gap: 30px;
            justify-content: center;
            flex-wrap: wrap;
            margin-bottom: 20px;
        }
        .footer-links a {
            color: #fff;
            opacity: 0.7;
            text-decoration: none;
        }
        .copyright {
            opacity: 0.5;
            font-size: 14px;
        }
        .fade-in {
            opacity: 0;
            transform: translateY(30px);
            transition: opacity 0.8s ease, transform 0.8s ease;
        }
        .fade-in.visible {
            opacity: 1;
            transform: translateY(0);
        }
        @media (max-width: 768px) {
            .hero-title {
                font-size: 40px;
            }
            .gradient-title, .cta-section h2 {
                font-size: 32px;
            }
            .nav-links {
                gap: 16px;
            }
        }
    "#;
    let content = &props.content;
    html! {
        <div class="landing-page">
            <style>{page_css}</style>
            <Nav content={content.nav.clone()} />
            <Hero content={content.hero.clone()} />
            <Features content={content.features.clone()} reveal={reveal.clone()} />
            <Stats content={content.stats.clone()} />
            <Pricing content={content.pricing.clone()} reveal={reveal.clone()} />
            <Faq content={content.faq.clone()} reveal={reveal.clone()} />
            <CallToAction content={content.cta.clone()} revealed={reveal.is_revealed("cta")} />
            <Footer content={content.footer.clone()} />
        </div>
    }
}
