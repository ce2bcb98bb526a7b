use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use crate::animation::counter::{
    format_number, format_rating, CounterState, CounterTargets, CounterTrigger, CounterTween,
};
use crate::config;
use crate::content::StatsContent;
use crate::utils::scroll::find_element;
use crate::utils::ticker::{StepTicker, TickControl};
use crate::utils::viewport::ViewportObserver;

#[derive(Properties, PartialEq)]
pub struct StatsProps {
    pub content: StatsContent,
}

/// Runs the count-up once the stats section is half on screen. The
/// returned observer has to stay alive for the watch to keep working.
fn watch_stats(
    targets: CounterTargets,
    counters: UseStateHandle<CounterState>,
    animation: Rc<RefCell<StepTicker>>,
) -> Option<ViewportObserver> {
    let section = match find_element(config::STATS_SECTION_ID) {
        Some(section) => section,
        None => {
            log::debug!("No #{} on the page, counters stay at zero", config::STATS_SECTION_ID);
            return None;
        }
    };

    let mut trigger = CounterTrigger::new(targets, config::COUNTER_STEPS);
    let observer = ViewportObserver::new(&config::stats_watch(), move |_| {
        let mut tween = match trigger.enter() {
            Some(tween) => tween,
            None => return,
        };
        log::info!("Stats section in view, starting counter animation");

        let counters = counters.clone();
        let period = CounterTween::period_ms(config::COUNTER_DURATION_MS, config::COUNTER_STEPS);
        let ticker = StepTicker::start(period, move || match tween.advance() {
            Some(state) => {
                counters.set(state);
                if tween.is_complete() {
                    log::info!("Counter animation finished after {} steps", tween.step());
                    TickControl::Stop
                } else {
                    TickControl::Continue
                }
            }
            None => TickControl::Stop,
        });
        *animation.borrow_mut() = ticker;
    });

    match observer {
        Ok(observer) => {
            observer.observe(&section);
            Some(observer)
        }
        Err(e) => {
            log::warn!("Could not watch the stats section: {:?}", e);
            None
        }
    }
}

#[function_component(Stats)]
pub fn stats(props: &StatsProps) -> Html {
    let counters = use_state(CounterState::default);
    {
        let counters = counters.clone();
        let targets = props.content.targets;
        use_effect_with_deps(
            move |_| {
                let animation = Rc::new(RefCell::new(StepTicker::idle()));
                let observer = watch_stats(targets, counters, animation.clone());
                move || {
                    drop(observer);
                    let animation = animation.borrow();
                    if animation.is_running() {
                        log::debug!("Stopping counter animation on unmount");
                    }
                    animation.cancel();
                }
            },
            (),
        );
    }

    let stats_css = r#"
        .stats-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
            gap: 40px;
            max-width: 1000px;
            margin: 0 auto;
            text-align: center;
        }
        .stat-tile {
            padding: 20px;
        }
        .stat-value {
            font-size: 48px;
            font-weight: 800;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
            margin-bottom: 10px;
        }
        .stat-label {
            font-size: 16px;
            opacity: 0.7;
        }
    "#;
    let content = &props.content;
    let tiles = [
        (format_number(counters.user_count), content.user_count_label.clone()),
        (format_number(counters.total_blocks), content.total_blocks_label.clone()),
        (format_number(counters.focus_hours), content.focus_hours_label.clone()),
        (format_rating(counters.rating_score), content.rating_label.clone()),
    ];
    html! {
        <section id={config::STATS_SECTION_ID} class="stats-section">
            <style>{stats_css}</style>
            <div class="stats-grid">
                { for tiles.into_iter().map(|(value, label)| html! {
                    <div class="stat-tile">
                        <div class="stat-value">{value}</div>
                        <div class="stat-label">{label}</div>
                    </div>
                }) }
            </div>
        </section>
    }
}
