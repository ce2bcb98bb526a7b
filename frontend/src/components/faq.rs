use yew::prelude::*;
use web_sys::MouseEvent;

use crate::animation::reveal::RevealRegistry;
use crate::components::heading::SectionHeader;
use crate::content::FaqContent;

/// Which FAQ entry, if any, is expanded. At most one is open at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FaqSelection {
    expanded: Option<usize>,
}

impl FaqSelection {
    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    /// Opens `index`, or closes it if it was already open. Indices past
    /// `entry_count` leave the selection as it is.
    pub fn toggle(self, index: usize, entry_count: usize) -> Self {
        if index >= entry_count {
            return self;
        }
        if self.is_expanded(index) {
            Self::default()
        } else {
            Self {
                expanded: Some(index),
            }
        }
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    id: String,
    expanded: bool,
    on_toggle: Callback<MouseEvent>,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    html! {
        <div id={props.id.clone()} class={classes!("faq-item", if props.expanded { "open" } else { "" })} onclick={props.on_toggle.clone()}>
            <div class="faq-question">
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if props.expanded { "−" } else { "+" }}</span>
            </div>
            {
                if props.expanded {
                    html! { <div class="faq-answer">{ for props.children.iter() }</div> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqProps {
    pub content: FaqContent,
    pub reveal: UseReducerHandle<RevealRegistry>,
}

#[function_component(Faq)]
pub fn faq(props: &FaqProps) -> Html {
    let selection = use_state(FaqSelection::default);
    let entry_count = props.content.entries.len();

    let faq_css = r#"
        .faq-list {
            max-width: 800px;
            margin: 0 auto;
        }
        .faq-item {
            background: rgba(255, 255, 255, 0.03);
            border: 1px solid rgba(255, 255, 255, 0.1);
            border-radius: 15px;
            padding: 25px 30px;
            margin-bottom: 20px;
            cursor: pointer;
            transition: border-color 0.3s ease;
        }
        .faq-item.open {
            border-color: rgba(102, 126, 234, 0.5);
        }
        .faq-question {
            display: flex;
            justify-content: space-between;
            align-items: center;
            gap: 1rem;
            font-size: 18px;
            font-weight: 600;
        }
        .toggle-icon {
            color: #667eea;
            font-size: 24px;
        }
        .faq-answer {
            margin-top: 15px;
            opacity: 0.7;
            line-height: 1.7;
        }
    "#;
    html! {
        <section id="faq" class="page-section">
            <style>{faq_css}</style>
            <SectionHeader
                heading={props.content.heading.clone()}
                reveal_key="faq-heading"
                revealed={props.reveal.is_revealed("faq-heading")}
            />
            <div class="faq-list">
                { for props.content.entries.iter().enumerate().map(|(i, entry)| {
                    let on_toggle = {
                        let selection = selection.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            let next = selection.toggle(i, entry_count);
                            log::debug!("FAQ expanded entry: {:?}", next.expanded());
                            selection.set(next);
                        })
                    };
                    html! {
                        <FaqItem
                            key={i.to_string()}
                            id={format!("faq-{}", i)}
                            question={entry.question.clone()}
                            expanded={selection.is_expanded(i)}
                            on_toggle={on_toggle}
                        >
                            <p>{entry.answer.clone()}</p>
                        </FaqItem>
                    }
                }) }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTRIES: usize = 6;

    #[test]
    fn test_starts_collapsed() {
        let selection = FaqSelection::default();
        assert_eq!(selection.expanded(), None);
        assert!((0..ENTRIES).all(|i| !selection.is_expanded(i)));
    }

    #[test]
    fn test_toggle_twice_collapses() {
        let selection = FaqSelection::default().toggle(3, ENTRIES);
        assert_eq!(selection.expanded(), Some(3));
        let selection = selection.toggle(3, ENTRIES);
        assert_eq!(selection.expanded(), None);
    }

    #[test]
    fn test_only_one_entry_open() {
        let selection = FaqSelection::default().toggle(1, ENTRIES).toggle(4, ENTRIES);
        assert_eq!(selection.expanded(), Some(4));
        assert!(!selection.is_expanded(1));
        let open = (0..ENTRIES).filter(|&i| selection.is_expanded(i)).count();
        assert_eq!(open, 1);
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let selection = FaqSelection::default().toggle(2, ENTRIES);
        assert_eq!(selection.toggle(ENTRIES, ENTRIES), selection);
        assert_eq!(FaqSelection::default().toggle(0, 0).expanded(), None);
    }
}
