use std::collections::HashSet;
use std::rc::Rc;

use yew::{classes, Classes, Reducible};

use crate::config;

/// Keys of the page elements that have scrolled into view at least once.
/// Elements never leave the set, so a revealed section stays revealed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RevealRegistry {
    revealed: HashSet<String>,
}

pub enum RevealAction {
    Reveal(String),
}

impl RevealRegistry {
    pub fn is_revealed(&self, key: &str) -> bool {
        self.revealed.contains(key)
    }

    /// Returns `true` only the first time `key` is revealed.
    pub fn reveal(&mut self, key: impl Into<String>) -> bool {
        self.revealed.insert(key.into())
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }
}

impl Reducible for RevealRegistry {
    type Action = RevealAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            RevealAction::Reveal(key) => {
                if self.is_revealed(&key) {
                    // Same Rc back, so Yew skips the re-render.
                    return self;
                }
                let mut next = (*self).clone();
                next.reveal(key.clone());
                log::debug!("Revealed section {} ({} visible)", key, next.len());
                Rc::new(next)
            }
        }
    }
}

/// Classes for a reveal candidate: always the marker class the observer
/// looks for, plus `visible` once the element has been revealed.
pub fn reveal_classes(revealed: bool) -> Classes {
    classes!(config::REVEAL_CLASS, revealed.then_some("visible"))
}

/// Key for the `index`-th card of a repeated section, e.g. `feature-2`.
pub fn item_key(section: &str, index: usize) -> String {
    format!("{}-{}", section, index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_only_once() {
        let mut registry = RevealRegistry::default();
        assert!(!registry.is_revealed("feature-0"));
        assert!(registry.reveal("feature-0"));
        assert!(!registry.reveal("feature-0"));
        assert!(registry.is_revealed("feature-0"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_duplicate_intersection_keeps_state() {
        let registry = Rc::new(RevealRegistry::default());
        let first = registry.reduce(RevealAction::Reveal("pricing-free".into()));
        assert!(first.is_revealed("pricing-free"));

        let second = first.clone().reduce(RevealAction::Reveal("pricing-free".into()));
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(second.len(), 1);
    }

    #[test]
    fn test_item_keys_are_tracked_separately() {
        let mut registry = RevealRegistry::default();
        let key = item_key("feature", 2);
        assert_eq!(key, "feature-2");
        assert!(registry.reveal(key.clone()));
        assert!(registry.is_revealed(&key));
        assert!(!registry.is_revealed(&item_key("feature", 1)));
        assert!(!registry.is_revealed(&item_key("pricing", 2)));
    }

    #[test]
    fn test_reveal_classes() {
        let hidden = reveal_classes(false);
        assert!(hidden.contains("fade-in"));
        assert!(!hidden.contains("visible"));
        let shown = reveal_classes(true);
        assert!(shown.contains("fade-in"));
        assert!(shown.contains("visible"));
    }

    #[test]
    fn test_nodes_reveal_independently() {
        let registry = Rc::new(RevealRegistry::default());
        let registry = registry.reduce(RevealAction::Reveal("feature-3".into()));
        let registry = registry.reduce(RevealAction::Reveal("feature-1".into()));
        assert!(registry.is_revealed("feature-1"));
        assert!(registry.is_revealed("feature-3"));
        assert!(!registry.is_revealed("feature-2"));
    }
}
