//! Viewport visibility watches on top of `IntersectionObserver`.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, NodeList,
};

/// How much of a target has to be on screen before a watch fires.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportWatch {
    pub threshold: f64,
    pub root_margin: String,
    /// Stop observing a target after it has fired once.
    pub once: bool,
}

impl ViewportWatch {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            root_margin: "0px".to_string(),
            once: false,
        }
    }

    pub fn root_margin(mut self, margin: impl Into<String>) -> Self {
        self.root_margin = margin.into();
        self
    }

    pub fn once(mut self) -> Self {
        self.once = true;
        self
    }

    fn options(&self) -> IntersectionObserverInit {
        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(self.threshold));
        options.set_root_margin(&self.root_margin);
        options
    }
}

/// Owns an `IntersectionObserver` and the closure it calls. Dropping it
/// disconnects the observer, so no callback runs after teardown.
pub struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ViewportObserver {
    /// `on_enter` is called with every target that starts intersecting.
    pub fn new<F>(watch: &ViewportWatch, mut on_enter: F) -> Result<Self, JsValue>
    where
        F: FnMut(Element) + 'static,
    {
        let once = watch.once;
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    if once {
                        observer.unobserve(&target);
                    }
                    on_enter(target);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let observer = IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &watch.options(),
        )?;
        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, target: &Element) {
        self.observer.observe(target);
    }

    /// Observes every element in `nodes`, returning how many were added.
    pub fn observe_all(&self, nodes: &NodeList) -> usize {
        let mut count = 0;
        for index in 0..nodes.length() {
            if let Some(element) = nodes.item(index).and_then(|node| node.dyn_into::<Element>().ok()) {
                self.observe(&element);
                count += 1;
            }
        }
        count
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
