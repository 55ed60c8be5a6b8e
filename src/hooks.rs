use std::rc::Rc;

use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::{js_sys::Array, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::{
    LOGO_PLACEHOLDER_SELECTOR, REVEAL_ROOT_MARGIN, REVEAL_SELECTOR, REVEAL_THRESHOLD,
    SCROLL_SPY_DEBOUNCE_MS,
};
use crate::dom;
use crate::form::elements::SetupError;
use crate::navigation::header_is_scrolled;
use crate::schedule::{BrowserScheduler, Debouncer};
use crate::scroll_spy::ScrollSpy;

/// Tracks the section in view. Recomputes on mount and after each burst of
/// scroll events has been quiet for the debounce period.
#[hook]
pub fn use_scroll_spy() -> ScrollSpy {
    let snapshot = use_state_eq(ScrollSpy::default);
    let spy = use_mut_ref(ScrollSpy::default);
    let debouncer = use_mut_ref(|| Debouncer::new(BrowserScheduler, SCROLL_SPY_DEBOUNCE_MS));

    let recompute = {
        let snapshot = snapshot.clone();
        Rc::new(move || {
            let sections = dom::section_bounds();
            let mut spy = spy.borrow_mut();
            if spy.recompute(dom::scroll_y(), &sections) {
                snapshot.set((*spy).clone());
            }
        })
    };

    {
        let recompute = recompute.clone();
        use_effect_with_deps(
            move |_| {
                recompute();
                || ()
            },
            (),
        );
    }

    use_event_with_window("scroll", move |_: Event| {
        let recompute = recompute.clone();
        debouncer.borrow_mut().trigger(move || recompute());
    });

    (*snapshot).clone()
}

#[hook]
pub fn use_header_scrolled() -> bool {
    let scrolled = use_state_eq(|| header_is_scrolled(dom::scroll_y()));
    {
        let scrolled = scrolled.clone();
        use_event_with_window("scroll", move |_: Event| {
            scrolled.set(header_is_scrolled(dom::scroll_y()));
        });
    }
    *scrolled
}

type RevealCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn observe_reveal_targets() -> Result<(IntersectionObserver, RevealCallback), SetupError> {
    if !dom::has_global("IntersectionObserver") {
        return Err(SetupError::Unsupported("IntersectionObserver"));
    }

    let callback = Closure::wrap(Box::new(|entries: Array, _observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if entry.is_intersecting() {
                let _ = entry.target().class_list().add_1("animate-in");
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        .map_err(|_| SetupError::Unsupported("IntersectionObserver"))?;

    let targets = dom::query_all(REVEAL_SELECTOR);
    debug!("Observing {} reveal targets", targets.len());
    for target in &targets {
        observer.observe(target);
    }
    Ok((observer, callback))
}

/// Adds `animate-in` to reveal targets as they scroll into view.
#[hook]
pub fn use_reveal_on_intersect() {
    use_effect_with_deps(
        move |_| {
            let observed = match observe_reveal_targets() {
                Ok(observed) => Some(observed),
                Err(e) => {
                    debug!("Reveal animations disabled: {}", e);
                    None
                }
            };
            move || {
                if let Some((observer, _callback)) = observed {
                    observer.disconnect();
                }
            }
        },
        (),
    );
}

/// Hints `will-change: transform` on logo placeholders until their first
/// transition ends.
#[hook]
pub fn use_will_change_hints() {
    use_effect_with_deps(
        move |_| {
            let mut listeners = Vec::new();
            for logo in dom::query_all_html(LOGO_PLACEHOLDER_SELECTOR) {
                let _ = logo.style().set_property("will-change", "transform");

                let target = logo.clone();
                let reset = Closure::wrap(Box::new(move || {
                    let _ = target.style().set_property("will-change", "auto");
                }) as Box<dyn FnMut()>);

                if logo
                    .add_event_listener_with_callback("transitionend", reset.as_ref().unchecked_ref())
                    .is_ok()
                {
                    listeners.push((logo, reset));
                }
            }

            move || {
                for (logo, reset) in listeners {
                    let _ = logo
                        .remove_event_listener_with_callback("transitionend", reset.as_ref().unchecked_ref());
                }
            }
        },
        (),
    );
}
