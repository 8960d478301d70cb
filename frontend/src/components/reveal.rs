use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

const VISIBLE_THRESHOLD: f64 = 0.1;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Section that fades in the first time it scrolls into view and then stays
/// visible.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let active = use_state(|| false);

    {
        let active = active.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let observer = node
                    .cast::<Element>()
                    .and_then(|element| observe_once(element, active));

                move || {
                    if let Some((observer, _callback)) = observer {
                        observer.disconnect();
                    }
                }
            },
            node.clone(),
        );
    }

    html! {
        <section
            ref={node}
            id={props.id.clone()}
            class={classes!("reveal", props.class.clone(), (*active).then(|| "active"))}
        >
            { for props.children.iter() }
        </section>
    }
}

type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

// The closure has to outlive the observer, so both are handed back together.
fn observe_once(
    element: Element,
    active: UseStateHandle<bool>,
) -> Option<(IntersectionObserver, EntriesCallback)> {
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if entry.is_intersecting() {
                active.set(true);
                observer.unobserve(&entry.target());
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(VISIBLE_THRESHOLD));

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;
    observer.observe(&element);
    Some((observer, callback))
}
