use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;
use crate::registration::state::Toast;

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub toast: Option<Toast>,
    pub on_dismiss: Callback<u32>,
}

/// Single toast slot. Each new toast restarts the dismiss timer.
#[function_component(ToastView)]
pub fn toast_view(props: &ToastProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |id: &Option<u32>| {
                let timeout = id.map(|id| {
                    Timeout::new(config::TOAST_MILLIS, move || on_dismiss.emit(id))
                });
                // dropping the Timeout cancels it
                move || drop(timeout)
            },
            props.toast.as_ref().map(|t| t.id),
        );
    }

    match &props.toast {
        Some(toast) => {
            let on_dismiss = props.on_dismiss.clone();
            let id = toast.id;
            html! {
                <div
                    role="status"
                    class="fixed top-24 right-6 bg-orange-600 text-white px-6 py-3 rounded-xl shadow-2xl z-[60] animate-bounce cursor-pointer"
                    onclick={Callback::from(move |_: MouseEvent| on_dismiss.emit(id))}
                >
                    { format!("{} {}", toast.kind.icon(), toast.message) }
                </div>
            }
        }
        None => html! {},
    }
}
