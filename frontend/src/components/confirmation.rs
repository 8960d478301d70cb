use yew::prelude::*;

use crate::registration::state::Confirmation;
use crate::theme::use_theme;

#[derive(Properties, PartialEq)]
pub struct ConfirmationModalProps {
    pub confirmation: Confirmation,
    pub on_close: Callback<()>,
}

#[function_component(ConfirmationModal)]
pub fn confirmation_modal(props: &ConfirmationModalProps) -> Html {
    let theme = use_theme();
    let classes = theme.classes();
    let plan = props.confirmation.plan;
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="fixed inset-0 bg-black/80 backdrop-blur-xl flex items-center justify-center z-[999]" role="dialog" aria-modal="true">
            <div class={classes!("bg-zinc-900", "border", "rounded-3xl", "p-8", "max-w-md", "text-center", "text-white", classes.border)}>
                <h2 class="text-3xl font-extrabold">
                    { format!("Thank You, {}! 🎯", props.confirmation.name) }
                </h2>
                <p class={classes!("text-sm", "mt-2", classes.text_sub)}>{"Registration Successful"}</p>
                <p class={classes!("text-2xl", "font-bold", "mt-3", plan.color())}>{ plan.label() }</p>
                <p class="mt-5 text-gray-300 text-sm leading-relaxed">{ plan.motivation() }</p>
                <button
                    onclick={on_close}
                    class="mt-8 bg-orange-600 px-8 py-3 rounded-xl font-semibold hover:bg-orange-700"
                >
                    {"Continue"}
                </button>
            </div>
        </div>
    }
}
