use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::reveal::Reveal;
use crate::config;
use crate::registration::model::CachedRegistration;
use crate::registration::plan::PlanPreference;
use crate::registration::state::{FormFields, RegistrationAction};
use crate::theme::use_theme;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct RegistrationSectionProps {
    pub form: FormFields,
    pub returning: Option<CachedRegistration>,
    pub submitting: bool,
    pub on_action: Callback<RegistrationAction>,
    pub on_submit: Callback<()>,
}

#[function_component(RegistrationSection)]
pub fn registration_section(props: &RegistrationSectionProps) -> Html {
    let theme = use_theme();
    let classes = theme.classes();

    let body = match &props.returning {
        Some(saved) => html! { <ReturningCard saved={saved.clone()} /> },
        None => html! {
            <RegistrationForm
                form={props.form.clone()}
                submitting={props.submitting}
                on_action={props.on_action.clone()}
                on_submit={props.on_submit.clone()}
            />
        },
    };

    html! {
        <Reveal id="register" class={classes!("py-28", "px-6", "border-t", classes.border)}>
            <div class="max-w-4xl mx-auto text-center">
                <p class="text-orange-500 tracking-[6px] text-sm">{"PRE REGISTRATION"}</p>
                <h2 class="text-4xl md:text-6xl font-extrabold mt-3">
                    {"Be The First To Enter"}
                    <span class="text-orange-500 block">{"The FYT LYF Revolution"}</span>
                </h2>
                <div class={classes!("mt-12", "rounded-3xl", "p-10", "border", "shadow-2xl", classes.border, classes.card_bg)}>
                    { body }
                </div>
            </div>
        </Reveal>
    }
}

#[derive(Properties, PartialEq)]
struct ReturningCardProps {
    saved: CachedRegistration,
}

#[function_component(ReturningCard)]
fn returning_card(props: &ReturningCardProps) -> Html {
    let theme = use_theme();
    let classes = theme.classes();
    let saved = &props.saved;
    let plan = saved.plan_preference;

    html! {
        <div class={classes!("rounded-3xl", "p-8", "border", classes.border, classes.card_bg)}>
            <h3 class="text-2xl font-extrabold">{ format!("Welcome Back, {}! 🔥", saved.name) }</h3>
            <p class={classes!("mt-2", classes.text_sub)}>{"You are already pre-registered."}</p>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4 mt-5 text-sm">
                <div class={classes!("border", "rounded-xl", "p-4", classes.border)}>
                    <p class="text-gray-400">{"Email"}</p>
                    <p class="font-semibold">{ &saved.email }</p>
                </div>
                <div class={classes!("border", "rounded-xl", "p-4", classes.border)}>
                    <p class="text-gray-400">{"Phone"}</p>
                    <p class="font-semibold">{ &saved.phone }</p>
                </div>
                <div class={classes!("border", "rounded-xl", "p-4", "md:col-span-2", classes.border)}>
                    <p class="text-gray-400">{"Plan"}</p>
                    <p class={classes!("font-bold", "text-xl", plan.color())}>{ plan.label() }</p>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct RegistrationFormProps {
    form: FormFields,
    submitting: bool,
    on_action: Callback<RegistrationAction>,
    on_submit: Callback<()>,
}

#[function_component(RegistrationForm)]
fn registration_form(props: &RegistrationFormProps) -> Html {
    let theme = use_theme();
    let classes = theme.classes();
    let input_class = classes!("w-full", "rounded-xl", "px-5", "py-4", "outline-none", "transition", classes.input_bg);

    let text_input = |set: fn(String) -> RegistrationAction| {
        let on_action = props.on_action.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_action.emit(set(input.value()));
        })
    };

    let on_plan = {
        let on_action = props.on_action.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_action.emit(RegistrationAction::SetPlan(select.value()));
        })
    };

    let on_agree = {
        let on_action = props.on_action.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_action.emit(RegistrationAction::SetAgree(input.checked()));
        })
    };

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let form = &props.form;

    html! {
        <>
            <form {onsubmit} class="grid md:grid-cols-3 gap-6">
                <div>
                    <label class="sr-only" for="name">{"Full Name"}</label>
                    <input id="name" name="name" required=true placeholder="Full Name"
                        class={input_class.clone()}
                        value={form.name.clone()}
                        oninput={text_input(RegistrationAction::SetName)} />
                </div>
                <div>
                    <label class="sr-only" for="email">{"Email Address"}</label>
                    <input id="email" name="email" type="email" required=true placeholder="Email Address"
                        class={input_class.clone()}
                        value={form.email.clone()}
                        oninput={text_input(RegistrationAction::SetEmail)} />
                </div>
                <div>
                    <label class="sr-only" for="phone">{"Indian Mobile Number"}</label>
                    <input id="phone" name="phone" type="tel" required=true placeholder="Indian Mobile Number"
                        class={input_class.clone()}
                        value={form.phone.clone()}
                        oninput={text_input(RegistrationAction::SetPhone)} />
                </div>

                <div class="md:col-span-3">
                    <label class="sr-only" for="planPreference">{"Select Plan Interest"}</label>
                    <select id="planPreference" name="planPreference" required=true
                        aria-label="Select Plan Interest"
                        class={input_class.clone()}
                        onchange={on_plan}
                    >
                        <option value="" disabled=true selected={form.plan.is_empty()}>{"Select Plan Interest"}</option>
                        { for PlanPreference::ALL.iter().map(|plan| html! {
                            <option value={plan.as_str()} selected={form.plan == plan.as_str()}>{ plan.label() }</option>
                        }) }
                    </select>
                </div>

                <div class="md:col-span-3 flex items-center gap-3 text-sm justify-center md:justify-start">
                    <input type="checkbox" id="agree" name="agree"
                        class="w-5 h-5 accent-orange-600 cursor-pointer"
                        checked={form.agree}
                        onchange={on_agree} />
                    <label for="agree" class={classes!("cursor-pointer", classes.text_sub)}>
                        {"I agree to the"}
                        <Link<Route> to={Route::Terms} classes="text-orange-500 ml-1 hover:underline">{"Terms & Disclaimer"}</Link<Route>>
                        {" and"}
                        <Link<Route> to={Route::Privacy} classes="text-orange-500 ml-1 hover:underline">{"Privacy Policy"}</Link<Route>>
                    </label>
                </div>

                <button
                    type="submit"
                    disabled={props.submitting}
                    class="md:col-span-3 mt-4 bg-orange-600 text-white hover:bg-orange-700 transition px-10 py-4 rounded-xl font-semibold shadow-lg glow disabled:opacity-60 disabled:cursor-wait"
                >
                    { if props.submitting { "Submitting..." } else { "Pre Register Now" } }
                </button>
            </form>
            <p class={classes!("text-sm", "mt-4", classes.text_sub)}>
                {"* Only valid for users in India • Age 13+ • Medical responsibility on user"}
            </p>
            <p class={classes!("text-sm", "mt-2", classes.text_sub)}>
                {"Need help or business enquiries?"}
                <a href={format!("mailto:{}", config::CONTACT_EMAIL)} class="text-orange-500 font-semibold underline hover:text-orange-400 ml-1">
                    { config::CONTACT_EMAIL }
                </a>
            </p>
        </>
    }
}
