use log::info;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::confirmation::ConfirmationModal;
use crate::components::nav::{scroll_callback, Header, NavItem};
use crate::components::reveal::Reveal;
use crate::components::toast::ToastView;
use crate::config;
use crate::countdown::{use_time_left, TimeLeft};
use crate::pages::pricing::PricingSection;
use crate::pages::registration::RegistrationSection;
use crate::registration::pipeline::Registrar;
use crate::registration::state::{RegistrationAction, RegistrationState};
use crate::services::analytics::Gtag;
use crate::services::firestore::FirestoreStore;
use crate::services::storage::{LocalStorage, RegistrationCache};
use crate::theme::use_theme;
use crate::Route;

pub type SiteRegistrar = Registrar<FirestoreStore, Gtag, LocalStorage>;

fn site_registrar() -> SiteRegistrar {
    Registrar::new(
        FirestoreStore::from_config(),
        Gtag,
        RegistrationCache::new(LocalStorage),
    )
}

fn landing_nav() -> Vec<NavItem> {
    vec![
        NavItem::section("Arena", "arena"),
        NavItem::section("Membership", "pricing"),
        NavItem::section("Register", "register"),
        NavItem::section("About", "about"),
        NavItem::page("Contact", Route::Contact),
    ]
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let theme = use_theme();
    let classes = theme.classes();
    let state = use_reducer(RegistrationState::default);
    let registrar = use_memo(|_| site_registrar(), ());

    {
        let state = state.clone();
        let registrar = registrar.clone();
        use_effect_with_deps(
            move |_| {
                let returning = registrar.returning_user();
                if let Some(saved) = &returning {
                    info!("Returning visitor, plan {}", saved.plan_preference);
                }
                state.dispatch(RegistrationAction::Restore(returning));
                || ()
            },
            (),
        );
    }

    let on_action = {
        let state = state.clone();
        Callback::from(move |action: RegistrationAction| state.dispatch(action))
    };

    let on_submit = {
        let state = state.clone();
        let registrar = registrar.clone();
        Callback::from(move |_: ()| {
            let draft = state.form.to_draft();
            let state = state.clone();
            let registrar = registrar.clone();
            state.dispatch(RegistrationAction::SubmitStarted);
            spawn_local(async move {
                let result = registrar.submit(&draft).await;
                state.dispatch(RegistrationAction::SubmitFinished(result));
            });
        })
    };

    let on_dismiss_toast = {
        let state = state.clone();
        Callback::from(move |id: u32| state.dispatch(RegistrationAction::DismissToast(id)))
    };

    let on_close_confirmation = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(RegistrationAction::DismissConfirmation))
    };

    html! {
        <div class={classes!("min-h-screen", "transition-colors", "duration-500", classes.bg, classes.text)}>
            <Header items={landing_nav()} join_button=true />
            <ToastView toast={state.toast.clone()} on_dismiss={on_dismiss_toast} />

            <Hero />
            <Arena />
            <Trust />
            <Why />
            <CountdownSection />
            <PricingSection />
            <Avatars />
            <RegistrationSection
                form={state.form.clone()}
                returning={state.returning.clone()}
                submitting={state.submitting}
                {on_action}
                {on_submit}
            />
            <About />
            <Rewards />
            <AppPreview />
            <Footer />
            <StickyBar registered={state.is_registered()} />

            if let Some(confirmation) = state.confirmation.clone() {
                <ConfirmationModal {confirmation} on_close={on_close_confirmation} />
            }
        </div>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let theme = use_theme();
    let classes = theme.classes();

    html! {
        <Reveal class="min-h-screen flex items-center justify-center relative overflow-hidden pt-20 md:pt-0">
            <div class={classes!("absolute", "inset-0", "bg-gradient-to-b", classes.hero_gradient)}></div>
            <div class="absolute -top-20 left-1/4 w-[600px] h-[600px] bg-orange-500/10 blur-[150px] rounded-full pointer-events-none animate-pulse"></div>

            <div class="max-w-6xl mx-auto px-6 grid md:grid-cols-2 gap-8 items-center relative z-10 w-full">
                <div class="text-left space-y-5 order-2 md:order-1">
                    <p class={classes!("tracking-[6px]", "text-xs", "font-bold", "uppercase", "font-potta", classes.text_sub)}>{"FYT LYF"}</p>
                    <h1 class="text-4xl md:text-6xl font-extrabold leading-tight">
                        {"NOT JUST FITNESS. "}<br />
                        <span class="text-orange-500">{"A DISCIPLINE MOVEMENT."}</span>
                    </h1>
                    <p class={classes!("text-base", "md:text-lg", "max-w-md", "leading-relaxed", classes.text_sub)}>
                        {"India’s Most Hardcore, Community Driven, Discipline Based Fitness Revolution."}
                    </p>
                    <p class="text-orange-500 text-sm font-semibold tracking-wide">
                        {"Challenges Open • Launching Jan 1, 2026"}
                    </p>
                    <div class="flex flex-wrap gap-4 pt-2">
                        <button
                            onclick={scroll_callback::<MouseEvent>("arena")}
                            class="bg-orange-600 text-white px-6 py-3 rounded-xl font-bold hover:bg-orange-700 transition shadow-lg shadow-orange-600/20 transform hover:-translate-y-1"
                        >
                            {"Enter The Arena"}
                        </button>
                        <button
                            onclick={scroll_callback::<MouseEvent>("pricing")}
                            class={classes!("border", "px-6", "py-3", "rounded-xl", "font-bold", "hover:bg-zinc-800", "hover:text-white", "transition", "transform", "hover:-translate-y-1", classes.border)}
                        >
                            {"Become A Member"}
                        </button>
                    </div>
                </div>

                <div class="hero-avatars flex flex-row items-end justify-center w-full gap-2 md:gap-10 mt-10 md:mt-0 order-1 md:order-2">
                    <img src="/avatars/female.png" alt="Female Avatar"
                        class="h-[200px] md:h-[420px] object-contain drop-shadow-[0_0_35px_rgba(255,98,0,.3)] relative z-10" />
                    <div class="relative z-10">
                        <div class="relative w-[160px] md:w-[320px] h-[320px] md:h-[620px] bg-black border-[6px] md:border-[8px] border-[#1a1a1a] rounded-[2.5rem] md:rounded-[3rem] shadow-[0_20px_50px_-10px_rgba(0,0,0,0.5)] overflow-hidden ring-1 ring-gray-700 animate-float">
                            <div class="absolute top-0 left-1/2 -translate-x-1/2 w-20 md:w-32 h-5 md:h-7 bg-black rounded-b-2xl z-30 shadow-md"></div>
                            <div class="w-full h-full bg-zinc-50 flex flex-col items-center justify-center p-4 md:p-6 text-center relative overflow-hidden">
                                <img src="/logo.png" alt="Logo" class="w-32 h-16 md:h-24 object-contain mb-3 md:mb-4 animate-pulse" />
                                <h2 class="text-2xl md:text-4xl font-black text-gray-900 mb-3 md:mb-5 font-potta">
                                    <span class="text-orange-500">{"FYT"}</span>{" LYF"}
                                </h2>
                                <div class="w-8 md:w-10 h-1 bg-orange-500 rounded-full mb-4 md:mb-8"></div>
                                <h3 class="text-[10px] md:text-xs font-bold text-gray-800 leading-tight">{"FEEL YOUR TRANSFORMATION"}</h3>
                                <h3 class="text-[10px] md:text-xs font-bold text-orange-500 leading-tight">{"LOVE YOUR FITNESS"}</h3>
                            </div>
                        </div>
                    </div>
                    <img src="/avatars/male.png" alt="Male Avatar"
                        class="h-[210px] md:h-[430px] object-contain drop-shadow-[0_0_35px_rgba(255,98,0,.3)] relative z-10" />
                </div>
            </div>
        </Reveal>
    }
}

#[derive(Properties, PartialEq)]
struct ArenaCardProps {
    kicker: &'static str,
    title: &'static str,
    blurb: &'static str,
    cta: &'static str,
    primary: bool,
}

#[function_component(ArenaCard)]
fn arena_card(props: &ArenaCardProps) -> Html {
    let theme = use_theme();
    let classes = theme.classes();
    let button_class = if props.primary {
        classes!("bg-orange-600", "text-white", "hover:bg-orange-700", "shadow-lg", "glow")
    } else {
        classes!("border", "hover:bg-orange-500", "hover:text-white", classes.border)
    };

    html! {
        <div class={classes!("border", "rounded-3xl", "p-10", "transition", "shadow-xl", "shadow-orange-500/5", classes.card_bg, classes.card_hover)}>
            <p class="text-orange-500 font-semibold">{ props.kicker }</p>
            <h4 class="text-3xl font-bold mt-3">{ props.title }</h4>
            <p class={classes!("mt-4", classes.text_sub)}>{ props.blurb }</p>
            <div class={classes!("mt-6", "w-full", "border", "px-4", "py-2", "rounded-lg", "text-center", "shadow-md", classes.alert_bg, classes.alert_shadow)}>
                <span class={classes!("font-bold", "tracking-wider", "uppercase", "text-sm", classes.alert_text)}>
                    {"🚨 High Demand — Spots Closing Soon"}
                </span>
            </div>
            <button
                onclick={scroll_callback::<MouseEvent>("register")}
                class={classes!("mt-8", "px-8", "py-4", "rounded-xl", "font-semibold", "transition", button_class)}
            >
                { props.cta }
            </button>
        </div>
    }
}

#[function_component(Arena)]
fn arena() -> Html {
    let theme = use_theme();
    let classes = theme.classes();
    let section_bg = if theme.theme.is_dark() { "bg-black" } else { "bg-white" };

    html! {
        <Reveal id="arena" class={classes!("py-24", "px-6", section_bg)}>
            <div class="max-w-6xl mx-auto text-center">
                <h2 class="text-orange-500 tracking-[6px] text-sm">{"THE ARENA"}</h2>
                <h3 class="text-4xl md:text-6xl font-extrabold mt-3">{"Choose Your War"}</h3>
                <p class={classes!("mt-4", "max-w-3xl", "mx-auto", classes.text_sub)}>
                    {"Two paths. One goal — Discipline. Choose how you want to rise."}
                </p>
                <div class={classes!("mt-6", "inline-flex", "items-center", "gap-3", "border", "px-5", "py-2", "rounded-xl", "shadow-lg", "alert-glow", classes.alert_bg)}>
                    <span class="text-red-500 text-lg">{"🔥"}</span>
                    <p class={classes!("font-semibold", "tracking-wide", "uppercase", classes.alert_text)}>
                        {"Seats Filling Fast — Limited Joining Window"}
                    </p>
                </div>
                <div class="mt-14 grid md:grid-cols-2 gap-10">
                    <ArenaCard
                        kicker="TRANSFORMATION ARENA"
                        title="75 HARD Challenge"
                        blurb="75 Days. No excuses. Proof-based transformation."
                        cta="Join Transformation"
                        primary=true
                    />
                    <ArenaCard
                        kicker="PERFORMANCE ARENA"
                        title="Performance Battles"
                        blurb="Compete. Push limits. Earn respect."
                        cta="Enter Performance Battles"
                        primary=false
                    />
                </div>
            </div>
        </Reveal>
    }
}

#[function_component(Trust)]
fn trust() -> Html {
    let theme = use_theme();
    let classes = theme.classes();
    let cards = [
        ("Strict Verification", "Every winner is verified. No shortcuts. No cheating.", classes.border),
        ("India Only", "Rewards shipped only within India. Valid winners only.", "border-orange-500"),
        ("Fair Shipping", "Same reward process for Free & Paid users.", "border-yellow-500"),
    ];

    html! {
        <Reveal class={classes!("py-24", "px-6", "border-t", classes.border)}>
            <div class="max-w-6xl mx-auto text-center">
                <p class="text-orange-500 tracking-[6px] text-sm">{"TRUST & FAIR PLAY"}</p>
                <h2 class="text-4xl md:text-6xl font-extrabold mt-3">{"Strict. Fair. Fully Verified."}</h2>
                <div class="grid md:grid-cols-3 gap-8 mt-14">
                    { for cards.iter().map(|(title, text, border)| html! {
                        <div class={classes!("rounded-3xl", "p-8", "border", *border)}>
                            <h3 class="text-xl font-bold">{ *title }</h3>
                            <p class={classes!("mt-2", "text-sm", classes.text_sub)}>{ *text }</p>
                        </div>
                    }) }
                </div>
            </div>
        </Reveal>
    }
}

#[function_component(Why)]
fn why() -> Html {
    let theme = use_theme();
    let classes = theme.classes();
    let reasons = [
        ("Discipline First", "No motivation nonsense. Just results."),
        ("Hardcore Community", "Train with people who refuse to quit."),
        ("Proof. Not Talk.", "Verified results. Earned recognition."),
    ];

    html! {
        <Reveal id="why" class={classes!("py-24", "px-6", "border-t", classes.border)}>
            <div class="max-w-6xl mx-auto text-center">
                <h2 class="text-orange-500 tracking-[6px] text-sm">{"WHY FYT LYF"}</h2>
                <h3 class="text-4xl md:text-6xl font-extrabold mt-3">{"Built Different."}</h3>
                <div class="mt-14 grid md:grid-cols-3 gap-8">
                    { for reasons.iter().map(|(title, text)| html! {
                        <div class={classes!("border", "rounded-3xl", "p-8", "transition", "shadow-xl", classes.card_bg, classes.card_hover)}>
                            <h4 class="text-2xl font-bold text-orange-500">{ *title }</h4>
                            <p class={classes!("mt-3", classes.text_sub)}>{ *text }</p>
                        </div>
                    }) }
                </div>
            </div>
        </Reveal>
    }
}

#[function_component(CountdownSection)]
fn countdown_section() -> Html {
    let theme = use_theme();
    let classes = theme.classes();
    let left = use_time_left();
    let boxes = [
        (left.days.clone(), "DAYS"),
        (left.hours.clone(), "HRS"),
        (left.mins.clone(), "MINS"),
        (left.secs.clone(), "SECS"),
    ];

    html! {
        <Reveal class={classes!("py-24", "px-6", "border-t", classes.border)}>
            <div class="max-w-6xl mx-auto text-center">
                <h2 class="text-orange-500 tracking-[6px] text-sm">{"LIMITED WINDOW"}</h2>
                <h3 class="text-4xl md:text-6xl font-extrabold mt-3">{"Registrations Close Soon"}</h3>
                <div class="mt-12 grid grid-cols-4 gap-4 max-w-3xl mx-auto">
                    { for boxes.into_iter().map(|(value, unit)| html! {
                        <div class={classes!("border", "rounded-2xl", "py-6", classes.card_bg)}>
                            <p class="text-5xl font-extrabold text-orange-500">{ value }</p>
                            <p class={classes!("text-sm", "tracking-widest", "mt-2", classes.text_sub)}>{ unit }</p>
                        </div>
                    }) }
                </div>
                <button
                    onclick={scroll_callback::<MouseEvent>("register")}
                    class="mt-10 bg-orange-600 text-white px-10 py-4 rounded-xl font-semibold hover:bg-orange-700 transition shadow-lg glow"
                >
                    {"Pre Register Now"}
                </button>
            </div>
        </Reveal>
    }
}

#[function_component(Avatars)]
fn avatars() -> Html {
    let theme = use_theme();
    let classes = theme.classes();

    html! {
        <Reveal id="avatars" class={classes!("py-28", "px-6", "border-t", classes.border)}>
            <div class="max-w-7xl mx-auto text-center">
                <p class="text-orange-500 tracking-[6px] text-sm">{"YOUR IDENTITY"}</p>
                <h2 class="text-4xl md:text-6xl font-extrabold mt-3 leading-tight">
                    {"Not Just Fitness… "}<span class="text-orange-500">{"Your Character. Your Legend."}</span>
                </h2>
                <p class={classes!("mt-4", "max-w-3xl", "mx-auto", classes.text_sub)}>
                    {"FYT LYF brings something no other fitness platform in India does — Your own Avatar Identity System. Train. Transform. Earn your status."}
                </p>
                <div class="grid md:grid-cols-4 gap-8 mt-16">
                    <div class={classes!("rounded-3xl", "p-8", "border", classes.border, classes.card_hover)}>
                        <h3 class="text-xl font-bold">{"Free Users"}</h3>
                        <p class={classes!("mt-3", "text-sm", classes.text_sub)}>{"Basic avatars & workout models unlocked."}</p>
                    </div>
                    <div class={classes!("rounded-3xl", "p-8", "border", "border-blue-500", classes.card_hover)}>
                        <h3 class="text-xl font-bold text-blue-400">{"PRO"}</h3>
                        <p class={classes!("mt-3", "text-sm", classes.text_sub)}>{"Unlock more premium avatars & identity sets."}</p>
                    </div>
                    <div class={classes!("rounded-3xl", "p-8", "border", "border-orange-500", classes.card_hover)}>
                        <h3 class="text-xl font-bold text-orange-500">{"PRO PLUS"}</h3>
                        <p class={classes!("mt-3", "text-sm", classes.text_sub)}>
                            {"Request your "}<span class="text-orange-500 font-bold">{"Personal Character Avatar"}</span>
                            {". Premium avatar packs unlocked."}
                        </p>
                    </div>
                    <div class={classes!("rounded-3xl", "p-8", "border", "border-yellow-500", classes.card_hover)}>
                        <h3 class="text-xl font-bold text-yellow-400">{"ELITE"}</h3>
                        <p class={classes!("mt-3", "text-sm", classes.text_sub)}>
                            {"Personal Character Avatar + "}<span class="text-yellow-400 font-bold">{"Personal Workout Avatar Coach"}</span>
                            {". Elite exclusive avatars unlocked."}
                        </p>
                    </div>
                </div>
                <p class={classes!("mt-6", "text-sm", classes.text_sub)}>
                    {"*Avatar request available inside app for subscribed users only."}
                </p>
            </div>
        </Reveal>
    }
}

#[function_component(About)]
fn about() -> Html {
    let theme = use_theme();
    let classes = theme.classes();

    html! {
        <Reveal id="about" class={classes!("py-28", "px-6", "border-t", classes.border)}>
            <div class="max-w-6xl mx-auto grid md:grid-cols-2 gap-14 items-center">
                <div>
                    <p class="text-orange-500 tracking-[6px] text-sm">{"THE MOVEMENT"}</p>
                    <h2 class="text-4xl md:text-6xl font-extrabold mt-3">
                        {"Not Just Fitness. "}<span class="text-orange-500 block">{"A Discipline Revolution."}</span>
                    </h2>
                    <p class={classes!("mt-6", "text-lg", classes.text_sub)}>
                        {"FYT LYF was built for the people who refuse to be average. The ones who wake up earlier. Train harder. Push beyond excuses."}
                    </p>
                </div>
                <div class={classes!("rounded-3xl", "p-8", "h-[380px]", "flex", "items-center", "justify-center", classes.card_bg)}>
                    <h3 class="text-3xl font-extrabold text-center">
                        {"Built For The "}<span class="text-orange-500 block mt-2">{"Unstoppable."}</span>
                    </h3>
                </div>
            </div>
        </Reveal>
    }
}

#[function_component(Rewards)]
fn rewards() -> Html {
    let theme = use_theme();
    let classes = theme.classes();
    let rewards = [
        ("Digital Rewards", "Official Certificates & Badges", classes.border),
        ("Physical Rewards", "Medals, T-Shirts & Gear", "border-orange-500"),
        ("Performance Loot", "Supplements & Goodies", "border-yellow-500"),
    ];

    html! {
        <section class={classes!("py-24", "px-6", "border-t", classes.border)}>
            <div class="max-w-7xl mx-auto text-center">
                <h2 class="text-4xl font-extrabold">{"Earn Respect. "}<span class="text-orange-500">{"Win Glory."}</span></h2>
                <div class="grid md:grid-cols-3 gap-8 mt-16">
                    { for rewards.iter().map(|(title, text, border)| html! {
                        <div class={classes!("rounded-3xl", "p-8", "border", *border, classes.card_hover)}>
                            <h3 class="text-2xl font-bold">{ *title }</h3>
                            <p class={classes!("mt-2", "text-sm", classes.text_sub)}>{ *text }</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(AppPreview)]
fn app_preview() -> Html {
    let theme = use_theme();
    let classes = theme.classes();

    html! {
        <section class={classes!("py-24", "px-6", "border-t", classes.border)}>
            <div class="max-w-7xl mx-auto text-center">
                <p class="text-orange-500 tracking-[6px] text-sm">{"THE APP"}</p>
                <h2 class="text-4xl font-extrabold mt-3">{"Your Discipline Engine."}</h2>
                <div class="grid md:grid-cols-3 gap-8 mt-16">
                    <div class={classes!("rounded-3xl", "p-8", classes.card_bg)}><h3 class="text-xl font-bold">{"Smart Dashboard"}</h3></div>
                    <div class="rounded-3xl p-8 border border-orange-500"><h3 class="text-xl font-bold">{"AI Powered"}</h3></div>
                    <div class="rounded-3xl p-8 border border-yellow-500"><h3 class="text-xl font-bold">{"Community"}</h3></div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let theme = use_theme();
    let classes = theme.classes();
    let link_class = "hover:text-orange-500 transition";

    html! {
        <footer class={classes!("py-20", "px-6", "border-t", "pb-24", "md:pb-20", classes.border)}>
            <div class="max-w-7xl mx-auto grid grid-cols-2 md:grid-cols-4 gap-10">
                <div class="col-span-2 md:col-span-1">
                    <h3 class="text-2xl font-extrabold font-potta"><span class="text-orange-500">{"FYT"}</span>{" LYF"}</h3>
                    <p class={classes!("text-sm", "mt-4", classes.text_sub)}>{"India • 2026"}</p>
                </div>
                <div>
                    <h4 class="font-bold">{"Navigation"}</h4>
                    <ul class={classes!("text-sm", "mt-4", "space-y-2", classes.text_sub)}>
                        <li onclick={scroll_callback::<MouseEvent>("arena")} class="cursor-pointer">{"Challenges"}</li>
                        <li onclick={scroll_callback::<MouseEvent>("register")} class="cursor-pointer">{"Register"}</li>
                        <li><Link<Route> to={Route::Contact} classes={link_class}>{"Contact"}</Link<Route>></li>
                    </ul>
                </div>
                <div>
                    <h4 class="font-bold">{"Legal"}</h4>
                    <ul class={classes!("text-sm", "mt-4", "space-y-2", classes.text_sub)}>
                        <li><Link<Route> to={Route::Terms} classes={link_class}>{"Terms & Disclaimer"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Privacy} classes={link_class}>{"Privacy Policy"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Refund} classes={link_class}>{"Refund Policy"}</Link<Route>></li>
                    </ul>
                </div>
                <div>
                    <h4 class="font-bold">{"Connect"}</h4>
                    <ul class={classes!("text-sm", "mt-4", "space-y-2", classes.text_sub)}>
                        <li><a href={config::INSTAGRAM_URL} target="_blank" rel="noopener noreferrer" class={link_class}>{"Instagram"}</a></li>
                        <li><a href={format!("mailto:{}", config::CONTACT_EMAIL)} class={link_class}>{ config::CONTACT_EMAIL }</a></li>
                    </ul>
                </div>
            </div>
            <p class="text-xs mt-6 text-center text-gray-400">
                {"• India Only • Age 13+ • Participate at your own medical risk • FYT LYF verification & decisions are final • No refund on subscriptions • Rewards applicable only to valid verified winners"}
            </p>
            <p class={classes!("text-center", "text-xs", "mt-10", "tracking-[4px]", "uppercase", classes.text_sub)}>
                {"© 2026 FYT LYF — Built For The Unstoppable"}
            </p>
        </footer>
    }
}

/// "12D : 04H : 09M : 05S"
pub fn sticky_countdown(left: &TimeLeft) -> String {
    format!("{}D : {}H : {}M : {}S", left.days, left.hours, left.mins, left.secs)
}

#[derive(Properties, PartialEq)]
struct StickyBarProps {
    registered: bool,
}

#[function_component(StickyBar)]
fn sticky_bar(props: &StickyBarProps) -> Html {
    let theme = use_theme();
    let classes = theme.classes();
    let left = use_time_left();

    let button_class = if props.registered {
        classes!("bg-green-500", "text-white", "hover:bg-green-600", "border", "border-green-400")
    } else {
        classes!(classes.sticky_button)
    };

    html! {
        <div class={classes!("fixed", "bottom-0", "left-0", "w-full", "font-bold", "text-center", "py-3", "z-50", "text-sm", "md:text-base", "shadow-2xl", "flex", "items-center", "justify-center", "gap-2", classes.sticky_bar)}>
            <span class="hidden md:inline">{"Registrations Closing Soon — "}</span>
            <span class="font-mono">{ sticky_countdown(&left) }</span>
            <button
                onclick={scroll_callback::<MouseEvent>("register")}
                class={classes!("ml-2", "px-4", "py-1", "rounded-full", "text-xs", "font-bold", "transition", "flex", "items-center", "gap-2", button_class)}
            >
                if props.registered {
                    <span>{"✅"}</span>{" Already Registered"}
                } else {
                    {"Register"}
                }
            </button>
        </div>
    }
}
