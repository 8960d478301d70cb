use yew::prelude::*;

use crate::components::nav::scroll_callback;
use crate::components::reveal::Reveal;
use crate::registration::plan::{default_months, price_table, PlanPreference};
use crate::theme::use_theme;

#[derive(PartialEq)]
struct Tier {
    plan: PlanPreference,
    title: &'static str,
    title_class: &'static str,
    badge: &'static str,
    badge_class: &'static str,
    card_class: &'static str,
    selected_class: &'static str,
    strike_class: &'static str,
    // (feature, included)
    features: &'static [(&'static str, bool)],
    cta: &'static str,
    cta_class: &'static str,
    popular: bool,
    renewal_note: bool,
}

static TIERS: [Tier; 4] = [
    Tier {
        plan: PlanPreference::Free,
        title: "FREE",
        title_class: "font-semibold",
        badge: "Badge: Beginner Access",
        badge_class: "bg-gray-600 text-white",
        card_class: "border",
        selected_class: "",
        strike_class: "",
        features: &[
            ("Dashboard Access", true),
            ("Basic Tracking", true),
            ("Some Workouts", true),
            ("Premium Programs", false),
            ("Ad Free", false),
            ("AI Personalization", false),
        ],
        cta: "Get Started",
        cta_class: "border hover:bg-orange-500 hover:text-white",
        popular: false,
        renewal_note: false,
    },
    Tier {
        plan: PlanPreference::Pro,
        title: "PRO",
        title_class: "text-blue-500 font-semibold",
        badge: "Badge: Athlete Mode",
        badge_class: "bg-blue-600 text-white",
        card_class: "border border-blue-600",
        selected_class: "bg-blue-600 border-blue-400 text-white",
        strike_class: "text-blue-300/60",
        features: &[
            ("Premium Workout Programs", true),
            ("Advanced Tracking", true),
            ("Ad Free", true),
            ("Personalized AI Plans", false),
            ("Deep Analytics", false),
        ],
        cta: "Choose Pro",
        cta_class: "bg-blue-600 text-white hover:bg-blue-700 shadow-lg shadow-blue-500/30",
        popular: false,
        renewal_note: false,
    },
    Tier {
        plan: PlanPreference::ProPlus,
        title: "PRO PLUS 👑",
        title_class: "text-orange-500 font-semibold",
        badge: "Badge: Dominator Mode",
        badge_class: "bg-gradient-to-r from-orange-500 to-red-600 text-white shadow-lg shadow-orange-500/40",
        card_class: "border-2 border-orange-600 shadow-2xl shadow-orange-600/20 relative",
        selected_class: "bg-orange-600 border-orange-400 text-white",
        strike_class: "text-orange-300/60",
        features: &[
            ("Everything in PRO", true),
            ("Personalized AI Plans", true),
            ("Deep Analytics", true),
            ("Exclusive Challenges", true),
            ("Premium Content Vault", true),
        ],
        cta: "Become Pro+",
        cta_class: "bg-orange-600 text-white hover:bg-orange-700 shadow-lg shadow-orange-500/30",
        popular: true,
        renewal_note: true,
    },
    Tier {
        plan: PlanPreference::Elite,
        title: "ELITE",
        title_class: "text-yellow-500 font-semibold",
        badge: "Badge: VIP Elite Discipline Circle",
        badge_class: "bg-yellow-500 text-black",
        card_class: "border border-yellow-600",
        selected_class: "bg-yellow-500 border-yellow-400 text-black",
        strike_class: "text-yellow-300/60",
        features: &[
            ("AI + Human Hybrid Coaching", true),
            ("Human Fitness Review", true),
            ("VIP Badges", true),
            ("Guaranteed Physical Kit", true),
            ("Highest Priority", true),
        ],
        cta: "Unlock Elite",
        cta_class: "border-2 hover:bg-orange-500 hover:text-white",
        popular: false,
        renewal_note: true,
    },
];

#[derive(Properties, PartialEq)]
struct PriceCardProps {
    tier: &'static Tier,
}

#[function_component(PriceCard)]
fn price_card(props: &PriceCardProps) -> Html {
    let theme = use_theme();
    let classes = theme.classes();
    let tier = props.tier;
    let table = price_table(tier.plan);
    let months = use_state(|| default_months(tier.plan));

    let price = table.iter().find(|(m, _)| *m == *months).map(|(_, p)| *p);

    let selector = table.iter().map(|(m, _)| {
        let m = *m;
        let selected = m == *months;
        let onclick = {
            let months = months.clone();
            Callback::from(move |_: MouseEvent| months.set(m))
        };
        let button_class = if selected {
            classes!("px-3", "py-1", "rounded-lg", "text-xs", "font-semibold", "border", "transition", tier.selected_class)
        } else {
            classes!("px-3", "py-1", "rounded-lg", "text-xs", "font-semibold", "border", "transition", classes.border, classes.text_sub)
        };
        html! { <button key={m} {onclick} class={button_class}>{ format!("{}M", m) }</button> }
    });

    html! {
        <div class={classes!("rounded-3xl", "transition", "p-8", "shadow-xl", "text-left", "flex", "flex-col", "justify-between", "h-[680px]", tier.card_class, classes.card_bg, classes.card_hover)}>
            if tier.popular {
                <span class="absolute -top-4 right-6 bg-orange-600 text-white px-4 py-1 text-xs font-bold rounded-xl flex items-center gap-2">{"👑 MOST POPULAR"}</span>
            }
            <div>
                <p class={classes!(tier.title_class, (tier.plan == PlanPreference::Free).then(|| classes.text_sub))}>{ tier.title }</p>
                <div class={classes!("inline-block", "mt-2", "px-3", "py-1", "rounded-full", "text-xs", "font-bold", "uppercase", "tracking-wide", tier.badge_class)}>
                    { tier.badge }
                </div>
                if !table.is_empty() {
                    <div class="mt-3 flex gap-2">{ for selector }</div>
                }
                {
                    match price {
                        Some(price) => html! {
                            <>
                                <p class={classes!("text-sm", "line-through", "mt-3", tier.strike_class)}>{ format!("₹{}", price.original) }</p>
                                <h4 class="text-5xl font-extrabold">{ format!("₹{}", price.current) }</h4>
                            </>
                        },
                        None => html! { <h4 class="text-5xl font-extrabold mt-4">{"₹0"}</h4> },
                    }
                }
                <ul class={classes!("text-sm", "mt-6", "space-y-3", classes.text_sub)}>
                    { for tier.features.iter().map(|(feature, included)| if *included {
                        html! { <li>{ format!("✅ {}", feature) }</li> }
                    } else {
                        html! { <li class="opacity-40 flex items-center gap-2">{ format!("🔒 {}", feature) }</li> }
                    }) }
                </ul>
            </div>
            <div>
                if tier.renewal_note {
                    <p class="text-xs text-center text-gray-400 mb-2">{"No refunds • Renew at end of plan"}</p>
                }
                <button
                    onclick={scroll_callback::<MouseEvent>("register")}
                    class={classes!("mt-8", "w-full", "px-8", "py-4", "rounded-xl", "font-semibold", "transition", tier.cta_class, classes.border)}
                >
                    { tier.cta }
                </button>
            </div>
        </div>
    }
}

#[function_component(PricingSection)]
pub fn pricing_section() -> Html {
    let theme = use_theme();
    let classes = theme.classes();

    html! {
        <Reveal id="pricing" class={classes!("py-28", "px-6", "border-t", classes.border)}>
            <div class="max-w-7xl mx-auto text-center">
                <div class="inline-block mb-4 bg-red-600 text-white px-4 py-1 rounded-full text-xs font-bold uppercase tracking-widest animate-pulse shadow-lg shadow-red-500/30">
                    {"Limited Time Launch Pricing — Ends 31 Dec 2025"}
                </div>
                <h2 class="text-orange-500 tracking-[6px] text-sm">{"MEMBERSHIP"}</h2>
                <p class="text-xl font-bold mt-2 text-gray-400">{"India’s Most Hardcore Fitness Membership"}</p>
                <h3 class="text-4xl md:text-6xl font-extrabold mt-3">{"Choose Your Power Level"}</h3>
                <p class={classes!("mt-4", "max-w-3xl", "mx-auto", classes.text_sub)}>{"Free to begin. Upgrade when you’re ready to dominate."}</p>
                <p class="mt-2 text-xs text-gray-400">
                    {"Inclusive of all taxes • Founder Pricing Ends 31 Dec 2025 • Prices revert to normal after launch"}
                </p>

                <div class="mt-16 grid md:grid-cols-4 gap-8">
                    { for TIERS.iter().map(|tier| html! { <PriceCard tier={tier} /> }) }
                </div>

                <div class="mt-16 max-w-4xl mx-auto text-center border-t border-gray-800 pt-10">
                    <h4 class="text-xl font-bold text-gray-300 mb-6 uppercase tracking-widest">{"Why Most Winners Choose PRO+"}</h4>
                    <div class="grid grid-cols-2 md:grid-cols-4 gap-4 text-sm font-semibold text-orange-500">
                        { for ["Personalized AI Plans", "Deep Performance Analytics", "Exclusive Access", "Premium Identity Status"]
                            .iter()
                            .map(|reason| html! { <div class="bg-orange-500/10 border border-orange-500/30 rounded-xl py-3">{ *reason }</div> }) }
                    </div>
                </div>
            </div>
        </Reveal>
    }
}
