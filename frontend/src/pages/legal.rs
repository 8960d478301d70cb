use yew::prelude::*;

use crate::components::nav::{Header, NavItem};
use crate::config;
use crate::theme::use_theme;
use crate::Route;

pub fn subpage_nav() -> Vec<NavItem> {
    vec![
        NavItem::page("Home", Route::Home),
        NavItem::page("Refund Policy", Route::Refund),
        NavItem::page("Contact", Route::Contact),
    ]
}

#[derive(Properties, PartialEq)]
pub struct SubpageProps {
    pub children: Children,
    #[prop_or(AttrValue::Static("Built For The Unstoppable."))]
    pub tagline: AttrValue,
}

/// Header, themed background and the short footer shared by every page
/// other than the landing page.
#[function_component(Subpage)]
pub fn subpage(props: &SubpageProps) -> Html {
    let theme = use_theme();
    let classes = theme.classes();

    html! {
        <main class={classes!("min-h-screen", "font-sans", "transition-colors", "duration-300", classes.bg, classes.text)}>
            <Header items={subpage_nav()} />
            <section class="pt-32 pb-20 px-6">
                { for props.children.iter() }
            </section>
            <footer class={classes!("py-10", "border-t", "text-center", classes.border)}>
                <h3 class="text-xl font-extrabold font-potta"><span class="text-orange-500">{"FYT"}</span>{" LYF"}</h3>
                <p class={classes!("text-sm", "mt-4", classes.text_sub)}>{ props.tagline.clone() }</p>
                <p class="text-xs mt-6 text-gray-500">{"© 2026 FYT LYF • All Rights Reserved"}</p>
            </footer>
        </main>
    }
}

#[derive(Properties, PartialEq)]
struct PolicyCardProps {
    title: &'static str,
    children: Children,
}

#[function_component(PolicyCard)]
fn policy_card(props: &PolicyCardProps) -> Html {
    let theme = use_theme();
    let classes = theme.classes();

    html! {
        <div class="max-w-5xl mx-auto">
            <div class={classes!("border", "rounded-3xl", "p-10", "shadow-xl", "backdrop-blur", classes.border, classes.card_bg)}>
                <h1 class="text-4xl md:text-5xl font-extrabold">{ props.title }</h1>
                <p class="text-orange-500 mt-2 tracking-wide">{"FYT LYF • India • Last Updated: 1 January 2026"}</p>
                <div class={classes!("mt-8", "space-y-6", "leading-relaxed", "text-lg", classes.text_sub)}>
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}

fn heading(text: &'static str) -> Html {
    html! { <h2 class="text-2xl font-bold text-orange-500 mt-6">{ text }</h2> }
}

fn contact_line() -> Html {
    html! { <p class="font-bold">{ config::CONTACT_EMAIL }</p> }
}

#[function_component(Terms)]
pub fn terms() -> Html {
    html! {
        <Subpage>
            <PolicyCard title="Terms & Disclaimer">
                <p>{"By using FYT LYF or submitting your pre-registration details, you agree to these terms."}</p>
                { heading("Pre-Launch Status") }
                <p>{"FYT LYF is currently in pre-registration phase. Features may evolve before official launch."}</p>
                { heading("Eligibility") }
                <p>{"Users must be 13+ and based in India."}</p>
                { heading("Health Disclaimer") }
                <p>{"FYT LYF does not provide medical advice. Consult a doctor before engaging in fitness activity. Participation is at your own risk."}</p>
                { heading("Data Consent") }
                <p>{"By submitting your details, you consent to FYT LYF contacting you for updates & launch notifications."}</p>
                { heading("Contact") }
                { contact_line() }
            </PolicyCard>
        </Subpage>
    }
}

#[function_component(Privacy)]
pub fn privacy() -> Html {
    html! {
        <Subpage>
            <PolicyCard title="Privacy Policy">
                <p>
                    {"FYT LYF (“we”, “our”, “us”) respects your privacy. This Privacy Policy explains how we collect, use and protect your information when you pre-register for FYT LYF."}
                </p>
                { heading("What We Collect") }
                <ul class="list-disc ml-6">
                    <li>{"Name"}</li>
                    <li>{"Email"}</li>
                    <li>{"Indian Mobile Number"}</li>
                    <li>{"Basic analytics (Google Analytics)"}</li>
                </ul>
                { heading("Why We Collect It") }
                <ul class="list-disc ml-6">
                    <li>{"Pre-registration management"}</li>
                    <li>{"Updates & launch communication"}</li>
                    <li>{"Platform improvement"}</li>
                </ul>
                <p>{"Your data is securely stored in Google Firebase & Google Analytics. We do not sell your data."}</p>
                { heading("Your Rights") }
                <p>{"You may request access, update or deletion at:"}</p>
                { contact_line() }
                <p class="text-sm text-gray-500 mt-6">{"This policy may update when our platform officially launches."}</p>
            </PolicyCard>
        </Subpage>
    }
}

#[function_component(Refund)]
pub fn refund() -> Html {
    let theme = use_theme();
    let classes = theme.classes();
    let emphasis = if theme.theme.is_dark() { "text-gray-200" } else { "text-gray-800" };
    let inset_bg = if theme.theme.is_dark() { "bg-black" } else { "bg-white" };

    html! {
        <Subpage>
            <div class="max-w-4xl mx-auto">
                <div class="text-center mb-16">
                    <p class="text-orange-500 tracking-[6px] text-sm uppercase font-bold">{"Policy"}</p>
                    <h1 class="text-4xl md:text-6xl font-extrabold mt-2">{"Cancellation & Refund"}</h1>
                    <p class={classes!("mt-4", classes.text_sub)}>{"Transparent. Fair. Disciplined."}</p>
                </div>

                <div class="space-y-12">
                    <div class={classes!("p-8", "rounded-3xl", "border", classes.border, classes.card_bg)}>
                        <h2 class="text-2xl font-bold text-orange-500 flex items-center gap-3">
                            <span class="text-3xl">{"🚫"}</span>{" Subscription & Membership Policy"}
                        </h2>
                        <div class={classes!("mt-5", "space-y-4", "leading-relaxed", classes.text_sub)}>
                            <p>
                                {"At "}<strong>{"FYT LYF"}</strong>
                                {", we prioritize commitment and discipline. When you subscribe to any of our plans (Pro, Pro+, or Elite), you are reserving a spot in our ecosystem, accessing premium intellectual property, and utilizing server resources for analytics and AI generation."}
                            </p>
                            <p class={classes!("font-semibold", "border-l-4", "border-orange-500", "pl-4", "py-1", emphasis)}>
                                {"Therefore, voluntary cancellations or \"change of mind\" requests are "}
                                <span class="text-orange-500">{"NON-REFUNDABLE"}</span>{"."}
                            </p>
                            <p>{"Please review your choice carefully before purchasing. We believe that once you commit to your fitness journey, you should see it through."}</p>
                        </div>
                    </div>

                    <div class="p-8 rounded-3xl border border-green-500/30 bg-green-500/5">
                        <h2 class="text-2xl font-bold text-green-500 flex items-center gap-3">
                            <span class="text-3xl">{"✅"}</span>{" Transaction & Technical Refunds"}
                        </h2>
                        <div class={classes!("mt-5", "space-y-4", "leading-relaxed", classes.text_sub)}>
                            <p>
                                {"While subscriptions are final, we ensure 100% safety for your money regarding technical errors. "}
                                <strong>{"Refunds ARE provided"}</strong>{" in the following specific technical cases:"}
                            </p>
                            <ul class="grid gap-4 mt-4">
                                <li class={classes!("p-4", "rounded-xl", "border", classes.border, inset_bg)}>
                                    <strong class="block text-orange-500 mb-1">{"Case 1: Double Deduction"}</strong>
                                    {"If you were charged twice for the same plan due to a server glitch or payment gateway error, the extra amount will be refunded fully."}
                                </li>
                                <li class={classes!("p-4", "rounded-xl", "border", classes.border, inset_bg)}>
                                    <strong class="block text-orange-500 mb-1">{"Case 2: Money Deducted, Plan Not Active"}</strong>
                                    {"If the amount was deducted from your bank account but the subscription failed to activate on your user handle due to a network failure on our end."}
                                </li>
                            </ul>
                            <p class="mt-4 text-sm">
                                {"*Refunds for valid technical errors are typically processed within "}
                                <strong>{"5-7 business days"}</strong>{" to the original source of payment."}
                            </p>
                        </div>
                    </div>

                    <div class={classes!("p-8", "rounded-3xl", "border", classes.border, classes.card_bg)}>
                        <h2 class="text-xl font-bold">{"How to Request a Technical Refund"}</h2>
                        <p class={classes!("mt-3", classes.text_sub)}>
                            {"If you faced a transaction issue mentioned above, please contact us immediately."}
                        </p>
                        <div class={classes!("mt-6", "p-4", "rounded-xl", "border", classes.border, inset_bg)}>
                            <p class="text-xs uppercase tracking-wider text-gray-500">{"Email Us"}</p>
                            <a href={format!("mailto:{}", config::CONTACT_EMAIL)} class="text-lg font-bold text-orange-500 hover:underline">
                                { config::CONTACT_EMAIL }
                            </a>
                            <p class="text-xs mt-2 text-gray-400">{"Subject: Refund Request - [Your Name]"}</p>
                        </div>
                        <div class="mt-6 text-sm text-gray-400 bg-orange-500/10 p-4 rounded-xl border border-orange-500/20">
                            <strong>{"Required Details:"}</strong>
                            {" Please attach the Transaction ID, Date of Payment, and Registered Email/Phone Number in your email for faster processing."}
                        </div>
                    </div>
                </div>
            </div>
        </Subpage>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    use yew_router::prelude::Link;

    html! {
        <Subpage>
            <div class="max-w-xl mx-auto text-center">
                <p class="text-orange-500 tracking-[6px] text-sm uppercase font-bold">{"404"}</p>
                <h1 class="text-4xl md:text-6xl font-extrabold mt-2">{"Wrong Turn."}</h1>
                <Link<Route> to={Route::Home} classes="inline-block mt-10 bg-orange-600 text-white px-8 py-4 rounded-xl font-semibold hover:bg-orange-700 transition">
                    {"Back To The Arena"}
                </Link<Route>>
            </div>
        </Subpage>
    }
}
