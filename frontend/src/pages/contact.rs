use gloo_console::log;
use web_sys::{window, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::pages::legal::Subpage;
use crate::theme::use_theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactSubject {
    General,
    Technical,
    Refund,
    Collaboration,
}

impl ContactSubject {
    pub const ALL: [ContactSubject; 4] = [
        ContactSubject::General,
        ContactSubject::Technical,
        ContactSubject::Refund,
        ContactSubject::Collaboration,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ContactSubject::General => "General Inquiry",
            ContactSubject::Technical => "Technical Issue",
            ContactSubject::Refund => "Refund Request",
            ContactSubject::Collaboration => "Collaboration",
        }
    }

    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|subject| subject.label() == label)
            .unwrap_or(ContactSubject::General)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// `mailto:` link for the support inbox with subject and body URL-encoded.
pub fn mailto_link(to: &str, subject: ContactSubject, msg: &ContactMessage) -> String {
    let name = msg.name.trim();
    let subject_line = if name.is_empty() {
        subject.label().to_string()
    } else {
        format!("{} - {}", subject.label(), name)
    };

    let mut body = msg.message.trim().to_string();
    let email = msg.email.trim();
    if !email.is_empty() {
        body.push_str(&format!("\n\nReply to: {}", email));
    }

    format!(
        "mailto:{}?subject={}&body={}",
        to,
        urlencoding::encode(&subject_line),
        urlencoding::encode(&body)
    )
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let theme = use_theme();
    let classes = theme.classes();
    let name = use_state(String::new);
    let email = use_state(String::new);
    let subject = use_state(|| ContactSubject::General);
    let message = use_state(String::new);

    let input_class = classes!("w-full", "p-4", "rounded-xl", "outline-none", "transition", classes.input_bg);

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let subject = subject.clone();
        let message = message.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let msg = ContactMessage {
                name: (*name).clone(),
                email: (*email).clone(),
                message: (*message).clone(),
            };
            let link = mailto_link(config::CONTACT_EMAIL, *subject, &msg);
            log!("Opening mail client:", subject.label());
            if let Some(window) = window() {
                let _ = window.location().set_href(&link);
            }
        })
    };

    html! {
        <Subpage tagline="India • 2026">
            <div class="max-w-5xl mx-auto">
                <div class="text-center mb-16">
                    <p class="text-orange-500 tracking-[6px] text-sm uppercase font-bold">{"Support"}</p>
                    <h1 class="text-4xl md:text-6xl font-extrabold mt-2">{"Get in Touch"}</h1>
                    <p class={classes!("mt-4", "max-w-xl", "mx-auto", classes.text_sub)}>
                        {"Questions about challenges? Technical issues? We are here to help you stay on track."}
                    </p>
                </div>

                <div class="grid md:grid-cols-2 gap-10 items-start">
                    <div class="space-y-6">
                        <div class={classes!("p-8", "rounded-3xl", "border", "hover:border-orange-500/50", "transition", "duration-300", classes.border, classes.card_bg)}>
                            <div class="w-12 h-12 rounded-full bg-orange-500/20 flex items-center justify-center text-2xl mb-4">{"✉️"}</div>
                            <h3 class="text-xl font-bold">{"Email Support"}</h3>
                            <p class={classes!("mt-2", "text-sm", classes.text_sub)}>
                                {"For queries regarding subscriptions, technical bugs, or business partnerships."}
                            </p>
                            <a href={format!("mailto:{}", config::CONTACT_EMAIL)} class="block mt-4 text-orange-500 font-bold text-lg hover:underline">
                                { config::CONTACT_EMAIL }
                            </a>
                        </div>
                        <div class={classes!("p-8", "rounded-3xl", "border", "hover:border-pink-500/50", "transition", "duration-300", classes.border, classes.card_bg)}>
                            <div class="w-12 h-12 rounded-full bg-pink-500/20 flex items-center justify-center text-2xl mb-4">{"📸"}</div>
                            <h3 class="text-xl font-bold">{"Instagram Community"}</h3>
                            <p class={classes!("mt-2", "text-sm", classes.text_sub)}>
                                {"Follow for updates, daily motivation, and challenge announcements. DM us for quick queries."}
                            </p>
                            <a href={config::INSTAGRAM_URL} target="_blank" rel="noopener noreferrer"
                                class="inline-block mt-4 bg-gradient-to-r from-purple-500 to-pink-500 text-white px-6 py-2 rounded-xl font-semibold hover:opacity-90 transition shadow-lg">
                                {"Follow @_fyt_lyf"}
                            </a>
                        </div>
                    </div>

                    <div class={classes!("p-8", "rounded-3xl", "border", classes.border, classes.card_bg)}>
                        <h3 class="text-2xl font-bold mb-6">{"Send a Message"}</h3>
                        <form class="space-y-4" {onsubmit}>
                            <div>
                                <label for="contact-name" class="sr-only">{"Name"}</label>
                                <input id="contact-name" name="name" type="text" placeholder="Your Name"
                                    class={input_class.clone()}
                                    value={(*name).clone()}
                                    oninput={{
                                        let name = name.clone();
                                        move |e: InputEvent| {
                                            let input: HtmlInputElement = e.target_unchecked_into();
                                            name.set(input.value());
                                        }
                                    }} />
                            </div>
                            <div>
                                <label for="contact-email" class="sr-only">{"Email"}</label>
                                <input id="contact-email" name="email" type="email" placeholder="Your Email"
                                    class={input_class.clone()}
                                    value={(*email).clone()}
                                    oninput={{
                                        let email = email.clone();
                                        move |e: InputEvent| {
                                            let input: HtmlInputElement = e.target_unchecked_into();
                                            email.set(input.value());
                                        }
                                    }} />
                            </div>
                            <div>
                                <label for="subject" class="sr-only">{"Subject"}</label>
                                <select id="subject" name="subject" aria-label="Select Subject"
                                    class={input_class.clone()}
                                    onchange={{
                                        let subject = subject.clone();
                                        move |e: Event| {
                                            let select: HtmlSelectElement = e.target_unchecked_into();
                                            subject.set(ContactSubject::from_label(&select.value()));
                                        }
                                    }}
                                >
                                    { for ContactSubject::ALL.iter().map(|s| html! {
                                        <option value={s.label()} selected={*s == *subject}>{ s.label() }</option>
                                    }) }
                                </select>
                            </div>
                            <div>
                                <label for="message" class="sr-only">{"Message"}</label>
                                <textarea id="message" name="message" rows="4" placeholder="How can we help you?"
                                    class={input_class.clone()}
                                    value={(*message).clone()}
                                    oninput={{
                                        let message = message.clone();
                                        move |e: InputEvent| {
                                            let input: HtmlTextAreaElement = e.target_unchecked_into();
                                            message.set(input.value());
                                        }
                                    }} />
                            </div>
                            <button type="submit" class="w-full bg-orange-600 text-white font-bold py-4 rounded-xl hover:bg-orange-700 transition shadow-lg shadow-orange-500/20">
                                {"Send Message"}
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        </Subpage>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailto_encodes_subject_and_body() {
        let msg = ContactMessage {
            name: "Rahul Sharma".to_string(),
            email: "rahul@example.com".to_string(),
            message: "Payment went through twice & plan not active?".to_string(),
        };
        let link = mailto_link("founder@fytlyf.in", ContactSubject::Refund, &msg);
        assert_eq!(
            link,
            "mailto:founder@fytlyf.in?subject=Refund%20Request%20-%20Rahul%20Sharma\
             &body=Payment%20went%20through%20twice%20%26%20plan%20not%20active%3F\
             %0A%0AReply%20to%3A%20rahul%40example.com"
        );
    }

    #[test]
    fn mailto_without_name_or_email() {
        let msg = ContactMessage {
            message: "  hi  ".to_string(),
            ..Default::default()
        };
        let link = mailto_link("founder@fytlyf.in", ContactSubject::General, &msg);
        assert_eq!(link, "mailto:founder@fytlyf.in?subject=General%20Inquiry&body=hi");
    }

    #[test]
    fn subject_labels_round_trip() {
        for subject in ContactSubject::ALL {
            assert_eq!(ContactSubject::from_label(subject.label()), subject);
        }
        assert_eq!(ContactSubject::from_label("bogus"), ContactSubject::General);
    }
}
