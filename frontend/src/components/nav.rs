use web_sys::window;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::theme::use_theme;
use crate::Route;

/// Smooth-scrolls to the element with `id`, if it exists. The smoothness
/// comes from `scroll-behavior: smooth` on `<html>`.
pub fn scroll_to(id: &str) {
    if let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    {
        element.scroll_into_view();
    }
}

pub fn scroll_callback<E: 'static>(id: &'static str) -> Callback<E> {
    Callback::from(move |_: E| scroll_to(id))
}

#[derive(Clone, PartialEq)]
pub enum NavTarget {
    Section(&'static str),
    Page(Route),
}

#[derive(Clone, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub target: NavTarget,
}

impl NavItem {
    pub const fn section(label: &'static str, id: &'static str) -> Self {
        NavItem { label, target: NavTarget::Section(id) }
    }

    pub const fn page(label: &'static str, route: Route) -> Self {
        NavItem { label, target: NavTarget::Page(route) }
    }
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub items: Vec<NavItem>,
    /// Show the "Join Now" button that jumps to the registration form.
    #[prop_or_default]
    pub join_button: bool,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let theme = use_theme();
    let classes = theme.classes();
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let toggle_theme = {
        let toggle = theme.toggle.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };

    let render_item = |item: &NavItem, class: &'static str| -> Html {
        let menu_open = menu_open.clone();
        match &item.target {
            NavTarget::Section(id) => {
                let id = *id;
                let onclick = Callback::from(move |_: MouseEvent| {
                    scroll_to(id);
                    menu_open.set(false);
                });
                html! { <button {onclick} class={class}>{ item.label }</button> }
            }
            NavTarget::Page(route) => {
                let onclick = Callback::from(move |_: MouseEvent| menu_open.set(false));
                html! {
                    <span {onclick}>
                        <Link<Route> to={route.clone()} classes={class}>{ item.label }</Link<Route>>
                    </span>
                }
            }
        }
    };

    html! {
        <header class={classes!("fixed", "top-0", "left-0", "w-full", "z-50", "backdrop-blur", "border-b", "transition-all", "duration-300", classes.nav_bg, classes.border)}>
            <div class="max-w-7xl mx-auto px-6 py-4 flex justify-between items-center">
                <div class="flex items-center gap-2">
                    <img src="/logo.png" alt="FYT LYF Logo" class="w-18 h-10 object-contain" />
                    <Link<Route> to={Route::Home} classes="text-xl tracking-wider font-potta">
                        <span class="text-orange-500">{"FYT"}</span>{" LYF"}
                    </Link<Route>>
                </div>

                <nav class={classes!("hidden", "md:flex", "gap-8", "text-sm", classes.text_sub)}>
                    { for props.items.iter().map(|item| render_item(item, "hover:text-orange-500 transition")) }
                </nav>

                <div class="flex items-center gap-4">
                    <button
                        onclick={toggle_theme}
                        class={classes!("p-2", "rounded-full", "border", "hover:bg-orange-500/20", "transition", classes.border)}
                        title="Toggle Theme"
                    >
                        { theme.theme.toggle_icon() }
                    </button>
                    if props.join_button {
                        <button
                            onclick={scroll_callback::<MouseEvent>("register")}
                            class="hidden md:block bg-orange-600 text-white px-5 py-2 rounded-xl font-semibold hover:bg-orange-700 transition shadow-lg glow"
                        >
                            {"Join Now"}
                        </button>
                    }
                    <button onclick={toggle_menu} class={classes!("md:hidden", "border", "px-3", "py-2", "rounded-xl", classes.border)}>
                        { if *menu_open { "✕" } else { "☰" } }
                    </button>
                </div>
            </div>

            if *menu_open {
                <div class={classes!("md:hidden", "border-b", "text-center", "py-6", "space-y-4", "absolute", "w-full", "top-full", "left-0", "shadow-2xl", classes.menu_bg, classes.border)}>
                    { for props.items.iter().map(|item| render_item(item, "block w-full py-2")) }
                </div>
            }
        </header>
    }
}
