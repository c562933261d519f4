use yew::prelude::*;
use yew_router::prelude::*;
use yew_hooks::prelude::use_mount;
use log::info;
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod compat;
mod config;
mod download;
mod observer;
mod scroll;
mod components {
    pub mod anchor_link;
    pub mod download_center;
    pub mod notification;
    pub mod progress_fill;
    pub mod reveal;
    pub mod support;
}
mod pages {
    pub mod faq;
    pub mod landing;
}

use components::anchor_link::AnchorLink;
use components::notification::{Notice, ToastAction, ToastList, Toaster};
use pages::landing::Landing;
use scroll::Debouncer;

const NAV_LINKS: [(&str, &str); 5] = [
    ("#home", "Home"),
    ("#download", "Download"),
    ("#install", "Install"),
    ("#support", "Support"),
    ("#faq", "FAQ"),
];

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route, on_notify: Callback<Notice>) -> Html {
    match route {
        Route::Home => {
            info!("Rendering landing page");
            html! { <Landing on_notify={on_notify} /> }
        }
        Route::NotFound => {
            info!("Unknown route, rendering landing page");
            html! { <Landing on_notify={on_notify} /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let debounce = Debouncer::new(config::SCROLL_DEBOUNCE_MS);
            is_scrolled.set(scroll::is_scrolled(scroll::current_scroll_y()));

            let scroll_callback = {
                let debounce = debounce.clone();
                Closure::wrap(Box::new(move || {
                    let is_scrolled = is_scrolled.clone();
                    debounce.call(move || {
                        is_scrolled.set(scroll::is_scrolled(scroll::current_scroll_y()));
                    });
                }) as Box<dyn FnMut()>)
            };

            if let Some(window) = &window {
                if let Err(e) = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref()) {
                    log::warn!("Could not watch scrolling: {:?}", e);
                }
            }

            move || {
                debounce.cancel();
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(false))
    };

    let active = (*menu_open).then_some("active");

    html! {
        <header
            class={classes!("header", (*is_scrolled).then_some("scrolled"))}
            style={format!("background: {};", scroll::header_background(*is_scrolled))}
        >
            <nav class="navbar">
                <div class="nav-container">
                    <AnchorLink href="#home" class="nav-logo">
                        {config::PRODUCT_NAME}
                    </AnchorLink>

                    <ul class={classes!("nav-links", active)}>
                        { for NAV_LINKS.iter().map(|(href, label)| html! {
                            <li>
                                <AnchorLink href={*href} class="nav-link" on_follow={close_menu.clone()}>
                                    {*label}
                                </AnchorLink>
                            </li>
                        }) }
                    </ul>

                    <button id="hamburger" class={classes!("hamburger", active)} onclick={toggle_menu}>
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </nav>
        </header>
    }
}

#[function_component]
fn App() -> Html {
    let toasts = use_reducer(ToastList::default);

    let notify = {
        let dispatcher = toasts.dispatcher();
        Callback::from(move |notice: Notice| dispatcher.dispatch(ToastAction::Push(notice)))
    };

    let on_toast_action = {
        let dispatcher = toasts.dispatcher();
        Callback::from(move |action: ToastAction| dispatcher.dispatch(action))
    };

    {
        let notify = notify.clone();
        use_mount(move || {
            if let Some(warning) = compat::check_browser() {
                notify.emit(Notice::warning(warning));
            }
        });
    }

    let render = move |route: Route| switch(route, notify.clone());

    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={render} />
            <Toaster toasts={toasts.toasts.clone()} on_action={on_toast_action} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::LOG_LEVEL).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
