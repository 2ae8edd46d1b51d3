use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod api;
mod config;
mod data;
mod models;
mod pricing;
mod storage;
mod pages {
    pub mod about;
    pub mod contact;
    pub mod faq;
    pub mod home;
    pub mod speakers;
    pub mod termsprivacy;
}
mod registration {
    pub mod payment;
    pub mod steps;
    pub mod success;
    pub mod wizard;
}
mod admin {
    pub mod dashboard;
    pub mod login;
}
mod components {
    pub mod footer;
}

use admin::{dashboard::AdminDashboard, login::AdminLogin};
use components::footer::Footer;
use pages::{
    about::About,
    contact::Contact,
    faq::Faq,
    home::Home,
    speakers::Speakers,
    termsprivacy::{PrivacyPolicy, TermsOfService},
};
use registration::{payment::Payment, success::Success, wizard::Register};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/speakers")]
    Speakers,
    #[at("/about")]
    About,
    #[at("/faq")]
    Faq,
    #[at("/contact")]
    Contact,
    #[at("/register")]
    Register,
    #[at("/payment")]
    Payment,
    #[at("/success")]
    Success,
    #[at("/terms")]
    Terms,
    #[at("/privacy")]
    Privacy,
    #[at("/admin/login")]
    AdminLogin,
    #[at("/admin")]
    Admin,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Speakers => {
            info!("Rendering Speakers page");
            html! { <Speakers /> }
        }
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        }
        Route::Faq => {
            info!("Rendering FAQ page");
            html! { <Faq /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
        Route::Register => {
            info!("Rendering Register page");
            html! { <Register /> }
        }
        Route::Payment => {
            info!("Rendering Payment page");
            html! { <Payment /> }
        }
        Route::Success => {
            info!("Rendering Success page");
            html! { <Success /> }
        }
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsOfService /> }
        }
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        }
        Route::AdminLogin => {
            info!("Rendering Admin Login page");
            html! { <AdminLogin /> }
        }
        Route::Admin => {
            info!("Rendering Admin page");
            html! { <AdminDashboard /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    is_scrolled.set(scroll_top > 80);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
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
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Dental Masters"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Speakers} classes="nav-link">
                            {"Speakers"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::About} classes="nav-link">
                            {"About"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Faq} classes="nav-link">
                            {"FAQ"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Contact} classes="nav-link">
                            {"Contact"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Register} classes="nav-cta">
                            {"Register"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
            <Footer />
            <style>
                {r#"
                body {
                    margin: 0;
                    background: #0a0a0a;
                    color: #ffffff;
                    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI',
                        Roboto, 'Helvetica Neue', sans-serif;
                }

                .page-background {
                    position: fixed;
                    inset: 0;
                    background:
                        radial-gradient(circle at 20% 10%, rgba(30, 144, 255, 0.08) 0%, transparent 40%),
                        radial-gradient(circle at 80% 80%, rgba(126, 178, 255, 0.05) 0%, transparent 45%);
                    z-index: 0;
                    pointer-events: none;
                }

                .button-primary {
                    display: inline-block;
                    background: linear-gradient(45deg, #1E90FF, #4169E1);
                    border: none;
                    border-radius: 8px;
                    color: #fff;
                    font-size: 1rem;
                    font-weight: 600;
                    padding: 0.9rem 2rem;
                    cursor: pointer;
                    text-decoration: none;
                    transition: transform 0.3s, box-shadow 0.3s;
                }

                .button-primary:hover {
                    transform: translateY(-2px);
                    box-shadow: 0 8px 24px rgba(30, 144, 255, 0.3);
                }

                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: transparent;
                    transition: background 0.3s, box-shadow 0.3s;
                }

                .top-nav.scrolled {
                    background: rgba(10, 10, 10, 0.95);
                    box-shadow: 0 2px 12px rgba(0, 0, 0, 0.4);
                }

                .nav-content {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 1rem 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .nav-logo {
                    color: #fff;
                    font-size: 1.2rem;
                    font-weight: 700;
                    text-decoration: none;
                }

                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }

                .nav-link {
                    color: #ccc;
                    text-decoration: none;
                    font-size: 0.95rem;
                    transition: color 0.3s;
                }

                .nav-link:hover {
                    color: #fff;
                }

                .nav-cta {
                    background: linear-gradient(45deg, #1E90FF, #4169E1);
                    border-radius: 8px;
                    color: #fff;
                    font-size: 0.95rem;
                    font-weight: 600;
                    padding: 0.5rem 1.25rem;
                    text-decoration: none;
                }

                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.5rem;
                }

                .burger-menu span {
                    display: block;
                    width: 22px;
                    height: 2px;
                    background: #fff;
                    margin: 5px 0;
                }

                @media (max-width: 768px) {
                    .burger-menu {
                        display: block;
                    }

                    .nav-right {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        background: rgba(10, 10, 10, 0.98);
                        flex-direction: column;
                        align-items: flex-start;
                        padding: 1.5rem 2rem;
                        gap: 1.25rem;
                    }

                    .nav-right.mobile-menu-open {
                        display: flex;
                    }
                }
                "#}
            </style>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::Route;
    use yew_router::Routable;

    #[test]
    fn every_page_has_its_own_path() {
        assert!(matches!(Route::recognize("/"), Some(Route::Home)));
        assert!(matches!(
            Route::recognize("/speakers"),
            Some(Route::Speakers)
        ));
        assert!(matches!(
            Route::recognize("/admin/login"),
            Some(Route::AdminLogin)
        ));
        assert!(matches!(Route::recognize("/admin"), Some(Route::Admin)));
        assert_eq!(Route::Register.to_path(), "/register");
        assert_eq!(Route::Payment.to_path(), "/payment");
    }
}
