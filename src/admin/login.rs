use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{self, AdminLoginRequest};
use crate::storage;
use crate::Route;

#[function_component(AdminLogin)]
pub fn admin_login() -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let navigator = use_navigator().unwrap();

    // A visitor who still holds a session token goes straight to the
    // dashboard.
    {
        let navigator = navigator.clone();
        use_effect_with_deps(
            move |_| {
                if storage::load_admin_token().is_some() {
                    navigator.push(&Route::Admin);
                }
                || ()
            },
            (),
        );
    }

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let email = (*email).clone();
            let password = (*password).clone();
            let error = error.clone();
            let navigator = navigator.clone();

            if email.is_empty() || password.is_empty() {
                error.set(Some("Please enter your email and password".to_string()));
                return;
            }

            wasm_bindgen_futures::spawn_local(async move {
                match api::admin_login(&AdminLoginRequest { email, password }).await {
                    Ok(envelope) => {
                        if envelope.success {
                            if let Some(data) = envelope.data {
                                storage::save_admin_token(&data.token);
                                navigator.push(&Route::Admin);
                            } else {
                                error.set(Some("Login failed".to_string()));
                            }
                        } else {
                            error.set(Some(
                                envelope
                                    .error
                                    .unwrap_or_else(|| "Invalid email or password".to_string()),
                            ));
                        }
                    }
                    Err(e) => {
                        error.set(Some(format!("Request failed: {}", e)));
                    }
                }
            });
        })
    };

    html! {
        <div class="admin-login-page">
            <div class="page-background"></div>
            <div class="login-panel">
                <h1>{"Admin Login"}</h1>
                <p class="login-subtitle">{"Event organizers only"}</p>
                {
                    if let Some(message) = (*error).as_ref() {
                        html! { <div class="login-error">{message}</div> }
                    } else {
                        html! {}
                    }
                }
                <form onsubmit={onsubmit}>
                    <div class="form-field">
                        <label for="email">{"Email"}</label>
                        <input
                            id="email"
                            type="email"
                            placeholder="admin@dentalmasters.com"
                            value={(*email).clone()}
                            oninput={let email = email.clone(); move |e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                email.set(input.value());
                            }}
                        />
                    </div>
                    <div class="form-field">
                        <label for="password">{"Password"}</label>
                        <input
                            id="password"
                            type="password"
                            placeholder="••••••••"
                            value={(*password).clone()}
                            oninput={let password = password.clone(); move |e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                password.set(input.value());
                            }}
                        />
                    </div>
                    <button type="submit" class="button-primary login-submit">
                        {"Sign In"}
                    </button>
                </form>
                <Link<Route> to={Route::Home} classes="back-link">
                    {"Back to site"}
                </Link<Route>>
            </div>
            <style>
                {r#"
                .admin-login-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    color: #ffffff;
                    position: relative;
                    background: transparent;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .login-panel {
                    background: rgba(26, 26, 26, 0.85);
                    border: 1px solid rgba(30, 144, 255, 0.15);
                    border-radius: 12px;
                    padding: 2.5rem;
                    width: 100%;
                    max-width: 400px;
                    position: relative;
                    z-index: 1;
                    text-align: center;
                }

                .login-panel h1 {
                    font-size: 1.8rem;
                    margin: 0 0 0.5rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .login-subtitle {
                    color: #999;
                    font-size: 0.9rem;
                    margin: 0 0 2rem;
                }

                .login-error {
                    background: rgba(255, 107, 107, 0.1);
                    border: 1px solid rgba(255, 107, 107, 0.3);
                    border-radius: 8px;
                    color: #ff6b6b;
                    font-size: 0.9rem;
                    padding: 0.75rem 1rem;
                    margin-bottom: 1.5rem;
                }

                .login-panel .form-field {
                    margin-bottom: 1.25rem;
                    text-align: left;
                }

                .login-panel label {
                    display: block;
                    color: #999;
                    font-size: 0.85rem;
                    margin-bottom: 0.5rem;
                }

                .login-panel input {
                    width: 100%;
                    padding: 0.75rem 1rem;
                    background: rgba(15, 15, 15, 0.8);
                    border: 1px solid rgba(30, 144, 255, 0.2);
                    border-radius: 8px;
                    color: #fff;
                    font-size: 0.95rem;
                    box-sizing: border-box;
                }

                .login-panel input:focus {
                    outline: none;
                    border-color: #1E90FF;
                }

                .login-submit {
                    width: 100%;
                    margin-top: 0.5rem;
                }

                .back-link {
                    display: inline-block;
                    margin-top: 1.5rem;
                    color: #7EB2FF;
                    font-size: 0.85rem;
                    text-decoration: none;
                }

                .back-link:hover {
                    text-decoration: underline;
                }
                "#}
            </style>
        </div>
    }
}
