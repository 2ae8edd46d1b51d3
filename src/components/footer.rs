use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-columns">
                    <div class="footer-brand">
                        <h3>{"Dental Masters"}</h3>
                        <p>
                            {"A full day of hands-on continuing education with five of \
                              the world's leading clinicians."}
                        </p>
                    </div>
                    <div class="footer-links">
                        <h4>{"Event"}</h4>
                        <Link<Route> to={Route::Home}>{"Home"}</Link<Route>>
                        <Link<Route> to={Route::Speakers}>{"Speakers"}</Link<Route>>
                        <Link<Route> to={Route::About}>{"About"}</Link<Route>>
                        <Link<Route> to={Route::Faq}>{"FAQ"}</Link<Route>>
                        <Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>>
                        <Link<Route> to={Route::Register}>{"Register"}</Link<Route>>
                    </div>
                    <div class="footer-contact">
                        <h4>{"Get in Touch"}</h4>
                        <p>{"info@dentalmasters.com"}</p>
                        <p>{"+1-800-DENTIST"}</p>
                        <p>{"123 Medical Center Drive"}</p>
                        <p>{"Boston, MA 02115"}</p>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p>{"© 2026 Dental Masters. All rights reserved."}</p>
                    <div class="footer-legal">
                        <Link<Route> to={Route::Terms}>{"Terms of Service"}</Link<Route>>
                        {" | "}
                        <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
                        {" | "}
                        <Link<Route> to={Route::AdminLogin}>{"Admin"}</Link<Route>>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .site-footer {
                    background: rgba(15, 15, 15, 0.95);
                    border-top: 1px solid rgba(30, 144, 255, 0.15);
                    position: relative;
                    z-index: 1;
                }

                .footer-content {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 3rem 2rem 2rem;
                }

                .footer-columns {
                    display: grid;
                    grid-template-columns: 2fr 1fr 1fr;
                    gap: 3rem;
                    padding-bottom: 2rem;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                }

                .footer-brand h3 {
                    color: #fff;
                    font-size: 1.2rem;
                    margin: 0 0 0.75rem;
                }

                .footer-brand p {
                    color: #999;
                    font-size: 0.9rem;
                    line-height: 1.6;
                    margin: 0;
                    max-width: 320px;
                }

                .footer-links h4,
                .footer-contact h4 {
                    color: #7EB2FF;
                    font-size: 0.85rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    margin: 0 0 1rem;
                }

                .footer-links a {
                    display: block;
                    color: #999;
                    text-decoration: none;
                    font-size: 0.9rem;
                    margin-bottom: 0.5rem;
                    transition: color 0.3s;
                }

                .footer-links a:hover {
                    color: #fff;
                }

                .footer-contact p {
                    color: #999;
                    font-size: 0.9rem;
                    margin: 0 0 0.5rem;
                }

                .footer-bottom {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding-top: 1.5rem;
                    flex-wrap: wrap;
                    gap: 1rem;
                }

                .footer-bottom p {
                    color: #666;
                    font-size: 0.85rem;
                    margin: 0;
                }

                .footer-legal {
                    color: #666;
                    font-size: 0.85rem;
                }

                .footer-legal a {
                    color: #999;
                    text-decoration: none;
                }

                .footer-legal a:hover {
                    color: #fff;
                }

                @media (max-width: 768px) {
                    .footer-columns {
                        grid-template-columns: 1fr;
                        gap: 2rem;
                    }

                    .footer-bottom {
                        flex-direction: column;
                        text-align: center;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
