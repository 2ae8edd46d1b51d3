use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

fn legal_styles() -> Html {
    html! {
        <style>
            {r#"
            .legal-page {
                padding-top: 74px;
                min-height: 100vh;
                color: #ffffff;
                position: relative;
                background: transparent;
            }

            .legal-content {
                max-width: 800px;
                margin: 0 auto;
                padding: 4rem 2rem 6rem;
                position: relative;
                z-index: 1;
            }

            .legal-content h1 {
                font-size: 2.4rem;
                margin: 0 0 0.5rem;
                background: linear-gradient(45deg, #fff, #7EB2FF);
                -webkit-background-clip: text;
                background-clip: text;
                -webkit-text-fill-color: transparent;
            }

            .company-name {
                color: #7EB2FF;
                margin: 0 0 3rem;
            }

            .legal-content section {
                margin-bottom: 2.5rem;
            }

            .legal-content h2 {
                color: #fff;
                font-size: 1.3rem;
                margin: 0 0 1rem;
            }

            .legal-content p {
                color: #999;
                line-height: 1.7;
                margin: 0 0 1rem;
            }

            .legal-content ul {
                color: #999;
                line-height: 1.7;
                padding-left: 1.5rem;
                margin: 0;
            }

            .legal-content li {
                margin-bottom: 0.5rem;
            }

            .legal-links {
                text-align: center;
                margin-top: 3rem;
                padding-top: 2rem;
                border-top: 1px solid rgba(30, 144, 255, 0.15);
                color: #666;
            }

            .legal-links a {
                color: #7EB2FF;
                text-decoration: none;
            }

            .legal-links a:hover {
                text-decoration: underline;
            }
            "#}
        </style>
    }
}

#[function_component(TermsOfService)]
pub fn terms_of_service() -> Html {
    html! {
        <div class="legal-page">
            <div class="page-background"></div>
            <div class="legal-content">
                <h1>{"Terms of Service"}</h1>
                <p class="company-name">{"Provided by Dental Masters"}</p>

                <section>
                    <h2>{"1. Introduction"}</h2>
                    <p>
                        {"These Terms of Service (\"Terms\") govern your registration for \
                          and attendance of the Master Class in Modern Dentistry 2026 \
                          (\"Event\"). By registering you agree to be bound by these Terms."}
                    </p>
                </section>

                <section>
                    <h2>{"2. Registration"}</h2>
                    <p>
                        {"You are responsible for the accuracy of the information submitted \
                          in the registration form. Continuing education credits and \
                          certificates are issued to the name and license number provided \
                          at registration."}
                    </p>
                </section>

                <section>
                    <h2>{"3. Payment"}</h2>
                    <ul>
                        <li>{"The full registration fee, including any selected accommodation, meal plan, certificate upgrade or add-ons, is due at the time of registration."}</li>
                        <li>{"All prices are quoted and charged in US dollars."}</li>
                        <li>{"Your seat is confirmed once payment has been received and a confirmation number issued."}</li>
                    </ul>
                </section>

                <section>
                    <h2>{"4. Cancellations and Refunds"}</h2>
                    <ul>
                        <li>{"Cancellations made 14 or more days before the Event receive a full refund."}</li>
                        <li>{"Cancellations within 14 days of the Event receive a 50% refund or full credit toward a future event."}</li>
                        <li>{"Registrations may be transferred to another attendee up to 48 hours before the Event at no charge."}</li>
                        <li>{"If the Event is cancelled by the organizers, all registrants receive a full refund within 5 to 7 business days."}</li>
                    </ul>
                </section>

                <section>
                    <h2>{"5. Program Changes"}</h2>
                    <p>
                        {"The organizers may adjust the program, schedule or speaker lineup \
                          where circumstances require. Such changes do not entitle \
                          registrants to a refund unless the Event is cancelled outright."}
                    </p>
                </section>

                <section>
                    <h2>{"6. Continuing Education Credits"}</h2>
                    <p>
                        {"The Event offers 12 CE credits subject to full attendance. \
                          Certificates are issued after the Event to attendees who complete \
                          the program."}
                    </p>
                </section>

                <section>
                    <h2>{"7. Liability"}</h2>
                    <p>
                        {"The organizers' liability is limited to the registration fee paid. \
                          Clinical techniques presented at the Event are for educational \
                          purposes; their application remains the professional \
                          responsibility of each practitioner."}
                    </p>
                </section>

                <section>
                    <h2>{"8. Contact"}</h2>
                    <p>{"Email: info@dentalmasters.com"}</p>
                    <p>{"Address: 123 Medical Center Drive, Boston, MA 02115"}</p>
                </section>

                <div class="legal-links">
                    <Link<Route> to={Route::Terms}>{"Terms of Service"}</Link<Route>>
                    {" | "}
                    <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
                </div>
            </div>
            {legal_styles()}
        </div>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <div class="legal-page">
            <div class="page-background"></div>
            <div class="legal-content">
                <h1>{"Privacy Policy"}</h1>
                <p class="company-name">{"Provided by Dental Masters"}</p>

                <section>
                    <h2>{"1. Information We Collect"}</h2>
                    <p>{"When you register for the Event we collect:"}</p>
                    <ul>
                        <li>{"Contact details: full name, email address, phone number and country."}</li>
                        <li>{"Professional details: profession, years of experience and license number."}</li>
                        <li>{"Event preferences: accommodation, meals, dietary restrictions, certificate type and selected add-ons."}</li>
                    </ul>
                </section>

                <section>
                    <h2>{"2. How We Use It"}</h2>
                    <ul>
                        <li>{"To process your registration and issue your confirmation number."}</li>
                        <li>{"To prepare certificates and report CE credits to the relevant boards."}</li>
                        <li>{"To arrange accommodation, catering and materials for the Event."}</li>
                        <li>{"To send you information about your registration and the Event schedule."}</li>
                    </ul>
                </section>

                <section>
                    <h2>{"3. Payment Data"}</h2>
                    <p>
                        {"Card details entered on the payment page are sent to our payment \
                          processor over an encrypted connection and are never stored by \
                          us."}
                    </p>
                </section>

                <section>
                    <h2>{"4. Data Kept in Your Browser"}</h2>
                    <p>
                        {"An in-progress registration is saved in your browser's local \
                          storage so you can resume where you left off. It stays on your \
                          device and is cleared when your registration completes."}
                    </p>
                </section>

                <section>
                    <h2>{"5. Sharing"}</h2>
                    <p>
                        {"We never sell your data. Attendee details are shared only with \
                          the venue, caterers and certification bodies to the extent needed \
                          to deliver the Event."}
                    </p>
                </section>

                <section>
                    <h2>{"6. Your Rights"}</h2>
                    <p>{"You have the right to:"}</p>
                    <ul>
                        <li>{"Access the personal data we hold about you."}</li>
                        <li>{"Correct inaccurate registration details."}</li>
                        <li>{"Request deletion of your data after the Event."}</li>
                    </ul>
                </section>

                <section>
                    <h2>{"7. Contact"}</h2>
                    <p>{"For privacy inquiries or to exercise your rights, contact:"}</p>
                    <p>{"Email: info@dentalmasters.com"}</p>
                    <p>{"Address: 123 Medical Center Drive, Boston, MA 02115"}</p>
                </section>

                <div class="legal-links">
                    <Link<Route> to={Route::Terms}>{"Terms of Service"}</Link<Route>>
                    {" | "}
                    <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
                </div>
            </div>
            {legal_styles()}
        </div>
    }
}
