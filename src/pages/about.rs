use yew::prelude::*;
use yew_router::prelude::*;

use crate::data;
use crate::Route;

struct ScheduleSlot {
    time: &'static str,
    title: &'static str,
    speaker: &'static str,
    topics: &'static [&'static str],
}

const SCHEDULE: [ScheduleSlot; 8] = [
    ScheduleSlot {
        time: "9:00 AM - 10:30 AM",
        title: "Digital Dentistry Revolution",
        speaker: "Dr. Aisha Patel",
        topics: &["CAD/CAM Workflow", "Digital Smile Design", "3D Printing in Dentistry"],
    },
    ScheduleSlot {
        time: "10:45 AM - 12:15 PM",
        title: "Advanced Implantology",
        speaker: "Dr. Sarah Mitchell",
        topics: &["Full-Arch Rehabilitation", "Immediate Loading Protocols", "Guided Surgery"],
    },
    ScheduleSlot {
        time: "12:15 PM - 1:15 PM",
        title: "Lunch Break & Networking",
        speaker: "",
        topics: &[],
    },
    ScheduleSlot {
        time: "1:15 PM - 2:45 PM",
        title: "Microscopic Endodontics",
        speaker: "Dr. James Chen",
        topics: &["Advanced Instrumentation", "Retreatment Strategies", "Apical Microsurgery"],
    },
    ScheduleSlot {
        time: "3:00 PM - 4:30 PM",
        title: "Regenerative Periodontics",
        speaker: "Dr. Emily Rodriguez",
        topics: &["Growth Factors & PRF", "Soft Tissue Grafting", "Bone Regeneration"],
    },
    ScheduleSlot {
        time: "4:45 PM - 6:15 PM",
        title: "Complex Oral Surgery",
        speaker: "Dr. Michael Thompson",
        topics: &["Orthognathic Surgery", "3D Surgical Planning", "TMJ Disorders"],
    },
    ScheduleSlot {
        time: "6:30 PM - 8:00 PM",
        title: "Panel Discussion & Q&A",
        speaker: "All Speakers",
        topics: &["Case Presentations", "Live Q&A", "Practice Management Tips"],
    },
    ScheduleSlot {
        time: "8:00 PM",
        title: "Networking Dinner (Optional)",
        speaker: "",
        topics: &["Meet the speakers", "Network with peers"],
    },
];

const AUDIENCES: [(&str, &str); 4] = [
    ("General Dentists", "Looking to expand their skill set"),
    ("Specialists", "Seeking cutting-edge techniques"),
    ("Dental Students", "Wanting exposure to advanced procedures"),
    ("Practice Owners", "Aiming to differentiate their practice"),
];

const LEARNING_OBJECTIVES: [&str; 6] = [
    "Master the latest digital dentistry workflows and tools",
    "Learn advanced implant placement techniques with minimal complications",
    "Understand microscopic approaches to endodontic treatment",
    "Implement regenerative procedures in your practice",
    "Apply evidence-based protocols for complex cases",
    "Develop strategies for practice growth and patient retention",
];

#[function_component(About)]
pub fn about() -> Html {
    let event = data::mock_event();

    html! {
        <div class="about-page">
            <div class="page-background"></div>
            <section class="about-hero">
                <span class="eyebrow">{"Event Details"}</span>
                <h1>{&event.name}</h1>
                <p>
                    {"A comprehensive 12-hour masterclass covering the most in-demand topics \
                      in modern dentistry, delivered by world-renowned experts."}
                </p>
                <div class="hero-facts">
                    <span>{event.long_date()}</span>
                    <span class="fact-divider">{"•"}</span>
                    <span>{"9:00 AM - 9:00 PM EST"}</span>
                    <span class="fact-divider">{"•"}</span>
                    <span>{"Live In-Person Training"}</span>
                </div>
            </section>

            <section class="schedule-section">
                <div class="section-header">
                    <h2>{"Event Format & Schedule"}</h2>
                    <p>{"A carefully structured program designed for maximum learning and engagement"}</p>
                </div>
                <div class="schedule-list">
                    {
                        for SCHEDULE.iter().map(|slot| {
                            let is_break = slot.speaker.is_empty();
                            html! {
                                <div class={classes!("schedule-item", is_break.then(|| "break"))}>
                                    <span class="slot-time">{slot.time}</span>
                                    <h3>{slot.title}</h3>
                                    {
                                        if !is_break {
                                            html! { <p class="slot-speaker">{format!("by {}", slot.speaker)}</p> }
                                        } else {
                                            html! {}
                                        }
                                    }
                                    {
                                        if !slot.topics.is_empty() {
                                            html! {
                                                <div class="slot-topics">
                                                    { for slot.topics.iter().map(|topic| html! {
                                                        <span class="topic-tag">{*topic}</span>
                                                    }) }
                                                </div>
                                            }
                                        } else {
                                            html! {}
                                        }
                                    }
                                </div>
                            }
                        })
                    }
                </div>
            </section>

            <section class="audience-section">
                <div class="section-header">
                    <h2>{"Who Should Attend?"}</h2>
                    <p>{"This masterclass is designed for dental professionals at all stages of their career"}</p>
                </div>
                <div class="audience-grid">
                    {
                        for AUDIENCES.iter().map(|(title, desc)| html! {
                            <div class="audience-card">
                                <h3>{*title}</h3>
                                <p>{*desc}</p>
                            </div>
                        })
                    }
                </div>
            </section>

            <section class="objectives-section" id="ce-credits">
                <div class="objectives-grid">
                    <div class="objectives-list">
                        <span class="eyebrow">{"Learning Objectives"}</span>
                        <h2>{"What You'll Learn"}</h2>
                        {
                            for LEARNING_OBJECTIVES.iter().map(|objective| html! {
                                <div class="objective-row">
                                    <span class="objective-check">{"✓"}</span>
                                    <span>{*objective}</span>
                                </div>
                            })
                        }
                    </div>
                    <div class="credits-card">
                        <h3>{"CE Credits"}</h3>
                        <p class="credits-subtitle">{"Continuing Education"}</p>
                        <p>
                            {"Upon completion, receive a certificate of attendance eligible for up to "}
                            <strong>{"12 CE credits"}</strong>
                            {". Credits are recognized by major dental associations."}
                        </p>
                        <div class="credits-badges">
                            <span>{"ADA CERP"}</span>
                            <span>{"AGD PACE"}</span>
                            <span>{"State Approved"}</span>
                        </div>
                    </div>
                </div>
            </section>

            <section class="bring-section">
                <h2>{"What to Bring"}</h2>
                <div class="bring-grid">
                    <div class="bring-card">
                        <h4>{"Notebook"}</h4>
                        <p>{"Take notes during the 12-hour live session"}</p>
                    </div>
                    <div class="bring-card">
                        <h4>{"ID Card"}</h4>
                        <p>{"Professional ID or registration confirmation"}</p>
                    </div>
                    <div class="bring-card">
                        <h4>{"Enthusiasm"}</h4>
                        <p>{"Come ready to learn and network!"}</p>
                    </div>
                </div>
            </section>

            <section class="about-cta">
                <h2>{"Ready to Transform Your Practice?"}</h2>
                <p>
                    {"Secure your spot today and join thousands of dental professionals \
                      who have elevated their skills."}
                </p>
                <Link<Route> to={Route::Register} classes="button-primary">
                    {format!("Register Now for ${}", event.base_price)}
                </Link<Route>>
            </section>

            <style>
                {r#"
                .about-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    color: #ffffff;
                    position: relative;
                    background: transparent;
                }

                .about-hero {
                    text-align: center;
                    padding: 5rem 2rem 3rem;
                }

                .eyebrow {
                    display: inline-block;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                    font-size: 0.85rem;
                    color: #7EB2FF;
                    margin-bottom: 1rem;
                }

                .about-hero h1 {
                    font-size: 3.5rem;
                    margin-bottom: 1.5rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .about-hero p {
                    font-size: 1.2rem;
                    color: #999;
                    max-width: 640px;
                    margin: 0 auto 2rem;
                }

                .hero-facts {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                    justify-content: center;
                    color: #7EB2FF;
                    font-size: 1rem;
                }

                .fact-divider {
                    color: #444;
                }

                .section-header {
                    text-align: center;
                    margin-bottom: 3rem;
                }

                .section-header h2 {
                    font-size: 2.5rem;
                    margin-bottom: 1rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .section-header p {
                    color: #999;
                    max-width: 600px;
                    margin: 0 auto;
                }

                .schedule-section {
                    max-width: 800px;
                    margin: 0 auto;
                    padding: 4rem 2rem;
                }

                .schedule-item {
                    background: rgba(26, 26, 26, 0.85);
                    backdrop-filter: blur(10px);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-left: 3px solid #1E90FF;
                    border-radius: 12px;
                    padding: 1.5rem;
                    margin-bottom: 1rem;
                    transition: all 0.3s ease;
                }

                .schedule-item:hover {
                    border-color: rgba(30, 144, 255, 0.3);
                    border-left-color: #1E90FF;
                    transform: translateX(4px);
                }

                .schedule-item.break {
                    border-left-style: dashed;
                    border-left-color: rgba(30, 144, 255, 0.4);
                    background: rgba(30, 144, 255, 0.05);
                }

                .slot-time {
                    font-size: 0.9rem;
                    color: #7EB2FF;
                }

                .schedule-item h3 {
                    font-size: 1.2rem;
                    margin: 0.5rem 0;
                    color: #fff;
                }

                .slot-speaker {
                    color: #999;
                    font-size: 0.95rem;
                    margin-bottom: 0.75rem;
                }

                .slot-topics {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }

                .topic-tag {
                    font-size: 0.8rem;
                    padding: 0.25rem 0.75rem;
                    border-radius: 999px;
                    background: rgba(30, 144, 255, 0.1);
                    color: #7EB2FF;
                }

                .audience-section {
                    padding: 4rem 2rem;
                    max-width: 1000px;
                    margin: 0 auto;
                }

                .audience-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 1.5rem;
                }

                .audience-card {
                    background: rgba(26, 26, 26, 0.85);
                    backdrop-filter: blur(10px);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 12px;
                    padding: 2rem 1.5rem;
                    text-align: center;
                    transition: all 0.3s ease;
                }

                .audience-card:hover {
                    transform: translateY(-5px);
                    border-color: rgba(30, 144, 255, 0.3);
                }

                .audience-card h3 {
                    font-size: 1.1rem;
                    margin-bottom: 0.75rem;
                    color: #fff;
                }

                .audience-card p {
                    color: #999;
                    font-size: 0.95rem;
                }

                .objectives-section {
                    padding: 4rem 2rem;
                    max-width: 1000px;
                    margin: 0 auto;
                }

                .objectives-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }

                .objectives-list h2 {
                    font-size: 2.25rem;
                    margin-bottom: 1.5rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .objective-row {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.75rem;
                    margin-bottom: 1rem;
                    color: #999;
                    line-height: 1.5;
                }

                .objective-check {
                    color: #1E90FF;
                    font-weight: bold;
                }

                .credits-card {
                    background: rgba(26, 26, 26, 0.85);
                    backdrop-filter: blur(10px);
                    border: 1px solid rgba(30, 144, 255, 0.2);
                    border-radius: 16px;
                    padding: 2rem;
                }

                .credits-card h3 {
                    font-size: 1.4rem;
                    color: #fff;
                }

                .credits-subtitle {
                    color: #7EB2FF;
                    font-size: 0.9rem;
                    margin-bottom: 1.5rem;
                }

                .credits-card p {
                    color: #999;
                    line-height: 1.6;
                    margin-bottom: 1.5rem;
                }

                .credits-card strong {
                    color: #7EB2FF;
                }

                .credits-badges {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                }

                .credits-badges span {
                    padding: 0.5rem 1rem;
                    border-radius: 8px;
                    border: 1px solid rgba(30, 144, 255, 0.2);
                    background: rgba(30, 144, 255, 0.05);
                    font-size: 0.85rem;
                    color: #999;
                }

                .bring-section {
                    text-align: center;
                    padding: 4rem 2rem;
                    max-width: 900px;
                    margin: 0 auto;
                }

                .bring-section h2 {
                    font-size: 2rem;
                    margin-bottom: 2rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .bring-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                    gap: 1.5rem;
                }

                .bring-card {
                    background: rgba(26, 26, 26, 0.85);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 12px;
                    padding: 2rem 1.5rem;
                }

                .bring-card h4 {
                    font-size: 1.05rem;
                    margin-bottom: 0.5rem;
                    color: #fff;
                }

                .bring-card p {
                    color: #999;
                    font-size: 0.9rem;
                }

                .about-cta {
                    text-align: center;
                    padding: 4rem 2rem 6rem;
                }

                .about-cta h2 {
                    font-size: 2.5rem;
                    margin-bottom: 1rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .about-cta p {
                    color: #999;
                    max-width: 520px;
                    margin: 0 auto 2rem;
                }

                @media (max-width: 768px) {
                    .about-hero {
                        padding: 4rem 1rem 2rem;
                    }

                    .about-hero h1 {
                        font-size: 2.5rem;
                    }

                    .section-header h2 {
                        font-size: 2rem;
                    }

                    .objectives-grid {
                        grid-template-columns: 1fr;
                    }

                    .schedule-section,
                    .audience-section,
                    .objectives-section {
                        padding: 3rem 1rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
