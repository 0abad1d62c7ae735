use crate::anim::counter::{AnimatedCounter, ResetPolicy};
use crate::anim::reveal::{use_reveal, use_staggered_reveal, ObserverConfig};
use crate::config;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

const STAT_STEP_MS: u32 = 200;
const VALUE_STEP_MS: u32 = 100;
const COMPANY_STEP_MS: u32 = 100;
const TEAM_STEP_MS: u32 = 200;

const CTA_WHATSAPP_NUMBER: &str = "+971 4 453 4945";
const CTA_WHATSAPP_MESSAGE: &str = "Hello, I'd like to know more about Keynes Group.";

const HERO_BG_URL: &str = "https://images.unsplash.com/photo-1541888946425-d81bb19240f5?ixlib=rb-4.0.3&auto=format&fit=crop&w=2070&q=80";
const STORY_IMAGE_URL: &str = "https://images.unsplash.com/photo-1581091226825-a6a2a5aee158?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80";
const PARTNERSHIP_IMAGE_URL: &str = "https://images.unsplash.com/photo-1559136555-9303baea8ebd?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80";

const STATS: [(u32, &str, &str); 4] = [
    (5012, "+", "Successfully Completed Projects"),
    (15, "+", "Years of Experience with Pride"),
    (1120, "", "Revenue Milestone Investment"),
    (1520, "+", "Colleagues & Counting More"),
];

const VALUES: [(&str, &str, &str); 6] = [
    (
        "⚡",
        "Speed & Efficiency",
        "Speed is a virtue that we stand by at all times, delivering projects promptly without \
         compromising quality.",
    ),
    (
        "🎯",
        "Excellence",
        "We strive to exceed expectations through innovative solutions and meticulous attention \
         to detail.",
    ),
    (
        "🛡️",
        "Trust & Reliability",
        "Building lasting relationships through consistent delivery and unwavering commitment to \
         our clients.",
    ),
    (
        "💡",
        "Innovation",
        "Harnessing cutting-edge technology and creative solutions to tackle the most complex \
         projects.",
    ),
    (
        "🌍",
        "Global Reach",
        "Leveraging our network of partnerships to deliver world-class solutions across all \
         sectors.",
    ),
    (
        "❤️",
        "Commitment",
        "Long-term partnerships built on trust, with dedicated support throughout every project \
         lifecycle.",
    ),
];

const COMPANIES: [(&str, &str); 10] = [
    (
        "Keynes Accounting And Corporate Services",
        "/logos/keynes-accounting.png",
    ),
    ("Keynes Advertising", "/logos/keynes-advertising.png"),
    ("Keynes Business Men Services", "/logos/keynes-businessmen.png"),
    ("Keynes Approvals", "/logos/keynes-approvals.png"),
    ("Keynes Constructions", "/logos/keynes-construction.png"),
    (
        "Keynes General Maintenance",
        "/logos/keynes-general-maintenance.png",
    ),
    ("Keynes Interiors", "/logos/keynes-interiors.png"),
    (
        "Keynes It and Secureity Solutions",
        "/logos/keynes-it-solutions.png",
    ),
    ("Keynes Pest Control", "/logos/keynes-pest-control.png"),
    ("Keynes Properties", "/logos/keynes-properties.png"),
];

const TEAM: [(&str, &str, &str); 3] = [
    ("Jahanara Sahif", "MANAGER", "/Manager.png"),
    ("Mr.Shamsudeen", "MARKETING MANAGER", "/Marketing-Manager.png"),
    (
        "Anoop Kumar K Anandan",
        "FINANCE MANAGER",
        "/Finance-Manager.png",
    ),
];

const FAMILY_HIGHLIGHTS: [(&str, &str, &str); 3] = [
    (
        "🌍",
        "Integrated Solutions",
        "Seamless collaboration across all Keynes companies for comprehensive project delivery",
    ),
    (
        "👥",
        "Shared Expertise",
        "Leveraging collective knowledge and skills from our diverse portfolio of companies",
    ),
    (
        "🏆",
        "Quality Assurance",
        "Unified standards of excellence maintained across all our subsidiary companies",
    ),
];

/// Tracks the pointer for the soft radial spotlight that follows the
/// cursor. The listener is removed on unmount.
#[hook]
fn use_mouse_position() -> (i32, i32) {
    let position = use_state_eq(|| (0, 0));

    {
        let position = position.clone();
        use_effect_with_deps(
            move |_| {
                let listener = Closure::wrap(Box::new(move |e: MouseEvent| {
                    position.set((e.client_x(), e.client_y()));
                }) as Box<dyn FnMut(MouseEvent)>);

                if let Some(window) = web_sys::window() {
                    let _ = window.add_event_listener_with_callback(
                        "mousemove",
                        listener.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(window) = web_sys::window() {
                        let _ = window.remove_event_listener_with_callback(
                            "mousemove",
                            listener.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    *position
}

#[function_component(AboutUs)]
pub fn about_us() -> Html {
    let (mouse_x, mouse_y) = use_mouse_position();

    // Stat counters run once; scrolling away does not reset them.
    let (stats_ref, stats) = use_reveal(ObserverConfig {
        threshold: 0.3,
        root_margin: "0px",
        once: true,
    });
    let value_config = ObserverConfig {
        threshold: 0.3,
        root_margin: "0px",
        once: false,
    };
    let (value_refs, value_phases) = use_staggered_reveal(VALUES.len(), VALUE_STEP_MS, value_config);
    let (company_refs, company_phases) =
        use_staggered_reveal(COMPANIES.len(), COMPANY_STEP_MS, value_config);
    let (team_refs, team_phases) = use_staggered_reveal(TEAM.len(), TEAM_STEP_MS, value_config);

    let on_cta_whatsapp = Callback::from(move |_: MouseEvent| {
        let url = config::whatsapp_url(CTA_WHATSAPP_NUMBER, CTA_WHATSAPP_MESSAGE);
        if let Some(window) = web_sys::window() {
            let _ =
                window.open_with_url_and_target_and_features(&url, "_blank", "noopener,noreferrer");
        }
    });

    let spotlight = format!(
        "background: radial-gradient(circle 400px at {mouse_x}px {mouse_y}px, \
         rgba(59, 130, 246, 0.15), transparent);"
    );

    html! {
        <div class="about-page">
            <div class="mouse-spotlight" style={spotlight} />

            <section class="about-hero">
                <div
                    class="about-hero-bg"
                    style={format!("background-image: url('{HERO_BG_URL}');")}
                />
                <div class="about-hero-overlay" />
                <div class="about-hero-content">
                    <h1>
                        {"About "}
                        <span class="gradient-accent">{"Keynes"}</span>
                        {" Group"}
                    </h1>
                    <p class="about-hero-sub">
                        {"UAE's Leading Construction & Service Conglomerate"}
                    </p>
                    <p class="about-hero-tag">{"Building Excellence, Delivering Innovation"}</p>
                    <div class="badge-row">
                        <div class="hero-pill">{"📈 Growing Rapidly"}</div>
                        <div class="hero-pill">{"🏆 Industry Leader"}</div>
                        <div class="hero-pill">{"👥 Expert Team"}</div>
                    </div>
                </div>
            </section>

            <section class="section about-stats">
                <div ref={stats_ref} class="section-inner stats-grid">
                    {
                        STATS.iter().enumerate().map(|(i, (target, suffix, label))| html! {
                            <div
                                class={classes!("stat-card", stats.css_class())}
                                style={format!("transition-delay: {}ms;", i as u32 * STAT_STEP_MS)}
                            >
                                <div class="stat-number">
                                    <AnimatedCounter
                                        target={*target}
                                        suffix={*suffix}
                                        visible={stats.visible}
                                        reset_policy={ResetPolicy::Latch}
                                    />
                                </div>
                                <div class="stat-label">{ *label }</div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class="section about-story">
                <div class="section-inner">
                    <div class="section-header">
                        <h2 class="section-title">{"Our Story"}</h2>
                        <div class="title-underline" />
                    </div>
                    <div class="story-grid">
                        <div>
                            <p class="story-lead">
                                <strong>{"Keynes Group"}</strong>
                                {" is growing rapidly into UAE's leading company in delivering \
                                  exceptional service. As the industry moves forward, so does our \
                                  company."}
                            </p>
                            <p>
                                {"Our journey from a construction company to a conglomerate \
                                  comprising of contracting and service industries has been \
                                  filled with its fair share of trials. However, we can honestly \
                                  say that today, our employees are richer in experience than \
                                  their counterparts."}
                            </p>
                            <div class="story-callout">
                                <h3>{"Innovation & Excellence"}</h3>
                                <p>
                                    {"Keynes Group symbolizes the best in innovation, creativity \
                                      and technological mastery, befitting for a group that \
                                      harnesses a culture of innovation to deliver technical \
                                      expertise in tackling the most complex of projects."}
                                </p>
                            </div>
                        </div>
                        <img src={STORY_IMAGE_URL} alt="Construction and innovation" />
                    </div>
                </div>
            </section>

            <section class="section about-team">
                <div class="section-inner">
                    <div class="section-header">
                        <h2 class="section-title">{"Our Leadership Team"}</h2>
                        <div class="title-underline" />
                        <p class="section-lead">
                            {"Meet the experienced professionals leading Keynes Group to new \
                              heights of excellence"}
                        </p>
                    </div>
                    <div class="team-grid">
                        {
                            TEAM.iter().enumerate().map(|(i, (name, position, photo))| html! {
                                <div
                                    ref={team_refs[i].clone()}
                                    class={classes!("team-card", team_phases[i].css_class())}
                                >
                                    <img src={*photo} alt={*name} />
                                    <h3>{ *name }</h3>
                                    <p class="team-position">{ *position }</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <section class="section about-family">
                <div class="section-inner">
                    <div class="section-header">
                        <h2 class="section-title">{"The Keynes Family"}</h2>
                        <div class="title-underline" />
                        <p class="section-lead">
                            {"Our strong network of specialized companies working together to \
                              deliver comprehensive solutions across all industries"}
                        </p>
                    </div>
                    <div class="company-grid">
                        {
                            COMPANIES.iter().enumerate().map(|(i, (name, logo))| html! {
                                <div
                                    ref={company_refs[i].clone()}
                                    class={classes!("company-card", company_phases[i].css_class())}
                                >
                                    <img src={*logo} alt={format!("{name} logo")} />
                                    <h3>{ *name }</h3>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                    <div class="family-highlights">
                        {
                            FAMILY_HIGHLIGHTS.iter().map(|(icon, title, description)| html! {
                                <div class="family-highlight">
                                    <div class="feature-icon">{ *icon }</div>
                                    <h3>{ *title }</h3>
                                    <p>{ *description }</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <section class="section about-mission">
                <div class="section-inner">
                    <div class="section-header">
                        <h2 class="section-title">{"Our Mission"}</h2>
                        <div class="title-underline" />
                    </div>
                    <div class="mission-card">
                        <p>
                            {"To exceed the expectations of our business partners through groups \
                              of highly qualified teams and professional employees, enabling us \
                              to serve you better. We build trust with our customers by providing \
                              our clients with services in a long-term commitment and our \
                              experienced employees will be there at your discretion to help you \
                              troubleshoot any issues that might arise."}
                        </p>
                    </div>
                    <div class="values-grid">
                        {
                            VALUES.iter().enumerate().map(|(i, (icon, title, description))| html! {
                                <div
                                    ref={value_refs[i].clone()}
                                    class={classes!("value-card", value_phases[i].css_class())}
                                >
                                    <div class="feature-icon">{ *icon }</div>
                                    <h3>{ *title }</h3>
                                    <p>{ *description }</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <section class="section about-partnership">
                <div class="section-inner story-grid">
                    <div>
                        <h2 class="section-title">{"Strong Partnerships"}</h2>
                        <div class="title-underline" />
                        <p class="story-lead">
                            {"Keynes Group has strong relationships with other Keynes companies \
                              and subsidiaries and, as a result, can leverage ideas, skills and \
                              entrepreneurial flair to deliver top-quality work in all sectors."}
                        </p>
                        <p>
                            {"Our network of partnerships enables us to tackle projects of any \
                              scale and complexity, bringing together the best minds and \
                              resources to achieve exceptional outcomes for our clients."}
                        </p>
                        <div class="partner-stats">
                            <div class="partner-stat">
                                <div class="stat-number">{"100%"}</div>
                                <div class="stat-label">{"Client Satisfaction"}</div>
                            </div>
                            <div class="partner-stat">
                                <div class="stat-number">{"24/7"}</div>
                                <div class="stat-label">{"Support Available"}</div>
                            </div>
                        </div>
                    </div>
                    <img src={PARTNERSHIP_IMAGE_URL} alt="Partnership and collaboration" />
                </div>
            </section>

            <section class="detail-cta">
                <h2>
                    {"Ready to Work with "}
                    <span class="gradient-accent">{"Keynes Group?"}</span>
                </h2>
                <p>
                    {"Let's collaborate on your next project and experience the excellence that \
                      has made us UAE's trusted construction and service partner."}
                </p>
                <button class="button-primary" onclick={on_cta_whatsapp}>
                    {"Get Started Today →"}
                </button>
            </section>
        </div>
    }
}
