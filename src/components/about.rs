use crate::anim::counter::{AnimatedCounter, ResetPolicy};
use crate::anim::reveal::{use_reveal, use_staggered_reveal, ObserverConfig};
use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

const FEATURE_STEP_MS: u32 = 150;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        icon: "🏆",
        title: "Excellence",
        description: "Committed to delivering exceptional quality in every project we undertake.",
    },
    Feature {
        icon: "👥",
        title: "Expertise",
        description: "Our team of professionals brings decades of combined industry experience.",
    },
    Feature {
        icon: "🎯",
        title: "Results",
        description: "Focused on achieving measurable outcomes that drive your business forward.",
    },
    Feature {
        icon: "⚡",
        title: "Innovation",
        description: "Leveraging cutting-edge solutions to keep you ahead of the competition.",
    },
];

struct Stat {
    target: u32,
    suffix: &'static str,
    label: &'static str,
}

const STATS: [Stat; 4] = [
    Stat {
        target: 15,
        suffix: "+",
        label: "Years of Excellence",
    },
    Stat {
        target: 5012,
        suffix: "+",
        label: "Projects Completed",
    },
    Stat {
        target: 200,
        suffix: "+",
        label: "Happy Clients",
    },
    Stat {
        target: 100,
        suffix: "%",
        label: "Success Rate",
    },
];

/// Home-page about section: header and copy reveal with the section,
/// feature cards cascade in (and replay when scrolled back through),
/// stats count up while the stats panel is in view.
#[function_component(About)]
pub fn about() -> Html {
    let (section_ref, section) = use_reveal(ObserverConfig {
        threshold: 0.1,
        root_margin: "-20px 0px",
        once: false,
    });
    let (stats_ref, stats) = use_reveal(ObserverConfig {
        threshold: 0.3,
        root_margin: "-30px 0px",
        once: false,
    });
    let (video_ref, video) = use_reveal(ObserverConfig {
        threshold: 0.4,
        root_margin: "0px",
        once: false,
    });
    let (feature_refs, feature_phases) = use_staggered_reveal(
        FEATURES.len(),
        FEATURE_STEP_MS,
        ObserverConfig {
            threshold: 0.3,
            root_margin: "-50px 0px",
            once: false,
        },
    );

    html! {
        <section ref={section_ref} id="about" class="section about-section">
            <div class="section-inner">
                <div class={classes!("section-header", section.css_class())}>
                    <div class="section-badge">{"About Keynes Group"}</div>
                    <h2 class="section-title">
                        {"Building the Future of"}
                        <br />
                        <span class="gradient-accent">{"Business Solutions"}</span>
                    </h2>
                    <p class="section-lead">
                        {"For over 15 years, Keynes Group has been at the forefront of business \
                          transformation in the UAE, combining deep industry knowledge with \
                          innovative approaches."}
                    </p>
                </div>

                <div class="about-grid">
                    <div class={section.css_class()}>
                        <div ref={video_ref} class={classes!("about-video", video.css_class())}>
                            <iframe
                                src="https://www.youtube.com/embed/vG19Ueo7FPI?rel=0"
                                title="YouTube video player"
                                allow="accelerometer; autoplay; clipboard-write; encrypted-media; \
                                       gyroscope; picture-in-picture; web-share"
                                referrerpolicy="strict-origin-when-cross-origin"
                                allowfullscreen=true
                            />
                        </div>

                        <div class="about-copy">
                            <p>
                                {"Our comprehensive suite of services spans consulting, technology \
                                  implementation, and strategic advisory, ensuring our clients have \
                                  everything they need to succeed in today's dynamic business \
                                  environment."}
                            </p>
                            <p>
                                {"We don't just provide services — we forge partnerships. Our \
                                  client-centric approach, combined with our deep understanding of \
                                  the UAE market, makes us the ideal choice for businesses looking \
                                  to achieve their full potential."}
                            </p>
                            <div class="about-cta-row">
                                <Link<Route> to={Route::About} classes="button-primary">
                                    {"Learn More About Us →"}
                                </Link<Route>>
                                <Link<Route> to={Route::Services} classes="button-secondary">
                                    {"Our Services"}
                                </Link<Route>>
                            </div>
                        </div>
                    </div>

                    <div class="features-grid">
                        {
                            FEATURES.iter().enumerate().map(|(i, feature)| html! {
                                <div
                                    ref={feature_refs[i].clone()}
                                    class={classes!("feature-card", feature_phases[i].css_class())}
                                >
                                    <div class="feature-icon">{ feature.icon }</div>
                                    <h3>{ feature.title }</h3>
                                    <p>{ feature.description }</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>

                <div
                    ref={stats_ref}
                    class={classes!("stats-panel", stats.css_class())}
                >
                    <div class="stats-grid">
                        {
                            STATS.iter().enumerate().map(|(i, stat)| html! {
                                <div
                                    class={stats.css_class()}
                                    style={format!("transition-delay: {}ms", i * 150)}
                                >
                                    <div class="stat-value">
                                        <AnimatedCounter
                                            target={stat.target}
                                            suffix={stat.suffix}
                                            duration_ms={2000 + i as u32 * 200}
                                            visible={stats.visible}
                                            reset_policy={ResetPolicy::Replay}
                                        />
                                    </div>
                                    <div class="stat-label">{ stat.label }</div>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </div>
        </section>
    }
}
