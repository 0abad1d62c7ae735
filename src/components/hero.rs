use crate::anim::slideshow::{SlideAction, Slideshow, AUTO_ADVANCE_MS, COOLDOWN_MS};
use gloo_timers::callback::{Interval, Timeout};
use web_sys::MouseEvent;
use yew::prelude::*;

struct Slide {
    badge: &'static str,
    title: &'static str,
    highlight: &'static str,
    subtitle: &'static str,
    description: &'static str,
    background_image: &'static str,
    stats: [(&'static str, &'static str); 5],
}

const SLIDES: [Slide; 3] = [
    Slide {
        badge: "Leading Business Solutions in UAE",
        title: "Transforming",
        highlight: "Business Excellence",
        subtitle: "in the UAE",
        description: "Partner with Keynes Group for innovative solutions that drive growth, \
                      enhance efficiency, and deliver exceptional results for your business.",
        background_image: "/Banner-1.jpg",
        stats: [
            ("500+", "Projects"),
            ("15+", "Years"),
            ("98%", "Satisfaction"),
            ("50+", "Experts"),
            ("24/7", "Support"),
        ],
    },
    Slide {
        badge: "Innovation & Technology Leader",
        title: "Empowering",
        highlight: "Digital Transformation",
        subtitle: "Across Industries",
        description: "Leverage cutting-edge technology and strategic consulting to revolutionize \
                      your business operations and stay ahead of the competition.",
        background_image: "/Banner-2.jpg",
        stats: [
            ("200+", "Solutions"),
            ("10+", "Industries"),
            ("99%", "Uptime"),
            ("30+", "Partners"),
            ("5★", "Rating"),
        ],
    },
    Slide {
        badge: "Strategic Growth Partner",
        title: "Accelerating",
        highlight: "Business Success",
        subtitle: "Through Excellence",
        description: "From startups to enterprises, we provide comprehensive solutions that \
                      scale with your ambitions and deliver measurable results.",
        background_image: "/Banner-3.jpg",
        stats: [
            ("300%", "ROI"),
            ("85%", "Retention"),
            ("120+", "Stories"),
            ("25+", "Awards"),
            ("100+", "Team"),
        ],
    },
];

/// Full-screen slideshow with auto-advance, manual navigation and a
/// cooldown window after manual actions.
#[function_component(Hero)]
pub fn hero() -> Html {
    let show = use_reducer(|| Slideshow::new(SLIDES.len()));
    // Owned cooldown handle; replaced (cancel + re-arm) on every manual
    // action, dropped on unmount.
    let cooldown = use_mut_ref(|| None::<Timeout>);

    // The tick interval exists only while auto-advance is on. Suspending
    // drops it, so a manual move is never followed by a stale tick.
    {
        let auto = show.auto_advancing();
        let show = show.clone();
        use_effect_with_deps(
            move |auto: &bool| {
                let interval = auto.then(|| {
                    let show = show.clone();
                    Interval::new(AUTO_ADVANCE_MS, move || show.dispatch(SlideAction::Tick))
                });
                move || drop(interval)
            },
            auto,
        );
    }

    {
        let cooldown = cooldown.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    cooldown.borrow_mut().take();
                }
            },
            (),
        );
    }

    let manual = {
        let show = show.clone();
        let cooldown = cooldown.clone();
        move |action: SlideAction| {
            show.dispatch(action);
            let show = show.clone();
            let resume = Timeout::new(COOLDOWN_MS, move || show.dispatch(SlideAction::Resume));
            // Replacing the handle cancels any cooldown already pending.
            *cooldown.borrow_mut() = Some(resume);
        }
    };

    let on_prev = {
        let manual = manual.clone();
        Callback::from(move |_: MouseEvent| manual(SlideAction::Prev))
    };
    let on_next = {
        let manual = manual.clone();
        Callback::from(move |_: MouseEvent| manual(SlideAction::Next))
    };

    let current = show.index();
    let slide = &SLIDES[current];
    let progress = (current + 1) as f64 / SLIDES.len() as f64 * 100.0;

    html! {
        <section id="home" class="hero">
            {
                SLIDES.iter().enumerate().map(|(i, s)| {
                    let state = if i == current { "active" } else { "inactive" };
                    html! {
                        <div
                            class={classes!("hero-background", state)}
                            style={format!("background-image: url({})", s.background_image)}
                        />
                    }
                }).collect::<Html>()
            }
            <div class="hero-overlay" />

            <button class="hero-arrow prev" onclick={on_prev} aria-label="Previous slide">
                {"‹"}
            </button>
            <button class="hero-arrow next" onclick={on_next} aria-label="Next slide">
                {"›"}
            </button>

            <div class="hero-content" key={current}>
                <div class="hero-badge">
                    <span class="hero-badge-dot" />
                    { slide.badge }
                </div>

                <h1>
                    { slide.title }
                    <span class="hero-highlight">{ slide.highlight }</span>
                    <span class="hero-subtitle">{ slide.subtitle }</span>
                </h1>

                <p class="hero-description">{ slide.description }</p>

                <a href="#services" class="hero-cta">{"Get Started Today →"}</a>

                <div class="hero-stats">
                    {
                        slide.stats.iter().map(|(value, label)| html! {
                            <div>
                                <div class="hero-stat-value">{ *value }</div>
                                <div class="hero-stat-label">{ *label }</div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>

            <div class="hero-dots">
                {
                    (0..SLIDES.len()).map(|i| {
                        let manual = manual.clone();
                        let onclick = Callback::from(move |_: MouseEvent| {
                            manual(SlideAction::Goto(i));
                        });
                        html! {
                            <button
                                class={classes!("hero-dot", (i == current).then_some("active"))}
                                {onclick}
                                aria-label={format!("Go to slide {}", i + 1)}
                            />
                        }
                    }).collect::<Html>()
                }
            </div>

            <div class="hero-progress">
                <div class="hero-progress-fill" style={format!("width: {progress}%")} />
            </div>
        </section>
    }
}
