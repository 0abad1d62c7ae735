use crate::anim::reveal::{use_reveal, use_staggered_reveal, ObserverConfig};
use crate::config;
use web_sys::MouseEvent;
use yew::prelude::*;

const CARD_STEP_MS: u32 = 150;

const CTA_WHATSAPP_MESSAGE: &str = "Hi! I'm interested in your services and would like to learn \
                                    more about how you can help transform my business.";

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Strategy,
    Technology,
    Growth,
}

impl Category {
    fn label(self) -> &'static str {
        match self {
            Category::Strategy => "Strategy",
            Category::Technology => "Technology",
            Category::Growth => "Growth",
        }
    }
}

pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub category: Category,
}

pub const SERVICES: [Service; 9] = [
    Service {
        icon: "💼",
        title: "Authority Approvals",
        description: "We handle all necessary approvals from government and local authorities to \
                      ensure your projects meet compliance standards without delays.",
        features: &[
            "Building permits and certifications.",
            "Trade license approvals.",
            "Fire safety and environmental compliance.",
        ],
        category: Category::Strategy,
    },
    Service {
        icon: "📈",
        title: "Construction Services",
        description: "We specialize in delivering construction solutions that combine precision, \
                      innovation, and efficiency. From conceptualization to project handover, our \
                      team ensures every detail meets the highest standards.",
        features: &[
            "High-rise residential and commercial buildings.",
            "Renovation and remodeling projects",
            "Structural design and construction.",
            "Turnkey solutions for hassle-free project execution.",
        ],
        category: Category::Strategy,
    },
    Service {
        icon: "⚙️",
        title: "Property Management",
        description: "Our property management services focus on maintaining and enhancing the \
                      value of your assets, offering peace of mind and professional care.",
        features: &[
            "Tenant management and lease agreements.",
            "Property inspections and maintenance.",
            "Financial reporting and budgeting.",
        ],
        category: Category::Technology,
    },
    Service {
        icon: "🛡️",
        title: "Business Support Services",
        description: "Let us handle the administrative complexities while you focus on growing \
                      your business. Our tailored support services simplify your operations.",
        features: &[
            "PRO services for government approvals and licensing.",
            "Accounting and bookkeeping services.",
            "Marketing, branding, and advertising solutions.",
            "Document clearance and visa processing.",
        ],
        category: Category::Technology,
    },
    Service {
        icon: "🌍",
        title: "General Maintenance",
        description: "Keep your property in pristine condition with skilled technicians providing \
                      reliable, efficient solutions for routine upkeep and emergency repairs.",
        features: &[
            "Electrical, plumbing, and HVAC maintenance",
            "Renovation and remodeling projects",
            "Preventive maintenance plans",
            "Emergency repair response",
        ],
        category: Category::Growth,
    },
    Service {
        icon: "💡",
        title: "IT and Security Solutions",
        description: "Stay secure and connected with our innovative IT and security solutions \
                      tailored to meet the demands of modern businesses.",
        features: &[
            "IT infrastructure setup and networking",
            "Installation of advanced CCTV and surveillance systems",
            "Software development and management solutions",
            "Cybersecurity services for data protection",
        ],
        category: Category::Growth,
    },
    Service {
        icon: "🐛",
        title: "Pest Control Services",
        description: "Protect your property from pests with our effective pest control solutions.",
        features: &[
            "Safe and eco-friendly pest removal",
            "Regular pest monitoring and prevention plans",
            "Specialized treatments for termites, rodents, and insects",
        ],
        category: Category::Growth,
    },
    Service {
        icon: "✨",
        title: "Additional Services",
        description: "We also offer a range of specialized services to cater to specific client \
                      requirements:",
        features: &[
            "Event management and setup support",
            "Cleaning services for homes and offices",
            "Landscaping and gardening solutions",
        ],
        category: Category::Growth,
    },
    Service {
        icon: "🎨",
        title: "Interior Design",
        description: "Transform your spaces with interior design services that balance aesthetics, \
                      functionality, and your brand identity.",
        features: &[
            "Concept development and space planning",
            "Fit-out for offices and retail spaces",
            "Furniture selection and procurement",
            "Lighting and material design",
        ],
        category: Category::Growth,
    },
];

fn short_description(service: &Service) -> String {
    // First sentence only for the card front.
    match service.description.split_once('.') {
        Some((head, _)) => format!("{head}."),
        None => service.description.to_string(),
    }
}

#[derive(Properties, PartialEq)]
struct ServicesGridProps {
    filter: Option<Category>,
}

/// The card grid remounts (keyed on the active filter) so each filter
/// change replays the cascade from scratch, as a fresh set of units.
#[function_component(ServicesGrid)]
fn services_grid(props: &ServicesGridProps) -> Html {
    let visible_services: Vec<&Service> = SERVICES
        .iter()
        .filter(|s| props.filter.map_or(true, |f| s.category == f))
        .collect();

    let (card_refs, card_phases) = use_staggered_reveal(
        visible_services.len(),
        CARD_STEP_MS,
        ObserverConfig {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px",
            once: true,
        },
    );

    html! {
        <div class="services-grid">
            {
                visible_services.iter().enumerate().map(|(i, service)| html! {
                    <div
                        ref={card_refs[i].clone()}
                        class={classes!("flip-card", card_phases[i].css_class())}
                    >
                        <div class="flip-card-body">
                            <div class="flip-face flip-front">
                                <div class="service-icon">{ service.icon }</div>
                                <h3>{ service.title }</h3>
                                <p>{ short_description(service) }</p>
                            </div>
                            <div class="flip-face flip-back">
                                <h3>{ service.title }</h3>
                                <p>{ service.description }</p>
                                <div>
                                    <h4>{"Key Features:"}</h4>
                                    {
                                        service.features.iter().take(4).map(|feature| html! {
                                            <div class="flip-feature">
                                                <span class="flip-feature-dot" />
                                                <span>{ *feature }</span>
                                            </div>
                                        }).collect::<Html>()
                                    }
                                </div>
                            </div>
                        </div>
                    </div>
                }).collect::<Html>()
            }
        </div>
    }
}

/// Home-page services section: reveal-driven header and CTA, filterable
/// flip-card grid with a staggered entrance.
#[function_component(Services)]
pub fn services() -> Html {
    let active = use_state(|| None::<Category>);

    let section_config = ObserverConfig {
        threshold: 0.2,
        root_margin: "0px 0px -50px 0px",
        once: true,
    };
    let (header_ref, header) = use_reveal(section_config);
    let (filter_ref, filter) = use_reveal(section_config);
    let (cta_ref, cta) = use_reveal(section_config);

    let on_cta_whatsapp = Callback::from(move |_: MouseEvent| {
        let url = config::whatsapp_url(config::PHONE_NUMBER, CTA_WHATSAPP_MESSAGE);
        if let Some(window) = web_sys::window() {
            let _ =
                window.open_with_url_and_target_and_features(&url, "_blank", "noopener,noreferrer");
        }
    });

    let count_for = |category: Option<Category>| {
        SERVICES
            .iter()
            .filter(|s| category.map_or(true, |c| s.category == c))
            .count()
    };

    let filter_key = match *active {
        None => "all",
        Some(c) => c.label(),
    };

    html! {
        <section id="services" class="section services-section">
            <div class="section-inner">
                <div ref={header_ref} class={classes!("section-header", header.css_class())}>
                    <div class="section-badge">{"Our Services Portfolio"}</div>
                    <h2 class="section-title">
                        {"Comprehensive Solutions for"}
                        <span class="gradient-accent">{" Every Business Need"}</span>
                    </h2>
                    <p class="section-lead">
                        {"From strategic consulting to technology implementation, we provide \
                          end-to-end solutions tailored to drive your business forward."}
                    </p>
                </div>

                <div ref={filter_ref} class={classes!("category-filter", filter.css_class())}>
                    {
                        [
                            (None, "All Services"),
                            (Some(Category::Strategy), "Strategy"),
                            (Some(Category::Technology), "Technology"),
                            (Some(Category::Growth), "Growth"),
                        ].into_iter().map(|(category, label)| {
                            let active_handle = active.clone();
                            let onclick = Callback::from(move |_: MouseEvent| {
                                active_handle.set(category);
                            });
                            html! {
                                <button
                                    class={classes!(
                                        "category-button",
                                        (*active == category).then_some("active"),
                                    )}
                                    {onclick}
                                >
                                    { label }
                                    <span class="category-count">{ count_for(category) }</span>
                                </button>
                            }
                        }).collect::<Html>()
                    }
                </div>

                <ServicesGrid key={filter_key} filter={*active} />

                <div ref={cta_ref} class={classes!("services-cta", cta.css_class())}>
                    <h3>{"Ready to Transform Your Business?"}</h3>
                    <p>
                        {"Let's discuss how our comprehensive services can accelerate your growth \
                          and drive sustainable success."}
                    </p>
                    <button class="cta-outline-button" onclick={on_cta_whatsapp}>
                        {"Get Started Today"}
                    </button>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cta_whatsapp_url_uses_the_site_phone_number() {
        let url = config::whatsapp_url(config::PHONE_NUMBER, CTA_WHATSAPP_MESSAGE);
        assert!(url.starts_with("https://wa.me/919074435902?text="));
    }
}
