use crate::anim::reveal::{use_reveal, use_staggered_reveal, ObserverConfig};
use crate::config;
use web_sys::{MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

const CARD_STEP_MS: u32 = 150;
const EXTRA_STEP_MS: u32 = 200;

/// Label shown on the call-to-action button. The dial target is the main
/// office line from `config`.
const CALL_NOW_LABEL: &str = "Call Now: +971 50 123 4567";

struct Testimonial {
    text: &'static str,
    author: &'static str,
    company: &'static str,
    rating: u8,
}

struct Detail {
    icon: &'static str,
    title: &'static str,
    tagline: &'static str,
    features: &'static [&'static str],
    detailed_description: &'static str,
    benefits: &'static [&'static str],
    process: &'static [(&'static str, &'static str)],
    pricing: &'static str,
    duration: &'static str,
    team_size: &'static str,
    testimonials: &'static [Testimonial],
}

const DETAILS: [Detail; 8] = [
    Detail {
        icon: "📋",
        title: "Authority Approvals",
        tagline: "Navigating Regulations with Ease",
        features: &[
            "Building permits and certifications",
            "Trade license approvals",
            "Fire safety and environmental compliance",
        ],
        detailed_description:
            "Our Authority Approvals service streamlines the complex process of obtaining \
             necessary permits and certifications for your business or construction project. We \
             handle all regulatory requirements, ensuring full compliance with UAE laws and \
             regulations while saving you time and reducing bureaucratic hassles.",
        benefits: &[
            "Expert knowledge of UAE regulatory framework",
            "Faster approval times through established relationships",
            "Complete documentation management",
            "Regular status updates and transparent communication",
            "Risk mitigation and compliance assurance",
            "Cost-effective solutions with no hidden fees",
        ],
        process: &[
            (
                "Initial Consultation",
                "We assess your specific requirements and identify all necessary approvals",
            ),
            (
                "Documentation Preparation",
                "Our team prepares all required documents with precision and accuracy",
            ),
            (
                "Authority Submission",
                "We submit applications to relevant authorities with proper follow-up",
            ),
            (
                "Status Monitoring",
                "Regular tracking and updates on application progress",
            ),
            (
                "Final Delivery",
                "Delivery of all approved permits and certifications to you",
            ),
        ],
        pricing: "Starting from AED 2,500",
        duration: "2-4 weeks",
        team_size: "3-5 specialists",
        testimonials: &[
            Testimonial {
                text: "Keynes Group made our licensing process incredibly smooth. What usually \
                       takes months was completed in just 3 weeks!",
                author: "Ahmed Al-Mansouri",
                company: "Emirates Trading LLC",
                rating: 5,
            },
            Testimonial {
                text: "Professional service and excellent communication throughout the approval \
                       process. Highly recommended!",
                author: "Maria Santos",
                company: "Gulf Construction Co.",
                rating: 5,
            },
            Testimonial {
                text: "Their expertise in UAE regulations saved us countless hours and potential \
                       compliance issues.",
                author: "John Mitchell",
                company: "Tech Innovations Dubai",
                rating: 5,
            },
        ],
    },
    Detail {
        icon: "🏗️",
        title: "Construction",
        tagline: "Building the Future, One Project at a Time",
        features: &[
            "High-rise residential and commercial buildings",
            "Renovation and remodeling projects",
            "Structural design and construction",
            "Turnkey solutions for hassle-free project execution",
        ],
        detailed_description:
            "From concept to completion, our construction services deliver exceptional quality in \
             residential and commercial projects. We combine innovative design, premium \
             materials, and skilled craftsmanship to create structures that stand the test of \
             time while meeting modern sustainability standards.",
        benefits: &[
            "End-to-end project management from design to handover",
            "Quality materials sourced from trusted suppliers",
            "Experienced team of architects and engineers",
            "Adherence to international safety and quality standards",
            "Sustainable and energy-efficient construction practices",
            "Flexible project timelines to meet your requirements",
        ],
        process: &[
            (
                "Project Consultation",
                "Understanding your vision, requirements, and budget constraints",
            ),
            (
                "Design & Planning",
                "Architectural design, engineering plans, and permit acquisitions",
            ),
            (
                "Construction Phase",
                "Professional construction with regular quality checks and updates",
            ),
            (
                "Quality Inspection",
                "Comprehensive inspection and testing of all systems and structures",
            ),
            (
                "Project Handover",
                "Final walkthrough, documentation, and warranty provision",
            ),
        ],
        pricing: "From AED 150 per sq ft",
        duration: "6-18 months",
        team_size: "15-50 professionals",
        testimonials: &[
            Testimonial {
                text: "The quality of construction exceeded our expectations. Professional team, \
                       timely delivery, and excellent craftsmanship throughout.",
                author: "Sarah Johnson",
                company: "Horizon Developments",
                rating: 5,
            },
            Testimonial {
                text: "Outstanding project management and attention to detail. They delivered \
                       exactly what was promised.",
                author: "Omar Al-Rashid",
                company: "Vista Properties",
                rating: 5,
            },
            Testimonial {
                text: "Exceptional build quality and finished on time despite challenging \
                       conditions. Will definitely work with them again.",
                author: "Robert Chen",
                company: "Modern Living Spaces",
                rating: 5,
            },
        ],
    },
    Detail {
        icon: "🏠",
        title: "Property Management",
        tagline: "Maximizing the Value of Your Investments",
        features: &[
            "Tenant management and lease agreements",
            "Property inspections and maintenance",
            "Financial reporting and budgeting",
        ],
        detailed_description:
            "Our comprehensive property management services ensure your real estate investments \
             perform at their peak. We handle everything from tenant relations to maintenance, \
             allowing you to enjoy passive income while we maximize your property's value and \
             minimize vacancy rates.",
        benefits: &[
            "Professional tenant screening and placement",
            "Regular property maintenance and upkeep",
            "Detailed financial reporting and rent collection",
            "24/7 emergency response and tenant support",
            "Market-rate analysis and rent optimization",
            "Legal compliance and documentation management",
        ],
        process: &[
            (
                "Property Assessment",
                "Comprehensive evaluation of your property and market positioning",
            ),
            (
                "Marketing & Tenant Search",
                "Professional photography, listing, and tenant screening process",
            ),
            (
                "Lease Management",
                "Contract preparation, signing, and move-in coordination",
            ),
            (
                "Ongoing Management",
                "Rent collection, maintenance coordination, and tenant relations",
            ),
            (
                "Regular Reporting",
                "Monthly financial reports and property condition updates",
            ),
        ],
        pricing: "8-12% of rental income",
        duration: "Ongoing service",
        team_size: "2-4 managers per property",
        testimonials: &[
            Testimonial {
                text: "Since partnering with Keynes, our property occupancy increased to 98% and \
                       maintenance issues are resolved within hours.",
                author: "Mohammed Al-Rashid",
                company: "Gulf Properties Investment",
                rating: 5,
            },
            Testimonial {
                text: "Excellent property management with transparent reporting. Our rental \
                       income has increased by 15%.",
                author: "Lisa Thompson",
                company: "Premium Real Estate Group",
                rating: 5,
            },
            Testimonial {
                text: "Professional tenant screening and quick response to issues. They truly \
                       care about property value.",
                author: "Hassan Al-Mansoori",
                company: "Dubai Investment Holdings",
                rating: 5,
            },
        ],
    },
    Detail {
        icon: "💼",
        title: "Business Support Services",
        tagline: "Streamlining Your Business Operations",
        features: &[
            "PRO services for government approvals and licensing",
            "Accounting and bookkeeping services",
            "Marketing, branding, and advertising solutions",
            "Document clearance and visa processing",
        ],
        detailed_description:
            "Our business support services provide comprehensive administrative and operational \
             assistance to help your company thrive in the competitive UAE market. From legal \
             compliance to marketing strategies, we're your one-stop solution for business \
             growth and efficiency.",
        benefits: &[
            "Complete PRO services with government liaison",
            "Professional accounting and tax advisory",
            "Creative marketing and brand development",
            "Efficient visa and immigration services",
            "Digital transformation and automation",
            "Strategic business consulting and planning",
        ],
        process: &[
            (
                "Business Analysis",
                "Comprehensive assessment of your business needs and goals",
            ),
            (
                "Service Planning",
                "Customized service package tailored to your requirements",
            ),
            (
                "Implementation",
                "Systematic execution of services with dedicated account management",
            ),
            (
                "Monitoring & Support",
                "Ongoing support, optimization, and performance tracking",
            ),
            (
                "Growth Strategy",
                "Continuous improvement and scaling recommendations",
            ),
        ],
        pricing: "Packages from AED 1,500/month",
        duration: "Flexible contracts",
        team_size: "5-8 specialists",
        testimonials: &[
            Testimonial {
                text: "Their business support has been invaluable. We've streamlined our \
                       operations and increased efficiency by 40%.",
                author: "Lisa Chen",
                company: "TechStart Solutions",
                rating: 5,
            },
            Testimonial {
                text: "Comprehensive PRO services that saved us months of paperwork. \
                       Professional and reliable team.",
                author: "Abdul Rahman",
                company: "Emirates Business Hub",
                rating: 5,
            },
            Testimonial {
                text: "Outstanding accounting and marketing support. They've helped us grow our \
                       business significantly.",
                author: "Jennifer Martinez",
                company: "Global Trade Partners",
                rating: 5,
            },
        ],
    },
    Detail {
        icon: "🔧",
        title: "General Maintenance",
        tagline: "Reliable Upkeep for Your Property",
        features: &[
            "Plumbing and electrical repairs",
            "HVAC system maintenance",
            "Interior and exterior painting services",
            "Regular facility maintenance and cleaning",
        ],
        detailed_description:
            "Keep your property in pristine condition with our comprehensive maintenance \
             services. Our skilled technicians provide reliable, efficient solutions for all \
             your maintenance needs, from routine upkeep to emergency repairs, ensuring your \
             property remains safe, functional, and valuable.",
        benefits: &[
            "Preventive maintenance to avoid costly repairs",
            "24/7 emergency response for urgent issues",
            "Certified technicians with extensive experience",
            "Quality parts and materials for lasting solutions",
            "Scheduled maintenance programs for optimal performance",
            "Transparent pricing with detailed service reports",
        ],
        process: &[
            (
                "Property Inspection",
                "Comprehensive assessment of maintenance needs and priorities",
            ),
            (
                "Maintenance Plan",
                "Customized maintenance schedule based on property requirements",
            ),
            (
                "Service Execution",
                "Professional maintenance work with quality assurance",
            ),
            (
                "Progress Monitoring",
                "Regular check-ups and performance monitoring",
            ),
            (
                "Reporting & Updates",
                "Detailed reports and recommendations for future maintenance",
            ),
        ],
        pricing: "From AED 200 per service call",
        duration: "Same day to 1 week",
        team_size: "2-6 technicians",
        testimonials: &[
            Testimonial {
                text: "Quick response times and professional service. They've maintained our \
                       facilities perfectly for over 2 years.",
                author: "Robert Kim",
                company: "Metro Office Complex",
                rating: 5,
            },
            Testimonial {
                text: "Reliable maintenance team with excellent technical skills. Always \
                       available when we need them.",
                author: "Fatima Al-Zahra",
                company: "Luxury Residences Dubai",
                rating: 5,
            },
            Testimonial {
                text: "Cost-effective maintenance solutions with transparent pricing. Very \
                       satisfied with their service quality.",
                author: "Michael Johnson",
                company: "Commercial Properties LLC",
                rating: 5,
            },
        ],
    },
    Detail {
        icon: "🛡️",
        title: "IT and Security Solutions",
        tagline: "Empowering Businesses with Technology and Safety",
        features: &[
            "IT infrastructure setup and networking",
            "Installation of advanced CCTV and surveillance systems",
            "Software development and management solutions",
            "Cybersecurity services for data protection",
        ],
        detailed_description:
            "Secure and optimize your business operations with our cutting-edge IT and security \
             solutions. We provide comprehensive technology services, from network \
             infrastructure to cybersecurity, ensuring your business stays connected, protected, \
             and competitive in the digital age.",
        benefits: &[
            "State-of-the-art security systems and monitoring",
            "Robust IT infrastructure with scalable solutions",
            "Expert cybersecurity protection and compliance",
            "Custom software development for business needs",
            "24/7 technical support and system monitoring",
            "Regular updates and maintenance for optimal performance",
        ],
        process: &[
            (
                "Technology Assessment",
                "Evaluation of current systems and security requirements",
            ),
            (
                "Solution Design",
                "Custom IT and security architecture planning",
            ),
            (
                "Implementation",
                "Professional installation and configuration of systems",
            ),
            (
                "Testing & Training",
                "System testing and user training for optimal utilization",
            ),
            (
                "Ongoing Support",
                "Continuous monitoring, updates, and technical support",
            ),
        ],
        pricing: "Projects from AED 10,000",
        duration: "2-8 weeks",
        team_size: "4-8 IT specialists",
        testimonials: &[
            Testimonial {
                text: "Their IT solutions transformed our business operations. Security is \
                       top-notch and system performance is excellent.",
                author: "David Wilson",
                company: "Future Finance Group",
                rating: 5,
            },
            Testimonial {
                text: "Professional cybersecurity implementation that gave us peace of mind. \
                       Excellent technical support.",
                author: "Aisha Al-Mahmoud",
                company: "Digital Innovation Center",
                rating: 5,
            },
            Testimonial {
                text: "Comprehensive IT infrastructure setup with seamless integration. Highly \
                       skilled technical team.",
                author: "Carlos Rodriguez",
                company: "Smart Business Solutions",
                rating: 5,
            },
        ],
    },
    Detail {
        icon: "🐛",
        title: "Pest Control Services",
        tagline: "Ensuring Clean and Safe Spaces",
        features: &[
            "Safe and eco-friendly pest removal",
            "Regular pest monitoring and prevention plans",
            "Specialized treatments for termites, rodents, and insects",
        ],
        detailed_description:
            "Protect your property and health with our professional pest control services. \
             Using eco-friendly methods and advanced techniques, we eliminate existing pest \
             problems and implement preventive measures to ensure your space remains clean, \
             safe, and comfortable year-round.",
        benefits: &[
            "Environmentally safe and family-friendly treatments",
            "Comprehensive pest identification and elimination",
            "Preventive programs to avoid future infestations",
            "Licensed professionals with specialized training",
            "Regular monitoring and maintenance visits",
            "Guaranteed results with service warranties",
        ],
        process: &[
            (
                "Property Inspection",
                "Thorough assessment to identify pest issues and entry points",
            ),
            (
                "Treatment Planning",
                "Customized treatment plan based on pest type and severity",
            ),
            (
                "Pest Elimination",
                "Safe and effective treatment application by certified technicians",
            ),
            (
                "Prevention Setup",
                "Installation of preventive measures and monitoring systems",
            ),
            (
                "Follow-up Services",
                "Regular inspections and maintenance to ensure lasting results",
            ),
        ],
        pricing: "From AED 300 per treatment",
        duration: "1-3 days per treatment",
        team_size: "2-3 certified technicians",
        testimonials: &[
            Testimonial {
                text: "Completely eliminated our termite problem and their prevention program \
                       keeps our property pest-free.",
                author: "Fatima Al-Zahra",
                company: "Green Valley Residences",
                rating: 5,
            },
            Testimonial {
                text: "Eco-friendly approach with excellent results. Professional service from \
                       start to finish.",
                author: "Ahmed Hassan",
                company: "Family Resort Dubai",
                rating: 5,
            },
            Testimonial {
                text: "Reliable pest control with ongoing prevention. Great value for money and \
                       peace of mind.",
                author: "Sandra Williams",
                company: "Residential Complex Management",
                rating: 5,
            },
        ],
    },
    Detail {
        icon: "🎨",
        title: "Interior Design",
        tagline: "Creating Inspiring Spaces That Reflect Your Vision",
        features: &[
            "Bespoke designs for homes and offices",
            "Luxurious and elegant decor concepts",
            "Eco-friendly and smart design solutions",
            "Furniture layout and space optimization",
        ],
        detailed_description:
            "Transform your space into a masterpiece with our innovative interior design \
             services. Our creative team combines aesthetic excellence with functional design to \
             create environments that inspire, comfort, and reflect your unique style while \
             maximizing space utilization and value.",
        benefits: &[
            "Personalized design concepts tailored to your lifestyle",
            "Premium materials and furnishings from trusted suppliers",
            "3D visualization and virtual reality previews",
            "Sustainable and eco-friendly design options",
            "Project management from concept to completion",
            "Post-completion support and warranty services",
        ],
        process: &[
            (
                "Design Consultation",
                "Understanding your vision, preferences, and space requirements",
            ),
            (
                "Concept Development",
                "Creating design concepts with 3D visualizations and mood boards",
            ),
            (
                "Design Refinement",
                "Refining designs based on feedback and finalizing details",
            ),
            (
                "Implementation",
                "Professional execution with quality control and progress updates",
            ),
            (
                "Final Styling",
                "Final touches, styling, and handover of your transformed space",
            ),
        ],
        pricing: "From AED 80 per sq ft",
        duration: "4-12 weeks",
        team_size: "3-6 designers",
        testimonials: &[
            Testimonial {
                text: "Absolutely stunning results! They transformed our office into a space \
                       that truly reflects our brand and culture.",
                author: "Maria Rodriguez",
                company: "Creative Agency Dubai",
                rating: 5,
            },
            Testimonial {
                text: "Innovative design concepts with flawless execution. Our home renovation \
                       exceeded all expectations.",
                author: "Khalid Al-Mansouri",
                company: "Private Residence",
                rating: 5,
            },
            Testimonial {
                text: "Professional interior designers with amazing attention to detail. \
                       Beautiful and functional spaces created.",
                author: "Emma Thompson",
                company: "Luxury Hotel Group",
                rating: 5,
            },
        ],
    },
];

const ADDITIONAL_SERVICES: [(&str, &str, &str); 3] = [
    (
        "📅",
        "Event Management",
        "Professional event setup and coordination support",
    ),
    (
        "✨",
        "Cleaning Services",
        "Comprehensive cleaning for homes and offices",
    ),
    (
        "🌳",
        "Landscaping Solutions",
        "Beautiful gardening and landscape design",
    ),
];

fn stars(rating: u8) -> String {
    let mut out = String::new();
    for i in 1..=5 {
        out.push(if i <= rating { '★' } else { '☆' });
    }
    out
}

fn call_now(_: MouseEvent) {
    if let Some(window) = web_sys::window() {
        let _ = window
            .open_with_url_and_target(&config::tel_url(config::PHONE_NUMBER), "_self");
    }
}

#[derive(Properties, PartialEq)]
struct ServiceDetailProps {
    index: usize,
    on_back: Callback<MouseEvent>,
}

/// Full-page view for a single service. Mounting scrolls the window back
/// to the top so the hero is in view.
#[function_component(ServiceDetail)]
fn service_detail(props: &ServiceDetailProps) -> Html {
    let detail = &DETAILS[props.index];

    let (hero_ref, hero) = use_reveal(ObserverConfig {
        threshold: 0.1,
        root_margin: "100px",
        once: true,
    });
    let (details_ref, details) = use_reveal(ObserverConfig {
        threshold: 0.1,
        root_margin: "50px",
        once: true,
    });
    let (reviews_ref, reviews) = use_reveal(ObserverConfig {
        threshold: 0.1,
        root_margin: "50px",
        once: true,
    });

    use_effect_with_deps(
        |_| {
            if let Some(window) = web_sys::window() {
                let mut options = ScrollToOptions::new();
                options.top(0.0).behavior(ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="detail-page">
            <div ref={hero_ref} class={classes!("detail-hero", hero.css_class())}>
                <button class="back-button" onclick={props.on_back.clone()}>
                    {"← Back to Services"}
                </button>
                <div class="detail-hero-grid">
                    <div>
                        <h1>{ format!("Keynes {}", detail.title) }</h1>
                        <p class="detail-tagline">{ detail.tagline }</p>
                        <div class="detail-meta">
                            <div class="detail-meta-item">
                                <span class="detail-meta-value">{ detail.duration }</span>
                                <span class="detail-meta-label">{"Duration"}</span>
                            </div>
                            <div class="detail-meta-item">
                                <span class="detail-meta-value">{ detail.team_size }</span>
                                <span class="detail-meta-label">{"Team Size"}</span>
                            </div>
                            <div class="detail-meta-item">
                                <span class="detail-meta-value">{ detail.pricing }</span>
                                <span class="detail-meta-label">{"Pricing"}</span>
                            </div>
                        </div>
                    </div>
                    <div class="detail-features-panel">
                        <h3>{"Key Features"}</h3>
                        <ul>
                            {
                                detail.features.iter().map(|feature| html! {
                                    <li>
                                        <span class="check-dot">{"✔"}</span>
                                        <span>{ *feature }</span>
                                    </li>
                                }).collect::<Html>()
                            }
                        </ul>
                    </div>
                </div>
            </div>

            <div ref={details_ref} class={classes!("section", "detail-body", details.css_class())}>
                <div class="section-inner detail-body-grid">
                    <div>
                        <h2>{"About This Service"}</h2>
                        <p class="detail-description">{ detail.detailed_description }</p>
                        <div class="why-us-card">
                            <h3>{"Why Choose Us?"}</h3>
                            <p>
                                {"With years of experience and a commitment to excellence, we \
                                  deliver results that exceed expectations while maintaining the \
                                  highest standards of professionalism and quality."}
                            </p>
                        </div>
                    </div>
                    <div>
                        <h2>{"Benefits"}</h2>
                        <ul class="benefit-list">
                            {
                                detail.benefits.iter().map(|benefit| html! {
                                    <li class="benefit-item">
                                        <span class="check-dot">{"✔"}</span>
                                        <span>{ *benefit }</span>
                                    </li>
                                }).collect::<Html>()
                            }
                        </ul>
                    </div>
                </div>

                <div class="section-inner">
                    <h2>{"Our Process"}</h2>
                    <div class="process-list">
                        {
                            detail.process.iter().enumerate().map(|(i, (step, description))| html! {
                                <div class="process-step">
                                    <div class="process-number">{ i + 1 }</div>
                                    <div>
                                        <h4>{ *step }</h4>
                                        <p>{ *description }</p>
                                    </div>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </div>

            <div
                ref={reviews_ref}
                class={classes!("section", "detail-reviews", reviews.css_class())}
            >
                <div class="section-inner">
                    <div class="section-header">
                        <h2 class="section-title">{"What Our Clients Say"}</h2>
                        <p class="section-lead">{"Real feedback from satisfied customers"}</p>
                    </div>
                    <div class="reviews-grid">
                        {
                            detail.testimonials.iter().map(|t| html! {
                                <div class="review-card">
                                    <div class="review-stars">{ stars(t.rating) }</div>
                                    <blockquote>{ format!("\u{201c}{}\u{201d}", t.text) }</blockquote>
                                    <div class="review-head">
                                        <div class="review-initial">
                                            { t.author.chars().next().unwrap_or('?') }
                                        </div>
                                        <div>
                                            <h3>{ t.author }</h3>
                                            <p>{ t.company }</p>
                                        </div>
                                    </div>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </div>

            <div class="detail-cta">
                <h2>{"Ready to Get Started?"}</h2>
                <p>
                    {"Contact us today to discuss your project and discover how we can help you \
                      achieve your goals."}
                </p>
                <button class="button-primary" onclick={call_now}>{ CALL_NOW_LABEL }</button>
            </div>
        </div>
    }
}

/// Services catalog page. Selecting a card swaps the whole page for the
/// detail view; the back button restores the catalog. The URL does not
/// change while drilling down.
#[function_component(ServicesPage)]
pub fn services_page() -> Html {
    let selected = use_state(|| None::<usize>);

    // The catalog and the detail view are separate components so each
    // render of this one runs the same hooks regardless of selection.
    match *selected {
        Some(index) => {
            let on_back = {
                let selected = selected.clone();
                Callback::from(move |_: MouseEvent| selected.set(None))
            };
            html! { <ServiceDetail {index} {on_back} /> }
        }
        None => {
            let on_select = {
                let selected = selected.clone();
                Callback::from(move |i: usize| selected.set(Some(i)))
            };
            html! { <ServiceCatalog {on_select} /> }
        }
    }
}

#[derive(Properties, PartialEq)]
struct ServiceCatalogProps {
    on_select: Callback<usize>,
}

#[function_component(ServiceCatalog)]
fn service_catalog(props: &ServiceCatalogProps) -> Html {
    let (hero_ref, hero) = use_reveal(ObserverConfig {
        threshold: 0.1,
        root_margin: "100px",
        once: true,
    });
    let (card_refs, card_phases) = use_staggered_reveal(
        DETAILS.len(),
        CARD_STEP_MS,
        ObserverConfig {
            threshold: 0.1,
            root_margin: "50px",
            once: true,
        },
    );
    let (extra_refs, extra_phases) = use_staggered_reveal(
        ADDITIONAL_SERVICES.len(),
        EXTRA_STEP_MS,
        ObserverConfig {
            threshold: 0.1,
            root_margin: "30px",
            once: true,
        },
    );

    html! {
        <div class="services-page">
            <div ref={hero_ref} class={classes!("services-page-hero", hero.css_class())}>
                <div class="floating-shape" style="top: 5rem; left: 2.5rem; width: 5rem; height: 5rem;" />
                <div class="floating-shape" style="top: 10rem; right: 5rem; width: 8rem; height: 8rem; animation-delay: -2s;" />
                <div class="floating-shape" style="bottom: 5rem; left: 25%; width: 6rem; height: 6rem; animation-delay: -4s;" />
                <div class="services-page-hero-card">
                    <h1>{"Our Services"}</h1>
                    <p>
                        {"At Keynes Group, we deliver a wide range of professional solutions \
                          designed to meet the evolving needs of businesses and individuals \
                          across the UAE."}
                    </p>
                    <div class="hero-pill">{"Quality • Innovation • Client Satisfaction"}</div>
                </div>
            </div>

            <div class="section">
                <div class="section-inner detail-cards-grid">
                    {
                        DETAILS.iter().enumerate().map(|(i, detail)| {
                            let on_select = props.on_select.clone();
                            let onclick = Callback::from(move |_: MouseEvent| {
                                on_select.emit(i);
                            });
                            html! {
                                <div
                                    ref={card_refs[i].clone()}
                                    class={classes!(
                                        "detail-card",
                                        card_phases[i].css_class(),
                                    )}
                                    {onclick}
                                >
                                    <div class="detail-card-head">
                                        <span class="service-icon">{ detail.icon }</span>
                                        <div>
                                            <h3>{ format!("Keynes {}", detail.title) }</h3>
                                            <p>{ detail.tagline }</p>
                                        </div>
                                        <span class="detail-card-chevron">{"›"}</span>
                                    </div>
                                    <ul class="detail-card-features">
                                        {
                                            detail.features.iter().take(3).map(|feature| html! {
                                                <li>
                                                    <span class="check-dot">{"✔"}</span>
                                                    <span>{ *feature }</span>
                                                </li>
                                            }).collect::<Html>()
                                        }
                                    </ul>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>

            <div class="section additional-services">
                <div class="section-inner">
                    <div class="section-header">
                        <h2 class="section-title">{"Additional Services"}</h2>
                        <p class="section-lead">{"Comprehensive Solutions Under One Roof"}</p>
                    </div>
                    <div class="additional-grid">
                        {
                            ADDITIONAL_SERVICES.iter().enumerate().map(|(i, (icon, title, description))| html! {
                                <div
                                    ref={extra_refs[i].clone()}
                                    class={classes!("additional-card", extra_phases[i].css_class())}
                                >
                                    <div class="additional-icon">{ *icon }</div>
                                    <h3>{ *title }</h3>
                                    <p>{ *description }</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </div>

            <div class="detail-cta">
                <h2>{"Ready to Get Started?"}</h2>
                <p>
                    {"Let us help you achieve your goals with our comprehensive range of \
                      professional services. Contact us today to discuss how we can support your \
                      next project."}
                </p>
                <button class="button-primary" onclick={call_now}>{ CALL_NOW_LABEL }</button>
            </div>
        </div>
    }
}
