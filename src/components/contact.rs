use crate::config;
use yew::prelude::*;

/// Home-page contact section: office details, business hours, and the
/// embedded map. The actual form lives on the contact page.
#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let info_cards = [
        (
            "📍",
            "Office Location",
            vec![config::OFFICE_ADDRESS, config::OFFICE_COUNTRY],
        ),
        ("📞", "Phone Numbers", vec![config::OFFICE_PHONE]),
        ("✉", "Email Address", vec![config::OFFICE_EMAIL]),
    ];

    html! {
        <section id="contact" class="section contact-section">
            <div class="section-inner">
                <div class="section-header">
                    <div class="section-badge">{"Get In Touch"}</div>
                    <h2 class="section-title">
                        {"Let's Start a"}
                        <span class="accent">{" Conversation"}</span>
                    </h2>
                    <p class="section-lead">
                        {"Ready to take your business to the next level? We'd love to hear from \
                          you. Get in touch and let's discuss how we can help achieve your goals."}
                    </p>
                </div>

                <div class="contact-grid">
                    <div>
                        {
                            info_cards.iter().map(|(icon, title, details)| html! {
                                <div class="contact-card">
                                    <div class="contact-card-row">
                                        <div class="contact-card-icon">{ *icon }</div>
                                        <div>
                                            <h4>{ *title }</h4>
                                            {
                                                details.iter().map(|detail| html! {
                                                    <p>{ *detail }</p>
                                                }).collect::<Html>()
                                            }
                                        </div>
                                    </div>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>

                    <div>
                        <div class="contact-card">
                            <div class="contact-card-row">
                                <div class="contact-card-icon">{"🕒"}</div>
                                <div>
                                    <h4>{"Business Hours"}</h4>
                                    <p>{"Sunday - Thursday: 9:00 AM - 6:00 PM"}</p>
                                    <p>{"Friday - Saturday: Closed"}</p>
                                </div>
                            </div>
                        </div>

                        <div class="contact-card">
                            <h4>{"Find Us"}</h4>
                            <div class="map-frame">
                                <iframe
                                    src={config::MAP_EMBED_URL}
                                    loading="lazy"
                                    referrerpolicy="no-referrer-when-downgrade"
                                />
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
