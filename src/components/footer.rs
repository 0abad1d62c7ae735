use crate::{config, Route};
use web_sys::js_sys;
use yew::prelude::*;
use yew_router::prelude::*;

const QUICK_LINKS: [(&str, Route); 3] = [
    ("About Us", Route::About),
    ("Services", Route::Services),
    ("Contact", Route::ContactUs),
];

const SERVICE_LINKS: [&str; 9] = [
    "Authority Approvals",
    "Construction",
    "Property Management",
    "Business Support Services",
    "General Maintenance",
    "IT and Security Solutions",
    "Pest Control Services",
    "Additional Services",
    "Interior Design",
];

const SOCIAL_LINKS: [(&str, &str); 3] = [
    ("LinkedIn", "in"),
    ("Twitter", "tw"),
    ("Instagram", "ig"),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let current_year = js_sys::Date::new_0().get_full_year();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <h3>{"Keynes Group UAE"}</h3>
                    <p>
                        {"Transforming businesses across the UAE with innovative solutions, \
                          strategic guidance, and unwavering commitment to excellence."}
                    </p>
                    <div class="footer-contact-row">
                        <span class="icon">{"📍"}</span>
                        <span>{ config::OFFICE_ADDRESS }</span>
                    </div>
                    <div class="footer-contact-row">
                        <span class="icon">{"📞"}</span>
                        <span>{ config::OFFICE_PHONE }</span>
                    </div>
                    <div class="footer-contact-row">
                        <span class="icon">{"✉"}</span>
                        <span>{ config::OFFICE_EMAIL }</span>
                    </div>
                    <div class="footer-social">
                        {
                            SOCIAL_LINKS.iter().map(|(name, short)| html! {
                                <a href="#" aria-label={*name}>{ *short }</a>
                            }).collect::<Html>()
                        }
                    </div>
                </div>

                <div>
                    <h4>{"Quick Links"}</h4>
                    <ul class="footer-links">
                        {
                            QUICK_LINKS.iter().map(|(name, target)| html! {
                                <li>
                                    <Link<Route> to={target.clone()}>{ *name }</Link<Route>>
                                </li>
                            }).collect::<Html>()
                        }
                    </ul>
                </div>

                <div>
                    <h4>{"Our Services"}</h4>
                    <ul class="footer-links">
                        {
                            SERVICE_LINKS.iter().map(|name| html! {
                                <li>
                                    <Link<Route> to={Route::Services}>{ *name }</Link<Route>>
                                </li>
                            }).collect::<Html>()
                        }
                    </ul>
                </div>
            </div>

            <div class="footer-bottom">
                { format!("© {} Keynes Group UAE. All rights reserved.", current_year) }
            </div>
        </footer>
    }
}
