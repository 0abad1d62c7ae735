use crate::config;
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FloatingContactButtonsProps {
    pub phone_number: AttrValue,
    pub whatsapp_number: AttrValue,
    pub whatsapp_message: AttrValue,
}

/// Floating call/WhatsApp buttons shown on every page.
#[function_component(FloatingContactButtons)]
pub fn floating_contact_buttons(props: &FloatingContactButtonsProps) -> Html {
    let on_call = {
        let phone = props.phone_number.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(window) = web_sys::window() {
                let _ = window.open_with_url_and_target(&config::tel_url(&phone), "_self");
            }
        })
    };

    let on_whatsapp = {
        let number = props.whatsapp_number.clone();
        let message = props.whatsapp_message.clone();
        Callback::from(move |_: MouseEvent| {
            let url = config::whatsapp_url(&number, &message);
            if let Some(window) = web_sys::window() {
                let _ = window.open_with_url_and_target_and_features(
                    &url,
                    "_blank",
                    "noopener,noreferrer",
                );
            }
        })
    };

    html! {
        <div class="float-buttons">
            <button
                class="float-button"
                onclick={on_whatsapp}
                aria-label="Contact us on WhatsApp"
                type="button"
            >
                {"💬"}
                <span class="float-tooltip">{"WhatsApp"}</span>
            </button>
            <button
                class="float-button"
                onclick={on_call}
                aria-label="Call us"
                type="button"
            >
                {"📞"}
                <span class="float-tooltip">{"Call Now"}</span>
            </button>
        </div>
    }
}
