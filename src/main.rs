use log::{info, Level};
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod forms;
mod anim {
    pub mod counter;
    pub mod reveal;
    pub mod slideshow;
}
mod components {
    pub mod about;
    pub mod clients;
    pub mod contact;
    pub mod float_buttons;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod reviews;
    pub mod services;
}
mod pages {
    pub mod about_us;
    pub mod contact_page;
    pub mod services_page;
}

use components::{
    about::About, clients::Clients, contact::ContactSection, float_buttons::FloatingContactButtons,
    footer::Footer, header::Header, hero::Hero, reviews::Reviews, services::Services,
};
use pages::{about_us::AboutUs, contact_page::ContactPage, services_page::ServicesPage};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/services")]
    Services,
    #[at("/contactus")]
    ContactUs,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <HomePage /> }
        }
        Route::About => {
            info!("Rendering About page");
            html! { <AboutUs /> }
        }
        Route::Services => {
            info!("Rendering Services page");
            html! { <ServicesPage /> }
        }
        Route::ContactUs => {
            info!("Rendering Contact page");
            html! { <ContactPage /> }
        }
    }
}

#[function_component(HomePage)]
fn home_page() -> Html {
    html! {
        <>
            <Hero />
            <About />
            <Services />
            <Clients />
            <Reviews />
            <ContactSection />
        </>
    }
}

/// Smooth-scrolls to the top whenever the route changes.
#[function_component(ScrollToTop)]
fn scroll_to_top() -> Html {
    let location = use_location();
    let path = location.map(|l| l.path().to_string()).unwrap_or_default();

    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                let mut options = ScrollToOptions::new();
                options.top(0.0).left(0.0).behavior(ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            }
            || ()
        },
        path,
    );

    html! {}
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <ScrollToTop />
            <Header />
            <Switch<Route> render={switch} />
            <Footer />
            <FloatingContactButtons
                phone_number={config::PHONE_NUMBER}
                whatsapp_number={config::WHATSAPP_NUMBER}
                whatsapp_message={config::WHATSAPP_MESSAGE}
            />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
