use crate::Route;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

const NAV_ITEMS: [(&str, Route); 4] = [
    ("Home", Route::Home),
    ("About", Route::About),
    ("Services", Route::Services),
    ("Contact", Route::ContactUs),
];

/// Fixed top navigation: transparent over the hero, solid once the page
/// is scrolled past 50px.
#[function_component(Header)]
pub fn header() -> Html {
    let is_scrolled = use_state(|| false);
    let menu_open = use_state(|| false);
    let route = use_route::<Route>();

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().expect("no window");
                let window_cb = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = window_cb.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_top > 50.0);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let is_active = |target: &Route| route.as_ref() == Some(target);

    html! {
        <header class={classes!("site-header", (*is_scrolled).then_some("scrolled"))}>
            <div class="header-content">
                <Link<Route> to={Route::Home} classes="header-logo">
                    <img src="/logos/keyness_logo.png" alt="Keynes Group" />
                    <div class="header-logo-text">
                        <span class="header-logo-name">{"Keynes Group"}</span>
                        <span class="header-logo-tag">{"Doing more, for you!"}</span>
                    </div>
                </Link<Route>>

                <nav class="header-nav">
                    {
                        NAV_ITEMS.iter().map(|(name, target)| html! {
                            <Link<Route>
                                to={target.clone()}
                                classes={classes!("nav-link", is_active(target).then_some("active"))}
                            >
                                { *name }
                            </Link<Route>>
                        }).collect::<Html>()
                    }
                </nav>

                <button class="burger-button" onclick={toggle_menu}>
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>

            if *menu_open {
                <div class="mobile-nav">
                    <nav>
                        {
                            NAV_ITEMS.iter().map(|(name, target)| html! {
                                <div onclick={close_menu.clone()}>
                                    <Link<Route>
                                        to={target.clone()}
                                        classes={classes!("nav-link", is_active(target).then_some("active"))}
                                    >
                                        { *name }
                                    </Link<Route>>
                                </div>
                            }).collect::<Html>()
                        }
                    </nav>
                </div>
            }
        </header>
    }
}
