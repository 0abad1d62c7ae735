use yew::prelude::*;

const CLIENTS: [(&str, &str); 12] = [
    ("WestZone", "/logos/WZ-Logo.avif"),
    ("UAE Exchange", "/logos/UaeExchange.jpg"),
    ("KFC", "/logos/KFC.png"),
    ("LM Exchange", "/logos/LMEX.svg"),
    ("All day", "/logos/allday_community_centre.png"),
    ("Quick Registration", "/logos/Quick-registration.jpg"),
    ("Ramada", "/logos/Ramada.png"),
    ("Calicut Notebook", "/logos/Calicut-notebook.jpg"),
    ("Bin Sina", "/logos/BinSina.jpg"),
    ("Jaleel Holdings", "/logos/jaleel-holdings.png"),
    ("JW Marriott", "/logos/JW-Marriott.png"),
    ("London Fish & Chips", "/logos/London-fish-and-chips.jpg"),
];

#[derive(Properties, PartialEq)]
struct LogoCardProps {
    name: AttrValue,
    logo: AttrValue,
}

/// One logo tile. A broken image is swapped for its client name rather
/// than surfacing an error.
#[function_component(LogoCard)]
fn logo_card(props: &LogoCardProps) -> Html {
    let failed = use_state(|| false);

    let onerror = {
        let failed = failed.clone();
        Callback::from(move |_: Event| failed.set(true))
    };

    html! {
        <div class="client-logo-card">
            if *failed {
                <div class="client-logo-fallback">{ props.name.clone() }</div>
            } else {
                <img
                    src={props.logo.clone()}
                    alt={format!("{} logo", props.name)}
                    {onerror}
                />
            }
        </div>
    }
}

/// Client-logo marquee. The list is repeated so the translate loop wraps
/// seamlessly; hovering pauses the animation (CSS).
#[function_component(Clients)]
pub fn clients() -> Html {
    html! {
        <div class="section clients-page">
            <div class="section-header">
                <h1 class="section-title">
                    {"Our "}<span class="gradient-accent">{"Clients"}</span>
                </h1>
                <p class="section-lead">
                    {"Trusted by industry leaders worldwide. We're proud to work with these \
                      amazing companies that push the boundaries of innovation."}
                </p>
            </div>

            <div class="clients-track-wrap">
                <div class="clients-track">
                    {
                        (0..4).flat_map(|pass| {
                            CLIENTS.iter().enumerate().map(move |(i, (name, logo))| html! {
                                <LogoCard
                                    key={format!("{pass}-{i}")}
                                    name={*name}
                                    logo={*logo}
                                />
                            })
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </div>
    }
}
