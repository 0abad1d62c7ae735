use web_sys::MouseEvent;
use yew::prelude::*;

const PAGE_SIZE: usize = 3;

struct Review {
    name: &'static str,
    avatar: &'static str,
    rating: u8,
    content: &'static str,
}

const REVIEWS: [Review; 6] = [
    Review {
        name: "Sarah Johnson",
        avatar: "https://images.pexels.com/photos/774909/pexels-photo-774909.jpeg?auto=compress&cs=tinysrgb&w=100&h=100&fit=crop",
        rating: 5,
        content: "Amazing experience! The service exceeded all my expectations and the support \
                  team was incredibly helpful throughout the process.",
    },
    Review {
        name: "Michael Chen",
        avatar: "https://images.pexels.com/photos/1043471/pexels-photo-1043471.jpeg?auto=compress&cs=tinysrgb&w=100&h=100&fit=crop",
        rating: 5,
        content: "Really solid product with excellent features. Great value for money and the \
                  interface is very intuitive to use.",
    },
    Review {
        name: "Emily Rodriguez",
        avatar: "https://images.pexels.com/photos/712513/pexels-photo-712513.jpeg?auto=compress&cs=tinysrgb&w=100&h=100&fit=crop",
        rating: 5,
        content: "This has been a game-changer for my business. Highly recommend to anyone \
                  looking for a reliable solution.",
    },
    Review {
        name: "David Thompson",
        avatar: "https://images.pexels.com/photos/1212984/pexels-photo-1212984.jpeg?auto=compress&cs=tinysrgb&w=100&h=100&fit=crop",
        rating: 5,
        content: "Setup was straightforward and customer service was very responsive. Definitely \
                  worth trying out.",
    },
    Review {
        name: "Jessica Park",
        avatar: "https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg?auto=compress&cs=tinysrgb&w=100&h=100&fit=crop",
        rating: 5,
        content: "Perfect solution for our team. It streamlined our workflow and improved \
                  collaboration significantly.",
    },
    Review {
        name: "Ryan Kumar",
        avatar: "https://images.pexels.com/photos/1040881/pexels-photo-1040881.jpeg?auto=compress&cs=tinysrgb&w=100&h=100&fit=crop",
        rating: 5,
        content: "Good product overall. Does what it promises and the team behind it is clearly \
                  passionate about their work.",
    },
];

fn stars(rating: u8) -> String {
    let mut out = String::new();
    for i in 1..=5 {
        out.push(if i <= rating { '★' } else { '☆' });
    }
    out
}

/// Testimonial grid showing three reviews at a time with a Load More
/// action.
#[function_component(Reviews)]
pub fn reviews() -> Html {
    let visible_count = use_state(|| PAGE_SIZE);

    let on_load_more = {
        let visible_count = visible_count.clone();
        Callback::from(move |_: MouseEvent| {
            visible_count.set((*visible_count + PAGE_SIZE).min(REVIEWS.len()));
        })
    };

    html! {
        <section class="section reviews-section">
            <div class="section-inner">
                <div class="section-header">
                    <div class="section-badge">{"Testimonials"}</div>
                    <h1 class="section-title">{"What Our Customers Say"}</h1>
                    <p class="section-lead">
                        {"Real stories from our valued customers across different industries."}
                    </p>
                </div>

                <div class="reviews-grid">
                    {
                        REVIEWS.iter().take(*visible_count).map(|review| html! {
                            <div class="review-card">
                                <div class="review-head">
                                    <img src={review.avatar} alt={review.name} />
                                    <div>
                                        <h3>{ review.name }</h3>
                                        <div class="review-stars">{ stars(review.rating) }</div>
                                    </div>
                                </div>
                                <p>{ review.content }</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>

                if *visible_count < REVIEWS.len() {
                    <div class="load-more-row">
                        <button class="button-primary" onclick={on_load_more}>
                            {"Load More"}
                        </button>
                    </div>
                }
            </div>
        </section>
    }
}
