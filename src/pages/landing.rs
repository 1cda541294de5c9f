use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};
use yew::prelude::*;

use crate::components::modal::WaitlistModal;
use crate::components::screenshots::PhoneScreenshots;

/// Elements revealed by the scroll observer.
const FADE_IN_SELECTOR: &str = ".feature-card, .step, .stat-item";
const FADE_IN_THRESHOLD: f64 = 0.1;
// Pulls the trigger line 50px above the viewport bottom so elements
// start animating slightly before they fully enter.
const FADE_IN_ROOT_MARGIN: &str = "0px 0px -50px 0px";

#[function_component(Landing)]
pub fn landing() -> Html {
    let show_modal = use_state(|| false);
    let header_elevated = use_state(|| false);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    // Header shadow tracks whether the page is scrolled at all
    {
        let header_elevated = header_elevated.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let header_elevated = header_elevated.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(scroll_y) = win.scroll_y() {
                                    header_elevated.set(scroll_y > 0.0);
                                }
                            }
                        }
                    });
                    window
                        .add_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    // Initial call
                    if let Ok(scroll_y) = window.scroll_y() {
                        header_elevated.set(scroll_y > 0.0);
                    }
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            )
                            .unwrap();
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    // Fade-in reveal for cards, steps and stats. Each element is
    // revealed once and then dropped from the observer; the transition
    // itself lives in the inline styles set here.
    {
        use_effect_with_deps(
            move |_| {
                if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                    let callback =
                        Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                            move |entries: js_sys::Array, observer: IntersectionObserver| {
                                for entry in entries.iter() {
                                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                                    if !entry.is_intersecting() {
                                        continue;
                                    }
                                    if let Ok(target) = entry.target().dyn_into::<HtmlElement>() {
                                        let style = target.style();
                                        let _ = style.set_property("opacity", "1");
                                        let _ = style.set_property("transform", "translateY(0)");
                                        observer.unobserve(&target);
                                    }
                                }
                            },
                        );

                    let mut options = IntersectionObserverInit::new();
                    options.threshold(&JsValue::from(FADE_IN_THRESHOLD));
                    options.root_margin(FADE_IN_ROOT_MARGIN);

                    if let Ok(observer) = IntersectionObserver::new_with_options(
                        callback.as_ref().unchecked_ref(),
                        &options,
                    ) {
                        if let Ok(nodes) = document.query_selector_all(FADE_IN_SELECTOR) {
                            for index in 0..nodes.length() {
                                let Some(element) = nodes
                                    .item(index)
                                    .and_then(|node| node.dyn_into::<HtmlElement>().ok())
                                else {
                                    continue;
                                };
                                let style = element.style();
                                let _ = style.set_property("opacity", "0");
                                let _ = style.set_property("transform", "translateY(20px)");
                                let _ = style.set_property(
                                    "transition",
                                    "opacity 0.6s ease, transform 0.6s ease",
                                );
                                observer.observe(&element);
                            }
                        }
                        callback.forget();
                    }
                }
                || ()
            },
            (),
        );
    }

    let open_modal = {
        let show_modal = show_modal.clone();
        Callback::from(move |_: MouseEvent| show_modal.set(true))
    };
    let close_modal = {
        let show_modal = show_modal.clone();
        Callback::from(move |_: ()| show_modal.set(false))
    };
    let nav_to = |id: &'static str| {
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_section(id);
        })
    };

    html! {
        <div class="landing-page">
            <style>{LANDING_CSS}</style>

            <header class={classes!("header", (*header_elevated).then_some("elevated"))}>
                <nav class="nav">
                    <a href="#top" class="nav-logo" onclick={nav_to("top")}>{"Klosa"}</a>
                    <div class="nav-links">
                        <a href="#how-it-works" onclick={nav_to("how-it-works")}>{"How it works"}</a>
                        <a href="#features" onclick={nav_to("features")}>{"Features"}</a>
                        <a href="#impact" onclick={nav_to("impact")}>{"Impact"}</a>
                    </div>
                    <button class="waitlist-btn" onclick={open_modal.clone()}>
                        {"Join the Waitlist"}
                    </button>
                </nav>
            </header>

            <section class="hero" id="top">
                <div class="hero-text">
                    <h1>{"Support family back home, together."}</h1>
                    <p class="hero-subtitle">
                        {"Klosa turns scattered transfers into one family circle: everyone \
                          contributes, everyone sees where the money goes, and it lands back \
                          home in one low-cost payout."}
                    </p>
                    <button class="waitlist-btn hero-cta" onclick={open_modal.clone()}>
                        {"Join the Waitlist"}
                    </button>
                    <p class="hero-note">{"Free while in early access. No card required."}</p>
                </div>
                <div class="hero-visual">
                    <PhoneScreenshots />
                </div>
            </section>

            <section class="how-it-works" id="how-it-works">
                <h2>{"How it works"}</h2>
                <div class="steps">
                    <div class="step">
                        <div class="step-number">{"1"}</div>
                        <h3>{"Start a circle"}</h3>
                        <p>{"Invite siblings, cousins and friends — wherever in the world they live."}</p>
                    </div>
                    <div class="step">
                        <div class="step-number">{"2"}</div>
                        <h3>{"Pool contributions"}</h3>
                        <p>{"Everyone chips in what they can, monthly or whenever. The ledger is open to the whole circle."}</p>
                    </div>
                    <div class="step">
                        <div class="step-number">{"3"}</div>
                        <h3>{"Send it home"}</h3>
                        <p>{"One payout, in local currency, straight to mobile money or a bank account."}</p>
                    </div>
                </div>
            </section>

            <section class="features" id="features">
                <h2>{"Built for how the diaspora actually sends"}</h2>
                <div class="feature-grid">
                    <div class="feature-card">
                        <div class="feature-icon">{"👪"}</div>
                        <h3>{"Family circles"}</h3>
                        <p>{"One shared pot per family instead of five separate apps and five separate fees."}</p>
                    </div>
                    <div class="feature-card">
                        <div class="feature-icon">{"📒"}</div>
                        <h3>{"Open ledger"}</h3>
                        <p>{"Every contribution and every payout is visible to the circle. No more \"did it arrive?\" calls."}</p>
                    </div>
                    <div class="feature-card">
                        <div class="feature-icon">{"💸"}</div>
                        <h3>{"One flat fee"}</h3>
                        <p>{"Pooling first means paying the transfer fee once, not once per person."}</p>
                    </div>
                    <div class="feature-card">
                        <div class="feature-icon">{"⚡"}</div>
                        <h3>{"Fast payouts"}</h3>
                        <p>{"Mobile money in minutes, bank transfer in a day, across the corridors you use."}</p>
                    </div>
                    <div class="feature-card">
                        <div class="feature-icon">{"🎯"}</div>
                        <h3>{"Goals & reminders"}</h3>
                        <p>{"School fees in January, rent every month. Set the goal once and Klosa nudges the circle."}</p>
                    </div>
                    <div class="feature-card">
                        <div class="feature-icon">{"🎁"}</div>
                        <h3>{"Referral rewards"}</h3>
                        <p>{"Share your code from the waitlist email and move up the line when friends join."}</p>
                    </div>
                </div>
            </section>

            <section class="stats" id="impact">
                <h2>{"Why this matters"}</h2>
                <div class="stat-grid">
                    <div class="stat-item">
                        <div class="stat-value">{"$650B+"}</div>
                        <p>{"sent home by diasporas every year"}</p>
                    </div>
                    <div class="stat-item">
                        <div class="stat-value">{"1 in 9"}</div>
                        <p>{"people worldwide are supported by money from abroad"}</p>
                    </div>
                    <div class="stat-item">
                        <div class="stat-value">{"6%"}</div>
                        <p>{"average transfer fee today. That's the number we're here to shrink."}</p>
                    </div>
                </div>
            </section>

            <section class="cta-section">
                <h2>{"Your family is waiting."}</h2>
                <p>{"Join the waitlist and be first in your corridor when Klosa opens up."}</p>
                <button class="waitlist-btn hero-cta" onclick={open_modal}>
                    {"Join the Waitlist"}
                </button>
            </section>

            <footer class="footer">
                <span class="footer-logo">{"Klosa"}</span>
                <p>{"How the diaspora supports their families back home."}</p>
                <a href="mailto:hello@klosa.app">{"hello@klosa.app"}</a>
                <p class="footer-fine">{"© 2026 Klosa"}</p>
            </footer>

            {
                if *show_modal {
                    html! { <WaitlistModal on_close={close_modal} /> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn scroll_to_section(id: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(element) = document.get_element_by_id(id) {
            let mut options = ScrollIntoViewOptions::new();
            options
                .behavior(ScrollBehavior::Smooth)
                .block(ScrollLogicalPosition::Start);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

const LANDING_CSS: &str = r#"
.landing-page {
    overflow-x: hidden;
}
.header {
    position: sticky;
    top: 0;
    background: #fff;
    z-index: 50;
    transition: box-shadow 0.3s ease;
}
.header.elevated {
    box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
}
.nav {
    max-width: 1100px;
    margin: 0 auto;
    padding: 1rem 1.5rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 1.5rem;
}
.nav-logo {
    font-size: 1.4rem;
    font-weight: 800;
    color: #14B8A6;
    text-decoration: none;
}
.nav-links {
    display: flex;
    gap: 1.5rem;
}
.nav-links a {
    text-decoration: none;
    color: #475569;
    font-weight: 500;
}
.nav-links a:hover {
    color: #14B8A6;
}
.waitlist-btn {
    border: none;
    border-radius: 8px;
    background: #14B8A6;
    color: #fff;
    font-weight: 600;
    padding: 0.625rem 1.25rem;
    font-size: 0.95rem;
}
.waitlist-btn:hover {
    background: #0D9488;
}
.hero {
    max-width: 1100px;
    margin: 0 auto;
    padding: 4rem 1.5rem;
    display: grid;
    grid-template-columns: 1.2fr 1fr;
    gap: 3rem;
    align-items: center;
}
.hero h1 {
    font-size: 3rem;
    line-height: 1.15;
    margin-bottom: 1.25rem;
}
.hero-subtitle {
    font-size: 1.15rem;
    color: #475569;
    margin-bottom: 2rem;
    max-width: 34rem;
}
.hero-cta {
    padding: 0.875rem 1.75rem;
    font-size: 1.05rem;
}
.hero-note {
    margin-top: 0.75rem;
    font-size: 0.85rem;
    color: #94A3B8;
}
.how-it-works, .features, .stats {
    max-width: 1100px;
    margin: 0 auto;
    padding: 4rem 1.5rem;
}
.how-it-works h2, .features h2, .stats h2 {
    font-size: 2rem;
    text-align: center;
    margin-bottom: 2.5rem;
}
.steps {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 2rem;
}
.step {
    text-align: center;
    padding: 1.5rem;
}
.step-number {
    width: 44px;
    height: 44px;
    margin: 0 auto 1rem;
    border-radius: 50%;
    background: #CCFBF1;
    color: #0D9488;
    font-weight: 700;
    font-size: 1.2rem;
    display: flex;
    align-items: center;
    justify-content: center;
}
.step p {
    color: #64748B;
}
.feature-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 1.5rem;
}
.feature-card {
    border: 1px solid #E2E8F0;
    border-radius: 12px;
    padding: 1.75rem;
    background: #fff;
}
.feature-card h3 {
    margin: 0.75rem 0 0.5rem;
}
.feature-card p {
    color: #64748B;
    font-size: 0.95rem;
}
.feature-icon {
    font-size: 1.75rem;
}
.stats {
    text-align: center;
}
.stat-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 2rem;
}
.stat-value {
    font-size: 2.5rem;
    font-weight: 800;
    color: #14B8A6;
}
.stat-item p {
    color: #64748B;
}
.cta-section {
    background: #0F172A;
    color: #fff;
    text-align: center;
    padding: 4.5rem 1.5rem;
}
.cta-section h2 {
    font-size: 2.25rem;
    margin-bottom: 0.75rem;
}
.cta-section p {
    color: #94A3B8;
    margin-bottom: 2rem;
}
.footer {
    text-align: center;
    padding: 3rem 1.5rem;
    color: #64748B;
}
.footer-logo {
    font-weight: 800;
    font-size: 1.2rem;
    color: #14B8A6;
}
.footer a {
    color: #14B8A6;
    text-decoration: none;
}
.footer-fine {
    margin-top: 1rem;
    font-size: 0.85rem;
    color: #94A3B8;
}
@media (max-width: 820px) {
    .hero {
        grid-template-columns: 1fr;
        text-align: center;
        padding-top: 2.5rem;
    }
    .hero-subtitle {
        margin-left: auto;
        margin-right: auto;
    }
    .nav-links {
        display: none;
    }
    .steps, .feature-grid, .stat-grid {
        grid-template-columns: 1fr;
    }
    .hero h1 {
        font-size: 2.25rem;
    }
}
"#;
