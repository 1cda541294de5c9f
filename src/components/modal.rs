use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::supabase::SupabaseClient;
use crate::utils::query::url_param;
use crate::waitlist::flow::{self, SignupOutcome, SUCCESS_RESET_DELAY_MS};
use crate::waitlist::store::SignupRequest;

const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";
const ALREADY_JOINED_MESSAGE: &str = "This email is already on the waitlist! 🎉";

#[derive(Properties, PartialEq)]
pub struct WaitlistModalProps {
    pub on_close: Callback<()>,
}

#[function_component(WaitlistModal)]
pub fn waitlist_modal(props: &WaitlistModalProps) -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let country = use_state(String::new);
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);
    let joined = use_state(|| false);

    // Lock page scroll while the modal is up; the unmount destructor
    // restores it no matter how the modal was closed.
    use_effect_with_deps(
        move |_| {
            set_body_overflow("hidden");
            || set_body_overflow("auto")
        },
        (),
    );

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let phone = phone.clone();
        let country = country.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        let joined = joined.clone();
        let on_close = props.on_close.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let user_agent = web_sys::window()
                .map(|w| w.navigator().user_agent().unwrap_or_default())
                .unwrap_or_default();
            let signup = SignupRequest::new(
                name.as_str(),
                email.as_str(),
                phone.as_str(),
                country.as_str(),
                url_param("ref"),
                user_agent,
            );

            submitting.set(true);
            error.set(None);

            let name = name.clone();
            let email = email.clone();
            let phone = phone.clone();
            let country = country.clone();
            let error = error.clone();
            let submitting = submitting.clone();
            let joined = joined.clone();
            let on_close = on_close.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let store = SupabaseClient::new();
                match flow::submit(&store, &signup).await {
                    SignupOutcome::InvalidEmail => {
                        error.set(Some(INVALID_EMAIL_MESSAGE.to_string()));
                        submitting.set(false);
                    }
                    SignupOutcome::Joined => {
                        joined.set(true);
                        // Let the success message breathe, then reset the
                        // form and hand control back to the page. The
                        // submit button stays disabled until this fires.
                        let name = name.clone();
                        let email = email.clone();
                        let phone = phone.clone();
                        let country = country.clone();
                        let joined = joined.clone();
                        let submitting = submitting.clone();
                        let on_close = on_close.clone();
                        Timeout::new(SUCCESS_RESET_DELAY_MS, move || {
                            name.set(String::new());
                            email.set(String::new());
                            phone.set(String::new());
                            country.set(String::new());
                            joined.set(false);
                            submitting.set(false);
                            on_close.emit(());
                        })
                        .forget();
                    }
                    SignupOutcome::AlreadyJoined => {
                        error.set(Some(ALREADY_JOINED_MESSAGE.to_string()));
                        submitting.set(false);
                    }
                    SignupOutcome::Failed(message) => {
                        error.set(Some(message));
                        submitting.set(false);
                    }
                }
            });
        })
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    // Clicking the dimmed backdrop closes; clicks inside the card are
    // swallowed before they reach the overlay.
    let backdrop_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let swallow = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-overlay" onclick={backdrop_close}>
            <style>{MODAL_CSS}</style>
            <div class="modal-content" onclick={swallow}>
                <button type="button" class="modal-close" onclick={close} aria-label="Close">
                    {"×"}
                </button>
                {
                    if *joined {
                        html! {
                            <div class="success-message">
                                <div class="success-icon">{"✓"}</div>
                                <h3>{"You're on the list! 🎉"}</h3>
                                <p>{"We'll email you as soon as your spot opens up."}</p>
                            </div>
                        }
                    } else {
                        html! {
                            <>
                                <h2>{"Join the Klosa waitlist"}</h2>
                                <p class="modal-subtitle">
                                    {"Be the first to know when we launch in your corridor."}
                                </p>
                                {
                                    if let Some(message) = (*error).as_ref() {
                                        html! { <div class="form-error">{message}</div> }
                                    } else {
                                        html! {}
                                    }
                                }
                                <form class="waitlist-form" onsubmit={onsubmit}>
                                    <input
                                        type="text"
                                        placeholder="Full name"
                                        required=true
                                        value={(*name).clone()}
                                        oninput={let name = name.clone(); move |e: InputEvent| {
                                            let input: HtmlInputElement = e.target_unchecked_into();
                                            name.set(input.value());
                                        }}
                                    />
                                    <input
                                        type="email"
                                        placeholder="Email address"
                                        required=true
                                        value={(*email).clone()}
                                        oninput={let email = email.clone(); move |e: InputEvent| {
                                            let input: HtmlInputElement = e.target_unchecked_into();
                                            email.set(input.value());
                                        }}
                                    />
                                    <input
                                        type="tel"
                                        placeholder="Phone (optional)"
                                        value={(*phone).clone()}
                                        oninput={let phone = phone.clone(); move |e: InputEvent| {
                                            let input: HtmlInputElement = e.target_unchecked_into();
                                            phone.set(input.value());
                                        }}
                                    />
                                    <input
                                        type="text"
                                        placeholder="Country you send to (optional)"
                                        value={(*country).clone()}
                                        oninput={let country = country.clone(); move |e: InputEvent| {
                                            let input: HtmlInputElement = e.target_unchecked_into();
                                            country.set(input.value());
                                        }}
                                    />
                                    <button type="submit" disabled={*submitting}>
                                        {if *submitting { "Joining..." } else { "Join the Waitlist" }}
                                    </button>
                                </form>
                            </>
                        }
                    }
                }
            </div>
        </div>
    }
}

fn set_body_overflow(value: &str) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        let _ = body.style().set_property("overflow", value);
    }
}

const MODAL_CSS: &str = r#"
.modal-overlay {
    position: fixed;
    inset: 0;
    background: rgba(15, 23, 42, 0.6);
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 1rem;
    z-index: 100;
}
.modal-content {
    position: relative;
    background: #fff;
    border-radius: 16px;
    padding: 2.5rem;
    width: 100%;
    max-width: 440px;
    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.2);
}
.modal-content h2 {
    font-size: 1.5rem;
    margin-bottom: 0.5rem;
}
.modal-subtitle {
    color: #64748B;
    margin-bottom: 1.5rem;
}
.modal-close {
    position: absolute;
    top: 1rem;
    right: 1rem;
    border: none;
    background: none;
    font-size: 1.75rem;
    line-height: 1;
    color: #94A3B8;
}
.modal-close:hover {
    color: #0F172A;
}
.waitlist-form {
    display: flex;
    flex-direction: column;
    gap: 0.875rem;
}
.waitlist-form input {
    padding: 0.75rem 1rem;
    border: 1px solid #CBD5E1;
    border-radius: 8px;
    font-size: 1rem;
}
.waitlist-form input:focus {
    outline: none;
    border-color: #14B8A6;
    box-shadow: 0 0 0 3px rgba(20, 184, 166, 0.15);
}
.waitlist-form button[type="submit"] {
    margin-top: 0.5rem;
    padding: 0.875rem 1rem;
    border: none;
    border-radius: 8px;
    background: #14B8A6;
    color: #fff;
    font-size: 1rem;
    font-weight: 600;
}
.waitlist-form button[type="submit"]:hover:enabled {
    background: #0D9488;
}
.waitlist-form button[type="submit"]:disabled {
    opacity: 0.6;
    cursor: wait;
}
.form-error {
    background: #FEF2F2;
    color: #B91C1C;
    border-radius: 8px;
    padding: 0.75rem 1rem;
    margin-bottom: 1rem;
    font-size: 0.9rem;
}
.success-message {
    text-align: center;
    padding: 1.5rem 0;
}
.success-icon {
    width: 56px;
    height: 56px;
    margin: 0 auto 1rem;
    border-radius: 50%;
    background: #CCFBF1;
    color: #0D9488;
    font-size: 1.75rem;
    display: flex;
    align-items: center;
    justify-content: center;
}
.success-message p {
    color: #64748B;
}
"#;
