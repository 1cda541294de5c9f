use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

/// One rotation step; matches the CSS cross-fade below.
const ROTATION_INTERVAL_MS: u32 = 4_000;

const SCREENSHOTS: [(&str, &str); 3] = [
    ("/assets/screens/circle.png", "Your family circle in Klosa"),
    ("/assets/screens/contribute.png", "Pooling monthly contributions"),
    ("/assets/screens/payout.png", "A payout arriving back home"),
];

pub(crate) fn next_screenshot(current: usize, count: usize) -> usize {
    if count == 0 {
        0
    } else {
        (current + 1) % count
    }
}

/// Phone mockup cycling through app screenshots. The interval owns the
/// real index; the state handle only mirrors it for rendering.
#[function_component(PhoneScreenshots)]
pub fn phone_screenshots() -> Html {
    let active = use_state(|| 0usize);

    {
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                let index = Rc::new(Cell::new(0usize));
                let interval = Interval::new(ROTATION_INTERVAL_MS, move || {
                    let next = next_screenshot(index.get(), SCREENSHOTS.len());
                    index.set(next);
                    active.set(next);
                });
                move || drop(interval)
            },
            (),
        );
    }

    html! {
        <div class="phone-mockup">
            <style>{SCREENSHOT_CSS}</style>
            <div class="phone-frame">
                { for SCREENSHOTS.iter().enumerate().map(|(i, (src, alt))| html! {
                    <img
                        class={classes!("phone-screenshot", (i == *active).then_some("active"))}
                        src={*src}
                        alt={*alt}
                        loading="lazy"
                    />
                })}
            </div>
        </div>
    }
}

const SCREENSHOT_CSS: &str = r#"
.phone-mockup {
    display: flex;
    justify-content: center;
}
.phone-frame {
    position: relative;
    width: 280px;
    aspect-ratio: 9 / 19;
    border-radius: 36px;
    border: 10px solid #0F172A;
    background: #0F172A;
    overflow: hidden;
    box-shadow: 0 25px 50px -12px rgba(15, 23, 42, 0.4);
}
.phone-screenshot {
    position: absolute;
    inset: 0;
    width: 100%;
    height: 100%;
    object-fit: cover;
    opacity: 0;
    transition: opacity 0.8s ease;
}
.phone-screenshot.active {
    opacity: 1;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_one_at_a_time() {
        assert_eq!(next_screenshot(0, 3), 1);
        assert_eq!(next_screenshot(1, 3), 2);
    }

    #[test]
    fn wraps_back_to_the_first_image() {
        assert_eq!(next_screenshot(2, 3), 0);
    }

    #[test]
    fn a_full_cycle_returns_to_the_start() {
        let count = SCREENSHOTS.len();
        let mut current = 0;
        for _ in 0..count {
            current = next_screenshot(current, count);
        }
        assert_eq!(current, 0);
    }

    #[test]
    fn empty_sequence_stays_put() {
        assert_eq!(next_screenshot(0, 0), 0);
    }
}
