use yew::prelude::*;

pub mod components;
pub mod config;
pub mod pages;
pub mod supabase;
pub mod utils;
pub mod waitlist;

use pages::landing::Landing;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <Landing />
    }
}
