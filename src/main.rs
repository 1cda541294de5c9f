use klosa_landing::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    gloo_console::log!("Klosa — how the diaspora supports their families back home");
    yew::Renderer::<App>::new().render();
}
