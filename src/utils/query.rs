use web_sys::UrlSearchParams;

/// Reads a single parameter from the current page's query string, e.g.
/// `url_param("ref")` on `/?ref=AMIN-7GQ2`. Pure read, no mutation.
pub fn url_param(name: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    let params = UrlSearchParams::new_with_str(&search).ok()?;
    params.get(name)
}
