//! Supabase endpoint configuration. Values are baked in at build time;
//! CI overrides them through the `KLOSA_SUPABASE_*` environment
//! variables when producing the production bundle.

const DEFAULT_SUPABASE_URL: &str = "https://klosa.supabase.co";

// The anon key is a publishable credential; row-level security on the
// waitlist table is what actually limits what it can do.
const DEFAULT_SUPABASE_ANON_KEY: &str = "";

pub fn get_supabase_url() -> String {
    option_env!("KLOSA_SUPABASE_URL")
        .unwrap_or(DEFAULT_SUPABASE_URL)
        .to_string()
}

pub fn get_supabase_anon_key() -> String {
    option_env!("KLOSA_SUPABASE_ANON_KEY")
        .unwrap_or(DEFAULT_SUPABASE_ANON_KEY)
        .to_string()
}
