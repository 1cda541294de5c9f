//! Minimal Supabase client: one PostgREST insert against the waitlist
//! collection. The anon key rides along as both the `apikey` header and
//! a bearer token, which is all PostgREST needs for an RLS-guarded
//! insert.

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::Deserialize;

use crate::config;
use crate::waitlist::store::{SignupRequest, StoreError, WaitlistRecord, WaitlistStore};

const WAITLIST_TABLE: &str = "waitlist";

pub struct SupabaseClient {
    url: String,
    anon_key: String,
}

impl SupabaseClient {
    pub fn new() -> Self {
        Self {
            url: config::get_supabase_url(),
            anon_key: config::get_supabase_anon_key(),
        }
    }

    fn rest_endpoint(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.url, table)
    }
}

impl Default for SupabaseClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Error body PostgREST sends alongside a non-2xx status.
#[derive(Deserialize)]
struct PostgrestError {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

#[async_trait(?Send)]
impl WaitlistStore for SupabaseClient {
    async fn insert(&self, signup: &SignupRequest) -> Result<Vec<WaitlistRecord>, StoreError> {
        let response = Request::post(&self.rest_endpoint(WAITLIST_TABLE))
            .header("apikey", &self.anon_key)
            .header("Authorization", &format!("Bearer {}", self.anon_key))
            .header("Prefer", "return=representation")
            .json(signup)
            .map_err(|e| StoreError::transport(format!("Failed to build request: {e}")))?
            .send()
            .await
            .map_err(|e| StoreError::transport(format!("Request failed: {e}")))?;

        if response.ok() {
            // The insert has landed at this point; a malformed echo is
            // worth a warning, not a failed signup.
            let records = response
                .json::<Vec<WaitlistRecord>>()
                .await
                .unwrap_or_else(|e| {
                    log::warn!("could not decode inserted waitlist rows: {e}");
                    Vec::new()
                });
            Ok(records)
        } else {
            let status = response.status();
            match response.json::<PostgrestError>().await {
                Ok(body) => Err(StoreError {
                    code: body.code,
                    message: body.message.unwrap_or_default(),
                }),
                Err(_) => Err(StoreError::transport(format!(
                    "Waitlist store returned status {status}"
                ))),
            }
        }
    }
}
