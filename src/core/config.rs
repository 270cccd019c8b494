use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub gemini_api_hostname: String,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub profile_path: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let gemini_api_hostname = env::var("FOLIO_GEMINI_API_HOSTNAME")
            .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".to_string());
        // The key is supplied externally, never embedded. An empty key
        // still produces a well-formed request URL.
        let gemini_api_key = env::var("GEMINI_API_KEY").unwrap_or_default();
        let gemini_model = env::var("FOLIO_GEMINI_MODEL")
            .unwrap_or_else(|_| "gemini-2.5-flash-preview-05-20".to_string());
        let profile_path = env::var("FOLIO_PROFILE_PATH").ok();

        Self {
            gemini_api_hostname,
            gemini_api_key,
            gemini_model,
            profile_path,
        }
    }
}
