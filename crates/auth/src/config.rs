//! Authorization configuration.

/// Settings for token verification, loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Issuer base URL with trailing slash, e.g. `https://tenant.auth0.com/`.
    /// Also the expected `iss` claim.
    pub issuer: String,
    /// Expected `aud` claim.
    pub audience: String,
    /// OAuth client id. Only needed to assemble the hosted-login URL.
    pub client_id: Option<String>,
    /// Redirect URI for the hosted-login URL.
    pub callback_url: Option<String>,
}

impl AuthConfig {
    /// Load authorization configuration from environment variables.
    ///
    /// | Env Var                | Required | Notes                           |
    /// |------------------------|----------|---------------------------------|
    /// | `AUTH_ISSUER_BASE_URL` | **yes**  | trailing slash added if missing |
    /// | `AUTH_AUDIENCE`        | **yes**  |                                 |
    /// | `AUTH_CLIENT_ID`       | no       | hosted-login URL only           |
    /// | `AUTH_CALLBACK_URL`    | no       | hosted-login URL only           |
    ///
    /// # Panics
    ///
    /// Panics if a required variable is not set.
    pub fn from_env() -> Self {
        let mut issuer = std::env::var("AUTH_ISSUER_BASE_URL")
            .expect("AUTH_ISSUER_BASE_URL must be set in the environment");
        if !issuer.ends_with('/') {
            issuer.push('/');
        }

        let audience =
            std::env::var("AUTH_AUDIENCE").expect("AUTH_AUDIENCE must be set in the environment");

        Self {
            issuer,
            audience,
            client_id: std::env::var("AUTH_CLIENT_ID").ok(),
            callback_url: std::env::var("AUTH_CALLBACK_URL").ok(),
        }
    }

    /// URL of the issuer's JWKS document.
    pub fn jwks_url(&self) -> String {
        format!("{}.well-known/jwks.json", self.issuer)
    }

    /// Hosted-login URL where a client obtains a token interactively.
    ///
    /// Returns `None` unless both `client_id` and `callback_url` are
    /// configured.
    pub fn login_url(&self) -> Option<String> {
        let client_id = self.client_id.as_deref()?;
        let callback_url = self.callback_url.as_deref()?;
        Some(format!(
            "{}authorize?audience={}&response_type=token&client_id={}&redirect_uri={}",
            self.issuer, self.audience, client_id, callback_url
        ))
    }
}
