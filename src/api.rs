// API client module: a small blocking HTTP client that talks to the ZVM
// REST API. A session is opened with Basic Auth and the returned token is
// sent back in the `x-zerto-session` header on every later call.

use std::fmt;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use tracing::{debug, info, warn};

use crate::config::Credentials;
use crate::error::{AuthError, ConfigError, QueryError};
use crate::rpo::Vpg;

/// Port the ZVM REST API listens on.
pub const DEFAULT_PORT: u16 = 9669;

/// Header carrying the session token, both in the login response and on
/// authenticated requests.
pub const SESSION_HEADER: &str = "x-zerto-session";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Opaque session token issued by the ZVM.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(<redacted>)")
    }
}

/// Transport settings for [`ApiClient::new`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub timeout: Duration,
    /// Accept self-signed or otherwise invalid TLS certificates.
    pub accept_invalid_certs: bool,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            accept_invalid_certs: false,
        }
    }
}

/// Build the API base URL. A `server` that already carries a scheme is used
/// as is, otherwise `https://{server}:{port}`.
pub fn base_url(server: &str, port: u16) -> String {
    if server.contains("://") {
        server.trim_end_matches('/').to_string()
    } else {
        format!("https://{}:{}", server, port)
    }
}

/// Holds a reqwest blocking client, the base URL of the ZVM and the session
/// token once logged in.
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<SessionToken>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, opts: &ClientOptions) -> Result<Self, ConfigError> {
        if opts.accept_invalid_certs {
            warn!("TLS certificate validation is disabled");
        }
        let client = Client::builder()
            .timeout(opts.timeout)
            .cookie_store(true)
            .danger_accept_invalid_certs(opts.accept_invalid_certs)
            .build()
            .map_err(ConfigError::Client)?;
        Ok(ApiClient {
            client,
            base_url: base_url.into(),
            token: None,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns whether a session token is present in the client.
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Open a session with `POST /v1/session/add`. The token is kept for
    /// subsequent calls and also returned.
    pub fn login(&mut self, creds: &Credentials) -> Result<SessionToken, AuthError> {
        let url = format!("{}/v1/session/add", &self.base_url);
        info!(%url, user = %creds.username, "opening ZVM session");
        let res = self
            .client
            .post(&url)
            .basic_auth(&creds.username, Some(&creds.password))
            .send()
            .map_err(AuthError::Transport)?;

        if res.status() != StatusCode::OK {
            let status = res.status();
            let body = res.text().unwrap_or_default();
            return Err(AuthError::Rejected { status, body });
        }

        let token = res
            .headers()
            .get(SESSION_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .map(|v| SessionToken(v.to_string()))
            .ok_or(AuthError::MissingToken)?;
        debug!("session token received");

        self.token = Some(token.clone());
        Ok(token)
    }

    /// Fetch every VPG with `GET /v1/vpgs`. Requires a prior [`login`].
    ///
    /// [`login`]: ApiClient::login
    pub fn list_vpgs(&self) -> Result<Vec<Vpg>, QueryError> {
        let token = self.token.as_ref().ok_or(QueryError::NotAuthenticated)?;
        let url = format!("{}/v1/vpgs", &self.base_url);
        info!(%url, "querying VPGs");
        let res = self
            .client
            .get(&url)
            .header(SESSION_HEADER, token.as_str())
            .send()
            .map_err(QueryError::Transport)?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().unwrap_or_default();
            return Err(QueryError::Status { status, body });
        }

        let vpgs: Vec<Vpg> = res.json().map_err(|e| {
            if e.is_decode() {
                QueryError::Decode(e)
            } else {
                QueryError::Transport(e)
            }
        })?;
        debug!(count = vpgs.len(), "decoded VPG list");
        Ok(vpgs)
    }
}
