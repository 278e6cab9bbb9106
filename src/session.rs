use crate::domain::{ArmLevel, ArmState, History, HistoryEntry, TemperatureReading, Temperatures};
use crate::error::SessionError;
use crate::response::validate;
use crate::short_date;
use crate::urls;
use chrono::Local;
use reqwest::header::{self, HeaderValue};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::{debug, instrument};

const ACCEPT_ANY_JSON: &str = "application/json, text/javascript, */*; q=0.01";

/// Credentials for the password-authenticated endpoints, fixed for the
/// lifetime of a [`Session`].
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub panel: String,
}

/// Group identifier and server-issued session cookie value for the
/// cookie-authenticated endpoints (arming, lock configuration and logout).
#[derive(Debug, Clone)]
pub struct PanelSession {
    pub giid: String,
    pub vid: String,
}

/// A session against the vendor's app API, holding one persistent HTTP client
/// scoped to a username, password and panel.
///
/// The session keeps no login state of its own: every operation is an
/// independent request/response exchange, and the server alone decides
/// whether it is still valid, rejecting expired sessions with a non-200
/// response. Operations may be issued concurrently from shared references;
/// no ordering is guaranteed between them. Dropping the session releases the
/// client handle, while [`Session::logout`] ends the server side best-effort.
#[derive(Debug)]
pub struct Session {
    client: Client,
    credentials: Credentials,
    panel_session: Option<PanelSession>,
    base_url: String,
}

pub struct SessionBuilder {
    credentials: Credentials,
    panel_session: Option<PanelSession>,
    base_url: String,
}

impl SessionBuilder {
    /// Sets the giid and vid pair required by the cookie-authenticated
    /// endpoints. Without it those endpoints fail with
    /// [`SessionError::Login`].
    pub fn panel_session(mut self, giid: impl Into<String>, vid: impl Into<String>) -> Self {
        self.panel_session = Some(PanelSession {
            giid: giid.into(),
            vid: vid.into(),
        });
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub async fn build(self) -> Result<Session, SessionError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static(ACCEPT_ANY_JSON));

        let client = Client::builder().default_headers(headers).build()?;
        Ok(Session {
            client,
            credentials: self.credentials,
            panel_session: self.panel_session,
            base_url: self.base_url,
        })
    }
}

impl Session {
    /// Creates a session for the given username, password and panel id
    /// against the vendor host.
    pub async fn create(
        username: impl Into<String>,
        password: impl Into<String>,
        panel: impl Into<String>,
    ) -> Result<Session, SessionError> {
        Session::builder(username, password, panel).build().await
    }

    pub fn builder(username: impl Into<String>, password: impl Into<String>, panel: impl Into<String>) -> SessionBuilder {
        SessionBuilder {
            credentials: Credentials {
                username: username.into(),
                password: password.into(),
                panel: panel.into(),
            },
            panel_session: None,
            base_url: urls::BASE_URL.to_string(),
        }
    }

    /// Reads the arm state of the panel, with the report time normalized to
    /// an absolute timestamp.
    #[instrument(skip(self))]
    pub async fn arm_state(&self) -> Result<ArmState, SessionError> {
        let mut state: ArmState = self.fetch(self.client.get(urls::status(&self.base_url, &self.credentials))).await?;
        state.time = short_date::to_iso(&state.time, Local::now().naive_local())?;
        Ok(state)
    }

    /// Reads the temperature sensors, narrowed to a single sensor when
    /// `device_label` is given. An unknown serial number yields an empty
    /// list.
    #[instrument(skip(self))]
    pub async fn temperatures(&self, device_label: Option<&str>) -> Result<Vec<TemperatureReading>, SessionError> {
        let mut response: Temperatures = self
            .fetch(self.client.get(urls::temperatures(&self.base_url, &self.credentials)))
            .await?;

        if let Some(label) = device_label {
            response.readings.retain(|reading| reading.serial_no == label);
        }
        Ok(response.readings)
    }

    /// Reads the ethernet status of the panel.
    #[instrument(skip(self))]
    pub async fn ethernet_status(&self) -> Result<Value, SessionError> {
        self.fetch(self.client.get(urls::ethernet_status(&self.base_url, &self.credentials))).await
    }

    /// Lists the door lock devices registered to the panel.
    #[instrument(skip(self))]
    pub async fn lock_devices(&self) -> Result<Value, SessionError> {
        self.fetch(self.client.get(urls::lock_devices(&self.base_url, &self.credentials))).await
    }

    /// Reads the state of every door lock registered to the panel.
    #[instrument(skip(self))]
    pub async fn lock_status(&self) -> Result<Value, SessionError> {
        self.fetch(self.client.get(urls::lock_status(&self.base_url, &self.credentials))).await
    }

    /// Arms or disarms the panel. The personal code (four or six digits) is
    /// passed through as-is; the server is the authority on rejecting codes
    /// and states it does not accept.
    #[instrument(skip(self, code))]
    pub async fn set_arm_state(&self, code: &str, state: ArmLevel) -> Result<Value, SessionError> {
        let panel_session = self.require_panel_session()?;
        debug!("Setting arm state to {}", state);

        let request = self
            .client
            .put(urls::set_arm_state(&self.base_url, &panel_session.giid))
            .header(header::COOKIE, format!("vid={}", panel_session.vid))
            .json(&json!({ "code": code, "state": state }));
        self.fetch(request).await
    }

    /// Reads recent events from the panel's log, skipping the first `offset`
    /// entries. Every entry's time is normalized to an absolute timestamp; an
    /// entry whose time does not match any short date form fails the whole
    /// call.
    #[instrument(skip(self))]
    pub async fn history(&self, offset: u32) -> Result<Vec<HistoryEntry>, SessionError> {
        let request = self
            .client
            .get(urls::history(&self.base_url, &self.credentials))
            .query(&[("startIndex", offset)]);
        let history: History = self.fetch(request).await?;
        debug!("Retrieved {} log entries", history.logs.len());

        let now = Local::now().naive_local();
        history
            .logs
            .into_iter()
            .map(|mut entry| {
                entry.time = short_date::to_iso(&entry.time, now)?;
                Ok(entry)
            })
            .collect()
    }

    /// Locks the door lock identified by `serial_no`.
    #[instrument(skip(self, code))]
    pub async fn lock_door(&self, serial_no: &str, code: &str) -> Result<Value, SessionError> {
        self.fetch(self.client.get(urls::lock_door(&self.base_url, &self.credentials, serial_no, code)))
            .await
    }

    /// Unlocks the door lock identified by `serial_no`.
    #[instrument(skip(self, code))]
    pub async fn unlock_door(&self, serial_no: &str, code: &str) -> Result<Value, SessionError> {
        self.fetch(self.client.get(urls::unlock_door(&self.base_url, &self.credentials, serial_no, code)))
            .await
    }

    /// Reads the configuration of the door lock identified by
    /// `device_label`.
    #[instrument(skip(self))]
    pub async fn lock_config(&self, device_label: &str) -> Result<Value, SessionError> {
        let panel_session = self.require_panel_session()?;
        let request = self
            .client
            .get(urls::lock_config(&self.base_url, &panel_session.giid, device_label))
            .header(header::COOKIE, format!("vid={}", panel_session.vid));
        self.fetch(request).await
    }

    /// Ends the server-side session. Best-effort: a non-200 response
    /// propagates as [`SessionError::Response`], and the client handle itself
    /// is only released once the session is dropped.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<(), SessionError> {
        let panel_session = self.require_panel_session()?;
        let request = self
            .client
            .delete(urls::login(&self.base_url))
            .header(header::COOKIE, format!("vid={}", panel_session.vid));

        let response = request.send().await?;
        validate(response).await?;
        Ok(())
    }

    /// Issues a single request and decodes the validated payload. No retries,
    /// no timeouts beyond what the transport enforces.
    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, SessionError> {
        let response = request.send().await?;
        let payload = validate(response).await?;
        Ok(serde_json::from_value(payload)?)
    }

    fn require_panel_session(&self) -> Result<&PanelSession, SessionError> {
        self.panel_session
            .as_ref()
            .ok_or_else(|| SessionError::Login("endpoint requires a panel session (giid and vid)".to_string()))
    }
}
