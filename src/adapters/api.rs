use crate::domain::model::{AuthSession, Booking, NewBooking, Venue, VenuePage};
use crate::domain::ports::{
    AuthGateway, BookingGateway, ConfigProvider, CredentialProvider, VenueDirectory,
};
use crate::utils::error::{HolidazeError, Result};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

const API_KEY_HEADER: &str = "X-Noroff-API-Key";

/// Response envelope shared by every Noroff v2 endpoint.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
    #[serde(default)]
    meta: Option<PageMeta>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageMeta {
    #[serde(default)]
    current_page: u32,
    #[serde(default)]
    page_count: u32,
    #[serde(default)]
    is_last_page: bool,
    #[serde(default)]
    total_count: u64,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    errors: Vec<ApiErrorMessage>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorMessage {
    message: String,
}

#[derive(Debug, serde::Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// HTTP client for the Holidaze API, implementing the gateway ports.
///
/// Attaches the `X-Noroff-API-Key` header when configured and a bearer token
/// on authenticated endpoints; a missing token fails locally before any
/// request goes out.
pub struct HolidazeClient<C, P> {
    config: C,
    credentials: P,
    client: Client,
}

impl<C: ConfigProvider, P: CredentialProvider> HolidazeClient<C, P> {
    pub fn new(config: C, credentials: P) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .build()?;
        Ok(Self {
            config,
            credentials,
            client,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        let base = self.config.base_url().trim_end_matches('/');
        Ok(Url::parse(&format!("{}/{}", base, path))?)
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let mut request = self.client.request(method, self.endpoint(path)?);
        if let Some(key) = self.config.api_key() {
            request = request.header(API_KEY_HEADER, key);
        }
        Ok(request)
    }

    fn authed(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let token = self
            .credentials
            .access_token()
            .ok_or_else(|| HolidazeError::AuthError {
                message: "no access token in the session store".to_string(),
            })?;
        Ok(self.request(method, path)?.bearer_auth(token))
    }

    async fn parse_data<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::rejection(status, response).await);
        }
        let envelope: Envelope<T> = response.json().await?;
        Ok(envelope.data)
    }

    /// Map a non-success response to an error, preferring the message the API
    /// itself put in the body.
    async fn rejection(status: StatusCode, response: Response) -> HolidazeError {
        let message = response
            .json::<ApiErrorBody>()
            .await
            .ok()
            .and_then(|body| body.errors.into_iter().next())
            .map(|e| e.message)
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("unexpected response")
                    .to_string()
            });

        // The server's conflict check runs against fresher state than the
        // local validator ever saw; its verdict is authoritative.
        if status == StatusCode::CONFLICT {
            HolidazeError::BookingConflictError { message }
        } else {
            HolidazeError::RequestRejectedError {
                status: status.as_u16(),
                message,
            }
        }
    }
}

#[async_trait]
impl<C: ConfigProvider, P: CredentialProvider> VenueDirectory for HolidazeClient<C, P> {
    async fn venues(&self, page: u32) -> Result<VenuePage> {
        let path = format!(
            "holidaze/venues?limit={}&page={}",
            self.config.page_size(),
            page
        );
        tracing::debug!("📡 GET {}", path);
        let response = self.request(Method::GET, &path)?.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::rejection(status, response).await);
        }

        let envelope: Envelope<Vec<Venue>> = response.json().await?;
        let meta = envelope.meta.unwrap_or_default();
        Ok(VenuePage {
            venues: envelope.data,
            current_page: meta.current_page.max(page),
            // Treat absent pagination meta as a single-page catalog.
            is_last_page: meta.is_last_page || meta.page_count <= page,
            page_count: meta.page_count,
            total_count: meta.total_count,
        })
    }

    async fn venue_with_bookings(&self, venue_id: &str) -> Result<Venue> {
        let path = format!("holidaze/venues/{}?_bookings=true", venue_id);
        tracing::debug!("📡 GET {}", path);
        let response = self.request(Method::GET, &path)?.send().await?;
        Self::parse_data(response).await
    }
}

#[async_trait]
impl<C: ConfigProvider, P: CredentialProvider> BookingGateway for HolidazeClient<C, P> {
    async fn create_booking(&self, new_booking: &NewBooking) -> Result<Booking> {
        tracing::debug!("📡 POST holidaze/bookings for venue {}", new_booking.venue_id);
        let response = self
            .authed(Method::POST, "holidaze/bookings")?
            .json(new_booking)
            .send()
            .await?;
        Self::parse_data(response).await
    }

    async fn cancel_booking(&self, booking_id: &str) -> Result<()> {
        let path = format!("holidaze/bookings/{}", booking_id);
        tracing::debug!("📡 DELETE {}", path);
        let response = self.authed(Method::DELETE, &path)?.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::rejection(status, response).await);
        }
        Ok(())
    }

    async fn profile_bookings(&self, profile_name: &str) -> Result<Vec<Booking>> {
        let path = format!("holidaze/profiles/{}/bookings?_venue=true", profile_name);
        tracing::debug!("📡 GET {}", path);
        let response = self.authed(Method::GET, &path)?.send().await?;
        Self::parse_data(response).await
    }
}

#[async_trait]
impl<C: ConfigProvider, P: CredentialProvider> AuthGateway for HolidazeClient<C, P> {
    async fn login(&self, email: &str, password: &str) -> Result<AuthSession> {
        let response = self
            .request(Method::POST, "auth/login")?
            .json(&LoginRequest { email, password })
            .send()
            .await?;
        Self::parse_data(response).await
    }
}
