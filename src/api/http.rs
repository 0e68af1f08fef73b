use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{
    domain::session::{AuthGrant, User},
    infra::{config::ApiConfig, error::AppError},
    usecases::contracts::{AuthApi, AuthApiError},
};

const ME_PATH: &str = "/auth/me";
const LOGIN_PATH: &str = "/auth/login";
const REGISTER_PATH: &str = "/auth/register";
const SEND_OTP_PATH: &str = "/auth/send-otp";
const VERIFY_OTP_PATH: &str = "/auth/verify-otp";

#[derive(Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RegisterBody<'a> {
    email: &'a str,
    password: &'a str,
    full_name: &'a str,
}

#[derive(Serialize)]
struct SendOtpBody<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct VerifyOtpBody<'a> {
    email: &'a str,
    otp: &'a str,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// reqwest-backed [`AuthApi`].
#[derive(Debug, Clone)]
pub struct HttpAuthApi {
    client: Client,
    base_url: String,
}

impl HttpAuthApi {
    pub fn new(config: &ApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(concat!("prepdesk/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|error| AppError::HttpClientInit {
                details: error.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Response, AuthApiError> {
        self.send(path, self.client.post(self.url(path)).json(body))
            .await
    }

    async fn send(&self, path: &str, request: RequestBuilder) -> Result<Response, AuthApiError> {
        let response = request.send().await.map_err(|error| {
            tracing::warn!(path, error = %error, "account backend request failed");
            map_transport_error(error)
        })?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(path, status = status.as_u16(), "account backend responded");
            return Ok(response);
        }

        let message = rejection_message(status, response).await;
        tracing::debug!(path, status = status.as_u16(), "account backend rejected request");
        Err(AuthApiError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    async fn current_user(&self, token: Option<&str>) -> Result<User, AuthApiError> {
        let mut request = self.client.get(self.url(ME_PATH));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = self
            .send(ME_PATH, request)
            .await
            .map_err(|error| match error {
                AuthApiError::Rejected { status, .. }
                    if status == StatusCode::UNAUTHORIZED.as_u16()
                        || status == StatusCode::FORBIDDEN.as_u16() =>
                {
                    AuthApiError::Unauthorized
                }
                other => other,
            })?;

        decode(response).await
    }

    async fn login(&self, email: &str, password: &str) -> Result<AuthGrant, AuthApiError> {
        let response = self
            .post(LOGIN_PATH, &LoginBody { email, password })
            .await?;

        decode(response).await
    }

    async fn register(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<AuthGrant, AuthApiError> {
        let body = RegisterBody {
            email,
            password,
            full_name,
        };
        let response = self.post(REGISTER_PATH, &body).await?;

        decode(response).await
    }

    async fn send_otp(&self, email: &str) -> Result<(), AuthApiError> {
        self.post(SEND_OTP_PATH, &SendOtpBody { email }).await?;
        Ok(())
    }

    async fn verify_otp(&self, email: &str, otp: &str) -> Result<(), AuthApiError> {
        self.post(VERIFY_OTP_PATH, &VerifyOtpBody { email, otp })
            .await?;
        Ok(())
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, AuthApiError> {
    response
        .json::<T>()
        .await
        .map_err(|error| AuthApiError::Decode {
            message: error.to_string(),
        })
}

async fn rejection_message(status: StatusCode, response: Response) -> String {
    let fallback = status
        .canonical_reason()
        .unwrap_or("request rejected")
        .to_owned();

    match response.json::<ErrorBody>().await {
        Ok(ErrorBody {
            message: Some(message),
            ..
        })
        | Ok(ErrorBody {
            error: Some(message),
            ..
        }) if !message.trim().is_empty() => message,
        _ => fallback,
    }
}

fn map_transport_error(error: reqwest::Error) -> AuthApiError {
    AuthApiError::Transport {
        message: error.to_string(),
    }
}
