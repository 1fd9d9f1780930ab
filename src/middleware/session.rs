// src/middleware/session.rs
use std::future::{ready, Ready};
use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform}, http::header, web, Error, HttpMessage
};
use futures_util::future::LocalBoxFuture;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use secrecy::ExposeSecret;
use uuid::Uuid;

use crate::config::session::SessionSettings;
use crate::models::error::AppError;

/// Claims carried by a session token of the external session provider
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionClaims {
    pub sub: String,  // Subject (user id)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub aud: String,
    pub exp: usize,   // Expiration time (as UTC timestamp)
}

impl SessionClaims {
    /// Parse the user ID from the claims subject field.
    /// Returns None if the UUID is invalid.
    pub fn user_id(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.sub).ok()
    }
}

/// Decode and verify a bearer token against the session settings.
pub fn decode_session_token(token: &str, settings: &SessionSettings) -> Result<SessionClaims, AppError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_audience(&[settings.audience.as_str()]);

    let token_data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(settings.jwt_secret.expose_secret().as_bytes()),
        &validation,
    ).map_err(|e| {
        tracing::error!("Failed to decode session token: {:?}", e);
        AppError::Unauthorized("Invalid session token".to_string())
    })?;

    let claims = token_data.claims;
    if claims.user_id().is_none() {
        tracing::error!("Session token subject is not a user id: {}", claims.sub);
        return Err(AppError::Unauthorized("Invalid session token".to_string()));
    }

    Ok(claims)
}

/// Extracts and validates the session token of a request, returning the decoded claims.
pub fn validate_session_from_request(req: &ServiceRequest) -> Result<SessionClaims, AppError> {
    let settings = req.app_data::<web::Data<SessionSettings>>()
        .ok_or_else(|| AppError::Unauthorized("Session settings not found".to_string()))?;

    let auth_header = req.headers()
        .get(header::AUTHORIZATION)
        .ok_or_else(|| AppError::Unauthorized("No authorization header".to_string()))?
        .to_str()
        .map_err(|_| AppError::Unauthorized("Invalid authorization header".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("Invalid authorization header format".to_string()))?;

    decode_session_token(token, settings)
}

// Create the middleware
pub struct SessionMiddleware;

// Middleware factory
impl<S, B> Transform<S, ServiceRequest> for SessionMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = SessionMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionMiddlewareService { service }))
    }
}

pub struct SessionMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for SessionMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let claims = match validate_session_from_request(&req) {
            Ok(claims) => claims,
            Err(e) => return Box::pin(async move { Err(e.into()) }),
        };

        // Handlers receive the caller explicitly through `web::ReqData<SessionClaims>`
        req.extensions_mut().insert(claims);

        let fut = self.service.call(req);

        Box::pin(async move {
            let res = fut.await?;
            Ok(res)
        })
    }
}
