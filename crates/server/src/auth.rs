use std::sync::Arc;

use axum::{extract::{Request, State}, http::header, middleware::Next, response::Response};
use sea_orm::DatabaseConnection;
use service::auth::repo::seaorm::SeaOrmUserRepository;
use service::auth::repository::UserRepository;
use service::auth::{AuthService, TokenIssuer};
use service::product::repository::{ProductRepository, SeaOrmProductRepository};
use service::product::ProductService;

use crate::errors::JsonApiError;

/// Shared handler state; built once by the composition root.
#[derive(Clone)]
pub struct ServerState {
    pub products: Arc<ProductService<dyn ProductRepository>>,
    pub users: Arc<AuthService<dyn UserRepository>>,
    pub tokens: TokenIssuer,
}

impl ServerState {
    pub fn new(
        products: Arc<dyn ProductRepository>,
        users: Arc<dyn UserRepository>,
        tokens: TokenIssuer,
        jwt_expires_in: i64,
    ) -> Self {
        Self {
            products: Arc::new(ProductService::new(products)),
            users: Arc::new(AuthService::new(users, tokens.clone(), jwt_expires_in)),
            tokens,
        }
    }

    /// State backed by SeaORM repositories sharing one connection pool.
    pub fn with_database(db: DatabaseConnection, tokens: TokenIssuer, jwt_expires_in: i64) -> Self {
        let products: Arc<dyn ProductRepository> = Arc::new(SeaOrmProductRepository { db: db.clone() });
        let users: Arc<dyn UserRepository> = Arc::new(SeaOrmUserRepository { db });
        Self::new(products, users, tokens, jwt_expires_in)
    }
}

/// Route middleware: require `Authorization: Bearer <token>` with a valid, unexpired token.
/// Verified claims are stored in the request extensions.
pub async fn require_bearer_token(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, JsonApiError> {
    let path = req.uri().path().to_string();

    let token = match req.headers().get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()) {
        Some(h) => match h.strip_prefix("Bearer ") {
            Some(t) if !t.trim().is_empty() => t.trim().to_string(),
            _ => {
                tracing::warn!(path = %path, "invalid Authorization format (expect Bearer)");
                return Err(JsonApiError::unauthorized("expected a Bearer token"));
            }
        },
        None => {
            tracing::warn!(path = %path, "missing Authorization header");
            return Err(JsonApiError::unauthorized("missing Authorization header"));
        }
    };

    match state.tokens.verify_token(&token) {
        Ok(claims) => {
            tracing::debug!(path = %path, sub = %claims.sub, "token accepted");
            req.extensions_mut().insert(claims);
            Ok(next.run(req).await)
        }
        Err(e) => {
            tracing::warn!(path = %path, err = %e, "token validation failed");
            Err(JsonApiError::unauthorized("invalid or expired token"))
        }
    }
}
