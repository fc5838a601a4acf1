use chrono::{DateTime, Utc};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi, ToSchema};
use uuid::Uuid;

use crate::routes::users::UserOutput;

/// Doc mirror of `common::types::Health`; kept in step by a test below.
#[derive(ToSchema)]
pub struct HealthResponse { pub status: String, pub version: String }

#[derive(ToSchema)]
pub struct CreateUserDoc { pub name: String, pub email: String, pub password: String }

#[derive(ToSchema)]
pub struct GetJwtDoc { pub email: String, pub password: String }

#[derive(ToSchema)]
pub struct AccessTokenDoc { pub access_token: String }

/// Create and update share one body shape.
#[derive(ToSchema)]
pub struct ProductInputDoc { pub name: String, pub price: f64 }

#[derive(ToSchema)]
pub struct ProductDoc {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

/// Registers the `bearer_auth` scheme referenced by the product routes.
pub struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::users::create_user,
        crate::routes::users::generate_token,
        crate::routes::products::list,
        crate::routes::products::create,
        crate::routes::products::get,
        crate::routes::products::update,
        crate::routes::products::delete,
    ),
    components(
        schemas(
            HealthResponse,
            CreateUserDoc,
            GetJwtDoc,
            AccessTokenDoc,
            ProductInputDoc,
            ProductDoc,
            UserOutput,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "health"),
        (name = "users"),
        (name = "products")
    )
)]
pub struct ApiDoc;
