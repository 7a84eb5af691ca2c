use actix_web::web::{self, ServiceConfig};
use actix_web::{HttpResponse, Responder};
use utoipa::OpenApi;
use utoipa_swagger_ui::{SwaggerUi, Url};

use crate::api::Definition;
use crate::controllers;
use crate::errors::ApiError;

pub fn route(app: &mut ServiceConfig) {
    // schema violations in JSON bodies surface as 422, not actix's default 400
    app.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        ApiError::Validation {
            errors: vec![err.to_string()],
        }
        .into()
    }));

    app.service(index);
    // Question
    app.service(controllers::v1::question::index);
    app.service(controllers::v1::question::show);
    // Response
    app.service(controllers::v1::response::store);
    app.service(controllers::v1::response::index);

    // Health check endpoint
    app.service(controllers::health::health);

    // must at the end!
    app.service(web::redirect("/docs", "/docs/"));
    app.service(SwaggerUi::new("/docs/{_:.*}").urls(vec![(
        Url::new("Voting API", "/api.json"),
        Definition::openapi(),
    )]));
}

#[get("/api")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "message": "Voting API is running" }))
}
