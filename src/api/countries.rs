use actix_web::{web, HttpResponse, Responder};

use crate::database::MongoDB;
use crate::models::Country;
use crate::services::country_service;

/// GET /countries - Lista os países de referência
#[utoipa::path(
    get,
    path = "/countries",
    tag = "Countries",
    responses(
        (status = 200, description = "All reference countries", body = Vec<Country>),
        (status = 500, description = "Database failure")
    )
)]
pub async fn get_countries(db: web::Data<MongoDB>) -> impl Responder {
    match country_service::get_all_countries(&db).await {
        Ok(countries) => HttpResponse::Ok().json(countries),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "success": false,
            "error": e
        })),
    }
}
