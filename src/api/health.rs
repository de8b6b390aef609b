use actix_web::{HttpResponse, Responder};

#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses(
        (status = 200, description = "Service is up", body = String)
    )
)]
pub async fn liveness() -> impl Responder {
    HttpResponse::Ok().body("Tourify backend is working ✅")
}
