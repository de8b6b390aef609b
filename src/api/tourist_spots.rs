use actix_web::{web, HttpResponse, Responder};
use mongodb::bson::{oid::ObjectId, Document};

use crate::database::MongoDB;
use crate::models::{MySpotsRequest, SpotsByCountryRequest};
use crate::services::tourist_spot_service;

/// GET /all-tourist-spots - Lista todos os spots cadastrados
#[utoipa::path(
    get,
    path = "/all-tourist-spots",
    tag = "Tourist Spots",
    responses(
        (status = 200, description = "All tourist spots", body = Vec<Object>),
        (status = 500, description = "Database failure")
    )
)]
pub async fn get_all_spots(db: web::Data<MongoDB>) -> impl Responder {
    match tourist_spot_service::get_all_spots(&db).await {
        Ok(spots) => HttpResponse::Ok().json(spots),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "success": false,
            "error": e
        })),
    }
}

/// GET /all-tourist-spots/top - Os 6 spots mais visitados
#[utoipa::path(
    get,
    path = "/all-tourist-spots/top",
    tag = "Tourist Spots",
    responses(
        (status = 200, description = "Up to 6 spots, most visited first", body = Vec<Object>),
        (status = 500, description = "Database failure")
    )
)]
pub async fn get_top_spots(db: web::Data<MongoDB>) -> impl Responder {
    match tourist_spot_service::get_top_spots(&db).await {
        Ok(spots) => HttpResponse::Ok().json(spots),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "success": false,
            "error": e
        })),
    }
}

/// GET /tourist-spot/{id} - Busca um spot pelo id
#[utoipa::path(
    get,
    path = "/tourist-spot/{id}",
    tag = "Tourist Spots",
    params(("id" = String, Path, description = "Spot ObjectId (hex)")),
    responses(
        (status = 200, description = "The spot, or null when not found", body = Object),
        (status = 400, description = "Invalid id"),
        (status = 500, description = "Database failure")
    )
)]
pub async fn get_spot(path: web::Path<String>, db: web::Data<MongoDB>) -> impl Responder {
    let object_id = match ObjectId::parse_str(path.into_inner()) {
        Ok(id) => id,
        Err(_) => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "success": false,
                "error": "Invalid tourist spot ID"
            }));
        }
    };

    match tourist_spot_service::get_spot_by_id(&db, object_id).await {
        Ok(spot) => HttpResponse::Ok().json(spot),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "success": false,
            "error": e
        })),
    }
}

/// POST /my-spots - Spots enviados por um usuário (filtro por `userEmail`)
#[utoipa::path(
    post,
    path = "/my-spots",
    tag = "Tourist Spots",
    request_body = MySpotsRequest,
    responses(
        (status = 200, description = "Spots submitted by the given user", body = Vec<Object>),
        (status = 500, description = "Database failure")
    )
)]
pub async fn get_my_spots(
    body: web::Json<MySpotsRequest>,
    db: web::Data<MongoDB>,
) -> impl Responder {
    match tourist_spot_service::get_spots_by_email(&db, &body.email).await {
        Ok(spots) => HttpResponse::Ok().json(spots),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "success": false,
            "error": e
        })),
    }
}

/// POST /spots-by-country - Spots de um país (filtro por `countryName`)
#[utoipa::path(
    post,
    path = "/spots-by-country",
    tag = "Tourist Spots",
    request_body = SpotsByCountryRequest,
    responses(
        (status = 200, description = "Spots referencing the given country", body = Vec<Object>),
        (status = 500, description = "Database failure")
    )
)]
pub async fn get_spots_by_country(
    body: web::Json<SpotsByCountryRequest>,
    db: web::Data<MongoDB>,
) -> impl Responder {
    match tourist_spot_service::get_spots_by_country(&db, &body.country_name).await {
        Ok(spots) => HttpResponse::Ok().json(spots),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "success": false,
            "error": e
        })),
    }
}

/// POST /add-tourist-spot - Insere um spot com os campos enviados, como estão
#[utoipa::path(
    post,
    path = "/add-tourist-spot",
    tag = "Tourist Spots",
    request_body = Object,
    responses(
        (status = 200, description = "Insert acknowledgement with the new id"),
        (status = 500, description = "Database failure")
    )
)]
pub async fn add_spot(body: web::Json<Document>, db: web::Data<MongoDB>) -> impl Responder {
    match tourist_spot_service::create_spot(&db, body.into_inner()).await {
        Ok(result) => {
            let inserted_id = result.inserted_id.as_object_id().map(|oid| oid.to_hex());

            HttpResponse::Ok().json(serde_json::json!({
                "acknowledged": true,
                "insertedId": inserted_id
            }))
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "success": false,
            "error": e
        })),
    }
}

/// DELETE /my-spots/{id} - Remove um spot; id inexistente devolve count zero
#[utoipa::path(
    delete,
    path = "/my-spots/{id}",
    tag = "Tourist Spots",
    params(("id" = String, Path, description = "Spot ObjectId (hex)")),
    responses(
        (status = 200, description = "Delete acknowledgement with the removed count"),
        (status = 400, description = "Invalid id"),
        (status = 500, description = "Database failure")
    )
)]
pub async fn delete_spot(path: web::Path<String>, db: web::Data<MongoDB>) -> impl Responder {
    let object_id = match ObjectId::parse_str(path.into_inner()) {
        Ok(id) => id,
        Err(_) => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "success": false,
                "error": "Invalid tourist spot ID"
            }));
        }
    };

    match tourist_spot_service::delete_spot(&db, object_id).await {
        Ok(result) => HttpResponse::Ok().json(serde_json::json!({
            "acknowledged": true,
            "deletedCount": result.deleted_count
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "success": false,
            "error": e
        })),
    }
}

/// PUT /update-tourist-spot/{id} - `$set` dos campos enviados, upsert se o
/// id não existir. `_id` no corpo é descartado antes do update.
#[utoipa::path(
    put,
    path = "/update-tourist-spot/{id}",
    tag = "Tourist Spots",
    request_body = Object,
    params(("id" = String, Path, description = "Spot ObjectId (hex)")),
    responses(
        (status = 200, description = "Update acknowledgement (matched/modified/upserted)"),
        (status = 400, description = "Invalid id"),
        (status = 500, description = "Database failure")
    )
)]
pub async fn update_spot(
    path: web::Path<String>,
    body: web::Json<Document>,
    db: web::Data<MongoDB>,
) -> impl Responder {
    let object_id = match ObjectId::parse_str(path.into_inner()) {
        Ok(id) => id,
        Err(_) => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "success": false,
                "error": "Invalid tourist spot ID"
            }));
        }
    };

    match tourist_spot_service::update_spot(&db, object_id, body.into_inner(), true).await {
        Ok(result) => {
            let upserted_id = result
                .upserted_id
                .as_ref()
                .and_then(|id| id.as_object_id())
                .map(|oid| oid.to_hex());

            HttpResponse::Ok().json(serde_json::json!({
                "acknowledged": true,
                "matchedCount": result.matched_count,
                "modifiedCount": result.modified_count,
                "upsertedId": upserted_id
            }))
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "success": false,
            "error": e
        })),
    }
}
