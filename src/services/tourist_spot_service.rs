use futures::stream::StreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::results::{DeleteResult, InsertOneResult, UpdateResult};

use crate::database::MongoDB;

/// Quantos documentos a query "top" retorna no máximo
pub const TOP_SPOTS_LIMIT: i64 = 6;

/// Campo numérico usado para ordenar a query "top"
pub const VISITORS_FIELD: &str = "totalVisitorsPerYear";

pub async fn get_all_spots(db: &MongoDB) -> Result<Vec<Document>, String> {
    find_spots(db, doc! {}, None).await
}

/// Spots mais visitados: ordena por `totalVisitorsPerYear` decrescente,
/// limitado a `TOP_SPOTS_LIMIT` documentos.
pub async fn get_top_spots(db: &MongoDB) -> Result<Vec<Document>, String> {
    let options = mongodb::options::FindOptions::builder()
        .sort(doc! { VISITORS_FIELD: -1 })
        .limit(TOP_SPOTS_LIMIT)
        .build();

    find_spots(db, doc! {}, Some(options)).await
}

pub async fn get_spot_by_id(db: &MongoDB, id: ObjectId) -> Result<Option<Document>, String> {
    db.tourist_spots()
        .find_one(doc! { "_id": id })
        .await
        .map_err(|e| format!("Database error: {}", e))
}

pub async fn get_spots_by_email(db: &MongoDB, email: &str) -> Result<Vec<Document>, String> {
    find_spots(db, doc! { "userEmail": email }, None).await
}

pub async fn get_spots_by_country(
    db: &MongoDB,
    country_name: &str,
) -> Result<Vec<Document>, String> {
    find_spots(db, doc! { "countryName": country_name }, None).await
}

/// Insere um documento de forma livre, exatamente como foi recebido
pub async fn create_spot(db: &MongoDB, spot: Document) -> Result<InsertOneResult, String> {
    db.tourist_spots()
        .insert_one(spot)
        .await
        .map_err(|e| format!("Database error: {}", e))
}

/// Deletar um id inexistente não é erro: `deleted_count` fica em zero
pub async fn delete_spot(db: &MongoDB, id: ObjectId) -> Result<DeleteResult, String> {
    db.tourist_spots()
        .delete_one(doc! { "_id": id })
        .await
        .map_err(|e| format!("Database error: {}", e))
}

/// Aplica um `$set` com os campos recebidos. `create_if_missing` controla o
/// upsert: com `true`, um id sem documento correspondente cria um novo.
pub async fn update_spot(
    db: &MongoDB,
    id: ObjectId,
    updates: Document,
    create_if_missing: bool,
) -> Result<UpdateResult, String> {
    let updates = sanitize_update(updates);

    db.tourist_spots()
        .update_one(doc! { "_id": id }, doc! { "$set": updates })
        .upsert(create_if_missing)
        .await
        .map_err(|e| format!("Database error: {}", e))
}

/// Remove `_id` do corpo do update — o identificador é imutável e um `$set`
/// contendo `_id` faria a operação inteira falhar no servidor.
pub fn sanitize_update(mut updates: Document) -> Document {
    updates.remove("_id");
    updates
}

async fn find_spots(
    db: &MongoDB,
    filter: Document,
    options: Option<mongodb::options::FindOptions>,
) -> Result<Vec<Document>, String> {
    let mut cursor = db
        .tourist_spots()
        .find(filter)
        .with_options(options)
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    let mut spots = Vec::new();

    while let Some(result) = cursor.next().await {
        match result {
            Ok(spot) => spots.push(spot),
            Err(e) => log::error!("Error reading tourist spot: {}", e),
        }
    }

    Ok(spots)
}
