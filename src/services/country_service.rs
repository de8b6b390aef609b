use futures::stream::StreamExt;
use mongodb::bson::doc;

use crate::database::MongoDB;
use crate::models::Country;

pub async fn get_all_countries(db: &MongoDB) -> Result<Vec<Country>, String> {
    let mut cursor = db
        .countries()
        .find(doc! {})
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    let mut countries = Vec::new();

    while let Some(result) = cursor.next().await {
        match result {
            Ok(country) => countries.push(country),
            Err(e) => log::error!("Error reading country: {}", e),
        }
    }

    Ok(countries)
}
