use mongodb::bson::doc;

use crate::database::MongoDB;
use crate::models::Country;

/// Seed da lista de países de referência.
/// Só insere se a collection `countries` estiver vazia — idempotente entre
/// restarts. Não é seguro contra dois processos iniciando ao mesmo tempo
/// contra uma collection vazia (deploy single-instance assumido).
pub async fn seed_countries(db: &MongoDB) {
    let collection = db.countries();

    let count = collection.count_documents(doc! {}).await.unwrap_or(0);

    if count > 0 {
        log::info!(
            "Countries: {} documents already in DB — skipping seed",
            count
        );
        return;
    }

    let countries = default_countries();
    log::info!("Countries: seeding {} reference entries...", countries.len());

    match collection.insert_many(&countries).await {
        Ok(result) => {
            log::info!(
                "Inserted {} countries into the countries collection",
                result.inserted_ids.len()
            );
        }
        Err(e) => {
            log::error!("Failed to seed countries: {}", e);
        }
    }
}

/// Lista fixa de países exibidos no catálogo
pub fn default_countries() -> Vec<Country> {
    vec![
        Country {
            id: None,
            country_name: "Bangladesh".into(),
            image_url: "https://i.ibb.co/yVC9HcW/bangladesh.jpg".into(),
            description: "Home of the Sundarbans mangrove forest and Cox's Bazar, the longest natural sea beach in the world.".into(),
        },
        Country {
            id: None,
            country_name: "Thailand".into(),
            image_url: "https://i.ibb.co/YbQ8N5r/thailand.jpg".into(),
            description: "Golden temples, floating markets and island beaches from Phuket to Koh Samui.".into(),
        },
        Country {
            id: None,
            country_name: "Indonesia".into(),
            image_url: "https://i.ibb.co/Jr88MDS/indonesia.jpg".into(),
            description: "An archipelago of over seventeen thousand islands, from Bali's rice terraces to Komodo National Park.".into(),
        },
        Country {
            id: None,
            country_name: "Malaysia".into(),
            image_url: "https://i.ibb.co/2kMhQXH/malaysia.jpg".into(),
            description: "Kuala Lumpur's skyline, Penang street food and the rainforests of Borneo.".into(),
        },
        Country {
            id: None,
            country_name: "Vietnam".into(),
            image_url: "https://i.ibb.co/ZcqLd0y/vietnam.jpg".into(),
            description: "Ha Long Bay's limestone karsts, Hoi An's lantern-lit old town and the Mekong Delta.".into(),
        },
        Country {
            id: None,
            country_name: "Cambodia".into(),
            image_url: "https://i.ibb.co/vc9M8Fk/cambodia.jpg".into(),
            description: "Angkor Wat, the largest religious monument on earth, and the royal capital Phnom Penh.".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_countries_are_complete() {
        let countries = default_countries();
        assert_eq!(countries.len(), 6);

        for country in &countries {
            assert!(country.id.is_none());
            assert!(!country.country_name.is_empty());
            assert!(country.image_url.starts_with("https://"));
            assert!(!country.description.is_empty());
        }
    }

    #[test]
    fn test_default_country_names_are_unique() {
        let countries = default_countries();
        let names: HashSet<_> = countries.iter().map(|c| c.country_name.as_str()).collect();
        assert_eq!(names.len(), countries.len());
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_seed_never_reseeds_non_empty_collection() {
        dotenv::dotenv().ok();
        let uri = std::env::var("MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let db = MongoDB::new(&uri).await.unwrap();

        seed_countries(&db).await;
        let count_after_first = db.countries().count_documents(doc! {}).await.unwrap();
        assert!(count_after_first > 0);

        // Segunda passada simula um restart: a contagem não pode mudar
        seed_countries(&db).await;
        let count_after_second = db.countries().count_documents(doc! {}).await.unwrap();
        assert_eq!(count_after_first, count_after_second);
    }
}
