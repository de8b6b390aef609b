use mongodb::bson::{doc, Document};
use mongodb::options::{ClientOptions, ServerApi, ServerApiVersion};
use mongodb::{Client, Collection, Database};
use std::error::Error;

use crate::models::Country;

pub const DATABASE_NAME: &str = "tourifyDB";
pub const TOURIST_SPOTS_COLLECTION: &str = "touristSpots";
pub const COUNTRIES_COLLECTION: &str = "countries";

#[derive(Clone)]
pub struct MongoDB {
    client: Client,
    db: Database,
}

impl MongoDB {
    pub async fn new(uri: &str) -> Result<Self, Box<dyn Error>> {
        let mut client_options = ClientOptions::parse(uri).await?;

        // Atlas Stable API v1
        client_options.server_api = Some(
            ServerApi::builder()
                .version(ServerApiVersion::V1)
                .strict(true)
                .deprecation_errors(true)
                .build(),
        );

        let client = Client::with_options(client_options)?;
        let db = client.database(DATABASE_NAME);

        // Test connection — startup is fatal if the deployment is unreachable
        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;

        log::info!("Pinged MongoDB deployment. Connection established");

        Ok(Self { client, db })
    }

    pub fn tourist_spots(&self) -> Collection<Document> {
        self.db.collection(TOURIST_SPOTS_COLLECTION)
    }

    pub fn countries(&self) -> Collection<Country> {
        self.db.collection(COUNTRIES_COLLECTION)
    }

    /// Check if the connection is healthy
    pub async fn health_check(&self) -> Result<bool, Box<dyn Error>> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(true)
    }
}
