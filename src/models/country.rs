use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// País de referência (armazenado no MongoDB, somente leitura após o seed)
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Country {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub id: Option<ObjectId>,

    /// Nome canônico do país (referenciado por `countryName` nos spots)
    #[serde(rename = "countryName")]
    pub country_name: String,

    /// URL da imagem de capa
    #[serde(rename = "imageURL")]
    pub image_url: String,

    /// Descrição livre
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_serializes_with_wire_field_names() {
        let country = Country {
            id: None,
            country_name: "France".into(),
            image_url: "https://example.com/france.jpg".into(),
            description: "Western Europe".into(),
        };

        let json = serde_json::to_value(&country).unwrap();
        assert_eq!(json["countryName"], "France");
        assert_eq!(json["imageURL"], "https://example.com/france.jpg");
        assert_eq!(json["description"], "Western Europe");
        // _id omitido enquanto não inserido
        assert!(json.get("_id").is_none());
    }

    #[test]
    fn test_country_roundtrip_with_id() {
        let oid = ObjectId::new();
        let json = serde_json::json!({
            "_id": { "$oid": oid.to_hex() },
            "countryName": "Thailand",
            "imageURL": "https://example.com/th.jpg",
            "description": "Southeast Asia",
        });

        let country: Country = serde_json::from_value(json).unwrap();
        assert_eq!(country.id, Some(oid));
        assert_eq!(country.country_name, "Thailand");
    }
}
