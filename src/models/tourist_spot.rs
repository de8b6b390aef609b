use serde::Deserialize;

/// Spots de turismo são documentos de forma livre (`bson::Document`):
/// o que o cliente envia é armazenado como está. Apenas os campos usados
/// pelas queries têm nome conhecido: `userEmail`, `countryName` e
/// `totalVisitorsPerYear`.

/// Request para listar os spots de um usuário
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct MySpotsRequest {
    pub email: String,
}

/// Request para listar os spots de um país
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct SpotsByCountryRequest {
    /// Aceita também a chave legada `country_Name`
    #[serde(rename = "countryName", alias = "country_Name")]
    pub country_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spots_by_country_accepts_canonical_key() {
        let req: SpotsByCountryRequest =
            serde_json::from_str(r#"{"countryName":"France"}"#).unwrap();
        assert_eq!(req.country_name, "France");
    }

    #[test]
    fn test_spots_by_country_accepts_legacy_key() {
        let req: SpotsByCountryRequest =
            serde_json::from_str(r#"{"country_Name":"France"}"#).unwrap();
        assert_eq!(req.country_name, "France");
    }

    #[test]
    fn test_my_spots_request() {
        let req: MySpotsRequest = serde_json::from_str(r#"{"email":"a@x.com"}"#).unwrap();
        assert_eq!(req.email, "a@x.com");
    }
}
