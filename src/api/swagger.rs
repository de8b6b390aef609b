use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tourify Service API",
        version = "1.0.0",
        description = "HTTP backend for the Tourify tourist-spot catalog.\n\n**Collections:**\n- `touristSpots` — user-submitted attractions (free-form documents)\n- `countries` — static reference list, seeded at startup\n\nNo authentication: every endpoint is public.",
        contact(
            name = "Tourify Team"
        )
    ),
    paths(
        crate::api::health::liveness,
        crate::api::countries::get_countries,
        crate::api::tourist_spots::get_all_spots,
        crate::api::tourist_spots::get_top_spots,
        crate::api::tourist_spots::get_spot,
        crate::api::tourist_spots::get_my_spots,
        crate::api::tourist_spots::get_spots_by_country,
        crate::api::tourist_spots::add_spot,
        crate::api::tourist_spots::delete_spot,
        crate::api::tourist_spots::update_spot,
    ),
    components(
        schemas(
            crate::models::Country,
            crate::models::MySpotsRequest,
            crate::models::SpotsByCountryRequest,
        )
    ),
    tags(
        (name = "Health", description = "Liveness probe."),
        (name = "Countries", description = "Read-only reference countries seeded at startup."),
        (name = "Tourist Spots", description = "CRUD over user-submitted tourist spots."),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_documents_every_route() {
        let openapi = ApiDoc::openapi();
        let documented: Vec<&str> = openapi.paths.paths.keys().map(|p| p.as_str()).collect();

        let routes = [
            "/",
            "/countries",
            "/all-tourist-spots",
            "/all-tourist-spots/top",
            "/tourist-spot/{id}",
            "/my-spots",
            "/spots-by-country",
            "/add-tourist-spot",
            "/my-spots/{id}",
            "/update-tourist-spot/{id}",
        ];

        for route in routes {
            assert!(documented.contains(&route), "route not documented: {}", route);
        }
    }
}
