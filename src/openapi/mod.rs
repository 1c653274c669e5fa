use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Fulfillment Monitor API",
        version = "0.1.0",
        description = r#"
# Fulfillment Monitor API

Read-only operational views over the warehouse fulfillment pipeline.

## Areas

- **Putwall**: cubby status buckets per zone, filtered detail rows, cubby addresses
- **Replenishment**: task counts by pack lane and priority range, lane concentration, grouped detail
- **Unit sort**: container totals with alert indicators, issue containers, pick drill-down

## Filters

Filters are query-string parameters. Absent and empty values impose no constraint.
Values that cannot match (an unknown bucket name, a non-numeric priority) return an empty list.

## Error Handling

Failures use a consistent body:

```json
{
  "error": "Internal Server Error",
  "message": "Failed to fetch putwall data",
  "timestamp": "2024-01-01T00:00:00Z"
}
```
        "#,
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "http://localhost:3001", description = "Local development")
    ),
    tags(
        (name = "putwall", description = "Putwall cubby status"),
        (name = "replenishment", description = "Replenishment backlog"),
        (name = "unitsort", description = "Unit-sort containers"),
        (name = "health", description = "Health check endpoints")
    ),
    paths(
        crate::handlers::putwall::get_putwall_summary,
        crate::handlers::putwall::get_putwall_data,
        crate::handlers::putwall::get_putwall_cubbies,
        crate::handlers::replenishment::get_priority_summary,
        crate::handlers::replenishment::get_lane_summary,
        crate::handlers::replenishment::get_replenishment_data,
        crate::handlers::unitsort::get_unitsort_summary,
        crate::handlers::unitsort::get_unitsort_data,
        crate::handlers::unitsort::get_unitsort_issues,
        crate::handlers::unitsort::get_container_picks,
        crate::handlers::health::health_check,
        crate::handlers::health::api_status,
    ),
    components(
        schemas(
            crate::aggregation::putwall::CubbyStatus,
            crate::aggregation::replenishment::PriorityBucket,
            crate::models::Domain,
            crate::errors::ErrorResponse
        )
    )
)]
pub struct ApiDocV1;

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDocV1::openapi())
        .config(utoipa_swagger_ui::Config::from("/api-docs/openapi.json").try_it_out_enabled(true))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_lists_every_route() {
        let openapi = ApiDocV1::openapi();
        let json = serde_json::to_string_pretty(&openapi).unwrap();
        assert!(json.contains("Fulfillment Monitor API"));
        for path in [
            "/api/putwall/summary",
            "/api/putwall/data",
            "/api/putwall/cubbies",
            "/api/replenishment/summaryByPriority",
            "/api/replenishment/summary",
            "/api/replenishment/data",
            "/api/unitsort/summary",
            "/api/unitsort/data",
            "/api/unitsort/issues",
            "/api/container",
            "/api/health",
            "/api/status",
        ] {
            assert!(json.contains(path), "missing {path}");
        }
    }
}
