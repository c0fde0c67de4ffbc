use utoipa::openapi::ServerBuilder;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api;
use crate::api::dto::{CreateTaskReq, HealthResponse, TaskPage};
use crate::config::Config;
use crate::domain::{Task, TaskPriority, TaskStatus};
use crate::pagination::PaginationMeta;

/// Declarative description of the API surface. Paths come from the
/// annotated handlers; the security scheme is attached by the modifier.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tasks API",
        version = "1.0.0",
        description = "A simple REST API for managing tasks"
    ),
    paths(api::healthcheck, api::list_tasks, api::create_task),
    components(schemas(
        Task,
        TaskStatus,
        TaskPriority,
        CreateTaskReq,
        TaskPage,
        PaginationMeta,
        HealthResponse
    )),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Tasks", description = "Task management endpoints")
    ),
    modifiers(&ApiKeySecurity)
)]
struct ApiDoc;

struct ApiKeySecurity;

impl Modify for ApiKeySecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);

        components.add_security_scheme(
            "apiKey",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                "api-key",
                "API key for authentication. Can be provided via 'api-key' header \
                 or 'Authorization: APIKey <key>' header",
            ))),
        );
    }
}

/// Assemble the OpenAPI document once at startup.
///
/// The server list depends on the environment: `local` advertises the
/// localhost dev server, anything else advertises the configured host.
/// The document is served verbatim afterwards, with no per-request
/// regeneration.
pub fn build(config: &Config) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();

    let server = if config.app_env == "local" {
        ServerBuilder::new()
            .url("http://localhost:8000")
            .description(Some("Local Dev Server"))
    } else {
        ServerBuilder::new()
            .url(config.host.clone())
            .description(Some("Production Server"))
    };

    doc.servers = Some(vec![server.build()]);

    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(app_env: &str) -> Config {
        Config {
            server_port: 8000,
            host: "https://tasks.example.com".to_string(),
            app_env: app_env.to_string(),
            api_key: Some("secret".to_string()),
            db_url: "sqlite::memory:".to_string(),
            rust_log: "info".to_string(),
        }
    }

    #[test]
    fn document_describes_all_routes() {
        let doc = serde_json::to_value(build(&config("dev"))).unwrap();

        assert!(doc["paths"]["/healthcheck"]["get"].is_object());
        assert!(doc["paths"]["/tasks"]["get"].is_object());
        assert!(doc["paths"]["/tasks"]["post"].is_object());
    }

    #[test]
    fn security_scheme_is_registered() {
        let doc = serde_json::to_value(build(&config("dev"))).unwrap();

        let scheme = &doc["components"]["securitySchemes"]["apiKey"];
        assert_eq!(scheme["type"], "apiKey");
        assert_eq!(scheme["name"], "api-key");
        assert_eq!(scheme["in"], "header");

        let security = &doc["paths"]["/tasks"]["get"]["security"];
        assert!(security.as_array().is_some_and(|s| !s.is_empty()));
    }

    #[test]
    fn local_env_selects_localhost_server() {
        let doc = serde_json::to_value(build(&config("local"))).unwrap();

        assert_eq!(doc["servers"][0]["url"], "http://localhost:8000");
    }

    #[test]
    fn other_envs_advertise_the_configured_host() {
        let doc = serde_json::to_value(build(&config("production"))).unwrap();

        assert_eq!(doc["servers"][0]["url"], "https://tasks.example.com");
        assert_eq!(doc["servers"][0]["description"], "Production Server");
    }
}
