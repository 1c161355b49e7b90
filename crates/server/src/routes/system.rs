use actix_web::{get, web, HttpResponse};
use bookinfo_llm::InvocationError;
use std::sync::Arc;
use tracing::warn;

use crate::state::AppState;
use crate::types::HealthResponse;

/// GET /health - Model server reachability and model availability
#[get("/health")]
pub async fn health(state: web::Data<Arc<AppState>>) -> HttpResponse {
    let model = state.config.llm_model.clone();

    let (ollama_reachable, model_available) = match state.ollama.has_model(&model).await {
        Ok(available) => (true, available),
        Err(e) => {
            warn!("Health check failed: {}", e);
            (!matches!(e, InvocationError::Unreachable(_)), false)
        }
    };

    let response = HealthResponse {
        status: (if model_available { "ok" } else { "unavailable" }).to_string(),
        ollama_reachable,
        model,
        model_available,
    };

    if model_available {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

#[cfg(test)]
mod tests {
    use crate::routes::configure;
    use crate::state::AppState;
    use crate::test_support::StubBackend;
    use crate::types::HealthResponse;
    use actix_web::{http::StatusCode, test, web, App};
    use bookinfo_common::AppConfig;
    use std::sync::Arc;

    fn state_for(base_url: String) -> Arc<AppState> {
        let config = AppConfig {
            ollama_base_url: base_url,
            ..AppConfig::default()
        };
        Arc::new(AppState::with_backend(config, StubBackend::ok("unused")).unwrap())
    }

    #[actix_web::test]
    async fn test_health_model_pulled() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/tags")
            .with_status(200)
            .with_body(r#"{"models":[{"name":"dolphin-phi:latest"}]}"#)
            .create_async()
            .await;

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_for(server.url())))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: HealthResponse = test::read_body_json(resp).await;
        assert_eq!(body.status, "ok");
        assert!(body.ollama_reachable);
        assert!(body.model_available);
        assert_eq!(body.model, "dolphin-phi");
    }

    #[actix_web::test]
    async fn test_health_model_missing() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/tags")
            .with_status(200)
            .with_body(r#"{"models":[{"name":"llama3.2:latest"}]}"#)
            .create_async()
            .await;

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_for(server.url())))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body: HealthResponse = test::read_body_json(resp).await;
        assert!(body.ollama_reachable);
        assert!(!body.model_available);
    }

    #[actix_web::test]
    async fn test_health_server_down() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_for("http://127.0.0.1:1".to_string())))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body: HealthResponse = test::read_body_json(resp).await;
        assert_eq!(body.status, "unavailable");
        assert!(!body.ollama_reachable);
    }
}
