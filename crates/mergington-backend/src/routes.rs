use std::path::Path;
use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    response::Redirect,
    routing::{delete, get, post},
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::{AppState, handlers};

/// Where the root path sends browsers.
pub const INDEX_PATH: &str = "/static/index.html";

fn cors() -> CorsLayer {
    let origins: Vec<HeaderValue> = if cfg!(debug_assertions) {
        let dev_ports = [3000, 8000, 8080, 8081, 5173];
        dev_ports
            .iter()
            .flat_map(|port| {
                [
                    format!("http://localhost:{port}"),
                    format!("http://127.0.0.1:{port}"),
                ]
            })
            .filter_map(|origin| origin.parse().ok())
            .collect()
    } else {
        // Production origins - add your domains here
        vec![]
    };

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_headers([header::CONTENT_TYPE])
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
}

/// Setup the routes for the server, the static bundle and the CORS/trace layers
pub fn setup_routes(state: Arc<AppState>, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::temporary(INDEX_PATH) }))
        .route("/health", get(handlers::health::get))
        .route("/activities", get(handlers::activities::list))
        .route(
            "/activities/{activity_name}",
            get(handlers::activities::get),
        )
        .route(
            "/activities/{activity_name}/signup",
            post(handlers::activities::signup),
        )
        .route(
            "/activities/{activity_name}/participant",
            delete(handlers::activities::withdraw),
        )
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::services::ActivityServiceInMemory;

    fn app() -> Router {
        let state = Arc::new(AppState::new(ActivityServiceInMemory::seeded()));
        setup_routes(state, Config::default().static_dir)
    }

    async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    async fn participants(app: &Router, activity: &str) -> Vec<String> {
        let (status, body) = send(app, Method::GET, "/activities").await;
        assert_eq!(status, StatusCode::OK);
        serde_json::from_value(body[activity]["participants"].clone()).unwrap()
    }

    fn detail(body: &Value) -> String {
        body["detail"].as_str().unwrap().to_lowercase()
    }

    #[tokio::test]
    async fn root_redirects_to_index() {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], INDEX_PATH);
    }

    #[tokio::test]
    async fn lists_all_activities() {
        let (status, body) = send(&app(), Method::GET, "/activities").await;
        assert_eq!(status, StatusCode::OK);

        let activities = body.as_object().unwrap();
        for name in [
            "Soccer Team",
            "Basketball Club",
            "Drama Club",
            "Art Studio",
            "Debate Team",
            "Science Olympiad",
            "Chess Club",
            "Programming Class",
            "Gym Class",
        ] {
            assert!(activities.contains_key(name), "{name} missing");
        }

        for (name, activity) in activities {
            let fields = activity.as_object().unwrap();
            assert_eq!(fields.len(), 4, "{name} has unexpected fields");
            assert!(fields["description"].is_string());
            assert!(fields["schedule"].is_string());
            assert!(fields["max_participants"].is_u64());
            assert!(
                fields["participants"]
                    .as_array()
                    .unwrap()
                    .iter()
                    .all(Value::is_string)
            );
        }
    }

    #[tokio::test]
    async fn signup_scenario() {
        let app = app();
        assert!(
            participants(&app, "Soccer Team")
                .await
                .contains(&"alex@mergington.edu".to_string())
        );

        let (status, body) = send(
            &app,
            Method::POST,
            "/activities/Soccer%20Team/signup?email=newstudent@mergington.edu",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(
            body["message"]
                .as_str()
                .unwrap()
                .contains("newstudent@mergington.edu")
        );
        assert!(
            participants(&app, "Soccer Team")
                .await
                .contains(&"newstudent@mergington.edu".to_string())
        );

        let (status, body) = send(
            &app,
            Method::POST,
            "/activities/Soccer%20Team/signup?email=alex@mergington.edu",
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(detail(&body).contains("already signed up"));

        let (status, body) = send(
            &app,
            Method::DELETE,
            "/activities/Soccer%20Team/participant?email=notregistered@mergington.edu",
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(detail(&body).contains("not registered"));

        let (status, body) = send(
            &app,
            Method::POST,
            "/activities/Nonexistent%20Activity/signup?email=student@mergington.edu",
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(detail(&body).contains("not found"));
    }

    #[tokio::test]
    async fn signup_decodes_activity_name() {
        let app = app();
        let (status, _) = send(
            &app,
            Method::POST,
            "/activities/Programming%20Class/signup?email=newcoder@mergington.edu",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(
            participants(&app, "Programming Class")
                .await
                .contains(&"newcoder@mergington.edu".to_string())
        );
    }

    #[tokio::test]
    async fn delete_participant() {
        let app = app();
        let (status, body) = send(
            &app,
            Method::DELETE,
            "/activities/Programming%20Class/participant?email=emma@mergington.edu",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(
            body["message"]
                .as_str()
                .unwrap()
                .contains("emma@mergington.edu")
        );
        assert!(
            !participants(&app, "Programming Class")
                .await
                .contains(&"emma@mergington.edu".to_string())
        );
    }

    #[tokio::test]
    async fn delete_from_unknown_activity() {
        let (status, body) = send(
            &app(),
            Method::DELETE,
            "/activities/Nonexistent%20Activity/participant?email=student@mergington.edu",
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(detail(&body).contains("not found"));
    }

    #[tokio::test]
    async fn signup_and_delete_workflow() {
        let app = app();
        let before = participants(&app, "Chess Club").await;

        let (status, _) = send(
            &app,
            Method::POST,
            "/activities/Chess%20Club/signup?email=testworkflow@mergington.edu",
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send(
            &app,
            Method::DELETE,
            "/activities/Chess%20Club/participant?email=testworkflow@mergington.edu",
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        assert_eq!(participants(&app, "Chess Club").await, before);
    }

    #[tokio::test]
    async fn multiple_signups_different_activities() {
        let app = app();
        let email = "multisport@mergington.edu";
        for activity in ["Soccer%20Team", "Basketball%20Club"] {
            let uri = format!("/activities/{activity}/signup?email={email}");
            let (status, _) = send(&app, Method::POST, &uri).await;
            assert_eq!(status, StatusCode::OK);
        }
        assert!(participants(&app, "Soccer Team").await.contains(&email.to_string()));
        assert!(
            participants(&app, "Basketball Club")
                .await
                .contains(&email.to_string())
        );
    }

    #[tokio::test]
    async fn missing_email_is_unprocessable() {
        let (status, body) = send(&app(), Method::POST, "/activities/Chess%20Club/signup").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].is_string());
    }

    #[tokio::test]
    async fn health_reports_counts() {
        let (status, body) = send(&app(), Method::GET, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["services"]["activity_count"], 9);
        assert!(body["services"]["participant_count"].as_u64().unwrap() >= 9);
    }

    #[tokio::test]
    async fn root_lands_on_shipped_index() {
        let app = app();
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        let location = response.headers()[header::LOCATION].to_str().unwrap().to_string();

        for path in [location.as_str(), "/static/app.js", "/static/styles.css"] {
            let request = Request::builder().uri(path).body(Body::empty()).unwrap();
            let response = app.clone().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{path}");
        }
    }

    #[tokio::test]
    async fn gets_single_activity() {
        let app = app();
        let (status, body) = send(&app, Method::GET, "/activities/Soccer%20Team").await;
        assert_eq!(status, StatusCode::OK);
        assert!(
            body["participants"]
                .as_array()
                .unwrap()
                .contains(&Value::from("alex@mergington.edu"))
        );

        let (status, body) = send(&app, Method::GET, "/activities/Nonexistent%20Activity").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(detail(&body).contains("not found"));
    }

    #[tokio::test]
    async fn undecodable_activity_name_has_detail() {
        let (status, body) = send(
            &app(),
            Method::POST,
            "/activities/%FF/signup?email=student@mergington.edu",
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["detail"].is_string());
    }

    #[tokio::test]
    async fn unsupported_method_has_detail() {
        let (status, body) = send(
            &app(),
            Method::DELETE,
            "/activities/Chess%20Club/signup?email=student@mergington.edu",
        )
        .await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body["detail"], "Method Not Allowed");
    }

    #[tokio::test]
    async fn unknown_route_has_detail() {
        let (status, body) = send(&app(), Method::GET, "/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Not Found");
    }

    #[tokio::test]
    async fn serves_static_bundle() {
        let dir = std::env::temp_dir().join(format!("mergington-static-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("index.html"), "<h1>Mergington High School</h1>").unwrap();

        let state = Arc::new(AppState::new(ActivityServiceInMemory::seeded()));
        let app = setup_routes(state, &dir);
        let request = Request::builder()
            .uri(INDEX_PATH)
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(String::from_utf8_lossy(&bytes).contains("Mergington High School"));

        std::fs::remove_dir_all(&dir).ok();
    }
}
