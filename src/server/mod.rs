// src/server/mod.rs
use rocket::fs::FileServer;
use rocket::{routes, Build, Rocket};

use crate::api;
use crate::config::Config;
use crate::posts::{BackingFilePosts, PostSource};

pub mod cors;

pub struct ServerState {
    pub config: Config,
    pub posts: Box<dyn PostSource>,
}

pub fn build_rocket(config: Config) -> Rocket<Build> {
    let posts = Box::new(BackingFilePosts::new(
        &config.feed.backing_file,
        &config.feed.caption_prefix,
    ));
    build_rocket_with_source(config, posts)
}

/// Assembly seam: endpoint tests inject their own `PostSource` here.
pub fn build_rocket_with_source(config: Config, posts: Box<dyn PostSource>) -> Rocket<Build> {
    let figment = rocket::Config::figment()
        .merge(("address", config.server.address.clone()))
        .merge(("port", config.server.port));
    let static_dir = config.server.static_dir.clone();

    rocket::custom(figment)
        .manage(ServerState { config, posts })
        .attach(cors::Cors)
        .mount(
            "/api",
            routes![
                api::health::health_check,
                api::health::preflight,
                api::instagram::get_posts,
                api::instagram::preflight,
            ],
        )
        .mount("/", FileServer::from(static_dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Post, Result};
    use crate::posts::PostSource;
    use async_trait::async_trait;
    use chrono::{DateTime, Utc};
    use rocket::http::Status;
    use rocket::local::asynchronous::Client;
    use serde_json::Value;

    struct FailingPosts;

    #[async_trait]
    impl PostSource for FailingPosts {
        fn describe(&self) -> &str {
            "failing test source"
        }

        async fn load_posts(&self) -> Result<Vec<Post>> {
            Err("synthetic fault".into())
        }
    }

    fn test_config(backing_file: &str) -> Config {
        let mut config = Config::default();
        config.server.port = 0;
        config.feed.backing_file = backing_file.to_string();
        config
    }

    async fn client(config: Config) -> Client {
        Client::tracked(build_rocket(config))
            .await
            .expect("valid rocket instance")
    }

    #[rocket::async_test]
    async fn test_health_returns_exact_payload() {
        let client = client(test_config("no-such-file.json")).await;
        let response = client.get("/api/health").dispatch().await;

        assert_eq!(response.status(), Status::Ok);
        let body: Value = response.into_json().await.expect("json body");
        assert_eq!(body, serde_json::json!({ "status": "healthy" }));
    }

    #[rocket::async_test]
    async fn test_options_preflight_is_empty_200() {
        let client = client(test_config("no-such-file.json")).await;

        for path in ["/api/health", "/api/instagram"] {
            let response = client.options(path).dispatch().await;
            assert_eq!(response.status(), Status::Ok);
            let body = response.into_string().await.unwrap_or_default();
            assert!(body.is_empty(), "preflight body for {} must be empty", path);
        }
    }

    #[rocket::async_test]
    async fn test_cors_headers_present_on_responses() {
        let client = client(test_config("no-such-file.json")).await;
        let response = client.get("/api/instagram").dispatch().await;

        let headers = response.headers();
        assert_eq!(headers.get_one("Access-Control-Allow-Origin"), Some("*"));
        assert_eq!(
            headers.get_one("Access-Control-Allow-Methods"),
            Some("GET, OPTIONS")
        );
        assert_eq!(
            headers.get_one("Access-Control-Allow-Headers"),
            Some("X-Requested-With, Content-Type, Authorization")
        );
    }

    #[rocket::async_test]
    async fn test_missing_backing_file_serves_four_defaults() {
        let client = client(test_config("no-such-file.json")).await;
        let response = client.get("/api/instagram").dispatch().await;

        assert_eq!(response.status(), Status::Ok);
        let body: Value = response.into_json().await.expect("json body");
        let data = body["data"].as_array().expect("data array");
        assert_eq!(data.len(), 4);

        let timestamps: Vec<DateTime<Utc>> = data
            .iter()
            .map(|post| {
                post["timestamp"]
                    .as_str()
                    .and_then(|s| s.parse().ok())
                    .expect("rfc3339 timestamp")
            })
            .collect();
        for pair in timestamps.windows(2) {
            assert_eq!(pair[0] - pair[1], chrono::Duration::hours(24));
        }
    }

    #[rocket::async_test]
    async fn test_backing_file_drives_derived_posts() {
        let path = std::env::temp_dir().join(format!("maharaja-backing-{}.json", std::process::id()));
        tokio::fs::write(
            &path,
            r#"["https://www.instagram.com/p/AAA111/", "https://www.instagram.com/p/BBB222/"]"#,
        )
        .await
        .expect("write backing file");

        let client = client(test_config(path.to_str().expect("utf-8 path"))).await;
        let response = client.get("/api/instagram").dispatch().await;
        let body: Value = response.into_json().await.expect("json body");
        tokio::fs::remove_file(&path).await.ok();

        let data = body["data"].as_array().expect("data array");
        assert_eq!(data.len(), 2);
        assert_eq!(data[0]["id"], "AAA111");
        assert_eq!(data[1]["id"], "BBB222");
        assert_eq!(data[0]["media_type"], "IMAGE");
    }

    #[rocket::async_test]
    async fn test_faulting_source_returns_error_envelope() {
        let client = Client::tracked(build_rocket_with_source(
            test_config("unused.json"),
            Box::new(FailingPosts),
        ))
        .await
        .expect("valid rocket instance");

        let response = client.get("/api/instagram").dispatch().await;
        assert_eq!(response.status(), Status::InternalServerError);

        let body: Value = response.into_json().await.expect("json body");
        assert_eq!(body["error"], "Internal server error");
        assert_eq!(body["data"], serde_json::json!([]));
    }
}
