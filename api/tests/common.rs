use anyhow::Result;
use futures::Future;
use once_cell::sync::Lazy;
use serde_json::{json, Value};
use temp_dir::TempDir;

pub use crate::client::*;

use sideline_api::Server;
use sideline_db::object_id::TeamId;
use sideline_db::test::{create_database, SeedData, TestDatabase};

pub struct TestApp {
    pub database: TestDatabase,
    /// Rows every test database starts with.
    pub seed: SeedData,
    /// A client set to the base url of the server.
    pub client: TestClient,
    pub address: String,
    pub base_url: String,
    /// Upload target for the local storage provider; deleted when the test
    /// app is dropped.
    _storage_dir: TempDir,
}

async fn start_app(database: TestDatabase, seed: SeedData) -> Result<TestApp> {
    let storage_dir = TempDir::new()?;
    let config = sideline_api::config::Config {
        database_url: database.url.clone(),
        port: 0, // Bind to random port
        host: "127.0.0.1".to_string(),
        env: "test".to_string(),
        storage_endpoint: None,
        storage_region: None,
        storage_key_id: None,
        storage_secret_key: None,
        storage_bucket: None,
        storage_local_dir: storage_dir.path().to_string_lossy().to_string(),
        public_url_base: "http://127.0.0.1/uploads".to_string(),
        organization_id: seed.organization_id,
        operator_user_id: seed.operator_user_id,
    };
    Lazy::force(&sideline_test::TRACING);
    let Server { server, host, port } = sideline_api::run_server(config).await?;

    tokio::task::spawn(server);

    let base_url = format!("http://{}:{}/api", host, port);
    let client = TestClient {
        base: base_url.clone(),
        client: reqwest::ClientBuilder::new()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Building client"),
    };

    Ok(TestApp {
        database,
        seed,
        client,
        address: format!("{}:{}", host, port),
        base_url,
        _storage_dir: storage_dir,
    })
}

pub async fn run_app_test<F, R>(f: F)
where
    F: FnOnce(TestApp) -> R,
    R: Future<Output = Result<(), anyhow::Error>>,
{
    let (database, seed) = create_database().await.expect("Creating database");
    let app = start_app(database.clone(), seed).await.expect("Starting app");
    f(app).await.unwrap();
    database.drop_db().expect("Cleaning up");
}

impl TestApp {
    /// Create a team through the API and return its id.
    pub async fn add_team(&self, title: &str) -> Result<TeamId> {
        let response = self
            .client
            .post("teams")
            .json(&json!({
                "season_id": self.seed.season_id,
                "title": title,
                "sport": "Basketball",
                "gender": "coed",
                "grade_min": 5,
                "grade_max": 6,
            }))
            .send()
            .await?;
        assert_eq!(response.status().as_u16(), 202, "creating team {title}");

        let body: Value = response.json().await?;
        let team_id = body["id"]
            .as_str()
            .expect("team id in create response")
            .parse::<TeamId>()?;
        Ok(team_id)
    }
}
