// tests/support/mocks/rest_server.rs
use axum::{
    Router,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri},
    routing::any,
};
use sitedesk_core::config::StoreConfig;
use sitedesk_core::infrastructure::rest::{RestClient, RestSiteStore};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const ANON_KEY: &str = "anon-test-key";

/// One request as the stub saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    /// Raw query string, still percent-encoded.
    pub query: String,
    pub params: Vec<(String, String)>,
    pub headers: HeaderMap,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

type Responder = Arc<dyn Fn(&RecordedRequest) -> (StatusCode, String) + Send + Sync>;
type RequestLog = Arc<Mutex<Vec<RecordedRequest>>>;

/// Loopback HTTP server standing in for the PostgREST `sites` endpoint.
pub struct StubStore {
    base_url: String,
    requests: RequestLog,
}

impl StubStore {
    pub async fn start(
        responder: impl Fn(&RecordedRequest) -> (StatusCode, String) + Send + Sync + 'static,
    ) -> Self {
        let requests = RequestLog::default();
        let responder: Responder = Arc::new(responder);
        let app = Router::new()
            .route("/rest/v1/sites", any(record))
            .with_state((requests.clone(), responder));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            requests,
        }
    }

    pub async fn replying(status: StatusCode, body: &'static str) -> Self {
        Self::start(move |_| (status, body.to_string())).await
    }

    pub fn store(&self) -> RestSiteStore {
        let config = StoreConfig::new(&self.base_url, ANON_KEY, Duration::from_secs(5)).unwrap();
        // Loopback traffic must not be routed through an ambient proxy.
        let client = RestClient::with_builder(reqwest::Client::builder().no_proxy(), &config).unwrap();
        RestSiteStore::new(client)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

async fn record(
    State((log, responder)): State<(RequestLog, Responder)>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> (StatusCode, String) {
    let query = uri.query().unwrap_or_default().to_string();
    let request = RecordedRequest {
        method,
        path: uri.path().to_string(),
        params: serde_urlencoded::from_str(&query).unwrap_or_default(),
        query,
        headers,
    };
    let reply = responder(&request);
    log.lock().unwrap().push(request);
    reply
}
