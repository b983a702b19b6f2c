//! In-process mock backend on `tiny_http`.

use std::collections::HashMap;
use std::io::Read;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use piano_api::ApiClient;
use piano_config::{ApiConfig, CacheConfig};

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub url: String,
    pub headers: HashMap<String, String>,
    pub body: String,
}

type Routes = HashMap<(String, String), (u16, String)>;

pub struct MockBackend {
    server: Arc<tiny_http::Server>,
    port: u16,
    requests: Arc<Mutex<Vec<Recorded>>>,
    routes: Arc<Mutex<Routes>>,
    worker: Option<JoinHandle<()>>,
}

impl MockBackend {
    pub fn start() -> Self {
        let server = Arc::new(tiny_http::Server::http("127.0.0.1:0").expect("bind mock backend"));
        let port = server
            .server_addr()
            .to_ip()
            .map(|a| a.port())
            .expect("mock backend port");
        let requests = Arc::new(Mutex::new(Vec::new()));
        let routes: Arc<Mutex<Routes>> = Arc::new(Mutex::new(HashMap::new()));

        let worker = {
            let server = Arc::clone(&server);
            let requests = Arc::clone(&requests);
            let routes = Arc::clone(&routes);
            std::thread::spawn(move || {
                for mut request in server.incoming_requests() {
                    let mut body = String::new();
                    let _ = request.as_reader().read_to_string(&mut body);
                    let method = request.method().to_string();
                    let url = request.url().to_string();
                    let headers = request
                        .headers()
                        .iter()
                        .map(|h| {
                            (
                                h.field.as_str().as_str().to_ascii_lowercase(),
                                h.value.as_str().to_string(),
                            )
                        })
                        .collect();

                    let (status, reply) = routes
                        .lock()
                        .unwrap()
                        .get(&(method.clone(), url.clone()))
                        .cloned()
                        .unwrap_or((404, String::new()));

                    requests.lock().unwrap().push(Recorded {
                        method,
                        url,
                        headers,
                        body,
                    });

                    let response = tiny_http::Response::from_string(reply)
                        .with_status_code(status)
                        .with_header(
                            tiny_http::Header::from_bytes("Content-Type", "application/json")
                                .unwrap(),
                        );
                    let _ = request.respond(response);
                }
            })
        };

        Self {
            server,
            port,
            requests,
            routes,
            worker: Some(worker),
        }
    }

    /// Answer `method path` (path relative to `/api`, query included) with
    /// `status` and `body`.
    pub fn route(&self, method: &str, path: &str, status: u16, body: &str) {
        self.routes.lock().unwrap().insert(
            (method.to_string(), format!("/api/{path}")),
            (status, body.to_string()),
        );
    }

    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}/api", self.port)
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    pub fn hits(&self, method: &str, path: &str) -> usize {
        let url = format!("/api/{path}");
        self.requests()
            .iter()
            .filter(|r| r.method == method && r.url == url)
            .count()
    }

    pub fn client(&self) -> ApiClient {
        self.client_with_cache(&CacheConfig::default())
    }

    pub fn client_with_cache(&self, cache: &CacheConfig) -> ApiClient {
        let api = ApiConfig {
            base_url: self.base_url(),
            ..ApiConfig::default()
        };
        ApiClient::new(&api, cache).expect("client builds")
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        self.server.unblock();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

pub const STUDENTS_JSON: &str = r#"[
    {"id": 1, "name": "Alice Chen", "email": "alice@example.com", "age": 10},
    {"id": 2, "name": "Bob Li", "email": "bob@example.com"},
    {"id": 3, "name": "Carol Wu", "phone": "555-0100"}
]"#;
