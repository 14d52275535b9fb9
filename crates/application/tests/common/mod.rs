//! Scripted backend and in-memory storage shared by the integration tests.
#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use parking_lot::Mutex;
use sc_application::client::DEFAULT_REFRESH_PATH;
use sc_application::{
    ApiClient, BareClient, ClientConfig, HttpTransport, OutboundRequest, RefreshCoordinator,
    SessionStorage, SessionStore, StorageError, TransportError,
};
use sc_domain::{ApiResponse, HttpMethod, Session};
use serde_json::{Value, json};

pub const BASE_URL: &str = "http://api.test";

/// How the scripted backend answers the refresh endpoint.
#[derive(Debug, Clone)]
pub enum RefreshReply {
    Tokens {
        access: String,
        refresh: Option<String>,
    },
    Status(u16),
}

/// A request as the backend saw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seen {
    pub method: HttpMethod,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub body: Option<Value>,
}

#[derive(Debug, Clone)]
struct Route {
    status: u16,
    body: Value,
    public: bool,
}

#[derive(Debug)]
struct BackendState {
    valid_token: Mutex<String>,
    refresh_path: Mutex<String>,
    refresh_reply: Mutex<RefreshReply>,
    refresh_delay: Mutex<Option<Duration>>,
    refresh_calls: AtomicUsize,
    routes: Mutex<HashMap<String, Route>>,
    seen: Mutex<Vec<Seen>>,
    offline: AtomicBool,
}

/// Fake API: protected routes accept only `Bearer <valid token>` and answer
/// 401 otherwise.
#[derive(Debug, Clone)]
pub struct ScriptedBackend {
    state: Arc<BackendState>,
}

impl ScriptedBackend {
    pub fn new(valid_token: &str) -> Self {
        Self {
            state: Arc::new(BackendState {
                valid_token: Mutex::new(valid_token.to_string()),
                refresh_path: Mutex::new(DEFAULT_REFRESH_PATH.to_string()),
                refresh_reply: Mutex::new(RefreshReply::Tokens {
                    access: "t2".into(),
                    refresh: Some("r2".into()),
                }),
                refresh_delay: Mutex::new(None),
                refresh_calls: AtomicUsize::new(0),
                routes: Mutex::new(HashMap::new()),
                seen: Mutex::new(Vec::new()),
                offline: AtomicBool::new(false),
            }),
        }
    }

    pub fn reply_to_refresh(&self, reply: RefreshReply) {
        *self.state.refresh_reply.lock() = reply;
    }

    /// Moves the refresh endpoint to `path`.
    pub fn serve_refresh_at(&self, path: &str) {
        *self.state.refresh_path.lock() = path.to_string();
    }

    pub fn delay_refresh(&self, delay: Duration) {
        *self.state.refresh_delay.lock() = Some(delay);
    }

    /// Answers `method path` with `body`, only with a valid token.
    pub fn route(&self, method: HttpMethod, path: &str, status: u16, body: Value) {
        self.insert_route(method, path, status, body, false);
    }

    /// Answers `method path` with `body`, whatever the credentials.
    pub fn public_route(&self, method: HttpMethod, path: &str, status: u16, body: Value) {
        self.insert_route(method, path, status, body, true);
    }

    pub fn go_offline(&self) {
        self.state.offline.store(true, Ordering::SeqCst);
    }

    pub fn refresh_calls(&self) -> usize {
        self.state.refresh_calls.load(Ordering::SeqCst)
    }

    pub fn seen(&self) -> Vec<Seen> {
        self.state.seen.lock().clone()
    }

    /// Authorization headers sent to `path`, in order.
    pub fn authorizations_for(&self, path: &str) -> Vec<Option<String>> {
        self.seen()
            .into_iter()
            .filter(|seen| seen.path == path)
            .map(|seen| seen.authorization)
            .collect()
    }

    fn insert_route(&self, method: HttpMethod, path: &str, status: u16, body: Value, public: bool) {
        self.state.routes.lock().insert(
            format!("{method} {path}"),
            Route {
                status,
                body,
                public,
            },
        );
    }

    async fn refresh(&self) -> ApiResponse {
        self.state.refresh_calls.fetch_add(1, Ordering::SeqCst);
        let delay = *self.state.refresh_delay.lock();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let reply = self.state.refresh_reply.lock().clone();
        match reply {
            RefreshReply::Tokens { access, refresh } => {
                *self.state.valid_token.lock() = access.clone();
                let body = match refresh {
                    Some(refresh) => json!({ "access": access, "refresh": refresh }),
                    None => json!({ "access": access }),
                };
                ApiResponse::json_body(200, &body)
            }
            RefreshReply::Status(status) => ApiResponse::json_body(
                status,
                &json!({ "detail": "Token is invalid or expired", "code": "token_not_valid" }),
            ),
        }
    }
}

impl HttpTransport for ScriptedBackend {
    async fn send(&self, request: OutboundRequest) -> Result<ApiResponse, TransportError> {
        let path = request.url.path().to_string();
        let authorization = request.headers.get("Authorization").map(ToString::to_string);
        self.state.seen.lock().push(Seen {
            method: request.method,
            path: path.clone(),
            query: request.url.query().map(ToString::to_string),
            authorization: authorization.clone(),
            body: request
                .body
                .as_deref()
                .map(|bytes| serde_json::from_slice(bytes).expect("JSON request body")),
        });

        if self.state.offline.load(Ordering::SeqCst) {
            return Err(TransportError::Connection("connection refused".into()));
        }

        if path == *self.state.refresh_path.lock() {
            return Ok(self.refresh().await);
        }

        let route = self
            .state
            .routes
            .lock()
            .get(&format!("{} {path}", request.method))
            .cloned();
        let public = route.as_ref().is_some_and(|route| route.public);
        let expected = format!("Bearer {}", self.state.valid_token.lock());

        if !public && authorization.as_deref() != Some(expected.as_str()) {
            return Ok(ApiResponse::json_body(
                401,
                &json!({ "detail": "Given token not valid for any token type" }),
            ));
        }

        Ok(match route {
            Some(route) => ApiResponse::json_body(route.status, &route.body),
            None => ApiResponse::json_body(200, &json!({ "path": path })),
        })
    }
}

/// Session storage kept in memory, observable from the test.
#[derive(Debug, Clone, Default)]
pub struct SharedStorage {
    stored: Arc<Mutex<Option<Session>>>,
}

impl SharedStorage {
    pub fn with(session: Session) -> Self {
        Self {
            stored: Arc::new(Mutex::new(Some(session))),
        }
    }

    pub fn stored(&self) -> Option<Session> {
        self.stored.lock().clone()
    }
}

impl SessionStorage for SharedStorage {
    async fn load(&self) -> Result<Option<Session>, StorageError> {
        Ok(self.stored.lock().clone())
    }

    async fn save(&self, session: &Session) -> Result<(), StorageError> {
        *self.stored.lock() = Some(session.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        *self.stored.lock() = None;
        Ok(())
    }
}

/// Builds a client over `backend` whose restored session is `session`.
pub async fn client_with_session(
    backend: &ScriptedBackend,
    session: Session,
) -> (ApiClient<ScriptedBackend, SharedStorage>, SharedStorage) {
    let config = ClientConfig::new(BASE_URL).expect("valid base URL");
    client_with_config(backend, config, session).await
}

/// Builds a client over `backend` with a custom `config`.
pub async fn client_with_config(
    backend: &ScriptedBackend,
    config: ClientConfig,
    session: Session,
) -> (ApiClient<ScriptedBackend, SharedStorage>, SharedStorage) {
    let storage = SharedStorage::with(session);
    let client = ApiClient::new(
        BareClient::new(backend.clone(), config),
        SessionStore::new(storage.clone()),
        RefreshCoordinator::new(),
    );
    client.initialize_session().await;
    (client, storage)
}

/// Builds a client whose stored tokens are `t1` / `r1`.
pub async fn signed_in_client(
    backend: &ScriptedBackend,
) -> (ApiClient<ScriptedBackend, SharedStorage>, SharedStorage) {
    client_with_session(backend, Session::new("t1", Some("r1".into()))).await
}
