//! In-memory backend for client and store tests.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::auth::MemoryTokenStore;
use crate::client::ApiClient;
use crate::error::{ApiError, ApiResult};
use crate::id::ItemId;
use crate::transport::Transport;

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: &'static str,
    pub path: String,
    pub token: Option<String>,
}

#[derive(Default)]
struct FakeState {
    collections: HashMap<String, Vec<Value>>,
    raw_bodies: HashMap<String, Value>,
    keep_ids: HashSet<String>,
    calls: Vec<Call>,
    next_id: u64,
    offline: bool,
}

/// Mockapi-style backend: creates echo the payload with a fresh string id
#[derive(Default)]
pub struct FakeBackend {
    state: Mutex<FakeState>,
}

impl FakeBackend {
    pub fn new() -> Arc<Self> {
        let backend = Self::default();
        backend.state.lock().unwrap().next_id = 100;
        Arc::new(backend)
    }

    /// Serve `body` verbatim for GETs of `path`
    pub fn respond_with(&self, path: &str, body: Value) {
        self.state.lock().unwrap().raw_bodies.insert(path.to_string(), body);
    }

    pub fn seed(&self, path: &str, records: Vec<Value>) {
        self.state.lock().unwrap().collections.insert(path.to_string(), records);
    }

    /// Creates under `path` keep the id from the payload
    pub fn keep_client_ids(&self, path: &str) {
        self.state.lock().unwrap().keep_ids.insert(path.to_string());
    }

    pub fn records(&self, path: &str) -> Vec<Value> {
        self.state
            .lock()
            .unwrap()
            .collections
            .get(path)
            .cloned()
            .unwrap_or_default()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn set_offline(&self, offline: bool) {
        self.state.lock().unwrap().offline = offline;
    }

    fn record(&self, method: &'static str, path: &str, token: Option<&str>) -> ApiResult<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call {
            method,
            path: path.to_string(),
            token: token.map(str::to_string),
        });
        if state.offline {
            return Err(ApiError::Network("connection refused".to_string()));
        }
        Ok(())
    }
}

fn split_item_path(path: &str) -> Option<(String, ItemId)> {
    let (collection, id) = path.trim_end_matches('/').rsplit_once('/')?;
    Some((format!("{}/", collection), ItemId::from(id)))
}

fn record_id(record: &Value) -> Option<ItemId> {
    serde_json::from_value(record.get("id")?.clone()).ok()
}

#[async_trait(?Send)]
impl Transport for FakeBackend {
    async fn get(&self, path: &str, token: Option<&str>) -> ApiResult<Value> {
        self.record("GET", path, token)?;
        let state = self.state.lock().unwrap();
        if let Some(body) = state.raw_bodies.get(path) {
            return Ok(body.clone());
        }
        if let Some(records) = state.collections.get(path) {
            return Ok(Value::Array(records.clone()));
        }
        let (collection, id) = split_item_path(path).ok_or(ApiError::Status {
            status: 404,
            body: String::new(),
        })?;
        state
            .collections
            .get(&collection)
            .and_then(|records| records.iter().find(|r| record_id(r).as_ref() == Some(&id)))
            .cloned()
            .ok_or(ApiError::Status {
                status: 404,
                body: "Not found".to_string(),
            })
    }

    async fn post(&self, path: &str, token: Option<&str>, body: &Value) -> ApiResult<Value> {
        self.record("POST", path, token)?;
        let mut state = self.state.lock().unwrap();
        match path {
            "auth/token/login/" => {
                if body["password"] == json!("secret") {
                    Ok(json!({"auth_token": "tok-1"}))
                } else {
                    Err(ApiError::Status {
                        status: 400,
                        body: "Unable to log in".to_string(),
                    })
                }
            }
            "auth/token/logout/" => Ok(Value::Null),
            "auth/users/" => Ok(json!({"id": 1, "username": body["username"], "email": body["email"]})),
            _ => {
                let mut created = body.clone();
                if !state.keep_ids.contains(path) || created.get("id").is_none() {
                    state.next_id += 1;
                    created["id"] = json!(state.next_id.to_string());
                }
                state
                    .collections
                    .entry(path.to_string())
                    .or_default()
                    .push(created.clone());
                Ok(created)
            }
        }
    }

    async fn delete(&self, path: &str, token: Option<&str>) -> ApiResult<()> {
        self.record("DELETE", path, token)?;
        let mut state = self.state.lock().unwrap();
        let (collection, id) = split_item_path(path).ok_or(ApiError::Status {
            status: 404,
            body: String::new(),
        })?;
        let records = state.collections.entry(collection).or_default();
        let before = records.len();
        records.retain(|r| record_id(r).as_ref() != Some(&id));
        if records.len() == before {
            return Err(ApiError::Status {
                status: 404,
                body: "Not found".to_string(),
            });
        }
        Ok(())
    }
}

/// Anonymous client plus the backend and token store behind it
pub fn anonymous_client() -> (ApiClient, Arc<FakeBackend>, Arc<MemoryTokenStore>) {
    let backend = FakeBackend::new();
    backend.keep_client_ids("anonymous/favorites/");
    backend.keep_client_ids("favorites/");
    let tokens = Arc::new(MemoryTokenStore::new());
    let api = ApiClient::new(backend.clone(), tokens.clone());
    (api, backend, tokens)
}
