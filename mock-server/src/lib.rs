//! In-memory imitation of the hosted employee dataset.
//!
//! Models the Spanish-provisioned schema variant that forced the client's
//! normalization layer to exist: stored records serialize with capitalized
//! Spanish keys, incoming payloads are accepted under any known key variant,
//! and the flaky status/body combinations of the real service are reproduced
//! deliberately — 201 with a JSON echo on create, 204 with no body on
//! update, 200 with a plain-text body on delete.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::{net::TcpListener, sync::RwLock};

/// Stored record, serialized with the dataset's actual keys.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StoredEmployee {
    #[serde(rename = "Id")]
    pub id: u64,
    #[serde(rename = "Nombre")]
    pub nombre: String,
    #[serde(rename = "Edad")]
    pub edad: Value,
    #[serde(rename = "Puesto")]
    pub puesto: String,
    #[serde(rename = "Telefono")]
    pub telefono: String,
}

#[derive(Clone, Default)]
pub struct AppState {
    db: Arc<RwLock<HashMap<u64, StoredEmployee>>>,
    next_id: Arc<AtomicU64>,
}

#[derive(Deserialize)]
pub struct ListParams {
    #[serde(rename = "Name")]
    name: Option<String>,
}

pub fn app() -> Router {
    let state = AppState::default();
    Router::new()
        .route("/employees", get(list_employees).post(create_employee))
        .route(
            "/employees/{id}",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_employees(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<Vec<StoredEmployee>> {
    let db = state.db.read().await;
    let mut employees: Vec<StoredEmployee> = db.values().cloned().collect();
    // The real service's filter is narrower than the client's: prefix, not
    // substring.
    if let Some(term) = params.name.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        let prefix = term.to_lowercase();
        employees.retain(|e| e.nombre.to_lowercase().starts_with(&prefix));
    }
    employees.sort_by_key(|e| e.id);
    Json(employees)
}

async fn create_employee(
    State(state): State<AppState>,
    Json(input): Json<Value>,
) -> (StatusCode, Json<StoredEmployee>) {
    let id = state.next_id.fetch_add(1, Ordering::Relaxed) + 1;
    let employee = store_fields(id, &input);
    state.db.write().await.insert(id, employee.clone());
    (StatusCode::CREATED, Json(employee))
}

async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<StoredEmployee>, StatusCode> {
    let db = state.db.read().await;
    db.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

/// The real service acknowledges updates with 204 and no body.
async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(input): Json<Value>,
) -> StatusCode {
    let mut db = state.db.write().await;
    if !db.contains_key(&id) {
        return StatusCode::NOT_FOUND;
    }
    db.insert(id, store_fields(id, &input));
    StatusCode::NO_CONTENT
}

/// The real service acknowledges deletes with 200 and a plain-text body.
async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<&'static str, StatusCode> {
    let mut db = state.db.write().await;
    db.remove(&id).map(|_| "OK").ok_or(StatusCode::NOT_FOUND)
}

/// Accept a field under any key variant a client might send. The dataset
/// itself only keeps the Spanish spelling.
fn store_fields(id: u64, input: &Value) -> StoredEmployee {
    StoredEmployee {
        id,
        nombre: text_field(input, &["Nombre", "nombre", "Name", "name"]),
        edad: scalar_field(input, &["Edad", "edad", "Age", "age"]),
        puesto: text_field(input, &["Puesto", "puesto", "Position", "position", "Job"]),
        telefono: text_field(
            input,
            &["Telefono", "telefono", "Phone", "phone", "PhoneNumber"],
        ),
    }
}

fn text_field(input: &Value, keys: &[&str]) -> String {
    keys.iter()
        .find_map(|key| input.get(key).and_then(Value::as_str))
        .unwrap_or_default()
        .to_string()
}

fn scalar_field(input: &Value, keys: &[&str]) -> Value {
    keys.iter()
        .find_map(|key| match input.get(key) {
            Some(v @ (Value::Number(_) | Value::String(_))) => Some(v.clone()),
            _ => None,
        })
        .unwrap_or(Value::Null)
}
