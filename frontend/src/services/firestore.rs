use gloo_net::http::Request;
use log::info;
use serde_json::{json, Map, Value};

use crate::config;
use crate::registration::model::RegistrationRecord;
use crate::registration::pipeline::{RegistrationStore, StoreError};

const AUTO_ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const AUTO_ID_LEN: usize = 20;

/// Appends registrations through the Firestore REST `documents:commit`
/// endpoint. One commit holds one write: create-only, with `createdAt` set to
/// the server's request time.
#[derive(Clone, Debug, PartialEq)]
pub struct FirestoreStore {
    base_url: String,
    project_id: String,
    api_key: Option<String>,
}

impl FirestoreStore {
    pub fn new(base_url: &str, project_id: &str, api_key: Option<&str>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            project_id: project_id.to_string(),
            api_key: api_key.map(str::to_string),
        }
    }

    pub fn from_config() -> Self {
        Self::new(
            config::get_firestore_url(),
            config::firebase_project_id(),
            config::firebase_api_key(),
        )
    }

    fn database(&self) -> String {
        format!("projects/{}/databases/(default)", self.project_id)
    }

    pub fn commit_url(&self) -> String {
        let url = format!("{}/v1/{}/documents:commit", self.base_url, self.database());
        match &self.api_key {
            Some(key) => format!("{}?key={}", url, urlencoding::encode(key)),
            None => url,
        }
    }

    pub fn document_name(&self, id: &str) -> String {
        format!(
            "{}/documents/{}/{}",
            self.database(),
            config::REGISTRATIONS_COLLECTION,
            id
        )
    }
}

impl RegistrationStore for FirestoreStore {
    async fn append(&self, record: &RegistrationRecord) -> Result<(), StoreError> {
        let name = self.document_name(&auto_id(js_sys::Math::random));
        let body = commit_body(&name, record)?;

        let response = Request::post(&self.commit_url())
            .json(&body)?
            .send()
            .await?;

        if !response.ok() {
            let status = response.status();
            let message = response.text().await.unwrap_or_default();
            return Err(StoreError::Rejected { status, message });
        }

        info!("Stored registration {}", name);
        Ok(())
    }
}

impl From<gloo_net::Error> for StoreError {
    fn from(e: gloo_net::Error) -> Self {
        StoreError::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Encode(e.to_string())
    }
}

/// Request body for a create-only write of `record` at `document_name`.
pub fn commit_body(document_name: &str, record: &RegistrationRecord) -> Result<Value, serde_json::Error> {
    Ok(json!({
        "writes": [{
            "update": {
                "name": document_name,
                "fields": to_fields(serde_json::to_value(record)?),
            },
            "updateTransforms": [{
                "fieldPath": RegistrationRecord::CREATED_AT,
                "setToServerValue": "REQUEST_TIME",
            }],
            "currentDocument": { "exists": false },
        }]
    }))
}

fn to_fields(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map
            .into_iter()
            .map(|(key, value)| (key, to_firestore_value(value)))
            .collect(),
        _ => Map::new(),
    }
}

fn to_firestore_value(value: Value) -> Value {
    match value {
        Value::String(s) => json!({ "stringValue": s }),
        Value::Bool(b) => json!({ "booleanValue": b }),
        Value::Number(n) if n.is_i64() || n.is_u64() => json!({ "integerValue": n.to_string() }),
        Value::Number(n) => json!({ "doubleValue": n }),
        Value::Null => json!({ "nullValue": null }),
        Value::Array(items) => json!({
            "arrayValue": { "values": items.into_iter().map(to_firestore_value).collect::<Vec<_>>() }
        }),
        Value::Object(_) => json!({ "mapValue": { "fields": to_fields(value) } }),
    }
}

/// Firestore-style random document id. `random` yields values in `[0, 1)`.
pub fn auto_id(mut random: impl FnMut() -> f64) -> String {
    (0..AUTO_ID_LEN)
        .map(|_| {
            let idx = (random() * AUTO_ID_ALPHABET.len() as f64) as usize;
            AUTO_ID_ALPHABET[idx.min(AUTO_ID_ALPHABET.len() - 1)] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::plan::PlanPreference;

    fn record() -> RegistrationRecord {
        RegistrationRecord {
            name: "Rahul Sharma".to_string(),
            email: "rahul@example.com".to_string(),
            phone: "9876543210".to_string(),
            plan_preference: PlanPreference::Elite,
            country: "India",
            status: "pre_registered",
        }
    }

    #[test]
    fn commit_url_with_and_without_key() {
        let store = FirestoreStore::new("http://localhost:8080/", "demo", None);
        assert_eq!(
            store.commit_url(),
            "http://localhost:8080/v1/projects/demo/databases/(default)/documents:commit"
        );
        let store = FirestoreStore::new("https://firestore.googleapis.com", "demo", Some("k y"));
        assert!(store.commit_url().ends_with("documents:commit?key=k%20y"));
    }

    #[test]
    fn body_is_a_create_only_write_with_server_timestamp() {
        let store = FirestoreStore::new("http://localhost:8080", "demo", None);
        let name = store.document_name("abc");
        assert_eq!(name, "projects/demo/databases/(default)/documents/registrations/abc");

        let body = commit_body(&name, &record()).unwrap();
        let write = &body["writes"][0];
        assert_eq!(write["update"]["name"], name);
        assert_eq!(write["currentDocument"]["exists"], false);
        assert_eq!(write["updateTransforms"][0]["fieldPath"], "createdAt");
        assert_eq!(write["updateTransforms"][0]["setToServerValue"], "REQUEST_TIME");

        let fields = &write["update"]["fields"];
        assert_eq!(fields["name"]["stringValue"], "Rahul Sharma");
        assert_eq!(fields["planPreference"]["stringValue"], "elite");
        assert_eq!(fields["country"]["stringValue"], "India");
        assert_eq!(fields["status"]["stringValue"], "pre_registered");
        assert!(fields.get("createdAt").is_none());
    }

    #[test]
    fn auto_ids_stay_in_alphabet() {
        let mut n = 0.0;
        let id = auto_id(|| {
            n += 0.049;
            n % 1.0
        });
        assert_eq!(id.len(), 20);
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));

        // a misbehaving source returning 1.0 must not index out of bounds
        assert_eq!(auto_id(|| 1.0), "9".repeat(20));
        assert_eq!(auto_id(|| 0.0), "A".repeat(20));
    }
}
