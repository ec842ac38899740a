//! Test doubles for the gateway capabilities plus JSON fixtures.

use crate::shared::api_utils::GatewayConfig;
use crate::shared::gateway::{Gateway, HttpRequest, HttpResponse, HttpTransport, Method, TransportError};
use crate::shared::navigation::Navigator;
use crate::system::auth::storage::{MemorySessionStorage, PersistedAuth};
use async_trait::async_trait;
use contracts::system::users::User;
use futures::channel::oneshot;
use serde_json::{json, Value};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

pub const TEST_BASE_URL: &str = "http://api.test";

type Reply = Result<HttpResponse, TransportError>;

enum Scripted {
    Ready(Reply),
    Deferred(oneshot::Receiver<Reply>),
}

/// Transport answering from a script. Routed replies are keyed by method and
/// path (query stripped); the last routed reply for a key is sticky so the
/// refetch after a mutation sees it too. Unrouted replies are consumed FIFO.
#[derive(Default)]
pub struct ScriptedTransport {
    routes: Mutex<HashMap<(Method, String), VecDeque<Scripted>>>,
    fallback: Mutex<VecDeque<Scripted>>,
    log: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn reply(&self, status: u16, body: &str) {
        self.fallback.lock().unwrap().push_back(Scripted::Ready(Ok(HttpResponse {
            status,
            body: body.to_string(),
        })));
    }

    pub fn reply_json(&self, status: u16, body: Value) {
        self.reply(status, &body.to_string());
    }

    pub fn fail(&self, err: TransportError) {
        self.fallback.lock().unwrap().push_back(Scripted::Ready(Err(err)));
    }

    pub fn on(&self, method: Method, path: &str, status: u16, body: Value) {
        self.push_route(
            method,
            path,
            Scripted::Ready(Ok(HttpResponse {
                status,
                body: body.to_string(),
            })),
        );
    }

    pub fn on_fail(&self, method: Method, path: &str, err: TransportError) {
        self.push_route(method, path, Scripted::Ready(Err(err)));
    }

    /// The request on this route stays pending until the sender fires
    pub fn on_deferred(&self, method: Method, path: &str) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.push_route(method, path, Scripted::Deferred(rx));
        tx
    }

    fn push_route(&self, method: Method, path: &str, scripted: Scripted) {
        self.routes
            .lock()
            .unwrap()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(scripted);
    }

    fn next(&self, method: Method, path: &str) -> Option<Scripted> {
        let mut routes = self.routes.lock().unwrap();
        if let Some(queue) = routes.get_mut(&(method, path.to_string())) {
            let sticky = match queue.front() {
                Some(Scripted::Ready(reply)) if queue.len() == 1 => Some(reply.clone()),
                _ => None,
            };
            if let Some(reply) = sticky {
                return Some(Scripted::Ready(reply));
            }
            if let Some(next) = queue.pop_front() {
                return Some(next);
            }
        }
        drop(routes);
        self.fallback.lock().unwrap().pop_front()
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.log.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.log.lock().unwrap().last().cloned()
    }

    /// Requests whose path (query stripped) matches
    pub fn requests_to(&self, method: Method, path: &str) -> Vec<HttpRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method && path_of(&r.url) == path)
            .collect()
    }

    pub fn count(&self, method: Method, path: &str) -> usize {
        self.requests_to(method, path).len()
    }

    pub fn body_of_last(&self, method: Method, path: &str) -> Option<Value> {
        self.requests_to(method, path)
            .last()
            .and_then(|r| r.body.as_deref().map(|b| serde_json::from_str(b).unwrap()))
    }
}

fn path_of(url: &str) -> &str {
    let path = url.strip_prefix(TEST_BASE_URL).unwrap_or(url);
    path.split('?').next().unwrap_or(path)
}

#[async_trait(?Send)]
impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let method = request.method;
        let path = path_of(&request.url).to_string();
        self.log.lock().unwrap().push(request);
        match self.next(method, &path) {
            Some(Scripted::Ready(reply)) => reply,
            Some(Scripted::Deferred(rx)) => rx
                .await
                .unwrap_or_else(|_| Err(TransportError::Network("cancelled".into()))),
            None => Err(TransportError::Network(format!(
                "unscripted {} {}",
                method.as_str(),
                path
            ))),
        }
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    redirects: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn redirects(&self) -> Vec<String> {
        self.redirects.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, path: &str) {
        self.redirects.lock().unwrap().push(path.to_string());
    }
}

pub struct Harness {
    pub transport: Arc<ScriptedTransport>,
    pub session: Arc<MemorySessionStorage>,
    pub navigator: Arc<RecordingNavigator>,
}

impl Harness {
    pub fn anonymous() -> Self {
        Self {
            transport: Arc::default(),
            session: Arc::default(),
            navigator: Arc::default(),
        }
    }

    pub fn signed_in(token: &str) -> Self {
        let h = Self::anonymous();
        use crate::system::auth::storage::SessionStorage;
        h.session.save(&PersistedAuth {
            user: Some(user(1, "Admin Papaloma", "admin")),
            token: Some(token.to_string()),
            is_authenticated: true,
        });
        h
    }
}

pub fn gateway_with(h: &Harness) -> Gateway {
    Gateway::new(
        GatewayConfig::new(TEST_BASE_URL),
        h.transport.clone(),
        h.session.clone(),
        h.navigator.clone(),
    )
}

pub fn ok(data: Value) -> Value {
    json!({ "success": true, "message": "OK", "data": data })
}

pub fn ack() -> Value {
    json!({ "success": true, "message": "OK" })
}

pub fn fail(message: &str) -> Value {
    json!({ "success": false, "message": message })
}

pub fn user_json(id: i64, name: &str, role: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "email": format!("user{}@papaloma.id", id),
        "role": role,
        "status": "active",
        "created_at": "2025-01-01T00:00:00.000Z",
        "updated_at": "2025-01-01T00:00:00.000Z"
    })
}

pub fn user(id: i64, name: &str, role: &str) -> User {
    serde_json::from_value(user_json(id, name, role)).unwrap()
}

pub fn kategori_json(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": null,
        "barang_count": 0,
        "created_at": "2025-01-01T00:00:00.000Z",
        "updated_at": "2025-01-01T00:00:00.000Z"
    })
}

pub fn barang_json(id: i64, name: &str, stok: u32) -> Value {
    json!({
        "id": id,
        "name": name,
        "kategori": { "id": 1, "name": "Bahan Kering" },
        "satuan": "kg",
        "stok": stok,
        "stokMinimum": 10,
        "hargaPerUnit": 15000.0,
        "lokasi": "Gudang A",
        "kondisi": "baik",
        "tanggalKadaluarsa": null,
        "catatan": null,
        "createdAt": "2025-01-01T00:00:00.000Z",
        "updatedAt": "2025-01-01T00:00:00.000Z"
    })
}

pub fn notification_json(id: i64, read: bool) -> Value {
    json!({
        "id": id,
        "user_id": 1,
        "type": "warning",
        "title": "Stok rendah",
        "message": format!("Notifikasi {}", id),
        "read": if read { 1 } else { 0 },
        "created_at": "2025-01-01T00:00:00.000Z"
    })
}

pub fn stats_json(total_barang: u64) -> Value {
    json!({
        "stats": {
            "totalBarang": total_barang,
            "totalNilaiInventaris": 1500000.0,
            "totalBarangMasuk": 12,
            "totalBarangKeluar": 7,
            "barangStokRendah": 2
        }
    })
}
