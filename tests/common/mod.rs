#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use readytalent_dashboard::{
    config::UpstreamConfig, dto::listing_dto::Credentials,
    services::{listing_service::ListingService, readytalent_client::ReadyTalentClient},
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub query: HashMap<String, String>,
    pub headers: HeaderMap,
}

impl RecordedRequest {
    pub fn request_name(&self) -> &str {
        self.param("requestname").unwrap_or_default()
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }

    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).and_then(|v| v.to_str().ok())
    }
}

pub type Responder = Arc<dyn Fn(&RecordedRequest) -> (StatusCode, Value) + Send + Sync>;

#[derive(Clone)]
struct FakeState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    responder: Responder,
}

pub struct FakeUpstream {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FakeUpstream {
    pub async fn spawn<F>(responder: F) -> Self
    where
        F: Fn(&RecordedRequest) -> (StatusCode, Value) + Send + Sync + 'static,
    {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = FakeState {
            requests: requests.clone(),
            responder: Arc::new(responder),
        };
        let app = Router::new().route("/Prod", post(handle)).with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind fake upstream");
        let addr = listener.local_addr().expect("fake upstream addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("fake upstream server");
        });

        Self {
            base_url: format!("http://{}/Prod", addr),
            requests,
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn count(&self, request_name: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.request_name() == request_name)
            .count()
    }

    pub fn upstream_config(&self) -> UpstreamConfig {
        UpstreamConfig::with_base_url(&self.base_url).expect("valid fake base url")
    }

    pub fn service(&self) -> ListingService {
        ListingService::new(ReadyTalentClient::new(self.upstream_config()).expect("client"))
    }
}

async fn handle(
    State(state): State<FakeState>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    let request = RecordedRequest { query, headers };
    let (status, body) = (state.responder)(&request);
    state.requests.lock().unwrap().push(request);
    (status, Json(body))
}

pub fn credentials() -> Credentials {
    Credentials::new("token-abc", "2100123")
}

pub fn school_listing_raw() -> Value {
    json!({
        "sit_employmentlistingid": "A1",
        "acc.name": "SINGAPORE INSTITUTE OF TECHNOLOGY",
        "sit_resumerequired": true,
        "sit_numberofvacancies": 2,
        "sit_applicationdeadline": "2024-06-01",
        "sit_remunerationtype": "Hourly",
        "sit_skillset": "X",
        "sit_rate": 15,
        "sit_supervisor": "Dr. Tan"
    })
}

pub fn generic_listing_raw(id: &str) -> Value {
    json!({
        "sit_employmentlistingid": id,
        "sit_jobpostingid": format!("JP-{}", id),
        "sit_name": "Data Analyst Intern",
        "_sit_employmenttype_value@OData.Community.Display.V1.FormattedValue": "Internship",
        "acc.name": "Acme Pte Ltd",
        "sit_numberofvacancies": 1,
        "sit_allowance": 1200
    })
}

pub fn detail_raw(job_posting_id: &str) -> Value {
    json!([{
        "sit_jobpostingid": job_posting_id,
        "sit_name": "Research Assistant",
        "acc.name": "SINGAPORE INSTITUTE OF TECHNOLOGY",
        "sit_jobdescription": "Assist with lab work",
        "sit_remunerationtype": 2,
        "sit_rate": 15,
        "sit_actualstartdate": "2024-07-01T00:00:00Z",
        "sit_numberofvacancies": 2,
        "ses.sit_transcripts": true
    }])
}

pub fn applicants_raw() -> Value {
    json!([
        { "sit_name": "Alice Lim", "createdon": "2024-05-02T03:04:05Z" },
        { "sit_name": "Bob Tan", "createdon": "2024-05-03T03:04:05Z" }
    ])
}

/// Answers every request shape with healthy data.
pub fn happy_responder(request: &RecordedRequest) -> (StatusCode, Value) {
    match request.request_name() {
        "LoadPartTimeJobDetailsStudentDashboard" => (StatusCode::OK, json!([school_listing_raw()])),
        "LoadJobDetailsStudentDashboard" => (StatusCode::OK, json!([generic_listing_raw("B1")])),
        "LoadJobDetailsForStudent" => {
            let id = request.param("jobid").unwrap_or_default().to_string();
            (StatusCode::OK, detail_raw(&id))
        }
        "GetStudentApplicationDetails" => (StatusCode::OK, applicants_raw()),
        _ => (StatusCode::BAD_REQUEST, json!({ "message": "unknown request" })),
    }
}
