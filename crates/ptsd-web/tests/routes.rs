use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use ptsd_core::fields::{FEATURE_COUNT, fields};
use ptsd_core::models::intake::IntakeRecord;
use ptsd_model::artifact::{
    ClassifierArtifact, ClassifierModel, FORMAT_VERSION, ModelBundle, ScalerArtifact,
};
use ptsd_model::estimator::RiskEstimator;
use ptsd_model::logistic::LogisticRegression;
use ptsd_model::scaler::StandardScaler;
use ptsd_provider::provider::ModelProvider;
use ptsd_provider::source::ArtifactSource;
use ptsd_web::render::templates;
use ptsd_web::state::AppState;

/// Constant classifier: sigmoid(intercept) whatever the input.
fn app(intercept: f64) -> Router {
    let bundle = ModelBundle {
        scaler: ScalerArtifact {
            format_version: FORMAT_VERSION,
            feature_names: None,
            scaler: StandardScaler {
                mean: vec![0.0; FEATURE_COUNT],
                scale: vec![1.0; FEATURE_COUNT],
            },
        },
        classifier: ClassifierArtifact {
            format_version: FORMAT_VERSION,
            feature_names: None,
            model: ClassifierModel::LogisticRegression(LogisticRegression {
                coefficients: vec![0.0; FEATURE_COUNT],
                intercept,
            }),
        },
    };

    let state = AppState {
        estimator: Arc::new(RiskEstimator::new(Arc::new(bundle)).unwrap()),
        provider: Arc::new(ModelProvider::new(
            ArtifactSource::parse("scaler.json"),
            ArtifactSource::parse("https://models.example.org/model.json"),
        )),
        templates: Arc::new(templates().unwrap()),
    };
    ptsd_web::router(state)
}

fn encode(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

fn default_pairs() -> Vec<(String, String)> {
    fields()
        .iter()
        .map(|f| (f.id.clone(), f.default_value()))
        .collect()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn form_post(body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

fn json_post(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = send(app(0.0), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        serde_json::from_str::<Value>(&body).unwrap(),
        json!({ "status": "ok", "model_loaded": false })
    );
}

#[tokio::test]
async fn form_page_lists_every_field_with_defaults() {
    let (status, body) = send(app(0.0), get("/")).await;
    assert_eq!(status, StatusCode::OK);
    for field in fields() {
        assert!(body.contains(&format!("name=\"{}\"", field.id)), "{}", field.id);
    }
    assert!(body.contains("value=\"50\""));
    assert!(body.contains("value=\"12\""));
    assert!(!body.contains("result-box high"));
    assert!(!body.contains("result-box low"));
}

#[tokio::test]
async fn high_probability_renders_high_risk_box() {
    // sigmoid(2) = 0.8808
    let (status, body) = send(app(2.0), form_post(encode(&default_pairs()))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("result-box high"));
    assert!(body.contains("High PTSD risk (88.08%)"));
    assert!(body.contains("<progress value=\"0.88"));
    assert!(!body.contains("Low PTSD risk"));
}

#[tokio::test]
async fn half_probability_renders_low_risk_box() {
    let (status, body) = send(app(0.0), form_post(encode(&default_pairs()))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("result-box low"));
    assert!(body.contains("Low PTSD risk (50.00%)"));
    assert!(!body.contains("High PTSD risk"));
}

#[tokio::test]
async fn submitted_values_are_kept_in_the_form() {
    let mut pairs = default_pairs();
    for (k, v) in pairs.iter_mut() {
        if k == "pulse" {
            *v = "96".to_string();
        }
        if k == "trauma_fear" {
            *v = "3".to_string();
        }
    }
    let (_, body) = send(app(0.0), form_post(encode(&pairs))).await;
    assert!(body.contains("name=\"pulse\" type=\"number\" step=\"0.01\" value=\"96\""));
    assert!(body.contains("<option value=\"3\" selected>"));
}

#[tokio::test]
async fn missing_form_field_returns_422_with_message() {
    let pairs: Vec<_> = default_pairs()
        .into_iter()
        .filter(|(k, _)| k != "pulse")
        .collect();
    let (status, body) = send(app(2.0), form_post(encode(&pairs))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.contains("missing required field: pulse"));
    assert!(!body.contains("data-risk"));
}

#[tokio::test]
async fn out_of_domain_form_code_returns_422() {
    let mut pairs = default_pairs();
    for (k, v) in pairs.iter_mut() {
        if k == "smoking" {
            *v = "7".to_string();
        }
    }
    let (status, body) = send(app(0.0), form_post(encode(&pairs))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.contains("not a valid option for"));
}

#[tokio::test]
async fn json_assessment_returns_probability_and_level() {
    let record = serde_json::to_value(IntakeRecord::default()).unwrap();
    let (status, body) = send(app(2.0), json_post("/api/assessments", &record)).await;
    assert_eq!(status, StatusCode::OK);

    let value: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value["risk_level"], "high");
    assert_eq!(value["percent"], "88.08%");
    let p = value["probability"].as_f64().unwrap();
    assert!((p - 0.880_797).abs() < 1e-6);
    assert!(value["id"].is_string());
    assert!(value["assessed_at"].is_string());
}

#[tokio::test]
async fn json_assessment_rejects_out_of_domain_code() {
    let mut record = serde_json::to_value(IntakeRecord::default()).unwrap();
    record["education"] = json!(9);
    let (status, body) = send(app(0.0), json_post("/api/assessments", &record)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("error"));
}

#[tokio::test]
async fn json_assessment_rejects_missing_field() {
    let mut record = serde_json::to_value(IntakeRecord::default()).unwrap();
    record.as_object_mut().unwrap().remove("asds");
    let (status, _) = send(app(0.0), json_post("/api/assessments", &record)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn fields_endpoint_lists_schema_in_order() {
    let (status, body) = send(app(0.0), get("/api/fields")).await;
    assert_eq!(status, StatusCode::OK);
    let value: Value = serde_json::from_str(&body).unwrap();
    let list = value.as_array().unwrap();
    assert_eq!(list.len(), FEATURE_COUNT);
    assert_eq!(list[0]["id"], "asds");
    assert_eq!(list[0]["kind"]["kind"], "numeric");
    assert_eq!(list[15]["id"], "trauma_fear");
    assert_eq!(list[15]["kind"]["choices"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn model_endpoint_describes_loaded_artifacts() {
    let (status, body) = send(app(0.0), get("/api/model")).await;
    assert_eq!(status, StatusCode::OK);
    let value: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value["kind"], "logistic_regression");
    assert_eq!(value["n_features"], 16);
    assert_eq!(value["scaler_source"], "scaler.json");
    assert_eq!(value["classifier_source"], "https://models.example.org/model.json");
}

#[tokio::test]
async fn malformed_json_body_returns_json_error() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/assessments")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(app(0.0), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let value: Value = serde_json::from_str(&body).unwrap();
    assert!(value["error"].as_str().unwrap().contains("JSON"));
}

#[tokio::test]
async fn json_body_without_content_type_returns_json_error() {
    let record = serde_json::to_vec(&IntakeRecord::default()).unwrap();
    let request = Request::builder()
        .method("POST")
        .uri("/api/assessments")
        .body(Body::from(record))
        .unwrap();
    let (status, body) = send(app(0.0), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let value: Value = serde_json::from_str(&body).unwrap();
    assert!(value["error"].as_str().unwrap().contains("Content-Type"));
}
