use axum::Json;
use axum::extract::Request;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Mock provider directory. The shape is the stable contract; the values
/// are generated per request.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct NearbyDoctorsRequest {
    pub specialty: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for NearbyDoctorsRequest {
    fn default() -> Self {
        Self {
            specialty: "general".to_string(),
            latitude: 0.0,
            longitude: 0.0,
        }
    }
}

#[derive(Serialize)]
pub struct NearbyDoctorsResponse {
    pub success: bool,
    #[serde(rename = "specialtyName")]
    pub specialty_name: &'static str,
    pub results: Vec<DoctorRecord>,
}

#[derive(Serialize)]
pub struct DoctorRecord {
    pub id: u32,
    pub name: String,
    pub distance: f64,
    pub phone: String,
    pub opening_hours: String,
    pub rating: f64,
    pub review_count: u32,
    pub address: String,
    pub map_link: String,
    pub image_url: String,
}

#[tracing::instrument(skip(request))]
pub async fn nearby_doctors_handler(request: Request) -> Response {
    let params = parse_request(request).await;

    let specialty_name = match params.specialty.as_str() {
        "diabetes" => "Endocrinologist",
        "heart" => "Cardiologist",
        "kidney" => "Nephrologist",
        "general" => "General Practitioner",
        _ => "Specialist",
    };

    let mut rng = rand::rng();
    let results = (1..=3)
        .map(|i| DoctorRecord {
            id: i,
            name: if i == 1 {
                format!("City General Hospital - {specialty_name}")
            } else {
                format!("{specialty_name} Center #{i}")
            },
            distance: round1(rng.random_range(0.5..5.0)),
            phone: format!(
                "(555) {}-{}",
                rng.random_range(100..1000),
                rng.random_range(1000..10000)
            ),
            opening_hours: format!(
                "Open until {}:{} PM",
                rng.random_range(5..9),
                if rng.random_bool(0.5) { "00" } else { "30" }
            ),
            rating: round1(rng.random_range(3.5..5.0)),
            review_count: rng.random_range(50..=200),
            address: format!(
                "{} {} St.",
                rng.random_range(100..1000),
                if i == 1 { "Main" } else { "Medical" }
            ),
            map_link: format!(
                "https://www.google.com/maps?q={}+near+me@{},{}",
                specialty_name.replace(' ', "+"),
                params.latitude,
                params.longitude
            ),
            image_url: format!(
                "https://source.unsplash.com/random/300x200/?hospital,{}",
                params.specialty
            ),
        })
        .collect();

    (
        StatusCode::OK,
        Json(NearbyDoctorsResponse {
            success: true,
            specialty_name,
            results,
        }),
    )
        .into_response()
}

/// Accepts JSON or form-encoded bodies; unparseable input falls back to the
/// defaults rather than failing the lookup.
async fn parse_request(request: Request) -> NearbyDoctorsRequest {
    let is_json = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| ct.contains("application/json"))
        .unwrap_or(false);

    let bytes = axum::body::to_bytes(request.into_body(), usize::MAX)
        .await
        .unwrap_or_default();

    if is_json {
        serde_json::from_slice(&bytes).unwrap_or_default()
    } else {
        serde_urlencoded::from_bytes(&bytes).unwrap_or_default()
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
