use crate::errors::ServerError;
use crate::model::{describe_estimate, EstimateRequest, ModelStore};
use crate::responses::{html_response, ResultResp};
use crate::templates::{self, EstimateFormVm};
use astra::Request;
use std::collections::HashMap;
use std::io::Read;

/// Largest form body accepted by `POST /predict`.
pub const MAX_FORM_BYTES: u64 = 16 * 1024;

pub fn handle(mut req: Request, store: &ModelStore) -> ResultResp {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    tracing::debug!(%method, %path, "request");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => home(store, None),
        ("POST", "/predict") => {
            let form = parse_form(&mut req)?;
            predict(store, &form)
        }
        ("POST", "/admin/reload") => {
            let artifact = store
                .reload()
                .map_err(|e| ServerError::ModelError(e.to_string()))?;

            html_response(templates::pages::reloaded_page(
                artifact.trained_at,
                artifact.rows_used,
                artifact.location_encoder.classes().len(),
            ))
        }
        _ => Err(ServerError::NotFound),
    }
}

fn home(store: &ModelStore, prediction_text: Option<&str>) -> ResultResp {
    let artifact = store.current();
    let vm = EstimateFormVm {
        locations: artifact.location_encoder.classes(),
        types: artifact.type_encoder.classes(),
        prediction_text,
    };

    html_response(templates::pages::home_page(&vm))
}

fn predict(store: &ModelStore, form: &HashMap<String, String>) -> ResultResp {
    let request = estimate_request(form)?;
    let amount = store.current().estimate(&request)?;

    let text = describe_estimate(amount);
    tracing::info!(location = %request.location, amount, "{text}");

    home(store, Some(&text))
}

fn parse_form(req: &mut Request) -> Result<HashMap<String, String>, ServerError> {
    let mut body = Vec::new();
    req.body_mut()
        .reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("unreadable form body: {e}")))?;

    if body.len() as u64 > MAX_FORM_BYTES {
        return Err(ServerError::BadRequest(format!(
            "form body exceeds {MAX_FORM_BYTES} bytes"
        )));
    }

    Ok(url::form_urlencoded::parse(&body).into_owned().collect())
}

fn estimate_request(form: &HashMap<String, String>) -> Result<EstimateRequest, ServerError> {
    let text = |name: &str| form.get(name).map(|v| v.trim()).unwrap_or_default();

    let whole_number = |name: &str| {
        text(name)
            .parse::<u32>()
            .map_err(|_| ServerError::BadRequest(format!("{name} must be a whole number")))
    };

    let location = text("location");
    if location.is_empty() {
        return Err(ServerError::BadRequest("location is required".into()));
    }

    let kind = Some(text("type"))
        .filter(|t| !t.is_empty())
        .map(str::to_string);

    Ok(EstimateRequest {
        location: location.to_string(),
        kind,
        bed: whole_number("bed")?,
        bath: whole_number("bath")?,
        toilet: whole_number("toilet")?,
        parking_space: whole_number("pkn_space")?,
    })
}
