use actix_web::{get, post, web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use crate::{error::LookupError, hex, provider::Gateway};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupRequest {
    #[serde(default = "default_mcc")]
    pub mcc: u16,
    #[serde(default = "default_mnc")]
    pub mnc: u16,
    pub lac_hex: String,
    pub ci_hex: String,
    // passed through to the provider verbatim
    #[serde(default = "default_radio_type")]
    pub radio_type: String,
}

fn default_mcc() -> u16 {
    505
}

fn default_mnc() -> u16 {
    1
}

fn default_radio_type() -> String {
    "lte".to_string()
}

#[get("/health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

#[post("/cell-location")]
pub async fn service(
    data: web::Json<LookupRequest>,
    gateway: web::Data<Gateway>,
) -> Result<HttpResponse, LookupError> {
    let req = data.into_inner();

    let lac_dec = hex::hex_to_dec(&req.lac_hex)?;
    let ci_dec = hex::hex_to_dec(&req.ci_hex)?;

    let response = gateway.resolve(&req, lac_dec, ci_dec).await?;
    Ok(HttpResponse::Ok().json(response))
}
