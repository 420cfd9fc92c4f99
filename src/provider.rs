use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{error::LookupError, geolocate::LookupRequest};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeolocationPayload {
    cell_towers: [CellTower; 1],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CellTower {
    mobile_country_code: u16,
    mobile_network_code: u16,
    location_area_code: u64,
    cell_id: u64,
    radio_type: String,
}

#[derive(Debug, Deserialize)]
struct ProviderResponse {
    location: Option<Location>,
    #[serde(default)]
    accuracy: f64,
}

#[derive(Debug, Deserialize)]
struct Location {
    lat: f64,
    lng: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResponse {
    pub lat: f64,
    pub lon: f64,
    pub accuracy: f64,
    pub mcc: u16,
    pub mnc: u16,
    pub lac_dec: u64,
    pub ci_dec: u64,
}

/// Client for the upstream geolocation provider, built once at startup and
/// shared read-only across requests.
pub struct Gateway {
    client: reqwest::Client,
    url: String,
    api_key: String,
}

impl Gateway {
    pub fn new(url: &str, api_key: &str, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Gateway {
            client,
            url: url.to_string(),
            api_key: api_key.to_string(),
        })
    }

    pub async fn resolve(
        &self,
        req: &LookupRequest,
        lac_dec: u64,
        ci_dec: u64,
    ) -> Result<LookupResponse, LookupError> {
        // the provider accepts an array of towers but we never batch
        let payload = GeolocationPayload {
            cell_towers: [CellTower {
                mobile_country_code: req.mcc,
                mobile_network_code: req.mnc,
                location_area_code: lac_dec,
                cell_id: ci_dec,
                radio_type: req.radio_type.clone(),
            }],
        };

        let response = self
            .client
            .post(&self.url)
            .query(&[("key", &self.api_key)])
            .json(&payload)
            .send()
            .await
            .map_err(|e| LookupError::Unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // surface the provider's body so quota/auth issues are debuggable
            let body = response.text().await.unwrap_or_default();
            return Err(LookupError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let data: ProviderResponse = response.json().await.map_err(|_| LookupError::Protocol)?;
        let location = data.location.ok_or(LookupError::Protocol)?;

        Ok(LookupResponse {
            lat: location.lat,
            lon: location.lng,
            accuracy: data.accuracy,
            mcc: req.mcc,
            mnc: req.mnc,
            lac_dec,
            ci_dec,
        })
    }
}
