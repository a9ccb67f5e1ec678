//! Google Translate and Google Maps Geocoding clients.

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::AppConfig;
use crate::services::{Geocoder, Translator};

const TRANSLATE_URL: &str = "https://translation.googleapis.com/language/translate/v2";
const GEOCODE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

pub struct GoogleTranslate {
    config: AppConfig,
    client: reqwest::Client,
}

impl GoogleTranslate {
    pub fn new(config: AppConfig, client: reqwest::Client) -> Self {
        Self { config, client }
    }
}

#[derive(Deserialize)]
struct TranslateResponse {
    data: Option<TranslateData>,
}

#[derive(Deserialize)]
struct TranslateData {
    translations: Vec<Translation>,
}

#[derive(Deserialize)]
struct Translation {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

#[async_trait]
impl Translator for GoogleTranslate {
    async fn translate(&self, text: &str, target: &str) -> Result<String, String> {
        let key = self
            .config
            .translate_api_key
            .as_deref()
            .ok_or_else(|| "GOOGLE_TRANSLATE_API_KEY is not set".to_string())?;

        let response = self
            .client
            .post(TRANSLATE_URL)
            .query(&[("q", text), ("target", target), ("key", key)])
            .send()
            .await
            .map_err(|e| format!("translation request failed: {}", e))?;

        let payload: TranslateResponse = response
            .json()
            .await
            .map_err(|e| format!("translation response was not valid JSON: {}", e))?;

        payload
            .data
            .and_then(|data| data.translations.into_iter().next())
            .map(|translation| translation.translated_text)
            .ok_or_else(|| "translation response contained no translations".to_string())
    }
}

pub struct GoogleGeocode {
    config: AppConfig,
    client: reqwest::Client,
}

impl GoogleGeocode {
    pub fn new(config: AppConfig, client: reqwest::Client) -> Self {
        Self { config, client }
    }
}

#[derive(Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Deserialize)]
struct GeocodeResult {
    formatted_address: String,
}

#[async_trait]
impl Geocoder for GoogleGeocode {
    async fn japanese_address(&self, address: &str) -> Result<String, String> {
        let key = self
            .config
            .maps_api_key
            .as_deref()
            .ok_or_else(|| "GOOGLE_MAPS_API_KEY is not set".to_string())?;

        let response = self
            .client
            .get(GEOCODE_URL)
            .query(&[("address", address), ("key", key), ("language", "ja")])
            .send()
            .await
            .map_err(|e| format!("geocoding request failed: {}", e))?;

        let payload: GeocodeResponse = response
            .json()
            .await
            .map_err(|e| format!("geocoding response was not valid JSON: {}", e))?;

        if payload.status != "OK" {
            return Err(format!("geocoding returned status {}", payload.status));
        }

        payload
            .results
            .into_iter()
            .next()
            .map(|result| result.formatted_address)
            .ok_or_else(|| "geocoding returned no results".to_string())
    }
}
