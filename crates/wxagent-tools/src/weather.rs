use async_trait::async_trait;
use serde::Deserialize;
use tracing::{info, warn};
use wxagent_core::{
    AgentError, Tool, ToolObservation, WeatherConfig, WeatherQuery, UNKNOWN_WEATHER,
};

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    weather: Vec<Condition>,
    main: MainMetrics,
}

#[derive(Debug, Deserialize)]
struct Condition {
    description: String,
}

#[derive(Debug, Deserialize)]
struct MainMetrics {
    temp: f64,
    humidity: f64,
}

/// Current-weather lookup against an OpenWeatherMap-shaped provider.
pub struct WeatherTool {
    http: reqwest::Client,
    config: WeatherConfig,
}

impl WeatherTool {
    pub fn new(config: WeatherConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Never fails: any problem reaching or reading the provider yields `"unknown"`.
    pub async fn get_weather(&self, city: &str) -> String {
        match self.fetch(city).await {
            Ok(summary) => {
                info!("WEATHER: {} -> {}", city, summary);
                summary
            }
            Err(e) => {
                warn!("WEATHER: Lookup for '{}' failed: {}", city, e);
                UNKNOWN_WEATHER.to_string()
            }
        }
    }

    async fn fetch(&self, city: &str) -> Result<String, AgentError> {
        let body: serde_json::Value = self
            .http
            .get(&self.config.base_url)
            .query(&[
                ("q", city),
                ("appid", self.config.api_key.as_str()),
                ("units", self.config.units.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AgentError::ExternalApi(e.to_string()))?
            .json()
            .await
            .map_err(|e| AgentError::ExternalApi(e.to_string()))?;

        summarize(&body, &self.config.status_field, self.config.success_code)
    }
}

/// Turns a provider payload into `"{description}, {temp}°C, {humidity}% humidity"`.
///
/// The status field is compared numerically; providers send it either as a
/// number or as a numeric string.
pub fn summarize(
    body: &serde_json::Value,
    status_field: &str,
    success_code: i64,
) -> Result<String, AgentError> {
    let status = body.get(status_field).and_then(|v| {
        v.as_i64()
            .or_else(|| v.as_str().and_then(|s| s.trim().parse().ok()))
    });

    if status != Some(success_code) {
        return Err(AgentError::ExternalApi(format!(
            "provider status {}",
            body.get(status_field)
                .map(|v| v.to_string())
                .unwrap_or_else(|| "missing".into())
        )));
    }

    let current = CurrentWeather::deserialize(body)
        .map_err(|e| AgentError::ExternalApi(e.to_string()))?;

    let description = current
        .weather
        .first()
        .map(|c| c.description.as_str())
        .ok_or_else(|| AgentError::ExternalApi("no weather conditions".into()))?;

    Ok(format!(
        "{}, {}°C, {}% humidity",
        description, current.main.temp, current.main.humidity
    ))
}

#[async_trait]
impl Tool for WeatherTool {
    fn name(&self) -> &'static str {
        "get_weather"
    }

    async fn call(&self, parameters: &serde_json::Value) -> Result<ToolObservation, AgentError> {
        let query = WeatherQuery::from_params(parameters);
        let summary = self.get_weather(&query.city).await;

        Ok(ToolObservation(format!(
            "The weather in {} is {}",
            query.city, summary
        )))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use axum::{extract::Query, routing::get, Json, Router};
    use serde_json::json;

    use super::*;

    fn sample(cod: serde_json::Value) -> serde_json::Value {
        json!({
            "cod": cod,
            "name": "Chennai",
            "weather": [{"main": "Clear", "description": "clear sky"}],
            "main": {"temp": 25, "humidity": 60}
        })
    }

    fn config(base_url: String) -> WeatherConfig {
        WeatherConfig {
            api_key: "test-key".into(),
            base_url,
            units: "metric".into(),
            status_field: "cod".into(),
            success_code: 200,
        }
    }

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/weather")
    }

    #[test]
    fn formats_success_payload() {
        let summary = summarize(&sample(json!(200)), "cod", 200).unwrap();
        assert_eq!(summary, "clear sky, 25°C, 60% humidity");
    }

    #[test]
    fn keeps_fractional_temperature() {
        let mut body = sample(json!(200));
        body["main"]["temp"] = json!(18.4);
        let summary = summarize(&body, "cod", 200).unwrap();
        assert_eq!(summary, "clear sky, 18.4°C, 60% humidity");
    }

    #[test]
    fn non_success_status_is_rejected_even_with_full_payload() {
        assert!(summarize(&sample(json!("404")), "cod", 200).is_err());
        assert!(summarize(&sample(json!(401)), "cod", 200).is_err());
    }

    #[test]
    fn string_status_counts_as_success() {
        assert!(summarize(&sample(json!("200")), "cod", 200).is_ok());
    }

    #[test]
    fn status_field_is_configurable() {
        let body = json!({
            "status": 0,
            "weather": [{"description": "light rain"}],
            "main": {"temp": 12.5, "humidity": 91}
        });
        assert_eq!(
            summarize(&body, "status", 0).unwrap(),
            "light rain, 12.5°C, 91% humidity"
        );
        assert!(summarize(&body, "cod", 200).is_err());
    }

    #[test]
    fn missing_fields_are_errors() {
        let body = json!({"cod": 200, "weather": [], "main": {"temp": 1, "humidity": 2}});
        assert!(summarize(&body, "cod", 200).is_err());

        let body = json!({"cod": 200, "weather": [{"description": "fog"}]});
        assert!(summarize(&body, "cod", 200).is_err());
    }

    #[tokio::test]
    async fn get_weather_sends_query_and_formats_reply() {
        let router = Router::new().route(
            "/weather",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                let ok = params.get("q").map(String::as_str) == Some("Chennai")
                    && params.get("appid").map(String::as_str) == Some("test-key")
                    && params.get("units").map(String::as_str) == Some("metric");
                let cod = if ok { json!(200) } else { json!("400") };
                Json(sample(cod))
            }),
        );
        let tool = WeatherTool::new(config(serve(router).await));

        assert_eq!(
            tool.get_weather("Chennai").await,
            "clear sky, 25°C, 60% humidity"
        );
    }

    #[tokio::test]
    async fn get_weather_returns_unknown_for_provider_error() {
        let router = Router::new().route(
            "/weather",
            get(|| async { Json(json!({"cod": "404", "message": "city not found"})) }),
        );
        let tool = WeatherTool::new(config(serve(router).await));

        assert_eq!(tool.get_weather("Atlantis").await, UNKNOWN_WEATHER);
    }

    #[tokio::test]
    async fn get_weather_returns_unknown_for_non_json_body() {
        let router = Router::new().route("/weather", get(|| async { "<html>oops</html>" }));
        let tool = WeatherTool::new(config(serve(router).await));

        assert_eq!(tool.get_weather("Chennai").await, UNKNOWN_WEATHER);
    }

    #[tokio::test]
    async fn tool_call_wraps_summary_for_the_model() {
        let router = Router::new().route(
            "/weather",
            get(|| async { Json(sample(json!(200))) }),
        );
        let tool = WeatherTool::new(config(serve(router).await));

        let observation = tool.call(&json!({"city": "Chennai"})).await.unwrap();
        assert_eq!(
            observation.0,
            "The weather in Chennai is clear sky, 25°C, 60% humidity"
        );

        let observation = tool.call(&json!({})).await.unwrap();
        assert!(observation.0.starts_with("The weather in the location is "));
    }
}
