use serde::Serialize;

/// Parse the two path parameters into a coordinate pair.
///
/// Returns `None` when either string fails to parse as a decimal number, or
/// when either parsed value is exactly zero. The zero rejection is a deliberate
/// product quirk; it makes the equator/prime-meridian point (0,0) unreachable.
/// No range check; out-of-range values are left for the provider to reject.
pub fn parse_coordinates(lat: &str, lon: &str) -> Option<(f64, f64)> {
    let lat: f64 = lat.parse().ok()?;
    let lon: f64 = lon.parse().ok()?;
    if lat == 0.0 || lon == 0.0 {
        return None;
    }
    Some((lat, lon))
}

/// Qualitative temperature category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum WeatherType {
    Freezing,
    Cold,
    Moderate,
    Hot,
}

impl WeatherType {
    /// Four-way partition over °C: t ≤ 0, 0 < t < 10, 10 ≤ t < 25, t ≥ 25.
    pub fn from_celsius(temperature: f64) -> Self {
        if temperature <= 0.0 {
            WeatherType::Freezing
        } else if temperature < 10.0 {
            WeatherType::Cold
        } else if temperature < 25.0 {
            WeatherType::Moderate
        } else {
            WeatherType::Hot
        }
    }
}

/// Response body for the weather endpoint.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSummary {
    pub temperature: f64,
    pub weather_condition: String,
    pub description: String,
    pub weather_type: WeatherType,
}
