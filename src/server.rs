use std::convert::Infallible;

use warp::http::header::HeaderValue;
use warp::http::Response;
use warp::http::StatusCode;
use warp::{Filter, Rejection, Reply};

use crate::config::Config;
use crate::openweather::OpenWeatherClient;
use crate::weather::{self, WeatherSummary, WeatherType};

pub async fn run(address: std::net::SocketAddr, config: Config) {
    log::info!("Server is running on {}", address);

    let client = OpenWeatherClient::new(config);
    warp::serve(routes(client)).run(address).await
}

pub fn routes(
    client: OpenWeatherClient,
) -> impl Filter<Extract = (impl Reply,), Error = Infallible> + Clone {
    let health_route = warp::path!("health").map(|| StatusCode::OK);

    let weather_route = warp::path!("weather" / String / String)
        .and(warp::get())
        .and(with_client(client))
        .and_then(weather_summary);

    health_route.or(weather_route).recover(rejection)
}

fn with_client(
    client: OpenWeatherClient,
) -> impl Filter<Extract = (OpenWeatherClient,), Error = Infallible> + Clone {
    warp::any().map(move || client.clone())
}

async fn weather_summary(
    lat: String,
    lon: String,
    client: OpenWeatherClient,
) -> Result<impl Reply, Rejection> {
    log::info!("Received a weather request for ({}, {})", lat, lon);

    let (lat, lon) = weather::parse_coordinates(&lat, &lon).ok_or_else(|| {
        log::error!("Invalid coordinates: lat {}, lon {}", lat, lon);
        warp::reject::custom(ApiError::InvalidCoordinates)
    })?;

    let record = client.fetch(lat, lon).await.map_err(|e| {
        log::error!("Unable to fetch weather data: {:#}", e);
        warp::reject::custom(ApiError::UpstreamFailed)
    })?;

    // The provider documents a non-empty condition list, but an empty one is
    // still reachable and must not take the worker down.
    let condition = record.weather.first().ok_or_else(|| {
        log::error!("Weather provider returned an empty condition list");
        warp::reject::custom(ApiError::UpstreamFailed)
    })?;

    let summary = WeatherSummary {
        temperature: record.main.temp,
        weather_condition: condition.main.clone(),
        description: condition.description.clone(),
        weather_type: WeatherType::from_celsius(record.main.temp),
    };

    log::info!(
        "Weather for ({:.4}, {:.4}): {:.2}°C (feels like {:.2}°C), {}, {}",
        lat,
        lon,
        record.main.temp,
        record.main.feels_like,
        summary.weather_condition,
        summary.description
    );

    let body = serde_json::to_vec(&summary).map_err(|e| {
        log::error!("Unable to encode response: {}", e);
        warp::reject::custom(ApiError::EncodeFailed)
    })?;

    Response::builder()
        .header("Content-Type", HeaderValue::from_static("application/json"))
        .body(body)
        .map_err(|_| warp::reject::custom(ApiError::EncodeFailed))
}

#[derive(Clone, Copy, Debug)]
enum ApiError {
    InvalidCoordinates,
    UpstreamFailed,
    EncodeFailed,
}

impl warp::reject::Reject for ApiError {}

async fn rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let (code, message) = match err.find::<ApiError>() {
        Some(ApiError::InvalidCoordinates) => (StatusCode::BAD_REQUEST, "Invalid coordinates"),
        Some(ApiError::UpstreamFailed) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Unable to fetch weather data",
        ),
        Some(ApiError::EncodeFailed) => (StatusCode::INTERNAL_SERVER_ERROR, "Unable to encode"),
        None if err.is_not_found() => (StatusCode::NOT_FOUND, "Not found"),
        None => {
            log::error!("Unhandled rejection: {:?}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    };

    Ok(warp::reply::with_status(message, code))
}
