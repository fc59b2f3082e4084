//! Request payloads specific to the HTTP surface.
//!
//! Domain input models (`NewUser`, `NewPlayer`, `ClubProfileUpdate`) are
//! deserialized directly from the request body; only payloads with no core
//! counterpart live here.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyRequest {
    pub player_id: String,
    /// Optional negotiated price; must be at least 80% of catalog value.
    pub negotiated_value: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerIdRequest {
    pub player_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanRequest {
    pub player_id: String,
    pub fee: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainRequest {
    pub player_id: String,
    pub cost: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulateRequest {
    pub win: bool,
}
