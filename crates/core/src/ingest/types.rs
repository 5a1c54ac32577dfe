use serde::{Deserialize, Serialize};

/// Response of the upstream draws endpoint. `games` is required; a payload without it
/// fails deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawsResponse {
    #[serde(default)]
    pub request_status: Option<String>,
    pub games: Vec<Game>,
}

/// One upstream draw game. Amounts are in kopecks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub name: String,
    pub display_name: String,
    pub ticket_price: i64,
    pub jackpot: i64,
    #[serde(default)]
    pub draw_frequency: String,
}
