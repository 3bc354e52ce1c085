use hanami_shared::RawLeaderEntry;

const LEADERBOARD_ENDPOINT: &str = "/api/leaderboard";

/// Fetch the top `limit` ranked contributors from the ranking service.
pub async fn fetch_leaderboard(limit: u32) -> Result<Vec<RawLeaderEntry>, String> {
    let url = format!("{LEADERBOARD_ENDPOINT}?limit={limit}");

    let resp = gloo_net::http::Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("fetch error: {e}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    resp.json::<Vec<RawLeaderEntry>>()
        .await
        .map_err(|e| format!("parse error: {e}"))
}
