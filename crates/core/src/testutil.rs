use crate::domain::lottery::{DrawFrequency, Lottery, LotteryType};
use axum::http::StatusCode;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Serves `GET /api/draws/` on an ephemeral port. `respond` receives the zero-based hit
/// number.
pub async fn spawn_stub<F>(respond: F) -> (String, Arc<AtomicUsize>)
where
    F: Fn(usize) -> (StatusCode, String) + Clone + Send + Sync + 'static,
{
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let app = axum::Router::new().route(
        "/api/draws/",
        axum::routing::get(move || {
            let counter = counter.clone();
            let respond = respond.clone();
            async move {
                let n = counter.fetch_add(1, Ordering::SeqCst);
                respond(n)
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
    (format!("http://{addr}"), hits)
}

/// Serves `GET /api/draws/` but holds every request for `delay` before answering.
pub async fn spawn_hanging_stub(delay: Duration) -> (String, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let app = axum::Router::new().route(
        "/api/draws/",
        axum::routing::get(move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                tokio::time::sleep(delay).await;
                (StatusCode::OK, r#"{"games": []}"#.to_string())
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
    (format!("http://{addr}"), hits)
}

pub fn lottery(id: &str, lottery_type: LotteryType, price: f64, jackpot: f64, prob: f64) -> Lottery {
    Lottery {
        id: id.to_string(),
        name: format!("Lottery {id}"),
        lottery_type,
        ticket_price: price,
        max_jackpot: jackpot,
        current_jackpot: jackpot,
        win_probability: prob,
        draw_frequency: DrawFrequency::Daily,
        description: String::new(),
        rules: String::new(),
        prize_structure: Vec::new(),
        image_url: None,
        is_active: true,
    }
}
