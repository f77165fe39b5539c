use std::convert::Infallible;

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::routing::get;
use axum::Router;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::{Stream, StreamExt};

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/events", get(stream_events))
}

/// Server-sent stream of committed collection changes. A listener that falls
/// behind gets a `reconnect` event and should refetch.
async fn stream_events(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    tracing::debug!(
        subscribers = state.event_bus().subscriber_count() + 1,
        "event listener connected"
    );

    let stream = BroadcastStream::new(state.event_bus().subscribe()).filter_map(|message| {
        match message {
            Ok(event) => match Event::default().event("collection").json_data(&event) {
                Ok(sse) => Some(Ok(sse)),
                Err(err) => {
                    tracing::warn!("Failed to encode event: {err}");
                    None
                }
            },
            Err(BroadcastStreamRecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "event listener lagged");
                Some(Ok(Event::default().event("reconnect").data("lagged")))
            }
        }
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use rayob_core::content::hero::HeroSlide;
    use rayob_core::content::Hero;
    use tower::ServiceExt;

    use super::*;

    #[tokio::test]
    async fn streams_collection_changes() {
        let state = AppState::for_tests();
        let app = crate::routes::build_router(state.clone());

        let response = app
            .oneshot(Request::get("/api/events").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        state
            .collection::<Hero>()
            .create(HeroSlide {
                title: "T1".into(),
                subtitle: "S1".into(),
                cta_label: "Go".into(),
                cta_href: "/x".into(),
                image: "/i.png".into(),
                alt: None,
                active: None,
            })
            .await
            .unwrap();

        let mut body = response.into_body().into_data_stream();
        let mut received = String::new();
        let found = tokio::time::timeout(Duration::from_secs(5), async {
            while let Some(chunk) = body.next().await {
                received.push_str(&String::from_utf8_lossy(&chunk.unwrap()));
                if received.contains("\"action\":\"created\"") {
                    return true;
                }
            }
            false
        })
        .await
        .unwrap_or(false);

        assert!(found, "no created event in {received:?}");
        assert!(received.contains("event: collection"));
    }
}
