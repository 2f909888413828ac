//! Response interceptor
//!
//! Every exchange made by [`ApiClient`](super::ApiClient) passes through
//! exactly one interceptor before reaching the caller. The body has already
//! been read by then, so failures while receiving or decoding it are seen too.

use super::{ClientError, HttpResponse};

/// Hook observing every response or failure
pub trait ResponseInterceptor: Send + Sync {
    fn intercept(
        &self,
        result: Result<HttpResponse, ClientError>,
    ) -> Result<HttpResponse, ClientError>;
}

/// Logs failures and hands both outcomes back untouched
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingInterceptor;

impl ResponseInterceptor for LoggingInterceptor {
    fn intercept(
        &self,
        result: Result<HttpResponse, ClientError>,
    ) -> Result<HttpResponse, ClientError> {
        if let Err(error) = &result {
            tracing::error!(error = %error, status = ?error.status(), "API error");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    struct ErrorCounter(Arc<AtomicUsize>);

    impl<S: Subscriber> Layer<S> for ErrorCounter {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == Level::ERROR {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    fn with_counter<R>(f: impl FnOnce() -> R) -> (R, usize) {
        let count = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(ErrorCounter(count.clone()));
        let out = tracing::subscriber::with_default(subscriber, f);
        (out, count.load(Ordering::SeqCst))
    }

    #[test]
    fn failure_is_logged_once_and_returned_unchanged() {
        let (result, logged) = with_counter(|| {
            LoggingInterceptor.intercept(Err(ClientError::HttpStatus {
                status: 503,
                message: "backend down".to_string(),
            }))
        });

        assert_eq!(logged, 1);
        match result {
            Err(ClientError::HttpStatus { status, message }) => {
                assert_eq!(status, 503);
                assert_eq!(message, "backend down");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn timeout_passes_through() {
        let (result, logged) = with_counter(|| LoggingInterceptor.intercept(Err(ClientError::Timeout)));

        assert_eq!(logged, 1);
        assert!(matches!(result, Err(ClientError::Timeout)));
    }

    #[test]
    fn success_is_not_logged() {
        let response = HttpResponse {
            status: reqwest::StatusCode::CREATED,
            headers: reqwest::header::HeaderMap::new(),
            body: b"created".to_vec(),
        };

        let (result, logged) = with_counter(|| LoggingInterceptor.intercept(Ok(response)));

        assert_eq!(logged, 0);
        let response = result.unwrap();
        assert_eq!(response.status.as_u16(), 201);
        assert_eq!(response.text(), "created");
    }
}
