//! HTTP server: accept loop, per-request dispatch, graceful shutdown.
//!
//! Each connection runs as its own tokio task, so a request waiting on its
//! body or on the filesystem never blocks unrelated requests. On SIGTERM or
//! Ctrl-C the listener stops accepting and in-flight connections are
//! drained before the process exits.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use bytes::Bytes;
use http_body_util::{BodyExt, Full, LengthLimitError, Limited};
use hyper::service::service_fn;
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder as ConnBuilder;
use tokio::net::TcpListener;
use tracing::{debug, error, info, warn};

use crate::error::Error;
use crate::pages;
use crate::request::Request;
use crate::router::Router;

/// Request bodies larger than this are rejected with `413` before any
/// decoding, and the connection is not reused. A body of exactly this size
/// is still accepted.
pub const MAX_BODY_BYTES: usize = 1_000_000;

/// The HTTP server.
pub struct Server {
    addr: SocketAddr,
}

impl Server {
    /// Configures the server to bind to `addr` when [`serve`](Server::serve)
    /// is called.
    pub fn bind(addr: SocketAddr) -> Self {
        Self { addr }
    }

    /// Starts accepting connections and dispatching them through `router`.
    ///
    /// Returns only after a full graceful shutdown: a signal, followed by
    /// every in-flight request completing.
    pub async fn serve(self, router: Router) -> Result<(), Error> {
        let listener = TcpListener::bind(self.addr).await?;

        // Shared across connection tasks without copying the route table.
        let router = Arc::new(router);

        info!(addr = %self.addr, "agrotrack portal listening");

        // Tracks every spawned connection task so shutdown can drain them.
        let mut tasks = tokio::task::JoinSet::new();

        let shutdown = shutdown_signal();
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                // Check shutdown first so a signal immediately stops
                // accepting, even with connections queued.
                biased;

                () = &mut shutdown => {
                    info!(in_flight = tasks.len(), "shutdown signal received, draining connections");
                    break;
                }

                res = listener.accept() => {
                    let (stream, remote_addr) = match res {
                        Ok(v) => v,
                        Err(e) => {
                            error!("accept error: {e}");
                            continue;
                        }
                    };

                    let router = Arc::clone(&router);
                    let io = TokioIo::new(stream);

                    tasks.spawn(async move {
                        // Called once per request on the connection.
                        let svc = service_fn(move |req| {
                            let router = Arc::clone(&router);
                            async move { dispatch(router, req).await }
                        });

                        if let Err(e) = ConnBuilder::new(TokioExecutor::new())
                            .serve_connection(io, svc)
                            .await
                        {
                            error!(peer = %remote_addr, "connection error: {e}");
                        }
                    });
                }

                // Reap finished tasks so the set does not grow unbounded.
                Some(_) = tasks.join_next(), if !tasks.is_empty() => {}
            }
        }

        while tasks.join_next().await.is_some() {}

        info!("agrotrack portal stopped");
        Ok(())
    }
}

// ── Request dispatch ──────────────────────────────────────────────────────────

/// Routes one request and produces exactly one response.
///
/// The error type is [`Infallible`]: every failure — unknown route, missing
/// file, oversized body, I/O error — is rendered as an HTTP response here,
/// so hyper never sees an error and no request failure leaks to another.
async fn dispatch(
    router: Arc<Router>,
    req: hyper::Request<hyper::body::Incoming>,
) -> Result<http::Response<Full<Bytes>>, Infallible> {
    let (parts, body) = req.into_parts();
    let method = parts.method;
    // `path()` excludes the query string, which the portal never routes on.
    let path = parts.uri.path().to_owned();

    debug!(%method, %path, "request");

    // Buffer the whole body up front, capped. Handlers never see a partial
    // or over-cap body.
    let body = match buffer_body(body).await {
        Ok(bytes) => bytes,
        Err(e) if e.is::<LengthLimitError>() => {
            warn!(%method, %path, "request body over {MAX_BODY_BYTES} bytes, rejecting");
            return Ok(pages::payload_too_large().into_http());
        }
        Err(e) => {
            warn!(%method, %path, "request body read failed: {e}");
            return Ok(pages::server_error(&e.to_string()).into_http());
        }
    };

    let response = router.dispatch(Request::new(method, path, body)).await;
    Ok(response.into_http())
}

/// Accumulates a request body, enforcing [`MAX_BODY_BYTES`].
async fn buffer_body<B>(body: B) -> Result<Bytes, Box<dyn std::error::Error + Send + Sync>>
where
    B: hyper::body::Body + Send,
    B::Data: Send,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let collected = Limited::new(body, MAX_BODY_BYTES).collect().await?;
    Ok(collected.to_bytes())
}

// ── Shutdown signal ───────────────────────────────────────────────────────────

/// Resolves on the first shutdown signal the process receives: SIGTERM or
/// Ctrl-C on Unix, Ctrl-C elsewhere.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let sigterm = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    // Never resolves, so the SIGTERM arm is disabled off Unix.
    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c   => {}
        () = sigterm  => {}
    }
}
