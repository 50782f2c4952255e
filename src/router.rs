//! The (method, path) → handler table.
//!
//! One radix tree per HTTP method, evaluated before the fallback. The portal
//! registers its six fixed routes and installs a fallback that serves
//! confined static assets for unrouted GETs and a 404 page for everything
//! else — so every request resolves to exactly one handler.

use std::collections::HashMap;
use std::sync::Arc;

use http::Method;
use matchit::Router as MatchitRouter;

use crate::handler::{BoxedHandler, Handler};
use crate::pages;
use crate::request::Request;
use crate::response::Response;

/// The application route table.
///
/// Build it once at startup; registrations chain. Lookup misses go to the
/// fallback handler, which defaults to a plain 404 page until
/// [`Router::fallback`] replaces it.
pub struct Router {
    routes: HashMap<Method, MatchitRouter<BoxedHandler>>,
    fallback: BoxedHandler,
}

impl Router {
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
            fallback: default_fallback.into_boxed_handler(),
        }
    }

    /// Register a GET route.
    pub fn get(self, path: &str, handler: impl Handler) -> Self {
        self.add(Method::GET, path, handler)
    }

    /// Register a POST route.
    pub fn post(self, path: &str, handler: impl Handler) -> Self {
        self.add(Method::POST, path, handler)
    }

    /// Replace the handler that runs when no route matches.
    pub fn fallback(mut self, handler: impl Handler) -> Self {
        self.fallback = handler.into_boxed_handler();
        self
    }

    fn add(mut self, method: Method, path: &str, handler: impl Handler) -> Self {
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler.into_boxed_handler())
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    /// Routes a buffered request to its handler and runs it. Misses go to
    /// the fallback, so this always produces a response.
    pub async fn dispatch(&self, req: Request) -> Response {
        let handler = self.resolve(req.method(), req.path());
        handler.call(req).await
    }

    fn resolve(&self, method: &Method, path: &str) -> BoxedHandler {
        self.routes
            .get(method)
            .and_then(|tree| tree.at(path).ok())
            .map(|matched| Arc::clone(matched.value))
            .unwrap_or_else(|| Arc::clone(&self.fallback))
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

async fn default_fallback(req: Request) -> Response {
    pages::not_found(req.path())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use http::StatusCode;

    async fn ok(_req: Request) -> Response {
        Response::text(StatusCode::OK, "ok")
    }

    fn req(method: Method, path: &str) -> Request {
        Request::new(method, path, Bytes::new())
    }

    #[tokio::test]
    async fn exact_routes_win() {
        let router = Router::new().get("/contacto", ok);
        let res = router.dispatch(req(Method::GET, "/contacto")).await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn misses_hit_the_fallback() {
        let router = Router::new().get("/contacto", ok);

        // Different path, and same path under a different method.
        for (method, path) in [(Method::GET, "/otro"), (Method::POST, "/contacto")] {
            let res = router.dispatch(req(method, path)).await;
            assert_eq!(res.status(), StatusCode::NOT_FOUND);
        }
    }

    #[tokio::test]
    async fn custom_fallback_replaces_the_default() {
        let router = Router::new().fallback(ok);
        let res = router.dispatch(req(Method::DELETE, "/x")).await;
        assert_eq!(res.status(), StatusCode::OK);
    }
}
