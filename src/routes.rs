//! The portal's route table and handlers.
//!
//! Six fixed routes plus a fallback. The fallback is where unrouted
//! requests end up: GETs get a confined static-asset lookup, POSTs a 404
//! naming the path, and any other method a 404 naming `METHOD /path`.
//! Handlers share the [`Storage`] handle by capturing an `Arc` clone.

use std::io::ErrorKind;
use std::sync::Arc;

use http::Method;
use tracing::{info, warn};

use crate::forms;
use crate::handler::Handler;
use crate::pages;
use crate::request::Request;
use crate::response::Response;
use crate::router::Router;
use crate::storage::{self, ContactEntry, Storage};

/// Builds the full route table over a shared storage handle.
pub fn router(storage: Arc<Storage>) -> Router {
    Router::new()
        .get("/", named_page(&storage, "index.html"))
        .get("/login", named_page(&storage, "login.html"))
        .get("/contacto", named_page(&storage, "contacto.html"))
        .get("/contacto/listar", {
            let storage = Arc::clone(&storage);
            move |req: Request| contacto_listar(Arc::clone(&storage), req)
        })
        .post("/auth/recuperar", auth_recuperar)
        .post("/contacto/cargar", {
            let storage = Arc::clone(&storage);
            move |req: Request| contacto_cargar(Arc::clone(&storage), req)
        })
        .fallback(move |req: Request| unrouted(Arc::clone(&storage), req))
}

/// Handler for a route that serves one fixed page asset from `public/`.
fn named_page(storage: &Arc<Storage>, file: &'static str) -> impl Handler {
    let storage = Arc::clone(storage);
    move |req: Request| serve_asset(Arc::clone(&storage), file, req)
}

/// Reads `file` from the asset root and serves it with its derived content
/// type. Missing file → 404 naming the *requested* path; any other read
/// error → 500.
async fn serve_asset(storage: Arc<Storage>, file: &str, req: Request) -> Response {
    match storage.read_asset(file).await {
        Ok(bytes) => Response::bytes(storage::content_type(file), bytes),
        Err(e) if e.kind() == ErrorKind::NotFound => pages::not_found(req.path()),
        Err(e) => {
            warn!(%file, error = %e, "asset read failed");
            pages::server_error(&e.to_string())
        }
    }
}

/// GET /contacto/listar — renders the persisted log. A log that does not
/// exist yet lists as empty; only real read errors become a 500.
async fn contacto_listar(storage: Arc<Storage>, _req: Request) -> Response {
    match storage.read_log().await {
        Ok(log) => pages::contact_list(&log),
        Err(e) => {
            warn!(error = %e, "contact log read failed");
            pages::server_error(&e.to_string())
        }
    }
}

/// POST /auth/recuperar — demonstration endpoint: echoes the submitted
/// credentials back, escaped. No authentication takes place.
async fn auth_recuperar(req: Request) -> Response {
    let form = forms::decode(req.body());
    let usuario = forms::field_or(&form, "usuario", "");
    let clave = forms::field_or(&form, "clave", "");
    pages::login_echo(&usuario, &clave)
}

/// POST /contacto/cargar — persists one contact entry and confirms.
///
/// Absent or empty fields get their placeholders before the entry is built,
/// so the log never carries a blank field.
async fn contacto_cargar(storage: Arc<Storage>, req: Request) -> Response {
    let form = forms::decode(req.body());
    let nombre = forms::field_or(&form, "nombre", "(sin nombre)");
    let email = forms::field_or(&form, "email", "(sin email)");
    let mensaje = forms::field_or(&form, "mensaje", "(sin mensaje)");

    let entry = ContactEntry::now(nombre, email, mensaje);
    match storage.append_entry(&entry).await {
        Ok(()) => {
            info!(nombre = %entry.nombre, "contact entry persisted");
            pages::contact_received(&entry.nombre, &entry.email, &entry.mensaje)
        }
        Err(e) => {
            warn!(error = %e, "contact log append failed");
            pages::server_error(&e.to_string())
        }
    }
}

/// Fallback for everything the fixed table does not cover.
async fn unrouted(storage: Arc<Storage>, req: Request) -> Response {
    if *req.method() == Method::GET {
        let path = req.path().to_owned();
        serve_asset(storage, &path, req).await
    } else if *req.method() == Method::POST {
        pages::not_found(req.path())
    } else {
        pages::not_found(&format!("{} {}", req.method(), req.path()))
    }
}
