//! # agrotrack
//!
//! The AgroTrack internal portal. A handful of static pages, two HTML form
//! endpoints, and a flat-file contact log. Nothing more. Nothing less.
//!
//! ## The contract
//!
//! This is a low-traffic internal tool, and its design says so out loud:
//!
//! - **No authentication** — the login route is a demonstration echo.
//! - **No database** — contact submissions append to `data/consultas.txt`,
//!   one delimited block per entry, only ever growing.
//! - **No session state** — every request is handled on its own.
//!
//! What it does take seriously:
//!
//! - **Path confinement** — static assets resolve inside `public/` no
//!   matter how many `../` a request smuggles in.
//! - **Escaping** — every user-supplied string is HTML-escaped before it
//!   reaches a page.
//! - **Bounded bodies** — form bodies over 1 MB are cut off with a 413.
//! - **One response per request** — every code path, including every
//!   failure, renders a complete styled page.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use agrotrack::{routes, Server, Storage};
//!
//! #[tokio::main]
//! async fn main() {
//!     let storage = Arc::new(Storage::new("."));
//!     storage.ensure_initial_files().await.expect("bootstrap failed");
//!
//!     Server::bind(([0, 0, 0, 0], 8888).into())
//!         .serve(routes::router(storage))
//!         .await
//!         .expect("server error");
//! }
//! ```

mod error;
mod handler;
mod request;
mod response;
mod router;
mod server;
mod storage;

pub mod forms;
pub mod pages;
pub mod routes;
pub mod seed;

pub use error::Error;
pub use handler::Handler;
pub use request::Request;
pub use response::Response;
pub use router::Router;
pub use server::{MAX_BODY_BYTES, Server};
pub use storage::{ContactEntry, Storage, content_type};
