//! # API Module
//!
//! Endpoints of the short-lived HTTP server started by `spotmax auth`:
//!
//! - [`callback`] - receives the OAuth redirect from Spotify and completes the
//!   PKCE code exchange
//! - [`health`] - reports status and version
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use spotmax::api::{callback, health};
//!
//! let app = Router::new()
//!     .route("/callback", get(callback))
//!     .route("/health", get(health));
//! ```

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
