mod auth;
mod library;

pub use auth::TokenManager;
pub use library::LibraryManager;
