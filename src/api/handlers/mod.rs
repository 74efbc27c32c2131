//! HTTP request handlers.

pub mod full_url;
pub mod health;
pub mod redirect;
pub mod shorten;

pub use full_url::full_url_handler;
pub use health::health_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
