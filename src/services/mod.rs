pub mod service;
pub mod unsplash;

pub use service::{ImageService, SearchFuture};
pub use unsplash::{DEFAULT_ENDPOINT, UnsplashClient};
