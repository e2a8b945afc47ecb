pub mod machine;
pub mod session;
pub mod state;

#[cfg(test)]
mod tests;

pub use machine::{ControllerOptions, FetchDisposition, FetchRequest, SearchController};
pub use session::Session;
pub use state::ViewState;
