pub mod macros;

pub mod api;
pub mod app;
pub mod consts;
pub mod error;
pub mod lookup;
pub mod models;
pub mod opts;
pub mod render;
pub mod search;
pub mod state;

pub use api::HhClient;
pub use app::App;
pub use error::{ApiError, ApiResult};
