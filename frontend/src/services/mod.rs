pub mod api;
pub mod calendly;
pub mod dom;
pub mod gtag;
pub mod logging;
pub mod script;
pub mod storage;

pub use api::ApiClient;
pub use logging::Logger;
