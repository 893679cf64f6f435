pub mod config;
pub mod error;
pub mod logging;
pub mod result;
pub mod traits;

pub use config::AppConfig;
pub use error::TodoError;
pub use logging::init_logging;
pub use result::TodoResult;
pub use traits::KeyValueStore;
