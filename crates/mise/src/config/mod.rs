pub mod loader;
pub mod schema;

pub use loader::{load_config, load_config_from_str, parse_date, parse_timezone};
pub use schema::{Config, Labels};
