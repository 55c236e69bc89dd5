pub mod error;
pub mod formats;
pub mod validation;

pub use error::{WorkbenchError, WorkbenchResult};
pub use formats::{ImageFormat, format_from_name};
pub use validation::validate_settings;
