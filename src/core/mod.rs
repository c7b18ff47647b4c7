pub mod consistency;
pub mod errors;
pub mod setting;
pub mod severity;
pub mod traits;

pub use consistency::{get_consistency, Consistency};
pub use errors::{Error, Result, ResultExt};
pub use setting::format_setting;
pub use severity::Severity;
pub use traits::{Accumulator, StyleSetting};
