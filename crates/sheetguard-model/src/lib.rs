pub mod error;
pub mod kind;
pub mod style;
pub mod value;

pub use error::{ConfigError, HeaderError};
pub use kind::FieldKind;
pub use style::{Alignment, Border, Fill, Font, Protection, Side, Style};
pub use value::Value;
