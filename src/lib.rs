#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod domain;
pub mod ext;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command};
pub use config::settings::{CompressionSettings, LocaleSettings, Settings};
pub use domain::Numeric;
pub use utils::error::{ErrorCategory, ExtError, Result};

/// Glob-import this module to bring every extension trait into scope.
pub mod prelude {
    pub use crate::domain::Numeric;
    pub use crate::ext::boolean::BoolExt;
    pub use crate::ext::bytes::BytesExt;
    pub use crate::ext::character::CharExt;
    pub use crate::ext::collection::{MapExt, OptionVecExt, SliceExt};
    pub use crate::ext::datetime::{DateExt, DateTimeExt, NaiveDateExt};
    pub use crate::ext::duration::DurationExt;
    pub use crate::ext::error::ErrorExt;
    pub use crate::ext::file::{AsyncPathExt, PathExt};
    pub use crate::ext::guid::GuidExt;
    pub use crate::ext::net::{IpAddrExt, UrlExt};
    pub use crate::ext::numeric::{FloatExt, IntegerExt, NumericExt};
    pub use crate::ext::object::{CompareExt, InExt, ObjectExt};
    pub use crate::ext::stream::{AsyncReadExtra, ReadExt};
    pub use crate::ext::string::StrExt;
    pub use crate::ext::task::TaskExt;
}
