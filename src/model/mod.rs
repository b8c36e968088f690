mod badges;
mod common;
mod contest;
mod profile;
mod record;

pub use badges::*;
pub(crate) use common::null_as_default;
pub use common::Coerced;
pub use contest::*;
pub use profile::*;
pub use record::*;
