//! Standard global methods

pub mod absolute_url;
pub mod first;
pub mod formatted;
pub mod isa;
pub mod last;
pub mod meta;
pub mod parsed;
pub mod rest;
pub mod snapshot_url;
pub mod view;

pub use absolute_url::AbsoluteUrlMethod;
pub use first::FirstMethod;
pub use formatted::FormattedMethod;
pub use isa::IsaMethod;
pub use last::LastMethod;
pub use meta::MetaMethod;
pub use parsed::ParsedMethod;
pub use rest::RestMethod;
pub use snapshot_url::SnapshotUrlMethod;
pub use view::ViewMethod;
