//! Entity model for metalctlv2.
//!
//! These are read-only snapshots of what the metal-stack API returns. Only the
//! fields that are sorted, filtered or rendered are modelled; every struct
//! tolerates missing fields so partial API dumps still load.

/// Implements `as_str` based `Display` for the API string enums.
macro_rules! string_enum {
    ($ty:ty { $($variant:ident => $s:literal),+ $(,)? }) => {
        impl $ty {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

mod context;
mod health;
mod image;
mod ip;
mod kind;
mod machine;
mod meta;
mod network;
mod partition;
mod project;
pub mod serde_duration;
mod size;
mod switch;
mod task;
mod tenant;
mod token;
mod vpn;

pub use context::*;
pub use health::*;
pub use image::*;
pub use ip::*;
pub use kind::*;
pub use machine::*;
pub use meta::*;
pub use network::*;
pub use partition::*;
pub use project::*;
pub use size::*;
pub use switch::*;
pub use task::*;
pub use tenant::*;
pub use token::*;
pub use vpn::*;

/// Common surface of every listable entity.
pub trait Entity {
    const KIND: EntityKind;

    /// Identifier used by `describe` lookups.
    fn id(&self) -> &str;
}
