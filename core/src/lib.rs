//! isisnb Core Types
//!
//! This crate provides the foundational types shared by every other crate:
//! - Identity types (AreaId, CircuitId, InterfaceId, SystemId)
//! - Typed configuration values (the Value enum)
//! - Routing levels and area/circuit level sets
//! - NET and area-address codec
//! - Protocol enums (password type, SNP authentication, metric style, network type)
//! - Common error types

mod auth;
mod error;
mod id;
mod level;
mod net;
mod proto;
mod value;

pub use auth::*;
pub use error::*;
pub use id::*;
pub use level::*;
pub use net::*;
pub use proto::*;
pub use value::*;
