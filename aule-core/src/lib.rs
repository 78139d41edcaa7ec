//! Core types for aule.
//!
//! - `resolve`: merges a pole's room roster with its free-rooms result set
//! - `protocol` and `view`: decoding of the classrooms API payloads
//! - `render`: the interface output formats implement
//! - `config`: API location and page settings

pub mod annotation;
pub mod config;
pub mod error;
pub mod pole;
pub mod protocol;
pub mod render;
pub mod resolve;
pub mod room;
pub mod view;

pub use annotation::AnnotationFormat;
pub use config::AuleConfig;
pub use error::{AuleError, AuleResult};
pub use pole::Pole;
pub use resolve::{Resolver, resolve};
pub use room::{AvailabilityEntry, FreeRoomRecord, RoomName};
pub use view::View;
