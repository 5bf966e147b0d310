//! Trait definitions for QuickBooks operations.
//!
//! [`Entity`] describes where an entity lives on the API; [`Create`] and
//! [`Delete`] are opted into per entity type and share one executor.

mod create;
mod delete;
mod entity;

pub use create::Create;
pub use delete::Delete;
pub use entity::Entity;
