//! Global method registry
//!
//! A fixed table of named polymorphic functions `(target, context) -> value`.
//! The table is built explicitly by [`create_standard_registry`] and injected
//! into the engine, so hosts and tests can run with custom method sets.

pub mod method;
pub mod methods;

pub use method::{GlobalMethod, MethodRegistry};

/// Build a registry with the standard global methods registered
pub fn create_standard_registry() -> MethodRegistry {
    let mut registry = MethodRegistry::new();
    registry.register(methods::IsaMethod);
    registry.register(methods::MetaMethod);
    registry.register(methods::ViewMethod);
    registry.register(methods::AbsoluteUrlMethod);
    registry.register(methods::SnapshotUrlMethod);
    registry.register(methods::FormattedMethod);
    registry.register(methods::FirstMethod);
    registry.register(methods::LastMethod);
    registry.register(methods::RestMethod);
    registry.register(methods::ParsedMethod);
    registry
}
