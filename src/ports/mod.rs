//! Ports (trait boundaries) for external dependencies.
//!
//! The search engine is the domain core; observation mechanisms are
//! adapters implementing the traits defined here.

pub mod observer;

pub use observer::SearchObserver;
