//! # pos-bridge-memory
//!
//! In-memory implementations of the pos-bridge collaborator traits: a
//! recording host transport, a recording notifier, and a canned-response
//! backend. Ideal for tests and prototyping; data is lost on drop.

pub mod backend;
pub mod host;
pub mod notifier;

pub use backend::MemoryBackend;
pub use host::MemoryHost;
pub use notifier::MemoryNotifier;
