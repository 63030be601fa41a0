//! Visual tree: classification, role labelling, and transduction.

pub mod classifier;
pub mod roles;
pub mod transducer;
pub mod types;

pub use classifier::classify;
pub use roles::Role;
pub use transducer::Transducer;
pub use types::{MetaValue, Metadata, NodeTag, VisualNode};
