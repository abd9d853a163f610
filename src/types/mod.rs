//! All data types for the weighted graph library.

pub mod distance;
pub mod edge;
pub mod error;
pub mod node;

pub use distance::Distance;
pub use edge::{Arc, Edge, EdgeId, Weight};
pub use error::{GraphError, GraphResult};
pub use node::{Node, NodeId};
