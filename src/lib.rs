pub mod demo;
pub mod error;
pub mod heap;
pub mod matrix;
pub mod ops;
pub mod select;

pub use demo::{MatmulScenario, TopKScenario};
pub use error::{AlgoError, Result};
pub use heap::BoundedMinHeap;
pub use matrix::Matrix;
pub use select::{top_k, top_k_iter};
