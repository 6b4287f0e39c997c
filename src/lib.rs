pub mod bst;
pub mod circular;
pub mod doubly;
mod errors;
mod handle;
mod node;
pub mod search;
pub mod singly;
pub mod sublist;

pub use bst::{BinarySearchTree, ChildSide, Row, Rows, SearchHit};
pub use circular::CircularList;
pub use doubly::DoublyList;
pub use errors::ListError;
pub use handle::Handle;
pub use search::{
    binary_search, exponential_search, fibonacci_search, interpolation_search, jump_search,
    sentinel_search, ternary_search,
};
pub use singly::SinglyList;
pub use sublist::contains_sublist;
