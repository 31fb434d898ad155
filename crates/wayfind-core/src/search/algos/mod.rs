//! Search strategy implementations
//!
//! - `depth_first`: LIFO stack, visited filtering on pop
//! - `breadth_first`: FIFO queue, visited filtering on pop
//! - `uniform_cost`: pending list re-sorted by accumulated cost
//! - `a_star`: pending list re-sorted by `g + h`, closed on pop
//! - `hill_climbing`: strictly-improving heuristic descent
//! - `shared`: visited set and frontier bookkeeping used by all of them

pub mod a_star;
pub mod breadth_first;
pub mod depth_first;
pub mod hill_climbing;
pub mod shared;
pub mod uniform_cost;

pub use a_star::a_star;
pub use breadth_first::breadth_first;
pub use depth_first::depth_first;
pub use hill_climbing::hill_climbing;
pub use uniform_cost::uniform_cost;
