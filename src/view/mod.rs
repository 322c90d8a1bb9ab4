//! View-side helpers: mapping pointer positions onto group elements
//!
//! Painting is left to the host toolkit; this module only answers "what is
//! under the pointer".


pub use hit_test::{hit_test, HitTarget};
