//! Small shared helpers.

mod count;

pub use count::{Counted, counted};
