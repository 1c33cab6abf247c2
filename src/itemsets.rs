pub mod candidates;
pub mod count;
pub mod pairs;
