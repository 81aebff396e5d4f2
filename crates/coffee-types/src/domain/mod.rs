pub mod coffee;
pub mod order;
