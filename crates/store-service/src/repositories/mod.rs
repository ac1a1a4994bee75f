pub mod cart_items;
pub mod carts;
pub mod payments;
pub mod ratings;
pub mod reviews;
pub mod users;
