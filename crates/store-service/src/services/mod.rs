pub mod auth_service;
pub mod cart_item_service;
pub mod cart_service;
pub mod payment_service;
pub mod rating_service;
pub mod review_service;
pub mod user_service;
