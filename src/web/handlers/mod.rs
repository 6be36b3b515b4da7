pub mod product_handlers;
pub mod review_handlers;
pub mod user_handlers;
