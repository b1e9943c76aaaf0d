pub mod authentication;
pub mod pagination;
pub mod user_data;
pub mod user_info;
