pub mod item_type;
pub mod order_status;
pub mod role;

pub use item_type::ItemType;
pub use order_status::OrderStatus;
pub use role::Role;
