mod authentication;
mod health_check;
mod menu;
mod order;
mod profile;
mod stores;
mod user_admin;

pub use authentication::*;
pub use health_check::*;
pub use menu::*;
pub use order::*;
pub use profile::*;
pub use stores::*;
pub use user_admin::*;
