//! Web 路由处理器

pub mod messages;
pub mod translation;

pub use messages::*;
pub use translation::*;
