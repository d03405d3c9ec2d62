pub mod binding;
pub mod bridge;
pub mod callable;
pub mod dispatch;
pub mod error;
pub mod relay;
pub mod shape;
pub mod signature;
pub mod value;
