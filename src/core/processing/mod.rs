pub mod padding;
pub mod prepare;
pub mod resize;
pub mod save;
