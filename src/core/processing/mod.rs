pub mod conform;
pub mod crop;
pub mod padding;
pub mod resize;
pub mod save;
pub mod select;
