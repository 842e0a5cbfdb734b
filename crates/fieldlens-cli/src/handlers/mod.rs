pub mod inspect;
pub mod printers;
pub mod render;
