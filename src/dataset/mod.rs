pub mod classes;
pub mod images;

pub use classes::{class_directories, enumerate_classes, ClassDir};
pub use images::{image_to_tensor, ImageDataset, ImageShape};
