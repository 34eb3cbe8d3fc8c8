pub mod landing;
pub mod panels;
pub mod plot;
