pub mod cleaning;
pub mod kamus;
pub mod swagger;
