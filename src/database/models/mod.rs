pub mod photo;
pub mod user;

pub use photo::{NewPhoto, Photo, PhotoInput, PhotoWithOwner};
pub use user::{PublicUser, User};
