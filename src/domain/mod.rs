pub mod channel;
pub mod comment;
pub mod course;
pub mod post;
pub mod user;
