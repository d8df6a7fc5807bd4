pub mod catalog;
pub mod channels;
pub mod comments;
pub mod composer;
pub mod engagement;
pub mod feed;
pub mod pulses;
pub mod ratings;
pub mod shortcuts;
