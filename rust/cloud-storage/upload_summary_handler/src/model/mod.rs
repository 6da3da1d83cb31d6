pub mod event;
pub mod key;
pub mod response;
