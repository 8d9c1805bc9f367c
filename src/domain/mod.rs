pub mod errors;
pub mod monument;
pub mod slug;
