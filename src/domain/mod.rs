pub mod airplane;
pub mod errors;
pub mod manufacturer;
pub mod slug;
