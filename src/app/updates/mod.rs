/// Version history message handling
pub mod history;
