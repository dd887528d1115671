// Types layer - All data structures
pub mod domain;
pub mod dto;
pub mod internal;
