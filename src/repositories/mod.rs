//! Repository layer for message storage.
//!
//! Keeps storage access separate from the business logic in the services.

pub mod message_repository;

pub use message_repository::MessageRepository;
