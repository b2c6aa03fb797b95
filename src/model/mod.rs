pub mod ids;
pub mod note;
pub mod contact;
pub mod birthday;
pub mod book;

// Re-exports for convenience
pub use ids::{ContactId, IdSequence};
pub use note::{Note, NoteDeletion, NO_TAGS};
pub use contact::{Contact, ContactField, IdentitySummary, ValueSummary};
pub use birthday::Birthday;
pub use book::ContactBook;
