pub mod contact_ops;
pub mod note_ops;
