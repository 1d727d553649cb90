//! Credential form core shared by the sign-in and sign-up screens:
//! field values, validation, live password feedback, and the
//! submission lifecycle. Everything in here is UI-framework-free and
//! runs unchanged on the host for testing.

pub mod effects;
pub mod fields;
pub mod gateway;
pub mod requirements;
pub mod submission;
pub mod validate;
