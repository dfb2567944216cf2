//! # murmur-core
//!
//! Shared vocabulary for the murmur transcription worker:
//!
//! - **Events**: [`event::TriggerEvent`], the object-created notification
//!   payload that starts an invocation, and [`event::ObjectRef`], the
//!   bucket/key identity extracted from it.
//! - **Responses**: [`response::HandlerResponse`], the HTTP-style envelope
//!   returned to the hosting runtime on success.
//! - **Errors**: [`event::EventError`] for malformed or empty payloads.
//!
//! ## Crate Position
//!
//! Foundation crate. Depended on by: murmur-handler.

#![deny(unsafe_code)]

pub mod event;
pub mod response;

pub use event::{EventError, ObjectRef, TriggerEvent};
pub use response::HandlerResponse;
