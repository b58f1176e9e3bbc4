//! Domain contracts for the design studio: prompt library, request lifecycle, panel layout,
//! media payloads and the shell command grammar. Nothing here calls a collaborator.

pub mod chat;
pub mod events;
pub mod layout;
pub mod markup;
pub mod media;
pub mod models;
pub mod operation;
pub mod prompts;
