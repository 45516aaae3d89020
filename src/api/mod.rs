//! Clients for the external HTTP services taskmaster talks to.
//!
//! - **Remote**: the document store serving `get-tasks` and `add-task`, used
//!   as the task repository when configured.
//! - **Suggest**: a Gemini text model drafting task descriptions.
//!
//! Each client carries its own configuration struct with the `module()` and
//! `init()` pair used by the setup wizard.

pub mod remote;
pub mod suggest;

pub use remote::{RemoteConfig, RemoteStore};
pub use suggest::{SuggestConfig, Suggester};
