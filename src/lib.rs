//! Local tools of the Lumira portal: a keypad calculator and a unit
//! converter, owned by a [`tools::ToolManager`] and rendered through a
//! [`render::DisplaySurface`].

pub mod calculator;
pub mod config;
pub mod converter;
pub mod error;
pub mod render;
pub mod tools;

pub use config::LumiraConfig;
pub use error::{LumiraError, Result};
pub use tools::{ToolId, ToolManager, Widget};
