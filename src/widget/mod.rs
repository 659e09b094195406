//! Presentation of search results as the floating sidekick widget
//!
//! Components talk to each other only through [`SidekickMessage`]s sent over an
//! explicit channel; settings reach them through a [`crate::config::ConfigStore`].

pub mod badge;
pub mod links;
pub mod messages;
pub mod panel;
pub mod settings_panel;
pub mod sidekick;

pub use badge::{BadgeContent, FloatingButton};
pub use messages::{MessageSender, SidekickMessage, message_channel};
pub use panel::{BlockGroup, SidekickPanel, group_blocks_by_page};
pub use settings_panel::SearchSettings;
pub use sidekick::Sidekick;
