use std::sync::mpsc::{self, Receiver, Sender};

use anyhow::{Result, anyhow};

use crate::config::SidekickConfig;

/// Messages exchanged between the widget and the options page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidekickMessage {
    /// Gear icon clicked, the host should show the options page
    OpenOptions,
    /// Settings were saved
    SettingsChanged(SidekickConfig),
}

/// Sending half of the sidekick message channel
#[derive(Debug, Clone)]
pub struct MessageSender {
    inner: Sender<SidekickMessage>,
}

impl MessageSender {
    pub fn send(&self, message: SidekickMessage) -> Result<()> {
        tracing::debug!(?message, "Sending sidekick message");
        self.inner.send(message).map_err(|e| anyhow!("Message receiver dropped: {:?}", e.0))
    }
}

pub fn message_channel() -> (MessageSender, Receiver<SidekickMessage>) {
    let (inner, receiver) = mpsc::channel();
    (MessageSender { inner }, receiver)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_and_receive_in_order() {
        let (sender, receiver) = message_channel();
        sender.send(SidekickMessage::OpenOptions).unwrap();
        sender.send(SidekickMessage::SettingsChanged(SidekickConfig::default())).unwrap();

        let received: Vec<_> = receiver.try_iter().collect();
        assert_eq!(
            received,
            vec![
                SidekickMessage::OpenOptions,
                SidekickMessage::SettingsChanged(SidekickConfig::default())
            ]
        );
    }

    #[test]
    fn test_send_after_receiver_dropped() {
        let (sender, receiver) = message_channel();
        drop(receiver);
        let err = sender.send(SidekickMessage::OpenOptions).unwrap_err();
        assert!(err.to_string().contains("receiver dropped"));
    }
}
