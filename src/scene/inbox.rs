use std::sync::mpsc::{self, Receiver, Sender};

use crate::scene::LoadedModel;

/// Loader-side end of the asset completion channel; may live on another thread
#[derive(Debug, Clone)]
pub struct AssetSender {
    sender: Sender<LoadedModel>,
}

impl AssetSender {
    /// Delivers a completed model; returns false if the scene has been dropped
    pub fn deliver(&self, model: LoadedModel) -> bool {
        self.sender.send(model).is_ok()
    }
}

/// Frame-side end of the asset completion channel
#[derive(Debug)]
pub struct AssetInbox {
    receiver: Receiver<LoadedModel>,
}

impl AssetInbox {
    /// Creates a connected sender/inbox pair
    pub fn channel() -> (AssetSender, AssetInbox) {
        let (sender, receiver) = mpsc::channel();
        (AssetSender { sender }, AssetInbox { receiver })
    }

    /// Takes every model delivered since the last call, without blocking
    pub fn drain(&self) -> Vec<LoadedModel> {
        self.receiver.try_iter().collect()
    }
}
