use super::LoadError;
use oneshot::TryRecvError;

/// State of a [`PendingAsset`] after a poll.
#[derive(Debug)]
pub enum AssetPoll<T> {
    /// Still loading.
    Pending,
    /// The asset is available.
    Ready(T),
    /// The load failed; it will not be retried.
    Failed(LoadError),
}

/// The sending half of a [`PendingAsset`].
pub struct Completer<T> {
    sender: oneshot::Sender<Result<T, LoadError>>,
}

impl<T> Completer<T> {
    /// Delivers the result. Dropping a completer without calling this is
    /// reported as [`LoadError::Disconnected`].
    pub fn complete(self, result: Result<T, LoadError>) {
        // The receiving side may already be gone; nobody is waiting then.
        let _ = self.sender.send(result);
    }
}

/// An asset that may not exist yet.
pub struct PendingAsset<T> {
    label: String,
    receiver: oneshot::Receiver<Result<T, LoadError>>,
}

impl<T> PendingAsset<T> {
    /// Creates a pending asset completed by hand through the returned
    /// [`Completer`].
    pub fn manual(label: impl Into<String>) -> (Completer<T>, Self) {
        let (sender, receiver) = oneshot::channel();
        (
            Completer { sender },
            PendingAsset {
                label: label.into(),
                receiver,
            },
        )
    }

    /// Creates an already completed asset.
    pub fn resolved(label: impl Into<String>, result: Result<T, LoadError>) -> Self {
        let (completer, pending) = Self::manual(label);
        completer.complete(result);
        pending
    }

    /// Name used in log messages, usually the file path.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Checks for a result without blocking.
    ///
    /// Once `Ready` or `Failed` has been returned the asset is spent and
    /// subsequent polls report [`LoadError::Disconnected`].
    pub fn poll(&mut self) -> AssetPoll<T> {
        match self.receiver.try_recv() {
            Ok(Ok(asset)) => AssetPoll::Ready(asset),
            Ok(Err(e)) => AssetPoll::Failed(e),
            Err(TryRecvError::Empty) => AssetPoll::Pending,
            Err(TryRecvError::Disconnected) => AssetPoll::Failed(LoadError::Disconnected),
        }
    }

    /// Blocks until the load finishes.
    pub fn wait(self) -> Result<T, LoadError> {
        match self.receiver.recv() {
            Ok(result) => result,
            Err(_) => Err(LoadError::Disconnected),
        }
    }
}

impl<T: Send + 'static> PendingAsset<T> {
    /// Runs `load` on a new thread.
    ///
    /// If the thread cannot be started the asset reports
    /// [`LoadError::Disconnected`] on its first poll.
    pub fn spawn<F>(label: impl Into<String>, load: F) -> Self
    where
        F: FnOnce() -> Result<T, LoadError> + Send + 'static,
    {
        let (completer, pending) = Self::manual(label);
        let spawned = std::thread::Builder::new()
            .name(format!("load {}", pending.label))
            .spawn(move || completer.complete(load()));

        if let Err(e) = spawned {
            log::debug!("could not start loader for {}: {}", pending.label, e);
        }

        pending
    }
}

impl<T> std::fmt::Debug for PendingAsset<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingAsset")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}
