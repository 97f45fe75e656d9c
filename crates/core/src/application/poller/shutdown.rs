// Poll Loop Shutdown Token (fired on Ctrl+C by the daemon)

use tokio::sync::watch;

/// Stops `PollLoop::run` between cycles or in the middle of its sleep
#[derive(Clone)]
pub struct ShutdownToken {
    rx: watch::Receiver<bool>,
}

impl ShutdownToken {
    /// True once the daemon asked the loop to stop
    pub fn is_shutdown(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolve when the loop should stop
    ///
    /// Also resolves when the sender is dropped.
    pub async fn wait(&mut self) {
        if self.is_shutdown() {
            return;
        }
        let _ = self.rx.changed().await;
    }
}

/// Held by the daemon; dropping it also stops the loop
pub struct ShutdownSender {
    tx: watch::Sender<bool>,
}

impl ShutdownSender {
    /// Ask the poll loop to finish its current cycle and exit
    pub fn shutdown(&self) {
        let _ = self.tx.send(true);
    }
}

/// Create the sender/token pair shared by the daemon and the poll loop
pub fn shutdown_channel() -> (ShutdownSender, ShutdownToken) {
    let (tx, rx) = watch::channel(false);
    (ShutdownSender { tx }, ShutdownToken { rx })
}
