use std::sync::LazyLock;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::broadcast;

static KILL: LazyLock<(broadcast::Sender<()>, broadcast::Receiver<()>)> =
    LazyLock::new(|| broadcast::channel(1));

static KILLED: AtomicBool = AtomicBool::new(false);

pub async fn listen_for_ctrl_c() {
    tokio::signal::ctrl_c().await.ok();

    KILL.0.send(()).ok();

    KILLED.store(true, Ordering::Relaxed);
}

pub async fn ctrl_c() {
    if KILLED.load(Ordering::Relaxed) {
        return;
    }

    KILL.0.subscribe().recv().await.ok();
}
