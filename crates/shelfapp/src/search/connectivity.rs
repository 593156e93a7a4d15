use tokio::sync::watch;

/// Whether the network is believed to be reachable.
pub trait Connectivity: Send + Sync {
    fn is_online(&self) -> bool;

    /// Feed an observation back (a response arrived, a connection failed).
    fn report(&self, _online: bool) {}
}

/// Connectivity tracked from request outcomes, observable through a watch channel.
#[derive(Debug)]
pub struct ConnectivityMonitor {
    tx: watch::Sender<bool>,
}

impl ConnectivityMonitor {
    pub fn new(online: bool) -> Self {
        let (tx, _rx) = watch::channel(online);
        Self { tx }
    }

    /// Receiver that wakes on every online/offline transition.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }

    pub fn set_online(&self, online: bool) {
        let changed = self.tx.send_if_modified(|current| {
            if *current == online {
                return false;
            }
            *current = online;
            true
        });
        if changed {
            tracing::debug!(online, "connectivity changed");
        }
    }
}

impl Default for ConnectivityMonitor {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Connectivity for ConnectivityMonitor {
    fn is_online(&self) -> bool {
        *self.tx.borrow()
    }

    fn report(&self, online: bool) {
        self.set_online(online);
    }
}

/// A fixed answer. Observations are ignored.
#[derive(Debug, Clone, Copy)]
pub struct StaticConnectivity(pub bool);

impl StaticConnectivity {
    pub fn online() -> Self {
        Self(true)
    }

    pub fn offline() -> Self {
        Self(false)
    }
}

impl Connectivity for StaticConnectivity {
    fn is_online(&self) -> bool {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn monitor_notifies_on_transitions_only() {
        let monitor = ConnectivityMonitor::new(true);
        let mut rx = monitor.subscribe();

        monitor.report(true);
        assert!(!rx.has_changed().unwrap());

        monitor.report(false);
        assert!(rx.has_changed().unwrap());
        assert!(!*rx.borrow_and_update());
        assert!(!monitor.is_online());
    }

    #[test]
    fn static_ignores_reports() {
        let offline = StaticConnectivity::offline();
        offline.report(true);
        assert!(!offline.is_online());
    }
}
