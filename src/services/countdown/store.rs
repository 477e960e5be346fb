//! Observable container for the published [`CountdownState`].
//!
//! The store owns the sending half of a `watch` channel. Presentation code
//! subscribes and reads the latest value whenever it repaints.

use tokio::sync::watch;

use crate::models::countdown::CountdownState;

pub type CountdownReceiver = watch::Receiver<CountdownState>;

#[derive(Debug)]
pub struct CountdownStore {
    sender: watch::Sender<CountdownState>,
}

impl Default for CountdownStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CountdownStore {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(CountdownState::Loading);
        Self { sender }
    }

    pub fn subscribe(&self) -> CountdownReceiver {
        self.sender.subscribe()
    }

    pub fn current(&self) -> CountdownState {
        self.sender.borrow().clone()
    }

    /// Replace the published state. Subscribers are only woken when the
    /// value actually changes.
    pub(crate) fn publish(&self, state: CountdownState) {
        self.sender.send_if_modified(|current| {
            if *current == state {
                false
            } else {
                *current = state;
                true
            }
        });
    }
}
