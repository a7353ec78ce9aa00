// Status line
// Describes the last thing that happened to the frozen store

use crate::frozen::StoreState;

pub struct Status {
    pub status_message: String,
}

impl Status {
    pub fn new() -> Self {
        Self {
            status_message: String::from("No frozen snapshots"),
        }
    }

    pub fn update(&mut self, message: &str) {
        self.status_message = message.to_string();
    }

    pub fn froze(&mut self, count: usize, theta: f64) {
        self.update(&format!("Froze snapshot {count} at θ = {theta:.2} rad"));
    }

    pub fn cleared(&mut self, dropped: usize) {
        match dropped {
            0 => self.update("Nothing to clear"),
            1 => self.update("Cleared 1 frozen snapshot"),
            n => self.update(&format!("Cleared {n} frozen snapshots")),
        }
    }

    /// Short summary of the store shown under the buttons
    pub fn store_summary(state: StoreState, len: usize) -> String {
        match state {
            StoreState::Empty => "Store empty".to_owned(),
            StoreState::NonEmpty => format!("{len} frozen"),
        }
    }
}

// Implementing Default trait for Status
impl Default for Status {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_follow_actions() {
        let mut status = Status::default();
        assert_eq!(status.status_message, "No frozen snapshots");
        status.froze(3, 1.5708);
        assert_eq!(status.status_message, "Froze snapshot 3 at θ = 1.57 rad");
        status.cleared(1);
        assert_eq!(status.status_message, "Cleared 1 frozen snapshot");
        status.cleared(4);
        assert_eq!(status.status_message, "Cleared 4 frozen snapshots");
        status.cleared(0);
        assert_eq!(status.status_message, "Nothing to clear");
    }

    #[test]
    fn summary_reflects_store_state() {
        assert_eq!(Status::store_summary(StoreState::Empty, 0), "Store empty");
        assert_eq!(Status::store_summary(StoreState::NonEmpty, 2), "2 frozen");
    }
}
