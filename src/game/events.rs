//! Event System
//!
//! Events decouple the simulation from the HUD bridge: the session pushes
//! events as it mutates state, and the HUD drains them after the tick to
//! refresh its cached display strings. Queues are cleared every frame.

/// A queue for events of a single type.
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Send an event (add to queue)
    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    /// Drain all events (returns iterator and clears queue)
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.events.drain(..)
    }

    /// Check if there are any events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Clear all events without processing
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Number of events in queue
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Container for all session events.
#[derive(Debug, Default)]
pub struct Events {
    /// An orb was collected this frame (possibly several per frame)
    pub orb_collected: EventQueue<OrbCollected>,

    /// The player touched an enemy; the session is over
    pub player_hit: EventQueue<PlayerHit>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all event queues. Call at end of frame.
    pub fn clear_all(&mut self) {
        self.orb_collected.clear();
        self.player_hit.clear();
    }
}

/// An orb was collected by the player
#[derive(Debug, Clone, Copy)]
pub struct OrbCollected {
    /// Where the orb was
    pub x: f32,
    pub y: f32,
    /// Score after this collection
    pub score: u32,
    /// Brightness after this collection
    pub brightness: u8,
}

/// The player touched an enemy
#[derive(Debug, Clone, Copy)]
pub struct PlayerHit {
    /// Where the enemy was
    pub x: f32,
    pub y: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_queue() {
        let mut queue: EventQueue<i32> = EventQueue::new();

        queue.send(1);
        queue.send(2);
        queue.send(3);

        assert_eq!(queue.len(), 3);

        let collected: Vec<_> = queue.drain().collect();
        assert_eq!(collected, vec![1, 2, 3]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_events_container() {
        let mut events = Events::new();

        events.orb_collected.send(OrbCollected {
            x: 10.0,
            y: 20.0,
            score: 1,
            brightness: 30,
        });

        assert_eq!(events.orb_collected.len(), 1);

        events.clear_all();
        assert!(events.orb_collected.is_empty());
    }
}
