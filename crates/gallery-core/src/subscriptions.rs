use smallvec::SmallVec;

/// Event subscriptions that have to be released exactly once.
///
/// The web controls push one entry per listener they attach and hand each
/// entry back to a removal callback on teardown. Releasing an empty set is a
/// no-op, so teardown can be called any number of times.
#[derive(Debug)]
pub struct Subscriptions<L> {
    active: SmallVec<[L; 8]>,
}

impl<L> Default for Subscriptions<L> {
    fn default() -> Self {
        Self {
            active: SmallVec::new(),
        }
    }
}

impl<L> Subscriptions<L> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, listener: L) {
        self.active.push(listener);
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Pass every held subscription to `remove`. Returns how many were released.
    pub fn release(&mut self, mut remove: impl FnMut(L)) -> usize {
        let count = self.active.len();
        for listener in self.active.drain(..) {
            remove(listener);
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_hands_back_each_listener_once() {
        let mut subs = Subscriptions::new();
        subs.push("mousedown");
        subs.push("wheel");
        let mut removed = Vec::new();
        assert_eq!(subs.release(|l| removed.push(l)), 2);
        assert_eq!(removed, vec!["mousedown", "wheel"]);
        assert!(subs.is_empty());
    }

    #[test]
    fn second_release_removes_nothing() {
        let mut subs = Subscriptions::new();
        subs.push(1);
        let mut calls = 0;
        subs.release(|_| calls += 1);
        assert_eq!(subs.release(|_| calls += 1), 0);
        assert_eq!(calls, 1);
    }
}
