/// Overlay that can hold the page scroll lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockHolder {
    Menu,
    Modal,
}

/// Page scroll stays locked while any overlay holds it, so closing the modal
/// over an open menu does not unlock the page under the menu.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollLock {
    menu: bool,
    modal: bool,
}

impl ScrollLock {
    pub fn acquire(&mut self, holder: LockHolder) {
        *self.slot(holder) = true;
    }

    pub fn release(&mut self, holder: LockHolder) {
        *self.slot(holder) = false;
    }

    pub fn is_locked(&self) -> bool {
        self.menu || self.modal
    }

    /// Value for `document.body.style.overflow`.
    pub fn body_overflow(&self) -> &'static str {
        if self.is_locked() {
            "hidden"
        } else {
            ""
        }
    }

    fn slot(&mut self, holder: LockHolder) -> &mut bool {
        match holder {
            LockHolder::Menu => &mut self.menu,
            LockHolder::Modal => &mut self.modal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_locked_until_every_holder_releases() {
        let mut lock = ScrollLock::default();
        assert_eq!(lock.body_overflow(), "");

        lock.acquire(LockHolder::Menu);
        lock.acquire(LockHolder::Modal);
        lock.release(LockHolder::Modal);
        assert_eq!(lock.body_overflow(), "hidden");

        lock.release(LockHolder::Menu);
        assert!(!lock.is_locked());
    }

    #[test]
    fn acquiring_twice_needs_one_release() {
        let mut lock = ScrollLock::default();
        lock.acquire(LockHolder::Modal);
        lock.acquire(LockHolder::Modal);
        lock.release(LockHolder::Modal);
        assert!(!lock.is_locked());
    }
}
