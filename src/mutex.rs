use core::cell::RefCell;
use core::ops::DerefMut;
use critical_section::with;

/// Lock shared by the receive and transmit contexts
pub(crate) struct Mutex<T> {
    inner: RefCell<T>,
}

impl<T> Mutex<T> {
    pub const fn new(inner: T) -> Self {
        Self {
            inner: RefCell::new(inner),
        }
    }

    /// Exclusive mutable access to inner value.
    /// Returns `None` if the value is already borrowed by the current context.
    pub fn access<F, R>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        with(|_cs| {
            let mut inner = self.inner.try_borrow_mut().ok()?;
            Some(f(inner.deref_mut()))
        })
    }

    /// Mutable access without locking, exclusivity is guaranteed by the borrow
    pub fn get_mut(&mut self) -> &mut T {
        self.inner.get_mut()
    }
}

unsafe impl<T: Send> Sync for Mutex<T> {}
