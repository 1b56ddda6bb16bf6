use std::rc::Rc;

/// Shared "transaction data changed" flag.
///
/// Consumers react to a flip of the value, not to the value itself, so the
/// only thing the form ever does with it is [`RefreshSignal::toggle`].
pub trait RefreshSignal {
    fn refresh(&self) -> bool;

    fn set_refresh(&self, next: bool);

    fn toggle(&self) {
        self.set_refresh(!self.refresh());
    }
}

impl<T: RefreshSignal + ?Sized> RefreshSignal for Rc<T> {
    fn refresh(&self) -> bool {
        (**self).refresh()
    }

    fn set_refresh(&self, next: bool) {
        (**self).set_refresh(next)
    }

    fn toggle(&self) {
        (**self).toggle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct Flag(Cell<bool>);

    impl RefreshSignal for Flag {
        fn refresh(&self) -> bool {
            self.0.get()
        }

        fn set_refresh(&self, next: bool) {
            self.0.set(next);
        }
    }

    #[test]
    fn test_default_toggle_flips_current_value() {
        let flag = Rc::new(Flag::default());

        flag.toggle();
        assert!(flag.refresh());
        flag.toggle();
        assert!(!flag.refresh());
    }
}
