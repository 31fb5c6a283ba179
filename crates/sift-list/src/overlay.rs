#![forbid(unsafe_code)]

//! A stack of dialogs drawn over the main view.
//!
//! The last dialog is the active one: it receives input, and closing it
//! reveals the one beneath. Rendering composes [`Overlay::iter`] bottom to
//! top.

/// Anything the overlay can stack.
pub trait Dialog {
    /// Stable identifier, unique within one overlay.
    fn id(&self) -> &str;
}

#[derive(Debug, Clone)]
pub struct Overlay<D> {
    dialogs: Vec<D>,
}

impl<D> Default for Overlay<D> {
    fn default() -> Self {
        Self {
            dialogs: Vec::new(),
        }
    }
}

impl<D: Dialog> Overlay<D> {
    /// Create an overlay with `dialogs` stacked in order, last on top.
    #[must_use]
    pub fn new(dialogs: Vec<D>) -> Self {
        Self { dialogs }
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.dialogs.iter().any(|dialog| dialog.id() == id)
    }

    /// Push a dialog on top; it becomes active.
    pub fn push(&mut self, dialog: D) {
        self.dialogs.push(dialog);
    }

    /// Move the dialog with `id` to the top. Returns whether it was found.
    pub fn bring_to_front(&mut self, id: &str) -> bool {
        let Some(idx) = self.dialogs.iter().position(|dialog| dialog.id() == id) else {
            return false;
        };
        let dialog = self.dialogs.remove(idx);
        self.dialogs.push(dialog);
        true
    }

    /// Remove and return the active dialog.
    pub fn close_active(&mut self) -> Option<D> {
        let dialog = self.dialogs.pop()?;
        tracing::debug!(dialog = dialog.id(), remaining = self.dialogs.len(), "dialog closed");
        Some(dialog)
    }

    /// Remove the dialog at `idx`; out-of-range indices are ignored.
    pub fn remove(&mut self, idx: usize) -> Option<D> {
        (idx < self.dialogs.len()).then(|| self.dialogs.remove(idx))
    }

    /// Hand the active dialog to `update`; returning `None` closes it.
    pub fn update_active<F>(&mut self, update: F)
    where
        F: FnOnce(D) -> Option<D>,
    {
        if let Some(dialog) = self.dialogs.pop()
            && let Some(updated) = update(dialog)
        {
            self.dialogs.push(updated);
        }
    }

    #[must_use]
    pub fn active(&self) -> Option<&D> {
        self.dialogs.last()
    }

    pub fn active_mut(&mut self) -> Option<&mut D> {
        self.dialogs.last_mut()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.dialogs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dialogs.is_empty()
    }

    /// Dialogs bottom to top, in drawing order.
    pub fn iter(&self) -> impl Iterator<Item = &D> {
        self.dialogs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Named(&'static str);

    impl Dialog for Named {
        fn id(&self) -> &str {
            self.0
        }
    }

    fn ids(overlay: &Overlay<Named>) -> Vec<&str> {
        overlay.iter().map(Dialog::id).collect()
    }

    #[test]
    fn push_and_close_are_lifo() {
        let mut overlay = Overlay::default();
        assert!(overlay.is_empty());
        overlay.push(Named("sessions"));
        overlay.push(Named("confirm"));
        assert_eq!(overlay.active(), Some(&Named("confirm")));
        assert_eq!(overlay.close_active(), Some(Named("confirm")));
        assert_eq!(overlay.active(), Some(&Named("sessions")));
        assert_eq!(overlay.len(), 1);
    }

    #[test]
    fn bring_to_front_reorders() {
        let mut overlay = Overlay::new(vec![Named("a"), Named("b"), Named("c")]);
        assert!(overlay.bring_to_front("a"));
        assert_eq!(ids(&overlay), vec!["b", "c", "a"]);
        assert!(!overlay.bring_to_front("missing"));
        assert_eq!(ids(&overlay), vec!["b", "c", "a"]);
    }

    #[test]
    fn contains_by_id() {
        let overlay = Overlay::new(vec![Named("a")]);
        assert!(overlay.contains("a"));
        assert!(!overlay.contains("b"));
    }

    #[test]
    fn remove_ignores_out_of_range() {
        let mut overlay = Overlay::new(vec![Named("a"), Named("b")]);
        assert_eq!(overlay.remove(5), None);
        assert_eq!(overlay.remove(0), Some(Named("a")));
        assert_eq!(ids(&overlay), vec!["b"]);
    }

    #[test]
    fn update_active_can_replace_or_close() {
        let mut overlay = Overlay::new(vec![Named("a"), Named("b")]);
        overlay.update_active(|_| Some(Named("b2")));
        assert_eq!(ids(&overlay), vec!["a", "b2"]);
        overlay.update_active(|_| None);
        assert_eq!(ids(&overlay), vec!["a"]);

        let mut empty: Overlay<Named> = Overlay::default();
        empty.update_active(|d| Some(d));
        assert!(empty.is_empty());
    }
}
