//! Toast notification queue.

/// Toast appearance and lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToastKind {
    /// Pending operation; stays until resolved
    Loading,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Visible toasts, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Show a new toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    /// Turn an existing toast (usually `Loading`) into a final state.
    ///
    /// Returns `false` if the toast was already dismissed.
    pub fn resolve(&mut self, id: u64, kind: ToastKind, message: impl Into<String>) -> bool {
        match self.toasts.iter_mut().find(|t| t.id == id) {
            Some(toast) => {
                toast.kind = kind;
                toast.message = message.into();
                true
            }
            None => false,
        }
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_unique_ids() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastKind::Loading, "Reloading...");
        let b = queue.push(ToastKind::Error, "Too big");
        assert_ne!(a, b);
        assert_eq!(queue.toasts().len(), 2);
    }

    #[test]
    fn test_resolve_loading_toast() {
        let mut queue = ToastQueue::default();
        let id = queue.push(ToastKind::Loading, "Reloading...");
        assert!(queue.resolve(id, ToastKind::Success, "Data reloaded"));
        assert_eq!(queue.toasts()[0].kind, ToastKind::Success);
        assert_eq!(queue.toasts()[0].message, "Data reloaded");
    }

    #[test]
    fn test_dismissed_toast_cannot_resolve() {
        let mut queue = ToastQueue::default();
        let id = queue.push(ToastKind::Loading, "Reloading...");
        queue.dismiss(id);
        assert!(queue.toasts().is_empty());
        assert!(!queue.resolve(id, ToastKind::Error, "Error"));
        assert!(queue.toasts().is_empty());
    }
}
