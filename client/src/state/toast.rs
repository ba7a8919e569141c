//! Transient notifications that outlive a route change.
//!
//! DESIGN
//! ======
//! Success messages are usually followed by a redirect, so they cannot live
//! in page state. `ToastState` is provided once by `app::App` and rendered by
//! `components::toaster::Toaster` outside the router.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
}

impl ToastKind {
    /// CSS modifier class.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            ToastKind::Info => "toast toast--info",
            ToastKind::Success => "toast toast--success",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
}

/// Visible toasts, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, title: impl Into<String>, description: Option<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast {
            id,
            kind,
            title: title.into(),
            description,
        });
        id
    }

    pub fn success(&mut self, title: impl Into<String>, description: Option<&str>) -> u64 {
        self.push(ToastKind::Success, title, description.map(str::to_owned))
    }

    /// Remove a toast. Unknown ids are ignored (already dismissed).
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }
}
