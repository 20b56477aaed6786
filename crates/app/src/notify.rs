use shared_types::{Notice, NoticeKind};
use shared_ui::{ToastOptions, Toasts};

/// Show `notice` as an in-app toast.
pub fn show(toasts: &Toasts, notice: &Notice) {
    let options = ToastOptions::new().description(notice.description.clone());
    match notice.kind {
        NoticeKind::Success => toasts.success(notice.title.clone(), options),
        NoticeKind::Error => toasts.error(notice.title.clone(), options),
    }
}
