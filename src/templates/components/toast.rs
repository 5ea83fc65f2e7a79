use crate::submissions::{Severity, Toast};
use maud::{html, Markup};

pub fn toast(toast: &Toast) -> Markup {
    let class = match toast.severity {
        Severity::Success => "toast toast-success",
        Severity::Destructive => "toast toast-destructive",
    };

    html! {
        div class=(class) role="status" aria-live="polite" {
            strong class="toast-title" { (toast.title) }
            p class="toast-description" { (toast.description) }
        }
    }
}
