//! Styled Dioxus components shared by the application views.

mod components;

pub use components::*;
