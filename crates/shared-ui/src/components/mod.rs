// Standalone components
pub mod badge;
pub mod button;
pub mod card;
pub mod input;

// Primitive wrappers
pub mod dialog;
pub mod field;
pub mod score_bar;
pub mod toast;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use dialog::*;
pub use field::*;
pub use input::*;
pub use score_bar::*;
pub use toast::*;
