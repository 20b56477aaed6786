pub mod error;
pub mod feature_flags;

// Session and login core
pub mod demo_accounts;
pub mod identity;
pub mod login_flow;
pub mod notice;
pub mod role;
pub mod session;
pub mod view;

// Dashboard sample data
pub mod dashboard;

pub use error::*;
pub use feature_flags::*;

pub use dashboard::*;
pub use demo_accounts::*;
pub use identity::*;
pub use login_flow::*;
pub use notice::*;
pub use role::*;
pub use session::*;
pub use view::*;
