pub mod error;
pub mod home;
pub mod list_property;
pub mod property_detail;
pub mod signup;

pub use error::error_page;
pub use home::home_page;
pub use list_property::{list_property_fragment, list_property_page};
pub use property_detail::property_detail_page;
pub use signup::{signup_fragment, signup_page};
