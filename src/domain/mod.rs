pub mod filter;
pub mod fixtures;
pub mod property;
pub mod signup;
pub mod validation;

pub use property::{NewProperty, PropertyDetail, PropertyForm, PropertyRecord};
pub use signup::{Signup, SignupForm};
pub use validation::FieldErrors;
