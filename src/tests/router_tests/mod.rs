mod home_tests;
mod listings_tests;
mod property_tests;
mod signup_tests;
