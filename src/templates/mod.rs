pub mod components;
pub mod layouts;
pub mod pages;
pub mod sections;

// Re-exports for convenience
pub use layouts::desktop::desktop_layout;
