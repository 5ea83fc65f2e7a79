pub mod benefits;
pub mod cta;
pub mod features;
pub mod footer;
pub mod hero;
pub mod how_it_works;
pub mod listings;

pub use benefits::benefits;
pub use cta::cta;
pub use features::features;
pub use footer::footer;
pub use hero::hero;
pub use how_it_works::how_it_works;
pub use listings::listings;
