pub mod file;
pub mod mock;
pub mod remote;
pub mod traits;

pub use file::JsonFileSource;
pub use mock::MockListingSource;
pub use remote::RemoteListingSource;
pub use traits::ListingSource;
