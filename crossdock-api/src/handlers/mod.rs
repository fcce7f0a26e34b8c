#[path = "optimize.rs"]
mod optimize_impl;
pub use self::optimize_impl::optimize;

#[path = "upload.rs"]
mod upload_impl;
pub use self::upload_impl::upload;
