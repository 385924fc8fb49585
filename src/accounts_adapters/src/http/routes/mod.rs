pub mod delete_profile;
pub mod error;
pub mod not_found;
pub mod profile;
pub mod signin;
pub mod signup;
pub mod update_profile;

pub use delete_profile::delete_profile;
pub use not_found::not_found;
pub use profile::get_profile;
pub use signin::signin;
pub use signup::signup;
pub use update_profile::update_profile;
