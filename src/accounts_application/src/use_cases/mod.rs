pub mod delete_profile;
pub mod get_profile;
pub mod signin;
pub mod signup;
pub mod update_profile;

// Re-export for convenience
pub use delete_profile::{DeleteProfileError, DeleteProfileUseCase};
pub use get_profile::{GetProfileError, GetProfileUseCase};
pub use signin::{SigninError, SigninUseCase};
pub use signup::{SignupError, SignupUseCase};
pub use update_profile::{ProfilePatch, UpdateProfileError, UpdateProfileUseCase};
