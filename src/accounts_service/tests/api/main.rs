mod delete_profile;
mod helpers;
mod profile;
mod signin;
mod signup;
mod update_profile;
