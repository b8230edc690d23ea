//! Client-side page components, one per route.

mod home;
mod hotels;
mod login;
mod not_found;
mod user_profile;

pub use home::Home;
pub use hotels::Hotels;
pub use login::Login;
pub use not_found::NotFound;
pub use user_profile::UserProfile;
