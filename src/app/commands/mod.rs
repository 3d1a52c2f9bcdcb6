pub mod configure;
pub mod install;
