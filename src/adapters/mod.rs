pub mod command_package_installer;
pub mod dialoguer_prompter;
pub mod registry_http;
pub mod registry_local;
pub mod registry_location;
pub mod templates;
