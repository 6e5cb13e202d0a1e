#[macro_use]
extern crate rust_i18n;

i18n!("locales", fallback = "en");

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod interactive;
pub mod logging;
pub mod path_utils;
pub mod skills;
pub mod sync;

#[cfg(test)]
pub mod test_utils;

pub fn init_locale() {
    rust_i18n::set_locale("en");
}
