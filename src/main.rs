#[macro_use]
extern crate rust_i18n;

i18n!("locales", fallback = "en");

use skillshare::cli;
use skillshare::error::SkillshareError;
use skillshare::init_locale;

fn main() {
    init_locale();

    if let Err(e) = cli::run() {
        let message = e
            .downcast_ref::<SkillshareError>()
            .map(SkillshareError::display_localized)
            .unwrap_or_else(|| format!("{e:#}"));
        eprintln!("{}", t!("messages.error", error = message));
        std::process::exit(1);
    }
}
