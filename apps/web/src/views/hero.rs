use askama::Template;

use super::theme::Theme;

/// Identity banner. The call-to-action button is decorative.
#[derive(Template)]
#[template(path = "hero.html")]
pub struct HeroTemplate<'a> {
    pub name: &'a str,
    pub role: &'a str,
    pub theme: &'a Theme,
}
