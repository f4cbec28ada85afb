use askama::Template;

use super::theme::Theme;

/// Static; does not depend on the profile.
#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate<'a> {
    pub theme: &'a Theme,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_uses_theme_accent() {
        let html = ContactTemplate {
            theme: &Theme::default(),
        }
        .render()
        .unwrap();
        assert!(html.contains(r#"<section id="contact" class="section">"#));
        assert!(html.contains("color: #673ab7;"));
    }
}
