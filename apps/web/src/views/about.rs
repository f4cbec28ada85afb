use askama::Template;

use super::theme::Theme;

/// Prose plus one equally styled label per skill, in the given order.
#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate<'a> {
    pub about: &'a str,
    pub skills: &'a [String],
    pub theme: &'a Theme,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(about: &str, skills: &[String]) -> String {
        AboutTemplate {
            about,
            skills,
            theme: &Theme::default(),
        }
        .render()
        .unwrap()
    }

    #[test]
    fn test_skills_render_in_order() {
        let skills: Vec<String> = ["Docker", "SQL", "Docker"]
            .into_iter()
            .map(String::from)
            .collect();
        let html = render("Hello.", &skills);

        assert!(html.contains("<p>Hello.</p>"));
        assert_eq!(html.matches(r#"<span class="skill""#).count(), 3);
        assert_eq!(html.matches(r#"style="background: #673ab7;""#).count(), 3);

        let first = html.find(">Docker</span>").unwrap();
        let second = html.find(">SQL</span>").unwrap();
        let third = html.rfind(">Docker</span>").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_no_skills_renders_empty_list() {
        let html = render("", &[]);
        assert!(html.contains(r#"<div class="skills">"#));
        assert!(!html.contains(r#"class="skill""#));
    }
}
