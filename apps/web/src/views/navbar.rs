use askama::Template;

/// Rendered in every state, so it only depends on the site brand.
#[derive(Template)]
#[template(path = "navbar.html")]
pub struct NavbarTemplate<'a> {
    pub brand: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navbar_links_to_sections() {
        let html = NavbarTemplate { brand: "Dhanunjaya" }.render().unwrap();
        assert!(html.contains(r#"<div class="brand">Dhanunjaya</div>"#));
        for anchor in ["#projects", "#about", "#contact"] {
            assert!(html.contains(&format!(r#"href="{anchor}""#)));
        }
    }

    #[test]
    fn test_brand_is_escaped() {
        let html = NavbarTemplate { brand: "<b>Ada</b>" }.render().unwrap();
        assert!(html.contains("&lt;b&gt;Ada&lt;/b&gt;"));
    }
}
