/// Colors and type shared by every sub-view. One theme replaces the
/// separately styled copies of each component.
#[derive(Debug, Clone)]
pub struct Theme {
    pub primary: String,
    pub secondary: String,
    pub background: String,
    pub text: String,
    pub font_family: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: "#673ab7".to_string(),
            secondary: "#ff4081".to_string(),
            background: "#f3f4f6".to_string(),
            text: "#1f2933".to_string(),
            font_family: "'Poppins', sans-serif".to_string(),
        }
    }
}

impl Theme {
    /// Background of the identity banner.
    pub fn hero_gradient(&self) -> String {
        format!(
            "linear-gradient(135deg, {} 0%, {} 100%)",
            self.secondary, self.primary
        )
    }

    /// Page-wide layout rules. Sub-views apply the accent colors themselves.
    pub fn stylesheet(&self) -> String {
        format!(
            r#"body {{ margin: 0; font-family: {font}; background: {bg}; color: {text}; }}
.navbar {{ display: flex; justify-content: space-between; align-items: center; padding: 16px 32px; background: {primary}; color: white; }}
.navbar .brand {{ font-weight: 700; }}
.navbar a {{ margin-left: 16px; color: white; text-decoration: none; }}
.hero {{ min-height: 100vh; display: flex; flex-direction: column; justify-content: center; align-items: center; text-align: center; color: white; }}
.hero h1 {{ font-size: 3.75rem; margin: 0 0 16px; }}
.hero h2 {{ font-size: 1.5rem; font-weight: 400; margin: 0 0 32px; }}
.button {{ display: inline-block; padding: 8px 22px; border: none; border-radius: 4px; color: white; text-decoration: none; text-transform: uppercase; cursor: pointer; }}
.section {{ padding: 32px; }}
.section p {{ max-width: 800px; }}
.skills {{ display: flex; flex-wrap: wrap; gap: 8px; margin-top: 12px; }}
.skill {{ padding: 6px 12px; border-radius: 16px; color: white; }}
.cards {{ display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 24px; }}
.card {{ padding: 16px; border-radius: 12px; background: white; box-shadow: 0 3px 10px rgba(0, 0, 0, 0.2); }}
"#,
            font = self.font_family,
            bg = self.background,
            text = self.text,
            primary = self.primary,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stylesheet_uses_theme_colors() {
        let theme = Theme {
            primary: "#000001".to_string(),
            secondary: "#000002".to_string(),
            ..Theme::default()
        };
        let css = theme.stylesheet();
        assert!(css.contains("background: #000001"));
        assert!(css.contains("'Poppins', sans-serif"));
    }

    #[test]
    fn test_hero_gradient_runs_secondary_to_primary() {
        assert_eq!(
            Theme::default().hero_gradient(),
            "linear-gradient(135deg, #ff4081 0%, #673ab7 100%)"
        );
    }
}
