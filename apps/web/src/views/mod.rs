//! Sub-views. Each is an askama template over the slice of the profile it
//! is given plus the shared `Theme`; askama escapes every interpolated field.

pub mod about;
pub mod contact;
pub mod hero;
pub mod navbar;
pub mod projects;
pub mod theme;

use askama::Template;

use crate::renderer::ProfileState;

pub use about::AboutTemplate;
pub use contact::ContactTemplate;
pub use hero::HeroTemplate;
pub use navbar::NavbarTemplate;
pub use projects::ProjectsTemplate;
pub use theme::Theme;

/// Page-level settings that do not come from the profile.
#[derive(Debug, Clone)]
pub struct Site {
    pub brand: String,
    pub theme: Theme,
}

/// The sub-views that only exist once the profile is loaded.
pub struct ProfileSections<'a> {
    pub hero: HeroTemplate<'a>,
    pub about: AboutTemplate<'a>,
    pub projects: ProjectsTemplate<'a>,
    pub contact: ContactTemplate<'a>,
}

/// The whole page for one renderer snapshot. The navbar and shell are always
/// present; the profile sections only once the profile is loaded.
#[derive(Template)]
#[template(path = "page.html")]
pub struct PageTemplate<'a> {
    pub brand: &'a str,
    pub stylesheet: String,
    pub navbar: NavbarTemplate<'a>,
    pub sections: Option<ProfileSections<'a>>,
}

impl<'a> PageTemplate<'a> {
    pub fn new(state: &'a ProfileState, site: &'a Site) -> Self {
        let theme = &site.theme;
        let sections = state.profile().map(|profile| ProfileSections {
            hero: HeroTemplate {
                name: &profile.name,
                role: &profile.role,
                theme,
            },
            about: AboutTemplate {
                about: &profile.about,
                skills: &profile.skills,
                theme,
            },
            projects: ProjectsTemplate {
                projects: &profile.projects,
                theme,
            },
            contact: ContactTemplate { theme },
        });

        Self {
            brand: &site.brand,
            stylesheet: theme.stylesheet(),
            navbar: NavbarTemplate { brand: &site.brand },
            sections,
        }
    }
}
