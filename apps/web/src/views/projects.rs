use askama::Template;

use super::theme::Theme;
use crate::models::profile::Project;

/// One card per project, in the given order. Links open in a new tab.
#[derive(Template)]
#[template(path = "projects.html")]
pub struct ProjectsTemplate<'a> {
    pub projects: &'a [Project],
    pub theme: &'a Theme,
}
