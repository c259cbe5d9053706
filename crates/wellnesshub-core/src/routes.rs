//! The fixed page table.
//!
//! Pages form a flat, static route table; there is no nesting and no
//! dynamic segments. Resolution is an exact string match on the path.

use serde::Serialize;

/// A page of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    Home,
    Understanding,
    Conditions,
    Treatment,
    FindProfessional,
    Crisis,
    Mindfulness,
    Journal,
    Forum,
    Blog,
    AdminSignin,
    Quizzes,
    CbtExercises,
    Dashboard,
}

impl Page {
    pub const ALL: [Page; 14] = [
        Page::Home,
        Page::Understanding,
        Page::Conditions,
        Page::Treatment,
        Page::FindProfessional,
        Page::Crisis,
        Page::Mindfulness,
        Page::Journal,
        Page::Forum,
        Page::Blog,
        Page::AdminSignin,
        Page::Quizzes,
        Page::CbtExercises,
        Page::Dashboard,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Understanding => "/understanding",
            Page::Conditions => "/conditions",
            Page::Treatment => "/treatment",
            Page::FindProfessional => "/find-professional",
            Page::Crisis => "/crisis",
            Page::Mindfulness => "/mindfulness",
            Page::Journal => "/journal",
            Page::Forum => "/forum",
            Page::Blog => "/blog",
            Page::AdminSignin => "/admin-signin",
            Page::Quizzes => "/quizzes",
            Page::CbtExercises => "/cbt-exercises",
            Page::Dashboard => "/dashboard",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Understanding => "Understanding Mental Health",
            Page::Conditions => "Common Conditions",
            Page::Treatment => "Treatment Strategies",
            Page::FindProfessional => "Find a Professional",
            Page::Crisis => "Crisis Resources",
            Page::Mindfulness => "Mindfulness Exercises",
            Page::Journal => "Journal & Mood Tracker",
            Page::Forum => "Community Forum",
            Page::Blog => "Community Blog",
            Page::AdminSignin => "Admin Sign In",
            Page::Quizzes => "Self-Assessments & Quizzes",
            Page::CbtExercises => "CBT Exercises",
            Page::Dashboard => "Dashboard",
        }
    }

    /// Exact-match path resolution. Unknown paths resolve to nothing;
    /// there is no catch-all page.
    pub fn resolve(path: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|page| page.path() == path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_resolves_by_its_own_path() {
        for page in Page::ALL {
            assert_eq!(Page::resolve(page.path()), Some(page));
        }
    }

    #[test]
    fn resolution_is_exact() {
        assert_eq!(Page::resolve("/"), Some(Page::Home));
        assert_eq!(Page::resolve("/journal/"), None);
        assert_eq!(Page::resolve("/missing"), None);
    }

    #[test]
    fn paths_are_unique() {
        let mut paths: Vec<&str> = Page::ALL.iter().map(|p| p.path()).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), Page::ALL.len());
    }
}
