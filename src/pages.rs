//! Page table and URL builder
//!
//! A fixed table mapping logical page names to client-side paths. Unknown
//! names fall back to the root path, which itself redirects to the dashboard
//! in the frontend router.

/// Root path; the frontend redirects it to the dashboard
pub const ROOT_PATH: &str = "/";

/// A routed page of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Dashboard,
    CreateBrief,
    BriefDetail,
    Research,
}

impl Page {
    /// All pages, in navigation order
    pub fn all() -> &'static [Page] {
        &[
            Page::Dashboard,
            Page::CreateBrief,
            Page::BriefDetail,
            Page::Research,
        ]
    }

    /// Logical name used by [`create_page_url`]
    pub fn name(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::CreateBrief => "CreateBrief",
            Page::BriefDetail => "BriefDetail",
            Page::Research => "Research",
        }
    }

    /// Client-side route path
    pub fn path(&self) -> &'static str {
        match self {
            Page::Dashboard => "/dashboard",
            Page::CreateBrief => "/create-brief",
            Page::BriefDetail => "/brief-detail",
            Page::Research => "/research",
        }
    }

    /// Display title
    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::CreateBrief => "New Analysis",
            Page::BriefDetail => "Brief Detail",
            Page::Research => "Research Hub",
        }
    }

    /// Resolve a logical page name
    pub fn from_name(name: &str) -> Option<Page> {
        Page::all().iter().copied().find(|p| p.name() == name)
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Build a URL for a logical page name.
///
/// Unknown names resolve to the root path. `params` is appended verbatim
/// (typically a `?id=` query string); it is not encoded or validated.
pub fn create_page_url(name: &str, params: &str) -> String {
    let base = Page::from_name(name).map_or(ROOT_PATH, |p| p.path());
    if params.is_empty() {
        base.to_string()
    } else {
        format!("{base}{params}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_table() {
        assert_eq!(create_page_url("Dashboard", ""), "/dashboard");
        assert_eq!(create_page_url("CreateBrief", ""), "/create-brief");
        assert_eq!(create_page_url("BriefDetail", ""), "/brief-detail");
        assert_eq!(create_page_url("Research", ""), "/research");
    }

    #[test]
    fn test_unknown_page_falls_back_to_root() {
        assert_eq!(create_page_url("Settings", ""), "/");
        assert_eq!(create_page_url("", ""), "/");
    }

    #[test]
    fn test_params_are_appended_verbatim() {
        assert_eq!(
            create_page_url("BriefDetail", "?id=42"),
            "/brief-detail?id=42"
        );
    }

    #[test]
    fn test_name_round_trip() {
        for page in Page::all() {
            assert_eq!(Page::from_name(page.name()), Some(*page));
        }
        assert_eq!(Page::from_name("Nope"), None);
    }
}
