use dioxus::prelude::*;

use crate::app::Route;

#[derive(Debug, Clone, PartialEq)]
pub struct Crumb {
    pub label: &'static str,
    pub to: Route,
}

/// Trail for `route`, always rooted at Home. Empty on the home page itself.
pub fn trail(route: &Route) -> Vec<Crumb> {
    let home = Crumb {
        label: "Home",
        to: Route::Home {},
    };
    match route {
        Route::Home {} => vec![],
        Route::Reporting {} => vec![
            home,
            Crumb {
                label: "Reporting",
                to: Route::Reporting {},
            },
        ],
        Route::Videos {} => vec![
            home,
            Crumb {
                label: "Videos",
                to: Route::Videos {},
            },
        ],
        Route::PageNotFound { .. } => vec![home],
    }
}

#[allow(non_snake_case)]
#[component]
pub fn Breadcrumbs() -> Element {
    let route = use_route::<Route>();
    let crumbs = trail(&route);
    if crumbs.is_empty() {
        return rsx!( Fragment {} );
    }
    let last = crumbs.len() - 1;

    rsx! {
        nav { class: "breadcrumbs", aria_label: "breadcrumb",
            for (i, crumb) in crumbs.into_iter().enumerate() {
                if i > 0 {
                    span { class: "crumb-sep", "›" }
                }
                if i == last {
                    span { class: "crumb-current", "{crumb.label}" }
                } else {
                    Link { class: "crumb-link", to: crumb.to.clone(), "{crumb.label}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(route: Route) -> Vec<&'static str> {
        trail(&route).into_iter().map(|c| c.label).collect()
    }

    #[test]
    fn hidden_on_home() {
        assert!(trail(&Route::Home {}).is_empty());
    }

    #[test]
    fn section_pages_are_rooted_at_home() {
        assert_eq!(labels(Route::Reporting {}), ["Home", "Reporting"]);
        assert_eq!(labels(Route::Videos {}), ["Home", "Videos"]);
    }

    #[test]
    fn unknown_pages_link_back_home() {
        let crumbs = trail(&Route::PageNotFound {
            segments: vec!["nope".into()],
        });
        assert_eq!(crumbs.len(), 1);
        assert_eq!(crumbs[0].to, Route::Home {});
    }
}
