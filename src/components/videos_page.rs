use dioxus::prelude::*;

struct VideoCard {
    title: &'static str,
    description: &'static str,
    duration: &'static str,
}

const VIDEOS: [VideoCard; 3] = [
    VideoCard {
        title: "Getting Started with Random Corp",
        description: "Learn the basics of using our submission system",
        duration: "5:32",
    },
    VideoCard {
        title: "Advanced Reporting Features",
        description: "Discover powerful reporting and analytics capabilities",
        duration: "8:15",
    },
    VideoCard {
        title: "Best Practices Guide",
        description: "Tips and tricks for optimal system usage",
        duration: "6:45",
    },
];

#[allow(non_snake_case)]
#[component]
pub fn Videos() -> Element {
    rsx! {
        div { class: "container-wide",
            h1 { class: "page-title", "🎥 Video Library" }
            p { class: "muted",
                "Explore our collection of tutorial and educational videos to help you make the most of Random Corp."
            }
            div { class: "video-grid",
                for (i, video) in VIDEOS.iter().enumerate() {
                    div { key: "{i}", class: "video-card",
                        div { class: "video-thumb video-thumb-{i}",
                            span { class: "play", "▶" }
                            span { class: "duration", "{video.duration}" }
                        }
                        div { class: "video-body",
                            h3 { "{video.title}" }
                            p { class: "muted small", "{video.description}" }
                        }
                    }
                }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div { class: "container",
            div { class: "panel",
                h1 { "Page not found" }
                p { class: "muted", "Nothing lives at /{path}." }
                Link { class: "btn btn-primary", to: crate::app::Route::Home {}, "Back to home" }
            }
        }
    }
}
