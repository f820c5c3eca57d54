use dioxus::prelude::*;
use zoink_client::{FeedStatus, Field, Location, Post, PostBoard, PostStore};

mod client;

use client::GlooStore;

const SUPABASE_URL: &str = "http://127.0.0.1:54321";
const SUPABASE_KEY: &str = "public-anon-key";

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Navbar)]
        #[route("/")]
        Feed {},
        #[route("/create")]
        Create {},
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Feed() -> Element {
    let mut board = use_signal(PostBoard::new);

    use_future(move || async move {
        let store = GlooStore::new(SUPABASE_URL, SUPABASE_KEY);
        board.write().begin_load();
        let result = store.list().await;
        board.write().finish_load(result);
    });

    let state = board.read();
    rsx! {
        div { class: "max-w-4xl mx-auto px-6 py-12",
            h1 { class: "text-3xl font-bold text-gray-900 mb-8", "All posts" }

            match &state.feed {
                FeedStatus::Loading => rsx! {
                    p { class: "text-center text-gray-500", "Loading posts..." }
                },
                FeedStatus::Failed(message) => rsx! {
                    p { class: "text-center text-red-600", "Could not load posts: {message}" }
                },
                FeedStatus::Loaded if state.posts.is_empty() => rsx! {
                    p { class: "text-center text-gray-500", "No posts yet." }
                },
                FeedStatus::Loaded => rsx! {
                    div { class: "space-y-6",
                        for post in state.posts.iter() {
                            PostCard { post: post.clone() }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn PostCard(post: Post) -> Element {
    let body = post.body.clone().unwrap_or_default();
    let stamp = post.created_at.format("%Y-%m-%d %H:%M").to_string();
    let location = post.location.map(|l| l.label()).unwrap_or_default();

    rsx! {
        article { class: "bg-white rounded-xl shadow p-6",
            h2 { class: "text-xl font-semibold text-gray-900", "{post.title}" }
            if !body.is_empty() {
                p { class: "text-gray-700 mt-2 whitespace-pre-wrap", "{body}" }
            }
            div { class: "text-sm text-gray-500 mt-4",
                if !location.is_empty() {
                    span { class: "mr-3", "{location}" }
                }
                span { "{stamp}" }
            }
        }
    }
}

#[component]
fn Create() -> Element {
    let navigator = use_navigator();
    let mut board = use_signal(PostBoard::new);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let record = board.write().begin_submit();
            let Some(record) = record else { return };
            let store = GlooStore::new(SUPABASE_URL, SUPABASE_KEY);
            let result = store.create(&record).await;
            if board.write().finish_submit(result) {
                navigator.push(Route::Feed {});
            }
        });
    };

    let state = board.read();
    let title_error = state.errors.title.clone().unwrap_or_default();
    let body_error = state.errors.body.clone().unwrap_or_default();
    let location_error = state.errors.location.clone().unwrap_or_default();
    let submit_error = state.submit_error.clone().unwrap_or_default();
    let submit_label = if state.submitting { "Posting..." } else { "Post" };

    rsx! {
        div { class: "max-w-3xl mx-auto px-6 py-12",
            div { class: "bg-white rounded-xl shadow p-8",
                h1 { class: "text-2xl font-semibold text-gray-900 mb-6 pb-4 border-b border-gray-200",
                    "Create a post"
                }

                if !submit_error.is_empty() {
                    p { class: "mb-4 text-red-600", "Error creating post: {submit_error}" }
                }

                form { onsubmit: on_submit,
                    div { class: "space-y-4",
                        div {
                            input {
                                r#type: "text",
                                placeholder: "Title",
                                value: "{state.draft.title}",
                                oninput: move |evt| board.write().set_field(Field::Title, evt.value()),
                                class: "w-full px-4 py-3 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-indigo-500 text-black",
                            }
                            if !title_error.is_empty() {
                                p { class: "mt-1 text-sm text-red-600", "{title_error}" }
                            }
                        }

                        div {
                            select {
                                value: "{state.draft.location}",
                                oninput: move |evt| board.write().set_field(Field::Location, evt.value()),
                                class: "w-full px-4 py-3 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-indigo-500 text-black",
                                option { value: "", "Select a location (optional)" }
                                for location in Location::ALL {
                                    option { value: "{location}", "{location.label()}" }
                                }
                            }
                            if !location_error.is_empty() {
                                p { class: "mt-1 text-sm text-red-600", "{location_error}" }
                            }
                        }

                        div {
                            textarea {
                                placeholder: "Text (optional)",
                                value: "{state.draft.body}",
                                oninput: move |evt| board.write().set_field(Field::Body, evt.value()),
                                class: "w-full px-4 py-3 h-48 border border-gray-300 rounded-lg resize-none focus:outline-none focus:ring-2 focus:ring-indigo-500 text-black",
                            }
                            if !body_error.is_empty() {
                                p { class: "mt-1 text-sm text-red-600", "{body_error}" }
                            }
                        }

                        div { class: "flex justify-end gap-3 pt-4",
                            Link {
                                to: Route::Feed {},
                                class: "px-6 py-3 border border-gray-300 text-gray-700 rounded-lg hover:bg-gray-50 transition",
                                "Cancel"
                            }
                            button {
                                r#type: "submit",
                                disabled: state.submitting || state.draft.title.trim().is_empty(),
                                class: "px-8 py-3 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700 transition disabled:opacity-50 disabled:cursor-not-allowed",
                                "{submit_label}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Navbar() -> Element {
    rsx! {
        nav { class: "bg-white/90 backdrop-blur border-b border-gray-200 sticky top-0 z-50 shadow-sm",
            div { class: "max-w-4xl mx-auto px-6 py-3 flex items-center space-x-6",
                Link { to: Route::Feed {}, class: "text-xl font-bold text-indigo-600 hover:text-indigo-700 transition", "Zoink" }
                Link { to: Route::Create {}, class: "text-gray-700 hover:text-indigo-600 font-medium transition", "Create" }
            }
        }
        Outlet::<Route> {}
    }
}
