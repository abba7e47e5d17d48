use crate::components::SearchField;
use crate::query::QuerySink;
use leptos::callback::Callback;
use leptos::prelude::*;

/// Owns the course search query and hands it to the search field.
#[component]
pub fn CoursesPage() -> impl IntoView {
    let search_query = RwSignal::new(String::new());
    let set_search_query = Callback::new(move |next: String| {
        tracing::debug!(query = %next, "course search query changed");
        search_query.request(next);
    });

    view! {
        <main class="flex-grow flex flex-col items-center justify-start pt-8 p-4 text-black dark:text-white">
            <div class="w-full max-w-md">
                <h1 class="text-2xl font-bold mb-4 text-gray-800 dark:text-gray-200">"Courses"</h1>
                <SearchField search_query=search_query set_search_query=set_search_query />
            </div>
        </main>
    }
}
