use leptos::prelude::*;
use leptos::tachys::dom::event_target_checked;
use leptos_darkmode::Darkmode;

#[component]
pub fn Header() -> impl IntoView {
    let mut darkmode = use_context::<Darkmode>();

    view! {
        <header class="sticky top-0 z-40 w-full border-b border-slate-200 dark:border-slate-800 bg-white/90 dark:bg-slate-900/90 backdrop-blur">
            <div class="max-w-5xl mx-auto flex items-center justify-between px-4 py-3">
                <a
                    href="/"
                    class="text-lg font-semibold text-slate-900 dark:text-slate-100 hover:underline"
                >
                    "Courses"
                </a>
                <label class="flex items-center gap-2 cursor-pointer text-sm text-slate-700 dark:text-slate-200">
                    <span>"Dark Mode"</span>
                    <input
                        type="checkbox"
                        class="toggle toggle-primary"
                        prop:checked={
                            let darkmode = darkmode.clone();
                            move || darkmode.clone().map(|v| v.get()).unwrap_or_default()
                        }
                        on:change=move |ev| {
                            let val = event_target_checked(&ev);
                            if let Some(darkmode) = darkmode.as_mut() {
                                darkmode.set(val);
                            }
                        }
                    />
                </label>
            </div>
        </header>
    }
}
