use crate::query::forward_change;
use leptos::callback::Callback;
use leptos::prelude::*;

pub const SEARCH_INPUT_ID: &str = "Search";
pub const SEARCH_PLACEHOLDER: &str = "Search for...";
pub const SEARCH_LABEL: &str = "Search";

/// Magnifying glass (heroicons outline, 24x24).
pub const SEARCH_ICON_PATH: &str =
    "M21 21l-5.197-5.197m0 0A7.5 7.5 0 105.196 5.196a7.5 7.5 0 0010.607 10.607z";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelView {
    pub for_id: &'static str,
    pub text: &'static str,
    pub class: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputView {
    pub id: &'static str,
    pub input_type: &'static str,
    pub placeholder: &'static str,
    pub value: String,
    pub class: &'static str,
}

/// What activating the button does. There is no submit handler, so the only
/// variant is `Inert`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonAction {
    Inert,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconView {
    pub view_box: &'static str,
    pub stroke_width: &'static str,
    pub path: &'static str,
    pub class: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonView {
    pub button_type: &'static str,
    pub label: &'static str,
    pub action: ButtonAction,
    pub icon: IconView,
    pub class: &'static str,
}

/// Everything the search field puts on screen, as plain data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchFieldView {
    pub label: LabelView,
    pub input: InputView,
    pub button: ButtonView,
}

impl SearchFieldView {
    /// Builds the view for the given query. Pure: the same query always
    /// yields an equal view and nothing is stored between calls.
    pub fn render(search_query: &str) -> Self {
        Self {
            label: LabelView {
                for_id: SEARCH_INPUT_ID,
                text: SEARCH_LABEL,
                class: "sr-only px-1",
            },
            input: InputView {
                id: SEARCH_INPUT_ID,
                input_type: "text",
                placeholder: SEARCH_PLACEHOLDER,
                value: search_query.to_string(),
                class: "w-full rounded-md border border-gray-200 py-2 px-1 pe-10 shadow-sm sm:text-sm",
            },
            button: ButtonView {
                button_type: "button",
                label: SEARCH_LABEL,
                action: ButtonAction::Inert,
                icon: IconView {
                    view_box: "0 0 24 24",
                    stroke_width: "1.5",
                    path: SEARCH_ICON_PATH,
                    class: "h-4 w-4",
                },
                class: "text-gray-600 hover:text-gray-700",
            },
        }
    }
}

/// Controlled search input with a decorative search button.
///
/// The displayed text is always `search_query`; every input event hands the
/// full new text to `set_search_query`. The field keeps no copy of its own.
#[component]
pub fn SearchField(
    #[prop(into)] search_query: Signal<String>,
    #[prop(into)] set_search_query: Callback<String>,
) -> impl IntoView {
    let field = Memo::new(move |_| SearchFieldView::render(&search_query.read()));
    let SearchFieldView {
        label,
        input,
        button,
    } = field.get_untracked();

    view! {
        <div>
            <div class="relative">
                <label for=label.for_id class=label.class>
                    {label.text}
                </label>

                <input
                    type=input.input_type
                    id=input.id
                    placeholder=input.placeholder
                    class=input.class
                    value=move || field.read().input.value.clone()
                    prop:value=move || field.read().input.value.clone()
                    on:input=move |ev| forward_change(event_target_value(&ev), &set_search_query)
                />

                <span class="absolute inset-y-0 end-0 grid w-10 place-content-center">
                    <button type=button.button_type class=button.class>
                        <span class="sr-only px-1">{button.label}</span>
                        <SearchIcon icon=button.icon />
                    </button>
                </span>
            </div>
        </div>
    }
}

#[component]
pub fn SearchIcon(icon: IconView) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            fill="none"
            viewBox=icon.view_box
            stroke-width=icon.stroke_width
            stroke="currentColor"
            class=icon.class
        >
            <path stroke-linecap="round" stroke-linejoin="round" d=icon.path />
        </svg>
    }
}
