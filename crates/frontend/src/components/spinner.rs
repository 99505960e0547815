//! Loading spinner component

use yew::prelude::*;

/// Spinner component properties
#[derive(Properties, PartialEq)]
pub struct SpinnerProps {
    /// Optional text to display below the spinner
    #[prop_or_default]
    pub text: Option<String>,
}

/// Animated loading spinner
#[function_component(Spinner)]
pub fn spinner(props: &SpinnerProps) -> Html {
    html! {
        <div class="flex flex-col items-center justify-center py-12">
            <div class="h-10 w-10 animate-spin rounded-full border-4 border-indigo-200 border-t-indigo-600"></div>
            if let Some(text) = &props.text {
                <p class="mt-3 text-sm text-gray-500">{text}</p>
            }
        </div>
    }
}
