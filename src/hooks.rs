use gloo_timers::callback::Timeout;
use std::fmt::Display;
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::DEBOUNCE_MS;

/// Holds the state and callbacks for a validated input field.
#[derive(Clone)]
pub struct ValidatedInput<T: Clone + PartialEq + 'static> {
    /// The current text content of the input field.
    pub text: String,
    /// The last value that parsed and validated successfully.
    pub value: T,
    /// An optional error message if validation failed.
    pub error: Option<String>,
    /// Callback for the text input's `oninput` event. Updates the text and
    /// schedules a debounced validation of it.
    pub on_text_input: Callback<InputEvent>,
    /// Callback for the `onchange` event. Validates immediately and rewrites
    /// the text in canonical form on success.
    pub on_commit: Callback<Event>,
}

/// Custom hook to manage state for a validated input field.
///
/// Typing validates after [`DEBOUNCE_MS`] of inactivity; leaving the field or
/// pressing Enter validates at once. On failure the previous value is kept
/// and `error` is set.
#[hook]
pub fn use_validated_input<T>(
    initial_value: T,
    parse_and_validate: Rc<dyn Fn(&str) -> Result<T, String>>,
) -> ValidatedInput<T>
where
    T: Clone + PartialEq + Display + 'static,
{
    let value_handle = use_state(|| initial_value.clone());
    let text_handle = use_state(|| initial_value.to_string());
    let error_handle = use_state(|| None::<String>);
    // Dropping a Timeout cancels it, so replacing this slot debounces.
    let pending = use_mut_ref(|| None::<Timeout>);

    let commit: Rc<dyn Fn(String, bool)> = {
        let value_setter = value_handle.setter();
        let text_setter = text_handle.setter();
        let error_setter = error_handle.setter();
        Rc::new(move |raw: String, canonicalize: bool| match parse_and_validate(&raw) {
            Ok(parsed) => {
                if canonicalize {
                    text_setter.set(parsed.to_string());
                }
                value_setter.set(parsed);
                error_setter.set(None);
            }
            Err(msg) => error_setter.set(Some(msg)),
        })
    };

    let on_text_input = {
        let text_setter = text_handle.setter();
        let pending = pending.clone();
        let commit = commit.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let raw = input.value();
            text_setter.set(raw.clone());

            let commit = commit.clone();
            *pending.borrow_mut() = Some(Timeout::new(DEBOUNCE_MS, move || commit(raw, false)));
        })
    };

    let on_commit = {
        let pending = pending.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            pending.borrow_mut().take();
            commit(input.value(), true);
        })
    };

    ValidatedInput {
        text: (*text_handle).clone(),
        value: (*value_handle).clone(),
        error: (*error_handle).clone(),
        on_text_input,
        on_commit,
    }
}
