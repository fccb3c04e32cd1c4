//! One editable url row

use leptos::ev::Event;
use leptos::prelude::*;
use shared::{Field, RowId, UrlForm};

use super::shortener::{add_row, remove_row};
use crate::logger::Logger;

#[component]
pub fn UrlRow(id: RowId, form: RwSignal<UrlForm>, logger: Logger) -> impl IntoView {
    let value = move |field: Field| {
        form.with(|f| f.entry(id).map(|e| e.get(field).to_string()).unwrap_or_default())
    };
    let error = move || form.with(|f| f.entry(id).and_then(|e| e.error.clone()));
    let edit = move |field: Field| {
        move |ev: Event| form.update(|f| f.set_field(id, field, event_target_value(&ev)))
    };

    view! {
        <div class="url-row" class:invalid=move || error().is_some()>
            <div class="field grow">
                <label for=input_id(id, Field::LongUrl)>"Long URL"</label>
                <input
                    id=input_id(id, Field::LongUrl)
                    type="text"
                    aria-describedby=error_id(id)
                    aria-invalid=move || if error().is_some() { "true" } else { "false" }
                    required=true
                    placeholder="https://example.com/very/long/url"
                    prop:value=move || value(Field::LongUrl)
                    on:input=edit(Field::LongUrl)
                />
                {move || error().map(|e| view! {
                    <div id=error_id(id) class="helper-text">{e.to_string()}</div>
                })}
            </div>

            <div class="field">
                <label for=input_id(id, Field::Validity)>"Validity (min)"</label>
                <input
                    id=input_id(id, Field::Validity)
                    type="number"
                    min="1"
                    prop:value=move || value(Field::Validity)
                    on:input=edit(Field::Validity)
                />
            </div>

            <div class="field">
                <label for=input_id(id, Field::Shortcode)>"Custom Shortcode"</label>
                <input
                    id=input_id(id, Field::Shortcode)
                    type="text"
                    placeholder="optional"
                    prop:value=move || value(Field::Shortcode)
                    on:input=edit(Field::Shortcode)
                />
            </div>

            <div class="row-actions">
                <button
                    type="button"
                    class="icon"
                    title="Add URL"
                    disabled=move || !form.with(|f| f.can_add())
                    on:click=move |_| add_row(form, logger)
                >
                    "＋"
                </button>
                <button
                    type="button"
                    class="icon danger"
                    title="Remove URL"
                    disabled=move || !form.with(|f| f.can_remove())
                    on:click=move |_| remove_row(form, logger, id)
                >
                    "－"
                </button>
            </div>
        </div>
    }
}

/// dom id tying a row's label to its input
fn input_id(id: RowId, field: Field) -> String {
    let name = match field {
        Field::LongUrl => "long-url",
        Field::Validity => "validity",
        Field::Shortcode => "shortcode",
    };
    format!("row-{}-{}", id, name)
}

fn error_id(id: RowId) -> String {
    format!("row-{}-error", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_ids_unique_per_row_and_field() {
        assert_eq!(input_id(3, Field::LongUrl), "row-3-long-url");
        assert_ne!(input_id(3, Field::Validity), input_id(4, Field::Validity));
        assert_ne!(input_id(3, Field::Validity), input_id(3, Field::Shortcode));
        assert_eq!(error_id(3), "row-3-error");
    }
}
