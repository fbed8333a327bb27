use dioxus::prelude::*;

use crate::core::SubjectId;

#[component]
pub fn SubjectSelect(
    options: Vec<SubjectId>,
    selected: SubjectId,
    onchange: EventHandler<FormEvent>,
) -> Element {
    let disabled = options.is_empty();

    rsx! {
        div { class: "subject-select",
            label { class: "subject-select__label", r#for: "selDataset", "Test Subject ID No.:" }
            select {
                id: "selDataset",
                class: "subject-select__control",
                value: "{selected}",
                disabled,
                onchange: move |evt| onchange.call(evt),
                for id in options {
                    option { key: "{id}", value: "{id}", "{id}" }
                }
            }
        }
    }
}
