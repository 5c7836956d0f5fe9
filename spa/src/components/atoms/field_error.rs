use yew::prelude::*;

#[derive(PartialEq, Properties)]
pub struct Props {
    /// Id of the input the message belongs to.
    pub field_id: String,
    pub message: Option<String>,
}

#[function_component(FieldError)]
pub fn field_error(props: &Props) -> Html {
    match &props.message {
        Some(message) => html! {
            <p id={format!("{}-error", props.field_id)} class="text-sm font-medium text-red-500" role="alert">
                { message }
            </p>
        },
        None => html! {},
    }
}
