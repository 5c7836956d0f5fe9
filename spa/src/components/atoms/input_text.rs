use shared::PasswordVisibility;
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, HtmlInputElement};
use yew::prelude::*;

#[derive(PartialEq, Default, Copy, Clone, Debug)]
pub enum InputType {
    #[default]
    Text,
    Password,
    Email,
}

impl InputType {
    fn as_type(&self) -> AttrValue {
        match self {
            Self::Text => "text".into(),
            Self::Password => "password".into(),
            Self::Email => "email".into(),
        }
    }
}

impl From<PasswordVisibility> for InputType {
    fn from(value: PasswordVisibility) -> Self {
        match value {
            PasswordVisibility::Masked => Self::Password,
            PasswordVisibility::Plain => Self::Text,
        }
    }
}

#[derive(PartialEq, Properties, Default, Debug)]
pub struct Props {
    pub id: String,
    pub name: String,
    pub value: String,
    #[prop_or_default]
    pub class: Classes,
    pub input_type: InputType,
    pub placeholder: String,
    #[prop_or_default]
    pub invalid: bool,
    #[prop_or_default]
    pub disabled: bool,
    pub on_input: Callback<String>,
    #[prop_or_default]
    pub on_blur: Callback<()>,
}

#[function_component(InputText)]
pub fn input_text(props: &Props) -> Html {
    let on_input = {
        let callback = props.on_input.clone();
        Callback::from(move |event: InputEvent| {
            let target: EventTarget = event.target().expect("Fail to cast to EventTarget");
            let value: String = target.unchecked_into::<HtmlInputElement>().value();
            callback.emit(value);
        })
    };
    let on_blur = {
        let callback = props.on_blur.clone();
        Callback::from(move |_: FocusEvent| callback.emit(()))
    };
    let aria_invalid = if props.invalid { "true" } else { "false" };
    html! {
        <input
            id={props.id.clone()}
            name={props.name.clone()}
            value={props.value.clone()}
            type={props.input_type.as_type()}
            placeholder={props.placeholder.clone()}
            class={props.class.clone()}
            aria-invalid={aria_invalid}
            aria-describedby={format!("{}-error", props.id)}
            disabled={props.disabled}
            oninput={on_input}
            onblur={on_blur} />
    }
}
