use std::rc::Rc;

use shared::{FieldName, FormAction, FormOptions, FormState, LoginFormValues, PasswordVisibility};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::atoms::{
    eye_icon::EyeIcon,
    field_error::FieldError,
    input_text::{InputText, InputType},
};
use crate::router::Route;

const INPUT_CLASSES: &str =
    "flex h-9 w-full rounded-md border bg-transparent px-3 py-1 shadow-sm text-sm disabled:opacity-50";

/// Reducer state of the form: the controller plus the payload of a
/// successful submit, kept so the callback fires from an effect.
#[derive(Debug, Clone, PartialEq)]
struct FormStore {
    form: FormState,
    submitted: Option<LoginFormValues>,
}

impl Reducible for FormStore {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if let Some(values) = next.form.apply(action) {
            next.submitted = Some(values);
        }
        Rc::new(next)
    }
}

#[derive(PartialEq, Properties)]
pub struct Props {
    pub on_login: Callback<LoginFormValues>,
    #[prop_or_default]
    pub options: FormOptions,
}

#[function_component(LoginForm)]
pub fn login_form(props: &Props) -> Html {
    let store = {
        let options = props.options;
        use_reducer(move || FormStore {
            form: FormState::new(options),
            submitted: None,
        })
    };
    let visibility = use_state(PasswordVisibility::default);

    {
        let on_login = props.on_login.clone();
        use_effect_with(store.submitted.clone(), move |submitted| {
            if let Some(values) = submitted {
                on_login.emit(values.clone());
            }
            || ()
        });
    }

    let on_change = |field: FieldName| {
        let store = store.clone();
        Callback::from(move |value: String| store.dispatch(FormAction::Change { field, value }))
    };
    let on_blur = |field: FieldName| {
        let store = store.clone();
        Callback::from(move |_: ()| store.dispatch(FormAction::Blur(field)))
    };

    let on_submit = {
        let store = store.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            store.dispatch(FormAction::Submit);
        })
    };

    let on_toggle_visibility = {
        let visibility = visibility.clone();
        Callback::from(move |_: MouseEvent| visibility.set(visibility.toggled()))
    };

    let form = &store.form;
    let locked = form.is_submitted();
    let email = form.field(FieldName::Email);
    let password = form.field(FieldName::Password);
    let label_class = |field: FieldName| {
        if form.error(field).is_some() {
            classes!("block", "text-sm", "font-medium", "text-red-500")
        } else {
            classes!("block", "text-sm", "font-medium")
        }
    };

    html! {
        <div class="flex items-center justify-center min-h-screen px-4 bg-gray-100 dark:bg-neutral-950">
            <div class="w-full max-w-sm sm:max-w-md md:max-w-lg p-6 sm:p-8 bg-white dark:bg-neutral-900 rounded-xl shadow-lg space-y-6">
                <h2 class="text-2xl sm:text-3xl font-bold text-center">{ "Login" }</h2>
                <form class="space-y-5" onsubmit={on_submit} novalidate={true}>
                    <div class="space-y-2">
                        <label class={label_class(FieldName::Email)} for={FieldName::Email.to_string()}>{ "Email" }</label>
                        <InputText
                            id={FieldName::Email.to_string()}
                            name={FieldName::Email.to_string()}
                            value={email.value.clone()}
                            placeholder="you@example.com"
                            class={classes!(INPUT_CLASSES)}
                            input_type={InputType::Email}
                            invalid={email.error.is_some()}
                            disabled={locked}
                            on_input={on_change(FieldName::Email)}
                            on_blur={on_blur(FieldName::Email)} />
                        <FieldError field_id={FieldName::Email.to_string()} message={email.error.clone()} />
                    </div>
                    <div class="space-y-2">
                        <label class={label_class(FieldName::Password)} for={FieldName::Password.to_string()}>{ "Password" }</label>
                        <div class="relative">
                            <InputText
                                id={FieldName::Password.to_string()}
                                name={FieldName::Password.to_string()}
                                value={password.value.clone()}
                                placeholder="••••••••"
                                class={classes!(INPUT_CLASSES, "pr-10")}
                                input_type={InputType::from(*visibility)}
                                invalid={password.error.is_some()}
                                disabled={locked}
                                on_input={on_change(FieldName::Password)}
                                on_blur={on_blur(FieldName::Password)} />
                            <button
                                type="button"
                                class="absolute inset-y-0 right-3 flex items-center text-gray-500 hover:text-gray-700 dark:text-gray-400 cursor-pointer"
                                aria-label={visibility.toggle_label()}
                                aria-pressed={visibility.is_plain().to_string()}
                                onclick={on_toggle_visibility}>
                                <EyeIcon crossed={visibility.is_plain()} />
                            </button>
                        </div>
                        <FieldError field_id={FieldName::Password.to_string()} message={password.error.clone()} />
                    </div>
                    <div class="text-sm text-left">
                        <Link<Route> to={Route::ForgotPassword} classes="text-gray-600 hover:font-semibold hover:underline hover:text-gray-900 dark:hover:text-white transition-colors">
                            { "Forgot password?" }
                        </Link<Route>>
                    </div>
                    <button class="w-full h-9 rounded-md bg-neutral-900 text-white text-sm sm:text-base cursor-pointer disabled:opacity-50" type="submit" disabled={locked}>
                        { "Login" }
                    </button>
                </form>
                <div class="text-center">
                    <p class="text-sm">
                        { "Don’t have an account? " }
                        <Link<Route> to={Route::Register} classes="inline-block text-sm font-semibold text-black hover:underline dark:text-white">
                            { "Go to Register" }
                        </Link<Route>>
                    </p>
                </div>
            </div>
        </div>
    }
}
