use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(PartialEq, Properties)]
pub struct Props {
    pub title: AttrValue,
}

/// Stand-in for pages the hosting application provides.
#[function_component(Unavailable)]
pub fn unavailable(props: &Props) -> Html {
    html! {
        <main class="flex flex-col items-center justify-center min-h-screen gap-4 p-4">
            <h2 class="text-2xl font-bold">{ props.title.clone() }</h2>
            <p class="text-sm text-gray-600">{ "This page is not part of the login form." }</p>
            <Link<Route> to={Route::Login} classes="text-sm font-semibold hover:underline">
                { "Back to login" }
            </Link<Route>>
        </main>
    }
}
