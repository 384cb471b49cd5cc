// Fallback for every route other than the landing page
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <section class="page-header">
            <div class="container">
                <h1 class="page-title">"Página não encontrada"</h1>
                <p class="page-description">
                    <A href="/">"Voltar para o início"</A>
                </p>
            </div>
        </section>
    }
}
