//! Confirmation dialog. Clicking the backdrop closes it; the panel swallows
//! clicks so form fields stay usable.

use leptos::prelude::*;

#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] title: String,
    children: ChildrenFn,
) -> impl IntoView {
    let title_id = format!("{}-title", title.to_lowercase().replace(' ', "-"));
    let children = StoredValue::new(children);

    view! {
        <Show when=move || open.get()>
            <div
                class="fixed inset-0 z-40 flex items-center justify-center bg-black/60 px-4"
                on:click=move |_| on_close.run(())
            >
                <div
                    class="w-full max-w-md rounded-lg bg-neutral-800 p-6 text-white shadow-xl"
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby=title_id.clone()
                    on:click=|event| event.stop_propagation()
                >
                    <h2 id=title_id.clone() class="text-lg font-bold">
                        {title.clone()}
                    </h2>
                    {children.with_value(|children| children())}
                </div>
            </div>
        </Show>
    }
}
