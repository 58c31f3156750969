use std::time::Duration;

use leptos::{prelude::*, server_fn::codec::GetUrl};

use crate::gallery::{entry, GalleryItem, GALLERY};

#[server(input = GetUrl)]
pub async fn get_gallery_item(id: String) -> Result<GalleryItem, ServerFnError> {
    crate::gallery::get_item(&id).map_err(|e| {
        tracing::warn!("{e}");
        ServerFnError::new(e.to_string())
    })
}

#[component]
pub fn Gallery() -> impl IntoView {
    let (selected, set_selected) = signal(None::<&'static str>);
    let (modal_hidden, set_modal_hidden) = signal(true);
    let (modal_open, set_modal_open) = signal(false);

    let item = Resource::new(
        move || selected.get(),
        |id| async move {
            match id {
                Some(id) => get_gallery_item(id.to_string()).await.map(Some),
                None => Ok(None),
            }
        },
    );

    let open = move |id: &'static str| {
        if entry(id).is_none() {
            return;
        }
        set_selected.set(Some(id));
        set_modal_hidden.set(false);
        // next tick, so the unhidden modal can transition in
        set_timeout(move || set_modal_open.set(true), Duration::ZERO);
    };
    let close = move |_| {
        set_modal_hidden.set(true);
        set_modal_open.set(false);
    };
    let title = move || selected.get().and_then(entry).map(|e| e.title);

    view! {
        <div class="gallery">
            <ul class="grid sm:grid-cols-2 gap-6">
                {GALLERY
                    .iter()
                    .map(|e| {
                        view! {
                            <li class="gallery-item" data-item=e.id>
                                <button
                                    type="button"
                                    class="w-full border-brutal border-foreground shadow-brutal hover:shadow-brutal-hover transition-all"
                                    on:click=move |_| open(e.id)
                                >
                                    <img src=e.image_url alt=e.title class="w-full aspect-video object-cover" />
                                    <span class="block p-3 font-mono uppercase">{e.title}</span>
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <div
                class=move || if modal_open.get() { "modal open" } else { "modal" }
                hidden=move || modal_hidden.get()
                role="dialog"
                aria-modal="true"
                aria-labelledby="gallery-modal-title"
            >
                <div class="modal-header flex items-center justify-between">
                    <h3 id="gallery-modal-title" class="modal-title text-2xl font-bold">
                        {title}
                    </h3>
                    <button type="button" class="modal-close-btn text-2xl" aria-label="Close" on:click=close>
                        "×"
                    </button>
                </div>
                <Transition fallback=|| view! { <p class="font-mono">"Loading..."</p> }>
                    {move || Suspend::new(async move {
                        match item.await {
                            Ok(Some(item)) => Some(view! {
                                <div class="item-image">
                                    <img src=item.image_url alt=item.title />
                                </div>
                                <div class="item-description" inner_html=item.content />
                            }),
                            Ok(None) => None,
                            Err(e) => {
                                log::warn!("gallery item failed to load: {e}");
                                None
                            }
                        }
                    })}
                </Transition>
            </div>
        </div>
    }
}
