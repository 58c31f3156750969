use leptos::{html, prelude::*};

#[server]
pub async fn submit_contact(
    name: String,
    email: String,
    phone: String,
    comments: String,
) -> Result<(), ServerFnError> {
    use crate::{
        config::SiteConfig,
        contact::{send, ContactMessage},
    };

    let message = ContactMessage::new(&name, &email, &phone, &comments);
    let config = use_context::<SiteConfig>().unwrap_or_default();
    send(&config, &message).await.map_err(|e| {
        tracing::warn!("contact message not sent: {e}");
        ServerFnError::new(e.to_string())
    })
}

fn outcome_message(result: &Result<(), ServerFnError>) -> String {
    match result {
        Ok(()) => "Thank you".to_string(),
        Err(ServerFnError::ServerError(message)) => message.clone(),
        Err(e) => e.to_string(),
    }
}

const INPUT_CLASS: &str =
    "w-full px-4 py-2 border-brutal border-foreground bg-background focus:outline-none focus:ring-2 focus:ring-primary";

#[component]
pub fn ContactForm() -> impl IntoView {
    let submit = ServerAction::<SubmitContact>::new();
    let form_ref = NodeRef::<html::Form>::new();

    Effect::new(move |_| {
        let Some(result) = submit.value().get() else {
            return;
        };
        if result.is_ok() {
            if let Some(form) = form_ref.get_untracked() {
                form.reset();
            }
        }
        let _ = window().alert_with_message(&outcome_message(&result));
    });

    view! {
        <ActionForm action=submit node_ref=form_ref>
            <div class="grid gap-4 max-w-xl">
                <label class="grid gap-1">
                    <span class="font-mono uppercase text-sm">"Name"</span>
                    <input id="name-input" type="text" name="name" required class=INPUT_CLASS />
                </label>
                <label class="grid gap-1">
                    <span class="font-mono uppercase text-sm">"Email"</span>
                    <input id="email-input" type="email" name="email" required class=INPUT_CLASS />
                </label>
                <label class="grid gap-1">
                    <span class="font-mono uppercase text-sm">"Phone"</span>
                    <input id="phone-input" type="tel" name="phone" class=INPUT_CLASS />
                </label>
                <label class="grid gap-1">
                    <span class="font-mono uppercase text-sm">"Comments"</span>
                    <textarea id="comments-input" name="comments" rows="4" class=INPUT_CLASS />
                </label>
                <button
                    type="submit"
                    class="submit-button btn-brutal uppercase tracking-wide w-fit"
                    disabled=move || submit.pending().get()
                >
                    "Send"
                </button>
            </div>
        </ActionForm>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_messages() {
        assert_eq!(outcome_message(&Ok(())), "Thank you");
        let err = Err(ServerFnError::ServerError("email is required".to_string()));
        assert_eq!(outcome_message(&err), "email is required");
    }
}
