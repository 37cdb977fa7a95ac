use leptos::prelude::*;
use thaw::*;

/// Modal yes/no confirmation.
///
/// `open` is owned by the caller; dismissing the dialog by clicking outside
/// is reported through `on_cancel`.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: String,
    #[prop(into)] message: Signal<String>,
    /// The confirmed action is running; both buttons are disabled.
    #[prop(optional, into)]
    busy: Signal<bool>,
    #[prop(optional, into)] confirm_label: Option<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let confirm_label = confirm_label.unwrap_or_else(|| "Delete".to_string());
    let dialog_open = RwSignal::new(open.get_untracked());

    Effect::new(move |_| {
        dialog_open.set(open.get());
    });

    // Closed from inside the dialog while the caller still has it open.
    Effect::new(move |prev: Option<bool>| {
        let now = dialog_open.get();
        if prev == Some(true) && !now && open.get_untracked() {
            on_cancel.run(());
        }
        now
    });

    view! {
        <Dialog open=dialog_open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{title}</DialogTitle>
                    <DialogContent>
                        <p class="confirm-dialog__message">{move || message.get()}</p>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| on_cancel.run(())
                            disabled=busy
                        >
                            "Cancel"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| on_confirm.run(())
                            disabled=busy
                            attr:class="button--danger"
                        >
                            {move || if busy.get() { "Deleting...".to_string() } else { confirm_label.clone() }}
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
