//! Modal form bound to the editor state. Inputs feed `FieldUpdate` messages
//! into the reducer and render the draft back, so a rejected age snaps the
//! input back to the last accepted value.

use crate::{
    app_lib::BrowserPrompts,
    components::{Alert, Button, ButtonVariant, Modal, Spinner},
    features::users::{EditorMode, EditorMsg, FieldUpdate, HttpUsersApi, UsersModel, store},
};
use leptos::{ev, prelude::*, task::spawn_local};

const INPUT_CLASS: &str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white dark:focus:ring-blue-500 dark:focus:border-blue-500";
const LABEL_CLASS: &str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";

#[component]
pub fn EditorModal(model: RwSignal<UsersModel>) -> impl IntoView {
    let is_open = Memo::new(move |_| model.with(|model| model.editor.is_open()));
    let mode = Memo::new(move |_| model.with(|model| model.editor.mode()));
    let is_submitting = Signal::derive(move || model.with(|model| model.editor.is_submitting()));
    let error = Memo::new(move |_| {
        model.with(|model| model.editor.error().map(ToString::to_string))
    });

    let title = Signal::derive(move || {
        match mode.get() {
            Some(EditorMode::Edit) => "Editar Usuario",
            _ => "Crear Usuario",
        }
        .to_string()
    });

    let send = move |msg: EditorMsg| {
        model.update(|model| {
            model.editor.apply(msg);
        });
    };
    let on_close = Callback::new(move |()| send(EditorMsg::Cancel));
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            store::dispatch(&HttpUsersApi, &model, &BrowserPrompts, EditorMsg::Submit).await;
        });
    };

    view! {
        <Show when=move || is_open.get()>
            <Modal title=title on_close=on_close>
                <form on:submit=on_submit class="p-6 space-y-4">
                    <div>
                        <label class=LABEL_CLASS for="user-nombre">"Nombre"</label>
                        <input
                            id="user-nombre"
                            type="text"
                            class=INPUT_CLASS
                            placeholder="Nombre"
                            prop:value=move || model.with(|model| model.editor.draft().nombre.clone())
                            prop:disabled=move || is_submitting.get()
                            on:input=move |ev| send(EditorMsg::Field(FieldUpdate::SetName(event_target_value(&ev))))
                        />
                    </div>

                    <div>
                        <label class=LABEL_CLASS for="user-email">"Email"</label>
                        <input
                            id="user-email"
                            type="email"
                            class=INPUT_CLASS
                            placeholder="Email"
                            prop:value=move || model.with(|model| model.editor.draft().email.clone())
                            prop:disabled=move || is_submitting.get()
                            on:input=move |ev| send(EditorMsg::Field(FieldUpdate::SetEmail(event_target_value(&ev))))
                        />
                    </div>

                    <div>
                        <label class=LABEL_CLASS for="user-edad">"Edad"</label>
                        <input
                            id="user-edad"
                            type="number"
                            class=INPUT_CLASS
                            placeholder="Edad"
                            prop:value=move || model.with(|model| model.editor.draft().edad.clone())
                            prop:disabled=move || is_submitting.get()
                            on:input=move |ev| send(EditorMsg::Field(FieldUpdate::SetAge(event_target_value(&ev))))
                        />
                        <Show when=move || error.with(Option::is_some)>
                            <Alert message=Signal::derive(move || error.get().unwrap_or_default()) />
                        </Show>
                    </div>

                    <div class="pt-4 flex flex-col-reverse sm:flex-row gap-3 sm:justify-end">
                        <Button
                            variant=ButtonVariant::Secondary
                            disabled=is_submitting
                            on_click=move |_: ev::MouseEvent| send(EditorMsg::Cancel)
                        >
                            "Cerrar"
                        </Button>
                        <Button button_type="submit" disabled=is_submitting>
                            <Show when=move || is_submitting.get()>
                                <Spinner />
                            </Show>
                            {move || match mode.get() {
                                Some(EditorMode::Edit) => "Guardar Cambios",
                                _ => "Crear",
                            }}
                        </Button>
                    </div>
                </form>
            </Modal>
        </Show>
    }
}
