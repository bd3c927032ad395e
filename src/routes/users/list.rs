//! Users page: the record table with per-row Edit/Delete actions, the Add
//! action and the modal editor. The list is fetched once on mount and after
//! every successful mutation.

use super::editor::EditorModal;
use crate::{
    app_lib::BrowserPrompts,
    components::{AppShell, Button, ButtonVariant},
    features::users::{EditorMsg, HttpUsersApi, UserRecord, UsersModel, store},
};
use leptos::{ev, prelude::*, task::spawn_local};

/// Renders the users table and owns the page state.
#[component]
pub fn UsersPage() -> impl IntoView {
    let model = RwSignal::new(UsersModel::default());

    spawn_local(async move {
        let _ = store::refresh(&HttpUsersApi, &model).await;
    });

    let users = Memo::new(move |_| model.with(|model| model.users.clone()));
    let open_create = move |_: ev::MouseEvent| {
        model.update(|model| {
            model.editor.apply(EditorMsg::OpenCreate);
        });
    };

    view! {
        <AppShell>
            <div class="space-y-6">
                <div class="flex items-center justify-between">
                    <h2 class="text-xl font-semibold text-gray-900 dark:text-white">"Usuarios"</h2>
                    <Button variant=ButtonVariant::Success on_click=open_create>
                        "+"
                    </Button>
                </div>

                <div class="overflow-hidden bg-white dark:bg-gray-800 shadow-sm border border-gray-200 dark:border-gray-700 rounded-lg">
                    <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                        <thead class="bg-gray-50 dark:bg-gray-900/50">
                            <tr>
                                <HeaderCell label="#" />
                                <HeaderCell label="Nombre" />
                                <HeaderCell label="Email" />
                                <HeaderCell label="Edad" />
                                <HeaderCell label="Acciones" />
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                            <Show
                                when=move || !users.with(Vec::is_empty)
                                fallback=|| view! {
                                    <tr>
                                        <td colspan="5" class="px-6 py-12 text-center text-sm text-gray-500 dark:text-gray-400">
                                            "No hay usuarios."
                                        </td>
                                    </tr>
                                }
                            >
                                <For
                                    each=move || users.get()
                                    key=|user| user.clone()
                                    children=move |user| view! { <UserRow user=user model=model /> }
                                />
                            </Show>
                        </tbody>
                    </table>
                </div>
            </div>

            <EditorModal model=model />
        </AppShell>
    }
}

#[component]
fn HeaderCell(label: &'static str) -> impl IntoView {
    view! {
        <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
            {label}
        </th>
    }
}

/// One table row. Rows are keyed by their full contents so an edited record
/// re-renders.
#[component]
fn UserRow(user: UserRecord, model: RwSignal<UsersModel>) -> impl IntoView {
    let id_text = user.id.as_ref().map(ToString::to_string).unwrap_or_default();
    let id = user.id.clone();
    let record = user.clone();

    let on_edit = move |_: ev::MouseEvent| {
        let record = record.clone();
        model.update(|model| {
            model.editor.apply(EditorMsg::OpenEdit(record));
        });
    };
    let on_delete = move |_: ev::MouseEvent| {
        let Some(id) = id.clone() else {
            tracing::warn!("delete requested for a record without id");
            return;
        };
        spawn_local(async move {
            store::remove(&HttpUsersApi, &model, &BrowserPrompts, &id).await;
        });
    };

    view! {
        <tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors">
            <td class="px-6 py-4 whitespace-nowrap text-sm font-mono text-gray-500 dark:text-gray-400">
                {id_text}
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900 dark:text-white">
                {user.nombre}
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500 dark:text-gray-400">
                {user.email}
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500 dark:text-gray-400">
                {user.edad}
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm font-medium space-x-2">
                <Button on_click=on_edit>"Editar"</Button>
                <Button variant=ButtonVariant::Danger on_click=on_delete>"Eliminar"</Button>
            </td>
        </tr>
    }
}
