//! Full-access user administration: change access levels, remove users.

use leptos::prelude::*;
use records::{AccessLevel, UserSummary};

use crate::components::dialog::{Confirm, Dialog};
use crate::components::status_message::{Status, StatusMessage};
use crate::net::api;
use crate::util::filter::filter_items;

#[component]
pub fn ManageUsersModal(on_close: Callback<()>) -> impl IntoView {
    let users = RwSignal::new(Vec::<UserSummary>::new());
    let search = RwSignal::new(String::new());
    let reload = RwSignal::new(0_u32);
    let deleting = RwSignal::new(None::<i32>);
    let status = RwSignal::new(None::<Status>);

    Effect::new(move || {
        reload.track();
        leptos::task::spawn_local(async move {
            match api::fetch_users().await {
                Ok(rows) => users.set(rows),
                Err(_) => status.set(Some(Status::Error("Failed to load users".to_owned()))),
            }
        });
    });

    let change_access = move |user_id: i32, raw: String| {
        let Ok(level) = AccessLevel::parse(&raw) else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = api::update_access(user_id, level).await;
            if result.is_ok() {
                reload.update(|n| *n += 1);
            }
            status.set(Some(Status::from_result(result, "Failed to update access")));
        });
    };

    let confirm_delete = Callback::new(move |()| {
        let Some(id) = deleting.get_untracked() else {
            return;
        };
        deleting.set(None);
        leptos::task::spawn_local(async move {
            let result = api::delete_user(id).await;
            if result.is_ok() {
                reload.update(|n| *n += 1);
            }
            status.set(Some(Status::from_result(result, "Failed to delete user")));
        });
    });

    let rows = move || {
        filter_items(&users.get(), &search.get(), |u: &UserSummary| u.username.clone())
            .into_iter()
            .map(|user| {
                let id = user.id;
                let current = user.access;
                view! {
                    <tr>
                        <td>{user.username}</td>
                        <td>
                            <select
                                class="dialog__input"
                                prop:value=current.as_str()
                                on:change=move |ev| change_access(id, event_target_value(&ev))
                            >
                                {AccessLevel::ALL
                                    .into_iter()
                                    .map(|level| {
                                        view! {
                                            <option value=level.as_str() selected={level == current}>
                                                {level.as_str()}
                                            </option>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </select>
                        </td>
                        <td>
                            <button class="btn btn--danger" on:click=move |_| deleting.set(Some(id))>
                                "Delete"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <Dialog title="Manage Users".to_owned() on_close=on_close class="dialog--wide">
            <StatusMessage status=status/>
            <div class="dialog__toolbar">
                <input
                    class="dialog__input"
                    type="text"
                    placeholder="Search users"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
            </div>
            <Show when=move || deleting.get().is_some()>
                <Confirm
                    prompt="Delete this user? They will need to sign in again to regain access."
                    on_yes=confirm_delete
                    on_no=Callback::new(move |()| deleting.set(None))
                />
            </Show>
            <table class="table">
                <thead>
                    <tr>
                        <th>"User"</th>
                        <th>"Access"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </Dialog>
    }
}
