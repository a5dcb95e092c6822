use chrono::Local;
use leptos::prelude::*;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;

use crate::components::edit_overlay::EditOverlay;
use crate::dialog;
use crate::gateway::auth::Session;
use crate::gateway::Gateway;
use crate::models::{PlayRecord, RecordChanges, RecordDraft};

/// Full re-fetch after a mutation: the list is always the last successful
/// fetch, never a client-side patch of it.
async fn refresh(gateway: &Gateway, set_records: WriteSignal<Vec<PlayRecord>>) {
    match gateway.list_records().await {
        Ok(list) => set_records.set(list),
        Err(e) => dialog::alert(&String::from(e)),
    }
}

#[component]
pub fn RecordsPage(session: Session) -> impl IntoView {
    let gateway = expect_context::<Gateway>();
    let user_id = session.user.id;
    let email = session
        .user
        .email
        .clone()
        .unwrap_or_else(|| "unknown".to_string());

    let (records, set_records) = signal::<Vec<PlayRecord>>(vec![]);
    let (is_loading, set_is_loading) = signal(false);
    // At most one record is editable at a time; this Option is the whole
    // edit-mode state machine.
    let (editing, set_editing) = signal::<Option<PlayRecord>>(None);

    // New-record form state. Date defaults to today, like the original form.
    let (date, set_date) = signal(Local::now().date_naive().to_string());
    let (game_title, set_game_title) = signal(String::new());
    let (cost, set_cost) = signal("0".to_string());
    let (play_count, set_play_count) = signal("1".to_string());

    // Initial fetch on mount.
    {
        let gateway = gateway.clone();
        Effect::new(move |_| {
            let gateway = gateway.clone();
            set_is_loading.set(true);
            spawn_local(async move {
                refresh(&gateway, set_records).await;
                set_is_loading.set(false);
            });
        });
    }

    let submit = {
        let gateway = gateway.clone();
        move |_| {
            let draft = RecordDraft {
                date: date.get(),
                game_title: game_title.get(),
                cost: cost.get(),
                play_count: play_count.get(),
            };
            let changes = match draft.parse() {
                Ok(changes) => changes,
                Err(e) => {
                    dialog::alert(&e);
                    return;
                }
            };
            let record = changes.into_new(user_id);

            let gateway = gateway.clone();
            set_is_loading.set(true);
            spawn_local(async move {
                match gateway.insert_record(&record).await {
                    Ok(()) => {
                        dialog::alert("Play record saved.");
                        set_game_title.set(String::new());
                        set_cost.set("0".to_string());
                        set_play_count.set("1".to_string());
                        refresh(&gateway, set_records).await;
                    }
                    Err(e) => dialog::alert(&String::from(e)),
                }
                set_is_loading.set(false);
            });
        }
    };

    let delete_record = {
        let gateway = gateway.clone();
        move |id: Uuid| {
            if !dialog::confirm("Delete this play record?") {
                return;
            }
            let gateway = gateway.clone();
            set_is_loading.set(true);
            spawn_local(async move {
                match gateway.delete_record(id).await {
                    Ok(()) => {
                        dialog::alert("Play record deleted.");
                        refresh(&gateway, set_records).await;
                    }
                    Err(e) => dialog::alert(&String::from(e)),
                }
                set_is_loading.set(false);
            });
        }
    };

    let save_edit = {
        let gateway = gateway.clone();
        move |id: Uuid, changes: RecordChanges| {
            let gateway = gateway.clone();
            set_is_loading.set(true);
            spawn_local(async move {
                match gateway.update_record(id, &changes).await {
                    Ok(()) => {
                        dialog::alert("Play record updated.");
                        set_editing.set(None);
                        refresh(&gateway, set_records).await;
                    }
                    Err(e) => dialog::alert(&String::from(e)),
                }
                set_is_loading.set(false);
            });
        }
    };

    let sign_out = {
        let gateway = gateway.clone();
        move |_| {
            let gateway = gateway.clone();
            spawn_local(async move {
                gateway.sign_out().await;
            });
        }
    };

    view! {
        <div class="page records-page">
            <style>{include_str!("records.css")}</style>

            <div class="records-header">
                <h2>{format!("Welcome, {}!", email)}</h2>
                <button class="btn btn-secondary" on:click=sign_out>"Sign Out"</button>
            </div>

            <h3>"Add a record"</h3>
            <div class="record-form form-group">
                <label>
                    "Date: "
                    <input
                        type="date"
                        class="input"
                        prop:value=move || date.get()
                        on:input=move |ev| set_date.set(event_target_value(&ev))
                        required
                    />
                </label>
                <label>
                    "Game title: "
                    <input
                        type="text"
                        class="input"
                        prop:value=move || game_title.get()
                        on:input=move |ev| set_game_title.set(event_target_value(&ev))
                        required
                    />
                </label>
                <label>
                    "Cost: "
                    <input
                        type="number"
                        class="input"
                        min="0"
                        prop:value=move || cost.get()
                        on:input=move |ev| set_cost.set(event_target_value(&ev))
                        required
                    />
                </label>
                <label>
                    "Play count: "
                    <input
                        type="number"
                        class="input"
                        min="1"
                        prop:value=move || play_count.get()
                        on:input=move |ev| set_play_count.set(event_target_value(&ev))
                        required
                    />
                </label>
                <button class="btn btn-primary" on:click=submit disabled=move || is_loading.get()>
                    {move || if is_loading.get() { "Working..." } else { "Save record" }}
                </button>
            </div>

            <h3>{move || format!("Past records ({})", records.get().len())}</h3>

            <Show when=move || is_loading.get()>
                <p class="records-loading">"Loading records..."</p>
            </Show>

            <Show when=move || !is_loading.get() && records.get().is_empty()>
                <p class="records-empty">"No records yet. Add one with the form above."</p>
            </Show>

            <ul class="record-list">
                <For
                    each=move || records.get()
                    key=|record| record.id
                    children={
                        let delete_record = delete_record.clone();
                        move |record: PlayRecord| {
                            let id = record.id;
                            let record_for_edit = record.clone();
                            let delete_record = delete_record.clone();
                            view! {
                                <li class="record-item">
                                    <div class="record-summary">
                                        <strong>{record.date.to_string()}</strong>
                                        ": "
                                        {record.game_title.clone()}
                                        <br />
                                        {format!("Cost: {}, Plays: {}", record.cost, record.play_count)}
                                    </div>
                                    <div class="record-actions">
                                        <button
                                            class="btn btn-edit"
                                            on:click=move |_| set_editing.set(Some(record_for_edit.clone()))
                                            disabled=move || is_loading.get()
                                        >
                                            "Edit"
                                        </button>
                                        <button
                                            class="btn btn-delete"
                                            on:click=move |_| delete_record(id)
                                            disabled=move || is_loading.get()
                                        >
                                            "Delete"
                                        </button>
                                    </div>
                                </li>
                            }
                        }
                    }
                />
            </ul>

            {move || {
                let save_edit = save_edit.clone();
                editing.get().map(|record| {
                    let id = record.id;
                    view! {
                        <EditOverlay
                            record=record
                            busy=is_loading
                            on_save=Callback::new(move |changes| save_edit(id, changes))
                            on_cancel=Callback::new(move |_| set_editing.set(None))
                        />
                    }
                })
            }}
        </div>
    }
}
