use leptos::prelude::*;

use crate::dialog;
use crate::models::{PlayRecord, RecordChanges, RecordDraft};

/// Modal edit form for one record. Only one overlay exists at a time, which
/// is what keeps edits single-record exclusive. Fields are seeded from the
/// record; a draft that fails to parse keeps the overlay open.
#[component]
pub fn EditOverlay(
    record: PlayRecord,
    /// Fired with the parsed changes when the user confirms.
    #[prop(into)]
    on_save: Callback<RecordChanges>,
    #[prop(into)]
    on_cancel: Callback<()>,
    /// Page-level loading flag; disables the buttons while a call is in flight.
    busy: ReadSignal<bool>,
) -> impl IntoView {
    let (date, set_date) = signal(record.date.to_string());
    let (game_title, set_game_title) = signal(record.game_title.clone());
    let (cost, set_cost) = signal(record.cost.to_string());
    let (play_count, set_play_count) = signal(record.play_count.to_string());

    let submit = move |_| {
        let draft = RecordDraft {
            date: date.get(),
            game_title: game_title.get(),
            cost: cost.get(),
            play_count: play_count.get(),
        };
        match draft.parse() {
            Ok(changes) => on_save.run(changes),
            Err(e) => dialog::alert(&e),
        }
    };

    view! {
        <div class="overlay-backdrop">
            <style>{include_str!("edit_overlay.css")}</style>

            <div class="overlay-panel">
                <h3>"Edit record"</h3>
                <div class="form-group">
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

                    <button class="btn btn-primary" on:click=submit disabled=move || busy.get()>
                        {move || if busy.get() { "Updating..." } else { "Save changes" }}
                    </button>
                    <button
                        class="btn btn-secondary"
                        on:click=move |_| on_cancel.run(())
                        disabled=move || busy.get()
                    >
                        "Cancel"
                    </button>
                </div>
            </div>
        </div>
    }
}
