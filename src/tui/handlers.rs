//! Async handler factories for the TUI
//!
//! Factory functions accept `&mut Hooks` as their first parameter so they
//! can call `hooks.use_async_handler()` internally. Re-invoking one of
//! these handlers drops any future still pending from the previous
//! invocation; the suggestion handler leans on that for debouncing.

use iocraft::hooks::UseAsyncHandler;
use iocraft::prelude::{Handler, Hooks, State};

use crate::api::{BackendClient, TicketQuery};
use crate::types::{NewTicket, Stats, Ticket, TicketId};

use super::components::Toast;
use super::model::{apply_refresh, apply_suggestion, should_classify};
use super::state::{CloseModalData, CreateFormData, FilterFormData};

/// Debounce delay before a description edit triggers classification
pub const SUGGEST_DEBOUNCE_MS: u64 = 700;

/// Factory for the list/stats refresh handler.
///
/// Both fetches run concurrently and are applied independently: a failed
/// stats fetch leaves the previous stats on screen without blocking the
/// list, and vice versa.
pub fn create_refresh_handler(
    hooks: &mut Hooks,
    client: &BackendClient,
    tickets: &State<Vec<Ticket>>,
    stats: &State<Option<Stats>>,
    selected: &State<usize>,
    toast: &State<Option<Toast>>,
) -> Handler<TicketQuery> {
    let client = client.clone();
    let tickets = *tickets;
    let stats = *stats;
    let selected = *selected;
    let toast = *toast;

    hooks.use_async_handler(move |query: TicketQuery| {
        let client = client.clone();
        let mut tickets = tickets;
        let mut stats = stats;
        let mut selected = selected;
        let mut toast = toast;

        async move {
            let (list_result, stats_result) =
                tokio::join!(client.list_tickets(&query), client.stats());

            let outcome = apply_refresh(list_result, stats_result, selected.get());
            if let Some(list) = outcome.tickets {
                selected.set(outcome.selected);
                tickets.set(list);
            }
            if let Some(s) = outcome.stats {
                stats.set(Some(s));
            }
            if let Some(message) = outcome.error {
                toast.set(Some(Toast::error(message)));
            }
        }
    })
}

/// Factory for the search handler.
///
/// Invoked with the new search text on every edit. The query is rebuilt
/// from the text plus the other filter fields, so a search edit and a
/// selector change can never race each other into an inconsistent query.
pub fn create_search_handler(
    hooks: &mut Hooks,
    filters: &State<FilterFormData>,
    refresh_handler: &Handler<TicketQuery>,
) -> Handler<String> {
    let filters = *filters;
    let refresh_handler = refresh_handler.clone();

    hooks.use_async_handler(move |search: String| {
        let filters = filters;
        let refresh_handler = refresh_handler.clone();

        async move {
            let mut query = filters.read().query();
            query = query.with_search(search);
            refresh_handler(query);
        }
    })
}

/// Factory for the debounced classification handler.
///
/// Invoked with the full description on every edit. Each invocation
/// cancels the previous one, so only a pause in typing lets the delay
/// elapse and the request go out. An empty description acts as an
/// explicit cancel. A response that no longer matches the current
/// description is discarded rather than applied.
pub fn create_suggest_handler(
    hooks: &mut Hooks,
    client: &BackendClient,
    create_form: &State<CreateFormData>,
    classifying: &State<bool>,
) -> Handler<String> {
    let client = client.clone();
    let create_form = *create_form;
    let classifying = *classifying;

    hooks.use_async_handler(move |description: String| {
        let client = client.clone();
        let mut create_form = create_form;
        let mut classifying = classifying;

        async move {
            if !should_classify(&description) {
                classifying.set(false);
                return;
            }

            tokio::time::sleep(tokio::time::Duration::from_millis(SUGGEST_DEBOUNCE_MS)).await;

            classifying.set(true);
            let result = client.classify(&description).await;
            classifying.set(false);

            let suggestion = match result {
                Ok(s) => s,
                Err(e) => {
                    // Suggestions are assistive; failures never interrupt typing
                    tracing::debug!("classification failed: {e}");
                    return;
                }
            };

            // The description may have changed while the request was in
            // flight; a response for the old text is discarded.
            let form = create_form.read().clone();
            if let Some(next) = apply_suggestion(&form, &description, &suggestion) {
                create_form.set(next);
            }
        }
    })
}

/// Factory for the create-ticket handler
pub fn create_submit_handler(
    hooks: &mut Hooks,
    client: &BackendClient,
    create_form: &State<CreateFormData>,
    toast: &State<Option<Toast>>,
    refresh_handler: &Handler<TicketQuery>,
) -> Handler<(NewTicket, TicketQuery)> {
    let client = client.clone();
    let create_form = *create_form;
    let toast = *toast;
    let refresh_handler = refresh_handler.clone();

    hooks.use_async_handler(move |(new_ticket, query): (NewTicket, TicketQuery)| {
        let client = client.clone();
        let mut create_form = create_form;
        let mut toast = toast;
        let refresh_handler = refresh_handler.clone();

        async move {
            match client.create_ticket(&new_ticket).await {
                Ok(ticket) => {
                    toast.set(Some(Toast::success(format!(
                        "Created #{} {}",
                        ticket.id, ticket.title
                    ))));
                    let mut form = create_form.read().clone();
                    form.clear_text();
                    create_form.set(form);
                    refresh_handler(query);
                }
                Err(e) => {
                    toast.set(Some(Toast::error(format!("Create failed: {e}"))));
                }
            }
        }
    })
}

/// Factory for the resolve handler
pub fn create_resolve_handler(
    hooks: &mut Hooks,
    client: &BackendClient,
    toast: &State<Option<Toast>>,
    refresh_handler: &Handler<TicketQuery>,
) -> Handler<(TicketId, TicketQuery)> {
    let client = client.clone();
    let toast = *toast;
    let refresh_handler = refresh_handler.clone();

    hooks.use_async_handler(move |(id, query): (TicketId, TicketQuery)| {
        let client = client.clone();
        let mut toast = toast;
        let refresh_handler = refresh_handler.clone();

        async move {
            match client.resolve_ticket(id).await {
                Ok(()) => {
                    toast.set(Some(Toast::success(format!("Resolved #{id}"))));
                    refresh_handler(query);
                }
                Err(e) => {
                    toast.set(Some(Toast::error(format!("Resolve failed: {e}"))));
                }
            }
        }
    })
}

/// Factory for the close handler.
///
/// On success the modal slot and the pending comment are both cleared; on
/// failure they stay as they were so the user can retry or cancel.
pub fn create_close_handler(
    hooks: &mut Hooks,
    client: &BackendClient,
    close_modal: &State<Option<CloseModalData>>,
    close_comment: &State<String>,
    toast: &State<Option<Toast>>,
    refresh_handler: &Handler<TicketQuery>,
) -> Handler<(TicketId, String, TicketQuery)> {
    let client = client.clone();
    let close_modal = *close_modal;
    let close_comment = *close_comment;
    let toast = *toast;
    let refresh_handler = refresh_handler.clone();

    hooks.use_async_handler(
        move |(id, comment, query): (TicketId, String, TicketQuery)| {
            let client = client.clone();
            let mut close_modal = close_modal;
            let mut close_comment = close_comment;
            let mut toast = toast;
            let refresh_handler = refresh_handler.clone();

            async move {
                match client.close_ticket(id, &comment).await {
                    Ok(()) => {
                        close_modal.set(None);
                        close_comment.set(String::new());
                        toast.set(Some(Toast::success(format!("Closed #{id}"))));
                        refresh_handler(query);
                    }
                    Err(e) => {
                        toast.set(Some(Toast::error(format!("Close failed: {e}"))));
                    }
                }
            }
        },
    )
}

/// Factory for the delete handler. Confirmation has already happened by
/// the time this runs.
pub fn create_delete_handler(
    hooks: &mut Hooks,
    client: &BackendClient,
    toast: &State<Option<Toast>>,
    refresh_handler: &Handler<TicketQuery>,
) -> Handler<(TicketId, TicketQuery)> {
    let client = client.clone();
    let toast = *toast;
    let refresh_handler = refresh_handler.clone();

    hooks.use_async_handler(move |(id, query): (TicketId, TicketQuery)| {
        let client = client.clone();
        let mut toast = toast;
        let refresh_handler = refresh_handler.clone();

        async move {
            match client.delete_ticket(id).await {
                Ok(()) => {
                    toast.set(Some(Toast::success(format!("Deleted #{id}"))));
                    refresh_handler(query);
                }
                Err(e) => {
                    toast.set(Some(Toast::error(format!("Delete failed: {e}"))));
                }
            }
        }
    })
}
