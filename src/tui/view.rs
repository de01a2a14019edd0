//! Main TUI view component
//!
//! Single-screen client: create form on top, filter bar and ticket list
//! below, stats and shortcuts framing them. Modal workflows (close
//! comment, delete confirmation) overlay the screen and capture all keys
//! while active.

use iocraft::prelude::*;

use crate::api::BackendClient;
use crate::types::Ticket;

use super::components::{
    CloseCommentModal, CreateForm, DeleteConfirmModal, FilterBar, Footer, Header, Selectable,
    StatsBar, TicketList, Toast, close_modal_shortcuts, confirm_delete_shortcuts, cycle_optional,
    form_shortcuts, list_shortcuts, render_toast,
};
use super::handlers::{
    create_close_handler, create_delete_handler, create_refresh_handler, create_resolve_handler,
    create_search_handler, create_submit_handler, create_suggest_handler,
};
use super::model::open_close_dialog;
use super::state::{CloseModalData, ConfirmDeleteData, CreateFormData, FilterFormData, FocusSlot};
use super::theme::theme;

/// Props for the App component
#[derive(Default, Props)]
pub struct AppProps {
    /// Backend client, shared by every handler
    pub client: Option<BackendClient>,
}

/// Main application component
#[component]
pub fn App(props: &AppProps, mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();
    let theme = theme();

    let Some(client) = props.client.clone() else {
        return element!(View).into_any();
    };
    let backend_url = client.base_url().to_string();

    // Data state
    let tickets: State<Vec<Ticket>> = hooks.use_state(Vec::new);
    let stats = hooks.use_state(|| None);
    let mut selected = hooks.use_state(|| 0usize);

    // Form and filter state
    let mut focus = hooks.use_state(FocusSlot::default);
    let mut create_form = hooks.use_state(CreateFormData::default);
    let classifying = hooks.use_state(|| false);
    let mut filters = hooks.use_state(FilterFormData::default);

    // Modal state
    let mut close_modal: State<Option<CloseModalData>> = hooks.use_state(|| None);
    let mut close_comment = hooks.use_state(String::new);
    let mut confirm_delete: State<Option<ConfirmDeleteData>> = hooks.use_state(|| None);

    let mut toast: State<Option<Toast>> = hooks.use_state(|| None);
    let mut should_exit = hooks.use_state(|| false);

    // Async handlers
    let refresh_handler =
        create_refresh_handler(&mut hooks, &client, &tickets, &stats, &selected, &toast);
    let suggest_handler = create_suggest_handler(&mut hooks, &client, &create_form, &classifying);
    let search_handler = create_search_handler(&mut hooks, &filters, &refresh_handler);
    let submit_handler =
        create_submit_handler(&mut hooks, &client, &create_form, &toast, &refresh_handler);
    let resolve_handler = create_resolve_handler(&mut hooks, &client, &toast, &refresh_handler);
    let close_handler = create_close_handler(
        &mut hooks,
        &client,
        &close_modal,
        &close_comment,
        &toast,
        &refresh_handler,
    );
    let delete_handler = create_delete_handler(&mut hooks, &client, &toast, &refresh_handler);

    // Trigger the initial fetch exactly once
    let mut fetch_started = hooks.use_state(|| false);
    if !fetch_started.get() {
        fetch_started.set(true);
        refresh_handler.clone()(filters.read().query());
    }

    // Clone handlers for use inside the event closure
    let refresh_for_events = refresh_handler.clone();
    let submit_for_events = submit_handler.clone();
    let resolve_for_events = resolve_handler.clone();
    let close_for_events = close_handler.clone();
    let delete_for_events = delete_handler.clone();

    hooks.use_terminal_events({
        move |event| match event {
            TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) if kind != KeyEventKind::Release => {
                // Delete confirmation captures every key: y deletes,
                // anything else cancels.
                let pending_delete = confirm_delete.read().clone();
                if let Some(pending) = pending_delete {
                    confirm_delete.set(None);
                    if code == KeyCode::Char('y') {
                        delete_for_events.clone()((pending.ticket_id, filters.read().query()));
                    }
                    return;
                }

                // Close modal: Enter submits, Esc cancels, everything
                // else belongs to the comment input.
                let pending_close = close_modal.read().clone();
                if let Some(pending) = pending_close {
                    match code {
                        KeyCode::Enter => {
                            close_for_events.clone()((
                                pending.ticket_id,
                                close_comment.read().clone(),
                                filters.read().query(),
                            ));
                        }
                        KeyCode::Esc => {
                            close_modal.set(None);
                            close_comment.set(String::new());
                        }
                        _ => {}
                    }
                    return;
                }

                let current_focus = focus.get();

                match code {
                    KeyCode::Tab => {
                        focus.set(current_focus.next());
                        return;
                    }
                    KeyCode::BackTab => {
                        focus.set(current_focus.prev());
                        return;
                    }
                    KeyCode::Esc => {
                        focus.set(FocusSlot::TicketList);
                        return;
                    }
                    KeyCode::Char('s') if modifiers.contains(KeyModifiers::CONTROL) => {
                        let new_ticket = create_form.read().to_new_ticket();
                        match new_ticket.validate() {
                            Ok(()) => {
                                submit_for_events.clone()((new_ticket, filters.read().query()));
                            }
                            Err(e) => toast.set(Some(Toast::error(e.to_string()))),
                        }
                        return;
                    }
                    _ => {}
                }

                // Left/Right cycle the focused selector. Filter changes
                // re-query immediately.
                if matches!(code, KeyCode::Left | KeyCode::Right) {
                    let forward = code == KeyCode::Right;
                    match current_focus {
                        FocusSlot::CategorySelect => {
                            let mut form = create_form.read().clone();
                            form.category = if forward {
                                form.category.next()
                            } else {
                                form.category.prev()
                            };
                            create_form.set(form);
                        }
                        FocusSlot::PrioritySelect => {
                            let mut form = create_form.read().clone();
                            form.priority = if forward {
                                form.priority.next()
                            } else {
                                form.priority.prev()
                            };
                            create_form.set(form);
                        }
                        FocusSlot::FilterCategory => {
                            let mut new_filters = filters.read().clone();
                            new_filters.category = cycle_optional(new_filters.category, forward);
                            filters.set(new_filters.clone());
                            refresh_for_events.clone()(new_filters.query());
                        }
                        FocusSlot::FilterPriority => {
                            let mut new_filters = filters.read().clone();
                            new_filters.priority = cycle_optional(new_filters.priority, forward);
                            filters.set(new_filters.clone());
                            refresh_for_events.clone()(new_filters.query());
                        }
                        FocusSlot::FilterStatus => {
                            let mut new_filters = filters.read().clone();
                            new_filters.status = cycle_optional(new_filters.status, forward);
                            filters.set(new_filters.clone());
                            refresh_for_events.clone()(new_filters.query());
                        }
                        _ => {}
                    }
                    return;
                }

                // Character keys in a text input belong to the input
                if current_focus.is_text_input() {
                    return;
                }

                if current_focus == FocusSlot::TicketList {
                    let ticket_count = tickets.read().len();
                    let selected_ticket = tickets.read().get(selected.get()).cloned();

                    match code {
                        KeyCode::Char('j') | KeyCode::Down => {
                            if selected.get() + 1 < ticket_count {
                                selected.set(selected.get() + 1);
                            }
                        }
                        KeyCode::Char('k') | KeyCode::Up => {
                            selected.set(selected.get().saturating_sub(1));
                        }
                        KeyCode::Char('r') => {
                            if let Some(ticket) = selected_ticket {
                                resolve_for_events.clone()((ticket.id, filters.read().query()));
                            }
                        }
                        KeyCode::Char('c') => {
                            if let Some(ticket) = selected_ticket {
                                let (data, comment) = open_close_dialog(&ticket);
                                close_comment.set(comment);
                                close_modal.set(Some(data));
                            }
                        }
                        KeyCode::Char('d') => {
                            if let Some(ticket) = selected_ticket {
                                confirm_delete.set(Some(ConfirmDeleteData {
                                    ticket_id: ticket.id,
                                    ticket_title: ticket.title,
                                }));
                            }
                        }
                        KeyCode::Char('n') => {
                            focus.set(FocusSlot::TitleInput);
                        }
                        KeyCode::Char('/') => {
                            focus.set(FocusSlot::SearchInput);
                        }
                        KeyCode::Char('R') => {
                            refresh_for_events.clone()(filters.read().query());
                        }
                        KeyCode::Char('q') => {
                            should_exit.set(true);
                        }
                        _ => {}
                    }
                }
            }
            _ => {}
        }
    });

    if should_exit.get() {
        system.exit();
    }

    let current_focus = focus.get();
    let shortcuts = if confirm_delete.read().is_some() {
        confirm_delete_shortcuts()
    } else if close_modal.read().is_some() {
        close_modal_shortcuts()
    } else if current_focus == FocusSlot::TicketList {
        list_shortcuts()
    } else {
        form_shortcuts()
    };

    let toast_state = toast.read().clone();
    let close_modal_state = close_modal.read().clone();
    let confirm_delete_state = confirm_delete.read().clone();
    let filters_state = filters.read().clone();
    let filtered = !filters_state.query().is_unconstrained();

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            Header(backend_url: backend_url)
            StatsBar(stats: stats.read().clone())
            CreateForm(
                form: Some(create_form),
                focus: current_focus,
                classifying: classifying.get(),
                on_description_change: Some(suggest_handler.clone()),
            )
            FilterBar(
                filters: Some(filters),
                focus: current_focus,
                on_search_change: Some(search_handler.clone()),
            )
            TicketList(
                tickets: tickets.read().clone(),
                selected: selected.get(),
                has_focus: current_focus == FocusSlot::TicketList,
                filtered: filtered,
            )
            Footer(shortcuts: shortcuts)
            #(render_toast(&toast_state))
            #(close_modal_state.map(|data| element! {
                CloseCommentModal(
                    data: data,
                    comment: Some(close_comment),
                )
            }))
            #(confirm_delete_state.map(|data| element! {
                DeleteConfirmModal(data: data)
            }))
        }
    }
    .into_any()
}
