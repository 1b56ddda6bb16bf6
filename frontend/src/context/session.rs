use std::cell::Cell;
use std::rc::Rc;

use transaction_entry_domain::RefreshSignal;
use yew::prelude::*;

/// Session-wide state shared with every view under [`SessionProvider`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    /// Flipped whenever transaction data changes
    pub refresh: bool,
    pub refresh_count: u32,
    /// Mirrors `refresh`; shared by every state the reducer produces so
    /// long-lived handles read the current value
    live: Rc<Cell<bool>>,
}

pub enum SessionAction {
    SetRefresh(bool),
    ToggleRefresh,
}

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            SessionAction::SetRefresh(value) => value,
            SessionAction::ToggleRefresh => !self.refresh,
        };
        if next == self.refresh {
            return self;
        }

        self.live.set(next);
        Rc::new(SessionState {
            refresh: next,
            refresh_count: self.refresh_count + 1,
            live: self.live.clone(),
        })
    }
}

pub type SessionContext = UseReducerHandle<SessionState>;

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session = use_reducer(SessionState::default);

    html! {
        <ContextProvider<SessionContext> context={session}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

/// The session's refresh flag as seen by the form.
///
/// Without a surrounding provider the flag reads `false` and writes are
/// dropped.
#[derive(Clone)]
pub struct SessionRefresh {
    live: Option<Rc<Cell<bool>>>,
    dispatcher: Option<UseReducerDispatcher<SessionState>>,
}

impl SessionRefresh {
    pub fn new(session: Option<&SessionContext>) -> Self {
        Self {
            live: session.map(|s| s.live.clone()),
            dispatcher: session.map(|s| s.dispatcher()),
        }
    }
}

impl RefreshSignal for SessionRefresh {
    /// Current value of the session flag, including toggles dispatched after
    /// this handle was built
    fn refresh(&self) -> bool {
        self.live.as_ref().map(|live| live.get()).unwrap_or_default()
    }

    fn set_refresh(&self, next: bool) {
        if let Some(dispatcher) = &self.dispatcher {
            dispatcher.dispatch(SessionAction::SetRefresh(next));
        }
    }

    /// Flips the flag inside the reducer, so back-to-back toggles queued
    /// before a re-render still alternate
    fn toggle(&self) {
        if let Some(dispatcher) = &self.dispatcher {
            dispatcher.dispatch(SessionAction::ToggleRefresh);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_and_counts() {
        let state = Rc::new(SessionState::default());

        let state = state.reduce(SessionAction::ToggleRefresh);
        assert!(state.refresh);
        assert_eq!(state.refresh_count, 1);

        let state = state.reduce(SessionAction::ToggleRefresh);
        assert!(!state.refresh);
        assert_eq!(state.refresh_count, 2);
    }

    #[test]
    fn test_setting_current_value_is_not_a_change() {
        let state = Rc::new(SessionState::default());

        let next = state.clone().reduce(SessionAction::SetRefresh(false));
        assert!(Rc::ptr_eq(&state, &next));
        assert_eq!(next.refresh_count, 0);
    }

    #[test]
    fn test_handle_built_before_toggles_reads_live_value() {
        let state = Rc::new(SessionState::default());
        let refresh = SessionRefresh {
            live: Some(state.live.clone()),
            dispatcher: None,
        };
        assert!(!refresh.refresh());

        let state = state.reduce(SessionAction::ToggleRefresh);
        assert!(refresh.refresh());

        let _state = state.reduce(SessionAction::ToggleRefresh);
        assert!(!refresh.refresh());
    }

    #[test]
    fn test_refresh_without_provider_is_inert() {
        let refresh = SessionRefresh::new(None);

        refresh.toggle();
        refresh.set_refresh(true);
        assert!(!refresh.refresh());
    }
}
