//! Accept dialog
//!
//! A modal dialog that asks the user for a single accept decision: a message
//! label, an optional content area for caller-supplied controls, and a button
//! row with a permanent OK button. Outcomes surface as [`DialogEvent`]s over
//! the event channel, as [`DialogHooks`] callbacks, and through the
//! Hidden/Visible state transition itself.
//!
//! The dialog is constructed hidden. Showing it grabs OK-button focus,
//! recomputes layout and subscribes to the parent window's focus-regained
//! events; hiding tears the subscription down again. The cancel path never
//! hides mid-notification: it queues the hide and the owner applies it with
//! [`AcceptDialog::run_deferred`] once the current notification has finished.

use super::host::{WindowHost, WindowId};
use super::layout::{self, ChildRects, LayoutMetrics};
use super::types::{
    ButtonHandle, ButtonSide, DeferredAction, DialogDefaults, DialogId, DialogResult,
    DialogState, HostNotification,
};
use crate::components::{Button, ButtonRole, ButtonRow, Component, ComponentState, Control, Label, Panel};
use crate::events::{DialogEvent, Event};
use crate::themes::Theme;
use crate::Frame;
use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders};
use std::collections::{HashSet, VecDeque};
use tokio::sync::mpsc;

/// Overridable reactions to dialog outcomes.
///
/// All methods default to no-ops; implement only what you need. Hooks run
/// before the corresponding [`DialogEvent`] reaches channel subscribers for
/// confirm, and after it for cancel and custom actions.
#[async_trait]
pub trait DialogHooks: Send + Sync {
    async fn on_confirmed(&mut self) -> Result<()> {
        Ok(())
    }

    async fn on_cancelled(&mut self) -> Result<()> {
        Ok(())
    }

    async fn on_custom_action(&mut self, action: &str) -> Result<()> {
        let _ = action;
        Ok(())
    }
}

/// Which part of the dialog currently receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DialogFocus {
    Buttons,
    Content(usize),
}

/// Modal accept dialog.
pub struct AcceptDialog {
    state: ComponentState,
    id: DialogId,
    title: String,
    label: Label,
    panel: Panel,
    button_row: ButtonRow,
    content: Vec<Box<dyn Control>>,
    /// Indices of content controls registered for enter-to-confirm.
    enter_targets: HashSet<usize>,
    focus: DialogFocus,
    defaults: DialogDefaults,
    hide_on_confirm: bool,
    close_on_escape: bool,
    exclusive: bool,
    metrics: LayoutMetrics,
    child_rects: Option<ChildRects>,
    /// Parent window whose focus-regained events we listen to. Never
    /// outlives visibility; cleared eagerly on the cancel path so the focus
    /// callback cannot re-enter after the hide lands.
    parent_link: Option<WindowId>,
    deferred: VecDeque<DeferredAction>,
    /// Dialog-requested minimum size, combined with the host floor.
    min_size: (u16, u16),
    event_sender: Option<mpsc::UnboundedSender<Event>>,
    hooks: Vec<Box<dyn DialogHooks>>,
}

impl AcceptDialog {
    /// Create a new accept dialog, hidden, with a permanent OK button.
    pub fn new(defaults: DialogDefaults) -> Self {
        let id = DialogId::generate();
        let button_row = ButtonRow::new(id.clone(), Button::new("OK", ButtonRole::Ok));
        let mut state = ComponentState::new();
        state.is_visible = false;

        Self {
            state,
            id,
            title: "Alert!".to_string(),
            label: Label::new(""),
            panel: Panel::new(),
            button_row,
            content: Vec::new(),
            enter_targets: HashSet::new(),
            focus: DialogFocus::Buttons,
            defaults,
            hide_on_confirm: true,
            close_on_escape: true,
            exclusive: true,
            metrics: LayoutMetrics::default(),
            child_rects: None,
            parent_link: None,
            deferred: VecDeque::new(),
            min_size: (0, 0),
            event_sender: None,
            hooks: Vec::new(),
        }
    }

    /// Create a dialog with an explicit id instead of a generated one.
    pub fn with_id(defaults: DialogDefaults, id: impl Into<DialogId>) -> Self {
        let mut dialog = Self::new(defaults);
        let id = id.into();
        dialog.button_row = ButtonRow::new(id.clone(), Button::new("OK", ButtonRole::Ok));
        dialog.id = id;
        dialog
    }

    pub fn id(&self) -> &DialogId {
        &self.id
    }

    pub fn dialog_state(&self) -> DialogState {
        if self.state.is_visible {
            DialogState::Visible
        } else {
            DialogState::Hidden
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn text(&self) -> &str {
        self.label.text()
    }

    /// Set the message text, re-laying out a visible dialog.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.label.set_text(text);
        if self.state.is_visible {
            self.relayout();
        }
    }

    pub fn set_autowrap(&mut self, autowrap: bool) {
        self.label.set_autowrap(autowrap);
    }

    pub fn has_autowrap(&self) -> bool {
        self.label.has_autowrap()
    }

    pub fn hide_on_confirm(&self) -> bool {
        self.hide_on_confirm
    }

    pub fn set_hide_on_confirm(&mut self, hide: bool) {
        self.hide_on_confirm = hide;
    }

    pub fn close_on_escape(&self) -> bool {
        self.close_on_escape
    }

    pub fn set_close_on_escape(&mut self, close: bool) {
        self.close_on_escape = close;
    }

    pub fn is_exclusive(&self) -> bool {
        self.exclusive
    }

    pub fn set_exclusive(&mut self, exclusive: bool) {
        self.exclusive = exclusive;
    }

    /// Dialog-requested minimum size, combined with the host floor when
    /// computing [`AcceptDialog::minimum_size`].
    pub fn set_min_size(&mut self, min_size: (u16, u16)) {
        self.min_size = min_size;
    }

    /// Set the event sender outcomes are emitted on.
    pub fn set_event_sender(&mut self, sender: mpsc::UnboundedSender<Event>) {
        self.event_sender = Some(sender);
    }

    /// Add an outcome hook.
    pub fn add_hooks(&mut self, hooks: Box<dyn DialogHooks>) {
        self.hooks.push(hooks);
    }

    pub fn ok_button_handle(&self) -> ButtonHandle {
        self.button_row.ok_handle()
    }

    pub fn ok_button(&self) -> Option<&Button> {
        self.button_row.ok_button()
    }

    pub fn ok_button_mut(&mut self) -> Option<&mut Button> {
        self.button_row.ok_button_mut()
    }

    pub fn focused_button(&self) -> Option<ButtonHandle> {
        self.button_row.focused_handle()
    }

    /// Add a button to the row. A non-empty `action_id` makes pressing it
    /// raise [`DialogEvent::CustomAction`] alongside the custom-action hook.
    pub fn add_action_button(
        &mut self,
        label: impl Into<String>,
        side: ButtonSide,
        action_id: impl Into<String>,
    ) -> ButtonHandle {
        let button = Button::new(label, ButtonRole::Action(action_id.into()));
        let handle = match side {
            ButtonSide::Leading => self.button_row.add_leading(button),
            ButtonSide::Trailing => self.button_row.add_trailing(button),
        };
        if self.state.is_visible {
            self.relayout();
        }
        handle
    }

    /// Add a button wired to the cancel path. The side follows the injected
    /// `swap_cancel_ok` default; an empty override keeps the "Cancel" label.
    pub fn add_cancel_button(&mut self, label_override: &str) -> ButtonHandle {
        let label = if label_override.is_empty() {
            "Cancel"
        } else {
            label_override
        };
        let button = Button::new(label, ButtonRole::Cancel);
        let handle = if self.defaults.swap_cancel_ok {
            self.button_row.add_trailing(button)
        } else {
            self.button_row.add_leading(button)
        };
        if self.state.is_visible {
            self.relayout();
        }
        handle
    }

    /// Remove a previously added button together with its wiring.
    ///
    /// Fails with [`DialogError::InvalidOperation`] for the permanent OK
    /// button or a handle minted by another dialog, leaving the row
    /// untouched.
    ///
    /// [`DialogError::InvalidOperation`]: super::DialogError::InvalidOperation
    pub fn remove_button(&mut self, handle: &ButtonHandle) -> DialogResult<()> {
        self.button_row.remove(handle)?;
        if self.state.is_visible {
            self.relayout();
        }
        Ok(())
    }

    /// Add a caller-supplied control to the content area, returning its
    /// index for later registration calls.
    pub fn add_content(&mut self, control: Box<dyn Control>) -> usize {
        self.content.push(control);
        if self.state.is_visible {
            self.relayout();
        }
        self.content.len() - 1
    }

    pub fn content_count(&self) -> usize {
        self.content.len()
    }

    /// Route a content control's Enter key through the confirm path.
    /// Silently ignored for controls that are not text inputs.
    pub fn register_text_enter(&mut self, index: usize) {
        match self.content.get(index) {
            Some(control) if control.is_text_input() => {
                self.enter_targets.insert(index);
            }
            Some(_) => {
                tracing::debug!(dialog = %self.id, index, "ignoring enter registration for non-text control");
            }
            None => {}
        }
    }

    /// Make the dialog visible: OK grabs focus, layout is recomputed and the
    /// parent window's focus-regained events are subscribed to.
    pub fn show(&mut self, host: &mut dyn WindowHost) {
        if self.state.is_visible {
            return;
        }
        self.state.is_visible = true;
        self.became_visible(host);
    }

    /// Hide the dialog, dropping the parent-focus subscription.
    pub fn hide(&mut self, host: &mut dyn WindowHost) {
        if !self.state.is_visible {
            return;
        }
        self.state.is_visible = false;
        self.became_hidden(host);
    }

    fn became_visible(&mut self, host: &mut dyn WindowHost) {
        tracing::debug!(dialog = %self.id, "dialog shown");
        self.focus = DialogFocus::Buttons;
        self.button_row.focus_ok();
        self.relayout();
        if self.parent_link.is_none() {
            if let Some(parent) = host.parent_window() {
                host.subscribe_parent_focus(parent, &self.id);
                self.parent_link = Some(parent);
            }
        }
    }

    fn became_hidden(&mut self, host: &mut dyn WindowHost) {
        tracing::debug!(dialog = %self.id, "dialog hidden");
        if let Some(parent) = self.parent_link.take() {
            host.unsubscribe_parent_focus(parent, &self.id);
        }
    }

    /// Confirm the dialog: hide first when `hide_on_confirm` is set, then run
    /// hooks, then emit [`DialogEvent::Confirmed`]. Subscribers observing the
    /// event therefore already see the dialog hidden.
    pub async fn request_confirm(&mut self, host: &mut dyn WindowHost) -> Result<()> {
        tracing::debug!(dialog = %self.id, "confirm requested");
        if self.hide_on_confirm {
            self.hide(host);
        }
        for hooks in &mut self.hooks {
            hooks.on_confirmed().await?;
        }
        self.send_event(DialogEvent::Confirmed);
        Ok(())
    }

    /// Cancel the dialog. The parent-focus subscription is dropped first so
    /// the focus callback cannot re-enter after the hide; the hide itself is
    /// deferred until [`AcceptDialog::run_deferred`]. Focus is not handed
    /// back to the parent window.
    pub async fn request_cancel(&mut self, host: &mut dyn WindowHost) -> Result<()> {
        tracing::debug!(dialog = %self.id, "cancel requested");
        if let Some(parent) = self.parent_link.take() {
            host.unsubscribe_parent_focus(parent, &self.id);
        }
        self.deferred.push_back(DeferredAction::Hide);
        self.send_event(DialogEvent::Cancelled);
        for hooks in &mut self.hooks {
            hooks.on_cancelled().await?;
        }
        Ok(())
    }

    /// Apply work queued during the last notification. Call after each
    /// notification or input dispatch completes.
    pub fn run_deferred(&mut self, host: &mut dyn WindowHost) {
        while let Some(action) = self.deferred.pop_front() {
            match action {
                DeferredAction::Hide => self.hide(host),
            }
        }
    }

    pub fn has_pending_deferred(&self) -> bool {
        !self.deferred.is_empty()
    }

    /// Dispatch a notification from the host window system.
    pub async fn on_host_notification(
        &mut self,
        kind: HostNotification,
        host: &mut dyn WindowHost,
    ) -> Result<()> {
        match kind {
            HostNotification::BecameVisible => {
                self.state.is_visible = true;
                self.became_visible(host);
            }
            HostNotification::BecameHidden => {
                self.state.is_visible = false;
                self.became_hidden(host);
            }
            HostNotification::ThemeChanged => {
                self.panel.restyle();
            }
            HostNotification::Ready => {
                if self.state.is_visible {
                    self.relayout();
                }
            }
            HostNotification::Resized(width, height) => {
                self.state.size = Rect::new(self.state.size.x, self.state.size.y, width, height);
                if self.state.is_visible {
                    self.relayout();
                }
            }
            HostNotification::CloseRequested => {
                self.request_cancel(host).await?;
            }
        }
        Ok(())
    }

    /// Handle a key event while the dialog has input focus.
    pub async fn on_key_event(&mut self, key: KeyEvent, host: &mut dyn WindowHost) -> Result<()> {
        if !self.state.is_visible || key.kind == KeyEventKind::Release {
            return Ok(());
        }

        if key.code == KeyCode::Esc {
            if self.close_on_escape && !host.has_exclusive_child(&self.id) {
                self.request_cancel(host).await?;
            }
            return Ok(());
        }

        match self.focus {
            DialogFocus::Buttons => match key.code {
                KeyCode::Left => self.button_row.focus_prev(),
                KeyCode::Right => self.button_row.focus_next(),
                KeyCode::Tab => self.tab_traverse(),
                KeyCode::Enter | KeyCode::Char(' ') => self.press_focused(host).await?,
                _ => {}
            },
            DialogFocus::Content(index) => match key.code {
                KeyCode::Enter if self.enter_targets.contains(&index) => {
                    self.text_submitted(host).await?;
                }
                KeyCode::Tab => self.tab_traverse(),
                _ => {
                    if let Some(control) = self.content.get_mut(index) {
                        control.handle_key_event(key).await?;
                    }
                }
            },
        }
        Ok(())
    }

    /// A detached parent window reclaimed focus. Non-exclusive dialogs yield.
    pub async fn on_parent_focus_regained(&mut self, host: &mut dyn WindowHost) -> Result<()> {
        if self.close_on_escape && !self.exclusive {
            self.request_cancel(host).await?;
        }
        Ok(())
    }

    /// A registered text input submitted its line. Ignored while the OK
    /// button is disabled: no event, no state change.
    pub async fn text_submitted(&mut self, host: &mut dyn WindowHost) -> Result<()> {
        if self
            .button_row
            .ok_button()
            .map(Button::is_disabled)
            .unwrap_or(true)
        {
            tracing::debug!(dialog = %self.id, "text submitted while OK disabled; ignored");
            return Ok(());
        }
        self.request_confirm(host).await
    }

    async fn press_focused(&mut self, host: &mut dyn WindowHost) -> Result<()> {
        let Some(handle) = self.button_row.focused_handle() else {
            return Ok(());
        };
        let Some(button) = self.button_row.button(&handle) else {
            return Ok(());
        };
        if button.is_disabled() {
            return Ok(());
        }
        let role = button.role().clone();
        self.send_event(DialogEvent::ButtonPressed(handle));
        match role {
            ButtonRole::Ok => self.request_confirm(host).await?,
            ButtonRole::Cancel => self.request_cancel(host).await?,
            ButtonRole::Action(action) => {
                if !action.is_empty() {
                    self.send_event(DialogEvent::CustomAction(action.clone()));
                    for hooks in &mut self.hooks {
                        hooks.on_custom_action(&action).await?;
                    }
                }
            }
        }
        Ok(())
    }

    fn tab_traverse(&mut self) {
        let text_inputs: Vec<usize> = self
            .content
            .iter()
            .enumerate()
            .filter_map(|(index, control)| control.is_text_input().then_some(index))
            .collect();

        match self.focus {
            DialogFocus::Buttons => {
                if let Some(&first) = text_inputs.first() {
                    self.button_row.clear_focus();
                    self.set_content_focus(Some(first));
                } else {
                    self.button_row.focus_next();
                }
            }
            DialogFocus::Content(current) => {
                if let Some(&next) = text_inputs.iter().find(|&&index| index > current) {
                    self.set_content_focus(Some(next));
                } else {
                    self.set_content_focus(None);
                    self.button_row.focus_ok();
                }
            }
        }
    }

    fn set_content_focus(&mut self, index: Option<usize>) {
        for (i, control) in self.content.iter_mut().enumerate() {
            control.set_focus(Some(i) == index);
        }
        self.focus = match index {
            Some(i) => DialogFocus::Content(i),
            None => DialogFocus::Buttons,
        };
    }

    /// Smallest size this dialog fits in, floored at the host minimum and
    /// the dialog's own requested minimum.
    pub fn minimum_size(&self, host: &dyn WindowHost) -> (u16, u16) {
        let content_mins: Vec<(u16, u16)> =
            self.content.iter().map(|control| control.min_size()).collect();
        let host_min = host.min_window_size();
        let floor = (
            host_min.0.max(self.min_size.0),
            host_min.1.max(self.min_size.1),
        );
        layout::compute_minimum_size(
            self.label.min_size(),
            &content_mins,
            self.button_row.min_size(self.metrics.button_margin),
            self.metrics.margin,
            floor,
        )
    }

    /// Latest child layout, if one has been computed.
    pub fn child_rects(&self) -> Option<ChildRects> {
        self.child_rects
    }

    fn relayout(&mut self) {
        let size = (self.state.size.width, self.state.size.height);
        let rects = self.compute_child_rects(size);
        self.label.set_size(rects.label);
        for control in &mut self.content {
            control.set_size(rects.content);
        }
        self.button_row.set_size(rects.button_row);
        self.panel.set_size(rects.background);
        self.child_rects = Some(rects);
    }

    fn compute_child_rects(&self, size: (u16, u16)) -> ChildRects {
        let margin = self.metrics.margin;
        let label_width = size.0.saturating_sub(margin * 2);
        let label_min = (
            self.label.min_size().0,
            self.label.wrapped_height(label_width),
        );
        layout::recompute_layout(
            size,
            margin,
            self.button_row.min_size(self.metrics.button_margin),
            label_min,
        )
    }

    fn send_event(&self, event: DialogEvent) {
        if let Some(sender) = &self.event_sender {
            let _ = sender.send(Event::Dialog(event));
        }
    }
}

impl Drop for AcceptDialog {
    fn drop(&mut self) {
        if self.parent_link.is_some() {
            tracing::warn!(
                dialog = %self.id,
                "dialog dropped while subscribed to parent focus; hide it first"
            );
        }
    }
}

#[async_trait]
impl Component for AcceptDialog {
    /// Host-free input hook: only moves button focus. Input that can change
    /// lifecycle state needs the window host; route it through
    /// [`AcceptDialog::on_key_event`].
    async fn handle_key_event(&mut self, event: KeyEvent) -> Result<()> {
        if !self.state.is_visible {
            return Ok(());
        }
        if self.focus == DialogFocus::Buttons {
            match event.code {
                KeyCode::Left => self.button_row.focus_prev(),
                KeyCode::Right => self.button_row.focus_next(),
                KeyCode::Tab => self.tab_traverse(),
                _ => {}
            }
        }
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        if !self.state.is_visible || area.width == 0 || area.height == 0 {
            return;
        }
        self.panel.render(frame, area, theme);

        let chrome = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.chrome_style(true))
            .title(self.title.clone());
        let inner = chrome.inner(area);
        frame.render_widget(chrome, area);

        let rects = self.compute_child_rects((inner.width, inner.height));
        let origin = (inner.x, inner.y);
        self.label
            .render(frame, layout::offset(rects.label, origin), theme);
        let content_rect = layout::offset(rects.content, origin);
        for control in &mut self.content {
            control.render(frame, content_rect, theme);
        }
        self.button_row
            .render(frame, layout::offset(rects.button_row, origin), theme);
    }

    fn size(&self) -> Rect {
        self.state.size
    }

    fn set_size(&mut self, size: Rect) {
        self.state.size = size;
        if self.state.is_visible {
            self.relayout();
        }
    }

    fn has_focus(&self) -> bool {
        self.state.is_visible
    }

    fn is_visible(&self) -> bool {
        self.state.is_visible
    }
}
