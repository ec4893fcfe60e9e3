//! Owned viewer state: token set, preference store, filter outcome,
//! dialogs, overlay stack, and the renderer that turns it into frames.
//!
//! Every preference change rebuilds the derived state from scratch.
//! The filter pass and the loop table are never updated incrementally.

use chrono::{DateTime, Utc};

use planview_core::loops::LoopTable;
use planview_core::node_filter::{run_filter_pass, FilterOutcome, NodeFilter};
use planview_core::prefs::{Preferences, PrefsStore};
use planview_core::token::Token;
use planview_term::input::{translate_input, InputEvent, Key, KeyEvent, UiAction};
use planview_term::render::{Rect, RenderFrame, TermColor, TextRole};
use planview_term::style::StyleToken;
use planview_term::widgets::{BorderStyle, Emphasis, WidgetSpec};

use crate::detail_dialog::{build_token_dialogs, detail_pane_lines, TokenDialog};
use crate::expanded_rows::{draw_expanded, plan_expanded};
use crate::filter_editor::FilterEditor;
use crate::hidden_nodes::HiddenNodesPanel;
use crate::options_panel::OptionsPanel;
use crate::status_strip::{footer_line, header_line, hint_line};
use crate::timeline_lanes::{draw_timeline, plan_timeline, TimelineConfig};

/// Width below which the right-hand detail pane is dropped.
const DETAIL_PANE_MIN_FRAME: usize = 100;
const DETAIL_PANE_WIDTH: usize = 32;
const EXPANDED_LABEL_MAX: usize = 24;

/// Which surface currently takes input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    None,
    Dialog,
    Options,
    Hidden,
    FilterEditor,
}

/// What the caller must do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewCommand {
    None,
    /// A preference changed; write the store to disk.
    Persist,
    Quit,
}

pub struct ViewModel {
    tokens: Vec<Token>,
    plan_label: String,
    store: PrefsStore,
    prefs: Preferences,
    outcome: FilterOutcome,
    dialogs: Vec<TokenDialog>,
    overlay: Overlay,
    /// Cursor into `outcome.visible`.
    selected: usize,
    /// Expanded-layout row groups scrolled off the top.
    scroll: usize,
    options: OptionsPanel,
    hidden: HiddenNodesPanel,
    editor: FilterEditor,
    notice: Option<String>,
}

impl ViewModel {
    #[must_use]
    pub fn new(tokens: Vec<Token>, plan_label: String, store: PrefsStore) -> ViewModel {
        let mut vm = ViewModel {
            tokens,
            plan_label,
            store,
            prefs: Preferences::default(),
            outcome: FilterOutcome::default(),
            dialogs: Vec::new(),
            overlay: Overlay::None,
            selected: 0,
            scroll: 0,
            options: OptionsPanel::default(),
            hidden: HiddenNodesPanel::default(),
            editor: FilterEditor::default(),
            notice: None,
        };
        vm.rebuild();
        vm
    }

    /// Recompute everything derived from the token set and the store:
    /// the filter pass, the loop table, and the per-token dialogs. The
    /// dialog build consumes the loop table.
    pub fn rebuild(&mut self) {
        self.prefs = self.store.preferences();
        let filter = NodeFilter::parse(&self.prefs.custom_filter);
        self.outcome = run_filter_pass(
            &self.tokens,
            &filter,
            self.prefs.show_generated,
            self.prefs.expanded_lines,
        );
        let mut loops = LoopTable::build(&self.tokens);
        self.dialogs = build_token_dialogs(&self.tokens, &mut loops, self.prefs.scale_divisor());
        self.clamp_cursor();
        self.hidden.clamp(self.outcome.hidden_custom.len());
    }

    #[must_use]
    pub fn store(&self) -> &PrefsStore {
        &self.store
    }

    #[must_use]
    pub fn preferences(&self) -> &Preferences {
        &self.prefs
    }

    #[must_use]
    pub fn overlay(&self) -> Overlay {
        self.overlay
    }

    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn set_notice(&mut self, message: String) {
        self.notice = Some(message);
    }

    #[must_use]
    pub fn shown_count(&self) -> usize {
        self.outcome.visible.len()
    }

    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.outcome.hidden_total(self.tokens.len())
    }

    /// Index into the token set behind the cursor, if anything is
    /// visible.
    #[must_use]
    pub fn selected_token_index(&self) -> Option<usize> {
        self.outcome.visible.get(self.selected).copied()
    }

    #[must_use]
    pub fn selected_dialog(&self) -> Option<&TokenDialog> {
        self.dialogs.get(self.selected_token_index()?)
    }

    pub fn update_at(&mut self, event: &InputEvent, now: DateTime<Utc>) -> ViewCommand {
        match self.overlay {
            Overlay::FilterEditor => self.update_filter_editor(event, now),
            Overlay::None => {
                let action = translate_input(event);
                self.update_main(action, now)
            }
            Overlay::Dialog => {
                let action = translate_input(event);
                self.update_dialog(action)
            }
            Overlay::Options => {
                let action = translate_input(event);
                self.update_options(action, now)
            }
            Overlay::Hidden => {
                let action = translate_input(event);
                self.update_hidden(action, now)
            }
        }
    }

    fn update_main(&mut self, action: UiAction, now: DateTime<Utc>) -> ViewCommand {
        match action {
            UiAction::Quit => ViewCommand::Quit,
            UiAction::MoveUp => {
                self.selected = self.selected.saturating_sub(1);
                ViewCommand::None
            }
            UiAction::MoveDown => {
                self.selected += 1;
                self.clamp_cursor();
                ViewCommand::None
            }
            UiAction::ScrollUp => {
                self.scroll = self.scroll.saturating_sub(1);
                ViewCommand::None
            }
            UiAction::ScrollDown => {
                self.scroll += 1;
                ViewCommand::None
            }
            UiAction::Confirm => {
                if self.selected_token_index().is_some() {
                    self.overlay = Overlay::Dialog;
                }
                ViewCommand::None
            }
            UiAction::CloseDialogs => {
                self.notice = None;
                ViewCommand::None
            }
            UiAction::ToggleGenerated => {
                self.store.toggle_show_generated(now);
                self.rebuild();
                ViewCommand::Persist
            }
            UiAction::ToggleExpanded => {
                self.store.toggle_expanded_lines(now);
                self.scroll = 0;
                self.rebuild();
                ViewCommand::Persist
            }
            UiAction::ToggleOptions => {
                self.overlay = Overlay::Options;
                ViewCommand::None
            }
            UiAction::RestoreDefaults => self.restore_defaults(),
            UiAction::ShowHiddenNodes => {
                self.hidden.clamp(self.outcome.hidden_custom.len());
                self.overlay = Overlay::Hidden;
                ViewCommand::None
            }
            UiAction::EditFilter => {
                self.editor = FilterEditor::open(&self.prefs.custom_filter);
                self.overlay = Overlay::FilterEditor;
                ViewCommand::None
            }
            UiAction::Refresh => {
                self.rebuild();
                ViewCommand::None
            }
            UiAction::Cancel | UiAction::MoveLeft | UiAction::MoveRight | UiAction::Noop => {
                ViewCommand::None
            }
        }
    }

    fn update_dialog(&mut self, action: UiAction) -> ViewCommand {
        match action {
            UiAction::Quit => ViewCommand::Quit,
            UiAction::Cancel | UiAction::CloseDialogs | UiAction::Confirm => {
                self.overlay = Overlay::None;
                ViewCommand::None
            }
            UiAction::MoveUp => {
                self.selected = self.selected.saturating_sub(1);
                ViewCommand::None
            }
            UiAction::MoveDown => {
                self.selected += 1;
                self.clamp_cursor();
                ViewCommand::None
            }
            _ => ViewCommand::None,
        }
    }

    fn update_options(&mut self, action: UiAction, now: DateTime<Utc>) -> ViewCommand {
        match action {
            UiAction::Quit => ViewCommand::Quit,
            UiAction::Cancel | UiAction::CloseDialogs | UiAction::ToggleOptions => {
                self.overlay = Overlay::None;
                ViewCommand::None
            }
            UiAction::MoveUp => {
                self.options.focus_up();
                ViewCommand::None
            }
            UiAction::MoveDown => {
                self.options.focus_down();
                ViewCommand::None
            }
            UiAction::MoveLeft => self.adjust_option(-1, now),
            UiAction::MoveRight => self.adjust_option(1, now),
            UiAction::RestoreDefaults => self.restore_defaults(),
            _ => ViewCommand::None,
        }
    }

    fn adjust_option(&mut self, step: i32, now: DateTime<Utc>) -> ViewCommand {
        if self.options.adjust(&mut self.store, step, now) {
            self.rebuild();
            ViewCommand::Persist
        } else {
            ViewCommand::None
        }
    }

    fn update_hidden(&mut self, action: UiAction, now: DateTime<Utc>) -> ViewCommand {
        match action {
            UiAction::Quit => ViewCommand::Quit,
            UiAction::Cancel | UiAction::CloseDialogs | UiAction::ShowHiddenNodes => {
                self.overlay = Overlay::None;
                ViewCommand::None
            }
            UiAction::MoveUp => {
                self.hidden
                    .move_selection(-1, self.outcome.hidden_custom.len());
                ViewCommand::None
            }
            UiAction::MoveDown => {
                self.hidden
                    .move_selection(1, self.outcome.hidden_custom.len());
                ViewCommand::None
            }
            UiAction::Confirm => {
                if self
                    .hidden
                    .unhide(&mut self.store, &self.outcome.hidden_custom, now)
                {
                    self.notice = Some("filter entry removed".to_string());
                    self.rebuild();
                    ViewCommand::Persist
                } else {
                    ViewCommand::None
                }
            }
            _ => ViewCommand::None,
        }
    }

    fn update_filter_editor(&mut self, event: &InputEvent, now: DateTime<Utc>) -> ViewCommand {
        let InputEvent::Key(KeyEvent { key, modifiers }) = event else {
            return ViewCommand::None;
        };
        match key {
            Key::Enter => {
                let changed = self.editor.commit(&mut self.store, now);
                self.overlay = Overlay::None;
                if changed {
                    self.notice = Some("filter saved".to_string());
                    self.rebuild();
                    ViewCommand::Persist
                } else {
                    ViewCommand::None
                }
            }
            Key::Escape => {
                self.overlay = Overlay::None;
                ViewCommand::None
            }
            Key::Backspace => {
                self.editor.pop_char();
                ViewCommand::None
            }
            Key::Char(ch) if !modifiers.ctrl => {
                self.editor.push_char(*ch);
                ViewCommand::None
            }
            _ => ViewCommand::None,
        }
    }

    fn restore_defaults(&mut self) -> ViewCommand {
        self.store.restore_defaults();
        self.notice = Some("defaults restored".to_string());
        self.scroll = 0;
        self.rebuild();
        ViewCommand::Persist
    }

    fn clamp_cursor(&mut self) {
        let len = self.outcome.visible.len();
        self.selected = if len == 0 { 0 } else { self.selected.min(len - 1) };
    }

    /// Paint the whole viewer into `frame`.
    pub fn render(&self, frame: &mut RenderFrame) {
        let size = frame.size();
        if size.width == 0 || size.height == 0 {
            return;
        }
        let theme = frame.theme();
        frame.fill_bg(
            Rect {
                x: 0,
                y: 0,
                width: size.width,
                height: size.height,
            },
            TermColor::Ansi256(theme.color(StyleToken::Background)),
        );

        frame.draw_text(
            0,
            0,
            &header_line(
                &self.plan_label,
                self.tokens.len(),
                self.shown_count(),
                self.hidden_count(),
                self.prefs.expanded_lines,
                size.width,
            ),
            TextRole::Accent,
        );

        let footer_y = size.height.saturating_sub(1);
        let hint_y = footer_y.saturating_sub(1);
        frame.draw_text(0, footer_y, &footer_line(size.width), TextRole::Muted);
        match &self.notice {
            Some(message) => {
                let line: String = format!("* {message}").chars().take(size.width).collect();
                frame.draw_text(0, hint_y, &line, TextRole::Waiting);
            }
            None => frame.draw_text(0, hint_y, &hint_line(size.width), TextRole::Muted),
        }

        let content = Rect {
            x: 0,
            y: 1,
            width: size.width,
            height: hint_y.saturating_sub(1),
        };
        if content.height == 0 {
            return;
        }

        let (chart, pane) = if content.width >= DETAIL_PANE_MIN_FRAME {
            let (chart, pane) = content.split_horizontal(content.width - DETAIL_PANE_WIDTH);
            (chart, Some(pane))
        } else {
            (content, None)
        };

        self.render_chart(frame, chart);
        if let Some(pane) = pane {
            self.render_detail_pane(frame, pane);
        }

        match self.overlay {
            Overlay::None => {}
            Overlay::Dialog => self.render_dialog(frame, content),
            Overlay::Options => self.render_options(frame, content),
            Overlay::Hidden => self.render_hidden(frame, content),
            Overlay::FilterEditor => self.render_filter_editor(frame, content),
        }
    }

    fn render_chart(&self, frame: &mut RenderFrame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        if self.tokens.is_empty() {
            frame.draw_text_in_rect(area, 0, 0, "No tokens found", TextRole::Muted);
            return;
        }
        if self.outcome.visible.is_empty() {
            frame.draw_text_in_rect(area, 0, 0, "All nodes hidden", TextRole::Muted);
            return;
        }

        let config = TimelineConfig {
            columns: area.width,
            density: self.prefs.density,
            scale_divisor: self.prefs.scale_divisor(),
        };
        let selected = self.selected_token_index();
        if self.prefs.expanded_lines {
            let rows = plan_expanded(&self.tokens, &self.outcome.visible, &config);
            let label_width = rows
                .iter()
                .map(|row| row.label.chars().count())
                .max()
                .unwrap_or(0)
                .clamp(8, EXPANDED_LABEL_MAX);
            let scroll = self.scroll.min(rows.len().saturating_sub(1));
            draw_expanded(
                frame,
                area,
                &rows,
                selected,
                self.prefs.lane_height,
                label_width,
                scroll,
            );
        } else {
            let plan = plan_timeline(&self.tokens, &self.outcome.visible, &config);
            draw_timeline(frame, area, &plan, selected, self.prefs.lane_height);
        }
    }

    fn render_detail_pane(&self, frame: &mut RenderFrame, pane: Rect) {
        let theme = frame.theme();
        let inner = frame.draw_panel(
            pane,
            "Details",
            BorderStyle::Plain,
            TermColor::Ansi256(theme.color(StyleToken::Muted)),
            TermColor::Ansi256(theme.color(StyleToken::Background)),
        );
        let Some(index) = self.selected_token_index() else {
            frame.draw_text_in_rect(inner, 0, 0, "nothing selected", TextRole::Muted);
            return;
        };
        let Some(token) = self.tokens.get(index) else {
            return;
        };
        for (at, line) in detail_pane_lines(token).iter().enumerate() {
            if at >= inner.height {
                break;
            }
            frame.draw_text_in_rect(inner, 0, at, line, TextRole::Primary);
        }
    }

    fn render_dialog(&self, frame: &mut RenderFrame, area: Rect) {
        let Some(dialog) = self.selected_dialog() else {
            return;
        };
        let lines: Vec<String> = dialog.lines.iter().map(|line| line.text()).collect();
        draw_overlay(
            frame,
            area,
            &WidgetSpec::token_dialog_panel(),
            &dialog.title,
            &lines,
        );
    }

    fn render_options(&self, frame: &mut RenderFrame, area: Rect) {
        let lines = self
            .options
            .render_lines(&self.prefs, area.width.saturating_sub(6));
        draw_overlay(frame, area, &WidgetSpec::options_panel(), "Options", &lines);
    }

    fn render_hidden(&self, frame: &mut RenderFrame, area: Rect) {
        let lines = self.hidden.render_lines(
            &self.outcome.hidden_custom,
            area.width.saturating_sub(6),
            area.height.saturating_sub(4).max(1),
        );
        draw_overlay(
            frame,
            area,
            &WidgetSpec::hidden_nodes_panel(),
            "Hidden nodes",
            &lines,
        );
    }

    fn render_filter_editor(&self, frame: &mut RenderFrame, area: Rect) {
        let lines = self.editor.render_lines(area.width.saturating_sub(6));
        draw_overlay(
            frame,
            area,
            &WidgetSpec::filter_editor_panel(),
            "Custom node filter",
            &lines,
        );
    }
}

/// Draw a centered panel from a widget spec and fill it with lines.
fn draw_overlay(
    frame: &mut RenderFrame,
    area: Rect,
    spec: &WidgetSpec,
    title: &str,
    lines: &[String],
) {
    if area.width < 4 || area.height < 3 {
        return;
    }
    let theme = frame.theme();
    let pad_x = usize::from(spec.padding.left) + usize::from(spec.padding.right);
    let pad_y = usize::from(spec.padding.top) + usize::from(spec.padding.bottom);

    let longest = lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0)
        .max(title.chars().count() + 2);
    let width = (longest + pad_x + 2).max(12).min(area.width);
    let height = (lines.len() + pad_y + 2).min(area.height);
    let rect = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    let border_token = match spec.emphasis {
        Emphasis::Strong => StyleToken::Focus,
        Emphasis::Normal => StyleToken::Accent,
        Emphasis::Subtle => StyleToken::Muted,
    };
    let surface = TermColor::Ansi256(theme.color(StyleToken::Surface));
    let inner = frame.draw_panel(
        rect,
        title,
        spec.border,
        TermColor::Ansi256(theme.color(border_token)),
        surface,
    );

    let fg = frame.color_for_role(TextRole::Primary);
    for (at, line) in lines.iter().enumerate() {
        let y = inner.y + usize::from(spec.padding.top) + at;
        if y >= inner.y + inner.height {
            break;
        }
        let max = inner.width.saturating_sub(usize::from(spec.padding.left));
        let clipped: String = line.chars().take(max).collect();
        frame.draw_styled_text(
            inner.x + usize::from(spec.padding.left),
            y,
            &clipped,
            fg,
            surface,
            false,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use planview_core::prefs::restore_preferences;
    use planview_core::token::{DomainValue, TokenParameter};
    use planview_term::input::{Modifiers, MouseEvent, MouseWheelDirection};
    use planview_term::render::FrameSize;
    use planview_term::style::ThemeSpec;

    fn now() -> DateTime<Utc> {
        match Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).single() {
            Some(ts) => ts,
            None => panic!("fixed timestamp"),
        }
    }

    fn token(id: i64, name: &str, state: &str) -> Token {
        Token {
            id,
            class_names: vec!["Root".to_string(), name.to_string()],
            object_name: "Root".to_string(),
            predicate_name: name.to_string(),
            predicate_instance_name: "Command".to_string(),
            start: DomainValue::Finite(0.0),
            duration: DomainValue::Finite(2.0),
            end: DomainValue::Finite(2.0),
            parameters: vec![TokenParameter {
                name: "state".to_string(),
                value: state.to_string(),
            }],
        }
    }

    fn sample_vm() -> ViewModel {
        let tokens = vec![
            token(1, "Drive", "EXECUTING"),
            token(2, "Steer", "FINISHED"),
            token(3, "Wait__4", "WAITING"),
        ];
        let store = restore_preferences("", now()).store;
        ViewModel::new(tokens, "rover.json".to_string(), store)
    }

    fn key(ch: char) -> InputEvent {
        InputEvent::Key(KeyEvent::plain(Key::Char(ch)))
    }

    fn press(key_name: Key) -> InputEvent {
        InputEvent::Key(KeyEvent::plain(key_name))
    }

    #[test]
    fn generated_tokens_hide_until_toggled() {
        let mut vm = sample_vm();
        assert_eq!(vm.shown_count(), 2);
        assert_eq!(vm.hidden_count(), 1);

        let command = vm.update_at(&key('g'), now());
        assert_eq!(command, ViewCommand::Persist);
        assert_eq!(vm.shown_count(), 3);
        assert_eq!(vm.hidden_count(), 0);
    }

    #[test]
    fn cursor_clamps_to_the_visible_list() {
        let mut vm = sample_vm();
        vm.update_at(&press(Key::Down), now());
        vm.update_at(&press(Key::Down), now());
        vm.update_at(&press(Key::Down), now());
        assert_eq!(vm.selected_token_index(), Some(1));
        vm.update_at(&press(Key::Up), now());
        assert_eq!(vm.selected_token_index(), Some(0));
    }

    #[test]
    fn confirm_opens_the_dialog_for_the_selection() {
        let mut vm = sample_vm();
        vm.update_at(&press(Key::Down), now());
        vm.update_at(&press(Key::Enter), now());
        assert_eq!(vm.overlay(), Overlay::Dialog);
        let title = match vm.selected_dialog() {
            Some(dialog) => dialog.title.clone(),
            None => panic!("dialog for selection"),
        };
        assert_eq!(title, "Root.Steer");

        vm.update_at(&key('c'), now());
        assert_eq!(vm.overlay(), Overlay::None);
    }

    #[test]
    fn options_adjust_persists_and_rebuilds() {
        let mut vm = sample_vm();
        vm.update_at(&key('o'), now());
        assert_eq!(vm.overlay(), Overlay::Options);

        let command = vm.update_at(&press(Key::Right), now());
        assert_eq!(command, ViewCommand::Persist);
        assert_eq!(vm.preferences().density, 11);

        vm.update_at(&press(Key::Escape), now());
        assert_eq!(vm.overlay(), Overlay::None);
    }

    #[test]
    fn filter_editor_commit_hides_matching_nodes() {
        let mut vm = sample_vm();
        let opened = vm.update_at(&key('/'), now());
        assert_eq!(opened, ViewCommand::None);
        assert_eq!(vm.overlay(), Overlay::FilterEditor);

        for ch in "Root.Drive".chars() {
            vm.update_at(&key(ch), now());
        }
        let command = vm.update_at(&press(Key::Enter), now());
        assert_eq!(command, ViewCommand::Persist);
        assert_eq!(vm.overlay(), Overlay::None);
        assert_eq!(vm.shown_count(), 1);
        assert_eq!(vm.preferences().custom_filter, "Root.Drive");
    }

    #[test]
    fn filter_editor_escape_discards_edits() {
        let mut vm = sample_vm();
        vm.update_at(&key('/'), now());
        vm.update_at(&key('x'), now());
        let command = vm.update_at(&press(Key::Escape), now());
        assert_eq!(command, ViewCommand::None);
        assert_eq!(vm.preferences().custom_filter, "");
        assert_eq!(vm.shown_count(), 2);
    }

    #[test]
    fn unhide_restores_a_filtered_node() {
        let mut vm = sample_vm();
        vm.update_at(&key('/'), now());
        for ch in "Root.Drive".chars() {
            vm.update_at(&key(ch), now());
        }
        vm.update_at(&press(Key::Enter), now());
        assert_eq!(vm.shown_count(), 1);

        vm.update_at(&key('u'), now());
        assert_eq!(vm.overlay(), Overlay::Hidden);
        let command = vm.update_at(&press(Key::Enter), now());
        assert_eq!(command, ViewCommand::Persist);
        assert_eq!(vm.shown_count(), 2);
        assert_eq!(vm.preferences().custom_filter, "");
    }

    #[test]
    fn restore_defaults_keeps_the_filter_text() {
        let mut vm = sample_vm();
        vm.update_at(&key('/'), now());
        for ch in "Nope*".chars() {
            vm.update_at(&key(ch), now());
        }
        vm.update_at(&press(Key::Enter), now());
        vm.update_at(&key('g'), now());
        assert!(vm.preferences().show_generated);

        let command = vm.update_at(&key('d'), now());
        assert_eq!(command, ViewCommand::Persist);
        assert!(!vm.preferences().show_generated);
        assert_eq!(vm.preferences().custom_filter, "Nope*");
        assert_eq!(vm.notice(), Some("defaults restored"));
    }

    #[test]
    fn quit_works_from_main_and_overlays() {
        let mut vm = sample_vm();
        assert_eq!(vm.update_at(&key('q'), now()), ViewCommand::Quit);
        vm.update_at(&key('o'), now());
        assert_eq!(vm.update_at(&key('q'), now()), ViewCommand::Quit);
    }

    #[test]
    fn typing_q_in_the_filter_editor_is_text_not_quit() {
        let mut vm = sample_vm();
        vm.update_at(&key('/'), now());
        let command = vm.update_at(&key('q'), now());
        assert_eq!(command, ViewCommand::None);
        assert_eq!(vm.overlay(), Overlay::FilterEditor);
    }

    #[test]
    fn wheel_scroll_moves_the_expanded_view() {
        let mut vm = sample_vm();
        let down = InputEvent::Mouse(MouseEvent {
            wheel: Some(MouseWheelDirection::Down),
        });
        vm.update_at(&down, now());
        vm.update_at(&down, now());
        assert_eq!(vm.scroll, 2);
        let up = InputEvent::Mouse(MouseEvent {
            wheel: Some(MouseWheelDirection::Up),
        });
        vm.update_at(&up, now());
        assert_eq!(vm.scroll, 1);
    }

    #[test]
    fn ctrl_c_reaches_close_dialogs_nowhere() {
        let mut vm = sample_vm();
        vm.update_at(&press(Key::Enter), now());
        assert_eq!(vm.overlay(), Overlay::Dialog);
        let ctrl_c = InputEvent::Key(KeyEvent {
            key: Key::Char('c'),
            modifiers: Modifiers {
                shift: false,
                ctrl: true,
                alt: false,
            },
        });
        vm.update_at(&ctrl_c, now());
        assert_eq!(vm.overlay(), Overlay::Dialog, "ctrl+c is the runtime's interrupt");
    }

    #[test]
    fn render_paints_header_chart_and_footer() {
        let vm = sample_vm();
        let mut frame = RenderFrame::new(
            FrameSize {
                width: 80,
                height: 24,
            },
            ThemeSpec::default(),
        );
        vm.render(&mut frame);
        let header = frame.row_text(0);
        assert!(header.contains("tokens:3 shown:2 hidden:1"));
        assert!(header.contains("layout:expanded"));
        let footer = frame.row_text(23);
        assert!(footer.contains("[c] Close all dialogs"));
        let body = frame.snapshot();
        assert!(body.contains("Root.Drive"));
    }

    #[test]
    fn render_shows_the_dialog_title_when_open() {
        let mut vm = sample_vm();
        vm.update_at(&press(Key::Enter), now());
        let mut frame = RenderFrame::new(
            FrameSize {
                width: 80,
                height: 24,
            },
            ThemeSpec::default(),
        );
        vm.render(&mut frame);
        let body = frame.snapshot();
        assert!(body.contains("Root.Drive"));
        assert!(body.contains("Execution order: 1"));
    }

    #[test]
    fn render_survives_tiny_frames() {
        let vm = sample_vm();
        for (width, height) in [(0, 0), (1, 1), (5, 2), (12, 3)] {
            let mut frame = RenderFrame::new(FrameSize { width, height }, ThemeSpec::default());
            vm.render(&mut frame);
        }
    }

    #[test]
    fn empty_token_set_renders_a_placeholder() {
        let store = restore_preferences("", now()).store;
        let vm = ViewModel::new(Vec::new(), "empty.json".to_string(), store);
        let mut frame = RenderFrame::new(
            FrameSize {
                width: 40,
                height: 10,
            },
            ThemeSpec::default(),
        );
        vm.render(&mut frame);
        assert!(frame.snapshot().contains("No tokens found"));
    }
}
