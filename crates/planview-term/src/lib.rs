//! planview-term: terminal presentation toolkit for the planview viewer.
//!
//! Pure-Rust cell-grid rendering, theme/style tokens keyed to plan-node
//! states, widget specs for the viewer's panels, and translation of raw
//! terminal input into viewer actions. App crates import only these
//! abstractions; nothing here touches the terminal directly.

/// Stable crate label used by bootstrap smoke tests.
pub fn crate_label() -> &'static str {
    "planview-term"
}

/// Style and theme primitives consumed by the viewer crates.
pub mod style {
    /// Logical theme choices supported by the toolkit.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum ThemeKind {
        Dark,
        Light,
        HighContrast,
    }

    /// Stable style tokens exposed to the viewer. The state tokens
    /// follow the executor's node lifecycle.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum StyleToken {
        Background,
        Surface,
        Foreground,
        Muted,
        Accent,
        Executing,
        Finished,
        Failed,
        Waiting,
        Focus,
    }

    /// Palette uses terminal 256-color indexes for portability.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Palette {
        pub background: u8,
        pub surface: u8,
        pub foreground: u8,
        pub muted: u8,
        pub accent: u8,
        pub executing: u8,
        pub finished: u8,
        pub failed: u8,
        pub waiting: u8,
        pub focus: u8,
    }

    /// Typography emphasis policy per theme.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TypographySpec {
        pub accent_bold: bool,
        pub executing_bold: bool,
        pub failed_bold: bool,
        pub waiting_bold: bool,
        pub muted_dim: bool,
        pub focus_underline: bool,
    }

    /// Theme specification exposed to the viewer crates.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ThemeSpec {
        pub kind: ThemeKind,
        pub palette: Palette,
        pub typography: TypographySpec,
    }

    impl ThemeSpec {
        /// Returns the color index for a stable style token.
        #[must_use]
        pub fn color(self, token: StyleToken) -> u8 {
            match token {
                StyleToken::Background => self.palette.background,
                StyleToken::Surface => self.palette.surface,
                StyleToken::Foreground => self.palette.foreground,
                StyleToken::Muted => self.palette.muted,
                StyleToken::Accent => self.palette.accent,
                StyleToken::Executing => self.palette.executing,
                StyleToken::Finished => self.palette.finished,
                StyleToken::Failed => self.palette.failed,
                StyleToken::Waiting => self.palette.waiting,
                StyleToken::Focus => self.palette.focus,
            }
        }

        /// Builds a theme for the requested style family.
        #[must_use]
        pub fn for_kind(kind: ThemeKind) -> Self {
            let palette = match kind {
                ThemeKind::Dark => Palette {
                    background: 16,
                    surface: 234,
                    foreground: 251,
                    muted: 243,
                    accent: 44,
                    executing: 40,
                    finished: 68,
                    failed: 196,
                    waiting: 178,
                    focus: 81,
                },
                ThemeKind::Light => Palette {
                    background: 255,
                    surface: 253,
                    foreground: 235,
                    muted: 245,
                    accent: 26,
                    executing: 28,
                    finished: 24,
                    failed: 124,
                    waiting: 130,
                    focus: 20,
                },
                ThemeKind::HighContrast => Palette {
                    background: 16,
                    surface: 233,
                    foreground: 231,
                    muted: 249,
                    accent: 51,
                    executing: 118,
                    finished: 87,
                    failed: 203,
                    waiting: 227,
                    focus: 228,
                },
            };
            let typography = match kind {
                ThemeKind::Dark => TypographySpec {
                    accent_bold: true,
                    executing_bold: false,
                    failed_bold: true,
                    waiting_bold: false,
                    muted_dim: true,
                    focus_underline: true,
                },
                ThemeKind::Light => TypographySpec {
                    accent_bold: true,
                    executing_bold: false,
                    failed_bold: true,
                    waiting_bold: false,
                    muted_dim: false,
                    focus_underline: true,
                },
                ThemeKind::HighContrast => TypographySpec {
                    accent_bold: true,
                    executing_bold: true,
                    failed_bold: true,
                    waiting_bold: true,
                    muted_dim: false,
                    focus_underline: true,
                },
            };
            Self {
                kind,
                palette,
                typography,
            }
        }
    }

    impl Default for ThemeSpec {
        fn default() -> Self {
            Self::for_kind(ThemeKind::Dark)
        }
    }
}

/// Render and frame primitives consumed by the viewer crates.
pub mod render {
    use super::style::{StyleToken, ThemeSpec};
    use super::widgets::BorderStyle;

    /// Terminal color: ANSI256 index or 24-bit RGB.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum TermColor {
        Ansi256(u8),
        Rgb(u8, u8, u8),
    }

    impl TermColor {
        /// Convert to ANSI256 index (lossy for RGB).
        #[must_use]
        pub fn as_ansi256(self) -> u8 {
            match self {
                Self::Ansi256(idx) => idx,
                Self::Rgb(r, g, b) => rgb_to_ansi256(r, g, b),
            }
        }
    }

    fn rgb_to_ansi256(r: u8, g: u8, b: u8) -> u8 {
        if r == g && g == b {
            // Greyscale ramp, with the cube corners at the extremes.
            if r < 8 {
                return 16;
            }
            if r > 248 {
                return 231;
            }
            return ((u16::from(r) - 8) * 24 / 247) as u8 + 232;
        }
        16 + 36 * cube_component(r) + 6 * cube_component(g) + cube_component(b)
    }

    fn cube_component(value: u8) -> u8 {
        const LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];
        let mut best = 0u8;
        let mut best_dist = u8::MAX;
        for (i, level) in LEVELS.iter().enumerate() {
            let dist = u8::abs_diff(value, *level);
            if dist < best_dist {
                best_dist = dist;
                best = i as u8;
            }
        }
        best
    }

    /// Frame dimensions in terminal cells.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FrameSize {
        pub width: usize,
        pub height: usize,
    }

    /// A rectangular region within a frame.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Rect {
        pub x: usize,
        pub y: usize,
        pub width: usize,
        pub height: usize,
    }

    impl Rect {
        /// Inner region after removing a one-cell border.
        #[must_use]
        pub fn inner(self) -> Self {
            if self.width < 2 || self.height < 2 {
                return Self {
                    x: self.x,
                    y: self.y,
                    width: 0,
                    height: 0,
                };
            }
            Self {
                x: self.x + 1,
                y: self.y + 1,
                width: self.width - 2,
                height: self.height - 2,
            }
        }

        /// Split into left (width=`left_width`) and right.
        #[must_use]
        pub fn split_horizontal(self, left_width: usize) -> (Self, Self) {
            let left_w = left_width.min(self.width);
            let right_w = self.width.saturating_sub(left_w);
            (
                Self {
                    x: self.x,
                    y: self.y,
                    width: left_w,
                    height: self.height,
                },
                Self {
                    x: self.x + left_w,
                    y: self.y,
                    width: right_w,
                    height: self.height,
                },
            )
        }

        /// Split into top (height=`top_height`) and bottom.
        #[must_use]
        pub fn split_vertical(self, top_height: usize) -> (Self, Self) {
            let top_h = top_height.min(self.height);
            let bot_h = self.height.saturating_sub(top_h);
            (
                Self {
                    x: self.x,
                    y: self.y,
                    width: self.width,
                    height: top_h,
                },
                Self {
                    x: self.x,
                    y: self.y + top_h,
                    width: self.width,
                    height: bot_h,
                },
            )
        }
    }

    /// Cell style represented as terminal colors and text attributes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CellStyle {
        pub fg: TermColor,
        pub bg: TermColor,
        pub bold: bool,
        pub dim: bool,
        pub underline: bool,
    }

    /// A single frame cell.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FrameCell {
        pub glyph: char,
        pub style: CellStyle,
    }

    /// Semantic role for rendered text. The state roles mirror the
    /// executor's node lifecycle so bars and labels agree on color.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum TextRole {
        Primary,
        Muted,
        Accent,
        Executing,
        Finished,
        Failed,
        Waiting,
        Focus,
    }

    struct BorderChars {
        top_left: char,
        top_right: char,
        bottom_left: char,
        bottom_right: char,
        horizontal: char,
        vertical: char,
    }

    fn border_chars(style: BorderStyle) -> BorderChars {
        match style {
            BorderStyle::Rounded => BorderChars {
                top_left: '╭',
                top_right: '╮',
                bottom_left: '╰',
                bottom_right: '╯',
                horizontal: '─',
                vertical: '│',
            },
            BorderStyle::Plain => BorderChars {
                top_left: '┌',
                top_right: '┐',
                bottom_left: '└',
                bottom_right: '┘',
                horizontal: '─',
                vertical: '│',
            },
            BorderStyle::Heavy => BorderChars {
                top_left: '┏',
                top_right: '┓',
                bottom_left: '┗',
                bottom_right: '┛',
                horizontal: '━',
                vertical: '┃',
            },
        }
    }

    /// Owned cell grid the viewer draws one pass into, then either
    /// diffs onto the terminal or dumps as a text snapshot.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct RenderFrame {
        size: FrameSize,
        cells: Vec<FrameCell>,
        theme: ThemeSpec,
    }

    impl RenderFrame {
        /// Create a blank frame using the provided theme.
        #[must_use]
        pub fn new(size: FrameSize, theme: ThemeSpec) -> Self {
            let default_cell = FrameCell {
                glyph: ' ',
                style: CellStyle {
                    fg: TermColor::Ansi256(theme.color(StyleToken::Foreground)),
                    bg: TermColor::Ansi256(theme.color(StyleToken::Background)),
                    bold: false,
                    dim: false,
                    underline: false,
                },
            };
            Self {
                size,
                cells: vec![default_cell; size.width.saturating_mul(size.height)],
                theme,
            }
        }

        #[must_use]
        pub fn theme(&self) -> ThemeSpec {
            self.theme
        }

        #[must_use]
        pub fn size(&self) -> FrameSize {
            self.size
        }

        /// Returns one frame cell for assertions/snapshot helpers.
        #[must_use]
        pub fn cell(&self, x: usize, y: usize) -> Option<FrameCell> {
            if x >= self.size.width || y >= self.size.height {
                return None;
            }
            Some(self.cells[y * self.size.width + x])
        }

        /// Write a single cell, clipped to frame bounds.
        pub fn set_cell(&mut self, x: usize, y: usize, cell: FrameCell) {
            if x >= self.size.width || y >= self.size.height {
                return;
            }
            self.cells[y * self.size.width + x] = cell;
        }

        /// Draw text on a single row, clipped to frame width.
        pub fn draw_text(&mut self, x: usize, y: usize, text: &str, role: TextRole) {
            if y >= self.size.height || x >= self.size.width {
                return;
            }
            let style = self.role_style(role);
            for (offset, glyph) in text.chars().enumerate() {
                let col = x + offset;
                if col >= self.size.width {
                    break;
                }
                self.cells[y * self.size.width + col] = FrameCell { glyph, style };
            }
        }

        /// Draw text with explicit foreground/background colors.
        pub fn draw_styled_text(
            &mut self,
            x: usize,
            y: usize,
            text: &str,
            fg: TermColor,
            bg: TermColor,
            bold: bool,
        ) {
            if y >= self.size.height || x >= self.size.width {
                return;
            }
            let style = CellStyle {
                fg,
                bg,
                bold,
                dim: false,
                underline: false,
            };
            for (offset, glyph) in text.chars().enumerate() {
                let col = x + offset;
                if col >= self.size.width {
                    break;
                }
                self.cells[y * self.size.width + col] = FrameCell { glyph, style };
            }
        }

        /// Draw a bordered panel with a title into a rectangular region.
        ///
        /// Returns the inner `Rect` (content area inside the border) for
        /// subsequent drawing.
        pub fn draw_panel(
            &mut self,
            rect: Rect,
            title: &str,
            border: BorderStyle,
            border_color: TermColor,
            bg: TermColor,
        ) -> Rect {
            if rect.width < 2 || rect.height < 2 {
                return Rect {
                    x: rect.x,
                    y: rect.y,
                    width: 0,
                    height: 0,
                };
            }

            let chars = border_chars(border);
            let border_style = CellStyle {
                fg: border_color,
                bg,
                bold: false,
                dim: false,
                underline: false,
            };

            self.fill_bg(rect, bg);

            let right = rect.x + rect.width - 1;
            let bottom = rect.y + rect.height - 1;
            self.set_border_cell(rect.x, rect.y, chars.top_left, border_style);
            self.set_border_cell(right, rect.y, chars.top_right, border_style);
            self.set_border_cell(rect.x, bottom, chars.bottom_left, border_style);
            self.set_border_cell(right, bottom, chars.bottom_right, border_style);
            for col in (rect.x + 1)..right {
                self.set_border_cell(col, rect.y, chars.horizontal, border_style);
                self.set_border_cell(col, bottom, chars.horizontal, border_style);
            }
            for row in (rect.y + 1)..bottom {
                self.set_border_cell(rect.x, row, chars.vertical, border_style);
                self.set_border_cell(right, row, chars.vertical, border_style);
            }

            // Title overlaid on the top border: ╭─ Title ─╮
            if !title.is_empty() && rect.width > 4 {
                let title_style = CellStyle {
                    bold: true,
                    ..border_style
                };
                let truncated: String = title.chars().take(rect.width - 4).collect();
                let framed = format!(" {truncated} ");
                for (i, ch) in framed.chars().enumerate() {
                    let col = rect.x + 2 + i;
                    if col >= right {
                        break;
                    }
                    self.set_cell(
                        col,
                        rect.y,
                        FrameCell {
                            glyph: ch,
                            style: title_style,
                        },
                    );
                }
            }

            rect.inner()
        }

        fn set_border_cell(&mut self, x: usize, y: usize, glyph: char, style: CellStyle) {
            self.set_cell(x, y, FrameCell { glyph, style });
        }

        /// Draw a horizontal rule across a row.
        pub fn draw_horizontal_rule(&mut self, x: usize, y: usize, width: usize, role: TextRole) {
            let style = CellStyle {
                bold: false,
                dim: false,
                underline: false,
                ..self.role_style(role)
            };
            for col in x..x + width {
                if col >= self.size.width || y >= self.size.height {
                    break;
                }
                self.set_cell(col, y, FrameCell { glyph: '─', style });
            }
        }

        /// Fill a rectangular region with a background color.
        pub fn fill_bg(&mut self, rect: Rect, bg: TermColor) {
            let fg = TermColor::Ansi256(self.theme.color(StyleToken::Foreground));
            let style = CellStyle {
                fg,
                bg,
                bold: false,
                dim: false,
                underline: false,
            };
            for row in rect.y..rect.y + rect.height {
                for col in rect.x..rect.x + rect.width {
                    if col < self.size.width && row < self.size.height {
                        self.set_cell(col, row, FrameCell { glyph: ' ', style });
                    }
                }
            }
        }

        /// Draw text within a rect, clipped to rect bounds.
        pub fn draw_text_in_rect(
            &mut self,
            rect: Rect,
            x_offset: usize,
            y_offset: usize,
            text: &str,
            role: TextRole,
        ) {
            let abs_x = rect.x + x_offset;
            let abs_y = rect.y + y_offset;
            if abs_y >= rect.y + rect.height {
                return;
            }
            let max_chars = (rect.x + rect.width).saturating_sub(abs_x);
            let style = self.role_style(role);
            for (offset, glyph) in text.chars().take(max_chars).enumerate() {
                let col = abs_x + offset;
                if col >= self.size.width || abs_y >= self.size.height {
                    break;
                }
                self.cells[abs_y * self.size.width + col] = FrameCell { glyph, style };
            }
        }

        #[must_use]
        pub fn row_text(&self, y: usize) -> String {
            if y >= self.size.height {
                return String::new();
            }
            let start = y * self.size.width;
            let end = start + self.size.width;
            self.cells[start..end]
                .iter()
                .map(|cell| cell.glyph)
                .collect()
        }

        /// Text-only snapshot for lightweight regression tests.
        #[must_use]
        pub fn snapshot(&self) -> String {
            (0..self.size.height)
                .map(|row| self.row_text(row))
                .collect::<Vec<_>>()
                .join("\n")
        }

        /// Returns the `TermColor` for a semantic role.
        #[must_use]
        pub fn color_for_role(&self, role: TextRole) -> TermColor {
            TermColor::Ansi256(match role {
                TextRole::Primary => self.theme.color(StyleToken::Foreground),
                TextRole::Muted => self.theme.color(StyleToken::Muted),
                TextRole::Accent => self.theme.color(StyleToken::Accent),
                TextRole::Executing => self.theme.color(StyleToken::Executing),
                TextRole::Finished => self.theme.color(StyleToken::Finished),
                TextRole::Failed => self.theme.color(StyleToken::Failed),
                TextRole::Waiting => self.theme.color(StyleToken::Waiting),
                TextRole::Focus => self.theme.color(StyleToken::Focus),
            })
        }

        fn role_style(&self, role: TextRole) -> CellStyle {
            let typography = self.theme.typography;
            let (bold, dim, underline) = match role {
                TextRole::Primary => (false, false, false),
                TextRole::Muted => (false, typography.muted_dim, false),
                TextRole::Accent => (typography.accent_bold, false, false),
                TextRole::Executing => (typography.executing_bold, false, false),
                TextRole::Finished => (false, false, false),
                TextRole::Failed => (typography.failed_bold, false, false),
                TextRole::Waiting => (typography.waiting_bold, false, false),
                TextRole::Focus => (true, false, typography.focus_underline),
            };
            CellStyle {
                fg: self.color_for_role(role),
                bg: TermColor::Ansi256(self.theme.color(StyleToken::Background)),
                bold,
                dim,
                underline,
            }
        }
    }
}

/// Stable widget primitives consumed by the viewer crates.
pub mod widgets {
    /// Border treatment exposed by the toolkit.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum BorderStyle {
        Plain,
        Rounded,
        Heavy,
    }

    /// Text alignment for widget headers.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum TextAlign {
        Left,
        Center,
        Right,
    }

    /// Visual emphasis for viewer surface blocks.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Emphasis {
        Subtle,
        Normal,
        Strong,
    }

    /// Stable padding primitive used by widget specs.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Padding {
        pub top: u8,
        pub right: u8,
        pub bottom: u8,
        pub left: u8,
    }

    impl Padding {
        pub const COMPACT: Self = Self {
            top: 0,
            right: 1,
            bottom: 0,
            left: 1,
        };

        pub const ROOMY: Self = Self {
            top: 1,
            right: 2,
            bottom: 1,
            left: 2,
        };
    }

    /// Stable block primitive for the viewer's overlay panels.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct WidgetSpec {
        pub id: &'static str,
        pub title: &'static str,
        pub border: BorderStyle,
        pub align: TextAlign,
        pub emphasis: Emphasis,
        pub padding: Padding,
    }

    impl WidgetSpec {
        /// Per-token detail dialog. The title line is replaced by the
        /// token's qualified name at draw time.
        #[must_use]
        pub fn token_dialog_panel() -> Self {
            Self {
                id: "viewer.dialog",
                title: "Token",
                border: BorderStyle::Rounded,
                align: TextAlign::Left,
                emphasis: Emphasis::Strong,
                padding: Padding::ROOMY,
            }
        }

        /// Options block: density, lane height, scale radios.
        #[must_use]
        pub fn options_panel() -> Self {
            Self {
                id: "viewer.options",
                title: "Options",
                border: BorderStyle::Plain,
                align: TextAlign::Left,
                emphasis: Emphasis::Normal,
                padding: Padding::COMPACT,
            }
        }

        /// Listing of nodes hidden by the custom filter.
        #[must_use]
        pub fn hidden_nodes_panel() -> Self {
            Self {
                id: "viewer.hidden",
                title: "Hidden nodes",
                border: BorderStyle::Plain,
                align: TextAlign::Left,
                emphasis: Emphasis::Normal,
                padding: Padding::COMPACT,
            }
        }

        /// Single-line editor for the custom filter text.
        #[must_use]
        pub fn filter_editor_panel() -> Self {
            Self {
                id: "viewer.filter",
                title: "Custom node filter",
                border: BorderStyle::Heavy,
                align: TextAlign::Left,
                emphasis: Emphasis::Subtle,
                padding: Padding::COMPACT,
            }
        }
    }
}

/// Snapshot helpers for frame-based regression tests.
pub mod snapshot;

/// Stable input/event abstraction shielding the viewer from raw
/// terminal key models.
pub mod input {
    /// Canonical key set exposed to the viewer crates.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Key {
        Char(char),
        Enter,
        Escape,
        Tab,
        Backspace,
        Up,
        Down,
        Left,
        Right,
    }

    /// Canonical keyboard modifiers.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Modifiers {
        pub shift: bool,
        pub ctrl: bool,
        pub alt: bool,
    }

    impl Modifiers {
        #[must_use]
        pub const fn none() -> Self {
            Self {
                shift: false,
                ctrl: false,
                alt: false,
            }
        }
    }

    /// Canonical key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct KeyEvent {
        pub key: Key,
        pub modifiers: Modifiers,
    }

    impl KeyEvent {
        #[must_use]
        pub const fn plain(key: Key) -> Self {
            Self {
                key,
                modifiers: Modifiers::none(),
            }
        }
    }

    /// Canonical mouse wheel direction.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum MouseWheelDirection {
        Up,
        Down,
    }

    /// Canonical mouse event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct MouseEvent {
        pub wheel: Option<MouseWheelDirection>,
    }

    /// Canonical frame resize event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ResizeEvent {
        pub width: usize,
        pub height: usize,
    }

    /// Stable input stream event consumed by the viewer crates.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum InputEvent {
        Key(KeyEvent),
        Mouse(MouseEvent),
        Resize(ResizeEvent),
        Tick,
    }

    /// High-level viewer actions produced by input translation. The
    /// toggle/reset actions correspond one-to-one with the footer.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum UiAction {
        Noop,
        Quit,
        MoveUp,
        MoveDown,
        MoveLeft,
        MoveRight,
        Confirm,
        Cancel,
        Refresh,
        CloseDialogs,
        ToggleGenerated,
        ToggleExpanded,
        ToggleOptions,
        RestoreDefaults,
        ShowHiddenNodes,
        EditFilter,
        ScrollUp,
        ScrollDown,
    }

    /// Translator trait allowing alternate keymaps without exposing
    /// raw terminal APIs.
    pub trait InputTranslator {
        fn translate(&self, event: &InputEvent) -> UiAction;
    }

    /// Default viewer keymap.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
    pub struct DefaultInputTranslator;

    impl InputTranslator for DefaultInputTranslator {
        fn translate(&self, event: &InputEvent) -> UiAction {
            match event {
                InputEvent::Key(KeyEvent { key: Key::Up, .. })
                | InputEvent::Key(KeyEvent {
                    key: Key::Char('k'),
                    ..
                }) => UiAction::MoveUp,
                InputEvent::Key(KeyEvent { key: Key::Down, .. })
                | InputEvent::Key(KeyEvent {
                    key: Key::Char('j'),
                    ..
                }) => UiAction::MoveDown,
                InputEvent::Key(KeyEvent { key: Key::Left, .. })
                | InputEvent::Key(KeyEvent {
                    key: Key::Char('h'),
                    ..
                }) => UiAction::MoveLeft,
                InputEvent::Key(KeyEvent {
                    key: Key::Right, ..
                })
                | InputEvent::Key(KeyEvent {
                    key: Key::Char('l'),
                    ..
                }) => UiAction::MoveRight,
                InputEvent::Key(KeyEvent {
                    key: Key::Enter, ..
                }) => UiAction::Confirm,
                InputEvent::Key(KeyEvent {
                    key: Key::Escape, ..
                }) => UiAction::Cancel,
                InputEvent::Key(KeyEvent {
                    key: Key::Char('c'),
                    modifiers,
                }) if !modifiers.ctrl => UiAction::CloseDialogs,
                InputEvent::Key(KeyEvent {
                    key: Key::Char('g'),
                    ..
                }) => UiAction::ToggleGenerated,
                InputEvent::Key(KeyEvent {
                    key: Key::Char('e'),
                    ..
                }) => UiAction::ToggleExpanded,
                InputEvent::Key(KeyEvent {
                    key: Key::Char('o'),
                    ..
                }) => UiAction::ToggleOptions,
                InputEvent::Key(KeyEvent {
                    key: Key::Char('d'),
                    ..
                }) => UiAction::RestoreDefaults,
                InputEvent::Key(KeyEvent {
                    key: Key::Char('u'),
                    ..
                }) => UiAction::ShowHiddenNodes,
                InputEvent::Key(KeyEvent {
                    key: Key::Char('/'),
                    ..
                }) => UiAction::EditFilter,
                InputEvent::Key(KeyEvent {
                    key: Key::Char('r'),
                    ..
                }) => UiAction::Refresh,
                InputEvent::Key(KeyEvent {
                    key: Key::Char('q'),
                    ..
                }) => UiAction::Quit,
                InputEvent::Mouse(MouseEvent {
                    wheel: Some(MouseWheelDirection::Up),
                }) => UiAction::ScrollUp,
                InputEvent::Mouse(MouseEvent {
                    wheel: Some(MouseWheelDirection::Down),
                }) => UiAction::ScrollDown,
                InputEvent::Resize(_) | InputEvent::Tick => UiAction::Refresh,
                _ => UiAction::Noop,
            }
        }
    }

    /// Convenience function for consumers that do not need a custom
    /// keymap.
    #[must_use]
    pub fn translate_input(event: &InputEvent) -> UiAction {
        DefaultInputTranslator.translate(event)
    }
}
