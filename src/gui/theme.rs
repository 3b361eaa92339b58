use eframe::egui::{
    self,
    Color32,
    RichText,
    Stroke,
    Visuals,
};
use egui::style::{
    Selection,
    WidgetVisuals,
    Widgets,
};

/// Colour family of a response panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Error,
    Neutral,
}

#[derive(Debug, Clone, Copy)]
pub struct PanelColors {
    pub fill: Color32,
    pub stroke: Color32,
    pub text: Color32,
}

#[derive(Clone)]
pub struct Theme {
    dark: ThemeDetails,
    light: ThemeDetails,
}

impl Default for Theme {
    fn default() -> Self {
        Self::field()
    }
}

impl Theme {
    pub fn field() -> Self {
        Theme { dark: ThemeDetails::field_night(), light: ThemeDetails::field_day() }
    }

    fn details(&self, ctx: &egui::Context) -> &ThemeDetails {
        if ctx.style().visuals.dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }

    pub fn title(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).size(28.0).strong().color(self.details(ctx).sky)
    }

    pub fn muted(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).size(12.0).color(self.details(ctx).comment)
    }

    pub fn sky(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).sky
    }

    pub fn teal(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).teal
    }

    pub fn panel(&self, ctx: &egui::Context, tone: Tone) -> PanelColors {
        let details = self.details(ctx);
        let base = match tone {
            Tone::Info => details.blue,
            Tone::Success => details.green,
            Tone::Error => details.red,
            Tone::Neutral => details.comment,
        };

        PanelColors {
            fill: blend_colors(details.background, base, 0.15),
            stroke: base,
            text: blend_colors(details.foreground, base, 0.6),
        }
    }
}

#[derive(Clone)]
struct ThemeDetails {
    background: Color32,
    background_dark: Color32,
    background_light: Color32,
    foreground: Color32,
    selection: Color32,
    comment: Color32,
    red: Color32,
    green: Color32,
    blue: Color32,
    sky: Color32,
    teal: Color32,
}

impl ThemeDetails {
    fn field_night() -> Self {
        Self {
            background: Color32::from_rgb(0x1e, 0x29, 0x3b),
            background_dark: Color32::from_rgb(0x0f, 0x17, 0x2a),
            background_light: Color32::from_rgb(0x33, 0x41, 0x55),
            foreground: Color32::from_rgb(0xe2, 0xe8, 0xf0),
            selection: Color32::from_rgb(0x47, 0x55, 0x69),
            comment: Color32::from_rgb(0x94, 0xa3, 0xb8),
            red: Color32::from_rgb(0xf8, 0x71, 0x71),
            green: Color32::from_rgb(0x4a, 0xde, 0x80),
            blue: Color32::from_rgb(0x60, 0xa5, 0xfa),
            sky: Color32::from_rgb(0x38, 0xbd, 0xf8),
            teal: Color32::from_rgb(0x2d, 0xd4, 0xbf),
        }
    }

    fn field_day() -> Self {
        Self {
            background: Color32::from_rgb(0xff, 0xff, 0xff),
            background_dark: Color32::from_rgb(0xf1, 0xf5, 0xf9),
            background_light: Color32::from_rgb(0xf8, 0xfa, 0xfc),
            foreground: Color32::from_rgb(0x33, 0x41, 0x55),
            selection: Color32::from_rgb(0xe0, 0xf2, 0xfe),
            comment: Color32::from_rgb(0x64, 0x74, 0x8b),
            red: Color32::from_rgb(0xb9, 0x1c, 0x1c),
            green: Color32::from_rgb(0x15, 0x80, 0x3d),
            blue: Color32::from_rgb(0x1d, 0x4e, 0xd8),
            sky: Color32::from_rgb(0x03, 0x69, 0xa1),
            teal: Color32::from_rgb(0x0d, 0x94, 0x88),
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
}

pub fn blend_colors(color_a: Color32, color_b: Color32, t: f32) -> Color32 {
    let blend_channel = |a: u8, b: u8| ((1.0 - t) * (a as f32) + t * (b as f32)).round() as u8;
    Color32::from_rgba_unmultiplied(
        blend_channel(color_a.r(), color_b.r()),
        blend_channel(color_a.g(), color_b.g()),
        blend_channel(color_a.b(), color_b.b()),
        blend_channel(color_a.a(), color_b.a()),
    )
}

fn widget(default: WidgetVisuals, fill: Color32, stroke: Color32, text: Color32) -> WidgetVisuals {
    WidgetVisuals {
        bg_fill: fill,
        weak_bg_fill: fill,
        bg_stroke: Stroke { color: stroke, ..default.bg_stroke },
        fg_stroke: Stroke { color: text, ..default.fg_stroke },
        ..default
    }
}

fn set_theme_variant(ctx: &egui::Context, theme: &ThemeDetails, is_dark: bool) {
    let (default, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };
    let w = default.widgets.clone();

    ctx.set_visuals_of(
        variant,
        Visuals {
            dark_mode: is_dark,
            widgets: Widgets {
                noninteractive: widget(
                    w.noninteractive,
                    theme.background,
                    theme.background_light,
                    theme.foreground,
                ),
                inactive: widget(w.inactive, theme.background_light, theme.selection, theme.foreground),
                hovered: widget(w.hovered, theme.selection, theme.sky, theme.foreground),
                active: widget(w.active, theme.selection, theme.sky, theme.foreground),
                open: widget(w.open, theme.background_dark, theme.teal, theme.foreground),
            },
            selection: Selection {
                bg_fill: theme.selection,
                stroke: Stroke { color: theme.foreground, ..default.selection.stroke },
            },
            hyperlink_color: theme.sky,
            extreme_bg_color: theme.background_light,
            code_bg_color: theme.background_dark,
            error_fg_color: theme.red,
            window_fill: theme.background,
            panel_fill: theme.background_dark,
            ..default
        },
    );
}
