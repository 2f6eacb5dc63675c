use catalog::{Award, Project};
use egui::{Align2, Color32, CornerRadius, FontId, Rect, Sense, Stroke, Vec2};

use crate::ui::{media::MediaCache, theme};

/// Card height relative to its width.
const CARD_ASPECT: f32 = 4.2 / 3.0;

/// Fills `rect` with the image at `url`, cropped to cover, or a flat fill while it loads.
pub fn paint_cover(
    ui: &egui::Ui,
    media: &mut MediaCache,
    rect: Rect,
    url: &str,
    placeholder: Color32,
    radius: u8,
) {
    let corner = CornerRadius::same(radius);
    ui.painter().rect_filled(rect, corner, placeholder);
    let Some(texture) = media.texture(ui.ctx(), url) else {
        return;
    };
    let [w, h] = texture.size();
    if w == 0 || h == 0 {
        return;
    }
    let image_aspect = w as f32 / h as f32;
    let rect_aspect = rect.width() / rect.height().max(1.0);
    let uv = if image_aspect > rect_aspect {
        let visible = rect_aspect / image_aspect;
        let inset = (1.0 - visible) / 2.0;
        Rect::from_min_max(egui::pos2(inset, 0.0), egui::pos2(1.0 - inset, 1.0))
    } else {
        let visible = image_aspect / rect_aspect;
        let inset = (1.0 - visible) / 2.0;
        Rect::from_min_max(egui::pos2(0.0, inset), egui::pos2(1.0, 1.0 - inset))
    };
    egui::Image::from_texture(&texture)
        .uv(uv)
        .corner_radius(corner)
        .paint_at(ui, rect);
}

/// Darkens the lower part of `rect` so overlaid text stays readable.
pub fn paint_scrim(ui: &egui::Ui, rect: Rect, radius: u8) {
    let lower = Rect::from_min_max(
        egui::pos2(rect.left(), rect.top() + rect.height() * 0.35),
        rect.max,
    );
    ui.painter()
        .rect_filled(rect, CornerRadius::same(radius), Color32::from_black_alpha(60));
    ui.painter().rect_filled(
        lower,
        CornerRadius {
            nw: 0,
            ne: 0,
            sw: radius,
            se: radius,
        },
        Color32::from_black_alpha(140),
    );
}

/// Project tile used by the dashboard grid and the Wall of Fame.
pub fn project_card(
    ui: &mut egui::Ui,
    media: &mut MediaCache,
    project: &Project,
    width: f32,
) -> egui::Response {
    let size = Vec2::new(width, width * CARD_ASPECT);
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());
    if !ui.is_rect_visible(rect) {
        return response;
    }

    let radius = 28;
    let rect = if response.is_pointer_button_down_on() {
        rect.shrink(6.0)
    } else {
        rect
    };
    paint_cover(
        ui,
        media,
        rect,
        &project.media.thumbnail_url,
        theme::category_color(project.category),
        radius,
    );
    paint_scrim(ui, rect, radius);

    let painter = ui.painter();
    let inner = rect.shrink(22.0);

    let mut badge_y = inner.top();
    if project.is_awarded() {
        let diameter = if project.award == Award::Excellence { 44.0 } else { 36.0 };
        let center = egui::pos2(inner.left() + diameter / 2.0, badge_y + diameter / 2.0);
        paint_award_disc(painter, center, diameter / 2.0, project.award);
        badge_y += diameter + 8.0;
    }
    if let Some(partner) = &project.partner {
        let galley = painter.layout_no_wrap(
            partner.to_uppercase(),
            FontId::proportional(13.0),
            theme::INK,
        );
        let pill = Rect::from_min_size(
            egui::pos2(inner.left(), badge_y),
            galley.size() + Vec2::new(24.0, 10.0),
        );
        painter.rect_filled(pill, CornerRadius::same(14), theme::PAPER);
        painter.galley(pill.min + Vec2::new(12.0, 5.0), galley, theme::INK);
    }

    let mut y = inner.bottom();
    let semester = painter.layout_no_wrap(
        project.semester_label(),
        FontId::proportional(14.0),
        Color32::from_white_alpha(210),
    );
    y -= semester.size().y;
    painter.circle_filled(
        egui::pos2(inner.left() + 4.0, y + semester.size().y / 2.0),
        4.0,
        theme::PRIMARY,
    );
    painter.galley(egui::pos2(inner.left() + 14.0, y), semester, theme::PAPER);

    let title = painter.layout(
        project.title.clone(),
        FontId::proportional(26.0),
        if response.hovered() {
            theme::PRIMARY
        } else {
            theme::PAPER
        },
        inner.width(),
    );
    y -= title.size().y + 6.0;
    painter.galley(egui::pos2(inner.left(), y), title, theme::PAPER);

    let tags = project
        .tags
        .iter()
        .take(2)
        .map(|tag| format!("#{}", tag.to_uppercase()))
        .collect::<Vec<_>>()
        .join("  ");
    if !tags.is_empty() {
        let tags = painter.layout_no_wrap(tags, FontId::proportional(12.0), theme::PAPER);
        y -= tags.size().y + 8.0;
        painter.galley(egui::pos2(inner.left(), y), tags, theme::PAPER);
    }

    response.on_hover_text(&project.title)
}

/// Round award marker. Excellence gets the stacked three-star mark, Featured a single star.
pub fn paint_award_disc(painter: &egui::Painter, center: egui::Pos2, radius: f32, award: Award) {
    painter.circle(
        center,
        radius,
        theme::PRIMARY,
        Stroke::new(2.0, Color32::from_white_alpha(100)),
    );
    let font = FontId::proportional(radius * 0.8);
    match award {
        Award::Excellence => {
            let offset = radius * 0.18;
            let layers = [(-offset, theme::INK), (offset, theme::YELLOW), (0.0, theme::PAPER)];
            for (dx, color) in layers {
                painter.text(
                    center + Vec2::splat(dx),
                    Align2::CENTER_CENTER,
                    "★",
                    font.clone(),
                    color,
                );
            }
        }
        Award::Featured => {
            painter.text(center, Align2::CENTER_CENTER, "★", font, theme::PAPER);
        }
        Award::None => {}
    }
}

/// Filled pill naming the award, for headers.
pub fn award_badge(ui: &mut egui::Ui, award: Award) {
    if !award.is_awarded() {
        return;
    }
    let text = match award {
        Award::Excellence => "★ FALCONI EXCELLENCE",
        _ => "★ FALCONI FEATURED",
    };
    pill(ui, text, theme::PRIMARY, theme::PAPER);
}

pub fn pill(ui: &mut egui::Ui, text: &str, fill: Color32, color: Color32) {
    egui::Frame::new()
        .fill(fill)
        .corner_radius(CornerRadius::same(16))
        .inner_margin(egui::Margin::symmetric(14, 6))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).size(13.0).strong().color(color));
        });
}

/// Bold label text, the kiosk's default voice.
pub fn strong(text: impl Into<String>, size: f32, color: Color32) -> egui::RichText {
    egui::RichText::new(text).size(size).strong().color(color)
}

/// Toggle chip for filter rows. Returns true when tapped.
pub fn chip(ui: &mut egui::Ui, label: &str, selected: bool, accent: Color32) -> bool {
    let (fill, color) = if selected {
        (accent, theme::PAPER)
    } else {
        (Color32::from_gray(243), theme::MUTED)
    };
    ui.add(
        egui::Button::new(egui::RichText::new(label).strong().color(color))
            .fill(fill)
            .stroke(Stroke::NONE)
            .corner_radius(CornerRadius::same(20))
            .min_size(Vec2::new(64.0, 40.0)),
    )
    .clicked()
}

/// Large black call-to-action spanning `width`.
pub fn primary_button(ui: &mut egui::Ui, label: &str, width: f32) -> bool {
    ui.add(
        egui::Button::new(
            egui::RichText::new(label)
                .strong()
                .size(16.0)
                .color(theme::PAPER),
        )
        .fill(theme::INK)
        .corner_radius(CornerRadius::same(24))
        .min_size(Vec2::new(width, 60.0)),
    )
    .clicked()
}

/// Lays out `count` equal-width columns and returns the column width.
pub fn column_width(available: f32, count: usize, gap: f32) -> f32 {
    let count = count.max(1) as f32;
    ((available - gap * (count - 1.0)) / count).max(120.0)
}
