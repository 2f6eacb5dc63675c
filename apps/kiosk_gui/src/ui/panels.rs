//! One function per screen and overlay. Panels read the session and push intents; they never
//! mutate the session directly.

use catalog::Project;
use egui::{Align, Align2, Color32, CornerRadius, FontId, Layout, RichText, Vec2};
use kiosk_core::{AwardFilter, FilterValue, Intent, KioskSession};

use crate::ui::{media::MediaCache, theme, widgets};

const PAGE_MARGIN: i8 = 32;
const GRID_GAP: f32 = 24.0;
const GRID_COLUMNS: usize = 2;

/// What a panel may touch while rendering one frame.
pub struct Screen<'a, 'c> {
    pub session: &'a KioskSession<'c>,
    pub media: &'a mut MediaCache,
    pub intents: &'a mut Vec<Intent>,
}

impl Screen<'_, '_> {
    fn push(&mut self, intent: Intent) {
        self.intents.push(intent);
    }
}

pub fn attract(ctx: &egui::Context, screen: &mut Screen<'_, '_>) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(theme::INK))
        .show(ctx, |ui| {
            let rect = ui.max_rect();
            let Some(project) = screen.session.attract_project() else {
                ui.centered_and_justified(|ui| {
                    ui.label(widgets::strong("CAPSTONE HUB", 48.0, theme::PAPER));
                });
                return;
            };

            widgets::paint_cover(
                ui,
                screen.media,
                rect,
                &project.media.thumbnail_url,
                theme::category_color(project.category),
                0,
            );
            widgets::paint_scrim(ui, rect, 0);

            let painter = ui.painter();
            let logo = egui::Rect::from_min_size(
                rect.min + Vec2::new(40.0, 48.0),
                Vec2::splat(64.0),
            );
            painter.rect_filled(logo, CornerRadius::same(16), theme::PRIMARY);
            painter.text(
                logo.center(),
                Align2::CENTER_CENTER,
                "C",
                FontId::proportional(36.0),
                theme::PAPER,
            );

            painter.text(
                egui::pos2(rect.center().x, rect.bottom() - 32.0),
                Align2::CENTER_BOTTOM,
                "TOUCH ANYWHERE TO EXPLORE",
                FontId::proportional(14.0),
                Color32::from_white_alpha(128),
            );

            let content = egui::Rect::from_min_max(
                egui::pos2(rect.left() + 40.0, rect.center().y),
                egui::pos2(rect.right() - 40.0, rect.bottom() - 80.0),
            );
            ui.scope_builder(
                egui::UiBuilder::new()
                    .max_rect(content)
                    .layout(Layout::bottom_up(Align::Min)),
                |ui| {
                    ui.label(
                        RichText::new(format!(
                            "{}   •   SEMESTER {}",
                            project.category.label().to_uppercase(),
                            project.semester_label()
                        ))
                        .size(14.0)
                        .strong()
                        .color(Color32::from_white_alpha(180)),
                    );
                    ui.add_space(12.0);
                    ui.label(
                        RichText::new(&project.description)
                            .size(22.0)
                            .color(Color32::from_white_alpha(230)),
                    );
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new(project.title.to_uppercase())
                            .size(52.0)
                            .strong()
                            .color(theme::PAPER),
                    );
                    if project.is_awarded() {
                        ui.add_space(12.0);
                        widgets::pill(ui, project.award.label(), theme::PRIMARY, theme::PAPER);
                    }
                },
            );
        });
}

pub fn dashboard(ctx: &egui::Context, screen: &mut Screen<'_, '_>) {
    let session = screen.session;

    egui::TopBottomPanel::top("dashboard_header")
        .frame(
            egui::Frame::new()
                .fill(theme::PAPER)
                .inner_margin(egui::Margin::symmetric(PAGE_MARGIN, 24)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        widgets::pill(ui, "C", theme::PRIMARY, theme::PAPER);
                        ui.label(widgets::strong("KNOWLEDGE BASE", 12.0, theme::MUTED));
                    });
                    ui.label(widgets::strong("CAPSTONE HUB", 40.0, theme::INK));
                });
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let label = RichText::new("Partners").strong().color(theme::TEAL);
                    let partners = egui::Button::new(label)
                        .fill(theme::SURFACE)
                        .corner_radius(CornerRadius::same(16))
                        .min_size(Vec2::new(110.0, 56.0));
                    if ui.add(partners).clicked() {
                        screen.push(Intent::OpenPartnerDirectory);
                    }
                    let label = RichText::new("✨ Ask AI").strong().color(theme::PAPER);
                    let ask = egui::Button::new(label)
                        .fill(theme::INK)
                        .corner_radius(CornerRadius::same(16))
                        .min_size(Vec2::new(110.0, 56.0));
                    if ui.add(ask).on_hover_text("Ask AI Assistant").clicked() {
                        screen.push(Intent::OpenAssistant);
                    }
                });
            });
            ui.add_space(16.0);

            let filters = session.filters();
            filter_row(ui, "dashboard_years", "FILTER YEAR:", |ui| {
                if widgets::chip(ui, "All", filters.year.is_all(), theme::TEAL) {
                    screen.push(Intent::SetYearFilter(FilterValue::All));
                }
                for &year in session.years() {
                    let selected = filters.year.as_option() == Some(&year);
                    if widgets::chip(ui, &year.to_string(), selected, theme::TEAL) {
                        screen.push(Intent::SetYearFilter(FilterValue::Only(year)));
                    }
                }
            });
            filter_row(ui, "dashboard_tags", "POPULAR THEMES:", |ui| {
                if widgets::chip(ui, "#All", filters.tag.is_all(), theme::PURPLE) {
                    screen.push(Intent::SetTagFilter(FilterValue::All));
                }
                for tag in session.tags() {
                    let selected = filters.tag.as_option() == Some(tag);
                    if widgets::chip(ui, &format!("#{tag}"), selected, theme::PURPLE) {
                        screen.push(Intent::SetTagFilter(FilterValue::Only(tag.clone())));
                    }
                }
            });
        });

    egui::TopBottomPanel::bottom("dashboard_award_toggle")
        .frame(egui::Frame::new().fill(theme::PAPER).inner_margin(egui::Margin::same(20)))
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                egui::Frame::new()
                    .fill(Color32::from_black_alpha(12))
                    .corner_radius(CornerRadius::same(28))
                    .inner_margin(egui::Margin::same(8))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            let all_selected = session.filters().award == AwardFilter::All;
                            if toggle(ui, "ALL PROJECTS", all_selected, theme::PAPER, theme::INK) {
                                screen.push(Intent::SetAwardFilter(AwardFilter::All));
                            }
                            if toggle(ui, "★ WALL OF FAME", !all_selected, theme::PRIMARY, theme::PAPER) {
                                screen.push(Intent::OpenAwardsWall);
                            }
                        });
                    });
            });
        });

    egui::CentralPanel::default()
        .frame(
            egui::Frame::new()
                .fill(theme::SURFACE)
                .inner_margin(egui::Margin::symmetric(PAGE_MARGIN, 16)),
        )
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("dashboard_grid_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    if let FilterValue::Only(partner) = &session.filters().partner {
                        partner_banner(ui, screen, partner);
                        ui.add_space(16.0);
                    }

                    let projects = session.visible_projects();
                    if projects.is_empty() {
                        empty_state(ui, screen);
                    } else {
                        project_grid(ui, screen, &projects);
                    }
                });
        });
}

fn toggle(ui: &mut egui::Ui, label: &str, selected: bool, fill: Color32, color: Color32) -> bool {
    let (fill, color) = if selected {
        (fill, color)
    } else {
        (Color32::TRANSPARENT, theme::MUTED)
    };
    let button = egui::Button::new(RichText::new(label).strong().color(color))
        .fill(fill)
        .corner_radius(CornerRadius::same(24))
        .min_size(Vec2::new(200.0, 52.0));
    ui.add(button).clicked()
}

fn filter_row(ui: &mut egui::Ui, id: &str, label: &str, add_chips: impl FnOnce(&mut egui::Ui)) {
    egui::ScrollArea::horizontal()
        .id_salt(id)
        .scroll_bar_visibility(egui::scroll_area::ScrollBarVisibility::AlwaysHidden)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(label).size(12.0).italics().strong().color(theme::MUTED));
                add_chips(ui);
            });
        });
}

fn partner_banner(ui: &mut egui::Ui, screen: &mut Screen<'_, '_>, partner: &str) {
    egui::Frame::new()
        .fill(theme::PAPER)
        .stroke(egui::Stroke::new(1.0, theme::TEAL.gamma_multiply(0.3)))
        .corner_radius(CornerRadius::same(18))
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!("VIEWING {} PROJECTS", partner.to_uppercase()))
                        .strong()
                        .color(theme::INK),
                );
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let label = RichText::new("CLEAR").strong().color(theme::PRIMARY);
                    let clear = egui::Button::new(label).frame(false);
                    if ui.add(clear).clicked() {
                        screen.push(Intent::SetPartnerFilter(FilterValue::All));
                    }
                });
            });
        });
}

fn empty_state(ui: &mut egui::Ui, screen: &mut Screen<'_, '_>) {
    ui.vertical_centered(|ui| {
        ui.add_space(96.0);
        ui.label(RichText::new("🔍").size(64.0).color(Color32::from_gray(220)));
        ui.add_space(16.0);
        ui.label(
            RichText::new("NO PROJECTS MATCH THESE FILTERS")
                .strong()
                .color(theme::MUTED),
        );
        ui.add_space(24.0);
        if widgets::primary_button(ui, "RESET DISCOVERY", 260.0) {
            screen.push(Intent::ResetFilters);
        }
    });
}

fn project_grid(ui: &mut egui::Ui, screen: &mut Screen<'_, '_>, projects: &[&Project]) {
    let width = widgets::column_width(ui.available_width(), GRID_COLUMNS, GRID_GAP);
    for row in projects.chunks(GRID_COLUMNS) {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = GRID_GAP;
            for project in row {
                if widgets::project_card(ui, screen.media, project, width).clicked() {
                    screen.push(Intent::SelectProject(project.id.clone()));
                }
            }
        });
        ui.add_space(GRID_GAP);
    }
    ui.add_space(48.0);
}

pub fn awards_wall(ctx: &egui::Context, screen: &mut Screen<'_, '_>) {
    egui::TopBottomPanel::top("awards_header")
        .frame(
            egui::Frame::new()
                .fill(theme::PRIMARY)
                .inner_margin(egui::Margin::symmetric(40, 32)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                if round_button(ui, "←", Color32::from_white_alpha(26), theme::PAPER) {
                    screen.push(Intent::CloseAwardsWall);
                }
                ui.vertical_centered(|ui| {
                    ui.label(widgets::strong("WALL OF FAME", 40.0, theme::PAPER).italics());
                    ui.label(
                        RichText::new("FALCONI EXCELLENCE & FEATURED PROJECTS")
                            .size(12.0)
                            .strong()
                            .color(Color32::from_white_alpha(180)),
                    );
                });
            });
        });

    egui::TopBottomPanel::bottom("awards_close")
        .frame(egui::Frame::new().fill(theme::SURFACE).inner_margin(egui::Margin::same(24)))
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                if widgets::primary_button(ui, "CLOSE WALL OF FAME", 380.0) {
                    screen.push(Intent::CloseAwardsWall);
                }
            });
        });

    egui::CentralPanel::default()
        .frame(
            egui::Frame::new()
                .fill(theme::SURFACE)
                .inner_margin(egui::Margin::same(40)),
        )
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("awards_grid_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let awarded = screen.session.awarded_projects();
                    if awarded.is_empty() {
                        ui.vertical_centered(|ui| {
                            ui.add_space(160.0);
                            let medal = RichText::new("🏅").size(96.0);
                            ui.label(medal.color(Color32::from_gray(210)));
                            ui.label(
                                RichText::new("NO AWARDS REGISTERED YET")
                                    .strong()
                                    .color(theme::MUTED),
                            );
                        });
                    } else {
                        project_grid(ui, screen, &awarded);
                    }
                });
        });
}

pub fn project_detail(ctx: &egui::Context, screen: &mut Screen<'_, '_>, project: &Project) {
    egui::TopBottomPanel::bottom("detail_back")
        .frame(egui::Frame::new().fill(theme::PAPER).inner_margin(egui::Margin::same(24)))
        .show(ctx, |ui| {
            if widgets::primary_button(ui, "BACK TO GALLERY", ui.available_width()) {
                screen.push(Intent::Back);
            }
        });

    egui::CentralPanel::default()
        .frame(egui::Frame::new().fill(theme::PAPER))
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt(("detail_scroll", project.id.as_str()))
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    detail_hero(ui, screen, project);
                    egui::Frame::new()
                        .inner_margin(egui::Margin::same(40))
                        .show(ui, |ui| {
                            ui.spacing_mut().item_spacing.y = 16.0;
                            detail_body(ui, screen, project);
                        });
                });
        });
}

fn detail_hero(ui: &mut egui::Ui, screen: &mut Screen<'_, '_>, project: &Project) {
    let width = ui.available_width();
    let height = (ui.clip_rect().height() * 0.4).max(320.0);
    let (rect, _) = ui.allocate_exact_size(Vec2::new(width, height), egui::Sense::hover());
    widgets::paint_cover(
        ui,
        screen.media,
        rect,
        &project.media.thumbnail_url,
        theme::category_color(project.category),
        0,
    );
    widgets::paint_scrim(ui, rect, 0);

    let back = egui::Rect::from_min_size(rect.min + Vec2::new(24.0, 40.0), Vec2::splat(56.0));
    let back_button = egui::Button::new(RichText::new("←").size(22.0).color(theme::PAPER))
        .fill(Color32::from_white_alpha(26))
        .corner_radius(CornerRadius::same(28));
    if ui.put(back, back_button).clicked() {
        screen.push(Intent::Back);
    }

    let content = egui::Rect::from_min_max(
        egui::pos2(rect.left() + 32.0, rect.top() + 110.0),
        egui::pos2(rect.right() - 32.0, rect.bottom() - 32.0),
    );
    ui.scope_builder(
        egui::UiBuilder::new()
            .max_rect(content)
            .layout(Layout::bottom_up(Align::Min)),
        |ui| {
            ui.label(
                RichText::new(format!("SEMESTER {}", project.semester_label()))
                    .size(13.0)
                    .strong()
                    .color(Color32::from_white_alpha(150)),
            );
            ui.label(widgets::strong(&project.title, 40.0, theme::PAPER));
            ui.horizontal_wrapped(|ui| {
                widgets::pill(
                    ui,
                    &project.category.label().to_uppercase(),
                    theme::PRIMARY,
                    theme::PAPER,
                );
                widgets::award_badge(ui, project.award);
                if let Some(partner) = &project.partner {
                    widgets::pill(ui, &partner.to_uppercase(), theme::PAPER, theme::INK);
                }
            });
        },
    );
}

fn detail_body(ui: &mut egui::Ui, screen: &mut Screen<'_, '_>, project: &Project) {
    if let Some(video_url) = &project.media.video_url {
        section_title(ui, "▶ Project Pitch & Demo");
        let width = ui.available_width();
        let (rect, response) =
            ui.allocate_exact_size(Vec2::new(width, width * 9.0 / 16.0), egui::Sense::hover());
        widgets::paint_cover(
            ui,
            screen.media,
            rect,
            &project.media.thumbnail_url,
            theme::INK,
            32,
        );
        ui.painter()
            .rect_filled(rect, CornerRadius::same(32), Color32::from_black_alpha(90));
        ui.painter().circle_filled(rect.center(), 40.0, theme::PRIMARY);
        ui.painter().text(
            rect.center(),
            Align2::CENTER_CENTER,
            "▶",
            FontId::proportional(32.0),
            theme::PAPER,
        );
        response.on_hover_text(video_url);
    }

    ui.horizontal_wrapped(|ui| {
        for tag in &project.tags {
            let label = format!("#{}", tag.to_uppercase());
            widgets::pill(ui, &label, Color32::from_gray(243), theme::MUTED);
        }
    });
    ui.label(widgets::strong("Executive Summary", 28.0, theme::INK));
    ui.label(
        RichText::new(&project.long_description)
            .size(22.0)
            .color(Color32::from_gray(75)),
    );

    section_title(ui, "Photo Gallery");
    egui::ScrollArea::horizontal()
        .id_salt(("gallery", project.id.as_str()))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                let tile = Vec2::new(320.0, 200.0);
                for url in &project.media.gallery_urls {
                    let (rect, _) = ui.allocate_exact_size(tile, egui::Sense::hover());
                    widgets::paint_cover(ui, screen.media, rect, url, Color32::from_gray(240), 24);
                }
                egui::Frame::new()
                    .fill(theme::PAPER)
                    .stroke(egui::Stroke::new(2.0, Color32::from_gray(225)))
                    .corner_radius(CornerRadius::same(24))
                    .inner_margin(egui::Margin::same(24))
                    .show(ui, |ui| {
                        ui.set_min_size(tile - Vec2::splat(48.0));
                        ui.vertical_centered(|ui| {
                            ui.label(RichText::new("Technical Panel").strong().color(theme::INK));
                            let caption = RichText::new("OFFICIAL POSTER").size(11.0);
                            ui.label(caption.color(theme::MUTED));
                            let available = project.media.presentation_url.is_some();
                            let view = egui::Button::new(
                                widgets::strong("VIEW DOCUMENT", 11.0, theme::PAPER),
                            )
                            .fill(theme::INK)
                            .corner_radius(CornerRadius::same(16));
                            let response = ui.add_enabled(available, view);
                            if let Some(url) = &project.media.presentation_url {
                                response.on_hover_text(url);
                            }
                        });
                    });
            });
        });

    ui.add_space(16.0);
    ui.columns(2, |columns| {
        card_section(&mut columns[0], "STUDENT CREATORS", |ui| {
            for student in &project.students {
                ui.label(RichText::new(&student.name).strong().color(theme::INK));
                ui.label(
                    RichText::new(student.role.to_uppercase())
                        .size(11.0)
                        .strong()
                        .color(theme::PRIMARY),
                );
                ui.add_space(8.0);
            }
        });
        card_section(&mut columns[1], "FACULTY ADVISOR", |ui| {
            ui.label(RichText::new(&project.advisor).strong().color(theme::INK));
            ui.label(
                RichText::new("RESEARCH SUPERVISOR")
                    .size(11.0)
                    .strong()
                    .color(theme::MUTED),
            );
            if let Some(partner) = &project.partner {
                ui.separator();
                ui.label(widgets::strong("INDUSTRY SUPPORT", 10.0, theme::MUTED));
                widgets::pill(ui, partner, theme::PAPER, theme::INK);
            }
        });
    });
    ui.add_space(32.0);
}

fn section_title(ui: &mut egui::Ui, title: &str) {
    ui.add_space(8.0);
    ui.label(widgets::strong(title, 24.0, theme::INK));
}

fn card_section(ui: &mut egui::Ui, title: &str, body: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::new()
        .fill(theme::SURFACE)
        .stroke(egui::Stroke::new(1.0, Color32::from_gray(236)))
        .corner_radius(CornerRadius::same(24))
        .inner_margin(egui::Margin::same(28))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(widgets::strong(title, 11.0, theme::MUTED));
            ui.add_space(12.0);
            body(ui);
        });
}

fn round_button(ui: &mut egui::Ui, label: &str, fill: Color32, color: Color32) -> bool {
    ui.add(
        egui::Button::new(RichText::new(label).size(22.0).color(color))
            .fill(fill)
            .corner_radius(CornerRadius::same(28))
            .min_size(Vec2::splat(56.0)),
    )
    .clicked()
}

pub fn partner_directory(ctx: &egui::Context, screen: &mut Screen<'_, '_>) {
    let session = screen.session;
    egui::Modal::new(egui::Id::new("partner_directory"))
        .frame(
            egui::Frame::new()
                .fill(theme::PAPER)
                .corner_radius(CornerRadius::same(32))
                .inner_margin(egui::Margin::same(32)),
        )
        .show(ctx, |ui| {
            ui.set_width(720.0);
            ui.horizontal(|ui| {
                ui.label(widgets::strong("Our Partners", 32.0, theme::INK));
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if round_button(ui, "✕", Color32::from_gray(243), theme::INK) {
                        screen.push(Intent::ClosePartnerDirectory);
                    }
                });
            });
            ui.add_space(12.0);

            let mut search = session.modals().partner_search.clone();
            let edit = ui.add(
                egui::TextEdit::singleline(&mut search)
                    .hint_text("Search 100+ partners...")
                    .font(FontId::proportional(22.0))
                    .margin(egui::Margin::same(16))
                    .desired_width(f32::INFINITY),
            );
            if edit.changed() {
                screen.push(Intent::SetPartnerSearch(search));
            }
            ui.add_space(12.0);

            egui::ScrollArea::vertical()
                .id_salt("partner_directory_scroll")
                .max_height(560.0)
                .auto_shrink([false, true])
                .show(ui, |ui| {
                    let partners = session.filtered_partners();
                    if partners.is_empty() {
                        ui.label(RichText::new("No partners found").color(theme::MUTED));
                    }
                    for partner in partners {
                        let works = session.partner_project_count(partner);
                        if partner_row(ui, partner, works) {
                            screen.push(Intent::ChoosePartner(partner.to_string()));
                        }
                    }
                });
        });
}

fn partner_row(ui: &mut egui::Ui, partner: &str, works: usize) -> bool {
    let response = egui::Frame::new()
        .fill(theme::SURFACE)
        .corner_radius(CornerRadius::same(18))
        .inner_margin(egui::Margin::symmetric(24, 18))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(widgets::strong(partner, 20.0, theme::INK));
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label(
                        RichText::new(format!("{works} WORKS ›"))
                            .size(11.0)
                            .strong()
                            .color(theme::MUTED),
                    );
                });
            });
        })
        .response
        .interact(egui::Sense::click());
    response.clicked()
}

pub fn assistant(ctx: &egui::Context, screen: &mut Screen<'_, '_>) {
    let session = screen.session;
    egui::Modal::new(egui::Id::new("assistant_console"))
        .frame(
            egui::Frame::new()
                .fill(theme::PAPER)
                .corner_radius(CornerRadius::same(40))
                .inner_margin(egui::Margin::same(40)),
        )
        .show(ctx, |ui| {
            ui.set_width(760.0);
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(widgets::strong("Intelligent Search", 28.0, theme::INK));
                    ui.label(
                        RichText::new("ASK ABOUT STUDENTS OR FALCONI AWARDS")
                            .size(12.0)
                            .strong()
                            .color(theme::MUTED),
                    );
                });
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if round_button(ui, "✕", Color32::TRANSPARENT, theme::MUTED) {
                        screen.push(Intent::CloseAssistant);
                    }
                });
            });
            ui.add_space(24.0);

            let pending = session.assistant_pending();
            let mut query = session.modals().assistant_query.clone();
            let mut submit = false;
            ui.horizontal(|ui| {
                let edit = ui.add(
                    egui::TextEdit::singleline(&mut query)
                        .hint_text("e.g. 'Show me Excellence projects'")
                        .font(FontId::proportional(22.0))
                        .margin(egui::Margin::same(18))
                        .desired_width(ui.available_width() - 140.0),
                );
                if edit.changed() {
                    screen.push(Intent::SetAssistantQuery(query.clone()));
                }
                if edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    submit = true;
                }

                if pending {
                    ui.add_sized(Vec2::new(120.0, 60.0), egui::Spinner::new().size(28.0));
                } else {
                    let ask = egui::Button::new(RichText::new("ASK").strong().color(theme::PAPER))
                        .fill(theme::INK)
                        .corner_radius(CornerRadius::same(18))
                        .min_size(Vec2::new(120.0, 60.0));
                    if ui.add_enabled(!query.trim().is_empty(), ask).clicked() {
                        submit = true;
                    }
                }
            });
            if submit {
                screen.push(Intent::SubmitAssistantQuery);
            }

            if let Some(answer) = session.assistant_answer() {
                ui.add_space(24.0);
                egui::Frame::new()
                    .fill(Color32::from_rgb(0xFE, 0xF2, 0xF2))
                    .corner_radius(CornerRadius::same(24))
                    .inner_margin(egui::Margin::same(24))
                    .show(ui, |ui| {
                        egui::ScrollArea::vertical()
                            .id_salt("assistant_answer_scroll")
                            .max_height(360.0)
                            .show(ui, |ui| {
                                ui.set_width(ui.available_width());
                                ui.label(
                                    RichText::new(format!("\"{answer}\""))
                                        .size(20.0)
                                        .italics()
                                        .color(Color32::from_gray(40)),
                                );
                            });
                    });
            }
        });
}
