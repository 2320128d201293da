#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use clap::Parser;
use eframe::{egui, App, Frame};
use hydro_power_toolbox::{
    config, conversion,
    hydro::{self, plant, PlantInputs, PlantResult},
    i18n, logging,
    quantity::QuantityKind,
    report::{self, PlantReport},
};
use image::GenericImageView;
use rfd::FileDialog;
use std::{fs, path::Path, path::PathBuf};
use tracing::warn;

#[derive(Parser)]
#[command(name = "hydro_power_toolbox", version, about = "Mini hydropower plant calculator (GUI)")]
struct GuiArgs {
    /// Language: auto, en-us, ko-kr
    #[arg(short = 'L', long)]
    lang: Option<String>,
    /// Config file path (default: ./config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), eframe::Error> {
    let args = GuiArgs::parse();
    logging::init(args.verbose);

    let loaded = match args.config.as_deref() {
        Some(p) => config::load_or_create(p),
        None => config::load_or_default(),
    };
    let app_cfg = loaded.unwrap_or_else(|err| {
        warn!(%err, "config unavailable, using defaults");
        config::Config::default()
    });
    let lang_code = app_cfg.resolved_language(args.lang.as_deref().unwrap_or("auto"));

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size([980.0, 700.0])
        .with_transparent(true);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "Mini Hydro Power Toolbox",
        options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                warn!("font setup: {e}");
            }
            Box::new(GuiApp::new(app_cfg, &lang_code))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["hydro.png", "icon.png", "assets/icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: img.to_rgba8().into_raw(),
        width: w,
        height: h,
    })
}

/// 바이너리 폰트 바이트를 egui 폴백 폰트로 등록한다. 라틴 문자는 기본 폰트를 유지한다.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(font_name.clone());
    }
    ctx.set_fonts(fonts);
}

/// 한글 표시용 폰트를 찾는다.
/// 1) assets/fonts/ 아래 폰트
/// 2) OS별 시스템 폰트(맑은 고딕, 나눔고딕, Apple SD Gothic Neo)
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let mut candidates: Vec<PathBuf> = vec![
        PathBuf::from("assets/fonts/malgun.ttf"),
        PathBuf::from("assets/fonts/NanumGothic.ttf"),
    ];
    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        candidates.extend(["malgun.ttf", "gulim.ttc"].iter().map(|f| fonts.join(f)));
    }
    candidates.extend(
        [
            "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
            "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
            "/System/Library/Fonts/AppleSDGothicNeo.ttc",
        ]
        .iter()
        .map(PathBuf::from),
    );

    let path = candidates
        .iter()
        .find(|p| p.exists())
        .ok_or_else(|| "Korean font not found; Hangul may not render.".to_string())?;
    let bytes = fs::read(path)
        .map_err(|e| format!("Failed to read font file ({}): {e}", path.display()))?;
    apply_font_bytes(ctx, bytes, "korean_font");
    Ok(())
}

fn metric_card(ui: &mut egui::Ui, title: &str, value: String, caption: &str) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.label(title);
        ui.label(egui::RichText::new(value).size(24.0).strong());
        ui.small(caption);
    });
}

struct ConverterState {
    kind: QuantityKind,
    value: f64,
    from: String,
    to: String,
}

impl ConverterState {
    fn new(kind: QuantityKind) -> Self {
        let units = kind.unit_symbols();
        Self {
            kind,
            value: 1.0,
            from: units.first().copied().unwrap_or_default().to_string(),
            to: units.get(1).copied().unwrap_or_default().to_string(),
        }
    }
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    inputs: PlantInputs,
    window_alpha: f32,
    lang_input: String,
    lang_save_status: Option<String>,
    export_status: Option<String>,
    show_settings: bool,
    show_about: bool,
    show_converter: bool,
    converter: ConverterState,
}

impl GuiApp {
    fn new(config: config::Config, lang_code: &str) -> Self {
        let tr = i18n::Translator::new_with_pack(lang_code, config.language_pack_dir.as_deref());
        Self {
            inputs: config.defaults,
            window_alpha: config.window_alpha,
            lang_input: config.language.clone(),
            config,
            tr,
            lang_save_status: None,
            export_status: None,
            show_settings: false,
            show_about: false,
            show_converter: false,
            converter: ConverterState::new(QuantityKind::VolumetricFlow),
        }
    }

    fn txt(&self, key: &str, default: &str) -> String {
        self.tr.lookup(key).unwrap_or_else(|| default.to_string())
    }

    /// 좌측 입력 패널. 하한은 위젯에서 바로 막는다.
    fn ui_inputs(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.txt("gui.inputs.heading", "Inputs"));
        ui.add_space(6.0);

        ui.label(self.txt("gui.inputs.discharge", "Discharge Q (cusec)"));
        ui.add(
            egui::DragValue::new(&mut self.inputs.discharge_cusec)
                .speed(1.0)
                .clamp_range(plant::MIN_DISCHARGE_CUSEC..=f64::MAX),
        );
        ui.label(self.txt("gui.inputs.velocity", "Velocity v (ft/s)"));
        ui.add(
            egui::DragValue::new(&mut self.inputs.velocity_fps)
                .speed(0.1)
                .clamp_range(plant::MIN_VELOCITY_FPS..=f64::MAX),
        );
        ui.label(self.txt("gui.inputs.head", "Net Head H (m)"));
        ui.add(
            egui::DragValue::new(&mut self.inputs.head_m)
                .speed(0.1)
                .clamp_range(plant::MIN_HEAD_M..=f64::MAX),
        );

        ui.separator();
        ui.label(self.txt("gui.inputs.turbine_eff", "Turbine Efficiency ηt (%)"));
        ui.add(
            egui::Slider::new(
                &mut self.inputs.turbine_efficiency_pct,
                plant::EFFICIENCY_PCT_RANGE,
            )
            .suffix(" %"),
        );
        ui.label(self.txt("gui.inputs.generator_eff", "Generator Efficiency ηg (%)"));
        ui.add(
            egui::Slider::new(
                &mut self.inputs.generator_efficiency_pct,
                plant::EFFICIENCY_PCT_RANGE,
            )
            .suffix(" %"),
        );

        ui.add_space(8.0);
        if ui
            .button(self.txt("gui.inputs.reset", "Reset to defaults"))
            .clicked()
        {
            self.inputs = self.config.defaults;
        }
    }

    fn ui_results(&self, ui: &mut egui::Ui, result: &PlantResult) {
        use i18n::keys;
        let tr = &self.tr;
        let f = report::FormattedResult::new(result);

        ui.heading(tr.t(keys::RESULT_HEADING));
        ui.columns(2, |cols| {
            metric_card(
                &mut cols[0],
                &self.txt("gui.results.hydraulic", "Hydraulic Power (theoretical)"),
                format!("{} kW", f.hydraulic_kw),
                &tr.t(keys::RESULT_HYDRAULIC_CAPTION),
            );
            metric_card(
                &mut cols[1],
                &self.txt("gui.results.electrical", "Electrical Output Power"),
                format!("{} kW", f.electrical_kw),
                &tr.t(keys::RESULT_ELECTRICAL_CAPTION),
            );
        });

        ui.add_space(8.0);
        ui.label(tr.format(keys::RESULT_ELECTRICAL_MW, &[("value", f.electrical_mw)]));

        ui.add_space(8.0);
        ui.strong(tr.t(keys::RESULT_PENSTOCK_HEADING));
        match report::penstock_line(result, tr) {
            Some(line) => ui.colored_label(egui::Color32::from_rgb(40, 160, 70), line),
            None => ui.colored_label(
                ui.visuals().error_fg_color,
                tr.t(keys::RESULT_PENSTOCK_INVALID),
            ),
        };

        ui.add_space(8.0);
        ui.strong(tr.t(keys::RESULT_TURBINE_HEADING));
        ui.colored_label(
            egui::Color32::from_rgb(60, 120, 200),
            tr.t(result.turbine.i18n_key()),
        );

        ui.separator();
        egui::CollapsingHeader::new(tr.t(keys::NOTES_HEADING))
            .default_open(false)
            .show(ui, |ui| {
                for key in [keys::NOTES_EQUATIONS, keys::NOTES_CONVERSIONS, keys::NOTES_TURBINES]
                {
                    ui.label(tr.t(key));
                    ui.add_space(4.0);
                }
            });
    }

    fn export_report(&mut self, result: &PlantResult) {
        let Some(path) = FileDialog::new()
            .add_filter("TOML", &["toml"])
            .set_file_name("hydro_report.toml")
            .save_file()
        else {
            return;
        };
        let report = PlantReport::new(&self.inputs, &self.config.fluid, result);
        self.export_status = Some(match report.save(&path) {
            Ok(()) => self.tr.format(
                "gui.export.saved",
                &[("path", path.display().to_string())],
            ),
            Err(e) => {
                warn!(%e, "report export failed");
                self.tr.format("gui.export.failed", &[("error", e.to_string())])
            }
        });
    }

    fn ui_settings(&mut self, ui: &mut egui::Ui) {
        ui.label(self.tr.format(
            i18n::keys::SETTINGS_CURRENT_LANGUAGE,
            &[("lang", self.tr.language_code().to_string())],
        ));
        ui.label(self.txt("gui.settings.language", "Language"));
        egui::ComboBox::from_id_source("lang_choice")
            .selected_text(self.lang_input.clone())
            .show_ui(ui, |ui| {
                ui.selectable_value(
                    &mut self.lang_input,
                    "auto".into(),
                    self.tr
                        .lookup("gui.settings.auto")
                        .unwrap_or_else(|| "System".into()),
                );
                ui.selectable_value(&mut self.lang_input, "en-us".into(), "English (US)");
                ui.selectable_value(&mut self.lang_input, "ko-kr".into(), "한국어");
            });
        ui.separator();
        ui.label(self.txt("gui.settings.alpha", "Window transparency"));
        ui.add(egui::Slider::new(&mut self.window_alpha, 0.3..=1.0).text("alpha"));
        ui.separator();
        if ui
            .button(self.txt("gui.settings.save", "Save settings"))
            .clicked()
        {
            self.config.language = self.lang_input.clone();
            self.config.window_alpha = self.window_alpha;
            let resolved = self.config.resolved_language("auto");
            self.tr =
                i18n::Translator::new_with_pack(&resolved, self.config.language_pack_dir.as_deref());
            self.lang_save_status = Some(match self.config.save() {
                Ok(()) => self.txt("gui.settings.saved", "Saved."),
                Err(e) => format!("Save error: {e}"),
            });
        }
        if let Some(msg) = &self.lang_save_status {
            ui.label(msg.as_str());
        }
    }

    fn ui_converter(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        let mut kind = self.converter.kind;
        egui::Grid::new("converter_grid")
            .num_columns(2)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                ui.label(txt("gui.converter.kind", "Quantity"));
                egui::ComboBox::from_id_source("conv_kind")
                    .selected_text(tr.t(kind.i18n_key()))
                    .show_ui(ui, |ui| {
                        for k in QuantityKind::ALL {
                            ui.selectable_value(&mut kind, k, tr.t(k.i18n_key()));
                        }
                    });
                ui.end_row();

                ui.label(txt("gui.converter.value", "Value"));
                ui.add(egui::DragValue::new(&mut self.converter.value).speed(0.1));
                ui.end_row();

                let units = self.converter.kind.unit_symbols();
                for (label, id, slot) in [
                    (txt("gui.converter.from", "From"), "conv_from", &mut self.converter.from),
                    (txt("gui.converter.to", "To"), "conv_to", &mut self.converter.to),
                ] {
                    ui.label(label);
                    egui::ComboBox::from_id_source(id)
                        .selected_text(slot.clone())
                        .show_ui(ui, |ui| {
                            for u in &units {
                                ui.selectable_value(slot, u.to_string(), *u);
                            }
                        });
                    ui.end_row();
                }
            });
        if kind != self.converter.kind {
            self.converter = ConverterState {
                value: self.converter.value,
                ..ConverterState::new(kind)
            };
        }

        ui.separator();
        let c = &self.converter;
        match conversion::convert(c.kind, c.value, &c.from, &c.to) {
            Ok(v) => ui.strong(format!("{} {} = {v:.6} {}", c.value, c.from, c.to)),
            Err(e) => ui.colored_label(ui.visuals().error_fg_color, e.to_string()),
        };
    }

    fn ui_about(&self, ui: &mut egui::Ui) {
        ui.heading(self.txt(
            "gui.about.app",
            "Offline calculator for small hydropower plant sizing",
        ));
        ui.label(self.tr.format(
            "gui.about.version",
            &[("version", env!("CARGO_PKG_VERSION").to_string())],
        ));
        ui.separator();
        ui.label(self.txt(
            "gui.about.hint",
            "Friction losses, efficiency curves and variable head are not modelled.",
        ));
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // 투명도 적용
        let mut style = (*ctx.style()).clone();
        style.visuals.window_fill = style.visuals.window_fill.linear_multiply(self.window_alpha);
        style.visuals.panel_fill = style.visuals.panel_fill.linear_multiply(self.window_alpha);
        ctx.set_style(style);

        // 매 프레임 현재 위젯 값으로 다시 계산한다.
        let evaluation = hydro::evaluate(&self.inputs, &self.config.fluid);

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(self.tr.t(i18n::keys::APP_TITLE));
                ui.separator();
                if ui
                    .button(self.txt("gui.top.converter", "Unit converter"))
                    .clicked()
                {
                    self.show_converter = true;
                }
                if ui.button(self.txt("gui.top.settings", "Settings")).clicked() {
                    self.show_settings = true;
                }
                let export = ui.add_enabled(
                    evaluation.is_ok(),
                    egui::Button::new(self.txt("gui.top.export", "Export report")),
                );
                if export.clicked() {
                    if let Ok(result) = &evaluation {
                        self.export_report(result);
                    }
                }
                if ui.button(self.txt("gui.top.about", "Help / About")).clicked() {
                    self.show_about = true;
                }
            });
            ui.small(self.txt("gui.caption", "Civil • Mechanical • Electrical Engineering"));
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.small(self.txt(
                    "gui.footer",
                    "Mini Hydro Plant Calculator • Input: Q (cusec), v (ft/s), H (m)",
                ));
                if let Some(msg) = &self.export_status {
                    ui.separator();
                    ui.small(msg.as_str());
                }
            });
        });

        let mut open = self.show_settings;
        egui::Window::new(self.txt("gui.settings.title", "Program Settings"))
            .collapsible(false)
            .resizable(true)
            .open(&mut open)
            .show(ctx, |ui| self.ui_settings(ui));
        self.show_settings = open;

        let mut open = self.show_converter;
        egui::Window::new(self.txt("gui.converter.title", "Unit converter"))
            .resizable(true)
            .open(&mut open)
            .show(ctx, |ui| self.ui_converter(ui));
        self.show_converter = open;

        let mut open = self.show_about;
        egui::Window::new(self.txt("gui.about.title", "Help / About"))
            .collapsible(false)
            .open(&mut open)
            .show(ctx, |ui| self.ui_about(ui));
        self.show_about = open;

        egui::SidePanel::left("inputs")
            .resizable(true)
            .min_width(200.0)
            .default_width(240.0)
            .show(ctx, |ui| self.ui_inputs(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| match &evaluation {
                    Ok(result) => self.ui_results(ui, result),
                    Err(err) => {
                        ui.colored_label(
                            ui.visuals().error_fg_color,
                            format!("{}: {err}", self.tr.t(i18n::keys::ERROR_INVALID_INPUT)),
                        );
                    }
                });
        });
    }
}
