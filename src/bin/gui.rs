use std::path::PathBuf;

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPlugin, EguiPrimaryContextPass};
use clap::Parser;
use sumcross::hud::{
	INSTRUCTIONS, MAX_SELECT_LABEL, RESET_LABEL, ROLL_LABEL, START_LABEL, TITLE,
};
use sumcross::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

// ---------- Constants ----------
const TILE_SIZE: f32 = 44.0;
const HEADER_FONT_SIZE: f32 = 20.0;
const SELECTED_COLOR: egui::Color32 = egui::Color32::from_rgb(0x4e, 0xcd, 0xc4);
const UNSELECTED_COLOR: egui::Color32 = egui::Color32::from_rgb(0xbb, 0xbb, 0xbb);
const CROSSED_COLOR: egui::Color32 = egui::Color32::from_rgb(0xff, 0x66, 0x66);

#[derive(Parser, Debug)]
#[command(name = "sumcross-gui", about = "Cross out tiles matching your dice sums")]
struct Args {
	/// JSON game config
	#[arg(long)]
	config: Option<PathBuf>,
	/// Fixed RNG seed, overrides the config file
	#[arg(long)]
	seed: Option<u64>,
}

// ---------- Resources ----------
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ToastTone {
	Info,
	Success,
	Warning,
}

#[derive(Resource, Default)]
struct UiState {
	toast: Option<(String, ToastTone, f32)>, // (message, tone, remaining_seconds)
	start_warning: Option<String>, // kept until the next successful start
}

#[derive(Resource)]
struct GameSession {
	game: Game,
}

// ---------- Entry ----------
fn main() -> Result<(), ConfigError> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.init();

	let args = Args::parse();
	let mut config = match &args.config {
		Some(path) => GameConfig::load(path).inspect_err(|e| error!(error = %e, "bad config"))?,
		None => GameConfig::default(),
	};
	if args.seed.is_some() {
		config.seed = args.seed;
	}
	info!(?config, "starting sumcross");

	App::new()
		.add_plugins(DefaultPlugins.set(WindowPlugin {
			primary_window: Some(Window {
				title: TITLE.to_string(),
				resolution: (1280, 800).into(),
				..Default::default()
			}),
			..Default::default()
		}))
		.add_plugins(EguiPlugin::default())
		// Resources
		.insert_resource(UiState::default())
		.insert_resource(GameSession { game: Game::new(config) })
		// Setup
		.add_systems(Startup, setup_camera)
		// Frame systems
		.add_systems(Update, (collect_notifications, update_toast_timer).chain())
		.add_systems(EguiPrimaryContextPass, draw_ui)
		.run();
	Ok(())
}

// ---------- Setup ----------
fn setup_camera(mut commands: Commands) {
	commands.spawn(Camera2d);
}

// ---------- Utilities ----------
fn tile_fill(state: CellState) -> egui::Color32 {
	match state {
		CellState::Unselected => UNSELECTED_COLOR,
		CellState::Selected | CellState::Uncrossed => SELECTED_COLOR,
		CellState::Crossed => CROSSED_COLOR,
	}
}

fn tone_for(kind: NotificationKind) -> ToastTone {
	match kind {
		NotificationKind::DiceRolled => ToastTone::Info,
		NotificationKind::Victory => ToastTone::Success,
		NotificationKind::CapacityWarning
		| NotificationKind::SelectionIncomplete
		| NotificationKind::Rejected => ToastTone::Warning,
	}
}

fn tone_color(tone: ToastTone) -> egui::Color32 {
	match tone {
		ToastTone::Info => egui::Color32::LIGHT_BLUE,
		ToastTone::Success => egui::Color32::LIGHT_GREEN,
		ToastTone::Warning => egui::Color32::YELLOW,
	}
}

// The newest notification wins the toast slot.
fn drain_into_toast(game: &mut Game, ui: &mut UiState) {
	if let Some(n) = game.take_notifications().pop() {
		ui.toast = Some((n.text, tone_for(n.kind), n.display_secs));
	}
}

// A failed start leaves its warning up; a successful one clears it.
fn press_start(game: &mut Game, ui: &mut UiState) {
	match game.start_game() {
		Ok(_) => ui.start_warning = None,
		Err(e @ GameError::SelectionIncomplete { .. }) => ui.start_warning = Some(e.to_string()),
		Err(_) => {}
	}
}

fn tick_toast(ui: &mut UiState, dt: f32) {
	if let Some((_, _, ref mut remaining)) = ui.toast {
		*remaining -= dt;
		if *remaining <= 0.0 {
			ui.toast = None;
		}
	}
}

// ---------- Systems: Notifications ----------
fn collect_notifications(mut session: ResMut<GameSession>, mut ui: ResMut<UiState>) {
	drain_into_toast(&mut session.game, &mut ui);
}

fn update_toast_timer(time: Res<Time>, mut ui: ResMut<UiState>) {
	tick_toast(&mut ui, time.delta_secs());
}

// ---------- Systems: UI ----------
fn draw_ui(mut egui_ctx: EguiContexts, mut ui_state: ResMut<UiState>, mut session: ResMut<GameSession>) {
	let Ok(ctx) = egui_ctx.ctx_mut() else {
		return;
	};
	let game = &mut session.game;
	let ui_state = &mut *ui_state;

	egui::TopBottomPanel::top("top_hud").show(&*ctx, |ui_top| {
		ui_top.heading(TITLE);
		for line in INSTRUCTIONS {
			ui_top.label(format!("• {line}"));
		}
		ui_top.separator();
		ui_top.horizontal(|ui_row| {
			let controls = controls(game);
			let mut n = game.max_select();
			let slider = egui::Slider::new(&mut n, 1..=30).text(MAX_SELECT_LABEL);
			if ui_row.add_enabled(controls.slider_enabled, slider).changed() {
				let _ = game.set_max_select(n);
			}
			ui_row.separator();
			if controls.show_start && ui_row.button(START_LABEL).clicked() {
				press_start(game, ui_state);
			}
			if controls.show_roll && ui_row.button(ROLL_LABEL).clicked() {
				let _ = game.roll_dice();
			}
			if controls.show_reset && ui_row.button(RESET_LABEL).clicked() {
				let _ = game.reset();
			}
			ui_row.separator();
			ui_row.label(format_status(game));
			if let Some(dice) = format_dice(game) {
				ui_row.separator();
				ui_row.label(dice);
			}
		});
		if let Some(banner) = hud::victory_banner(game) {
			ui_top.colored_label(tone_color(ToastTone::Success), banner);
		}
		if let Some(warning) = &ui_state.start_warning {
			ui_top.colored_label(tone_color(ToastTone::Warning), warning);
		}
		if let Some((ref msg, tone, _)) = ui_state.toast {
			ui_top.colored_label(tone_color(tone), msg);
		}
	});

	egui::CentralPanel::default().show(&*ctx, |ui_center| {
		egui::ScrollArea::both().show(ui_center, |ui_scroll| {
			egui::Grid::new("tile_grid").num_columns(grid::COLUMNS).spacing([6.0, 6.0]).show(ui_scroll, |ui_grid| {
				for number in grid::column_headers() {
					ui_grid.add_sized(
						[TILE_SIZE, TILE_SIZE * 0.6],
						egui::Label::new(egui::RichText::new(number.to_string()).size(HEADER_FONT_SIZE).strong()),
					);
				}
				ui_grid.end_row();
				for row in grid_rows(game) {
					for cell in row {
						let Some(view) = cell else {
							ui_grid.add_sized([TILE_SIZE, TILE_SIZE], egui::Label::new(""));
							continue;
						};
						let text = egui::RichText::new(&view.label)
							.size(HEADER_FONT_SIZE)
							.strong()
							.color(egui::Color32::BLACK);
						let button = egui::Button::new(text).fill(tile_fill(view.state));
						if ui_grid.add_sized([TILE_SIZE, TILE_SIZE], button).clicked() {
							let _ = game.click(view.tile);
						}
					}
					ui_grid.end_row();
				}
			});
		});
	});
}
