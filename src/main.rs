// src/main.rs
use log::{error, info, warn};
use nannou::prelude::*;
use nannou::winit::event::WindowEvent;
use nannou_egui::Egui;

use cubeclock::{
    animation::{FlipAnimator, TransitionTiming},
    config::*,
    controllers::{draw_debug_panel, ClockReadout, InputController, OscCommand, OscController},
    draw::draw_cubes,
    effects::{shared_params, SharedParams},
    models::CellStates,
    services::{clock_service::parse_timezone, ClockError, ZonedClock},
    views::{CameraRig, CubeScene, Lighting},
};

struct Model {
    config: Config,

    // Core components:
    animator: FlipAnimator<ZonedClock>,
    cells: CellStates,
    params: SharedParams,
    timezone: String,

    // Scene:
    scene: CubeScene,
    camera: CameraRig,
    lighting: Lighting,
    background: Rgb<f32>,

    // Input & comms:
    input: InputController,
    osc_controller: Option<OscController>,
    egui: Egui,

    // Clock text
    clock: ZonedClock,
    date_text: String,
    time_text: String,
    last_error: Option<ClockError>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    nannou::app(model).update(update).run();
}

fn load_config() -> Config {
    match Config::load() {
        Ok(config) => config,
        Err(err) if matches!(err.downcast_ref::<ConfigError>(), Some(ConfigError::NotFound)) => {
            warn!("{}, using built-in defaults", err);
            Config::default()
        }
        Err(err) => panic!("Failed to load config file: {}", err),
    }
}

fn model(app: &App) -> Model {
    let config = load_config();

    let window_id = app
        .new_window()
        .title(config.window.title.clone())
        .size(config.window.width, config.window.height)
        .view(view)
        .key_pressed(key_pressed)
        .key_released(key_released)
        .mouse_wheel(mouse_wheel)
        .raw_event(raw_window_event)
        .build()
        .expect("Failed to build window");
    let window = app.window(window_id).expect("Window closed during setup");
    let egui = Egui::from_window(&window);

    // Create OSC controller
    let osc_controller = if config.osc.enabled {
        match OscController::new(config.osc.rx_port) {
            Ok(controller) => Some(controller),
            Err(err) => {
                warn!("OSC disabled: {}", err);
                None
            }
        }
    } else {
        None
    };

    let params = shared_params(config.animation_params());
    let animator = FlipAnimator::new(
        ZonedClock::new(),
        params.clone(),
        TransitionTiming::from(&config.animation),
    );
    let background = config.background_color();

    info!(
        "cubeclock started in {}",
        config.timezone_label(&config.clock.default_timezone)
    );

    Model {
        timezone: config.clock.default_timezone.clone(),
        animator,
        cells: CellStates::new(),
        params,

        scene: CubeScene::from_config(&config.scene),
        camera: CameraRig::from_config(&config.camera),
        lighting: Lighting::from_config(&config.scene),
        background,

        input: InputController::new(&config.input),
        osc_controller,
        egui,

        clock: ZonedClock::new(),
        date_text: String::new(),
        time_text: String::new(),
        last_error: None,

        config,
    }
}

fn update(app: &App, model: &mut Model, update: Update) {
    let dt = update.since_last.as_secs_f32();

    // Process OSC messages
    if let Some(osc_controller) = model.osc_controller.as_mut() {
        osc_controller.process_messages();
    }
    launch_commands(model);

    model.input.update(&mut model.scene.transform, dt);

    /********************* Main update of the cube grid **********************/
    match model
        .animator
        .update(app.time, &model.timezone, &mut model.cells)
    {
        Ok(_) => model.last_error = None,
        Err(err) => {
            // keep drawing the last good frame, report each new failure once
            if model.last_error.as_ref() != Some(&err) {
                error!("Clock update failed: {}", err);
            }
            model.last_error = Some(err);
        }
    }
    /*************************************************************************/

    if let (Ok(date), Ok(time)) = (
        model.clock.format_date(&model.timezone),
        model.clock.format_time(&model.timezone),
    ) {
        model.date_text = date;
        model.time_text = time;
    }

    // Debug panel
    model.egui.set_elapsed_time(update.since_start);
    let ctx = model.egui.begin_frame();
    let readout = ClockReadout {
        timezone: &model.timezone,
        label: model.config.timezone_label(&model.timezone),
        date: &model.date_text,
        time: &model.time_text,
    };
    let result = draw_debug_panel(
        &ctx,
        &mut model.camera,
        &model.params,
        &model.config.clock.timezones,
        &readout,
    );
    drop(ctx);

    if let Some(timezone) = result.set_timezone {
        set_timezone(model, timezone);
    }
}

fn launch_commands(model: &mut Model) {
    let commands = match model.osc_controller.as_mut() {
        Some(osc_controller) => osc_controller.take_commands(),
        None => return,
    };

    for command in commands {
        match command {
            OscCommand::SetTimezone { timezone } => set_timezone(model, timezone),
            OscCommand::SetPeakY { value } => model.params.borrow_mut().peak_y = value,
            OscCommand::SetPeakScale { value } => model.params.borrow_mut().peak_scale = value,
            OscCommand::SetPeakColor { r, g, b } => {
                model.params.borrow_mut().peak_color = rgb(r, g, b);
            }
            OscCommand::SetBrightness { value } => model.params.borrow_mut().brightness = value,
            OscCommand::SetCameraPosition { x, y, z } => {
                model.camera.position = vec3(x, y, z);
            }
            OscCommand::SetCameraFov { fov } => {
                model.camera.set_fov(fov);
            }
            OscCommand::SetGroupRotation { x, y } => {
                model.scene.transform.rotation_x = x;
                model.scene.transform.rotation_y = y;
            }
        }
    }
}

fn set_timezone(model: &mut Model, timezone: String) {
    match parse_timezone(&timezone) {
        Ok(_) => {
            info!("Timezone set to {}", model.config.timezone_label(&timezone));
            model.timezone = timezone;
        }
        Err(err) => error!("{}", err),
    }
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(model.background);

    draw_cubes(
        &draw,
        &model.scene,
        &model.camera,
        &model.lighting,
        &model.cells,
        app.window_rect().wh(),
    );

    if let Err(err) = draw.to_frame(app, &frame) {
        error!("Failed to draw frame: {:?}", err);
    }
    if let Err(err) = model.egui.draw_to_frame(&frame) {
        error!("Failed to draw debug panel: {:?}", err);
    }
}

fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    if model.egui.ctx().wants_keyboard_input() {
        return;
    }
    model.input.key_pressed(key);
}

fn key_released(_app: &App, model: &mut Model, key: Key) {
    model.input.key_released(key);
}

fn mouse_wheel(_app: &App, model: &mut Model, delta: MouseScrollDelta, _phase: TouchPhase) {
    if model.egui.ctx().wants_pointer_input() {
        return;
    }
    model.input.mouse_wheel(&mut model.scene.transform, delta);
}

fn raw_window_event(_app: &App, model: &mut Model, event: &WindowEvent) {
    model.egui.handle_raw_event(event);

    if let WindowEvent::Focused(false) = event {
        model.input.release_all();
    }
}
