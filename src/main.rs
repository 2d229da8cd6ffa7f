//! Headless demo: drives the menu background and chat overlay through a
//! scripted session and logs the resulting draw stream.

use std::cell::Cell;
use std::rc::Rc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use overlay_ui::config::OverlaySettings;
use overlay_ui::engine::{ChatSink, InputPoll, SceneRoot, Session, Viewport};
use overlay_ui::fragment::{BackgroundMenuPanel, ChatOverlay, Fragment};
use overlay_ui::render::HeadlessRenderer;

#[derive(Parser)]
#[command(about = "Run the overlay fragments headlessly for a scripted session")]
struct Args {
    /// Number of frames to simulate.
    #[arg(long, default_value_t = 240)]
    frames: u32,
    /// Viewport width in pixels.
    #[arg(long, default_value_t = 1280.0)]
    width: f32,
    /// Viewport height in pixels.
    #[arg(long, default_value_t = 720.0)]
    height: f32,
}

#[derive(Default)]
struct DemoSession {
    in_menu: Cell<bool>,
    net_active: Cell<bool>,
}

impl Session for DemoSession {
    fn in_menu(&self) -> bool {
        self.in_menu.get()
    }

    fn net_active(&self) -> bool {
        self.net_active.get()
    }
}

struct DemoNet;

impl ChatSink for DemoNet {
    fn send_chat_message(&self, text: &str) {
        tracing::info!(target: "net", "sending chat message: {text}");
    }
}

/// Key taps scheduled for specific frames.
struct ScriptedInput {
    taps: Vec<(u32, &'static str)>,
    frame: u32,
}

impl ScriptedInput {
    fn new(taps: Vec<(u32, &'static str)>) -> Self {
        Self { taps, frame: 0 }
    }

    fn set_frame(&mut self, frame: u32) {
        self.frame = frame;
    }
}

impl InputPoll for ScriptedInput {
    fn key_tap(&mut self, key: &str) -> bool {
        self.taps
            .iter()
            .any(|(frame, k)| *frame == self.frame && *k == key)
    }
}

struct DemoScene;

impl SceneRoot for DemoScene {
    fn add(&mut self, name: &'static str) {
        tracing::debug!("scene attach: {name}");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let settings = OverlaySettings::load();

    let session = Rc::new(DemoSession::default());
    session.in_menu.set(true);

    let mut background = BackgroundMenuPanel::new(session.clone());
    let mut chat = ChatOverlay::new(&settings, session.clone(), Rc::new(DemoNet));

    let mut scene = DemoScene;
    background.attach_to(&mut scene);
    chat.attach_to(&mut scene);

    let mut renderer = HeadlessRenderer::new();
    renderer.add_region("background", 512.0, 256.0);
    renderer.add_region("logotext", 384.0, 96.0);

    let mut input = ScriptedInput::new(vec![(40, "ENTER"), (70, "ENTER")]);
    let viewport = Viewport::new(args.width, args.height, 1.0);

    for frame in 0..args.frames {
        input.set_frame(frame);

        // scripted session: join a game, chat a little, lose the connection
        match frame {
            10 => {
                session.in_menu.set(false);
                session.net_active.set(true);
                chat.add_message("connected to server", None);
            }
            20 => chat.add_message("hi all", Some("Bob")),
            50 => chat.field().insert_str("hello there"),
            200 => session.net_active.set(false),
            _ => {}
        }

        background.update(&mut input, 1.0);
        chat.update(&mut input, 1.0);

        renderer.begin_frame();
        if let Err(e) = background.draw(&mut renderer, viewport) {
            tracing::error!("background draw failed: {e}");
        }
        if let Err(e) = chat.draw(&mut renderer, viewport) {
            tracing::error!("chat draw failed: {e}");
        }

        if frame % 60 == 0 {
            tracing::info!(
                frame,
                commands = renderer.commands().len(),
                chat_open = chat.is_open(),
                messages = chat.message_count(),
                "frame rendered"
            );
        }
    }

    tracing::info!("demo finished after {} frames", args.frames);
}
