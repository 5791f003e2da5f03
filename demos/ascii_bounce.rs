use fallsim::shapes::Shape;
use fallsim::{FallWorld, Material};

use std::io::{stdout, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{poll, read, Event, KeyCode, KeyEventKind},
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{disable_raw_mode, enable_raw_mode, size, Clear, ClearType},
    ExecutableCommand, QueueableCommand,
};

const WINDOW_WIDTH: f32 = 800.0;
const WINDOW_HEIGHT: f32 = 800.0;
const TICKS_PER_FRAME: u32 = 4; // ~120 Hz simulation, ~30 FPS redraw

// ASCII visualization of a single bouncing ball. The main thread owns the
// keyboard: R re-centers the ball through the shared reset signal, Q or Esc
// quits. A second thread owns the world and the drawing.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let shape = Shape::circle(15.0)?;
    let material = Material::new(1.7, 0.6)?;
    let world = FallWorld::new(shape, material, WINDOW_WIDTH, WINDOW_HEIGHT)?;

    let reset = world.reset_signal();
    let running = Arc::new(AtomicBool::new(true));

    enable_raw_mode()?;
    stdout().execute(Hide)?;

    // Simulation + render task
    let sim_running = running.clone();
    let sim = thread::spawn(move || {
        let mut world = world;
        let mut out = stdout();
        let frame = Duration::from_secs_f32(world.get_config().time_step) * TICKS_PER_FRAME;

        while sim_running.load(Ordering::Acquire) {
            for _ in 0..TICKS_PER_FRAME {
                world.step();
            }
            if draw_frame(&mut out, &world).is_err() {
                break;
            }
            thread::sleep(frame);
        }
    });

    // Input task
    while running.load(Ordering::Acquire) {
        if poll(Duration::from_millis(50))? {
            if let Event::Key(key) = read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('r') | KeyCode::Char('R') => reset.raise(),
                    KeyCode::Char('q') | KeyCode::Esc => {
                        running.store(false, Ordering::Release);
                    }
                    _ => {}
                }
            }
        }
    }

    sim.join().ok();

    stdout().execute(Show)?;
    disable_raw_mode()?;
    Ok(())
}

fn draw_frame(out: &mut impl Write, world: &FallWorld) -> std::io::Result<()> {
    let (cols, rows) = size()?;
    let cols = cols.max(20);
    let rows = rows.max(10);
    let floor_row = rows - 1;

    let body = world.get_body();
    let (x, y) = body.get_position();
    let (window_w, window_h) = world.get_window_size();

    // Map the center of the ball from window pixel space onto the grid,
    // keeping the floor on the bottom terminal row
    let cx = x + body.get_shape().half_width();
    let cy = y + body.get_shape().half_height();
    let gx = (cx / window_w * (cols - 1) as f32) as u16;
    let gy = ((cy / window_h * (floor_row - 1) as f32) as u16).min(floor_row - 1);

    out.queue(Clear(ClearType::All))?;
    out.queue(MoveTo(0, 0))?;
    out.queue(Print(format!(
        "tick {:>7}  y={:>6.1}  v={:>6.3}  {:?}   [R] reset  [Q] quit",
        world.get_ticks(),
        y,
        body.get_velocity(),
        body.phase(),
    )))?;

    out.queue(MoveTo(0, floor_row))?;
    out.queue(Print("=".repeat(cols as usize)))?;

    out.queue(SetForegroundColor(Color::White))?;
    out.queue(MoveTo(gx, gy))?;
    out.queue(Print('●'))?;
    out.queue(ResetColor)?;

    out.flush()
}
