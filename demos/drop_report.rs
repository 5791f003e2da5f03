use fallsim::shapes::Shape;
use fallsim::{BodyEvent, FallWorld, Material};

// Headless run of the bouncing-ball scene that prints one line per bounce
// and a summary once the ball comes to rest.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let shape = Shape::circle(15.0)?;
    let material = Material::new(1.7, 0.6)?;
    let mut world = FallWorld::new(shape, material, 800.0, 800.0)?;

    println!(
        "dropping a {} (weight {} kg, restitution {}) from y={:.1}",
        world.get_body().get_shape().shape_type(),
        world.get_body().get_material().weight,
        world.get_body().get_material().restitution,
        world.get_body().get_position().1,
    );
    println!(
        "terminal velocity: {:.3} px/tick",
        world.get_body().get_terminal_velocity()
    );

    let mut bounces = 0;
    loop {
        world.step();

        match world.next_event() {
            Some(BodyEvent::Bounced { impact_speed }) => {
                bounces += 1;
                println!(
                    "bounce {:>2} at tick {:>6}: impact {:.3} -> rebound {:.3}",
                    bounces,
                    world.get_ticks(),
                    impact_speed,
                    world.get_body().get_velocity(),
                );
            }
            Some(BodyEvent::Stalled) => {
                println!(
                    "at rest on the floor after {} bounces, {} ticks ({:.2} s of simulated time)",
                    bounces,
                    world.get_ticks(),
                    world.get_time(),
                );
                break;
            }
            _ => {}
        }

        if world.get_ticks() > 1_000_000 {
            eprintln!("gave up: no stall within 1M ticks");
            break;
        }
    }

    Ok(())
}
