use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use steer::agent::{Agent, Triangle};
use steer::config::SimConfig;
use steer::input::{Command, Direction};
use steer::library::*;
use steer::simulation::Simulation;

const START: Triangle = [[0.0, 0.0], [40.0, -100.0], [-40.0, -100.0]];

fn default_sim() -> Simulation {
    Simulation::from_config(&SimConfig::default())
}

// ==================================================================================
// End-to-end ticks
// ==================================================================================

#[test]
fn idle_tick_changes_nothing() {
    let mut sim = default_sim();
    sim.tick();
    let agent = sim.agent();
    for (v, start) in agent.vertices().iter().zip(START.iter()) {
        assert_relative_eq!(v[0], start[0], epsilon = 1e-6);
        assert_relative_eq!(v[1], start[1], epsilon = 1e-6);
    }
    assert_eq!(agent.velocity(), [0.0, 0.0]);
    assert_eq!(agent.acceleration(), [0.0, 0.0]);
}

#[test]
fn single_up_press() {
    let mut sim = default_sim();
    sim.submit(Command::Thrust(Direction::Up));
    sim.tick();
    let agent = sim.agent();

    assert_relative_eq!(agent.velocity()[0], 0.0, epsilon = 1e-6);
    assert_relative_eq!(agent.velocity()[1], 0.045 * 0.9925, epsilon = 1e-6);
    assert_relative_eq!(agent.velocity()[1], 0.04466, epsilon = 1e-5);
    assert_relative_eq!(agent.acceleration()[1], 0.03375, epsilon = 1e-6);

    // already facing up, so the whole triangle just moves by the new velocity
    for (v, start) in agent.vertices().iter().zip(START.iter()) {
        assert_relative_eq!(v[0], start[0], epsilon = 1e-3);
        assert_relative_eq!(v[1], start[1] + 0.045, epsilon = 1e-3);
    }
}

#[test]
fn apex_leads_after_turning() {
    let mut sim = default_sim();
    sim.submit(Command::Thrust(Direction::Right));
    sim.tick();
    let [apex, right, left] = sim.agent().vertices();
    let axis = normalize(find_vector(midpoint(right, left), apex));
    assert_relative_eq!(axis[0], 1.0, epsilon = 1e-4);
    assert_relative_eq!(axis[1], 0.0, epsilon = 1e-3);
}

// ==================================================================================
// Damping
// ==================================================================================

#[test]
fn velocity_decays_without_input() {
    let mut agent = Agent::new(START);
    agent.set_velocity([1.2, -0.7]);
    let start = get_magnitude(agent.velocity());
    let mut last = start;
    for n in 1..=400 {
        agent.update();
        let speed = get_magnitude(agent.velocity());
        assert!(speed < last, "speed did not drop at tick {n}");
        assert_relative_eq!(speed, start * 0.9925f32.powi(n), max_relative = 1e-3);
        last = speed;
    }
}

#[test]
fn acceleration_decays_geometrically() {
    let mut agent = Agent::new(START);
    agent.apply_impulse([0.0, -0.045]);
    for n in 1..=20 {
        agent.update();
        assert_relative_eq!(agent.acceleration()[1], -0.045 * 0.75f32.powi(n), max_relative = 1e-4);
    }
}

#[test]
fn single_press_has_bounded_effect() {
    let mut sim = default_sim();
    sim.submit(Command::Thrust(Direction::Left));
    let mut peak = 0.0f32;
    for _ in 0..2000 {
        sim.tick();
        peak = peak.max(get_magnitude(sim.agent().velocity()));
    }
    // 0.045 / (1 - 0.75) is the total velocity a press can ever add
    assert!(peak < 0.18);
    assert!(get_magnitude(sim.agent().velocity()) < 1e-3);
}

// ==================================================================================
// Shape
// ==================================================================================

#[test]
fn random_steering_keeps_the_triangle_rigid() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut sim = default_sim();
    let before = sim.agent().side_lengths();
    let directions = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    for _ in 0..500 {
        if rng.random_bool(0.3) {
            let dir = directions[rng.random_range(0..directions.len())];
            sim.submit(Command::Thrust(dir));
        }
        sim.tick();
        let v = sim.agent().velocity();
        assert!(v[0].abs() <= 2.0 && v[1].abs() <= 2.0);
    }

    let after = sim.agent().side_lengths();
    for (b, a) in before.iter().zip(after.iter()) {
        assert_relative_eq!(b, a, max_relative = 1e-3);
    }
}

#[test]
fn resting_agent_does_not_drift() {
    let mut agent = Agent::new(START);
    for _ in 0..1000 {
        agent.update();
    }
    assert_eq!(agent.vertices(), START);
}
