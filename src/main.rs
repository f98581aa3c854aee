use gridnav::environment::Environment;
use gridnav::environments::grid_nav::{GridConfig, GridNav};
use gridnav::error::Result;
use gridnav::policies::random::RandomPolicy;
use gridnav::policy::Policy;

// Smoke driver: one random-policy episode on a 5x5 grid.
fn main() -> Result<()> {
    let mut env = GridNav::new(GridConfig {
        area_width: 5,
        area_height: 5,
        start_position: Some([0, 0]),
        max_steps: 10,
        ..GridConfig::default()
    })?;
    let mut policy = RandomPolicy::new();

    let mut obs = env.reset();
    let mut total_reward = 0.0;
    loop {
        let action = policy.select_action(&obs);
        let result = env.step(&action)?;
        println!(
            "action: {:?}, position: ({}, {}), reward: {}",
            action, result.next_state[0], result.next_state[1], result.reward
        );
        total_reward += result.reward;
        obs = result.next_state;
        if result.done {
            break;
        }
    }
    println!(
        "episode finished after {} steps, total reward {total_reward}",
        env.step_count()
    );
    Ok(())
}
